// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Gemini,
    OpenAi,
    Ollama,
    Anthropic,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Ollama => "ollama",
            Self::Anthropic => "anthropic",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-3-flash-preview",
            Self::OpenAi => "gpt-4o-mini",
            Self::Ollama => "llama3.2",
            Self::Anthropic => "claude-3-5-haiku-latest",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Ollama => "http://localhost:11434",
            Self::Anthropic => "https://api.anthropic.com",
        }
    }

    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama)
    }
}

impl FromStr for AiProvider {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(LedgerError::Config(format!(
                "Unknown AI provider '{}' (use gemini|openai|ollama|anthropic)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub provider: AiProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug)]
pub struct Config {
    /// Overrides the platform data dir when set.
    pub database_path: Option<PathBuf>,
    /// Only `analyze` needs these, so a bad value is held here and reported
    /// there instead of failing every command.
    pub ai: LedgerResult<AiSettings>,
    pub min_analysis_latency: Duration,
}

pub const DEFAULT_MIN_LATENCY_MS: u64 = 1000;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let latency = match non_empty("SMARTLEDGER_AI_MIN_LATENCY_MS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| {
                    LedgerError::Config(format!(
                        "SMARTLEDGER_AI_MIN_LATENCY_MS must be a whole number of milliseconds, got '{}'",
                        v
                    ))
                }),
            None => Ok(Duration::from_millis(DEFAULT_MIN_LATENCY_MS)),
        };
        if let Err(e) = &latency {
            warn!(error = %e, "Using the default analysis latency");
        }

        Self {
            database_path: non_empty("SMARTLEDGER_DATABASE_PATH").map(PathBuf::from),
            min_analysis_latency: latency
                .as_ref()
                .copied()
                .unwrap_or(Duration::from_millis(DEFAULT_MIN_LATENCY_MS)),
            ai: latency.and_then(|_| ai_settings(&non_empty)),
        }
    }
}

fn ai_settings(non_empty: &dyn Fn(&str) -> Option<String>) -> LedgerResult<AiSettings> {
    let provider = match non_empty("SMARTLEDGER_AI_PROVIDER") {
        Some(p) => p.parse()?,
        None => AiProvider::Gemini,
    };
    let api_key = non_empty("SMARTLEDGER_AI_API_KEY")
        .or_else(|| non_empty("GEMINI_API_KEY"))
        .or_else(|| non_empty("API_KEY"))
        .unwrap_or_default();

    Ok(AiSettings {
        provider,
        api_key,
        model: non_empty("SMARTLEDGER_AI_MODEL")
            .unwrap_or_else(|| provider.default_model().to_string()),
        base_url: non_empty("SMARTLEDGER_AI_BASE_URL")
            .unwrap_or_else(|| provider.default_base_url().to_string()),
        timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
    })
}
