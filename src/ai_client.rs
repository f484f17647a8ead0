// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::Completer;
use crate::config::{AiProvider, AiSettings};
use crate::error::{LedgerError, LedgerResult};
use crate::utils::http_client;

/// Text-completion client for the configured provider.
pub struct AiClient {
    settings: AiSettings,
    client: Client,
}

impl AiClient {
    pub fn new(settings: AiSettings) -> LedgerResult<Self> {
        if settings.provider.requires_api_key() && settings.api_key.trim().is_empty() {
            return Err(LedgerError::Config(format!(
                "An API key is required for {} (set SMARTLEDGER_AI_API_KEY)",
                settings.provider.as_str()
            )));
        }
        let client = http_client(settings.timeout)?;
        Ok(Self { settings, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    fn complete_gemini(&self, prompt: &str) -> LedgerResult<String> {
        #[derive(Serialize)]
        struct Part<'a> {
            text: &'a str,
        }
        #[derive(Serialize)]
        struct Content<'a> {
            parts: Vec<Part<'a>>,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ThinkingConfig {
            thinking_budget: u32,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GenerationConfig {
            thinking_config: ThinkingConfig,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GeminiRequest<'a> {
            contents: Vec<Content<'a>>,
            generation_config: GenerationConfig,
        }

        #[derive(Deserialize)]
        struct GeminiResponse {
            #[serde(default)]
            candidates: Vec<Candidate>,
        }
        #[derive(Deserialize)]
        struct Candidate {
            content: Option<CandidateContent>,
        }
        #[derive(Deserialize)]
        struct CandidateContent {
            #[serde(default)]
            parts: Vec<CandidatePart>,
        }
        #[derive(Deserialize)]
        struct CandidatePart {
            text: Option<String>,
        }

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };
        let url = self.url(&format!(
            "/v1beta/models/{}:generateContent",
            self.settings.model
        ));

        debug!(model = %self.settings.model, "Sending analysis request to Gemini");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&request)
            .send()?;
        let parsed: GeminiResponse = check_status(response, "Gemini")?.json()?;

        Ok(parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default())
    }

    fn complete_openai(&self, prompt: &str) -> LedgerResult<String> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct OpenAiRequest<'a> {
            model: &'a str,
            messages: Vec<Message<'a>>,
        }

        #[derive(Deserialize)]
        struct OpenAiResponse {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMessage,
        }
        #[derive(Deserialize)]
        struct ChoiceMessage {
            content: Option<String>,
        }

        let request = OpenAiRequest {
            model: &self.settings.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.settings.model, "Sending analysis request to OpenAI-compatible API");
        let response = self
            .client
            .post(self.url("/chat/completions"))
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()?;
        let parsed: OpenAiResponse = check_status(response, "OpenAI API")?.json()?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }

    fn complete_ollama(&self, prompt: &str) -> LedgerResult<String> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
            stream: bool,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            response: String,
        }

        let request = OllamaRequest {
            model: &self.settings.model,
            prompt,
            stream: false,
        };

        debug!(model = %self.settings.model, "Sending analysis request to Ollama");
        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&request)
            .send()?;
        let parsed: OllamaResponse = check_status(response, "Ollama")?.json()?;
        Ok(parsed.response)
    }

    fn complete_anthropic(&self, prompt: &str) -> LedgerResult<String> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct AnthropicRequest<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Message<'a>>,
        }

        #[derive(Deserialize)]
        struct AnthropicResponse {
            content: Vec<ContentBlock>,
        }
        #[derive(Deserialize)]
        struct ContentBlock {
            text: Option<String>,
        }

        let request = AnthropicRequest {
            model: &self.settings.model,
            max_tokens: 2048,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.settings.model, "Sending analysis request to Anthropic");
        let response = self
            .client
            .post(self.url("/v1/messages"))
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()?;
        let parsed: AnthropicResponse = check_status(response, "Anthropic API")?.json()?;

        Ok(parsed
            .content
            .into_iter()
            .filter_map(|b| b.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

fn check_status(response: Response, provider: &str) -> LedgerResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().unwrap_or_default();
    Err(LedgerError::Provider(format!(
        "{} returned {}: {}",
        provider, status, body
    )))
}

impl Completer for AiClient {
    fn complete(&self, prompt: &str) -> LedgerResult<String> {
        match self.settings.provider {
            AiProvider::Gemini => self.complete_gemini(prompt),
            AiProvider::OpenAi => self.complete_openai(prompt),
            AiProvider::Ollama => self.complete_ollama(prompt),
            AiProvider::Anthropic => self.complete_anthropic(prompt),
        }
    }
}
