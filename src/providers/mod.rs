/*!
 * Provider implementations for the LLM services used by textpulse.
 *
 * Both translation and sentiment scoring are delegated to a chat-style LLM:
 * - Ollama: Local LLM server
 * - OpenAI: OpenAI API, also used for OpenAI-compatible servers like LM Studio
 * - Anthropic: Anthropic API integration
 * - Mock: scripted provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use url::Url;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::errors::ProviderError;

/// A single system + user exchange sent to a provider
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Model name
    pub model: String,
    /// System message that sets the task
    pub system: String,
    /// The user content (text to translate or score)
    pub user: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the translator and the scorer.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Build a provider-specific request from a prompt
    fn build_request(&self, prompt: &Prompt) -> Self::Request;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract text from the provider response
    fn extract_text(response: &Self::Response) -> String;

    /// Whether generation stopped because it hit the token limit
    fn is_truncated(response: &Self::Response) -> bool;
}

/// Text generated for a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// The reply was cut off at `max_tokens`
    pub truncated: bool,
}

/// Send a prompt through any provider and return the generated text
pub async fn run_prompt<P: Provider>(provider: &P, prompt: &Prompt) -> Result<Completion, ProviderError> {
    let request = provider.build_request(prompt);
    let response = provider.complete(request).await?;
    Ok(Completion {
        text: P::extract_text(&response),
        truncated: P::is_truncated(&response),
    })
}

/// Concrete provider selected at runtime from configuration
#[derive(Debug)]
pub enum ProviderClient {
    Ollama(ollama::Ollama),
    OpenAI(openai::OpenAI),
    Anthropic(anthropic::Anthropic),
    Mock(mock::MockProvider),
}

impl ProviderClient {
    /// Build the client for the active provider of a translation config
    pub fn from_config(config: &TranslationConfig) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(config.get_timeout_secs());
        let client = match config.provider {
            TranslationProvider::Ollama => {
                let (host, port) = parse_endpoint(&config.get_endpoint())?;
                ProviderClient::Ollama(ollama::Ollama::new(host, port, timeout))
            }
            TranslationProvider::OpenAI => {
                ProviderClient::OpenAI(openai::OpenAI::new(config.get_api_key(), config.get_endpoint(), timeout))
            }
            TranslationProvider::LMStudio => {
                // LM Studio accepts any key
                let api_key = {
                    let k = config.get_api_key();
                    if k.is_empty() { "lm-studio".to_string() } else { k }
                };
                ProviderClient::OpenAI(openai::OpenAI::new(api_key, config.get_endpoint(), timeout))
            }
            TranslationProvider::Anthropic => {
                ProviderClient::Anthropic(anthropic::Anthropic::new(config.get_api_key(), config.get_endpoint(), timeout))
            }
        };
        Ok(client)
    }

    /// Send a prompt and return the generated text
    pub async fn prompt(&self, prompt: &Prompt) -> Result<Completion, ProviderError> {
        match self {
            ProviderClient::Ollama(client) => run_prompt(client, prompt).await,
            ProviderClient::OpenAI(client) => run_prompt(client, prompt).await,
            ProviderClient::Anthropic(client) => run_prompt(client, prompt).await,
            ProviderClient::Mock(client) => run_prompt(client, prompt).await,
        }
    }

    /// Check that the provider is reachable before running an analysis
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match self {
            ProviderClient::Ollama(client) => client.test_connection().await,
            ProviderClient::OpenAI(client) => client.test_connection().await,
            ProviderClient::Anthropic(client) => client.test_connection().await,
            ProviderClient::Mock(client) => client.test_connection().await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderClient::Ollama(_) => "Ollama",
            ProviderClient::OpenAI(_) => "OpenAI-compatible",
            ProviderClient::Anthropic(_) => "Anthropic",
            ProviderClient::Mock(_) => "Mock",
        }
    }
}

/// Parse an endpoint string into host and port
pub fn parse_endpoint(endpoint: &str) -> Result<(String, u16), ProviderError> {
    if endpoint.is_empty() {
        return Err(ProviderError::ConnectionError("Endpoint cannot be empty".to_string()));
    }

    let raw = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };
    let url = Url::parse(&raw)
        .map_err(|e| ProviderError::ConnectionError(format!("Invalid endpoint {}: {}", endpoint, e)))?;

    let host = url.host_str()
        .ok_or_else(|| ProviderError::ConnectionError(format!("Invalid host in endpoint: {}", endpoint)))?;
    let host = format!("{}://{}", url.scheme(), host);

    let port = url.port().unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    Ok((host, port))
}

pub mod ollama;
pub mod openai;
pub mod anthropic;
pub mod mock;
