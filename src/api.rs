use crate::config::Config;
use crate::constants::{MAX_OUTPUT_TOKENS, MESSAGES_API_VERSION};
use crate::prompt::SYSTEM_PROMPT;
use crate::types::ApiError;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// One segment of the model's structured reply. Only text segments carry the
/// corrected sentence; anything else is skipped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Unknown,
}

#[async_trait]
pub trait CorrectionService: Send + Sync {
    /// Send one input sentence for correction and return the corrected text.
    async fn correct(&self, text: &str) -> Result<String, ApiError>;
}

pub struct MessagesClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl MessagesClient {
    pub fn new(config: &Config) -> Self {
        MessagesClient {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl CorrectionService for MessagesClient {
    async fn correct(&self, text: &str) -> Result<String, ApiError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_OUTPUT_TOKENS,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: text,
            }],
        };

        let request_url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        debug!("POST {} model={}", request_url, self.model);

        let response = self
            .client
            .post(&request_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", MESSAGES_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(format!("Request timed out: {}", e))
                } else if e.is_connect() {
                    ApiError::Network(format!("Failed to connect: {}", e))
                } else {
                    ApiError::Other(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api(format!("status {}: {}", status, body)));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedShape(format!("Failed to parse response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Unknown => None,
            })
            .ok_or_else(|| {
                ApiError::UnexpectedShape("no text segment in response content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_API_KEY, DEFAULT_MODEL};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base: &str) -> MessagesClient {
        MessagesClient::new(&Config {
            api_base: base.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": text}]
        }))
    }

    #[tokio::test]
    async fn sends_the_input_verbatim_with_fixed_system_and_token_cap() {
        let mock_server = MockServer::start().await;
        let input = "这个问题我在想想你先别急";

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", DEFAULT_API_KEY))
            .and(body_partial_json(json!({
                "model": DEFAULT_MODEL,
                "max_tokens": 1024,
                "system": SYSTEM_PROMPT,
                "messages": [{"role": "user", "content": input}]
            })))
            .respond_with(text_response("这个问题我再想想，你先别急。"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = test_client(&mock_server.uri()).correct(input).await;
        assert_eq!(result.unwrap(), "这个问题我再想想，你先别急。");
    }

    #[tokio::test]
    async fn system_prompt_is_identical_across_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_partial_json(json!({"system": SYSTEM_PROMPT})))
            .respond_with(text_response("好的。"))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        for input in ["第一句", "第二句", "第三句"] {
            client.correct(input).await.unwrap();
        }
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(text_response("好的。"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&format!("{}/", mock_server.uri()));
        assert!(client.correct("随便一句").await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server.uri())
            .correct("一句话")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn empty_content_is_an_unexpected_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server.uri())
            .correct("一句话")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn non_text_only_content_is_an_unexpected_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "tool_use", "id": "t1", "name": "noop", "input": {}}]
            })))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server.uri())
            .correct("一句话")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn first_text_segment_wins_even_after_non_text_segments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    {"type": "thinking", "thinking": "..."},
                    {"type": "text", "text": "修正后的句子。"},
                    {"type": "text", "text": "不该被读到的第二段。"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let result = test_client(&mock_server.uri()).correct("一句话").await;
        assert_eq!(result.unwrap(), "修正后的句子。");
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        // Port 1 is never listening.
        let err = test_client("http://127.0.0.1:1")
            .correct("一句话")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got: {:?}", err);
    }
}
