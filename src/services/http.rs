// src/services/http.rs
// reqwest adapter for the transcriptor backend

use super::{Backend, ServiceError, SummarizeResponse, TranscribeResponse, TranslateResponse};
use crate::config::AppConfig;
use crate::languages::Language;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const TRANSCRIBE_PATH: &str = "/transcribe";
const SUMMARIZE_PATH: &str = "/summarize/";
const TRANSLATE_PATH: &str = "/translate/";

// Fixed summarization mode flags expected by the backend.
const SUMMARIZE_MANUAL: &str = "true";
const SUMMARIZE_MODEL_CHOICE: &str = "1";

pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::ProviderError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }

    fn request_error(e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::TimeoutError
        } else {
            ServiceError::NetworkError(e.to_string())
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn transcribe(&self, video_url: &str) -> Result<TranscribeResponse, ServiceError> {
        let response = self
            .client
            .get(self.endpoint(TRANSCRIBE_PATH))
            .query(&[("url", video_url)])
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::decode(response).await
    }

    async fn summarize(&self, text: &str) -> Result<SummarizeResponse, ServiceError> {
        let response = self
            .client
            .post(self.endpoint(SUMMARIZE_PATH))
            .form(&[
                ("text", text),
                ("manual", SUMMARIZE_MANUAL),
                ("model_choice", SUMMARIZE_MODEL_CHOICE),
            ])
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::decode(response).await
    }

    async fn translate(&self, text: &str, dest: Language) -> Result<TranslateResponse, ServiceError> {
        let response = self
            .client
            .post(self.endpoint(TRANSLATE_PATH))
            .form(&[("text", text), ("dest", dest.code())])
            .send()
            .await
            .map_err(Self::request_error)?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn backend_for(server: &Server) -> HttpBackend {
        let config = AppConfig {
            base_url: server.url(),
            request_timeout_secs: 5,
            default_language: Language::Spanish,
        };
        HttpBackend::new(&config)
    }

    #[tokio::test]
    async fn transcribe_sends_url_and_parses_payload() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/transcribe")
            .match_query(Matcher::UrlEncoded(
                "url".into(),
                "https://youtu.be/abc123".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"transcript":"Hello world.","title":"Demo","duration":125}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let response = backend.transcribe("https://youtu.be/abc123").await.unwrap();

        assert_eq!(response.transcript.as_deref(), Some("Hello world."));
        assert_eq!(response.title.as_deref(), Some("Demo"));
        assert_eq!(response.duration, Some(125.0));
    }

    #[tokio::test]
    async fn transcribe_tolerates_missing_fields() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/transcribe")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let backend = backend_for(&server);
        let response = backend.transcribe("https://youtu.be/abc").await.unwrap();

        assert!(response.transcript.is_none());
        assert!(response.title.is_none());
        assert!(response.duration.is_none());
    }

    #[tokio::test]
    async fn summarize_posts_fixed_mode_flags() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/summarize/")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("text".into(), "Some transcript".into()),
                Matcher::UrlEncoded("manual".into(), "true".into()),
                Matcher::UrlEncoded("model_choice".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"summary":"Short."}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let response = backend.summarize("Some transcript").await.unwrap();

        assert_eq!(response.summary.as_deref(), Some("Short."));
    }

    #[tokio::test]
    async fn translate_posts_language_code() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/translate/")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("text".into(), "Hello world.".into()),
                Matcher::UrlEncoded("dest".into(), "fr".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translation":"Bonjour le monde."}"#)
            .create_async()
            .await;

        let backend = backend_for(&server);
        let response = backend
            .translate("Hello world.", Language::French)
            .await
            .unwrap();

        assert_eq!(response.translation, "Bonjour le monde.");
    }

    #[tokio::test]
    async fn non_success_status_is_a_provider_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/transcribe")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("backend exploded")
            .create_async()
            .await;

        let backend = backend_for(&server);
        let err = backend
            .transcribe("https://youtu.be/abc")
            .await
            .unwrap_err();

        match err {
            ServiceError::ProviderError(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("backend exploded"));
            }
            other => panic!("expected ProviderError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_an_invalid_response() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/translate/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let backend = backend_for(&server);
        let err = backend
            .translate("Hello", Language::German)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }
}
