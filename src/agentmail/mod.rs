mod message;

pub use message::Message;
pub use message::MessageList;
pub use message::SendRequest;
pub use message::SentMessage;

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const BASE_URL: &str = "https://api.agentmail.to/v0";

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl Error {
    fn api(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.message)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::Api { status, message }
    }
}

pub struct AgentMail {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AgentMail {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn send_message(
        &self,
        inbox_id: &str,
        request: &SendRequest,
    ) -> Result<SentMessage, Error> {
        let url = format!("{}/inboxes/{inbox_id}/messages/send", self.base_url);
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        Self::read_response(response).await
    }

    pub async fn get_message(&self, inbox_id: &str, message_id: &str) -> Result<Message, Error> {
        let url = format!("{}/inboxes/{inbox_id}/messages/{message_id}", self.base_url);
        debug!("GET {url}");
        let response = self.http.get(&url).bearer_auth(&self.api_key).send().await?;

        Self::read_response(response).await
    }

    pub async fn list_messages(&self, inbox_id: &str, limit: u32) -> Result<MessageList, Error> {
        let url = format!("{}/inboxes/{inbox_id}/messages", self.base_url);
        debug!("GET {url}?limit={limit}");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("limit", limit)])
            .send()
            .await?;

        Self::read_response(response).await
    }

    async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status, &body));
        }

        Ok(response.json().await?)
    }
}
