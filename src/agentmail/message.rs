use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: String,
    #[serde(rename = "from")]
    pub from_address: String,
    #[serde(default)]
    pub to: Vec<String>,
    pub subject: String,
    #[serde(default)]
    pub text: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub data: Vec<Message>,
}

/// Body of the send operation. Absent cc/bcc serialize as absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    pub subject: String,
    pub text: String,
}

/// Send result. Not every deployment returns the id of the stored copy.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    #[serde(default)]
    pub message_id: Option<String>,
}
