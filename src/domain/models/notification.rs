use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity color tag of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Info,
    Green,
    Orange,
    Red,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Info => "blue",
            Indicator::Green => "green",
            Indicator::Orange => "orange",
            Indicator::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub indicator: Indicator,
}

impl Notification {
    pub fn new(message: impl Into<String>, indicator: Indicator) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            indicator,
        }
    }
}
