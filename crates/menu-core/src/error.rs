//! Render and decode errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Menu item '{item}' must be inside a form element")]
    MissingForm { item: String },

    #[error("Malformed menu address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    #[error("Markup write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Markup error: {0}")]
    Markup(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Command builder error: {0}")]
    CommandBuilder(String),

    #[error("Confirmation script error: {0}")]
    Confirmation(String),
}

impl RenderError {
    pub fn malformed(address: &str, reason: impl Into<String>) -> Self {
        Self::MalformedAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
