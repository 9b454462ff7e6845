//! Enclosing form lookup (port)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub client_id: String,
}

impl Form {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait FormLocator: Send + Sync {
    /// Closest form enclosing the component with `source_client_id`.
    fn closest_form(&self, source_client_id: &str) -> Option<Form>;
}
