//! Menu action events produced on decode

use serde::Serialize;

use super::menu_element::MenuItem;

/// When a queued event is delivered during request processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPhase {
    /// Apply-request-values: before validation and model update.
    Early,
    /// Invoke-application: only after validation and model update succeed.
    Deferred,
}

impl EventPhase {
    pub fn for_item(item: &MenuItem) -> Self {
        if item.immediate {
            Self::Early
        } else {
            Self::Deferred
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Early => "early",
            Self::Deferred => "deferred",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuActionEvent {
    /// Client id of the holder that owns the menu.
    pub source: String,
    pub item: MenuItem,
    pub phase: EventPhase,
}

impl MenuActionEvent {
    pub fn new(source: impl Into<String>, item: MenuItem) -> Self {
        let phase = EventPhase::for_item(&item);
        Self {
            source: source.into(),
            item,
            phase,
        }
    }
}
