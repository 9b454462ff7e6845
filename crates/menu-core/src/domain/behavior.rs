//! Client behaviors attached to menu item interactions

use serde::{Deserialize, Serialize};

/// Client event a behavior is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorEvent {
    Click,
    DblClick,
    MouseOver,
    Focus,
    Blur,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientBehavior {
    Confirm(ConfirmBehavior),
    Ajax(AjaxBehavior),
    Script { script: String },
}

/// Confirmation dialog guarding an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmBehavior {
    pub header: Option<String>,
    pub message: Option<String>,
    pub icon: Option<String>,
    pub disabled: bool,
    pub escape: bool,
}

impl Default for ConfirmBehavior {
    fn default() -> Self {
        Self {
            header: None,
            message: None,
            icon: None,
            disabled: false,
            escape: true,
        }
    }
}

impl ConfirmBehavior {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AjaxBehavior {
    pub process: Option<String>,
    pub update: Option<String>,
}

/// A behavior bound to one client event, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorBinding {
    pub event: BehaviorEvent,
    pub behavior: ClientBehavior,
}

impl BehaviorBinding {
    pub fn new(event: BehaviorEvent, behavior: ClientBehavior) -> Self {
        Self { event, behavior }
    }

    pub fn click(behavior: ClientBehavior) -> Self {
        Self::new(BehaviorEvent::Click, behavior)
    }
}

/// What a behavior script is bound to when materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorContext {
    pub source_client_id: String,
    pub event: BehaviorEvent,
    pub parameters: Vec<(String, String)>,
}

impl BehaviorContext {
    pub fn new(source_client_id: impl Into<String>, event: BehaviorEvent) -> Self {
        Self {
            source_client_id: source_client_id.into(),
            event,
            parameters: Vec::new(),
        }
    }
}
