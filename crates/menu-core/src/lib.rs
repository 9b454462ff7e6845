//! # Menu Core
//!
//! Menu model, path addressing, collaborator ports and the render/decode
//! services that turn a menu tree into clickable markup and turn a clicked
//! address back into a menu action event.

pub mod domain;
pub mod addressing;
pub mod markup;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod error;

#[cfg(test)]
mod test;

// Re-export domain entities
pub use domain::*;
pub use addressing::MenuPath;
pub use error::{RenderError, Result};
pub use markup::ResponseWriter;
pub use services::{
    ActionAttributes, ActionEncoder, EventSink, MenuDispatcher, MenuRenderer,
    PhasedEventQueue, RenderCollaborators, RequestParams, SeparatorPresenter,
};
