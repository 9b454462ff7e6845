//! Render and decode services

pub mod confirmation;
pub mod action_encoder;
pub mod separator;
pub mod menu_renderer;
pub mod dispatcher;
pub mod event_queue;

pub use confirmation::resolve_confirmation;
pub use action_encoder::{ActionAttributes, ActionEncoder, RenderCollaborators};
pub use separator::SeparatorPresenter;
pub use menu_renderer::MenuRenderer;
pub use dispatcher::{MenuDispatcher, RequestParams};
pub use event_queue::{EventSink, PhasedEventQueue};
