//! # Menu Core - Domain Module
//!
//! Menu tree entities, click behaviors and action events.

pub mod menu_element;
pub mod behavior;
pub mod event;
pub mod holder;

// Re-export all entities and enums
pub use menu_element::{ItemKind, MenuElement, MenuGroup, MenuItem, MenuModel, MenuParams, Separator};
pub use behavior::{AjaxBehavior, BehaviorBinding, BehaviorContext, BehaviorEvent, ClientBehavior, ConfirmBehavior};
pub use event::{EventPhase, MenuActionEvent};
pub use holder::{MenuComponent, MenuItemHolder};
