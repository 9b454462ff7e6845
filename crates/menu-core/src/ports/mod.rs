//! Collaborator traits (ports)
//!
//! The renderer resolves urls, locates forms and builds client scripts
//! through these seams. Default adapters live in `crate::adapters`.

pub mod navigation;
pub mod form_locator;
pub mod command_builder;
pub mod confirmation;

pub use navigation::NavigationResolver;
pub use form_locator::{Form, FormLocator};
pub use command_builder::{AjaxCommandBuilder, SubmitCommandBuilder};
pub use confirmation::ConfirmationScriptProvider;

#[cfg(test)]
pub use navigation::MockNavigationResolver;
#[cfg(test)]
pub use form_locator::MockFormLocator;
#[cfg(test)]
pub use command_builder::{MockAjaxCommandBuilder, MockSubmitCommandBuilder};
#[cfg(test)]
pub use confirmation::MockConfirmationScriptProvider;
