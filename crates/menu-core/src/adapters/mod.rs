//! Default adapters for the collaborator ports

pub mod navigation;
pub mod form_locator;
pub mod scripts;

pub use navigation::OutcomeNavigationResolver;
pub use form_locator::NamingFormLocator;
pub use scripts::PrimeScripts;

use std::sync::Arc;

use crate::services::RenderCollaborators;

impl RenderCollaborators {
    /// Default adapters wired together around a form registry.
    pub fn with_defaults(
        navigation: OutcomeNavigationResolver,
        forms: NamingFormLocator,
    ) -> Self {
        let scripts = Arc::new(PrimeScripts);
        Self {
            navigation: Arc::new(navigation),
            forms: Arc::new(forms),
            ajax: scripts.clone(),
            submit: scripts.clone(),
            confirmation: scripts,
        }
    }
}
