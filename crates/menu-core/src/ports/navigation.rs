//! Navigation target resolution (port)

use crate::domain::MenuItem;
use crate::error::Result;

#[cfg_attr(test, mockall::automock)]
pub trait NavigationResolver: Send + Sync {
    /// Absolute or relative url for an item carrying a url or an outcome.
    fn target_url(&self, item: &MenuItem) -> Result<String>;
}
