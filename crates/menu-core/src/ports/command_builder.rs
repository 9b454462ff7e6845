//! Client trigger script builders (port)

use crate::domain::{MenuItem, MenuParams};
use crate::error::Result;
use super::form_locator::Form;

/// Builds an asynchronous request script.
#[cfg_attr(test, mockall::automock)]
pub trait AjaxCommandBuilder: Send + Sync {
    /// `source_client_id` is the holder for dynamic items and the item's own
    /// client id otherwise. Ajax options (process, update) come from `item`.
    fn ajax_request(
        &self,
        source_client_id: &str,
        item: &MenuItem,
        form: &Form,
        params: &MenuParams,
    ) -> Result<String>;
}

/// Builds a synchronous form submission script.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitCommandBuilder: Send + Sync {
    /// `decode_id` is submitted as a parameter naming the component that
    /// decodes the request.
    fn submit_request(&self, decode_id: &str, form: &Form, params: &MenuParams) -> Result<String>;
}
