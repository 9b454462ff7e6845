//! Confirmation script materialization (port)

use crate::domain::{BehaviorContext, ConfirmBehavior};
use crate::error::Result;

#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationScriptProvider: Send + Sync {
    fn script(&self, behavior: &ConfirmBehavior, context: &BehaviorContext) -> Result<String>;
}
