//! Confirmation binding
//!
//! Finds the confirmation guard attached to an item's click interaction.

use tracing::debug;

use crate::domain::{BehaviorContext, BehaviorEvent, ClientBehavior, MenuItem};
use crate::error::Result;
use crate::ports::ConfirmationScriptProvider;

/// Materializes the first click-bound confirm behavior of `item`.
///
/// Later confirm behaviors on the same item are ignored. A disabled first
/// match yields no script, so the raw command goes out unguarded.
pub fn resolve_confirmation(
    provider: &dyn ConfirmationScriptProvider,
    item: &MenuItem,
) -> Result<Option<String>> {
    let first_confirm = item
        .behaviors
        .iter()
        .filter(|binding| binding.event == BehaviorEvent::Click)
        .find_map(|binding| match &binding.behavior {
            ClientBehavior::Confirm(confirm) => Some(confirm),
            _ => None,
        });

    let Some(confirm) = first_confirm else {
        return Ok(None);
    };

    if confirm.disabled {
        debug!("Confirm behavior on menu item {} is disabled", item.id);
        return Ok(None);
    }

    let context = BehaviorContext::new(item.client_id(), BehaviorEvent::Click);
    provider.script(confirm, &context).map(Some)
}
