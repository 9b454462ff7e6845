// ============================================================================
// Menu Core - Event Dispatcher
// File: crates/menu-core/src/services/dispatcher.rs
// Description: Decode a submitted menu address into a menu action event
// ============================================================================

use std::collections::HashMap;

use menu_shared::constants::menu_id_param;
use tracing::{debug, warn};

use crate::addressing;
use crate::domain::{EventPhase, MenuActionEvent, MenuItemHolder};
use crate::error::Result;
use super::event_queue::EventSink;

/// Parsed request parameters, one value per name.
pub type RequestParams = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuDispatcher;

impl MenuDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Reads `{holder}_menuid` and queues an event for the addressed item.
    ///
    /// Returns the phase the event was queued in, or `None` when the request
    /// carries no address or the address no longer matches an item.
    pub fn decode<H, S>(&self, holder: &H, params: &RequestParams, sink: &mut S) -> Result<Option<EventPhase>>
    where
        H: MenuItemHolder + ?Sized,
        S: EventSink + ?Sized,
    {
        let client_id = holder.client_id();
        let Some(address) = params.get(&menu_id_param(client_id)) else {
            return Ok(None);
        };

        let Some(item) = addressing::decode(holder.elements(), address)? else {
            warn!("Menu address {} of {} matches no item", address, client_id);
            return Ok(None);
        };

        let event = MenuActionEvent::new(client_id, item.clone());
        let phase = event.phase;
        debug!(
            "Queueing menu action {} of {} for {} phase",
            item.id,
            client_id,
            phase.as_str()
        );
        sink.queue_event(event);

        Ok(Some(phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuComponent, MenuGroup, MenuItem, MenuModel};
    use crate::error::RenderError;
    use crate::services::PhasedEventQueue;

    fn component() -> MenuComponent {
        MenuComponent::new(
            "form:menu",
            MenuModel::new()
                .with(MenuItem::new("a"))
                .with(
                    MenuGroup::new("g")
                        .child(MenuItem::new("b").immediate(true))
                        .child(MenuItem::new("c")),
                ),
        )
    }

    fn params(address: &str) -> RequestParams {
        RequestParams::from([("form:menu_menuid".to_string(), address.to_string())])
    }

    #[test]
    fn test_absent_param_is_noop() {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        let phase = MenuDispatcher::new()
            .decode(&component(), &RequestParams::new(), &mut events)
            .unwrap();
        assert_eq!(phase, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_other_holder_param_is_ignored() {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        let params = RequestParams::from([("other_menuid".to_string(), "0".to_string())]);
        MenuDispatcher::new().decode(&component(), &params, &mut events).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_immediate_item_queues_early() {
        let mut queue = PhasedEventQueue::new();
        let phase = MenuDispatcher::new()
            .decode(&component(), &params("1_0"), &mut queue)
            .unwrap();

        assert_eq!(phase, Some(EventPhase::Early));
        let events = queue.drain_phase(EventPhase::Early);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].item.id, "b");
        assert_eq!(events[0].source, "form:menu");
    }

    #[test]
    fn test_regular_item_queues_deferred() {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        let phase = MenuDispatcher::new()
            .decode(&component(), &params("1_1"), &mut events)
            .unwrap();

        assert_eq!(phase, Some(EventPhase::Deferred));
        assert_eq!(events[0].item.id, "c");
        assert_eq!(events[0].phase, EventPhase::Deferred);
    }

    #[test]
    fn test_stale_address_is_silent() {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        let phase = MenuDispatcher::new()
            .decode(&component(), &params("5"), &mut events)
            .unwrap();
        assert_eq!(phase, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_malformed_address_propagates() {
        let mut events: Vec<MenuActionEvent> = Vec::new();
        let err = MenuDispatcher::new()
            .decode(&component(), &params("1_x"), &mut events)
            .unwrap_err();
        assert!(matches!(err, RenderError::MalformedAddress { .. }));
        assert!(events.is_empty());
    }
}
