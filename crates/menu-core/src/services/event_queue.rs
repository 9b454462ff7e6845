//! Phase-separated event queue

use crate::domain::{EventPhase, MenuActionEvent};

/// Receives events produced by decode.
pub trait EventSink {
    fn queue_event(&mut self, event: MenuActionEvent);
}

impl EventSink for Vec<MenuActionEvent> {
    fn queue_event(&mut self, event: MenuActionEvent) {
        self.push(event);
    }
}

/// Holds early events apart from deferred ones so the request lifecycle
/// can deliver each batch at its own point.
#[derive(Debug, Default)]
pub struct PhasedEventQueue {
    early: Vec<MenuActionEvent>,
    deferred: Vec<MenuActionEvent>,
}

impl PhasedEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.early.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn drain_phase(&mut self, phase: EventPhase) -> Vec<MenuActionEvent> {
        match phase {
            EventPhase::Early => std::mem::take(&mut self.early),
            EventPhase::Deferred => std::mem::take(&mut self.deferred),
        }
    }

    /// Early events first, then deferred, each in queue order.
    pub fn drain_all(&mut self) -> Vec<MenuActionEvent> {
        let mut events = self.drain_phase(EventPhase::Early);
        events.extend(self.drain_phase(EventPhase::Deferred));
        events
    }
}

impl EventSink for PhasedEventQueue {
    fn queue_event(&mut self, event: MenuActionEvent) {
        match event.phase {
            EventPhase::Early => self.early.push(event),
            EventPhase::Deferred => self.deferred.push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;

    #[test]
    fn test_early_events_drain_first() {
        let mut queue = PhasedEventQueue::new();
        queue.queue_event(MenuActionEvent::new("m", MenuItem::new("late")));
        queue.queue_event(MenuActionEvent::new("m", MenuItem::new("now").immediate(true)));
        assert_eq!(queue.len(), 2);

        let ids: Vec<_> = queue.drain_all().into_iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec!["now", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_single_phase() {
        let mut queue = PhasedEventQueue::new();
        queue.queue_event(MenuActionEvent::new("m", MenuItem::new("late")));

        assert!(queue.drain_phase(EventPhase::Early).is_empty());
        assert_eq!(queue.drain_phase(EventPhase::Deferred).len(), 1);
    }
}
