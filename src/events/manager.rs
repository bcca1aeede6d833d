use crate::events::Event;
use serde::{Deserialize, Serialize};

/// How a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Dom,
    DomOnce,
    Event,
    EventOnce,
}

impl ListenerKind {
    /// Render order of the listener categories
    pub const ORDER: [ListenerKind; 4] = [
        ListenerKind::Dom,
        ListenerKind::DomOnce,
        ListenerKind::Event,
        ListenerKind::EventOnce,
    ];

    pub fn is_dom(&self) -> bool {
        matches!(self, ListenerKind::Dom | ListenerKind::DomOnce)
    }

    pub fn is_once(&self) -> bool {
        matches!(self, ListenerKind::DomOnce | ListenerKind::EventOnce)
    }

    /// Name of the `google.maps.event` registration function
    pub fn function(&self) -> &'static str {
        match self {
            ListenerKind::Dom => "addDomListener",
            ListenerKind::DomOnce => "addDomListenerOnce",
            ListenerKind::Event => "addListener",
            ListenerKind::EventOnce => "addListenerOnce",
        }
    }
}

/// Listener registrations of a map, grouped by kind in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventManager {
    dom_events: Vec<Event>,
    dom_events_once: Vec<Event>,
    events: Vec<Event>,
    events_once: Vec<Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dom_event(&mut self, event: Event) {
        self.dom_events.push(event);
    }

    pub fn add_dom_event_once(&mut self, event: Event) {
        self.dom_events_once.push(event);
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn add_event_once(&mut self, event: Event) {
        self.events_once.push(event);
    }

    pub fn add(&mut self, kind: ListenerKind, event: Event) {
        match kind {
            ListenerKind::Dom => self.add_dom_event(event),
            ListenerKind::DomOnce => self.add_dom_event_once(event),
            ListenerKind::Event => self.add_event(event),
            ListenerKind::EventOnce => self.add_event_once(event),
        }
    }

    pub fn dom_events(&self) -> &[Event] {
        &self.dom_events
    }

    pub fn dom_events_once(&self) -> &[Event] {
        &self.dom_events_once
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_once(&self) -> &[Event] {
        &self.events_once
    }

    pub fn of_kind(&self, kind: ListenerKind) -> &[Event] {
        match kind {
            ListenerKind::Dom => &self.dom_events,
            ListenerKind::DomOnce => &self.dom_events_once,
            ListenerKind::Event => &self.events,
            ListenerKind::EventOnce => &self.events_once,
        }
    }

    /// All registrations in render order
    pub fn iter(&self) -> impl Iterator<Item = (ListenerKind, &Event)> {
        ListenerKind::ORDER
            .into_iter()
            .flat_map(move |kind| self.of_kind(kind).iter().map(move |event| (kind, event)))
    }

    pub fn len(&self) -> usize {
        ListenerKind::ORDER
            .iter()
            .map(|kind| self.of_kind(*kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_kind_flags() {
        assert!(ListenerKind::Dom.is_dom());
        assert!(!ListenerKind::Dom.is_once());
        assert!(ListenerKind::DomOnce.is_once());
        assert!(!ListenerKind::EventOnce.is_dom());
        assert_eq!(ListenerKind::EventOnce.function(), "addListenerOnce");
    }

    #[test]
    fn test_iter_follows_category_order() {
        let mut manager = EventManager::new();
        manager.add_event_once(Event::new("a", "click", "h"));
        manager.add_event(Event::new("b", "click", "h"));
        manager.add_dom_event_once(Event::new("c", "click", "h"));
        manager.add_dom_event(Event::new("d", "click", "h"));
        manager.add(ListenerKind::Dom, Event::new("e", "click", "h"));

        let order: Vec<(ListenerKind, &str)> = manager
            .iter()
            .map(|(kind, event)| (kind, event.instance.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                (ListenerKind::Dom, "d"),
                (ListenerKind::Dom, "e"),
                (ListenerKind::DomOnce, "c"),
                (ListenerKind::Event, "b"),
                (ListenerKind::EventOnce, "a"),
            ]
        );
        assert_eq!(manager.len(), 5);
        assert!(!manager.is_empty());
    }
}
