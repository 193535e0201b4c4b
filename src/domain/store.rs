use tracing::info;

use crate::domain::models::event::Event;
use crate::error::AppError;

/// Ordered, most-recent-first collection of the session's events.
/// Constructed when the session starts, dropped with it; no other owner.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Inserts at the front of the collection. Rejects an empty title;
    /// the wizard has already validated date and time, which are
    /// mandatory on the `Event` type itself.
    pub fn create(&mut self, event: Event) -> Result<&Event, AppError> {
        if event.title.trim().is_empty() {
            return Err(AppError::Validation("Event title is required".into()));
        }

        info!("Storing event {} ({})", event.id, event.title);
        self.events.insert(0, event);
        Ok(&self.events[0])
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
