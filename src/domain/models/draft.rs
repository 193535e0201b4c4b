use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;
use rand::{distributions::Alphanumeric, Rng};

use crate::domain::models::attendee::{Attendee, AttendeeStatus};
use crate::domain::models::event::{Coordinates, EventType, Location, MediaRef};

/// Guest collected during the Invitees stage. Becomes a `pending`
/// attendee when the draft is committed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Invitee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl Invitee {
    pub fn new(name: String, email: String) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            token,
        }
    }
}

impl From<Invitee> for Attendee {
    fn from(invitee: Invitee) -> Self {
        Attendee {
            id: invitee.id,
            name: invitee.name,
            email: invitee.email,
            token: invitee.token,
            status: AttendeeStatus::Pending,
        }
    }
}

/// In-progress event data accumulated by the wizard. Owned by exactly
/// one wizard instance; reset on commit or cancel, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub location: Location,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub images: Vec<MediaRef>,
    pub invitees: Vec<Invitee>,
}

/// Partial update produced by one wizard stage. `None` leaves the field
/// untouched.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub location: Option<LocationPatch>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub images: Option<Vec<MediaRef>>,
}

/// Location merges per sub-field: a manual address edit keeps previously
/// selected coordinates.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LocationPatch {
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl EventDraft {
    /// Shallow merge at the top level; `location` merges its own fields.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(event_type) = patch.event_type {
            self.event_type = event_type;
        }
        if let Some(location) = patch.location {
            if let Some(address) = location.address {
                self.location.address = address;
            }
            if let Some(coordinates) = location.coordinates {
                self.location.coordinates = Some(coordinates);
            }
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
        if let Some(time) = patch.time {
            self.time = Some(time);
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }
}
