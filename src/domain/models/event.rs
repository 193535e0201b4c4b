use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::models::attendee::Attendee;
use crate::domain::models::user::UserIdentity;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    #[default]
    Public,
    Private,
    RsvpOnly,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Location {
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

/// Reference returned by the media-upload collaborator. The core never
/// holds file bytes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MediaRef {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: Location,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: UserIdentity,
    pub images: Vec<MediaRef>,
    pub attendees: Vec<Attendee>, // ids unique per event
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// The first image doubles as the banner.
    pub fn banner(&self) -> Option<&MediaRef> {
        self.images.first()
    }
}
