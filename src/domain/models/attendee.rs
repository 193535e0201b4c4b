use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AttendeeStatus {
    Pending,
    Attending,
    Maybe,
    NotAttending,
}

/// One invited person on one event. Starts out `pending`; status only
/// changes through an RSVP response outside this core.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
    pub status: AttendeeStatus,
}

impl Attendee {
    pub fn has_responded(&self) -> bool {
        self.status != AttendeeStatus::Pending
    }
}
