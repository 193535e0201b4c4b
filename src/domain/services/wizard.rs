use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::models::attendee::Attendee;
use crate::domain::models::draft::{DraftPatch, EventDraft, Invitee};
use crate::domain::models::event::{Event, EventStatus, MediaRef};
use crate::domain::models::user::UserIdentity;
use crate::error::AppError;

/// Fixed stage order of the creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStage {
    #[default]
    Details,
    Location,
    DateTime,
    Media,
    Invitees,
    Review,
}

impl WizardStage {
    /// 1-based position in the stage order.
    pub fn index(self) -> usize {
        match self {
            WizardStage::Details => 1,
            WizardStage::Location => 2,
            WizardStage::DateTime => 3,
            WizardStage::Media => 4,
            WizardStage::Invitees => 5,
            WizardStage::Review => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WizardStage::Details => "Details",
            WizardStage::Location => "Location",
            WizardStage::DateTime => "Date & Time",
            WizardStage::Media => "Media",
            WizardStage::Invitees => "Invitees",
            WizardStage::Review => "Review",
        }
    }

    fn next(self) -> Option<WizardStage> {
        match self {
            WizardStage::Details => Some(WizardStage::Location),
            WizardStage::Location => Some(WizardStage::DateTime),
            WizardStage::DateTime => Some(WizardStage::Media),
            WizardStage::Media => Some(WizardStage::Invitees),
            WizardStage::Invitees => Some(WizardStage::Review),
            WizardStage::Review => None,
        }
    }

    fn prev(self) -> Option<WizardStage> {
        match self {
            WizardStage::Details => None,
            WizardStage::Location => Some(WizardStage::Details),
            WizardStage::DateTime => Some(WizardStage::Location),
            WizardStage::Media => Some(WizardStage::DateTime),
            WizardStage::Invitees => Some(WizardStage::Media),
            WizardStage::Review => Some(WizardStage::Invitees),
        }
    }
}

/// Multi-step creation workflow. Exclusive owner of its draft; the draft
/// never survives a commit or cancel.
#[derive(Debug, Default)]
pub struct EventWizard {
    stage: WizardStage,
    draft: EventDraft,
}

impl EventWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// No-op at the Review stage.
    pub fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            debug!("Wizard stage {} -> {}", self.stage.name(), next.name());
            self.stage = next;
        }
    }

    /// No-op at the Details stage.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.stage.prev() {
            debug!("Wizard stage {} -> {}", self.stage.name(), prev.name());
            self.stage = prev;
        }
    }

    pub fn update(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    pub fn add_image(&mut self, media: MediaRef) {
        self.draft.images.push(media);
    }

    /// Both fields are required. Duplicate emails are accepted; each
    /// invitee still gets its own id and token.
    pub fn add_invitee(&mut self, name: &str, email: &str) -> Result<Invitee, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Invitee name is required".into()));
        }
        if email.trim().is_empty() {
            return Err(AppError::Validation("Invitee email is required".into()));
        }

        let invitee = Invitee::new(name.to_string(), email.to_string());
        self.draft.invitees.push(invitee.clone());
        Ok(invitee)
    }

    /// Removing an unknown id changes nothing.
    pub fn remove_invitee(&mut self, id: &str) {
        self.draft.invitees.retain(|inv| inv.id != id);
    }

    /// Discards the draft and returns to the first stage.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Builds the event from the accumulated draft: fresh id, one
    /// `pending` attendee per invitee, status `upcoming`. Resets the
    /// wizard afterwards. Stage position is not checked here; the UI
    /// only offers the commit action on the Review stage.
    pub fn commit(&mut self, organizer: UserIdentity) -> Result<Event, AppError> {
        if self.draft.title.trim().is_empty() {
            return Err(AppError::Validation("Event title is required".into()));
        }
        let date = self
            .draft
            .date
            .ok_or_else(|| AppError::Validation("Event date is required".into()))?;
        let time = self
            .draft
            .time
            .ok_or_else(|| AppError::Validation("Event time is required".into()))?;

        let draft = std::mem::take(&mut self.draft);
        self.stage = WizardStage::Details;

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            event_type: draft.event_type,
            location: draft.location,
            date,
            time,
            organizer,
            images: draft.images,
            attendees: draft.invitees.into_iter().map(Attendee::from).collect(),
            status: EventStatus::Upcoming,
            created_at: now,
            updated_at: now,
        };

        info!(
            "Wizard committed event {} with {} invitees",
            event.id,
            event.attendees.len()
        );
        Ok(event)
    }
}
