use std::sync::Arc;

use chrono::Local;
use tera::Tera;
use tracing::info;

use crate::config::Config;
use crate::domain::models::attendee::AttendeeStatus;
use crate::domain::models::event::{Event, Location, MediaRef};
use crate::domain::models::user::UserIdentity;
use crate::domain::ports::{GeocodingService, IdentityProvider, MediaStorage, NotificationService};
use crate::domain::services::rsvp::{self, DashboardStats, ReminderService, RsvpCounts};
use crate::domain::services::timeline::{build_timeline, Timeline, TypeFilter};
use crate::domain::services::wizard::EventWizard;
use crate::domain::store::EventStore;
use crate::error::AppError;

/// One interactive session: exclusive owner of the event collection and
/// the wizard draft, wired to the collaborator ports.
pub struct Session {
    pub config: Config,
    pub identity: Arc<dyn IdentityProvider>,
    pub media: Arc<dyn MediaStorage>,
    pub geocoder: Arc<dyn GeocodingService>,
    pub store: EventStore,
    pub wizard: EventWizard,
    reminders: ReminderService,
}

impl Session {
    pub fn new(
        config: Config,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn NotificationService>,
        media: Arc<dyn MediaStorage>,
        geocoder: Arc<dyn GeocodingService>,
        templates: Arc<Tera>,
    ) -> Self {
        let reminders = ReminderService::new(notifier, templates, config.frontend_url.clone());
        Self {
            config,
            identity,
            media,
            geocoder,
            store: EventStore::new(),
            wizard: EventWizard::new(),
            reminders,
        }
    }

    /// Commits the wizard draft as a new event organized by the current
    /// user and stores it.
    pub async fn create_event(&mut self) -> Result<Event, AppError> {
        let organizer = self.identity.current_user().await?;
        let event = self.wizard.commit(organizer)?;
        let stored = self.store.create(event)?;
        Ok(stored.clone())
    }

    /// Filtered, bucketed view of the collection as of today.
    pub fn timeline(&self, filter: TypeFilter, query: &str) -> Timeline {
        let today = Local::now().date_naive();
        build_timeline(self.store.all(), filter, query, today)
    }

    pub fn rsvp_counts(&self, event_id: &str) -> Result<RsvpCounts, AppError> {
        let event = self
            .store
            .find_by_id(event_id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;
        Ok(RsvpCounts::for_event(event))
    }

    pub fn dashboard(&self) -> DashboardStats {
        rsvp::dashboard_stats(self.store.all())
    }

    /// Single reminder to one attendee of the given event.
    pub async fn remind(&self, event_id: &str, attendee_id: &str) -> Result<(), AppError> {
        let event = self
            .store
            .find_by_id(event_id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;
        let attendee = event
            .attendees
            .iter()
            .find(|a| a.id == attendee_id)
            .ok_or_else(|| AppError::NotFound(format!("Attendee {} not found", attendee_id)))?;

        self.reminders.send_reminder(event, attendee).await
    }

    /// Bulk reminder to everyone still pending on the given event.
    /// Returns the number of dispatched reminders.
    pub async fn remind_pending(&self, event_id: &str) -> Result<usize, AppError> {
        let event = self
            .store
            .find_by_id(event_id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let targets = rsvp::by_status(event, AttendeeStatus::Pending);
        Ok(self.reminders.send_bulk_reminder(event, &targets).await)
    }

    /// Uploads media through the collaborator and records the returned
    /// reference on the draft.
    pub async fn upload_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<MediaRef, AppError> {
        let media = self.media.upload(file_name, bytes).await?;
        self.wizard.add_image(media.clone());
        Ok(media)
    }

    pub async fn location_suggestions(&self, query: &str) -> Result<Vec<Location>, AppError> {
        self.geocoder.suggest(query).await
    }

    pub async fn current_user(&self) -> Result<UserIdentity, AppError> {
        self.identity.current_user().await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Ending session");
        self.identity.logout().await
    }
}
