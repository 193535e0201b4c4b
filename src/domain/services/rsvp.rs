use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{info, warn};

use crate::domain::models::attendee::{Attendee, AttendeeStatus};
use crate::domain::models::event::{Event, EventStatus};
use crate::domain::ports::NotificationService;
use crate::error::AppError;

/// Per-event RSVP tally. The four counts always partition the attendee
/// list.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct RsvpCounts {
    pub attending: usize,
    pub maybe: usize,
    pub not_attending: usize,
    pub pending: usize,
}

impl RsvpCounts {
    pub fn for_event(event: &Event) -> Self {
        let mut counts = Self::default();
        for attendee in &event.attendees {
            match attendee.status {
                AttendeeStatus::Attending => counts.attending += 1,
                AttendeeStatus::Maybe => counts.maybe += 1,
                AttendeeStatus::NotAttending => counts.not_attending += 1,
                AttendeeStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.attending + self.maybe + self.not_attending + self.pending
    }

    pub fn responded(&self) -> usize {
        self.total() - self.pending
    }
}

/// Attendees of one event with the given status, in list order.
pub fn by_status(event: &Event, status: AttendeeStatus) -> Vec<&Attendee> {
    event
        .attendees
        .iter()
        .filter(|a| a.status == status)
        .collect()
}

/// `round(100 * responded / invited)` across the given events; 0 when
/// nobody was invited.
pub fn response_rate(events: &[Event]) -> u32 {
    let total: usize = events.iter().map(|e| e.attendees.len()).sum();
    if total == 0 {
        return 0;
    }

    let responded: usize = events
        .iter()
        .map(|e| e.attendees.iter().filter(|a| a.has_responded()).count())
        .sum();

    ((responded as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub confirmed_attendees: usize,
    pub response_rate: u32,
}

/// Headline numbers for the dashboard. `upcoming_events` counts the
/// stored status field, not the date-derived timeline bucket.
pub fn dashboard_stats(events: &[Event]) -> DashboardStats {
    DashboardStats {
        total_events: events.len(),
        upcoming_events: events
            .iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .count(),
        confirmed_attendees: events
            .iter()
            .map(|e| {
                e.attendees
                    .iter()
                    .filter(|a| a.status == AttendeeStatus::Attending)
                    .count()
            })
            .sum(),
        response_rate: response_rate(events),
    }
}

/// Renders and dispatches RSVP reminders through the notification
/// collaborator.
pub struct ReminderService {
    notifier: Arc<dyn NotificationService>,
    templates: Arc<Tera>,
    frontend_url: String,
}

impl ReminderService {
    pub fn new(notifier: Arc<dyn NotificationService>, templates: Arc<Tera>, frontend_url: String) -> Self {
        Self {
            notifier,
            templates,
            frontend_url,
        }
    }

    /// Dispatches one reminder. Never touches the attendee's status; the
    /// pending/maybe targeting convention lives with the caller.
    pub async fn send_reminder(&self, event: &Event, attendee: &Attendee) -> Result<(), AppError> {
        let rsvp_link = format!(
            "{}/rsvp/{}?token={}",
            self.frontend_url, event.id, attendee.token
        );

        let mut context = Context::new();
        context.insert("user_name", &attendee.name);
        context.insert("event_title", &event.title);
        context.insert("event_description", &event.description);
        context.insert("location", &event.location.address);
        context.insert("event_date", &event.date.format("%Y-%m-%d").to_string());
        context.insert("event_time", &event.time.format("%H:%M").to_string());
        context.insert("rsvp_link", &rsvp_link);

        let body = self
            .templates
            .render("reminder.html", &context)
            .map_err(|e| AppError::InternalWithMsg(format!("Tera render error: {:?}", e)))?;
        let subject = format!("Reminder: {} starts soon", event.title);

        info!(
            "Sending RSVP reminder to {} for event {}",
            attendee.email, event.id
        );
        self.notifier.send(&attendee.email, &subject, &body).await
    }

    /// One dispatch per target; a failed send is logged and skipped, the
    /// rest still go out. Returns how many were delivered.
    pub async fn send_bulk_reminder(&self, event: &Event, targets: &[&Attendee]) -> usize {
        let mut delivered = 0;
        for attendee in targets {
            match self.send_reminder(event, attendee).await {
                Ok(()) => delivered += 1,
                Err(e) => warn!("Reminder to {} failed: {}", attendee.email, e),
            }
        }

        info!(
            "Bulk reminder for event {}: {}/{} delivered",
            event.id,
            delivered,
            targets.len()
        );
        delivered
    }
}
