#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use tera::Tera;
use uuid::Uuid;

use event_planner::config::Config;
use event_planner::domain::models::attendee::{Attendee, AttendeeStatus};
use event_planner::domain::models::event::{
    Coordinates, Event, EventStatus, EventType, Location, MediaRef,
};
use event_planner::domain::models::user::UserIdentity;
use event_planner::domain::ports::{
    GeocodingService, IdentityProvider, MediaStorage, NotificationService,
};
use event_planner::error::AppError;
use event_planner::state::Session;

pub struct SentReminder {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Records every dispatch; recipients in `failing_recipients` get a
/// delivery error instead.
#[derive(Default)]
pub struct MockNotificationService {
    pub sent: Mutex<Vec<SentReminder>>,
    pub failing_recipients: Mutex<HashSet<String>>,
}

impl MockNotificationService {
    pub fn fail_for(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }

    pub fn sent_recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.recipient.clone())
            .collect()
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError> {
        if self.failing_recipients.lock().unwrap().contains(recipient) {
            return Err(AppError::InternalWithMsg(format!(
                "Delivery to {} refused",
                recipient
            )));
        }

        self.sent.lock().unwrap().push(SentReminder {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}

pub struct MockIdentityProvider;

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_user(&self) -> Result<UserIdentity, AppError> {
        Ok(UserIdentity {
            name: "Current User".to_string(),
            email: "current@example.com".to_string(),
        })
    }

    async fn logout(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct MockMediaStorage;

#[async_trait]
impl MediaStorage for MockMediaStorage {
    async fn upload(&self, file_name: &str, _bytes: &[u8]) -> Result<MediaRef, AppError> {
        Ok(MediaRef {
            url: format!("https://media.test/{}", file_name),
            name: file_name.to_string(),
        })
    }
}

pub struct MockGeocodingService;

#[async_trait]
impl GeocodingService for MockGeocodingService {
    async fn suggest(&self, query: &str) -> Result<Vec<Location>, AppError> {
        Ok(vec![Location {
            address: format!("{}, New York, NY", query),
            coordinates: Some(Coordinates {
                lat: 40.7128,
                lng: -74.0060,
            }),
        }])
    }
}

pub struct TestSession {
    pub session: Session,
    pub notifier: Arc<MockNotificationService>,
}

impl TestSession {
    pub fn new() -> Self {
        let notifier = Arc::new(MockNotificationService::default());

        let mut tera = Tera::default();
        tera.add_raw_template(
            "reminder.html",
            "<html>Reminder for {{ user_name }}: {{ event_title }} ({{ rsvp_link }})</html>",
        )
        .unwrap();

        let config = Config {
            auth_service_url: "http://localhost".to_string(),
            notify_service_url: "http://localhost".to_string(),
            notify_service_token: "token".to_string(),
            media_service_url: "http://localhost".to_string(),
            media_service_token: "token".to_string(),
            geocode_service_url: "http://localhost".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        };

        let session = Session::new(
            config,
            Arc::new(MockIdentityProvider),
            notifier.clone(),
            Arc::new(MockMediaStorage),
            Arc::new(MockGeocodingService),
            Arc::new(tera),
        );

        Self { session, notifier }
    }
}

pub fn sample_attendee(name: &str, email: &str, status: AttendeeStatus) -> Attendee {
    Attendee {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        token: Uuid::new_v4().simple().to_string(),
        status,
    }
}

pub fn sample_event(
    title: &str,
    date: &str,
    event_type: EventType,
    status: EventStatus,
    attendees: Vec<Attendee>,
) -> Event {
    Event {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: String::new(),
        event_type,
        location: Location::default(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        organizer: UserIdentity {
            name: "Current User".to_string(),
            email: "current@example.com".to_string(),
        },
        images: vec![],
        attendees,
        status,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    }
}

/// Three events shaped like the dashboard seed data: a public upcoming
/// conference, a private upcoming workshop, a completed rsvp-only party.
pub fn seeded_events() -> Vec<Event> {
    let mut conference = sample_event(
        "Summer Tech Conference 2024",
        "2024-07-15",
        EventType::Public,
        EventStatus::Upcoming,
        vec![
            sample_attendee("John Doe", "john@example.com", AttendeeStatus::Attending),
            sample_attendee("Jane Smith", "jane@example.com", AttendeeStatus::Maybe),
            sample_attendee("Bob Johnson", "bob@example.com", AttendeeStatus::Pending),
            sample_attendee("Alice Brown", "alice@example.com", AttendeeStatus::Attending),
            sample_attendee(
                "Charlie Wilson",
                "charlie@example.com",
                AttendeeStatus::NotAttending,
            ),
        ],
    );
    conference.description =
        "Join us for the biggest tech conference of the year.".to_string();
    conference.location = Location {
        address: "Convention Center, San Francisco, CA".to_string(),
        coordinates: Some(Coordinates {
            lat: 37.7749,
            lng: -122.4194,
        }),
    };

    let mut workshop = sample_event(
        "Team Building Workshop",
        "2024-06-20",
        EventType::Private,
        EventStatus::Upcoming,
        vec![
            sample_attendee("David Lee", "david@example.com", AttendeeStatus::Attending),
            sample_attendee("Emma Davis", "emma@example.com", AttendeeStatus::Attending),
            sample_attendee("Frank Miller", "frank@example.com", AttendeeStatus::Maybe),
        ],
    );
    workshop.description =
        "A fun and engaging team building session.".to_string();
    workshop.location = Location {
        address: "Central Park, New York, NY".to_string(),
        coordinates: Some(Coordinates {
            lat: 40.7829,
            lng: -73.9654,
        }),
    };

    let mut party = sample_event(
        "Product Launch Party",
        "2024-05-10",
        EventType::RsvpOnly,
        EventStatus::Completed,
        vec![
            sample_attendee("Grace Taylor", "grace@example.com", AttendeeStatus::Attending),
            sample_attendee("Henry Wilson", "henry@example.com", AttendeeStatus::Attending),
        ],
    );
    party.description =
        "Celebrate the launch of our new product.".to_string();
    party.location = Location {
        address: "Rooftop Venue, Los Angeles, CA".to_string(),
        coordinates: Some(Coordinates {
            lat: 34.0522,
            lng: -118.2437,
        }),
    };

    vec![conference, workshop, party]
}
