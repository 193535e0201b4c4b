use chrono::{Duration, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

use crate::domain::models::event::Event;

/// Generates an iCalendar (.ics) string for an event
pub fn generate_ics(event: &Event) -> String {
    let start = Utc.from_utc_datetime(&NaiveDateTime::new(event.date, event.time));
    // The model carries no end time; block out one hour.
    let end = start + Duration::hours(1);

    let mut calendar = Calendar::new();

    let ical_event = IcalEvent::new()
        .summary(&event.title)
        .description(&event.description)
        .location(&event.location.address)
        .starts(start)
        .ends(end)
        .uid(&event.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
