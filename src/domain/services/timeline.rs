use chrono::NaiveDate;

use crate::domain::models::event::{Event, EventStatus, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    fn matches(self, event_type: EventType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => event_type == wanted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Ongoing,
    Upcoming,
    Past,
}

/// Assigns an event to its display bucket. `today` is passed in so the
/// rules stay independent of wall-clock time. First matching rule wins:
/// ongoing status, then future-dated upcoming, then past-dated or
/// completed. An `upcoming` event dated today matches no rule and is
/// shown nowhere — known gap, kept as-is.
pub fn categorize(event: &Event, today: NaiveDate) -> Option<Bucket> {
    if event.status == EventStatus::Ongoing {
        return Some(Bucket::Ongoing);
    }
    if event.date > today && event.status == EventStatus::Upcoming {
        return Some(Bucket::Upcoming);
    }
    if event.date < today || event.status == EventStatus::Completed {
        return Some(Bucket::Past);
    }
    None
}

/// Case-insensitive substring match over title, description and address.
pub fn matches_query(event: &Event, query: &str) -> bool {
    let needle = query.to_lowercase();
    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
        || event.location.address.to_lowercase().contains(&needle)
}

/// Bucketed view of the collection; each bucket keeps collection order.
#[derive(Debug, Default)]
pub struct Timeline {
    pub ongoing: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

impl Timeline {
    pub fn total(&self) -> usize {
        self.ongoing.len() + self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Applies the type filter, then the search query, then buckets the
/// survivors.
pub fn build_timeline(
    events: &[Event],
    filter: TypeFilter,
    query: &str,
    today: NaiveDate,
) -> Timeline {
    let mut timeline = Timeline::default();

    for event in events {
        if !filter.matches(event.event_type) {
            continue;
        }
        if !query.is_empty() && !matches_query(event, query) {
            continue;
        }

        match categorize(event, today) {
            Some(Bucket::Ongoing) => timeline.ongoing.push(event.clone()),
            Some(Bucket::Upcoming) => timeline.upcoming.push(event.clone()),
            Some(Bucket::Past) => timeline.past.push(event.clone()),
            None => {}
        }
    }

    timeline
}
