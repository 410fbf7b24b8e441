use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::{Event, EventWithOrganizer};

/// Request body for event creation. Dates are RFC 3339.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Organizer name as resolved for the public event list. `None` when the
/// organizer's account no longer exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerInfo {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub organizer: Option<OrganizerInfo>,
    pub attendees: Vec<Uuid>,
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct CreatedEventResponse {
    pub message: &'static str,
    pub event: EventResponse,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            location: e.location,
            start_date: e.start_date,
            end_date: e.end_date,
            organizer: None,
            attendees: e.attendees,
            category: e.category,
            image: e.image,
            created_at: e.created_at,
        }
    }
}

impl From<EventWithOrganizer> for EventResponse {
    fn from(row: EventWithOrganizer) -> Self {
        let organizer = match (row.organizer_first_name, row.organizer_last_name) {
            (Some(first_name), Some(last_name)) => Some(OrganizerInfo {
                id: row.organizer,
                first_name,
                last_name,
            }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
            organizer,
            attendees: row.attendees,
            category: row.category,
            image: row.image,
            created_at: row.created_at,
        }
    }
}
