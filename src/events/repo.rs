use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Event record in the database. `organizer` is a weak reference to a user and
/// is always contained in `attendees`.
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub organizer: Uuid,
    pub attendees: Vec<Uuid>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Event row joined with the organizer's name for the public listing.
#[derive(Debug, Clone, FromRow)]
pub struct EventWithOrganizer {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub organizer: Uuid,
    pub attendees: Vec<Uuid>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub organizer_first_name: Option<String>,
    pub organizer_last_name: Option<String>,
}

impl Event {
    /// Persist a new event. The organizer is automatically an attendee.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &PgPool,
        title: &str,
        description: Option<&str>,
        location: Option<&str>,
        start_date: OffsetDateTime,
        end_date: OffsetDateTime,
        organizer: Uuid,
        category: Option<&str>,
        image: Option<&str>,
    ) -> anyhow::Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events
                (title, description, location, start_date, end_date,
                 organizer, attendees, category, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, location, start_date, end_date,
                      organizer, attendees, category, image, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(location)
        .bind(start_date)
        .bind(end_date)
        .bind(organizer)
        .bind(vec![organizer])
        .bind(category)
        .bind(image)
        .fetch_one(db)
        .await?;
        Ok(event)
    }

    /// All events ordered by ascending start date, with the organizer's name
    /// resolved where the account still exists.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<EventWithOrganizer>> {
        let rows = sqlx::query_as::<_, EventWithOrganizer>(
            r#"
            SELECT e.id, e.title, e.description, e.location, e.start_date, e.end_date,
                   e.organizer, e.attendees, e.category, e.image, e.created_at,
                   u.first_name AS organizer_first_name,
                   u.last_name  AS organizer_last_name
            FROM events e
            LEFT JOIN users u ON u.id = e.organizer
            ORDER BY e.start_date ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
