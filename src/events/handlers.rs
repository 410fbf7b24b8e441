use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateEventRequest, CreatedEventResponse, EventResponse, OrganizerInfo};
use super::repo::Event;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
}

#[instrument(skip(state, payload), fields(user_id = %user.id))]
pub async fn create_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedEventResponse>), ApiError> {
    let event = Event::create(
        &state.db,
        &payload.title,
        payload.description.as_deref(),
        payload.location.as_deref(),
        payload.start_date,
        payload.end_date,
        user.id,
        payload.category.as_deref(),
        payload.image.as_deref(),
    )
    .await?;

    info!(event_id = %event.id, "event created");
    let mut body = EventResponse::from(event);
    body.organizer = Some(OrganizerInfo {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
    });
    Ok((
        StatusCode::CREATED,
        Json(CreatedEventResponse {
            message: "Event created successfully",
            event: body,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let rows = Event::list_all(&state.db).await?;
    Ok(Json(rows.into_iter().map(EventResponse::from).collect()))
}
