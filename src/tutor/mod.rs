use crate::state::AppState;
use axum::Router;

pub mod client;
mod dto;
pub mod handlers;
mod prompt;

pub fn router() -> Router<AppState> {
    handlers::tutor_routes()
}
