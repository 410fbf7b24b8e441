use crate::state::AppState;
use axum::Router;

mod claims;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub(crate) mod jwt;
pub(crate) mod password;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
