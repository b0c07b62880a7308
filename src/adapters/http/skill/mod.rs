//! HTTP adapter for the voice skill endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::SkillHandlers;
pub use routes::skill_routes;
