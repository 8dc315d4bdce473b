//! Domain models and JSON envelopes

pub mod envelope;
pub mod user;

pub use envelope::{ErrorResponse, InfoResponse};
pub use user::User;
