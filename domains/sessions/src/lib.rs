//! Sessions domain: issuing and clearing the session cookie

pub mod api;

// Re-export API types
pub use api::handlers::sessions::SessionResponse;
pub use api::routes;
pub use api::SessionsState;
