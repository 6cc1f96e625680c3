//! HTTP surface of the Applications domain: handlers, routes and state

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ApplicationsState;
pub use routes::routes;
