//! Jobs domain: job postings, listing filters, posting management

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::listing::{JobListQuery, ListJobsParams};

// Re-export repository types
pub use repository::{JobRepository, JobsRepositories};

// Re-export API types
pub use api::routes;
pub use api::JobsState;
