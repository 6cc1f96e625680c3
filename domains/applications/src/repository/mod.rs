//! Repository implementations for Applications domain

pub mod applications;

use devheaven_jobs::JobRepository;
use devheaven_store::DocumentStore;
use std::sync::Arc;

pub use applications::ApplicationRepository;

/// Combined repository access for the Applications domain
#[derive(Clone)]
pub struct ApplicationsRepositories {
    pub applications: ApplicationRepository,
    /// Job postings, for the per-job application counter
    pub jobs: JobRepository,
}

impl ApplicationsRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            applications: ApplicationRepository::new(store.clone()),
            jobs: JobRepository::new(store),
        }
    }
}
