//! Application document fields

use devheaven_store::{select_fields, Document};
use serde_json::Value;
use uuid::Uuid;

/// Candidate email, the owner of an application
pub const EMAIL_FIELD: &str = "email";

/// Identity of the job posting applied to, stored as a string
pub const JOB_ID_FIELD: &str = "jobId";

/// Review status set by the recruiter
pub const STATUS_FIELD: &str = "status";

/// Fields a candidate may overwrite with `PATCH /updateApplication/{id}`
pub const APPLICATION_UPDATE_FIELDS: [&str; 7] = [
    "companyName",
    "position",
    "jobId",
    "email",
    "linkDing",
    "github",
    "resume",
];

/// Fields written by `PATCH /review-application/{id}`
pub const APPLICATION_REVIEW_FIELDS: [&str; 1] = [STATUS_FIELD];

/// Fields written by a candidate's update; missing ones become null
pub fn application_update(body: &Document) -> Document {
    select_fields(body, &APPLICATION_UPDATE_FIELDS)
}

/// Fields written by a review; a missing status becomes null
pub fn application_review(body: &Document) -> Document {
    select_fields(body, &APPLICATION_REVIEW_FIELDS)
}

/// The job posting an application refers to, if `jobId` is a valid identity
pub fn referenced_job(application: &Document) -> Option<Uuid> {
    application
        .get(JOB_ID_FIELD)
        .and_then(Value::as_str)
        .and_then(|id| Uuid::parse_str(id).ok())
}
