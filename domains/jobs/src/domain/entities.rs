//! Job posting document fields
//!
//! Job postings are schemaless documents; this module names the fields
//! the API reads or writes and the whitelist applied on update.

use devheaven_store::{select_fields, Document};

/// Posting title, matched by the listing search
pub const TITLE_FIELD: &str = "title";

/// Email of the HR contact who owns the posting
pub const HR_EMAIL_FIELD: &str = "hr_email";

/// Number of applications received
pub const APPLY_COUNT_FIELD: &str = "applyCount";

pub const SALARY_MIN_FIELD: &str = "salaryRange.min";
pub const SALARY_MAX_FIELD: &str = "salaryRange.max";

/// Fields an owner may overwrite with `PATCH /updateMyPost/{id}`
pub const JOB_UPDATE_FIELDS: [&str; 14] = [
    "title",
    "location",
    "jobType",
    "category",
    "applicationDeadline",
    "salaryRange",
    "description",
    "company",
    "requirements",
    "responsibilities",
    "status",
    "hr_email",
    "hr_name",
    "company_logo",
];

/// Fields written by a posting update.
///
/// Every whitelisted field is written; those missing from `body` become
/// null, and anything outside the whitelist is dropped.
pub fn job_update(body: &Document) -> Document {
    select_fields(body, &JOB_UPDATE_FIELDS)
}
