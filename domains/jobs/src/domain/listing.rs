//! Job listing rules for `GET /jobs`

use devheaven_store::{Filter, FindOptions, Sort};
use serde::{Deserialize, Deserializer};

use super::entities::{HR_EMAIL_FIELD, SALARY_MAX_FIELD, SALARY_MIN_FIELD, TITLE_FIELD};

/// Postings shown on the home page
pub const HOME_PAGE_LIMIT: u64 = 6;

/// Query parameters for listing jobs.
///
/// Every parameter is optional free text; an empty value counts as absent.
/// A repeated key keeps its first value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsParams {
    #[serde(default, deserialize_with = "first_value")]
    pub home: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub min: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub max: Option<String>,
}

fn first_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(values.into_iter().next())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ListJobsParams {
    /// Salary bounds, only when both parse as integers
    fn salary_bounds(&self) -> Option<(i64, i64)> {
        let min = present(&self.min)?.trim().parse().ok()?;
        let max = present(&self.max)?.trim().parse().ok()?;
        Some((min, max))
    }
}

/// A resolved job listing query
#[derive(Debug, Clone, PartialEq)]
pub enum JobListQuery {
    /// First postings in store order, nothing else applied
    HomePage,
    /// Filtered and optionally sorted listing
    Filtered { filter: Filter, sort: Option<Sort> },
}

impl From<&ListJobsParams> for JobListQuery {
    fn from(params: &ListJobsParams) -> Self {
        if present(&params.home).is_some() {
            return Self::HomePage;
        }

        let mut filter = Filter::new();
        if let Some(email) = present(&params.email) {
            filter = filter.eq(HR_EMAIL_FIELD, email);
        }

        // Search replaces the owner filter rather than narrowing it
        if let Some(search) = present(&params.search) {
            filter = Filter::new().contains_ignore_case(TITLE_FIELD, search);
        }

        if let Some((min, max)) = params.salary_bounds() {
            filter = filter
                .lte(SALARY_MAX_FIELD, max as f64)
                .gte(SALARY_MIN_FIELD, min as f64);
        }

        let sort = (params.sort.as_deref() == Some("true"))
            .then(|| Sort::descending(SALARY_MIN_FIELD));

        Self::Filtered { filter, sort }
    }
}

impl JobListQuery {
    pub fn into_find_options(self) -> FindOptions {
        match self {
            Self::HomePage => FindOptions::default().with_limit(HOME_PAGE_LIMIT),
            Self::Filtered { filter, sort } => {
                let options = FindOptions::new(filter);
                match sort {
                    Some(sort) => options.with_sort(sort),
                    None => options,
                }
            }
        }
    }
}
