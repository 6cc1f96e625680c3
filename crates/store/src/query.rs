//! Filter and sort model shared by all document store backends
//!
//! Filters are a conjunction of conditions on dotted field paths
//! (`salaryRange.min`). The in-memory backend evaluates them directly;
//! the Postgres backend compiles them to JSONB path expressions.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::ID_FIELD;

/// A stored document: always a JSON object
pub type Document = Map<String, Value>;

/// Dotted path into a document (`salaryRange.min` -> `["salaryRange", "min"]`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(dotted: &str) -> Self {
        Self(dotted.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Value at this path, if every segment resolves through objects
    pub fn lookup<'a>(&self, document: &'a Document) -> Option<&'a Value> {
        let (first, rest) = self.0.split_first()?;
        let mut current = document.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A single predicate on one field
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals the JSON value
    Eq { path: FieldPath, value: Value },
    /// Field is a string containing `needle`, ignoring case
    ContainsIgnoreCase { path: FieldPath, needle: String },
    /// Field is a number `>= bound`
    Gte { path: FieldPath, bound: f64 },
    /// Field is a number `<= bound`
    Lte { path: FieldPath, bound: f64 },
}

impl Condition {
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::Eq { path, .. }
            | Self::ContainsIgnoreCase { path, .. }
            | Self::Gte { path, .. }
            | Self::Lte { path, .. } => path,
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        let field = self.path().lookup(document);
        match self {
            Self::Eq { value, .. } => field.is_some_and(|f| json_eq(f, value)),
            Self::ContainsIgnoreCase { needle, .. } => field
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle.to_lowercase())),
            Self::Gte { bound, .. } => field
                .and_then(Value::as_f64)
                .is_some_and(|n| n >= *bound),
            Self::Lte { bound, .. } => field
                .and_then(Value::as_f64)
                .is_some_and(|n| n <= *bound),
        }
    }
}

/// Numbers compare by value (`1 == 1.0`), everything else structurally
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Conjunction of conditions; the empty filter matches every document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq {
            path: path.into(),
            value: value.into(),
        });
        self
    }

    pub fn contains_ignore_case(mut self, path: &str, needle: impl Into<String>) -> Self {
        self.conditions.push(Condition::ContainsIgnoreCase {
            path: path.into(),
            needle: needle.into(),
        });
        self
    }

    pub fn gte(mut self, path: &str, bound: f64) -> Self {
        self.conditions.push(Condition::Gte {
            path: path.into(),
            bound,
        });
        self
    }

    pub fn lte(mut self, path: &str, bound: f64) -> Self {
        self.conditions.push(Condition::Lte {
            path: path.into(),
            bound,
        });
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|c| c.matches(document))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-key sort. Documents without the key sort lowest.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub path: FieldPath,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(path: &str) -> Self {
        Self {
            path: path.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(path: &str) -> Self {
        Self {
            path: path.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Ordering of two documents under this sort
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ordering = compare_values(self.path.lookup(a), self.path.lookup(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Rank of a JSON type in sort order, matching Postgres `jsonb` ordering.
/// Missing and null rank lowest.
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::String(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::Bool(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Options for `DocumentStore::find`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub filter: Filter,
    pub sort: Option<Sort>,
    pub limit: Option<u64>,
}

impl FindOptions {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Copy of `fields` from `source`, for a whitelisted `$set` update.
/// A field missing from `source` is set to null.
pub fn select_fields(source: &Document, fields: &[&str]) -> Document {
    fields
        .iter()
        .map(|field| {
            let value = source.get(*field).cloned().unwrap_or(Value::Null);
            (field.to_string(), value)
        })
        .collect()
}

/// Write `fields` onto `document`, returning whether anything changed.
/// The identity field is never written.
pub(crate) fn apply_set(document: &mut Document, fields: Document) -> bool {
    let mut modified = false;
    for (key, value) in fields {
        if key == ID_FIELD {
            continue;
        }
        if document.get(&key) != Some(&value) {
            document.insert(key, value);
            modified = true;
        }
    }
    modified
}

/// Copy of a stored document with its identity exposed as `_id`
pub(crate) fn with_identity(id: Uuid, mut document: Document) -> Document {
    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    document
}
