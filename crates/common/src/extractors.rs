//! Custom axum extractors for DevHeaven

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::Error;

/// JSON body extractor that only accepts a top-level JSON object.
///
/// Documents are stored as-is, so the body must be an object; arrays,
/// scalars and malformed JSON are all rejected with 400.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Rejection type for `JsonObject`: every failure maps to `Error::Validation`
#[derive(Debug)]
pub struct JsonObjectRejection(JsonRejection);

impl IntoResponse for JsonObjectRejection {
    fn into_response(self) -> Response {
        Error::Validation(self.0.body_text()).into_response()
    }
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = JsonObjectRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(JsonObjectRejection)?;
        Ok(JsonObject(value))
    }
}
