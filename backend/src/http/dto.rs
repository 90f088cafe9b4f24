//! Data Transfer Objects for the HTTP API.
//!
//! POST bodies arrive either flat or wrapped under a `parameters` key (the
//! shape agent frameworks send). [`RequestEnvelope`] models both shapes and
//! [`parse_request`] normalizes them into the canonical request struct before
//! anything reaches the service layer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use crate::api::{
    CompareKpisRequest, DeltaKpis, GetKpisRequest, SiteInfo, SiteKpis, ToolManifest,
};

/// Either `{"parameters": {...}}` or the bare field object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestEnvelope {
    Wrapped { parameters: Map<String, Value> },
    Flat(Map<String, Value>),
}

impl RequestEnvelope {
    /// The request fields regardless of the envelope shape.
    pub fn into_parameters(self) -> Map<String, Value> {
        match self {
            RequestEnvelope::Wrapped { parameters } => parameters,
            RequestEnvelope::Flat(fields) => fields,
        }
    }
}

/// Rejections produced while turning a request body into a canonical request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid request: {0}")]
    Invalid(String),
}

impl RequestError {
    /// Name of the offending field, if one can be pinpointed.
    pub fn field(&self) -> Option<&str> {
        match self {
            RequestError::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Canonical requests validate their own field contents after deserialization.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), RequestError>;
}

fn require_site_id(site_id: &str) -> Result<(), RequestError> {
    if site_id.trim().is_empty() {
        return Err(RequestError::InvalidField {
            field: "site_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

impl ValidateRequest for GetKpisRequest {
    fn validate(&self) -> Result<(), RequestError> {
        require_site_id(&self.site_id)
    }
}

impl ValidateRequest for CompareKpisRequest {
    fn validate(&self) -> Result<(), RequestError> {
        require_site_id(&self.site_id)
    }
}

/// Parse a POST body in either envelope shape into `T`.
pub fn parse_request<T>(body: &[u8]) -> Result<T, RequestError>
where
    T: DeserializeOwned + ValidateRequest,
{
    let value: Value = serde_json::from_slice(body).map_err(RequestError::MalformedJson)?;
    let envelope =
        RequestEnvelope::deserialize(value).map_err(|_| RequestError::NotAnObject)?;

    let fields = Value::Object(envelope.into_parameters());
    let request: T = serde_path_to_error::deserialize(fields).map_err(|err| {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        if path == "." {
            // Missing fields are reported against the object itself
            RequestError::Invalid(message)
        } else {
            RequestError::InvalidField {
                field: path,
                message,
            }
        }
    })?;

    request.validate()?;
    Ok(request)
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    #[test]
    fn test_flat_and_wrapped_bodies_normalize_identically() {
        let flat: GetKpisRequest =
            parse_request(br#"{"site_id": "helsinki-hq", "period": "last_month"}"#).unwrap();
        let wrapped: GetKpisRequest = parse_request(
            br#"{"parameters": {"site_id": "helsinki-hq", "period": "last_month"}}"#,
        )
        .unwrap();
        assert_eq!(flat, wrapped);
        assert_eq!(flat.period, Period::LastMonth);
    }

    #[test]
    fn test_envelope_variants() {
        let wrapped: RequestEnvelope =
            serde_json::from_str(r#"{"parameters": {"site_id": "a"}}"#).unwrap();
        assert!(matches!(wrapped, RequestEnvelope::Wrapped { .. }));

        let flat: RequestEnvelope = serde_json::from_str(r#"{"site_id": "a"}"#).unwrap();
        assert!(matches!(flat, RequestEnvelope::Flat(_)));

        // A non-object `parameters` is just another flat field
        let odd: RequestEnvelope =
            serde_json::from_str(r#"{"parameters": "x", "site_id": "a"}"#).unwrap();
        assert_eq!(odd.into_parameters().len(), 2);
    }

    #[test]
    fn test_unknown_period_names_the_field() {
        let err = parse_request::<CompareKpisRequest>(
            br#"{"parameters": {"site_id": "helsinki-hq", "previous_period": "yesterday"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("previous_period"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_missing_site_id() {
        let err = parse_request::<GetKpisRequest>(br#"{"period": "current"}"#).unwrap_err();
        assert!(matches!(err, RequestError::Invalid(_)));
        assert!(err.to_string().contains("site_id"));
    }

    #[test]
    fn test_blank_site_id() {
        let err = parse_request::<GetKpisRequest>(br#"{"site_id": "  "}"#).unwrap_err();
        assert_eq!(err.field(), Some("site_id"));
    }

    #[test]
    fn test_wrong_type_names_the_field() {
        let err = parse_request::<GetKpisRequest>(br#"{"site_id": 42}"#).unwrap_err();
        assert_eq!(err.field(), Some("site_id"));
    }

    #[test]
    fn test_malformed_and_non_object_bodies() {
        assert!(matches!(
            parse_request::<GetKpisRequest>(b"{not json"),
            Err(RequestError::MalformedJson(_))
        ));
        assert!(matches!(
            parse_request::<GetKpisRequest>(b""),
            Err(RequestError::MalformedJson(_))
        ));
        assert!(matches!(
            parse_request::<GetKpisRequest>(br#"["helsinki-hq"]"#),
            Err(RequestError::NotAnObject)
        ));
    }
}
