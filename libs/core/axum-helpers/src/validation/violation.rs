use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::ErrorCode;

/// Part of the request a field was read from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed rule.
///
/// ```json
/// { "type": "field", "value": "abc", "msg": "ID no valido", "path": "id", "location": "params" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw value as received; absent when the field was not sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl Violation {
    pub fn field(
        location: Location,
        path: impl Into<String>,
        value: Option<Value>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// 400 body listing every violation in rule declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<Violation>,
}

impl ValidationErrors {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|v| v.msg.as_str())
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::info!(
            error_code = ErrorCode::ValidationError.code(),
            violations = self.errors.len(),
            fields = ?self.errors.iter().map(|v| v.path.as_str()).collect::<Vec<_>>(),
            "Request rejected by validation"
        );
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Decide whether a request may proceed past validation.
///
/// An empty list passes; anything else becomes the 400 response.
pub fn gate(violations: Vec<Violation>) -> Result<(), ValidationErrors> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors: violations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_violation_wire_shape() {
        let violation = Violation::field(Location::Params, "id", Some(json!("abc")), "ID no valido");
        assert_eq!(
            serde_json::to_value(&violation).unwrap(),
            json!({
                "type": "field",
                "value": "abc",
                "msg": "ID no valido",
                "path": "id",
                "location": "params"
            })
        );
    }

    #[test]
    fn test_absent_value_is_omitted() {
        let violation = Violation::field(Location::Body, "name", None, "required");
        let json = serde_json::to_value(&violation).unwrap();
        assert!(json.get("value").is_none());
        assert_eq!(json["location"], "body");
    }

    #[test]
    fn test_gate_passes_empty_list() {
        assert!(gate(Vec::new()).is_ok());
    }

    #[test]
    fn test_gate_keeps_order() {
        let errors = gate(vec![
            Violation::field(Location::Body, "name", None, "first"),
            Violation::field(Location::Body, "price", None, "second"),
        ])
        .unwrap_err();

        assert_eq!(errors.messages().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_gate_response_is_400() {
        let response = gate(vec![Violation::field(Location::Body, "x", None, "bad")])
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Params.to_string(), "params");
        assert_eq!(Location::Body.to_string(), "body");
    }
}
