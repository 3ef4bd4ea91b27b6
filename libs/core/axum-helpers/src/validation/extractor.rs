use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::collections::HashMap;

use super::{RequestFields, RuleSet, gate};
use crate::errors::AppError;

/// A request shape described by a rule set.
///
/// `rules` runs first; `from_fields` is only called when no rule failed, so it
/// can rely on the coercions the rules guarantee.
pub trait RuleChain: Sized {
    fn rules() -> &'static RuleSet;

    fn from_fields(fields: &RequestFields) -> Option<Self>;
}

/// Extractor running [`RuleChain::rules`] over path parameters and the JSON
/// body, then handing the typed value to the handler.
///
/// Rejections:
/// - `application/json` body that does not parse: 400 `INVALID_JSON`
/// - any rule failed: 400 `{ "errors": [...] }`
///
/// An empty body, or one sent with any other content type, reads as `{}`.
///
/// ```ignore
/// async fn show(Validated(ById { id }): Validated<ById>) -> impl IntoResponse { ... }
/// ```
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: RuleChain + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without captures reject `Path`; they simply have no params.
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let is_json = json_content_type(&parts.headers);
        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;

        let body = if is_json {
            parse_body(&bytes).map_err(|e| AppError::InvalidJson(e).into_response())?
        } else {
            Value::Object(Default::default())
        };
        let fields = RequestFields::new(params, body);

        gate(T::rules().evaluate(&fields)).map_err(IntoResponse::into_response)?;

        T::from_fields(&fields).map(Validated).ok_or_else(|| {
            AppError::BadRequest("Request fields could not be read".to_string()).into_response()
        })
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn parse_body(bytes: &[u8]) -> Result<Value, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}
