//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::ValidationErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one entry per failed field rule",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "abc",
            "msg": "ID no valido",
            "path": "id",
            "location": "params"
        }]
    })
)]
pub struct ValidationErrorsResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body is not valid JSON",
    content_type = "application/json",
    example = json!({
        "code": 1010,
        "error": "INVALID_JSON",
        "message": "Invalid JSON format: key must be a string at line 1 column 2"
    })
)]
pub struct InvalidJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2003,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
