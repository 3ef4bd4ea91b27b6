//! Rule sets for every product route and the typed inputs they produce.
//!
//! Messages are returned to clients verbatim.

use axum_helpers::validation::{Location, RequestFields, RuleChain, RuleSet, body, param};
use std::sync::LazyLock;

use crate::models::{CreateProduct, ProductId, ReplaceProduct};

pub const INVALID_ID: &str = "ID no valido";
pub const EMPTY_NAME: &str = "El nombre del producto esta vacio";
pub const INVALID_VALUE: &str = "Valor no válido";
pub const EMPTY_PRICE: &str = "El precio del producto esta vacio";
pub const INVALID_PRICE: &str = "Precio no válido";
pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no valido";

static BY_ID_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::new().chain(param("id").is_int(INVALID_ID)));

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .chain(body("name").not_empty(EMPTY_NAME))
        .chain(
            body("price")
                .is_numeric(INVALID_VALUE)
                .not_empty(EMPTY_PRICE)
                .positive(INVALID_VALUE),
        )
});

static REPLACE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .chain(param("id").is_int(INVALID_ID))
        .chain(body("name").not_empty(EMPTY_NAME))
        .chain(
            body("price")
                .is_numeric(INVALID_VALUE)
                .not_empty(EMPTY_PRICE)
                .positive(INVALID_PRICE),
        )
        .chain(body("availability").is_boolean(INVALID_AVAILABILITY))
});

/// `{id}` of `GET`, `PATCH` and `DELETE /{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPath {
    pub id: ProductId,
}

impl RuleChain for ProductPath {
    fn rules() -> &'static RuleSet {
        &BY_ID_RULES
    }

    fn from_fields(fields: &RequestFields) -> Option<Self> {
        Some(Self {
            id: fields.param_int("id")?,
        })
    }
}

impl RuleChain for CreateProduct {
    fn rules() -> &'static RuleSet {
        &CREATE_RULES
    }

    fn from_fields(fields: &RequestFields) -> Option<Self> {
        Some(Self {
            name: fields.text(Location::Body, "name")?,
            price: fields.number(Location::Body, "price")?,
        })
    }
}

/// `PUT /{id}`: target id plus the full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceProductRequest {
    pub id: ProductId,
    pub input: ReplaceProduct,
}

impl RuleChain for ReplaceProductRequest {
    fn rules() -> &'static RuleSet {
        &REPLACE_RULES
    }

    fn from_fields(fields: &RequestFields) -> Option<Self> {
        Some(Self {
            id: fields.param_int("id")?,
            input: ReplaceProduct {
                name: fields.text(Location::Body, "name")?,
                price: fields.number(Location::Body, "price")?,
                availability: fields.boolean(Location::Body, "availability")?,
            },
        })
    }
}
