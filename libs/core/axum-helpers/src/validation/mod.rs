//! Declarative request validation.
//!
//! A [`RuleSet`] is an ordered list of field checks built with [`param`] and
//! [`body`]. Evaluating it yields every [`Violation`]; [`gate`] turns a
//! non-empty list into a 400 response. [`Validated`] wires both into an axum
//! extractor so handlers only ever see requests that passed.
//!
//! ```
//! use axum_helpers::validation::{RequestFields, RuleSet, body, gate};
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .chain(body("name").not_empty("name is required"))
//!     .chain(body("price").is_numeric("price must be a number").positive("price must be > 0"));
//!
//! let violations = rules.evaluate(&RequestFields::from_body(json!({ "price": "abc" })));
//! assert_eq!(violations.len(), 3);
//! assert!(gate(violations).is_err());
//! ```

mod extractor;
mod fields;
mod rules;
mod violation;

pub use extractor::{RuleChain, Validated};
pub use fields::RequestFields;
pub use rules::{CustomCheck, FieldChain, RuleSet, body, is_positive, param};
pub use violation::{Location, ValidationErrors, Violation, gate};
