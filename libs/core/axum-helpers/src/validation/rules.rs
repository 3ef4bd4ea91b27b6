use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::fields::{RequestFields, text_form};
use super::{Location, Violation};

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").expect("valid regex"));

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("valid regex"));

pub(crate) fn is_integer_text(text: &str) -> bool {
    INTEGER_REGEX.is_match(text) && text.parse::<i64>().is_ok()
}

pub(crate) fn is_numeric_text(text: &str) -> bool {
    NUMERIC_REGEX.is_match(text)
}

/// Predicate over a field's raw value (`None` when absent).
pub type CustomCheck = fn(Option<&Value>) -> bool;

#[derive(Clone, Copy)]
enum Check {
    IsInt,
    IsNumeric,
    IsBoolean,
    NotEmpty,
    Custom(CustomCheck),
}

impl Check {
    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Check::IsInt => text_form(value).is_some_and(|t| is_integer_text(&t)),
            Check::IsNumeric => text_form(value).is_some_and(|t| is_numeric_text(&t)),
            Check::IsBoolean => {
                text_form(value).is_some_and(|t| matches!(t.as_str(), "true" | "false" | "1" | "0"))
            }
            Check::NotEmpty => text_form(value).is_some_and(|t| !t.trim().is_empty()),
            Check::Custom(predicate) => predicate(value),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Check::IsInt => "is_int",
            Check::IsNumeric => "is_numeric",
            Check::IsBoolean => "is_boolean",
            Check::NotEmpty => "not_empty",
            Check::Custom(_) => "custom",
        }
    }
}

/// `value > 0` with loose numeric coercion: numeric strings are parsed,
/// booleans count as 1 and 0, anything else fails.
pub fn is_positive(value: Option<&Value>) -> bool {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    number.is_some_and(|n| n.is_finite() && n > 0.0)
}

#[derive(Clone)]
struct Rule {
    location: Location,
    field: &'static str,
    check: Check,
    message: &'static str,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.location, self.field, self.check.name())
    }
}

/// Ordered checks on one field, each with its own message.
///
/// ```
/// use axum_helpers::validation::{body, param};
///
/// let id = param("id").is_int("bad id");
/// let price = body("price").is_numeric("not a number").positive("must be > 0");
/// ```
#[derive(Debug, Clone)]
pub struct FieldChain {
    location: Location,
    field: &'static str,
    rules: Vec<Rule>,
}

/// Start a chain on a path parameter.
pub fn param(field: &'static str) -> FieldChain {
    FieldChain::new(Location::Params, field)
}

/// Start a chain on a top-level JSON body field.
pub fn body(field: &'static str) -> FieldChain {
    FieldChain::new(Location::Body, field)
}

impl FieldChain {
    fn new(location: Location, field: &'static str) -> Self {
        Self {
            location,
            field,
            rules: Vec::new(),
        }
    }

    fn push(mut self, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule {
            location: self.location,
            field: self.field,
            check,
            message,
        });
        self
    }

    pub fn is_int(self, message: &'static str) -> Self {
        self.push(Check::IsInt, message)
    }

    pub fn is_numeric(self, message: &'static str) -> Self {
        self.push(Check::IsNumeric, message)
    }

    pub fn is_boolean(self, message: &'static str) -> Self {
        self.push(Check::IsBoolean, message)
    }

    pub fn not_empty(self, message: &'static str) -> Self {
        self.push(Check::NotEmpty, message)
    }

    pub fn positive(self, message: &'static str) -> Self {
        self.push(Check::Custom(is_positive), message)
    }

    pub fn custom(self, predicate: CustomCheck, message: &'static str) -> Self {
        self.push(Check::Custom(predicate), message)
    }
}

/// All checks for one endpoint, flattened in declaration order.
///
/// Evaluation never stops early: every rule runs and every failure is
/// reported, in the order the chains and their checks were declared.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, chain: FieldChain) -> Self {
        self.rules.extend(chain.rules);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn evaluate(&self, fields: &RequestFields) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = fields.raw(rule.location, rule.field);
                if rule.check.passes(value.as_ref()) {
                    None
                } else {
                    Some(Violation::field(rule.location, rule.field, value, rule.message))
                }
            })
            .collect()
    }
}
