use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use super::Location;
use super::rules::{is_integer_text, is_numeric_text};

/// Raw inputs a rule set can inspect: captured path parameters and the JSON body.
#[derive(Debug, Clone, Default)]
pub struct RequestFields {
    params: HashMap<String, String>,
    body: Value,
}

impl RequestFields {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self { params, body }
    }

    pub fn from_body(body: Value) -> Self {
        Self::new(HashMap::new(), body)
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Raw value of a field, `None` when it was not sent.
    pub fn raw(&self, location: Location, name: &str) -> Option<Value> {
        match location {
            Location::Params => self.params.get(name).cloned().map(Value::String),
            Location::Body => self.body.get(name).cloned(),
        }
    }

    /// Field read as text, stringifying numbers and booleans.
    pub fn text(&self, location: Location, name: &str) -> Option<String> {
        text_form(self.raw(location, name).as_ref())
    }

    /// Field read as a number, accepting numeric strings.
    pub fn number(&self, location: Location, name: &str) -> Option<f64> {
        match self.raw(location, name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if is_numeric_text(&s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Field read as a boolean, accepting `"true"`, `"false"`, `"1"` and `"0"`.
    pub fn boolean(&self, location: Location, name: &str) -> Option<bool> {
        match text_form(self.raw(location, name).as_ref())?.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Path parameter parsed as a 64-bit integer.
    pub fn param_int(&self, name: &str) -> Option<i64> {
        let raw = self.params.get(name)?;
        if is_integer_text(raw) {
            raw.parse().ok()
        } else {
            None
        }
    }

    pub fn body_object(&self) -> Option<&Map<String, Value>> {
        self.body.as_object()
    }
}

/// Text form used by the rules: missing and `null` read as the empty string,
/// arrays and objects have none.
pub(crate) fn text_form(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(number_text(n)),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    }
}

/// Decimal rendering of a JSON number.
///
/// Plain notation for `1e-7 <= |x| < 1e21`, exponent form outside that
/// range, matching how clients print numbers.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(x) if x == 0.0 || (1e-7..1e21).contains(&x.abs()) => x.to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> RequestFields {
        RequestFields::from_body(json!({
            "name": "Monitor",
            "count": 3,
            "price": "48.5",
            "flag": "1",
            "off": false,
            "nothing": null,
            "list": [1, 2]
        }))
        .with_param("id", "42")
    }

    #[test]
    fn test_raw_distinguishes_missing_from_null() {
        let f = fields();
        assert_eq!(f.raw(Location::Body, "nothing"), Some(Value::Null));
        assert_eq!(f.raw(Location::Body, "absent"), None);
        assert_eq!(f.raw(Location::Params, "id"), Some(json!("42")));
    }

    #[test]
    fn test_text_coercion() {
        let f = fields();
        assert_eq!(f.text(Location::Body, "name").as_deref(), Some("Monitor"));
        assert_eq!(f.text(Location::Body, "count").as_deref(), Some("3"));
        assert_eq!(f.text(Location::Body, "off").as_deref(), Some("false"));
        assert_eq!(f.text(Location::Body, "nothing").as_deref(), Some(""));
        assert_eq!(f.text(Location::Body, "list"), None);
    }

    #[test]
    fn test_large_numbers_render_without_exponent() {
        assert_eq!(text_form(Some(&json!(1e16))).as_deref(), Some("10000000000000000"));
        assert_eq!(
            text_form(Some(&json!(100000000000000000000u128 as f64))).as_deref(),
            Some("100000000000000000000")
        );
        assert_eq!(text_form(Some(&json!(20000000000000000.0))).as_deref(), Some("20000000000000000"));
        assert_eq!(text_form(Some(&json!(48.0))).as_deref(), Some("48"));
        assert_eq!(text_form(Some(&json!(0.00001))).as_deref(), Some("0.00001"));
        assert_eq!(text_form(Some(&json!(u64::MAX))).as_deref(), Some("18446744073709551615"));
    }

    #[test]
    fn test_out_of_range_numbers_keep_exponent() {
        let huge = text_form(Some(&json!(1e21))).unwrap();
        assert!(huge.contains('e'), "{huge}");
        let tiny = text_form(Some(&json!(1e-8))).unwrap();
        assert!(tiny.contains('e'), "{tiny}");
    }

    #[test]
    fn test_number_coercion() {
        let f = fields();
        assert_eq!(f.number(Location::Body, "count"), Some(3.0));
        assert_eq!(f.number(Location::Body, "price"), Some(48.5));
        assert_eq!(f.number(Location::Body, "name"), None);
        assert_eq!(f.number(Location::Body, "off"), None);
    }

    #[test]
    fn test_boolean_coercion() {
        let f = fields();
        assert_eq!(f.boolean(Location::Body, "flag"), Some(true));
        assert_eq!(f.boolean(Location::Body, "off"), Some(false));
        assert_eq!(f.boolean(Location::Body, "name"), None);
        assert_eq!(f.boolean(Location::Body, "absent"), None);
    }

    #[test]
    fn test_param_int() {
        let f = fields().with_param("bad", "12abc").with_param("huge", "99999999999999999999");
        assert_eq!(f.param_int("id"), Some(42));
        assert_eq!(f.param_int("bad"), None);
        assert_eq!(f.param_int("huge"), None);
        assert_eq!(f.param_int("missing"), None);
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        let f = RequestFields::from_body(json!(["name"]));
        assert_eq!(f.raw(Location::Body, "name"), None);
        assert!(f.body_object().is_none());
    }
}
