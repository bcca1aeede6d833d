//! Literal building blocks of the generated script
//!
//! Numbers are printed in their shortest decimal form (`2`, `1.1`, `-0.5`)
//! and strings are JSON-escaped, so the output can be compared as text.

use crate::core::Options;
use serde_json::Value;
use std::fmt;

/// Renders a number the way a script literal is written by hand
pub fn number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_negative() {
        "-Infinity".to_string()
    } else {
        "Infinity".to_string()
    }
}

/// Renders a double quoted, escaped string literal
pub fn string(value: &str) -> String {
    Value::from(value).to_string()
}

/// Renders a JSON value as a compact literal
pub fn value(value: &Value) -> String {
    value.to_string()
}

/// Renders `[a,b,c]` from already rendered items
pub fn array<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    let parts: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", parts.join(","))
}

/// Object literal whose values are raw script expressions
///
/// Keys keep insertion order; the first insertion of a key wins so geometry
/// keys cannot be overridden by free-form options added afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    entries: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw expression, ignored if the key is already present
    pub fn push(&mut self, key: impl Into<String>, expression: impl Into<String>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, expression.into()));
        }
    }

    pub fn with(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.push(key, expression);
        self
    }

    pub fn push_value(&mut self, key: impl Into<String>, json: &Value) {
        self.push(key, value(json));
    }

    /// Appends free-form options in their own order
    pub fn extend_options(&mut self, options: &Options) {
        for (key, json) in options {
            self.push_value(key.as_str(), json);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, expression)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", string(key), expression)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(1.1), "1.1");
        assert_eq!(number(-2.1), "-2.1");
        assert_eq!(number(2.0), "2");
        assert_eq!(number(0.0000001), "0.0000001");
        assert_eq!(number(f64::INFINITY), "Infinity");
        assert_eq!(number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number(f64::NAN), "NaN");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(string("content"), r#""content""#);
        assert_eq!(string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(string("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_array() {
        assert_eq!(array(["1", "2"]), "[1,2]");
        assert_eq!(array(Vec::<String>::new()), "[]");
    }

    #[test]
    fn test_object_first_key_wins() {
        let mut object = JsObject::new().with("map", "map_1").with("radius", "2");

        let mut options = Options::new();
        options.insert("map".to_string(), json!("other"));
        options.insert("strokeColor".to_string(), json!("#FF0000"));
        options.insert("zIndex".to_string(), json!(4));
        object.extend_options(&options);

        assert_eq!(
            object.to_string(),
            r##"{"map":map_1,"radius":2,"strokeColor":"#FF0000","zIndex":4}"##
        );
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().to_string(), "{}");
        assert!(JsObject::new().is_empty());
    }
}
