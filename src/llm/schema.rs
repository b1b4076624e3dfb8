//! Declarative response schema
//!
//! One `Schema` value does double duty: it serializes into the request's
//! `responseSchema` declaration and shape-checks the parsed reply. Using the
//! same description on both sides keeps the declared and parsed shapes from
//! drifting apart.

use serde_json::{Map, Value, json};

/// Structural type description for the service's structured output
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Integer,
    Array(Box<Schema>),
    /// Named fields, in declaration order
    Object(Vec<(&'static str, Schema)>),
}

impl Schema {
    /// Shorthand for an array of `item`
    pub fn array(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    /// Serialize into the service's schema declaration (uppercase type tags)
    pub fn to_request_json(&self) -> Value {
        match self {
            Self::String => json!({ "type": "STRING" }),
            Self::Integer => json!({ "type": "INTEGER" }),
            Self::Array(item) => json!({
                "type": "ARRAY",
                "items": item.to_request_json(),
            }),
            Self::Object(fields) => {
                let mut properties = Map::new();
                for (name, field) in fields {
                    properties.insert((*name).to_string(), field.to_request_json());
                }
                json!({ "type": "OBJECT", "properties": properties })
            }
        }
    }

    /// Shape-check a parsed reply against this schema
    ///
    /// Declared object fields must be present with matching types; array
    /// lengths are not constrained and undeclared fields are ignored.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        self.check_at(value, "$")
    }

    fn check_at(&self, value: &Value, path: &str) -> Result<(), String> {
        match self {
            Self::String => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(format!("{path}: expected string"))
                }
            }
            Self::Integer => {
                if value.is_i64() || value.is_u64() {
                    Ok(())
                } else {
                    Err(format!("{path}: expected integer"))
                }
            }
            Self::Array(item) => {
                let values = value
                    .as_array()
                    .ok_or_else(|| format!("{path}: expected array"))?;
                for (i, v) in values.iter().enumerate() {
                    item.check_at(v, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Self::Object(fields) => {
                let object = value
                    .as_object()
                    .ok_or_else(|| format!("{path}: expected object"))?;
                for (name, field) in fields {
                    let v = object
                        .get(*name)
                        .ok_or_else(|| format!("{path}.{name}: missing field"))?;
                    field.check_at(v, &format!("{path}.{name}"))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Schema {
        Schema::Object(vec![
            ("title", Schema::String),
            ("count", Schema::Integer),
            (
                "items",
                Schema::array(Schema::Object(vec![("name", Schema::String)])),
            ),
        ])
    }

    #[test]
    fn test_to_request_json() {
        let declared = nested().to_request_json();

        assert_eq!(declared["type"], "OBJECT");
        assert_eq!(declared["properties"]["title"]["type"], "STRING");
        assert_eq!(declared["properties"]["count"]["type"], "INTEGER");
        assert_eq!(declared["properties"]["items"]["type"], "ARRAY");
        assert_eq!(
            declared["properties"]["items"]["items"]["properties"]["name"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_check_accepts_matching_value() {
        let value = json!({
            "title": "abc",
            "count": 3,
            "items": [{ "name": "x" }, { "name": "y" }]
        });
        assert!(nested().check(&value).is_ok());
    }

    #[test]
    fn test_check_ignores_array_length_and_extra_fields() {
        // Arrays may hold any number of elements, extra fields pass through
        let value = json!({
            "title": "abc",
            "count": 1,
            "items": [],
            "unexpected": true
        });
        assert!(nested().check(&value).is_ok());
    }

    #[test]
    fn test_check_rejects_wrong_type() {
        let value = json!({ "title": "abc", "count": "three", "items": [] });
        let err = nested().check(&value).unwrap_err();
        assert!(err.contains("$.count"));
    }

    #[test]
    fn test_check_rejects_missing_field() {
        let value = json!({ "title": "abc", "count": 3 });
        let err = nested().check(&value).unwrap_err();
        assert!(err.contains("items"));
    }
}
