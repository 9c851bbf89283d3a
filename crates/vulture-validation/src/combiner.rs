//! Merges pairs of fields into derived fields

use crate::error::CombineError;
use crate::field::{Field, FieldValue};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Separator used to join combined values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMethod {
    #[default]
    Space,
    Hyphen,
    Dot,
    Underscore,
}

impl JoinMethod {
    /// Parse a method name; unknown names fall back to `Space`
    pub fn parse(method: &str) -> Self {
        match method {
            "space" => JoinMethod::Space,
            "hyphen" => JoinMethod::Hyphen,
            "dot" => JoinMethod::Dot,
            "underscore" => JoinMethod::Underscore,
            other => {
                debug!(method = other, "unknown combine method, joining with a space");
                JoinMethod::Space
            }
        }
    }

    pub fn separator(&self) -> &'static str {
        match self {
            JoinMethod::Space => " ",
            JoinMethod::Hyphen => "-",
            JoinMethod::Dot => ".",
            JoinMethod::Underscore => "_",
        }
    }
}

impl<'de> Deserialize<'de> for JoinMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(JoinMethod::parse(&name))
    }
}

/// Name and type of a combined field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl CombinedAttributes {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
        }
    }
}

/// Combine field pairs within `group`.
///
/// Each pair's values are joined with `method`'s separator into a new field
/// appended to the group; both originals are removed. The new field takes
/// its name and type from `attributes[i]`, falling back to the first field's
/// name and `text`. Pairs run in order, so a field consumed by an earlier
/// pair is not available to a later one.
pub fn combine(
    group: Vec<Field>,
    pairs: &[(String, String)],
    attributes: &[CombinedAttributes],
    method: JoinMethod,
) -> Result<Vec<Field>, CombineError> {
    if group.is_empty() || pairs.is_empty() {
        return Err(CombineError::MissingInput);
    }

    let mut group = group;
    for (index, (first, second)) in pairs.iter().enumerate() {
        let not_found = || CombineError::FieldsNotFound {
            first: first.clone(),
            second: second.clone(),
        };
        let i = group.iter().position(|f| &f.name == first).ok_or_else(not_found)?;
        let j = group
            .iter()
            .enumerate()
            .position(|(k, f)| k != i && &f.name == second)
            .ok_or_else(not_found)?;

        let value = format!("{}{}{}", group[i].value, method.separator(), group[j].value);
        let attrs = attributes.get(index);
        let name = attrs
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| group[i].name.clone());
        let kind = attrs
            .and_then(|a| a.kind.clone())
            .unwrap_or_else(|| "text".to_string());

        // remove the higher index first so the lower one stays valid
        group.remove(i.max(j));
        group.remove(i.min(j));
        group.push(Field::new(name, kind, FieldValue::Text(value)));
    }

    debug!(pairs = pairs.len(), fields = group.len(), "combined fields");
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    fn group() -> Vec<Field> {
        vec![
            Field::text("first_name", "Anmol"),
            Field::text("last_name", "Shrivastav"),
            Field::text("cu_code", "+91"),
            Field::text("phone_number", "917049XXXX"),
            Field::new("email", "email", "example123@example.com"),
        ]
    }

    #[test]
    fn test_combine_names_with_space() {
        let combined = combine(
            group(),
            &[pair("first_name", "last_name")],
            &[CombinedAttributes::new("full_name", "text")],
            JoinMethod::Space,
        )
        .unwrap();

        assert_eq!(combined.len(), 4);
        assert!(!combined.iter().any(|f| f.name == "first_name" || f.name == "last_name"));
        let full = combined.last().unwrap();
        assert_eq!(full.name, "full_name");
        assert_eq!(full.value, FieldValue::from("Anmol Shrivastav"));
    }

    #[test]
    fn test_multiple_pairs_in_order() {
        let combined = combine(
            group(),
            &[pair("cu_code", "phone_number"), pair("first_name", "last_name")],
            &[
                CombinedAttributes::new("phone_number", "text"),
                CombinedAttributes::new("full_name", "text"),
            ],
            JoinMethod::parse("hyphen"),
        )
        .unwrap();

        let names: Vec<&str> = combined.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["email", "phone_number", "full_name"]);
        assert_eq!(combined[1].value, FieldValue::from("+91-917049XXXX"));
    }

    #[test]
    fn test_missing_attributes_fall_back() {
        let combined = combine(
            group(),
            &[pair("first_name", "last_name")],
            &[],
            JoinMethod::parse("weird"),
        )
        .unwrap();
        let merged = combined.last().unwrap();
        assert_eq!(merged.name, "first_name");
        assert_eq!(merged.kind, "text");
        assert_eq!(merged.value, FieldValue::from("Anmol Shrivastav"));
    }

    #[test]
    fn test_consumed_field_is_unavailable() {
        let err = combine(
            group(),
            &[pair("first_name", "last_name"), pair("last_name", "email")],
            &[CombinedAttributes::new("full_name", "text")],
            JoinMethod::Space,
        )
        .unwrap_err();

        assert_eq!(
            err,
            CombineError::FieldsNotFound {
                first: "last_name".into(),
                second: "email".into()
            }
        );
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert_eq!(
            combine(Vec::new(), &[pair("a", "b")], &[], JoinMethod::Space),
            Err(CombineError::MissingInput)
        );
        assert_eq!(combine(group(), &[], &[], JoinMethod::Space), Err(CombineError::MissingInput));
    }

    #[test]
    fn test_method_deserializes_leniently() {
        let method: JoinMethod = serde_json::from_str(r#""dot""#).unwrap();
        assert_eq!(method, JoinMethod::Dot);
        let method: JoinMethod = serde_json::from_str(r#""comma""#).unwrap();
        assert_eq!(method, JoinMethod::Space);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(JoinMethod::parse("dot").separator(), ".");
        assert_eq!(JoinMethod::parse("underscore").separator(), "_");
        assert_eq!(JoinMethod::parse("").separator(), " ");
    }
}
