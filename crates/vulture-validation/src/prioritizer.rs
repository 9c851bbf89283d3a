//! Splits scanned fields into priority and non-priority groups

use crate::catalog::FieldCatalog;
use crate::field::Field;
use tracing::debug;

/// Token that keeps a field out of the priority group
const EXCLUDED_TOKEN: &str = "other";

/// Options for a prioritization pass
#[derive(Debug, Clone, Default)]
pub struct PrioritizeOptions<'a> {
    /// Also promote non-priority fields whose type matches a pattern
    pub strict: bool,
    /// Extra name patterns for this call
    pub augment: Option<&'a [String]>,
}

/// Result of a prioritization pass. Every input field lands in exactly one
/// of the two lists, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub priority: Vec<Field>,
    pub non_priority: Vec<Field>,
}

/// Lowercased substring patterns, built once per call
#[derive(Debug, Clone)]
pub struct PatternSet {
    needles: Vec<String>,
}

impl PatternSet {
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let needles = patterns
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { needles }
    }

    /// Catalog priority patterns plus the caller's augmentation
    pub fn for_catalog(catalog: &FieldCatalog, augment: Option<&[String]>) -> Self {
        let extra = augment.unwrap_or_default().iter().map(String::as_str);
        Self::new(catalog.priority_patterns().chain(extra))
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.needles.iter().any(|n| text.contains(n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.needles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}

fn is_excluded(name: &str) -> bool {
    name.to_lowercase().contains(EXCLUDED_TOKEN)
}

/// Classify `fields` into priority and non-priority groups.
///
/// A field is priority when its name matches a pattern and does not contain
/// "other". In strict mode, remaining fields whose type matches a pattern are
/// promoted as well, still honoring the "other" exclusion.
pub fn prioritize(fields: Vec<Field>, catalog: &FieldCatalog, options: &PrioritizeOptions<'_>) -> Partition {
    let patterns = PatternSet::for_catalog(catalog, options.augment);

    let selected: Vec<bool> = fields
        .iter()
        .map(|f| {
            if is_excluded(&f.name) {
                return false;
            }
            patterns.matches(&f.name) || (options.strict && patterns.matches(&f.kind))
        })
        .collect();

    let mut partition = Partition::default();
    for (field, is_priority) in fields.into_iter().zip(selected) {
        if is_priority {
            partition.priority.push(field);
        } else {
            partition.non_priority.push(field);
        }
    }

    debug!(
        patterns = patterns.len(),
        priority = partition.priority.len(),
        non_priority = partition.non_priority.len(),
        strict = options.strict,
        "prioritized fields"
    );

    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn sample() -> Vec<Field> {
        vec![
            Field::new("email", "email", "a@gmail.com"),
            Field::new("otherEmail", "email", "b@gmail.com"),
            Field::text("nickname", "bob"),
            Field::new("user_gen", "radio", "male"),
            Field::new("secret", "password", "x"),
            Field::text("tags", "rust"),
        ]
    }

    #[test]
    fn test_catalog_patterns_select_by_name() {
        let partition = prioritize(sample(), FieldCatalog::builtin(), &PrioritizeOptions::default());

        // "nickname" contains the "name" pattern
        assert_eq!(names(&partition.priority), vec!["email", "nickname"]);
        assert_eq!(
            names(&partition.non_priority),
            vec!["otherEmail", "user_gen", "secret", "tags"]
        );
    }

    #[test]
    fn test_augment_is_case_insensitive() {
        let augment = vec!["USER_GEN".to_string(), "Tags".to_string()];
        let options = PrioritizeOptions {
            strict: false,
            augment: Some(&augment),
        };
        let partition = prioritize(sample(), FieldCatalog::builtin(), &options);

        assert_eq!(names(&partition.priority), vec!["email", "nickname", "user_gen", "tags"]);
    }

    #[test]
    fn test_strict_promotes_by_type() {
        let options = PrioritizeOptions {
            strict: true,
            augment: None,
        };
        let partition = prioritize(sample(), FieldCatalog::builtin(), &options);

        assert_eq!(names(&partition.priority), vec!["email", "nickname", "secret"]);
        assert!(names(&partition.non_priority).contains(&"otherEmail"));
    }

    #[test]
    fn test_empty_augment_entries_are_ignored() {
        let augment = vec![String::new()];
        let options = PrioritizeOptions {
            strict: false,
            augment: Some(&augment),
        };
        let partition = prioritize(sample(), FieldCatalog::builtin(), &options);
        assert_eq!(partition.priority.len(), 2);
    }

    #[test]
    fn test_partition_is_exact() {
        let input = sample();
        let partition = prioritize(
            input.clone(),
            FieldCatalog::builtin(),
            &PrioritizeOptions {
                strict: true,
                augment: None,
            },
        );
        assert_eq!(partition.priority.len() + partition.non_priority.len(), input.len());
        for field in &input {
            let hits = partition.priority.iter().filter(|f| *f == field).count()
                + partition.non_priority.iter().filter(|f| *f == field).count();
            assert_eq!(hits, 1, "{} must appear exactly once", field.name);
        }
    }
}
