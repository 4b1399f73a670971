use std::str::FromStr;

use crate::error::TailError;
use crate::stream::JsonObject;

/// A single `field=value` predicate parsed from the command line.
///
/// Matching is exact string equality on one top-level field; values
/// that are not JSON strings (numbers, booleans, null, nested values)
/// never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    value: String,
}

impl Filter {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, object: &JsonObject) -> bool {
        match object.get(&self.field) {
            Some(value) => value.as_str() == Some(self.value.as_str()),
            None => false,
        }
    }
}

impl FromStr for Filter {
    type Err = TailError;

    /// Accepts exactly one `=` with non-blank text on both sides. The
    /// stored parts keep their surrounding whitespace; trimming is
    /// only for the validity check.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || TailError::FilterSyntax(token.to_string());

        let mut parts = token.split('=');
        let field = parts.next().ok_or_else(invalid)?;
        let value = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        if field.trim().is_empty() || value.trim().is_empty() {
            return Err(invalid());
        }

        Ok(Filter {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Include/exclude filter groups.
///
/// An object passes when at least one include matches (or no includes
/// are configured) and no exclude matches. Both groups use OR
/// semantics internally; excludes act as a veto after includes.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    includes: Vec<Filter>,
    excludes: Vec<Filter>,
}

impl FilterSet {
    pub fn new(includes: Vec<Filter>, excludes: Vec<Filter>) -> Self {
        FilterSet { includes, excludes }
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    pub fn should_include(&self, object: &JsonObject) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|f| f.matches(object)) {
            return false;
        }
        !self.excludes.iter().any(|f| f.matches(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(json: &str) -> JsonObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_valid_token() {
        let filter: Filter = "host=example.com".parse().unwrap();
        assert_eq!(filter.field(), "host");
        assert_eq!(filter.value(), "example.com");
    }

    #[test]
    fn test_parse_keeps_untrimmed_parts() {
        // Whitespace counts toward the stored value, not the check.
        let filter: Filter = "host= example.com".parse().unwrap();
        assert_eq!(filter.value(), " example.com");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!("hostexample.com".parse::<Filter>().is_err());
    }

    #[test]
    fn test_parse_rejects_multiple_separators() {
        assert!("host=a=b".parse::<Filter>().is_err());
    }

    #[test]
    fn test_parse_rejects_blank_sides() {
        assert!("=value".parse::<Filter>().is_err());
        assert!("field=".parse::<Filter>().is_err());
        assert!("field=  ".parse::<Filter>().is_err());
        assert!("  =value".parse::<Filter>().is_err());
        assert!("=".parse::<Filter>().is_err());
    }

    #[test]
    fn test_match_exact_string_value() {
        let filter: Filter = "severity=debug".parse().unwrap();
        assert!(filter.matches(&object(r#"{"severity":"debug"}"#)));
        assert!(!filter.matches(&object(r#"{"severity":"info"}"#)));
        assert!(!filter.matches(&object(r#"{"other":"debug"}"#)));
    }

    #[test]
    fn test_match_no_coercion_of_non_strings() {
        let filter: Filter = "port=80".parse().unwrap();
        assert!(!filter.matches(&object(r#"{"port":80}"#)));
        assert!(filter.matches(&object(r#"{"port":"80"}"#)));

        let filter: Filter = "ok=true".parse().unwrap();
        assert!(!filter.matches(&object(r#"{"ok":true}"#)));

        let filter: Filter = "x=null".parse().unwrap();
        assert!(!filter.matches(&object(r#"{"x":null}"#)));
    }

    #[test]
    fn test_filter_set_include_or_semantics() {
        let set = FilterSet::new(
            vec!["a=1".parse().unwrap(), "b=2".parse().unwrap()],
            vec!["c=3".parse().unwrap()],
        );

        assert!(set.should_include(&object(r#"{"a":"1"}"#)));
        assert!(set.should_include(&object(r#"{"b":"2","d":"9"}"#)));
        assert!(!set.should_include(&object(r#"{"x":"9"}"#)));
    }

    #[test]
    fn test_filter_set_exclude_veto() {
        let set = FilterSet::new(
            vec!["a=1".parse().unwrap()],
            vec!["c=3".parse().unwrap()],
        );
        assert!(!set.should_include(&object(r#"{"a":"1","c":"3"}"#)));
    }

    #[test]
    fn test_filter_set_empty_includes_pass_everything() {
        let set = FilterSet::new(vec![], vec!["c=3".parse().unwrap()]);
        assert!(set.should_include(&object(r#"{"x":"9"}"#)));
        assert!(!set.should_include(&object(r#"{"c":"3"}"#)));
    }

    #[test]
    fn test_filter_set_default_passes_everything() {
        let set = FilterSet::default();
        assert!(set.is_empty());
        assert!(set.should_include(&object(r#"{"anything":"at all"}"#)));
    }
}
