//! Dotted Field Paths
//!
//! Resolves paths such as `horsepower` or `manufacturer.country` against the
//! JSON form of a record and reduces the result to a comparable `SortKey`.

use serde_json::Value;

/// A dot-separated path into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw.split('.').map(|s| s.trim().to_string()).collect(),
        }
    }

    /// Parse a comma-separated list of paths (`manufacturer.name,horsepower`)
    ///
    /// Blank entries are skipped.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    /// Walk the path; `None` as soon as a segment is absent
    ///
    /// Numeric segments index into arrays (`features.0`).
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, key| match current {
                Value::Object(map) => map.get(key),
                Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    pub fn sort_key(&self, value: &Value) -> SortKey {
        SortKey::from_value(self.resolve(value))
    }
}

/// Comparable reduction of a resolved value
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// JSON numbers; booleans count as 0 and 1
    Number(f64),
    Text(String),
    /// Absent segment, null, array or object
    Missing,
}

impl SortKey {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n.as_f64().map_or(SortKey::Missing, SortKey::Number),
            Some(Value::Bool(b)) => SortKey::Number(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => SortKey::Text(s.clone()),
            _ => SortKey::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "name": "Cayenne",
            "horsepower": 348,
            "isElectric": false,
            "features": ["Air suspension", "Tow hitch"],
            "manufacturer": { "id": 1, "country": "Germany" }
        })
    }

    #[test]
    fn test_resolve_nested_path() {
        let path = FieldPath::parse("manufacturer.country");
        assert_eq!(path.resolve(&record()), Some(&json!("Germany")));
    }

    #[test]
    fn test_resolve_missing_segment() {
        let rec = record();
        assert_eq!(FieldPath::parse("manufacturer.ceo").resolve(&rec), None);
        assert_eq!(FieldPath::parse("name.first").resolve(&rec), None);
        assert_eq!(FieldPath::parse("").resolve(&rec), None);
    }

    #[test]
    fn test_resolve_array_index() {
        let rec = record();
        assert_eq!(FieldPath::parse("features.1").resolve(&rec), Some(&json!("Tow hitch")));
        assert_eq!(FieldPath::parse("features.9").resolve(&rec), None);
    }

    #[test]
    fn test_sort_key_kinds() {
        let rec = record();
        assert_eq!(FieldPath::parse("horsepower").sort_key(&rec), SortKey::Number(348.0));
        assert_eq!(FieldPath::parse("isElectric").sort_key(&rec), SortKey::Number(0.0));
        assert_eq!(FieldPath::parse("name").sort_key(&rec), SortKey::Text("Cayenne".to_string()));
        assert_eq!(FieldPath::parse("features").sort_key(&rec), SortKey::Missing);
        assert_eq!(FieldPath::parse("manufacturer").sort_key(&rec), SortKey::Missing);
        assert_eq!(SortKey::from_value(Some(&Value::Null)), SortKey::Missing);
    }

    #[test]
    fn test_parse_list_skips_blanks() {
        let paths = FieldPath::parse_list(" manufacturer.name , ,horsepower");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], FieldPath::parse("manufacturer.name"));
        assert_eq!(paths[1], FieldPath::parse("horsepower"));
        assert!(FieldPath::parse_list("").is_empty());
    }
}
