//! YAML-backed configuration section.

use serde_yaml::Value;

use crate::domain::foundation::ValidationError;
use crate::ports::ConfigSection;

/// A configuration section held as a parsed YAML value.
///
/// Dotted keys walk nested mappings: `warmup.time` reads `time` inside
/// `warmup`. A key whose value is `~` counts as absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YamlSection {
    root: Value,
}

impl YamlSection {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parses a section from YAML text.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(yaml)?;
        Ok(Self::new(root))
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut current = &self.root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            Value::Null => None,
            value => Some(value),
        }
    }
}

pub(super) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ConfigSection for YamlSection {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, ValidationError> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ValidationError::wrong_type(key, "true or false")),
        }
    }

    fn get_f64(&self, key: &str) -> Result<Option<f64>, ValidationError> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| ValidationError::wrong_type(key, "a number")),
            Some(_) => Err(ValidationError::wrong_type(key, "a number")),
        }
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Some(i));
                }
                // Whole floats such as `30.0` are accepted as integers.
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        Ok(Some(f as i64))
                    }
                    _ => Err(ValidationError::wrong_type(key, "an integer")),
                }
            }
            Some(_) => Err(ValidationError::wrong_type(key, "an integer")),
        }
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.lookup(key) {
            None => Ok(None),
            Some(value) => scalar_to_string(value)
                .map(Some)
                .ok_or_else(|| ValidationError::wrong_type(key, "a single value")),
        }
    }

    fn get_string_list(&self, key: &str) -> Result<Vec<String>, ValidationError> {
        match self.lookup(key) {
            None => Ok(Vec::new()),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| {
                    scalar_to_string(item)
                        .ok_or_else(|| ValidationError::wrong_type(key, "a list of strings"))
                })
                .collect(),
            Some(_) => Err(ValidationError::wrong_type(key, "a list of strings")),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(yaml: &str) -> YamlSection {
        YamlSection::parse(yaml).unwrap()
    }

    #[test]
    fn reads_nested_keys_with_dots() {
        let s = section("warmup:\n  time: 5\n  cancel-on-move: false\n");
        assert_eq!(s.get_i64("warmup.time").unwrap(), Some(5));
        assert_eq!(s.get_bool("warmup.cancel-on-move").unwrap(), Some(false));
        assert_eq!(s.get_bool("warmup.count-down").unwrap(), None);
    }

    #[test]
    fn absent_and_null_keys_read_as_none() {
        let s = section("landing-world: ~\n");
        assert_eq!(s.get_string("landing-world").unwrap(), None);
        assert_eq!(s.get_string("missing").unwrap(), None);
        assert!(!s.contains("landing-world"));
    }

    #[test]
    fn empty_document_has_no_keys() {
        let s = section("");
        assert_eq!(s.get_i64("cooldown").unwrap(), None);
        assert!(s.get_string_list("then-execute").unwrap().is_empty());
    }

    #[test]
    fn numbers_and_bools_read_as_strings() {
        let s = section("landing-world: 42\ntoken: true\n");
        assert_eq!(s.get_string("landing-world").unwrap(), Some("42".to_string()));
        assert_eq!(s.get_string("token").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn integers_read_as_floats() {
        let s = section("priority: 3\ncost: 2.5\n");
        assert_eq!(s.get_f64("priority").unwrap(), Some(3.0));
        assert_eq!(s.get_f64("cost").unwrap(), Some(2.5));
    }

    #[test]
    fn whole_floats_read_as_integers() {
        let s = section("cooldown: 30.0\nwarmup: 2.5\n");
        assert_eq!(s.get_i64("cooldown").unwrap(), Some(30));
        assert!(s.get_i64("warmup").is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let s = section("command-enabled: yes please\npriority: high\nbounds: [1, 2]\n");
        assert_eq!(
            s.get_bool("command-enabled").unwrap_err(),
            ValidationError::wrong_type("command-enabled", "true or false")
        );
        assert!(s.get_f64("priority").is_err());
        assert!(s.get_string("bounds").is_err());
    }

    #[test]
    fn string_lists_keep_order() {
        let s = section("call-from-worlds:\n  - world\n  - \"nether.*\"\n  - 7\n");
        assert_eq!(
            s.get_string_list("call-from-worlds").unwrap(),
            vec!["world", "nether.*", "7"]
        );
    }

    #[test]
    fn scalar_where_list_expected_is_rejected() {
        let s = section("then-execute: say hi\n");
        assert!(s.get_string_list("then-execute").is_err());
    }

    #[test]
    fn explicit_empty_list_reads_as_empty() {
        let s = section("then-execute: []\n");
        assert!(s.get_string_list("then-execute").unwrap().is_empty());
        assert!(s.contains("then-execute"));
    }
}
