//! Path-tracking view over a YAML mapping
//!
//! A [`Section`] knows its dotted path from the document root, so every
//! accessor can report errors against the exact field that failed.

use super::ranges::{
    check_finite, check_non_empty, check_non_negative_int, check_positive_int,
};
use crate::config::error::SchemaError;
use crate::config::schema::ParamValue;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Path label used for the document root
pub(crate) const ROOT_PATH: &str = "<root>";

/// Short human description of a YAML value for error messages
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("a value tagged {}", tagged.tag),
    }
}

fn type_mismatch(path: &str, expected: &'static str, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_string(),
        expected,
        actual: describe(actual),
    }
}

/// Interpret a YAML value as a boolean.
///
/// Quoted `"true"`/`"false"` are accepted as well, for files that quote every
/// truthy value.
pub(crate) fn as_bool(path: &str, value: &Value) -> Result<bool, SchemaError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(type_mismatch(path, "boolean", value)),
        },
        other => Err(type_mismatch(path, "boolean", other)),
    }
}

/// Interpret a YAML value as a signed integer; floats are rejected.
pub(crate) fn as_int(path: &str, value: &Value) -> Result<i64, SchemaError> {
    match value {
        Value::Number(n) if n.is_f64() => Err(type_mismatch(path, "integer", value)),
        Value::Number(n) => n.as_i64().ok_or_else(|| SchemaError::OutOfRange {
            path: path.to_string(),
            value: n.to_string(),
            constraint: format!("<= {}", i64::MAX),
        }),
        other => Err(type_mismatch(path, "integer", other)),
    }
}

/// Interpret a YAML value as a float, widening integers.
pub(crate) fn as_float(path: &str, value: &Value) -> Result<f64, SchemaError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| type_mismatch(path, "number", value)),
        other => Err(type_mismatch(path, "number", other)),
    }
}

/// Interpret a YAML value as a string; numbers and booleans are not coerced.
pub(crate) fn as_string(path: &str, value: &Value) -> Result<String, SchemaError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_mismatch(path, "string", other)),
    }
}

/// A mapping plus its location in the document
#[derive(Debug, Clone, Copy)]
pub(crate) struct Section<'a> {
    path: &'a str,
    map: &'a Mapping,
}

/// Owned path storage for nested sections.
///
/// Sections borrow their path, so callers keep the joined string alive in a
/// binding while the child section is in use.
pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() || parent == ROOT_PATH {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

impl<'a> Section<'a> {
    /// Wrap the document root, which must be a mapping
    pub(crate) fn root(document: &'a Value) -> Result<Self, SchemaError> {
        match document {
            Value::Mapping(map) => Ok(Self { path: ROOT_PATH, map }),
            other => Err(type_mismatch(ROOT_PATH, "mapping", other)),
        }
    }

    /// Wrap a nested mapping found at `path`
    pub(crate) fn at(path: &'a str, value: &'a Value) -> Result<Self, SchemaError> {
        match value {
            Value::Mapping(map) => Ok(Self { path, map }),
            other => Err(type_mismatch(path, "mapping", other)),
        }
    }

    pub(crate) fn path(&self) -> &'a str {
        self.path
    }

    /// Full dotted path of `key` inside this section
    pub(crate) fn field(&self, key: &str) -> String {
        join_path(self.path, key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Raw value for `key`; an explicit null counts as absent
    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Raw value for a required `key`.
    ///
    /// An absent key is `Missing`; an explicit null is reported as a type
    /// mismatch so the message shows what was written.
    pub(crate) fn require(&self, key: &str, expected: &'static str) -> Result<&'a Value, SchemaError> {
        match self.map.get(key) {
            None => Err(SchemaError::Missing { path: self.field(key) }),
            Some(Value::Null) => Err(type_mismatch(&self.field(key), expected, &Value::Null)),
            Some(value) => Ok(value),
        }
    }

    /// Keys present in this section but not named in `known`
    pub(crate) fn unknown_keys(&self, known: &[&str]) -> Vec<String> {
        self.map
            .keys()
            .map(|key| match key {
                Value::String(s) => s.clone(),
                other => describe(other),
            })
            .filter(|key| !known.contains(&key.as_str()))
            .collect()
    }

    pub(crate) fn string(&self, key: &str) -> Result<String, SchemaError> {
        let path = self.field(key);
        let value = self.require(key, "string")?;
        check_non_empty(&path, as_string(&path, value)?)
    }

    pub(crate) fn optional_string(&self, key: &str) -> Result<Option<String>, SchemaError> {
        let path = self.field(key);
        self.get(key)
            .map(|value| as_string(&path, value).and_then(|s| check_non_empty(&path, s)))
            .transpose()
    }

    pub(crate) fn path_buf(&self, key: &str) -> Result<PathBuf, SchemaError> {
        self.string(key).map(PathBuf::from)
    }

    pub(crate) fn optional_path_buf(&self, key: &str) -> Result<Option<PathBuf>, SchemaError> {
        Ok(self.optional_string(key)?.map(PathBuf::from))
    }

    pub(crate) fn bool(&self, key: &str) -> Result<bool, SchemaError> {
        as_bool(&self.field(key), self.require(key, "boolean")?)
    }

    pub(crate) fn bool_or(&self, key: &str, default: bool) -> Result<bool, SchemaError> {
        match self.get(key) {
            Some(value) => as_bool(&self.field(key), value),
            None => Ok(default),
        }
    }

    pub(crate) fn int_or(&self, key: &str, default: i64) -> Result<i64, SchemaError> {
        match self.get(key) {
            Some(value) => as_int(&self.field(key), value),
            None => Ok(default),
        }
    }

    pub(crate) fn positive_int(&self, key: &str) -> Result<u64, SchemaError> {
        let path = self.field(key);
        check_positive_int(&path, as_int(&path, self.require(key, "integer")?)?)
    }

    pub(crate) fn optional_positive_int(&self, key: &str) -> Result<Option<u64>, SchemaError> {
        let path = self.field(key);
        self.get(key)
            .map(|value| as_int(&path, value).and_then(|v| check_positive_int(&path, v)))
            .transpose()
    }

    pub(crate) fn non_negative_int_or(&self, key: &str, default: u64) -> Result<u64, SchemaError> {
        let path = self.field(key);
        match self.get(key) {
            Some(value) => check_non_negative_int(&path, as_int(&path, value)?),
            None => Ok(default),
        }
    }

    pub(crate) fn float(&self, key: &str) -> Result<f64, SchemaError> {
        let path = self.field(key);
        check_finite(&path, as_float(&path, self.require(key, "number")?)?)
    }

    pub(crate) fn float_or(&self, key: &str, default: f64) -> Result<f64, SchemaError> {
        match self.get(key) {
            Some(value) => as_float(&self.field(key), value),
            None => Ok(default),
        }
    }

    /// Iterate an optional nested mapping as `(key, full path, value)` triples.
    ///
    /// Absent or null yields an empty map. Keys must be strings.
    fn entries(&self, key: &str) -> Result<Vec<(String, String, &'a Value)>, SchemaError> {
        let path = self.field(key);
        let map = match self.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::Mapping(map)) => map,
            Some(other) => return Err(type_mismatch(&path, "mapping", other)),
        };

        map.iter()
            .map(|(k, v)| match k {
                Value::String(name) => Ok((name.clone(), join_path(&path, name), v)),
                other => Err(SchemaError::InvalidParameter {
                    path: path.clone(),
                    reason: format!("keys must be strings, got {}", describe(other)),
                }),
            })
            .collect()
    }

    /// Open-ended numeric map (optimizer keyword arguments)
    pub(crate) fn float_map(&self, key: &str) -> Result<BTreeMap<String, f64>, SchemaError> {
        self.entries(key)?
            .into_iter()
            .map(|(name, path, value)| {
                reject_non_scalar(&path, value)?;
                let v = check_finite(&path, as_float(&path, value)?)?;
                Ok((name, v))
            })
            .collect()
    }

    /// Open-ended scalar map (scheduler keyword arguments)
    pub(crate) fn param_map(&self, key: &str) -> Result<BTreeMap<String, ParamValue>, SchemaError> {
        self.entries(key)?
            .into_iter()
            .map(|(name, path, value)| Ok((name, as_param(&path, value)?)))
            .collect()
    }

    /// Map of names to optional string hints (logger analysis)
    pub(crate) fn optional_string_map(
        &self,
        key: &str,
    ) -> Result<BTreeMap<String, Option<String>>, SchemaError> {
        self.entries(key)?
            .into_iter()
            .map(|(name, path, value)| {
                let hint = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => return Err(type_mismatch(&path, "string or null", other)),
                };
                Ok((name, hint))
            })
            .collect()
    }
}

fn reject_non_scalar(path: &str, value: &Value) -> Result<(), SchemaError> {
    match value {
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(SchemaError::InvalidParameter {
                path: path.to_string(),
                reason: format!("expected a scalar value, got {}", describe(value)),
            })
        }
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}

fn as_param(path: &str, value: &Value) -> Result<ParamValue, SchemaError> {
    reject_non_scalar(path, value)?;
    match value {
        Value::Bool(b) => Ok(ParamValue::Bool(*b)),
        Value::Number(n) if n.is_f64() => {
            let v = as_float(path, value)?;
            check_finite(path, v).map(ParamValue::Float)
        }
        Value::Number(_) => as_int(path, value).map(ParamValue::Int),
        Value::String(s) => Ok(ParamValue::Str(s.clone())),
        other => Err(type_mismatch(path, "scalar", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(ROOT_PATH, "data"), "data");
        assert_eq!(join_path("data", "loader"), "data.loader");
    }

    #[test]
    fn test_root_must_be_mapping() {
        let doc = yaml("- a\n- b\n");
        let err = Section::root(&doc).unwrap_err();
        assert_eq!(err.path(), ROOT_PATH);
        assert!(matches!(err, SchemaError::TypeMismatch { expected: "mapping", .. }));
    }

    #[test]
    fn test_require_distinguishes_missing_and_null() {
        let doc = yaml("present: ~\n");
        let root = Section::root(&doc).unwrap();
        assert!(matches!(
            root.require("absent", "string"),
            Err(SchemaError::Missing { .. })
        ));
        assert!(matches!(
            root.require("present", "string"),
            Err(SchemaError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_lenient_bool() {
        let doc = yaml("a: true\nb: \"False\"\nc: yes\n");
        let root = Section::root(&doc).unwrap();
        assert!(root.bool("a").unwrap());
        assert!(!root.bool("b").unwrap());
        assert!(root.bool("c").is_err());
        assert!(root.bool_or("missing", true).unwrap());
    }

    #[test]
    fn test_int_rejects_float_and_string() {
        let doc = yaml("a: 1.5\nb: \"10\"\nc: 10\n");
        let root = Section::root(&doc).unwrap();
        assert!(matches!(
            root.positive_int("a"),
            Err(SchemaError::TypeMismatch { expected: "integer", .. })
        ));
        assert!(matches!(
            root.positive_int("b"),
            Err(SchemaError::TypeMismatch { expected: "integer", .. })
        ));
        assert_eq!(root.positive_int("c").unwrap(), 10);
    }

    #[test]
    fn test_float_widens_integers() {
        let doc = yaml("vmax: 1\n");
        let root = Section::root(&doc).unwrap();
        assert_eq!(root.float("vmax").unwrap(), 1.0);
    }

    #[test]
    fn test_float_map_rejects_sequences() {
        let doc = yaml("parameters:\n  lr: 0.001\n  betas: [0.9, 0.999]\n");
        let root = Section::root(&doc).unwrap();
        let err = root.float_map("parameters").unwrap_err();
        assert_eq!(err.path(), "parameters.betas");
        assert!(matches!(err, SchemaError::InvalidParameter { .. }));
    }

    #[test]
    fn test_float_map_rejects_strings() {
        let doc = yaml("parameters:\n  lr: fast\n");
        let root = Section::root(&doc).unwrap();
        let err = root.float_map("parameters").unwrap_err();
        assert_eq!(err.path(), "parameters.lr");
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));
    }

    #[test]
    fn test_param_map_scalars() {
        let doc = yaml("p:\n  mode: min\n  factor: 0.5\n  patience: 10\n  verbose: true\n");
        let root = Section::root(&doc).unwrap();
        let params = root.param_map("p").unwrap();
        assert_eq!(params["mode"], ParamValue::Str("min".into()));
        assert_eq!(params["factor"], ParamValue::Float(0.5));
        assert_eq!(params["patience"], ParamValue::Int(10));
        assert_eq!(params["verbose"], ParamValue::Bool(true));
    }

    #[test]
    fn test_param_map_rejects_null_value() {
        let doc = yaml("p:\n  milestones:\n");
        let root = Section::root(&doc).unwrap();
        let err = root.param_map("p").unwrap_err();
        assert_eq!(err.path(), "p.milestones");
    }

    #[test]
    fn test_param_map_rejects_non_string_keys() {
        let doc = yaml("p:\n  1: 2\n");
        let root = Section::root(&doc).unwrap();
        assert!(matches!(
            root.param_map("p"),
            Err(SchemaError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_optional_string_map() {
        let doc = yaml("analysis:\n  abs_bias:\n  rel_bias: pct\n");
        let root = Section::root(&doc).unwrap();
        let map = root.optional_string_map("analysis").unwrap();
        assert_eq!(map["abs_bias"], None);
        assert_eq!(map["rel_bias"], Some("pct".to_string()));

        let doc = yaml("analysis:\n");
        let root = Section::root(&doc).unwrap();
        assert!(root.optional_string_map("analysis").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_keys() {
        let doc = yaml("a: 1\nToyMC: {}\n");
        let root = Section::root(&doc).unwrap();
        assert_eq!(root.unknown_keys(&["a"]), vec!["ToyMC".to_string()]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Value::Null), "null");
        assert_eq!(describe(&Value::String("x".into())), "\"x\"");
        assert_eq!(describe(&yaml("[1]")), "a sequence");
    }
}
