use serde_json::{Number, Value};
use std::fmt;

use crate::error::{Error, Result, Side};

/// A single difference found between two JSON trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Location in `$.key[index]` notation
    pub path: String,
    pub message: String,
}

impl Mismatch {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parse one side of a comparison into an untyped tree
pub fn parse(side: Side, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| Error::InvalidJson { side, source })
}

/// Whether two trees are equal, ignoring key order and number representation
pub fn equivalent(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(act_map), Value::Object(exp_map)) => {
            act_map.len() == exp_map.len()
                && exp_map.iter().all(|(k, exp_val)| {
                    act_map
                        .get(k)
                        .is_some_and(|act_val| equivalent(act_val, exp_val))
                })
        }
        (Value::Array(act_arr), Value::Array(exp_arr)) => {
            act_arr.len() == exp_arr.len()
                && act_arr.iter().zip(exp_arr).all(|(a, e)| equivalent(a, e))
        }
        (Value::Number(a), Value::Number(e)) => numbers_equal(a, e),
        (Value::String(a), Value::String(e)) => a == e,
        (Value::Bool(a), Value::Bool(e)) => a == e,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Collect every difference between two trees
pub fn compare(actual: &Value, expected: &Value) -> Vec<Mismatch> {
    let mut results = Vec::new();
    compare_recursive(actual, expected, "$", &mut results);
    results
}

fn compare_recursive(actual: &Value, expected: &Value, path: &str, results: &mut Vec<Mismatch>) {
    match (actual, expected) {
        (Value::Object(act_map), Value::Object(exp_map)) => {
            for (k, exp_val) in exp_map {
                let new_path = format!("{}.{}", path, k);
                match act_map.get(k) {
                    Some(act_val) => compare_recursive(act_val, exp_val, &new_path, results),
                    None => results.push(Mismatch::new(
                        &new_path,
                        format!("Key '{}' missing in actual", new_path),
                    )),
                }
            }

            for k in act_map.keys() {
                if !exp_map.contains_key(k) {
                    let new_path = format!("{}.{}", path, k);
                    results.push(Mismatch::new(
                        &new_path,
                        format!("Unexpected key '{}' in actual", new_path),
                    ));
                }
            }
        }
        (Value::Array(act_arr), Value::Array(exp_arr)) => {
            if act_arr.len() != exp_arr.len() {
                results.push(Mismatch::new(
                    path,
                    format!(
                        "Array length mismatch at '{}': expected {}, got {}",
                        path,
                        exp_arr.len(),
                        act_arr.len()
                    ),
                ));
            }

            for (i, (a, e)) in act_arr.iter().zip(exp_arr).enumerate() {
                let new_path = format!("{}[{}]", path, i);
                compare_recursive(a, e, &new_path, results);
            }
        }
        (Value::Number(a), Value::Number(e)) => {
            if !numbers_equal(a, e) {
                results.push(Mismatch::new(
                    path,
                    format!("Value mismatch at '{}': expected {}, got {}", path, e, a),
                ));
            }
        }
        (Value::String(a), Value::String(e)) => {
            if a != e {
                results.push(Mismatch::new(
                    path,
                    format!(
                        "Value mismatch at '{}': expected \"{}\", got \"{}\"",
                        path, e, a
                    ),
                ));
            }
        }
        (Value::Bool(a), Value::Bool(e)) => {
            if a != e {
                results.push(Mismatch::new(
                    path,
                    format!("Value mismatch at '{}': expected {}, got {}", path, e, a),
                ));
            }
        }
        (Value::Null, Value::Null) => {}
        _ => {
            results.push(Mismatch::new(
                path,
                format!(
                    "Type mismatch at '{}': expected {}, got {}",
                    path, expected, actual
                ),
            ));
        }
    }
}

// Numbers compare by decoded value, so `60` and `60.0` are equal. Integers
// are compared exactly before falling back to floating point.
fn numbers_equal(a: &Number, e: &Number) -> bool {
    if let (Some(a), Some(e)) = (a.as_i64(), e.as_i64()) {
        return a == e;
    }
    if let (Some(a), Some(e)) = (a.as_u64(), e.as_u64()) {
        return a == e;
    }
    match (a.as_f64(), e.as_f64()) {
        (Some(af), Some(ef)) => af == ef,
        _ => false,
    }
}
