//! N1QL semantics over `serde_json` documents.

use docmigrate_core::{
    stmt::{Conversion, Expr, Filter, Path},
    TYPE_DISCRIMINATOR,
};

use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// The value at `path`, or `None` if it is missing.
pub(crate) fn get<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(doc, |value, segment| value.as_object()?.get(segment))
}

/// Sets `path`, creating missing intermediate objects. Does nothing if an
/// intermediate value is not an object.
pub(crate) fn set(doc: &mut Value, path: &Path, value: Value) {
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };

    let mut current = doc;
    for segment in parents {
        let Some(object) = current.as_object_mut() else {
            return;
        };
        current = object
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if let Some(object) = current.as_object_mut() {
        object.insert(last.clone(), value);
    }
}

pub(crate) fn unset(doc: &mut Value, path: &Path) {
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };

    let parent = parents
        .iter()
        .try_fold(doc, |value, segment| value.as_object_mut()?.get_mut(segment));

    if let Some(object) = parent.and_then(Value::as_object_mut) {
        object.remove(last);
    }
}

pub(crate) fn matches(doc: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::TypeIs(model) => {
            doc.get(TYPE_DISCRIMINATOR).and_then(Value::as_str) == Some(model.as_str())
        }
        Filter::Eq(path, value) => get(doc, path) == Some(value),
        Filter::IsMissing(path) => get(doc, path).is_none(),
        Filter::IsNotMissing(path) => get(doc, path).is_some(),
        Filter::And(operands) => operands.iter().all(|operand| matches(doc, operand)),
    }
}

/// Evaluates `expr` against `doc`. `None` stands for MISSING.
pub(crate) fn eval(doc: &Value, expr: &Expr) -> Option<Value> {
    match expr {
        Expr::Null => Some(Value::Null),
        Expr::Path(path) => get(doc, path).cloned(),
        Expr::Convert(conversion, path) => get(doc, path).map(|value| convert(*conversion, value)),
        Expr::Value(value) => Some(value.clone()),
    }
}

fn convert(conversion: Conversion, value: &Value) -> Value {
    match conversion {
        Conversion::ToNumber => to_number(value),
        Conversion::ToBoolean => to_boolean(value),
        Conversion::ToString => to_string(value),
    }
}

fn to_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::Bool(b) => Value::from(u8::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                Value::from(n)
            } else {
                s.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        _ => Value::Null,
    }
}

fn to_boolean(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(_) => value.clone(),
        Value::Number(n) => Value::Bool(n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan())),
        Value::String(s) => Value::Bool(!s.is_empty()),
        Value::Array(items) => Value::Bool(!items.is_empty()),
        Value::Object(fields) => Value::Bool(!fields.is_empty()),
    }
}

fn to_string(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(_) => value.clone(),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => Value::String(other.to_string()),
    }
}

/// N1QL collation: MISSING < null < false < true < numbers < strings
/// < arrays < objects.
pub(crate) fn collate(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(false)) => 2,
            Some(Value::Bool(true)) => 3,
            Some(Value::Number(_)) => 4,
            Some(Value::String(_)) => 5,
            Some(Value::Array(_)) => 6,
            Some(Value::Object(_)) => 7,
        }
    }

    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Array(a)), Some(Value::Array(b))) => a
            .iter()
            .zip(b.iter())
            .map(|(a, b)| collate(Some(a), Some(b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        _ => rank(a).cmp(&rank(b)),
    }
}
