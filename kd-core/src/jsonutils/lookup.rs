use clockabilly::{
    DateTime,
    Utc,
};
use serde_json::{
    Map,
    Value,
};

// Typed lookups into schema-less JSON documents.  Every accessor walks a path of object keys and
// returns NotFound if any step is missing _or_ if the value at the end of the path has the wrong
// type, so callers can chain lookups without worrying about a failed type assertion.  A type
// mismatch is deliberately indistinguishable from absence.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(v) => Lookup::Found(f(v)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.found().unwrap_or(default)
    }
}

impl<T: Default> Lookup<T> {
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(maybe_v: Option<T>) -> Self {
        match maybe_v {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

pub fn nested<'a>(obj: &'a Value, path: &[&str]) -> Lookup<&'a Value> {
    path.iter()
        .try_fold(obj, |v, key| v.as_object()?.get(*key))
        .into()
}

pub fn nested_str<'a>(obj: &'a Value, path: &[&str]) -> Lookup<&'a str> {
    nested(obj, path).found().and_then(Value::as_str).into()
}

pub fn nested_string(obj: &Value, path: &[&str]) -> Lookup<String> {
    nested_str(obj, path).map(String::from)
}

// Like the Kubernetes "NestedStringSlice" helper, a list with any non-string element counts as
// not found.
pub fn nested_string_list(obj: &Value, path: &[&str]) -> Lookup<Vec<String>> {
    nested_slice(obj, path)
        .found()
        .and_then(|items| items.iter().map(|v| v.as_str().map(String::from)).collect::<Option<Vec<_>>>())
        .into()
}

pub fn nested_i64(obj: &Value, path: &[&str]) -> Lookup<i64> {
    nested(obj, path)
        .found()
        .and_then(|v| match v {
            // JSON decoders hand out floats for "1.0"-style integers, so accept them if they're whole
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            _ => None,
        })
        .into()
}

pub fn nested_bool(obj: &Value, path: &[&str]) -> Lookup<bool> {
    nested(obj, path).found().and_then(Value::as_bool).into()
}

pub fn nested_map<'a>(obj: &'a Value, path: &[&str]) -> Lookup<&'a Map<String, Value>> {
    nested(obj, path).found().and_then(Value::as_object).into()
}

pub fn nested_slice<'a>(obj: &'a Value, path: &[&str]) -> Lookup<&'a Vec<Value>> {
    nested(obj, path).found().and_then(Value::as_array).into()
}

pub fn nested_time(obj: &Value, path: &[&str]) -> Lookup<DateTime<Utc>> {
    nested_str(obj, path).found().and_then(parse_rfc3339).into()
}

pub fn parse_rfc3339(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts).ok().map(|t| t.with_timezone(&Utc))
}
