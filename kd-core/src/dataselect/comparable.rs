use std::cmp::Ordering;

use clockabilly::{
    DateTime,
    Utc,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComparableValue {
    String(String),
    Time(DateTime<Utc>),
    Numeric(i64),
}

impl ComparableValue {
    pub fn compare(&self, other: &ComparableValue) -> Ordering {
        match (self, other) {
            (ComparableValue::String(a), ComparableValue::String(b)) => a.cmp(b),
            (ComparableValue::Time(a), ComparableValue::Time(b)) => a.cmp(b),
            (ComparableValue::Numeric(a), ComparableValue::Numeric(b)) => a.cmp(b),

            // Shouldn't happen since filter values are typed by property, but if a cell hands
            // back something weird we still need a total order.
            _ => self.rank().cmp(&other.rank()),
        }
    }

    pub fn contains(&self, other: &ComparableValue) -> bool {
        match (self, other) {
            (ComparableValue::String(a), ComparableValue::String(b)) => a.contains(b.as_str()),
            (ComparableValue::Time(a), ComparableValue::Time(b)) => a == b,
            (ComparableValue::Numeric(a), ComparableValue::Numeric(b)) => a == b,
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ComparableValue::String(_) => 0,
            ComparableValue::Time(_) => 1,
            ComparableValue::Numeric(_) => 2,
        }
    }
}

impl From<&str> for ComparableValue {
    fn from(s: &str) -> Self {
        ComparableValue::String(s.into())
    }
}

impl From<String> for ComparableValue {
    fn from(s: String) -> Self {
        ComparableValue::String(s)
    }
}

impl From<DateTime<Utc>> for ComparableValue {
    fn from(t: DateTime<Utc>) -> Self {
        ComparableValue::Time(t)
    }
}

impl From<i64> for ComparableValue {
    fn from(n: i64) -> Self {
        ComparableValue::Numeric(n)
    }
}
