mod comparable;
mod query;
mod select;

use std::fmt;

pub use comparable::*;
pub use query::*;
pub use select::*;
use serde::{
    Deserialize,
    Serialize,
};

/// The vocabulary that filters and sorts can reference.  Anything we don't recognize is kept
/// around as `Unknown` so that a typo in a query string is a no-op instead of an error.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyName {
    Name,
    Namespace,
    CreationTimestamp,
    Status,
    Label,
    Progress,
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    String,
    Time,
    Numeric,
}

impl PropertyName {
    pub fn parse(name: &str) -> PropertyName {
        match name {
            "name" => PropertyName::Name,
            "namespace" => PropertyName::Namespace,
            "creationTimestamp" => PropertyName::CreationTimestamp,
            "status" => PropertyName::Status,
            "label" => PropertyName::Label,
            "progress" => PropertyName::Progress,
            other => PropertyName::Unknown(other.into()),
        }
    }

    // Filter values arrive as strings; this tells the query parser how to type them.  Unknown
    // properties never match anything, so the kind we pick for them doesn't matter.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            PropertyName::CreationTimestamp => ValueKind::Time,
            PropertyName::Progress => ValueKind::Numeric,
            _ => ValueKind::String,
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PropertyName::Name => "name",
            PropertyName::Namespace => "namespace",
            PropertyName::CreationTimestamp => "creationTimestamp",
            PropertyName::Status => "status",
            PropertyName::Label => "label",
            PropertyName::Progress => "progress",
            PropertyName::Unknown(other) => other,
        };
        write!(f, "{name}")
    }
}

/// Identifies the cluster object behind a cell, for correlating list items with metrics.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelector {
    pub namespace: String,
    pub resource_type: String,
    pub resource_name: String,
    pub uid: String,
}

/// Anything that can go through the select pipeline.  Implementations wrap a single raw record
/// and are never mutated; returning `None` from `property` means "this item doesn't have it".
pub trait DataCell {
    fn property(&self, name: &PropertyName) -> Option<ComparableValue>;
    fn resource_selector(&self) -> ResourceSelector;
}

#[cfg(test)]
mod tests;
