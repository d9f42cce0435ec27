use crate::prelude::*;

/// Which namespaces a list request covers: all of them, exactly one, or a handful.  A single
/// namespace can go straight into the REST path; more than one has to be listed cluster-wide and
/// filtered on our side.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NamespaceQuery {
    namespaces: Vec<String>,
}

impl NamespaceQuery {
    pub fn all() -> NamespaceQuery {
        NamespaceQuery { namespaces: vec![] }
    }

    pub fn new(namespaces: Vec<String>) -> NamespaceQuery {
        let mut namespaces: Vec<String> = namespaces.into_iter().filter(|ns| !ns.is_empty()).collect();
        if namespaces.iter().any(|ns| ns == ALL_NAMESPACES) {
            namespaces.clear();
        }
        namespaces.sort();
        namespaces.dedup();
        NamespaceQuery { namespaces }
    }

    pub fn from_param(raw: Option<&str>) -> NamespaceQuery {
        match raw {
            Some(raw) => NamespaceQuery::new(raw.split(',').map(|ns| ns.trim().to_string()).collect()),
            None => NamespaceQuery::all(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn to_request_param(&self) -> Option<&str> {
        match self.namespaces.as_slice() {
            [ns] => Some(ns.as_str()),
            _ => None,
        }
    }

    pub fn matches(&self, namespace: &str) -> bool {
        self.is_all() || self.namespaces.iter().any(|ns| ns == namespace)
    }
}
