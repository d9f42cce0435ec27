use std::collections::BTreeMap;

use kube::Resource;

use super::*;
use crate::prelude::*;

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }

    fn resource_selector(&self, resource_type: &str) -> ResourceSelector {
        ResourceSelector {
            namespace: self.namespace().unwrap_or_default(),
            resource_type: resource_type.into(),
            resource_name: self.name_any(),
            uid: self.uid().unwrap_or_default(),
        }
    }
}

pub fn split_namespaced_name(name: &str) -> (Option<String>, String) {
    match name.split_once('/') {
        Some((namespace, name)) => (Some(namespace.into()), name.into()),
        None => (None, name.into()),
    }
}

// "app=velero,tier=backup"; this is what the Label property compares against
pub fn format_labels(labels: &BTreeMap<String, String>) -> String {
    labels.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(",")
}
