use rstest::*;
use serde_json::{
    Value,
    json,
};

use crate::constants::*;

// CRD objects, shaped the way the apiserver hands them back.  `versions` is a list of
// (name, served, storage) triples.
pub fn crd(plural: &str, group: &str, kind: &str, scope: &str, versions: &[(&str, bool, bool)]) -> Value {
    json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": {"name": format!("{plural}.{group}")},
        "spec": {
            "group": group,
            "names": {
                "kind": kind,
                "listKind": format!("{kind}List"),
                "plural": plural,
                "singular": kind.to_lowercase(),
            },
            "scope": scope,
            "versions": versions.iter().map(|(name, served, storage)| json!({
                "name": name,
                "served": served,
                "storage": storage,
            })).collect::<Vec<_>>(),
        },
    })
}

pub fn velero_crd(plural: &str, kind: &str) -> Value {
    crd(plural, "velero.io", kind, "Namespaced", &[("v1", true, true)])
}

#[fixture]
pub fn backup_crd() -> Value {
    velero_crd("backups", "Backup")
}

#[fixture]
pub fn restore_crd() -> Value {
    velero_crd("restores", "Restore")
}

#[fixture]
pub fn schedule_crd() -> Value {
    velero_crd("schedules", "Schedule")
}

#[fixture]
pub fn storage_location_crd() -> Value {
    velero_crd("backupstoragelocations", "BackupStorageLocation")
}

// Cluster-scoped, with an older served version listed first to make sure we pick the storage one
#[fixture]
pub fn widget_crd() -> Value {
    crd("widgets", "example.io", "Widget", "Cluster", &[("v1alpha1", true, false), ("v1", true, true)])
}

pub fn object_list(api_version: &str, kind: &str, items: Vec<Value>) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": format!("{kind}List"),
        "metadata": {"resourceVersion": "1"},
        "items": items,
    })
}

fn velero_meta(name: &str, namespace: &str, created: &str) -> Value {
    json!({
        "name": name,
        "namespace": namespace,
        "uid": format!("{namespace}-{name}-uid"),
        "creationTimestamp": created,
        "labels": {"velero.io/storage-location": "default"},
    })
}

pub fn test_backup(name: &str, namespace: &str, phase: &str, created: &str) -> Value {
    json!({
        "apiVersion": "velero.io/v1",
        "kind": "Backup",
        "metadata": velero_meta(name, namespace, created),
        "spec": {
            "includedNamespaces": ["default"],
            "excludedResources": ["events"],
            "storageLocation": "default",
            "ttl": "720h0m0s",
            "volumeSnapshotLocations": ["aws-default"],
        },
        "status": {
            "phase": phase,
            "startTimestamp": created,
            "completionTimestamp": "2024-03-01T12:05:00Z",
            "expiration": "2024-03-31T12:00:00Z",
            "progress": {"totalItems": 20, "itemsBackedUp": 15},
            "errors": 1,
            "warnings": 2,
        },
    })
}

pub fn test_restore(name: &str, namespace: &str, phase: &str, created: &str) -> Value {
    json!({
        "apiVersion": "velero.io/v1",
        "kind": "Restore",
        "metadata": velero_meta(name, namespace, created),
        "spec": {
            "backupName": TEST_BACKUP_NAME,
            "includedNamespaces": ["default"],
        },
        "status": {
            "phase": phase,
            "startTimestamp": created,
            "progress": {"totalItems": 10, "itemsRestored": 4},
            "warnings": 3,
        },
    })
}

pub fn test_schedule(name: &str, namespace: &str, phase: &str, created: &str) -> Value {
    json!({
        "apiVersion": "velero.io/v1",
        "kind": "Schedule",
        "metadata": velero_meta(name, namespace, created),
        "spec": {
            "schedule": "0 1 * * *",
            "paused": false,
            "template": {
                "includedNamespaces": ["default"],
                "storageLocation": "default",
                "ttl": "240h0m0s",
            },
        },
        "status": {
            "phase": phase,
            "lastBackup": "2024-03-02T01:00:00Z",
        },
    })
}

pub fn test_storage_location(name: &str, namespace: &str, phase: &str) -> Value {
    json!({
        "apiVersion": "velero.io/v1",
        "kind": "BackupStorageLocation",
        "metadata": velero_meta(name, namespace, TEST_TIMESTAMP),
        "spec": {
            "provider": "aws",
            "default": true,
            "objectStorage": {"bucket": "velero-backups"},
        },
        "status": {"phase": phase},
    })
}

pub fn test_widget(name: &str, created: &str) -> Value {
    json!({
        "apiVersion": "example.io/v1",
        "kind": "Widget",
        "metadata": {"name": name, "uid": format!("{name}-uid"), "creationTimestamp": created},
        "spec": {"teeth": 12},
    })
}
