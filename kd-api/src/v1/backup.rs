use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Condition,
    ListMeta,
    ObjectMeta,
    Phase,
    ResourceStatus,
    TypeMeta,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupList {
    pub list_meta: ListMeta,

    // Summary of item phases across the whole (unfiltered) collection
    pub status: ResourceStatus,
    pub items: Vec<Backup>,

    // Non-critical errors that occurred while converting individual items
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStatus {
    pub status: Phase,
    pub message: String,
    pub conditions: Vec<Condition>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub storage_location: String,
    pub ttl: String,
    pub included_namespaces: Vec<String>,
    pub excluded_namespaces: Vec<String>,
    pub backup_status: BackupStatus,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupProgress {
    pub total_items: i64,
    pub items_backed_up: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDetail {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,

    pub phase: String,
    pub status: Phase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_snapshot_locations: Option<Vec<String>>,

    pub progress: BackupProgress,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,

    pub errors: i64,
    pub warnings: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub failure_reason: String,
}

/// Request body for creating a backup.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    pub name: String,
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<metav1::LabelSelector>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}
