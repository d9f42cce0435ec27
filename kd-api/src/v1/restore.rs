use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ListMeta,
    ObjectMeta,
    Phase,
    ResourceStatus,
    TypeMeta,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreList {
    pub list_meta: ListMeta,
    pub status: ResourceStatus,
    pub items: Vec<Restore>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restore {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub backup_name: String,
    pub status: Phase,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreProgress {
    pub total_items: i64,
    pub items_restored: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDetail {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,

    pub phase: String,
    pub status: Phase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub backup_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schedule_name: String,

    pub progress: RestoreProgress,

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

/// Request body for creating a restore.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSpec {
    pub name: String,
    pub namespace: String,
    pub backup_name: String,

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
}
