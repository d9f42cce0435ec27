use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ListMeta,
    ObjectMeta,
    ResourceStatus,
    TypeMeta,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleList {
    pub list_meta: ListMeta,
    pub status: ResourceStatus,
    pub items: Vec<Schedule>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub schedule: String,
    pub phase: String,
    pub paused: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_backup_time: Option<String>,
}

// Subset of the backup template carried by a schedule
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTemplate {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_namespaces: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetail {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub schedule: String,
    pub paused: bool,
    pub template: ScheduleTemplate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_backup_time: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phase: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub validation_error: String,
}

/// Request body for creating a schedule; the backup fields land in the schedule's template.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSpec {
    pub name: String,
    pub namespace: String,

    // Cron expression
    pub schedule: String,

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
