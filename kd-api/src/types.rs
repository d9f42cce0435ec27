use std::collections::BTreeMap;

use clockabilly::{
    DateTime,
    Utc,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use serde::{
    Deserialize,
    Serialize,
};

pub const RESOURCE_KIND_BACKUP: &str = "backup";
pub const RESOURCE_KIND_BACKUP_STORAGE_LOCATION: &str = "backupstoragelocation";
pub const RESOURCE_KIND_RESTORE: &str = "restore";
pub const RESOURCE_KIND_SCHEDULE: &str = "schedule";

// Coarse lifecycle state of a resource.  Anything we don't recognize is reported as New, so that
// every item lands in exactly one bucket when we aggregate.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Phase {
    #[default]
    New,
    InProgress,
    Completed,
    Failed,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total_items: usize,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    pub kind: String,
}

impl TypeMeta {
    pub fn new(kind: &str) -> TypeMeta {
        TypeMeta { kind: kind.into() }
    }
}

// Presentation view of the Kubernetes object metadata; only the fields the UI cares about.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    pub creation_timestamp: Option<DateTime<Utc>>,
}

impl From<&metav1::ObjectMeta> for ObjectMeta {
    fn from(meta: &metav1::ObjectMeta) -> Self {
        ObjectMeta {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            uid: meta.uid.clone().unwrap_or_default(),
            labels: meta.labels.clone().unwrap_or_default(),
            annotations: meta.annotations.clone().unwrap_or_default(),
            creation_timestamp: meta.creation_timestamp.as_ref().map(|t| t.0),
        }
    }
}

/// Counts of list items in each coarse lifecycle bucket.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    pub running: usize,
    pub pending: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl ResourceStatus {
    pub fn record(&mut self, phase: Phase) {
        match phase {
            Phase::InProgress => self.running += 1,
            Phase::Completed => self.succeeded += 1,
            Phase::Failed => self.failed += 1,
            Phase::New => self.pending += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.running + self.pending + self.succeeded + self.failed
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_object_meta_from_k8s() {
        let meta = metav1::ObjectMeta {
            name: Some("nightly".into()),
            namespace: Some("velero".into()),
            uid: Some("abcd-1234".into()),
            ..Default::default()
        };

        let view = ObjectMeta::from(&meta);
        assert_eq!(view.name, "nightly");
        assert_eq!(view.namespace, "velero");
        assert_eq!(view.uid, "abcd-1234");
        assert!(view.labels.is_empty());
        assert_eq!(view.creation_timestamp, None);
    }

    #[rstest]
    fn test_resource_status_record() {
        let mut status = ResourceStatus::default();
        for phase in [Phase::New, Phase::InProgress, Phase::Completed, Phase::Failed, Phase::Failed] {
            status.record(phase);
        }

        assert_eq!(status, ResourceStatus { running: 1, pending: 1, succeeded: 1, failed: 2 });
        assert_eq!(status.total(), 5);
    }

    #[rstest]
    fn test_serialize_list_meta() {
        let json = serde_json::to_value(ListMeta { total_items: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"totalItems": 3}));
    }
}
