pub const TEST_NAMESPACE: &str = "velero";
pub const TEST_OTHER_NAMESPACE: &str = "team-a";
pub const TEST_BACKUP_NAME: &str = "nightly";
pub const TEST_RESTORE_NAME: &str = "nightly-restore";
pub const TEST_SCHEDULE_NAME: &str = "daily";
pub const TEST_STORAGE_LOCATION_NAME: &str = "default";
pub const TEST_WIDGET_NAME: &str = "sprocket";

pub const TEST_WIDGET_CRD_NAME: &str = "widgets.example.io";
pub const TEST_TIMESTAMP: &str = "2024-03-01T12:00:00Z";

pub const CRD_PATH_PREFIX: &str = "/apis/apiextensions.k8s.io/v1/customresourcedefinitions";
pub const VELERO_PATH_PREFIX: &str = "/apis/velero.io/v1";
