// Velero API coordinates
pub const VELERO_API_VERSION: &str = "velero.io/v1";

pub const BACKUP_KIND: &str = "Backup";
pub const BACKUP_PLURAL: &str = "backups";
pub const RESTORE_KIND: &str = "Restore";
pub const SCHEDULE_KIND: &str = "Schedule";

// Fully-qualified custom resource definition names
pub const BACKUP_CRD_NAME: &str = "backups.velero.io";
pub const RESTORE_CRD_NAME: &str = "restores.velero.io";
pub const SCHEDULE_CRD_NAME: &str = "schedules.velero.io";
pub const BACKUP_STORAGE_LOCATION_CRD_NAME: &str = "backupstoragelocations.velero.io";

// CRD scope strings, as they appear in the CRD spec
pub const SCOPE_NAMESPACED: &str = "Namespaced";
pub const SCOPE_CLUSTER: &str = "Cluster";

// Query-string conventions
pub const SORT_ASCENDING: &str = "a";
pub const SORT_DESCENDING: &str = "d";
pub const ALL_NAMESPACES: &str = "_all";

// Defaults
pub const DEFAULT_SERVER_PORT: u16 = 9090;
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info,rocket=warn";
