use std::fs::File;
use std::net::{
    IpAddr,
    Ipv4Addr,
};

use kd_core::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrdNames {
    pub backups: String,
    pub restores: String,
    pub schedules: String,
    pub backup_storage_locations: String,
}

impl Default for CrdNames {
    fn default() -> Self {
        CrdNames {
            backups: BACKUP_CRD_NAME.into(),
            restores: RESTORE_CRD_NAME.into(),
            schedules: SCHEDULE_CRD_NAME.into(),
            backup_storage_locations: BACKUP_STORAGE_LOCATION_CRD_NAME.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub request_timeout_seconds: u64,

    // used when a list request doesn't say how many items it wants
    pub default_items_per_page: i64,

    pub crds: CrdNames,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_SERVER_PORT,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            crds: CrdNames::default(),
        }
    }
}

impl ServerConfig {
    pub fn load(filename: &str) -> anyhow::Result<ServerConfig> {
        Ok(serde_yaml::from_reader(File::open(filename)?)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_partial_config() {
        let config_yml = "
---
port: 8443
defaultItemsPerPage: 50
crds:
  restores: restores.backup.example.com
";
        let config: ServerConfig = serde_yaml::from_str(config_yml).unwrap();
        assert_eq!(config.port, 8443);
        assert_eq!(config.default_items_per_page, 50);
        assert_eq!(config.request_timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECONDS);
        assert_eq!(config.crds.restores, "restores.backup.example.com");
        assert_eq!(config.crds.schedules, SCHEDULE_CRD_NAME);
    }

    #[rstest]
    fn test_empty_config() {
        let config: ServerConfig = serde_yaml::from_str("---\n{}\n").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address.to_string(), "0.0.0.0");
    }
}
