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
pub struct BackupStorageLocationList {
    pub list_meta: ListMeta,
    pub status: ResourceStatus,
    pub items: Vec<BackupStorageLocation>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStorageLocation {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    pub provider: String,
    pub bucket: String,
    pub phase: String,
    pub default: bool,
}
