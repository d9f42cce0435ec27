use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ListMeta,
    ObjectMeta,
    TypeMeta,
};

// Generic view over objects of an arbitrary custom resource definition
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceObjectList {
    pub type_meta: TypeMeta,
    pub list_meta: ListMeta,
    pub items: Vec<CustomResourceObject>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceObject {
    pub type_meta: TypeMeta,
    pub object_meta: ObjectMeta,
}
