pub mod constants;
pub mod dataselect;
pub mod errors;
pub mod jsonutils;
pub mod k8s;
pub mod logging;

pub mod prelude {
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::ResourceExt;
    pub use kube::api::DynamicObject;

    pub use crate::constants::*;
    pub use crate::dataselect::{
        DataCell,
        DataSelectQuery,
        ResourceSelector,
    };
    pub use crate::errors::{
        EmptyResult,
        ResourceError,
    };
    pub use crate::k8s::KubeResourceExt;
}
