mod cell;
mod namespace;
mod objects;
mod rest;
mod schema;
mod status;
mod util;

pub use cell::*;
pub use namespace::*;
pub use objects::*;
pub use rest::*;
pub use schema::*;
pub use status::*;
pub use util::*;

use crate::dataselect::ResourceSelector;
use crate::errors::*;

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
    fn resource_selector(&self, resource_type: &str) -> ResourceSelector;
}

// Translate a kube client failure into our error taxonomy; `context` should say what we were
// trying to reach (a path, an object name) since the kube error often doesn't.
pub fn resource_error(err: kube::Error, context: &str) -> anyhow::Error {
    match err {
        kube::Error::Api(resp) if resp.code == 404 => ResourceError::not_found(context),
        kube::Error::Api(resp) if matches!(resp.code, 400 | 409 | 422) => {
            ResourceError::validation(&format!("{context}: {}", resp.message))
        },
        kube::Error::SerdeError(err) => ResourceError::decode(&format!("{context}: {err}")),
        err => ResourceError::transport(&format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests;
