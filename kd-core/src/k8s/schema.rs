use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::{
    Api,
    ApiResource,
};
use kube::discovery::Scope;
use lazy_static::lazy_static;
use tracing::*;

use super::*;
use crate::errors::*;
use crate::prelude::*;

lazy_static! {
    // <plural>.<group>, where the group has at least one dot-free label
    static ref CRD_NAME_RE: Regex = Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?\.[a-z0-9]([a-z0-9.-]*[a-z0-9])?$").unwrap();
}

/// Everything we need to know about a custom resource to build REST paths for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrdSchema {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub plural: String,
    pub scope: Scope,
}

impl CrdSchema {
    pub fn from_crd(crd: &CustomResourceDefinition) -> anyhow::Result<CrdSchema> {
        let name = crd.name_any();
        let spec = &crd.spec;

        let version = spec
            .versions
            .iter()
            .find(|v| v.storage)
            .or_else(|| spec.versions.iter().find(|v| v.served))
            .ok_or_else(|| ResourceError::decode(&format!("{name} has no storage or served version")))?;

        let scope = match spec.scope.as_str() {
            SCOPE_NAMESPACED => Scope::Namespaced,
            SCOPE_CLUSTER => Scope::Cluster,
            other => bail!(ResourceError::decode(&format!("{name} has unknown scope {other:?}"))),
        };

        Ok(CrdSchema {
            group: spec.group.clone(),
            version: version.name.clone(),
            kind: spec.names.kind.clone(),
            plural: spec.names.plural.clone(),
            scope,
        })
    }

    pub fn is_namespaced(&self) -> bool {
        matches!(self.scope, Scope::Namespaced)
    }

    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: self.api_version(),
            kind: self.kind.clone(),
            plural: self.plural.clone(),
        }
    }
}

/// Looks up custom resource definitions by fully-qualified name.  Nothing is cached; every call
/// goes to the apiserver.
#[derive(Clone)]
pub struct CrdResolver {
    client: kube::Client,
}

impl CrdResolver {
    pub fn new(client: kube::Client) -> CrdResolver {
        CrdResolver { client }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, fq_name: &str) -> anyhow::Result<CrdSchema> {
        if !CRD_NAME_RE.is_match(fq_name) {
            bail!(ResourceError::validation(&format!("expected <plural>.<group>, got {fq_name:?}")));
        }

        let crd_api: Api<CustomResourceDefinition> = Api::all(self.client.clone());
        let crd = crd_api.get(fq_name).await.map_err(|err| resource_error(err, fq_name))?;
        let schema = CrdSchema::from_crd(&crd)?;
        debug!("resolved {fq_name} to {}/{} ({:?})", schema.api_version(), schema.plural, schema.scope);
        Ok(schema)
    }
}
