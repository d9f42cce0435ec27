use http::header::CONTENT_TYPE;
use http::{
    Method,
    Request,
};
use kube::discovery::Scope;
use lazy_static::lazy_static;
use serde_json::Value;
use tracing::*;

use super::*;
use crate::errors::*;

lazy_static! {
    // DNS-1123 label
    static ref NAMESPACE_RE: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap();

    // DNS-1123 subdomain: dot-separated labels
    static ref OBJECT_NAME_RE: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap();
}

const MAX_NAMESPACE_LEN: usize = 63;
const MAX_OBJECT_NAME_LEN: usize = 253;

pub fn validate_namespace(namespace: &str) -> EmptyResult {
    if namespace.len() > MAX_NAMESPACE_LEN || !NAMESPACE_RE.is_match(namespace) {
        bail!(ResourceError::validation(&format!("invalid namespace {namespace:?}")));
    }
    Ok(())
}

pub fn validate_object_name(name: &str) -> EmptyResult {
    if name.len() > MAX_OBJECT_NAME_LEN || !OBJECT_NAME_RE.is_match(name) {
        bail!(ResourceError::validation(&format!("invalid object name {name:?}")));
    }
    Ok(())
}

// REST path for a resolved schema:
//
//   /<api|apis>/[<group>/]<version>/[namespaces/<ns>/]<plural>[/<name>]
//
// The namespace segment only shows up for namespaced resources, and only if we were given one;
// cluster-scoped resources ignore whatever namespace they're handed.
pub fn resource_path(schema: &CrdSchema, namespace: Option<&str>, name: Option<&str>) -> String {
    let mut path = if schema.group.is_empty() {
        format!("/api/{}", schema.version)
    } else {
        format!("/apis/{}/{}", schema.group, schema.version)
    };

    if let (Scope::Namespaced, Some(ns)) = (&schema.scope, namespace.filter(|ns| !ns.is_empty())) {
        path.push_str(&format!("/namespaces/{ns}"));
    }
    path.push_str(&format!("/{}", schema.plural));

    if let Some(name) = name {
        path.push_str(&format!("/{name}"));
    }
    path
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListOptions {
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
}

impl ListOptions {
    pub fn query_string(&self) -> Option<String> {
        if self.label_selector.is_none() && self.field_selector.is_none() {
            return None;
        }

        let mut qs = url::form_urlencoded::Serializer::new(String::new());
        if let Some(sel) = &self.label_selector {
            qs.append_pair("labelSelector", sel);
        }
        if let Some(sel) = &self.field_selector {
            qs.append_pair("fieldSelector", sel);
        }
        Some(qs.finish())
    }
}

/// Issues raw REST calls against a resolved custom resource.  Payloads are handed back as
/// untyped JSON; the only checks are that they parse and have the right top-level shape.
#[derive(Clone)]
pub struct DynamicRestAdapter {
    client: kube::Client,
}

impl DynamicRestAdapter {
    pub fn new(client: kube::Client) -> DynamicRestAdapter {
        DynamicRestAdapter { client }
    }

    #[instrument(skip(self, schema, opts), fields(plural = %schema.plural))]
    pub async fn list(&self, schema: &CrdSchema, namespace: Option<&str>, opts: &ListOptions) -> anyhow::Result<Value> {
        check_segments(schema, namespace, None)?;
        let mut path = resource_path(schema, namespace, None);
        if let Some(qs) = opts.query_string() {
            path = format!("{path}?{qs}");
        }

        let list = self.send_json(Method::GET, &path, vec![]).await?;
        if !list.get("items").is_some_and(Value::is_array) {
            bail!(ResourceError::decode(&format!("{path}: list response has no items array")));
        }
        Ok(list)
    }

    #[instrument(skip(self, schema), fields(plural = %schema.plural))]
    pub async fn get(&self, schema: &CrdSchema, namespace: Option<&str>, name: &str) -> anyhow::Result<Value> {
        require_namespace(schema, namespace)?;
        check_segments(schema, namespace, Some(name))?;
        let path = resource_path(schema, namespace, Some(name));
        self.send_json(Method::GET, &path, vec![]).await
    }

    #[instrument(skip(self, schema, body), fields(plural = %schema.plural))]
    pub async fn create(&self, schema: &CrdSchema, namespace: Option<&str>, body: &Value) -> anyhow::Result<Value> {
        require_namespace(schema, namespace)?;
        check_segments(schema, namespace, None)?;
        if !body.is_object() {
            bail!(ResourceError::validation("request body must be a JSON object"));
        }

        let path = resource_path(schema, namespace, None);
        self.send_json(Method::POST, &path, serde_json::to_vec(body)?).await
    }

    #[instrument(skip(self, schema), fields(plural = %schema.plural))]
    pub async fn delete(&self, schema: &CrdSchema, namespace: Option<&str>, name: &str) -> EmptyResult {
        require_namespace(schema, namespace)?;
        check_segments(schema, namespace, Some(name))?;
        let path = resource_path(schema, namespace, Some(name));

        // The apiserver answers a delete with either the object or a Status; we don't care which
        self.send(Method::DELETE, &path, vec![]).await?;
        info!("deleted {path}");
        Ok(())
    }

    async fn send_json(&self, method: Method, path: &str, body: Vec<u8>) -> anyhow::Result<Value> {
        let text = self.send(method, path, body).await?;
        let payload: Value =
            serde_json::from_str(&text).map_err(|err| ResourceError::decode(&format!("{path}: {err}")))?;
        if !payload.is_object() {
            bail!(ResourceError::decode(&format!("{path}: expected a JSON object")));
        }
        Ok(payload)
    }

    async fn send(&self, method: Method, path: &str, body: Vec<u8>) -> anyhow::Result<String> {
        debug!("{method} {path}");
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|err| ResourceError::validation(&format!("{path}: {err}")))?;

        self.client.request_text(req).await.map_err(|err| resource_error(err, path))
    }
}

fn require_namespace(schema: &CrdSchema, namespace: Option<&str>) -> EmptyResult {
    if schema.is_namespaced() && namespace.is_none_or(str::is_empty) {
        bail!(ResourceError::validation(&format!("{} is namespaced but no namespace was given", schema.plural)));
    }
    Ok(())
}

// Anything that lands in the path has to be a plain name, or a `?` or `../` would point the request
// somewhere else.  Cluster-scoped schemas never put the namespace in the path, so it isn't checked.
fn check_segments(schema: &CrdSchema, namespace: Option<&str>, name: Option<&str>) -> EmptyResult {
    if let (true, Some(ns)) = (schema.is_namespaced(), namespace.filter(|ns| !ns.is_empty())) {
        validate_namespace(ns)?;
    }
    if let Some(name) = name {
        validate_object_name(name)?;
    }
    Ok(())
}
