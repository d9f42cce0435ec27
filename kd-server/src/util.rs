use kd_api::ObjectMeta;
use kd_core::errors::*;
use kd_core::jsonutils::*;
use kd_core::prelude::*;
use serde::Serialize;
use serde_json::{
    Map,
    Value,
    json,
};
use tracing::*;

pub fn decode_object(raw: Value) -> anyhow::Result<DynamicObject> {
    serde_json::from_value(raw).map_err(|err| ResourceError::decode(&format!("malformed object: {err}")))
}

pub fn object_meta(obj: &DynamicObject) -> anyhow::Result<ObjectMeta> {
    if obj.metadata.name.as_deref().is_none_or(str::is_empty) {
        bail!("object has no name");
    }
    Ok(ObjectMeta::from(&obj.metadata))
}

pub fn string_list(obj: &DynamicObject, path: &[&str]) -> Vec<String> {
    nested_string_list(&obj.data, path).unwrap_or_default()
}

pub fn optional_string(obj: &DynamicObject, path: &[&str]) -> Option<String> {
    nested_string(&obj.data, path).found()
}

/// Convert a page of cells into their presentation views.  Failures don't sink the whole list;
/// they're recorded in `errors` and the item is dropped.
pub fn convert_page<C, T, F>(cells: Vec<C>, convert: F, errors: &mut Vec<String>) -> Vec<T>
where
    C: AsRef<DynamicObject>,
    F: Fn(&DynamicObject) -> anyhow::Result<T>,
{
    cells
        .iter()
        .filter_map(|cell| {
            let obj = cell.as_ref();
            match convert(obj) {
                Ok(view) => Some(view),
                Err(err) => {
                    warn!("could not convert {}: {err}", obj.namespaced_name());
                    errors.push(format!("{}: {err}", obj.namespaced_name()));
                    None
                },
            }
        })
        .collect()
}

// Turn a create request into the top-level fields of the object's spec; name and namespace
// belong in the metadata, and everything else already knows how to skip itself when empty.
pub fn spec_fields<T: Serialize>(req: &T) -> anyhow::Result<Map<String, Value>> {
    let mut fields = match serde_json::to_value(req)? {
        Value::Object(fields) => fields,
        _ => bail!(ResourceError::validation("request body must be a JSON object")),
    };
    fields.remove("name");
    fields.remove("namespace");
    Ok(fields)
}

pub fn build_velero_object(kind: &str, name: &str, namespace: &str, spec: Map<String, Value>) -> anyhow::Result<Value> {
    if name.is_empty() || namespace.is_empty() {
        bail!(ResourceError::validation(&format!("{kind} needs both a name and a namespace")));
    }

    Ok(json!({
        "apiVersion": VELERO_API_VERSION,
        "kind": kind,
        "metadata": {"name": name, "namespace": namespace},
        "spec": spec,
    }))
}
