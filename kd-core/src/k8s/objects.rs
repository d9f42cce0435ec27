use kd_api::ResourceStatus;
use kube::api::DynamicObject;
use serde_json::Value;
use tracing::*;

use super::*;
use crate::dataselect::{
    DataCell,
    DataSelectQuery,
    select,
};
use crate::jsonutils::*;

/// One page of custom objects, plus the bookkeeping list endpoints report alongside it.
#[derive(Debug)]
pub struct ObjectPage<C> {
    pub schema: CrdSchema,
    pub items: Vec<C>,

    // number of items that passed the filter, not the page length
    pub total: usize,

    // phase summary over everything fetched, before any filtering
    pub status: ResourceStatus,
    pub errors: Vec<String>,
}

// Items that don't decode as objects are reported back as errors rather than failing the list.
pub fn decode_items(list: Value) -> (Vec<DynamicObject>, Vec<String>) {
    let items = match list {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => vec![],
        },
        _ => vec![],
    };

    let mut objs = Vec::with_capacity(items.len());
    let mut errors = vec![];
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<DynamicObject>(item) {
            Ok(obj) => objs.push(obj),
            Err(err) => {
                warn!("skipping list item {i}: {err}");
                errors.push(format!("item {i}: {err}"));
            },
        }
    }
    (objs, errors)
}

pub fn phase_of(obj: &DynamicObject) -> &str {
    nested_str(&obj.data, &["status", "phase"]).unwrap_or("")
}

/// List the objects of a custom resource through the CRD pathway and run them through the select
/// pipeline.  `make_cell` wraps each decoded object in whatever cell type the caller wants to
/// filter and sort on.
pub async fn list_objects<C, F>(
    resolver: &CrdResolver,
    adapter: &DynamicRestAdapter,
    fq_name: &str,
    ns_query: &NamespaceQuery,
    query: &DataSelectQuery,
    make_cell: F,
) -> anyhow::Result<ObjectPage<C>>
where
    C: DataCell,
    F: Fn(DynamicObject) -> C,
{
    let schema = resolver.resolve(fq_name).await?;

    // Only push the namespace into the path when there's exactly one; otherwise list everything
    // and drop what wasn't asked for.
    let list = adapter.list(&schema, ns_query.to_request_param(), &ListOptions::default()).await?;
    let (objs, errors) = decode_items(list);
    let objs: Vec<_> = objs
        .into_iter()
        .filter(|obj| !schema.is_namespaced() || ns_query.matches(obj.metadata.namespace.as_deref().unwrap_or("")))
        .collect();

    let status = resource_status(objs.iter().map(phase_of));
    let (items, total) = select(objs.into_iter().map(make_cell).collect(), query);
    info!("listed {total} {} ({} on this page, {} errors)", schema.plural, items.len(), errors.len());

    Ok(ObjectPage { schema, items, total, status, errors })
}
