use kd_api::v1::{
    Backup,
    BackupDetail,
    BackupList,
    BackupProgress,
    BackupSpec,
    BackupStatus,
};
use kd_api::{
    Condition,
    ListMeta,
    RESOURCE_KIND_BACKUP,
    TypeMeta,
};
use kd_core::dataselect::{
    ComparableValue,
    PropertyName,
    select,
};
use kd_core::jsonutils::*;
use kd_core::k8s::{
    NamespaceQuery,
    ObjectCell,
    classify,
    phase_of,
    resource_error,
    resource_status,
    validate_namespace,
};
use kd_core::prelude::*;
use kube::api::{
    Api,
    ListParams as KubeListParams,
};
use rocket::serde::json::Json;
use tracing::*;

use crate::AppContext;
use crate::errors::{
    ApiError,
    respond,
};
use crate::params::ListParams;
use crate::util::*;

/// Backups sort and filter on how many items they've backed up so far.
pub struct BackupCell(ObjectCell);

impl BackupCell {
    pub fn new(obj: DynamicObject) -> BackupCell {
        BackupCell(ObjectCell::new(obj, RESOURCE_KIND_BACKUP))
    }
}

impl AsRef<DynamicObject> for BackupCell {
    fn as_ref(&self) -> &DynamicObject {
        self.0.as_ref()
    }
}

impl DataCell for BackupCell {
    fn property(&self, name: &PropertyName) -> Option<ComparableValue> {
        match name {
            PropertyName::Progress => nested_i64(&self.0.obj.data, &["status", "progress", "itemsBackedUp"])
                .found()
                .map(ComparableValue::Numeric),
            _ => self.0.property(name),
        }
    }

    fn resource_selector(&self) -> ResourceSelector {
        self.0.resource_selector()
    }
}

pub fn to_backup(obj: &DynamicObject) -> anyhow::Result<Backup> {
    let conditions = nested_slice(&obj.data, &["status", "conditions"])
        .found()
        .map(|conds| {
            conds
                .iter()
                .filter_map(|c| serde_json::from_value::<Condition>(c.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(Backup {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_BACKUP),
        storage_location: optional_string(obj, &["spec", "storageLocation"]).unwrap_or_default(),
        ttl: optional_string(obj, &["spec", "ttl"]).unwrap_or_default(),
        included_namespaces: string_list(obj, &["spec", "includedNamespaces"]),
        excluded_namespaces: string_list(obj, &["spec", "excludedNamespaces"]),
        backup_status: BackupStatus {
            status: classify(phase_of(obj)),
            message: optional_string(obj, &["status", "failureReason"]).unwrap_or_default(),
            conditions,
        },
    })
}

pub fn to_backup_detail(obj: &DynamicObject) -> anyhow::Result<BackupDetail> {
    let phase = phase_of(obj);
    Ok(BackupDetail {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_BACKUP),
        phase: phase.into(),
        status: classify(phase),
        start_time: optional_string(obj, &["status", "startTimestamp"]),
        completion_time: optional_string(obj, &["status", "completionTimestamp"]),
        expiration: optional_string(obj, &["status", "expiration"]),
        storage_location: optional_string(obj, &["spec", "storageLocation"]),
        volume_snapshot_locations: nested_string_list(&obj.data, &["spec", "volumeSnapshotLocations"]).found(),
        progress: BackupProgress {
            total_items: nested_i64(&obj.data, &["status", "progress", "totalItems"]).unwrap_or_default(),
            items_backed_up: nested_i64(&obj.data, &["status", "progress", "itemsBackedUp"]).unwrap_or_default(),
        },
        included_namespaces: string_list(obj, &["spec", "includedNamespaces"]),
        excluded_namespaces: string_list(obj, &["spec", "excludedNamespaces"]),
        included_resources: string_list(obj, &["spec", "includedResources"]),
        excluded_resources: string_list(obj, &["spec", "excludedResources"]),
        errors: nested_i64(&obj.data, &["status", "errors"]).unwrap_or_default(),
        warnings: nested_i64(&obj.data, &["status", "warnings"]).unwrap_or_default(),
        failure_reason: optional_string(obj, &["status", "failureReason"]).unwrap_or_default(),
    })
}

// Backups are listed through a typed dynamic client over whatever the configured backups CRD
// resolves to.
pub async fn list_backups(
    ctx: &AppContext,
    ns_query: &NamespaceQuery,
    params: &ListParams,
) -> anyhow::Result<BackupList> {
    let query = params.to_query(ctx.config.default_items_per_page)?;
    let schema = ctx.resolver().resolve(&ctx.config.crds.backups).await?;
    let ar = schema.api_resource();
    let api: Api<DynamicObject> = match ns_query.to_request_param().filter(|_| schema.is_namespaced()) {
        Some(ns) => {
            validate_namespace(ns)?;
            Api::namespaced_with(ctx.client.clone(), ns, &ar)
        },
        None => Api::all_with(ctx.client.clone(), &ar),
    };

    let objs: Vec<_> = api
        .list(&KubeListParams::default())
        .await
        .map_err(|err| resource_error(err, &schema.plural))?
        .items
        .into_iter()
        .filter(|obj| !schema.is_namespaced() || ns_query.matches(obj.metadata.namespace.as_deref().unwrap_or("")))
        .collect();

    let status = resource_status(objs.iter().map(phase_of));
    let (cells, total) = select(objs.into_iter().map(BackupCell::new).collect(), &query);

    let mut errors = vec![];
    let items = convert_page(cells, to_backup, &mut errors);
    info!("listed {total} backups");
    Ok(BackupList { list_meta: ListMeta { total_items: total }, status, items, errors })
}

#[rocket::get("/api/v1/backup?<params..>")]
pub async fn list_all(ctx: &rocket::State<AppContext>, params: ListParams) -> Result<Json<BackupList>, ApiError> {
    respond(list_backups(ctx, &NamespaceQuery::all(), &params).await.map(Json))
}

#[rocket::get("/api/v1/backup/<namespace>?<params..>")]
pub async fn list(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    params: ListParams,
) -> Result<Json<BackupList>, ApiError> {
    respond(list_backups(ctx, &NamespaceQuery::from_param(Some(namespace)), &params).await.map(Json))
}

pub async fn get_backup_detail(ctx: &AppContext, namespace: &str, name: &str) -> anyhow::Result<BackupDetail> {
    let schema = ctx.resolver().resolve(&ctx.config.crds.backups).await?;
    let raw = ctx.adapter().get(&schema, Some(namespace), name).await?;
    to_backup_detail(&decode_object(raw)?)
}

#[rocket::get("/api/v1/backup/<namespace>/<name>")]
pub async fn detail(ctx: &rocket::State<AppContext>, namespace: &str, name: &str) -> Result<Json<BackupDetail>, ApiError> {
    respond(get_backup_detail(ctx, namespace, name).await.map(Json))
}

pub fn build_backup(spec: &BackupSpec) -> anyhow::Result<serde_json::Value> {
    build_velero_object(BACKUP_KIND, &spec.name, &spec.namespace, spec_fields(spec)?)
}

pub async fn create_backup(ctx: &AppContext, spec: &BackupSpec) -> anyhow::Result<Backup> {
    info!("creating backup {}/{}", spec.namespace, spec.name);
    let body = build_backup(spec)?;
    let schema = ctx.resolver().resolve(&ctx.config.crds.backups).await?;
    let raw = ctx.adapter().create(&schema, Some(spec.namespace.as_str()), &body).await?;
    to_backup(&decode_object(raw)?)
}

#[rocket::post("/api/v1/backup", data = "<spec>")]
pub async fn create(ctx: &rocket::State<AppContext>, spec: Json<BackupSpec>) -> Result<Json<Backup>, ApiError> {
    respond(create_backup(ctx, &spec).await.map(Json))
}

pub async fn delete_backup(ctx: &AppContext, namespace: &str, name: &str) -> EmptyResult {
    let schema = ctx.resolver().resolve(&ctx.config.crds.backups).await?;
    ctx.adapter().delete(&schema, Some(namespace), name).await
}

#[rocket::delete("/api/v1/backup/<namespace>/<name>")]
pub async fn delete(ctx: &rocket::State<AppContext>, namespace: &str, name: &str) -> Result<(), ApiError> {
    respond(delete_backup(ctx, namespace, name).await)
}
