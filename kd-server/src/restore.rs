use kd_api::v1::{
    Restore,
    RestoreDetail,
    RestoreList,
    RestoreProgress,
    RestoreSpec,
};
use kd_api::{
    ListMeta,
    RESOURCE_KIND_RESTORE,
    TypeMeta,
};
use kd_core::dataselect::{
    ComparableValue,
    PropertyName,
};
use kd_core::errors::*;
use kd_core::jsonutils::*;
use kd_core::k8s::{
    NamespaceQuery,
    ObjectCell,
    classify,
    list_objects,
    phase_of,
};
use kd_core::prelude::*;
use rocket::serde::json::Json;
use tracing::*;

use crate::AppContext;
use crate::errors::{
    ApiError,
    respond,
};
use crate::params::ListParams;
use crate::util::*;

pub struct RestoreCell(ObjectCell);

impl RestoreCell {
    pub fn new(obj: DynamicObject) -> RestoreCell {
        RestoreCell(ObjectCell::new(obj, RESOURCE_KIND_RESTORE))
    }
}

impl AsRef<DynamicObject> for RestoreCell {
    fn as_ref(&self) -> &DynamicObject {
        self.0.as_ref()
    }
}

impl DataCell for RestoreCell {
    fn property(&self, name: &PropertyName) -> Option<ComparableValue> {
        match name {
            PropertyName::Progress => nested_i64(&self.0.obj.data, &["status", "progress", "itemsRestored"])
                .found()
                .map(ComparableValue::Numeric),
            _ => self.0.property(name),
        }
    }

    fn resource_selector(&self) -> ResourceSelector {
        self.0.resource_selector()
    }
}

pub fn to_restore(obj: &DynamicObject) -> anyhow::Result<Restore> {
    Ok(Restore {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_RESTORE),
        backup_name: optional_string(obj, &["spec", "backupName"]).unwrap_or_default(),
        status: classify(phase_of(obj)),
    })
}

pub fn to_restore_detail(obj: &DynamicObject) -> anyhow::Result<RestoreDetail> {
    let phase = phase_of(obj);
    Ok(RestoreDetail {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_RESTORE),
        phase: phase.into(),
        status: classify(phase),
        start_time: optional_string(obj, &["status", "startTimestamp"]),
        completion_time: optional_string(obj, &["status", "completionTimestamp"]),
        backup_name: optional_string(obj, &["spec", "backupName"]).unwrap_or_default(),
        schedule_name: optional_string(obj, &["spec", "scheduleName"]).unwrap_or_default(),
        progress: RestoreProgress {
            total_items: nested_i64(&obj.data, &["status", "progress", "totalItems"]).unwrap_or_default(),
            items_restored: nested_i64(&obj.data, &["status", "progress", "itemsRestored"]).unwrap_or_default(),
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

pub async fn list_restores(
    ctx: &AppContext,
    ns_query: &NamespaceQuery,
    params: &ListParams,
) -> anyhow::Result<RestoreList> {
    let query = params.to_query(ctx.config.default_items_per_page)?;
    let page = list_objects(
        &ctx.resolver(),
        &ctx.adapter(),
        &ctx.config.crds.restores,
        ns_query,
        &query,
        RestoreCell::new,
    )
    .await?;

    let mut errors = page.errors;
    let items = convert_page(page.items, to_restore, &mut errors);
    Ok(RestoreList {
        list_meta: ListMeta { total_items: page.total },
        status: page.status,
        items,
        errors,
    })
}

#[rocket::get("/api/v1/restore?<params..>")]
pub async fn list_all(ctx: &rocket::State<AppContext>, params: ListParams) -> Result<Json<RestoreList>, ApiError> {
    respond(list_restores(ctx, &NamespaceQuery::all(), &params).await.map(Json))
}

#[rocket::get("/api/v1/restore/<namespace>?<params..>")]
pub async fn list(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    params: ListParams,
) -> Result<Json<RestoreList>, ApiError> {
    respond(list_restores(ctx, &NamespaceQuery::from_param(Some(namespace)), &params).await.map(Json))
}

pub async fn get_restore_detail(ctx: &AppContext, namespace: &str, name: &str) -> anyhow::Result<RestoreDetail> {
    let schema = ctx.resolver().resolve(&ctx.config.crds.restores).await?;
    let raw = ctx.adapter().get(&schema, Some(namespace), name).await?;
    to_restore_detail(&decode_object(raw)?)
}

#[rocket::get("/api/v1/restore/<namespace>/<name>")]
pub async fn detail(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    name: &str,
) -> Result<Json<RestoreDetail>, ApiError> {
    respond(get_restore_detail(ctx, namespace, name).await.map(Json))
}

pub fn build_restore(spec: &RestoreSpec) -> anyhow::Result<serde_json::Value> {
    if spec.backup_name.is_empty() {
        bail!(ResourceError::validation("a restore needs a backupName"));
    }
    build_velero_object(RESTORE_KIND, &spec.name, &spec.namespace, spec_fields(spec)?)
}

pub async fn create_restore(ctx: &AppContext, spec: &RestoreSpec) -> anyhow::Result<Restore> {
    info!("creating restore {}/{} from {}", spec.namespace, spec.name, spec.backup_name);
    let body = build_restore(spec)?;
    let schema = ctx.resolver().resolve(&ctx.config.crds.restores).await?;
    let raw = ctx.adapter().create(&schema, Some(spec.namespace.as_str()), &body).await?;
    to_restore(&decode_object(raw)?)
}

#[rocket::post("/api/v1/restore", data = "<spec>")]
pub async fn create(ctx: &rocket::State<AppContext>, spec: Json<RestoreSpec>) -> Result<Json<Restore>, ApiError> {
    respond(create_restore(ctx, &spec).await.map(Json))
}

pub async fn delete_restore(ctx: &AppContext, namespace: &str, name: &str) -> EmptyResult {
    let schema = ctx.resolver().resolve(&ctx.config.crds.restores).await?;
    ctx.adapter().delete(&schema, Some(namespace), name).await
}

#[rocket::delete("/api/v1/restore/<namespace>/<name>")]
pub async fn delete(ctx: &rocket::State<AppContext>, namespace: &str, name: &str) -> Result<(), ApiError> {
    respond(delete_restore(ctx, namespace, name).await)
}
