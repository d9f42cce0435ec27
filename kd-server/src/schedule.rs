use kd_api::v1::{
    Schedule,
    ScheduleDetail,
    ScheduleList,
    ScheduleSpec,
    ScheduleTemplate,
};
use kd_api::{
    ListMeta,
    RESOURCE_KIND_SCHEDULE,
    TypeMeta,
};
use kd_core::errors::*;
use kd_core::jsonutils::*;
use kd_core::k8s::{
    NamespaceQuery,
    ObjectCell,
    list_objects,
    phase_of,
};
use kd_core::prelude::*;
use rocket::serde::json::Json;
use serde_json::Value;
use tracing::*;

use crate::AppContext;
use crate::errors::{
    ApiError,
    respond,
};
use crate::params::ListParams;
use crate::util::*;

fn schedule_cell(obj: DynamicObject) -> ObjectCell {
    ObjectCell::new(obj, RESOURCE_KIND_SCHEDULE)
}

fn paused(obj: &DynamicObject) -> bool {
    nested_bool(&obj.data, &["spec", "paused"]).unwrap_or(false)
}

pub fn to_schedule(obj: &DynamicObject) -> anyhow::Result<Schedule> {
    Ok(Schedule {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_SCHEDULE),
        schedule: optional_string(obj, &["spec", "schedule"]).unwrap_or_default(),
        phase: phase_of(obj).into(),
        paused: paused(obj),
        last_backup_time: optional_string(obj, &["status", "lastBackup"]),
    })
}

pub fn to_schedule_detail(obj: &DynamicObject) -> anyhow::Result<ScheduleDetail> {
    let validation_error = nested_slice(&obj.data, &["status", "validationErrors"])
        .found()
        .and_then(|errs| errs.first())
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(ScheduleDetail {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_SCHEDULE),
        schedule: optional_string(obj, &["spec", "schedule"]).unwrap_or_default(),
        paused: paused(obj),
        template: ScheduleTemplate {
            included_namespaces: string_list(obj, &["spec", "template", "includedNamespaces"]),
            excluded_namespaces: string_list(obj, &["spec", "template", "excludedNamespaces"]),
            storage_location: optional_string(obj, &["spec", "template", "storageLocation"]).unwrap_or_default(),
            ttl: optional_string(obj, &["spec", "template", "ttl"]).unwrap_or_default(),
        },
        last_backup_time: optional_string(obj, &["status", "lastBackup"]),
        phase: phase_of(obj).into(),
        validation_error: validation_error.into(),
    })
}

pub async fn list_schedules(
    ctx: &AppContext,
    ns_query: &NamespaceQuery,
    params: &ListParams,
) -> anyhow::Result<ScheduleList> {
    let query = params.to_query(ctx.config.default_items_per_page)?;
    let page = list_objects(
        &ctx.resolver(),
        &ctx.adapter(),
        &ctx.config.crds.schedules,
        ns_query,
        &query,
        schedule_cell,
    )
    .await?;

    let mut errors = page.errors;
    let items = convert_page(page.items, to_schedule, &mut errors);
    Ok(ScheduleList {
        list_meta: ListMeta { total_items: page.total },
        status: page.status,
        items,
        errors,
    })
}

#[rocket::get("/api/v1/schedule?<params..>")]
pub async fn list_all(ctx: &rocket::State<AppContext>, params: ListParams) -> Result<Json<ScheduleList>, ApiError> {
    respond(list_schedules(ctx, &NamespaceQuery::all(), &params).await.map(Json))
}

#[rocket::get("/api/v1/schedule/<namespace>?<params..>")]
pub async fn list(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    params: ListParams,
) -> Result<Json<ScheduleList>, ApiError> {
    respond(list_schedules(ctx, &NamespaceQuery::from_param(Some(namespace)), &params).await.map(Json))
}

pub async fn get_schedule_detail(ctx: &AppContext, namespace: &str, name: &str) -> anyhow::Result<ScheduleDetail> {
    let schema = ctx.resolver().resolve(&ctx.config.crds.schedules).await?;
    let raw = ctx.adapter().get(&schema, Some(namespace), name).await?;
    to_schedule_detail(&decode_object(raw)?)
}

#[rocket::get("/api/v1/schedule/<namespace>/<name>")]
pub async fn detail(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    name: &str,
) -> Result<Json<ScheduleDetail>, ApiError> {
    respond(get_schedule_detail(ctx, namespace, name).await.map(Json))
}

// Everything except the cron expression goes into the template for the backups the schedule
// will create.
pub fn build_schedule(spec: &ScheduleSpec) -> anyhow::Result<Value> {
    if spec.schedule.is_empty() {
        bail!(ResourceError::validation("a schedule needs a cron expression"));
    }

    let mut template = spec_fields(spec)?;
    template.remove("schedule");

    let mut fields = serde_json::Map::new();
    fields.insert("schedule".into(), spec.schedule.clone().into());
    fields.insert("template".into(), template.into());
    build_velero_object(SCHEDULE_KIND, &spec.name, &spec.namespace, fields)
}

pub async fn create_schedule(ctx: &AppContext, spec: &ScheduleSpec) -> anyhow::Result<Schedule> {
    info!("creating schedule {}/{} ({})", spec.namespace, spec.name, spec.schedule);
    let body = build_schedule(spec)?;
    let schema = ctx.resolver().resolve(&ctx.config.crds.schedules).await?;
    let raw = ctx.adapter().create(&schema, Some(spec.namespace.as_str()), &body).await?;
    to_schedule(&decode_object(raw)?)
}

#[rocket::post("/api/v1/schedule", data = "<spec>")]
pub async fn create(ctx: &rocket::State<AppContext>, spec: Json<ScheduleSpec>) -> Result<Json<Schedule>, ApiError> {
    respond(create_schedule(ctx, &spec).await.map(Json))
}

pub async fn delete_schedule(ctx: &AppContext, namespace: &str, name: &str) -> EmptyResult {
    let schema = ctx.resolver().resolve(&ctx.config.crds.schedules).await?;
    ctx.adapter().delete(&schema, Some(namespace), name).await
}

#[rocket::delete("/api/v1/schedule/<namespace>/<name>")]
pub async fn delete(ctx: &rocket::State<AppContext>, namespace: &str, name: &str) -> Result<(), ApiError> {
    respond(delete_schedule(ctx, namespace, name).await)
}
