use kd_api::v1::{
    BackupStorageLocation,
    BackupStorageLocationList,
};
use kd_api::{
    ListMeta,
    RESOURCE_KIND_BACKUP_STORAGE_LOCATION,
    TypeMeta,
};
use kd_core::jsonutils::*;
use kd_core::k8s::{
    NamespaceQuery,
    ObjectCell,
    list_objects,
    phase_of,
};
use kd_core::prelude::*;
use rocket::serde::json::Json;

use crate::AppContext;
use crate::errors::{
    ApiError,
    respond,
};
use crate::params::ListParams;
use crate::util::*;

pub fn to_storage_location(obj: &DynamicObject) -> anyhow::Result<BackupStorageLocation> {
    Ok(BackupStorageLocation {
        object_meta: object_meta(obj)?,
        type_meta: TypeMeta::new(RESOURCE_KIND_BACKUP_STORAGE_LOCATION),
        provider: optional_string(obj, &["spec", "provider"]).unwrap_or_default(),
        bucket: optional_string(obj, &["spec", "objectStorage", "bucket"]).unwrap_or_default(),
        phase: phase_of(obj).into(),
        default: nested_bool(&obj.data, &["spec", "default"]).unwrap_or(false),
    })
}

pub async fn list_storage_locations(
    ctx: &AppContext,
    ns_query: &NamespaceQuery,
    params: &ListParams,
) -> anyhow::Result<BackupStorageLocationList> {
    let query = params.to_query(ctx.config.default_items_per_page)?;
    let page = list_objects(
        &ctx.resolver(),
        &ctx.adapter(),
        &ctx.config.crds.backup_storage_locations,
        ns_query,
        &query,
        |obj| ObjectCell::new(obj, RESOURCE_KIND_BACKUP_STORAGE_LOCATION),
    )
    .await?;

    let mut errors = page.errors;
    let items = convert_page(page.items, to_storage_location, &mut errors);
    Ok(BackupStorageLocationList {
        list_meta: ListMeta { total_items: page.total },
        status: page.status,
        items,
        errors,
    })
}

#[rocket::get("/api/v1/backupstoragelocation/<namespace>?<params..>")]
pub async fn list(
    ctx: &rocket::State<AppContext>,
    namespace: &str,
    params: ListParams,
) -> Result<Json<BackupStorageLocationList>, ApiError> {
    respond(list_storage_locations(ctx, &NamespaceQuery::from_param(Some(namespace)), &params).await.map(Json))
}
