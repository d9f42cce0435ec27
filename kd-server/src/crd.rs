use kd_api::ListMeta;
use kd_api::TypeMeta;
use kd_api::v1::{
    CustomResourceObject,
    CustomResourceObjectList,
};
use kd_core::k8s::{
    NamespaceQuery,
    ObjectCell,
    list_objects,
};
use kd_core::prelude::*;
use rocket::serde::json::Json;
use serde_json::Value;

use crate::AppContext;
use crate::errors::{
    ApiError,
    respond,
};
use crate::params::ListParams;
use crate::util::*;

// Generic listing for any custom resource, named by its fully-qualified CRD name
pub async fn list_custom_objects(
    ctx: &AppContext,
    crd: &str,
    ns_query: &NamespaceQuery,
    params: &ListParams,
) -> anyhow::Result<CustomResourceObjectList> {
    let query = params.to_query(ctx.config.default_items_per_page)?;
    let page = list_objects(&ctx.resolver(), &ctx.adapter(), crd, ns_query, &query, |obj| {
        ObjectCell::new(obj, crd)
    })
    .await?;

    let kind = page.schema.kind.clone();
    let mut errors = page.errors;
    let items = convert_page(
        page.items,
        |obj| Ok(CustomResourceObject { type_meta: TypeMeta::new(&kind), object_meta: object_meta(obj)? }),
        &mut errors,
    );
    Ok(CustomResourceObjectList {
        type_meta: TypeMeta::new(&kind),
        list_meta: ListMeta { total_items: page.total },
        items,
        errors,
    })
}

#[rocket::get("/api/v1/crd/<crd>/object?<params..>")]
pub async fn list_all(
    ctx: &rocket::State<AppContext>,
    crd: &str,
    params: ListParams,
) -> Result<Json<CustomResourceObjectList>, ApiError> {
    respond(list_custom_objects(ctx, crd, &NamespaceQuery::all(), &params).await.map(Json))
}

#[rocket::get("/api/v1/crd/<crd>/object/<namespace>?<params..>")]
pub async fn list(
    ctx: &rocket::State<AppContext>,
    crd: &str,
    namespace: &str,
    params: ListParams,
) -> Result<Json<CustomResourceObjectList>, ApiError> {
    respond(list_custom_objects(ctx, crd, &NamespaceQuery::from_param(Some(namespace)), &params).await.map(Json))
}

// Detail views of arbitrary resources are passed through untouched
pub async fn get_custom_object(ctx: &AppContext, crd: &str, namespace: &str, name: &str) -> anyhow::Result<Value> {
    let schema = ctx.resolver().resolve(crd).await?;
    ctx.adapter().get(&schema, Some(namespace), name).await
}

#[rocket::get("/api/v1/crd/<crd>/object/<namespace>/<name>")]
pub async fn detail(
    ctx: &rocket::State<AppContext>,
    crd: &str,
    namespace: &str,
    name: &str,
) -> Result<Json<Value>, ApiError> {
    respond(get_custom_object(ctx, crd, namespace, name).await.map(Json))
}
