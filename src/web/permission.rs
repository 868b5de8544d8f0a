use super::route::permission_routes;
use crate::global::get_dictionary;
use crate::permission::error::Error;
use crate::permission::kind::type_options;
use crate::permission::store::{Paging, PermissionStore, Values};
use actix_web::http::header;
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_section)
        .service(view_routes)
        .service(view_types)
        .service(view_tree)
        .service(view_permissions)
        .service(create_permission)
        .service(view_permission)
        .service(update_permission)
        .service(delete_permission);
}

/// Query string accepted by the listing route.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub field_mask: Option<String>,
    /// Comma separated, `-` prefix for descending.
    pub order_by: Option<String>,
    /// JSON object of field filters.
    pub query: Option<String>,
}

#[get("/permission")]
async fn view_section() -> impl Responder {
    let routes = permission_routes(get_dictionary());
    let target = routes
        .first()
        .and_then(|section| section.redirect)
        .unwrap_or("/");

    HttpResponse::Found()
        .append_header((header::LOCATION, target))
        .finish()
}

#[get("/permission/routes")]
async fn view_routes() -> impl Responder {
    HttpResponse::Ok().json(permission_routes(get_dictionary()))
}

#[get("/permission/types")]
async fn view_types() -> impl Responder {
    HttpResponse::Ok().json(type_options(get_dictionary()))
}

#[get("/permission/tree")]
async fn view_tree(store: web::Data<PermissionStore>) -> Result<HttpResponse, Error> {
    let tree = store.list_permission_tree(get_dictionary()).await?;
    Ok(HttpResponse::Ok().json(tree))
}

#[get("/permission/permissions")]
async fn view_permissions(
    store: web::Data<PermissionStore>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, Error> {
    let params = params.into_inner();
    let filters: Option<Values> = match &params.query {
        Some(query) => Some(
            serde_json::from_str(query)
                .map_err(|err| Error::InvalidValues(format!("bad query: {}", err)))?,
        ),
        None => None,
    };
    let order_by = params.order_by.as_deref().map(|order_by| {
        order_by
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect()
    });

    let response = store
        .list_permission(
            Some(Paging {
                page: params.page,
                page_size: params.page_size,
            }),
            filters.as_ref(),
            params.field_mask.as_deref(),
            order_by,
        )
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/permission/permissions/{id}")]
async fn view_permission(
    store: web::Data<PermissionStore>,
    path: web::Path<u32>,
) -> Result<HttpResponse, Error> {
    let permission = store.get_permission(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(permission))
}

#[post("/permission/permissions")]
async fn create_permission(
    store: web::Data<PermissionStore>,
    values: web::Json<Values>,
) -> Result<HttpResponse, Error> {
    let permission = store.create_permission(values.into_inner()).await?;
    Ok(HttpResponse::Created()
        .append_header((
            header::LOCATION,
            format!("/permission/permissions/{}", permission.id),
        ))
        .json(permission))
}

#[patch("/permission/permissions/{id}")]
async fn update_permission(
    store: web::Data<PermissionStore>,
    path: web::Path<u32>,
    values: web::Json<Values>,
) -> Result<HttpResponse, Error> {
    let permission = store
        .update_permission(path.into_inner(), values.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(permission))
}

#[delete("/permission/permissions/{id}")]
async fn delete_permission(
    store: web::Data<PermissionStore>,
    path: web::Path<u32>,
) -> Result<HttpResponse, Error> {
    store.delete_permission(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
