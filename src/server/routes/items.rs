//! Item CRUD and bulk processing endpoints

use crate::core::models::{ItemId, ItemPayload};
use crate::server::state::AppState;
use crate::utils::validation::ItemValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Configure item routes
///
/// `/process` is registered before `/{id}` so it is not taken for an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/process", web::get().to(process_items))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

async fn list_items(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let items = state.items.find_all().await?;
    Ok(HttpResponse::Ok().json(items))
}

async fn create_item(
    state: web::Data<AppState>,
    payload: web::Json<ItemPayload>,
) -> ActixResult<HttpResponse> {
    let fields = match ItemValidator::validate(&payload) {
        Ok(fields) => fields,
        Err(violations) => {
            debug!("Rejected item with {} violations", violations.len());
            return Ok(HttpResponse::BadRequest().json(violations));
        }
    };

    let item = state.items.create(fields).await?;
    Ok(HttpResponse::Created().json(item))
}

async fn get_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> ActixResult<HttpResponse> {
    match state.items.find_by_id(path.into_inner()).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

async fn update_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
    payload: web::Json<ItemPayload>,
) -> ActixResult<HttpResponse> {
    let fields = match ItemValidator::validate(&payload) {
        Ok(fields) => fields,
        Err(violations) => return Ok(HttpResponse::BadRequest().json(violations)),
    };

    match state.items.update(path.into_inner(), fields).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

async fn delete_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> ActixResult<HttpResponse> {
    if state.items.delete_by_id(path.into_inner()).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}

/// Mark every item processed and return those that succeeded
async fn process_items(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let items = state.items.process_all().await?;
    Ok(HttpResponse::Ok().json(items))
}
