use actix_web::{HttpResponse, get, post, put, web};
use payloads::{LocationDetails, LocationId};

use crate::store::Store;

use super::APIError;

#[tracing::instrument(skip(store))]
#[get("/locations")]
pub async fn list_locations(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let locations = store.list_locations().await;
    Ok(HttpResponse::Ok().json(locations))
}

#[tracing::instrument(skip(store), ret)]
#[get("/locations/{location_id}")]
pub async fn get_location(
    location_id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let location_id = LocationId(location_id.into_inner());
    let location = store.get_location(&location_id).await?;
    Ok(HttpResponse::Ok().json(location))
}

#[tracing::instrument(skip(store), ret)]
#[post("/locations")]
pub async fn create_location(
    details: web::Json<LocationDetails>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let location = store.create_location(&details).await?;
    Ok(HttpResponse::Ok().json(location))
}

#[tracing::instrument(skip(store), ret)]
#[put("/locations/{location_id}")]
pub async fn update_location(
    location_id: web::Path<i64>,
    details: web::Json<LocationDetails>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let location_id = LocationId(location_id.into_inner());
    let location = store.update_location(&location_id, &details).await?;
    Ok(HttpResponse::Ok().json(location))
}
