use actix_web::{HttpResponse, get, web};

use crate::store::Store;

use super::APIError;

#[tracing::instrument(skip(store))]
#[get("/regions")]
pub async fn list_regions(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let regions = store.list_regions().await;
    Ok(HttpResponse::Ok().json(regions))
}
