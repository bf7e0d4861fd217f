pub mod location;
pub mod region;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(location::list_locations)
        .service(location::get_location)
        .service(location::create_location)
        .service(location::update_location)
        .service(region::list_regions)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::LocationNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}
