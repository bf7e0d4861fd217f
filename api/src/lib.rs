pub mod routes;
pub mod store;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;

use crate::store::Store;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: Store) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();

            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = match var("PORT") {
            Ok(port) => port.parse().context("PORT must be a port number")?,
            Err(_) => 8000,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            allowed_origins,
        })
    }
}
