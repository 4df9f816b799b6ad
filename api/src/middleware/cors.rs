//! CORS configuration for the web frontend.

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware for the configured frontend origin.
///
/// Credentials are allowed because the frontend sends the Authorization
/// header on authenticated calls.
pub fn create_cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
