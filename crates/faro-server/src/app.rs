use crate::data::sessions::SessionStore;
use crate::{AppConfig, routes};
use axum::{Extension, Router};
use http::{Method, header};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub fn create_app(app_config: AppConfig, origins: &[String]) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .merge(routes::global::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/questionnaire", routes::api::v0::questionnaire::create_router())
                .nest("/assessment", routes::api::v0::assessment::create_router())
                .layer(cors),
        )
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(Extension(app_config))
                .layer(Extension(SessionStore::default())),
        )
        .with_state(());
    Ok(app)
}
