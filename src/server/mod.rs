pub mod api;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::error_handling::HandleErrorLayer;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router, middleware};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusBuilder;
use once_cell::sync::Lazy;
use sqlx::PgPool;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::database::RedisDatabase;
use crate::database::media_store::DynMediaStore;
use crate::database::pubsub::{MediaEvent, TopicSubscriber};
use crate::database::status::Status;
use crate::server::api::health_controller::health_endpoint;
use crate::server::api::login_controller::LoginController;
use crate::server::api::media_controller::MediaController;
use crate::server::api::status_controller::StatusController;
use crate::server::api::timeline_controller::TimelineController;
use crate::server::api::user_controller::UserController;
use crate::server::dtos::error_dto::{ErrorMessage, ErrorResponse};
use crate::server::services::app_services::AppServices;
use crate::server::utils::metrics_utils::track_metrics;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub fn get_app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn get_uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}

/// rewrites error responses into the uniform json envelope. handlers only
/// attach the message, method and path are filled in here where the request
/// is still around.
async fn error_envelope(
    request: axum::extract::Request,
    next: middleware::Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Some(ErrorMessage(message)) = response.extensions_mut().remove::<ErrorMessage>() {
        let status = response.status();
        let body = ErrorResponse {
            method,
            path,
            timestamp: Utc::now(),
            message,
        };
        return (status, Json(body)).into_response();
    }

    response
}

fn build_cors_layer(cors_origin: &str) -> CorsLayer {
    if cors_origin.trim() == "*" {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors_origin
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(
        config: Arc<AppConfig>,
        redis_db: RedisDatabase,
        media_store: DynMediaStore,
        pg_pool: Option<PgPool>,
    ) -> anyhow::Result<()> {
        Lazy::force(&START_TIME);

        let recorder_handle = PrometheusBuilder::new()
            .install_recorder()
            .context("couldn't install metrics recorder")?;

        let services = AppServices::new(redis_db, media_store, pg_pool, config.clone());

        Self::spawn_subscribers(&services, &config)?;

        let timeout_middleware = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(REQUEST_TIMEOUT);

        let router = Router::new()
            .nest("/statuses", StatusController::app())
            .nest("/users", UserController::app())
            .nest("/timelines", TimelineController::app())
            .nest("/media", MediaController::app())
            .merge(LoginController::app())
            .route("/health", get(health_endpoint))
            .route(
                "/metrics",
                get(move || std::future::ready(recorder_handle.render())),
            )
            .layer(middleware::from_fn(error_envelope))
            .layer(middleware::from_fn(track_metrics))
            .layer(Extension(services))
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(&config.cors_origin))
            .layer(timeout_middleware);

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
            .await
            .with_context(|| format!("couldn't bind port {}", config.port))?;

        info!("listening on 0.0.0.0:{}", config.port);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server stopped unexpectedly")?;

        Ok(())
    }

    /// the two pub/sub consumers: status events fan out into timelines, media
    /// events kick off conversion. both run for the lifetime of the process.
    fn spawn_subscribers(services: &AppServices, config: &AppConfig) -> anyhow::Result<()> {
        let status_subscriber = TopicSubscriber::new(&config.redis_url, &config.status_topic)?;
        let timelines = services.timelines.clone();
        tokio::spawn(async move {
            let result = status_subscriber
                .run(|payload| {
                    let timelines = timelines.clone();
                    async move {
                        let status: Status = match serde_json::from_str(&payload) {
                            Ok(status) => status,
                            Err(e) => {
                                error!("status event is not valid json: {}", e);
                                return;
                            }
                        };

                        if let Err(e) = timelines.update_timelines(status.user_id, status).await {
                            error!("timeline fan-out failed: {}", e);
                        }
                    }
                })
                .await;

            if let Err(e) = result {
                error!("status subscriber stopped: {:#}", e);
            }
        });

        let media_subscriber = TopicSubscriber::new(&config.redis_url, &config.media_topic)?;
        let conversion = services.conversion.clone();
        tokio::spawn(async move {
            let result = media_subscriber
                .run(|payload| {
                    let conversion = conversion.clone();
                    async move {
                        let event: MediaEvent = match serde_json::from_str(&payload) {
                            Ok(event) => event,
                            Err(e) => {
                                error!("media event is not valid json: {}", e);
                                return;
                            }
                        };

                        if let Err(e) = conversion.convert(&event.media_id).await {
                            error!("conversion of {} failed: {}", event.media_id, e);
                        }
                    }
                })
                .await;

            if let Err(e) = result {
                error!("media subscriber stopped: {:#}", e);
            }
        });

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("couldn't listen for shutdown signal: {}", e);
        return;
    }
    info!("shutdown signal received");
}
