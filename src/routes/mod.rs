pub mod health;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;
pub mod types;

use axum::{http::StatusCode, routing::get, Router};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::dates::parse_stored_date;
use crate::entity::measurement;
use crate::error::{AppError, AppResult};

/// Observation count per station code
#[derive(Debug, Clone, FromQueryResult)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

/// Most recent observation date across all measurements
pub async fn latest_observation_date(db: &DatabaseConnection) -> AppResult<NaiveDate> {
    let latest = measurement::Entity::find()
        .select_only()
        .column_as(measurement::Column::Date.max(), "max_date")
        .into_tuple::<Option<String>>()
        .one(db)
        .await?
        .flatten()
        .ok_or_else(|| AppError::NotFound("No measurements available".to_string()))?;

    parse_stored_date(&latest)
}

/// Station with the most measurements.
///
/// Ties go to the lexicographically smallest station code.
pub async fn most_active_station(db: &DatabaseConnection) -> AppResult<StationActivity> {
    measurement::Entity::find()
        .select_only()
        .column(measurement::Column::Station)
        .column_as(measurement::Column::Id.count(), "observations")
        .group_by(measurement::Column::Station)
        .order_by_desc(measurement::Column::Id.count())
        .order_by_asc(measurement::Column::Station)
        .into_model::<StationActivity>()
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("No measurements available".to_string()))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        precipitation::get_precipitation,
        stations::list_stations,
        tobs::get_most_active_tobs,
        temperature::get_temperature_since,
        temperature::get_temperature_between,
    ),
    components(
        schemas(
            health::ReadinessResponse,
            stations::StationResponse,
            temperature::TemperatureStats,
            types::DatedValue,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "observations", description = "Precipitation and temperature observations"),
        (name = "stations", description = "Observation stations"),
    ),
    info(
        title = "Climate API",
        description = "Read-only precipitation and temperature observations",
        version = "0.1.0"
    )
)]
struct ApiDoc;

/// Abort requests running longer than `timeout` with 504 Gateway Timeout.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::GATEWAY_TIMEOUT, timeout)
}

pub fn build_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_seconds);

    // Static segments take priority over the date captures
    let api_routes = Router::new()
        .route("/precipitation", get(precipitation::get_precipitation))
        .route("/stations", get(stations::list_stations))
        .route("/tobs", get(tobs::get_most_active_tobs))
        .route("/{start}", get(temperature::get_temperature_since))
        .route("/{start}/{end}", get(temperature::get_temperature_between))
        .layer(RequestBodyLimitLayer::new(1024));

    let health_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/", get(index::index))
        .nest("/api/v1.0", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(request_timeout_layer(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
