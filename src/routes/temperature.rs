use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::dates::{format_date, DateRange};
use crate::entity::measurement;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureStats {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
}

#[derive(Debug, FromQueryResult)]
struct TemperatureRow {
    min_temp: Option<f64>,
    max_temp: Option<f64>,
    avg_temp: Option<f64>,
    observations: i64,
}

/// Aggregate `tobs` over all measurements inside `range`.
pub async fn temperature_stats(
    db: &DatabaseConnection,
    range: &DateRange,
) -> AppResult<TemperatureStats> {
    let mut query = measurement::Entity::find()
        .select_only()
        .column_as(measurement::Column::Tobs.min(), "min_temp")
        .column_as(measurement::Column::Tobs.max(), "max_temp")
        .column_as(
            SimpleExpr::from(Func::avg(Expr::col(measurement::Column::Tobs))),
            "avg_temp",
        )
        .column_as(measurement::Column::Id.count(), "observations")
        .filter(measurement::Column::Date.gte(format_date(range.start)));

    if let Some(end) = range.end {
        query = query.filter(measurement::Column::Date.lte(format_date(end)));
    }

    let row = query
        .into_model::<TemperatureRow>()
        .one(db)
        .await?
        .ok_or_else(|| AppError::Internal("Aggregate query returned no row".to_string()))?;

    tracing::debug!(
        start = %range.start,
        end = ?range.end,
        observations = row.observations,
        "temperature_query"
    );

    match (row.min_temp, row.max_temp, row.avg_temp) {
        (Some(min_temp), Some(max_temp), Some(avg_temp)) if row.observations > 0 => {
            Ok(TemperatureStats {
                min_temp,
                max_temp,
                avg_temp,
            })
        }
        _ => Err(AppError::NotFound(match range.end {
            Some(end) => format!(
                "No measurements between {} and {}",
                format_date(range.start),
                format_date(end)
            ),
            None => format!("No measurements on or after {}", format_date(range.start)),
        })),
    }
}

/// Temperature statistics from a start date
///
/// Minimum, maximum and average temperature over every measurement dated on
/// or after `start`.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Inclusive start date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Statistics computed successfully", body = Vec<TemperatureStats>),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No measurements in range"),
    ),
    tag = "observations"
)]
pub async fn get_temperature_since(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> AppResult<Json<Vec<TemperatureStats>>> {
    let range = DateRange::parse(&start, None)?;
    let stats = temperature_stats(&state.db, &range).await?;
    Ok(Json(vec![stats]))
}

/// Temperature statistics for a date range
///
/// Minimum, maximum and average temperature over every measurement dated
/// between `start` and `end`, both inclusive.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Inclusive start date, YYYY-MM-DD"),
        ("end" = String, Path, description = "Inclusive end date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Statistics computed successfully", body = Vec<TemperatureStats>),
        (status = 400, description = "Malformed date or start after end"),
        (status = 404, description = "No measurements in range"),
    ),
    tag = "observations"
)]
pub async fn get_temperature_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> AppResult<Json<Vec<TemperatureStats>>> {
    let range = DateRange::parse(&start, Some(end.as_str()))?;
    let stats = temperature_stats(&state.db, &range).await?;
    Ok(Json(vec![stats]))
}
