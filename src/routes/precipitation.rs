use axum::{extract::State, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::common::AppState;
use crate::dates::{format_date, one_year_before};
use crate::entity::measurement;
use crate::error::AppResult;
use crate::routes::latest_observation_date;
use crate::routes::types::DatedValue;

/// Precipitation over the trailing year
///
/// Returns every measurement dated on or after one year before the most
/// recent observation in the dataset, ordered by date.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = 200, description = "Precipitation retrieved successfully", body = Vec<DatedValue>),
        (status = 404, description = "Dataset has no measurements"),
    ),
    tag = "observations"
)]
pub async fn get_precipitation(State(state): State<AppState>) -> AppResult<Json<Vec<DatedValue>>> {
    let latest = latest_observation_date(&state.db).await?;
    let cutoff = format_date(one_year_before(latest));

    let rows: Vec<(String, Option<f64>)> = measurement::Entity::find()
        .select_only()
        .column(measurement::Column::Date)
        .column(measurement::Column::Prcp)
        .filter(measurement::Column::Date.gte(cutoff.as_str()))
        .order_by_asc(measurement::Column::Date)
        .order_by_asc(measurement::Column::Id)
        .into_tuple()
        .all(&state.db)
        .await?;

    tracing::debug!(cutoff = %cutoff, rows = rows.len(), "precipitation_query");

    let response = rows
        .into_iter()
        .map(|(date, prcp)| DatedValue::new(date, prcp))
        .collect();

    Ok(Json(response))
}
