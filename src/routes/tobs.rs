use axum::{extract::State, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::common::AppState;
use crate::dates::{format_date, one_year_before};
use crate::entity::measurement;
use crate::error::AppResult;
use crate::routes::types::DatedValue;
use crate::routes::{latest_observation_date, most_active_station};

/// Temperature observations of the most active station
///
/// The station with the most measurements (ties go to the smallest station
/// code) is reported over the same trailing year as `/precipitation`,
/// measured from the dataset's most recent observation.
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = 200, description = "Temperature observations retrieved successfully", body = Vec<DatedValue>),
        (status = 404, description = "Dataset has no measurements"),
    ),
    tag = "observations"
)]
pub async fn get_most_active_tobs(State(state): State<AppState>) -> AppResult<Json<Vec<DatedValue>>> {
    let active = most_active_station(&state.db).await?;
    let latest = latest_observation_date(&state.db).await?;
    let cutoff = format_date(one_year_before(latest));

    let rows: Vec<(String, f64)> = measurement::Entity::find()
        .select_only()
        .column(measurement::Column::Date)
        .column(measurement::Column::Tobs)
        .filter(measurement::Column::Station.eq(active.station.as_str()))
        .filter(measurement::Column::Date.gte(cutoff.as_str()))
        .order_by_asc(measurement::Column::Date)
        .order_by_asc(measurement::Column::Id)
        .into_tuple()
        .all(&state.db)
        .await?;

    tracing::debug!(
        station = %active.station,
        observations = active.observations,
        cutoff = %cutoff,
        rows = rows.len(),
        "tobs_query"
    );

    let response = rows
        .into_iter()
        .map(|(date, tobs)| DatedValue::new(date, Some(tobs)))
        .collect();

    Ok(Json(response))
}
