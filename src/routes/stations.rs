use axum::{extract::State, Json};
use sea_orm::{EntityTrait, QueryOrder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::entity::station;
use crate::error::AppResult;

#[derive(Debug, Serialize, ToSchema)]
pub struct StationResponse {
    pub id: i32,
    /// Station code
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<station::Model> for StationResponse {
    fn from(s: station::Model) -> Self {
        Self {
            id: s.id,
            station: s.station,
            name: s.name,
            latitude: s.latitude,
            longitude: s.longitude,
            elevation: s.elevation,
        }
    }
}

/// List all stations
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = 200, description = "Stations retrieved successfully", body = Vec<StationResponse>),
    ),
    tag = "stations"
)]
pub async fn list_stations(State(state): State<AppState>) -> AppResult<Json<Vec<StationResponse>>> {
    let stations_list = station::Entity::find()
        .order_by_asc(station::Column::Id)
        .all(&state.db)
        .await?;

    let response: Vec<StationResponse> = stations_list.into_iter().map(Into::into).collect();

    Ok(Json(response))
}
