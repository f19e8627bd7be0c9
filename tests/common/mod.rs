//! Shared fixtures: an in-memory SQLite dataset behind the real router.
#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema, Set};
use tower::ServiceExt;

use climate_api::common::{self, AppState};
use climate_api::config::Config;
use climate_api::entity::{measurement, station};
use climate_api::routes::build_router;

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        // One connection, otherwise each pooled connection opens its own empty database
        "DB_MAX_CONNECTIONS" => Some("1".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Connect and create both tables from the entity definitions.
pub async fn empty_db() -> DatabaseConnection {
    let db = common::connect(&test_config()).await.expect("connect");
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    db.execute(backend.build(&schema.create_table_from_entity(station::Entity)))
        .await
        .expect("create station table");
    db.execute(backend.build(&schema.create_table_from_entity(measurement::Entity)))
        .await
        .expect("create measurement table");

    db
}

pub async fn seed_stations(db: &DatabaseConnection, codes: &[&str]) {
    let models = codes.iter().enumerate().map(|(i, code)| station::ActiveModel {
        id: Set(i32::try_from(i).unwrap() + 1),
        station: Set((*code).to_string()),
        name: Set(format!("{code} STATION, HI US")),
        latitude: Set(21.0 + i as f64 * 0.1),
        longitude: Set(-157.8),
        elevation: Set(3.0 + i as f64),
    });
    station::Entity::insert_many(models)
        .exec(db)
        .await
        .expect("insert stations");
}

/// Insert `(station, date, prcp, tobs)` rows in order, ids starting at 1.
pub async fn seed_measurements(db: &DatabaseConnection, rows: &[(&str, &str, Option<f64>, f64)]) {
    let models = rows
        .iter()
        .enumerate()
        .map(|(i, (code, date, prcp, tobs))| measurement::ActiveModel {
            id: Set(i32::try_from(i).unwrap() + 1),
            station: Set((*code).to_string()),
            date: Set((*date).to_string()),
            prcp: Set(*prcp),
            tobs: Set(*tobs),
        });
    measurement::Entity::insert_many(models)
        .exec(db)
        .await
        .expect("insert measurements");
}

pub fn app(db: DatabaseConnection) -> Router {
    build_router(AppState::new(db, test_config()))
}

pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get_raw(app, uri).await;
    let json = serde_json::from_slice(&body).expect("JSON body");
    (status, json)
}
