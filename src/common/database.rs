use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

use crate::config::Config;

/// Open the connection pool for the observation dataset.
///
/// The returned handle is cloned into request state; call
/// [`DatabaseConnection::close`] on it once the server has stopped.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(config.db_connect_timeout_seconds))
        .sqlx_logging(false);

    Database::connect(options).await
}
