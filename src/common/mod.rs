mod database;
mod state;

pub use database::connect;
pub use state::AppState;
