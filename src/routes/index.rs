/// Plain-text listing of the query routes
pub const ROUTE_LISTING: &str = "Available Routes:
/api/v1.0/precipitation
/api/v1.0/stations
/api/v1.0/tobs
/api/v1.0/<start>
/api/v1.0/<start>/<end>
";

/// List all available API routes.
pub async fn index() -> &'static str {
    ROUTE_LISTING
}
