use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::openapi::{
    schema::{AdditionalProperties, Schema, Type},
    ObjectBuilder, RefOr,
};

/// One observation keyed by its date.
///
/// Serializes as a single-key object, e.g. `{"2017-08-23": 0.45}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedValue {
    pub date: String,
    pub value: Option<f64>,
}

impl DatedValue {
    pub fn new(date: String, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

impl Serialize for DatedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.value)?;
        map.end()
    }
}

impl utoipa::PartialSchema for DatedValue {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::Object)
            .additional_properties(Some(AdditionalProperties::RefOr(
                ObjectBuilder::new()
                    .schema_type(Type::Number)
                    .description(Some("Observed value, null when not recorded"))
                    .into(),
            )))
            .description(Some("Single-key object mapping a YYYY-MM-DD date to its value"))
            .into()
    }
}

impl utoipa::ToSchema for DatedValue {}
