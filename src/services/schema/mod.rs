pub mod fields;
pub mod quantiles;

pub use fields::{
    describe_field, describe_field_in, schema_table, MetricField, ValueType,
    DEFAULT_DISPLAY_CODES, DEFAULT_SCHEMA_VERSION,
};
pub use quantiles::{Quantile, UnknownQuantile};
