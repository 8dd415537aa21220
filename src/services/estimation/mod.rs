pub mod normalize;
pub mod payload;
pub mod selector;
pub mod types;

pub use normalize::normalize_estimation;
pub use payload::{decode_payloads, DecodedValue, FieldValue, PayloadValues, VPayload};
pub use selector::{select_codes_for_architecture, CodeSelector};
pub use types::{EstimationError, EstimationRecord, GasEstimate};
