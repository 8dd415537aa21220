use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::normalize::parse_numeric_str;
use super::types::EstimationError;
use crate::services::chains::Architecture;
use crate::services::schema::{describe_field_in, ValueType};

/// One typed value from a v2 oracle read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VPayload {
    pub typ: u32,
    pub value: String,
}

/// Raw v2 oracle read for a single block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadValues {
    pub height: U256,
    pub timestamp: U256,
    /// Architecture code of the chain the values describe
    pub systemid: u8,
    pub chainid: U256,
    pub payloads: Vec<VPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(U256),
    Address(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DecodedValue {
    Known {
        code: u32,
        name: &'static str,
        value: FieldValue,
    },
    /// Code missing from the schema, kept verbatim
    Unknown { code: u32, raw: String },
}

impl DecodedValue {
    pub fn code(&self) -> u32 {
        match self {
            DecodedValue::Known { code, .. } | DecodedValue::Unknown { code, .. } => *code,
        }
    }
}

fn decode_one(
    arch: Architecture,
    schema_version: u8,
    payload: &VPayload,
) -> Result<DecodedValue, EstimationError> {
    let Some(field) = describe_field_in(arch, schema_version, payload.typ) else {
        tracing::debug!(code = payload.typ, %arch, "Passing through unknown metric code");
        return Ok(DecodedValue::Unknown {
            code: payload.typ,
            raw: payload.value.clone(),
        });
    };

    let value = match field.value_type {
        ValueType::Number => parse_numeric_str(&payload.value).map(FieldValue::Number),
        ValueType::Address => payload
            .value
            .trim()
            .parse::<Address>()
            .ok()
            .map(FieldValue::Address),
    }
    .ok_or_else(|| {
        EstimationError::MalformedInput(format!(
            "value {:?} for `{}` ({}) is not a valid {:?}",
            payload.value, field.name, field.code, field.value_type
        ))
    })?;

    Ok(DecodedValue::Known {
        code: field.code,
        name: field.name,
        value,
    })
}

/// Decode every payload against the schema of the chain's architecture.
///
/// Unknown codes pass through undecoded; a known code with an unparseable
/// value fails the whole read.
pub fn decode_payloads(
    values: &PayloadValues,
    schema_version: u8,
) -> Result<Vec<DecodedValue>, EstimationError> {
    let arch = Architecture::from_code(values.systemid).unwrap_or_default();
    values
        .payloads
        .iter()
        .map(|payload| decode_one(arch, schema_version, payload))
        .collect()
}
