use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

use super::AnimationSpec;

pub const ANIMATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationJsonContractV1 {
    pub schema_version: u32,
    pub animation: AnimationSpec,
}

impl AnimationSpec {
    pub fn to_json_contract_v1_pretty(&self) -> VizResult<String> {
        let payload = AnimationJsonContractV1 {
            schema_version: ANIMATION_JSON_SCHEMA_V1,
            animation: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            VizError::InvalidData(format!("failed to serialize animation contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> VizResult<Self> {
        if let Ok(animation) = serde_json::from_str::<AnimationSpec>(input) {
            return Ok(animation);
        }
        let payload: AnimationJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            VizError::InvalidData(format!("failed to parse animation json payload: {e}"))
        })?;
        if payload.schema_version != ANIMATION_JSON_SCHEMA_V1 {
            return Err(VizError::InvalidData(format!(
                "unsupported animation schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.animation)
    }
}
