use serde_json::Value;
use crate::error::{AppError, Result};

/// Strictly parses a model reply as JSON. No fence stripping, no repair,
/// no schema check: whatever shape the model produced is passed through.
pub fn decode(reply: &str) -> Result<Value> {
    serde_json::from_str(reply).map_err(|e| AppError::DecodeError(e.to_string()))
}
