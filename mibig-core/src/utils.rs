use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{MibigError, Result};
use crate::validation::{Validate, ValidationContext};

///
/// Conversion between a record type and its JSON tree.
///
/// `from_json_unchecked` only fails on structural problems (missing keys, wrong
/// types, unknown type tags). `from_json` also runs the full validation and fails
/// atomically with every issue found.
///
pub trait JsonEntity: Validate + Sized {
    fn from_json_unchecked(raw: &Value) -> Result<Self>;

    fn to_json(&self) -> Result<Value>;

    fn from_json(raw: &Value, ctx: &ValidationContext<'_>) -> Result<Self> {
        Ok(Self::from_json_unchecked(raw)?.validated(ctx)?)
    }
}

///
/// Decode a JSON tree with serde, reporting failures as schema errors on `entity`.
///
pub fn decode<T: DeserializeOwned>(raw: &Value, entity: &str) -> Result<T> {
    <T as Deserialize>::deserialize(raw).map_err(|e| MibigError::schema(entity, e.to_string()))
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

///
/// Read a JSON file into an untyped tree.
///
pub fn read_json_file(path: &Path) -> AnyResult<Value> {
    let contents = read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

///
/// Read a JSON file and construct a validated entity from it.
///
pub fn load_json_entity<T: JsonEntity>(path: &Path, ctx: &ValidationContext<'_>) -> AnyResult<T> {
    debug!("Loading {} at quality {}", path.display(), ctx.quality);
    let raw = read_json_file(path)?;
    T::from_json(&raw, ctx).with_context(|| format!("Invalid record in {}", path.display()))
}
