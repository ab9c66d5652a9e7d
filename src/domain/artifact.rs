//! Contract artifacts and the ABI documents projected from them.
//!
//! The `abi` value is passed through untouched; nothing here checks that it
//! is a well-formed interface description.

use crate::domain::json_format::to_ascii_pretty_string;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const ABI_KEY: &str = "abi";
pub const OUTPUT_EXTENSION: &str = "json";

/// A compiler build artifact, parsed but otherwise uninterpreted.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub path: PathBuf,
    pub json: Value,
}

impl ContractArtifact {
    /// Parse the full contents of an artifact file.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(contents)
            .with_context(|| format!("Failed to parse artifact {}", path.display()))?;
        Ok(Self {
            name: contract_name(path),
            path: path.to_path_buf(),
            json,
        })
    }

    /// The raw `abi` value. Only a JSON object can carry one.
    pub fn abi(&self) -> Option<&Value> {
        self.json.as_object().and_then(|obj| obj.get(ABI_KEY))
    }

    pub fn into_abi_document(self) -> Option<AbiDocument> {
        let Self { name, json, .. } = self;
        match json {
            Value::Object(mut obj) => obj.remove(ABI_KEY).map(|value| AbiDocument {
                contract: name,
                value,
            }),
            _ => None,
        }
    }
}

/// The extracted ABI, ready to be written as `<contract>.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct AbiDocument {
    pub contract: String,
    pub value: Value,
}

impl AbiDocument {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.contract, OUTPUT_EXTENSION)
    }

    /// Two-space indented, ASCII-only, input key order and number text preserved.
    pub fn to_pretty_json(&self) -> Result<String> {
        to_ascii_pretty_string(&self.value)
            .with_context(|| format!("Failed to serialize ABI for {}", self.contract))
    }
}

/// File name with only the final extension removed (`Token.dbg.json` -> `Token.dbg`).
pub fn contract_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
