// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Legacy JSON ("amino") converter table.
//!
//! Older wallet and signing tooling consumes a secondary, named-type JSON
//! representation. Each converter pairs a type URL with its legacy type name
//! and an explicit field-mapping table; for every type currently in this
//! crate the mapping is empty and the conversion is a pass-through, but the
//! table keeps genuinely divergent legacy types expressible without
//! special-casing the engine.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::core::{CodecError, Result};

/// One field rename between the canonical and the legacy mapping.
#[derive(Debug, Clone, Copy)]
pub struct FieldRename {
    /// Field name in the canonical (proto) JSON.
    pub proto: &'static str,
    /// Field name in the legacy JSON.
    pub amino: &'static str,
    /// Optional value transforms applied alongside the rename
    /// (canonical → legacy, legacy → canonical).
    pub transform: Option<(fn(&Value) -> Value, fn(&Value) -> Value)>,
}

/// Bidirectional converter between canonical JSON and the legacy mapping
/// for one message type.
#[derive(Debug, Clone)]
pub struct AminoConverter {
    /// Fully-qualified type URL of the canonical type.
    pub type_url: &'static str,
    /// Legacy wire-format name, e.g. `cosmos-sdk/QueryGrantsRequest`.
    pub amino_type: &'static str,
    /// Field mapping table; empty means the identity conversion.
    pub renames: &'static [FieldRename],
}

impl AminoConverter {
    /// Build an identity (pass-through) converter.
    pub fn passthrough(type_url: &'static str, amino_type: &'static str) -> Self {
        Self {
            type_url,
            amino_type,
            renames: &[],
        }
    }

    /// Convert a canonical JSON object to its legacy representation.
    pub fn to_amino(&self, message: &Value) -> Value {
        self.apply(message, |r| (r.proto, r.amino), |r| r.transform.map(|t| t.0))
    }

    /// Convert a legacy JSON object back to its canonical representation.
    pub fn from_amino(&self, message: &Value) -> Value {
        self.apply(message, |r| (r.amino, r.proto), |r| r.transform.map(|t| t.1))
    }

    fn apply(
        &self,
        message: &Value,
        names: impl Fn(&FieldRename) -> (&'static str, &'static str),
        transform: impl Fn(&FieldRename) -> Option<fn(&Value) -> Value>,
    ) -> Value {
        let Some(obj) = message.as_object() else {
            return message.clone();
        };
        let mut out = Map::with_capacity(obj.len());
        for (key, value) in obj {
            let rename = self.renames.iter().find(|r| names(r).0 == key.as_str());
            match rename {
                Some(r) => {
                    let converted = match transform(r) {
                        Some(f) => f(value),
                        None => value.clone(),
                    };
                    out.insert(names(r).1.to_string(), converted);
                }
                None => {
                    out.insert(key.clone(), value.clone());
                }
            }
        }
        Value::Object(out)
    }
}

/// Immutable map from type URL to legacy converter.
#[derive(Debug, Default)]
pub struct AminoRegistry {
    converters: HashMap<&'static str, AminoConverter>,
}

impl AminoRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a converter.
    pub fn register(&mut self, converter: AminoConverter) {
        self.converters.insert(converter.type_url, converter);
    }

    /// Look up a converter by exact type URL.
    pub fn get(&self, type_url: &str) -> Result<&AminoConverter> {
        self.converters
            .get(type_url)
            .ok_or_else(|| CodecError::type_not_found(type_url))
    }

    /// Check whether a type URL has a legacy converter.
    pub fn contains(&self, type_url: &str) -> bool {
        self.converters.contains_key(type_url)
    }

    /// Number of registered converters.
    pub fn count(&self) -> usize {
        self.converters.len()
    }
}

/// Global amino registry, populated once alongside the type registry.
static GLOBAL_AMINO: OnceLock<AminoRegistry> = OnceLock::new();

/// Get the process-wide legacy converter registry.
pub fn global_amino_registry() -> &'static AminoRegistry {
    GLOBAL_AMINO.get_or_init(|| {
        let mut registry = AminoRegistry::new();
        for converter in crate::types::amino_converters() {
            registry.register(converter);
        }
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passthrough_identity() {
        let converter = AminoConverter::passthrough("/x.Y", "x/Y");
        let msg = json!({"granter": "a", "grantee": "b"});
        assert_eq!(converter.to_amino(&msg), msg);
        assert_eq!(converter.from_amino(&msg), msg);
    }

    #[test]
    fn test_rename_table() {
        static RENAMES: [FieldRename; 1] = [FieldRename {
            proto: "msg_type_url",
            amino: "msg_type",
            transform: None,
        }];
        let converter = AminoConverter {
            type_url: "/x.Y",
            amino_type: "x/Y",
            renames: &RENAMES,
        };
        let msg = json!({"msg_type_url": "/z", "other": 1});
        let amino = converter.to_amino(&msg);
        assert_eq!(amino, json!({"msg_type": "/z", "other": 1}));
        assert_eq!(converter.from_amino(&amino), msg);
    }

    #[test]
    fn test_global_amino_registry() {
        let registry = global_amino_registry();
        let converter = registry
            .get("/cosmos.authz.v1beta1.QueryGrantsRequest")
            .unwrap();
        assert_eq!(converter.amino_type, "cosmos-sdk/QueryGrantsRequest");
        assert!(converter.renames.is_empty());
    }

    #[test]
    fn test_chain_mint_amino_names() {
        let registry = global_amino_registry();
        let converter = registry
            .get("/seiprotocol.seichain.mint.QueryMinterResponse")
            .unwrap();
        assert_eq!(converter.amino_type, "mint/QueryMinterResponse");
    }

    #[test]
    fn test_evm_types_have_no_amino() {
        let registry = global_amino_registry();
        assert!(!registry.contains("/seiprotocol.seichain.evm.Params"));
    }
}
