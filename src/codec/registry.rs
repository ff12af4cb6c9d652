// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type registry for generic Any-typed decoding.
//!
//! Maps a fully-qualified type URL (`/<package>.<MessageName>`) to
//! type-erased codec adapters, so an Any-wrapped payload can be decoded
//! without the caller knowing the concrete type ahead of time. The registry
//! is built once at first use and never mutated afterwards; lookups are
//! exact string matches.
//!
//! # Example
//!
//! ```
//! use chaincodec::codec::global_registry;
//!
//! let value = global_registry()
//!     .decode("/cosmos.mint.v1beta1.QueryInflationResponse", &[0x0A, 0x02, 0x01, 0x02])
//!     .unwrap();
//! assert_eq!(value["inflation"], "AQI=");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;

use crate::core::{CodecError, Result};

use super::Message;

/// A type-erased codec handle for one message type.
///
/// The adapters bridge through the canonical JSON mapping: `decode` is
/// binary → JSON, `encode` is JSON → binary.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    /// Fully-qualified type URL, `/<package>.<MessageName>`.
    pub type_url: &'static str,
    decode: fn(&[u8]) -> Result<Value>,
    encode: fn(&Value) -> Result<Vec<u8>>,
}

impl RegistryEntry {
    /// Build the entry for a concrete message type.
    pub fn of<M: Message>() -> Self {
        Self {
            type_url: M::TYPE_URL,
            decode: |buf: &[u8]| Ok(M::decode(buf)?.to_json()),
            encode: |value: &Value| Ok(M::from_json(value)?.encode()),
        }
    }

    /// Decode a binary payload of this type to canonical JSON.
    pub fn decode(&self, buf: &[u8]) -> Result<Value> {
        (self.decode)(buf)
    }

    /// Encode canonical JSON of this type to binary.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        (self.encode)(value)
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("type_url", &self.type_url)
            .finish()
    }
}

/// Immutable map from type URL to codec handle.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Later registrations of the same URL replace earlier
    /// ones.
    pub fn register(&mut self, entry: RegistryEntry) {
        self.entries.insert(entry.type_url, entry);
    }

    /// Check whether a type URL is registered.
    pub fn contains(&self, type_url: &str) -> bool {
        self.entries.contains_key(type_url)
    }

    /// Look up an entry by exact type URL.
    pub fn get(&self, type_url: &str) -> Result<&RegistryEntry> {
        self.entries.get(type_url).ok_or_else(|| {
            tracing::debug!(type_url, "registry lookup miss");
            CodecError::type_not_found(type_url)
        })
    }

    /// Decode a binary payload for the given type URL to canonical JSON.
    pub fn decode(&self, type_url: &str, buf: &[u8]) -> Result<Value> {
        self.get(type_url)?.decode(buf)
    }

    /// Encode canonical JSON for the given type URL to binary.
    pub fn encode(&self, type_url: &str, value: &Value) -> Result<Vec<u8>> {
        self.get(type_url)?.encode(value)
    }

    /// All registered type URLs, sorted.
    pub fn type_urls(&self) -> Vec<&'static str> {
        let mut urls: Vec<_> = self.entries.keys().copied().collect();
        urls.sort_unstable();
        urls
    }

    /// Number of registered types.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Global type registry, populated once with every module message type.
static GLOBAL_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Get the process-wide type registry.
pub fn global_registry() -> &'static TypeRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let mut registry = TypeRegistry::new();
        for entry in crate::types::registry_entries() {
            registry.register(entry);
        }
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_registry_is_populated() {
        let registry = global_registry();
        assert!(registry.count() > 0);
        assert!(registry.contains("/cosmos.authz.v1beta1.QueryGrantsRequest"));
        assert!(registry.contains("/cosmos.slashing.v1beta1.ValidatorSigningInfo"));
        assert!(registry.contains("/seiprotocol.seichain.evm.Params"));
    }

    #[test]
    fn test_unregistered_type_url() {
        let registry = global_registry();
        let err = registry.get("/cosmos.gov.v1beta1.Proposal").unwrap_err();
        assert!(matches!(err, CodecError::TypeNotFound { .. }));
    }

    #[test]
    fn test_type_urls_sorted() {
        let urls = global_registry().type_urls();
        let mut sorted = urls.clone();
        sorted.sort_unstable();
        assert_eq!(urls, sorted);
    }

    #[test]
    fn test_register_replaces() {
        use crate::types::cosmos::authz::QueryGrantsRequest;

        let mut registry = TypeRegistry::new();
        registry.register(RegistryEntry::of::<QueryGrantsRequest>());
        registry.register(RegistryEntry::of::<QueryGrantsRequest>());
        assert_eq!(registry.count(), 1);
    }
}
