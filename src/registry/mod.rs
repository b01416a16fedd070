//! Part registry.
//!
//! Centralized storage for parsed part definitions, keyed by part name.
//! The registry is immutable after construction - use `RegistryBuilder`
//! to create one.
//!
//! # Example
//!
//! ```ignore
//! use partcfg::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! builder.add_part(part);
//!
//! let registry = builder.build();
//! let pod = registry.get("mk1pod");
//! ```

use std::collections::HashMap;

use crate::types::{ModuleKind, PartDefinition};

/// Centralized storage for parsed parts.
#[derive(Debug)]
pub struct PartRegistry {
    parts: HashMap<String, PartDefinition>,
    /// Names that were inserted more than once. The later insert wins;
    /// the collisions are kept so validation can report them.
    duplicates: Vec<String>,
}

impl PartRegistry {
    /// Get a part by name.
    pub fn get(&self, name: &str) -> Option<&PartDefinition> {
        self.parts.get(name)
    }

    /// All part names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|s| s.as_str())
    }

    /// All parts.
    pub fn parts(&self) -> impl Iterator<Item = &PartDefinition> {
        self.parts.values()
    }

    /// Parts declaring the given module kind.
    pub fn of_kind(&self, kind: ModuleKind) -> impl Iterator<Item = &PartDefinition> {
        self.parts.values().filter(move |part| part.module == kind)
    }

    /// Names that collided during construction.
    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicates
    }

    /// Total number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the registry holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Builder for constructing a `PartRegistry`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    parts: HashMap<String, PartDefinition>,
    duplicates: Vec<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part. A part whose name is already taken replaces the
    /// earlier one and the collision is recorded.
    pub fn add_part(&mut self, part: PartDefinition) -> &mut Self {
        if self.parts.contains_key(&part.name) {
            self.duplicates.push(part.name.clone());
        }
        self.parts.insert(part.name.clone(), part);
        self
    }

    /// Add multiple parts.
    pub fn add_parts(&mut self, parts: impl IntoIterator<Item = PartDefinition>) -> &mut Self {
        for part in parts {
            self.add_part(part);
        }
        self
    }

    /// Finalize the registry.
    pub fn build(self) -> PartRegistry {
        PartRegistry {
            parts: self.parts,
            duplicates: self.duplicates,
        }
    }
}
