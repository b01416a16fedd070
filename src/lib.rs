//! partcfg - part definition parser and validator
//!
//! A library for decoding plain-text part definition files (game add-on
//! content) into typed records, validating whole directories of them,
//! and writing them back out.

pub mod assets;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;
pub mod validation;

pub use assets::{DeferredMeshSource, FsMeshSource, MeshHandle, MeshSource};
pub use discovery::{discover, discover_paths, DiscoveryResult, LoadOptions, Manifest, ScanResult};
pub use error::{PartError, Result};
pub use parser::{encode_part, parse_part, parse_part_stream, parse_part_with, ParseOptions};
pub use registry::{PartRegistry, RegistryBuilder};
pub use types::{
    AdvancedStabilityParams, AttachNode, AttachRules, ModuleKind, PartDefinition,
    SpecialAttributes, Vec3,
};
pub use validation::{validate_registry, Diagnostic, Severity, ValidationResult};
