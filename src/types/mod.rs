//! Core data types for part definitions.

mod module;
mod part;
mod special;
mod vector;

pub use module::ModuleKind;
pub use part::{AttachNode, AttachRules, PartDefinition};
pub use special::{AdvancedStabilityParams, SpecialAttributes};
pub use vector::Vec3;
