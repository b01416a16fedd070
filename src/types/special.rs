//! Module-specific attribute payloads.
//!
//! Each module kind owns one variant here. Most are unit variants: the
//! content format declares the kinds but gives them no extra fields yet.
//! Keeping them addressable means the loader dispatch stays exhaustive,
//! so a new kind cannot be added without deciding what its payload is.

use serde::Serialize;

use crate::types::ModuleKind;

/// Stability-augmentation gains for `AdvSASModule` parts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AdvancedStabilityParams {
    /// Integral gain (`Ki`).
    pub ki: f64,
    /// Proportional gain (`Kp`).
    pub kp: f64,
    /// Derivative gain (`Kd`).
    pub kd: f64,
}

/// The per-module payload attached to a parsed part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "module", content = "params")]
pub enum SpecialAttributes {
    AdvancedStability(AdvancedStabilityParams),
    FuelLine,
    FuelTank,
    LiquidEngine,
    CommandPod,
    Parachutes,
    RadialDecoupler,
    Rcs,
    RcsFuelTank,
    Sas,
    SolidRocket,
    Decoupler,
    Strut,
    StrutConnector,
    Winglet,
    ControlSurface,
}

impl SpecialAttributes {
    /// The module kind this payload belongs to.
    pub fn kind(&self) -> ModuleKind {
        match self {
            SpecialAttributes::AdvancedStability(_) => ModuleKind::AdvSas,
            SpecialAttributes::FuelLine => ModuleKind::FuelLine,
            SpecialAttributes::FuelTank => ModuleKind::FuelTank,
            SpecialAttributes::LiquidEngine => ModuleKind::LiquidEngine,
            SpecialAttributes::CommandPod => ModuleKind::CommandPod,
            SpecialAttributes::Parachutes => ModuleKind::Parachutes,
            SpecialAttributes::RadialDecoupler => ModuleKind::RadialDecoupler,
            SpecialAttributes::Rcs => ModuleKind::Rcs,
            SpecialAttributes::RcsFuelTank => ModuleKind::RcsFuelTank,
            SpecialAttributes::Sas => ModuleKind::Sas,
            SpecialAttributes::SolidRocket => ModuleKind::SolidRocket,
            SpecialAttributes::Decoupler => ModuleKind::Decoupler,
            SpecialAttributes::Strut => ModuleKind::Strut,
            SpecialAttributes::StrutConnector => ModuleKind::StrutConnector,
            SpecialAttributes::Winglet => ModuleKind::Winglet,
            SpecialAttributes::ControlSurface => ModuleKind::ControlSurface,
        }
    }
}
