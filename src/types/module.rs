//! Module kinds - the behavioral categories a part can declare.
//!
//! The `module` field of a part definition names one of a closed set of
//! module kinds. The set is closed on purpose: the special-attribute
//! loader matches on it exhaustively, so an unknown name in the input is
//! a parse failure rather than a default.

use std::fmt;

use serde::Serialize;

/// The behavioral category of a part.
///
/// Wire names are case-sensitive and match the content format exactly
/// (e.g. `AdvSASModule`, `RCSFuelTank`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModuleKind {
    #[serde(rename = "AdvSASModule")]
    AdvSas,
    FuelLine,
    FuelTank,
    LiquidEngine,
    CommandPod,
    Parachutes,
    RadialDecoupler,
    #[serde(rename = "RCSModule")]
    Rcs,
    #[serde(rename = "RCSFuelTank")]
    RcsFuelTank,
    #[serde(rename = "SASModule")]
    Sas,
    SolidRocket,
    Decoupler,
    Strut,
    StrutConnector,
    Winglet,
    ControlSurface,
}

impl ModuleKind {
    /// Every module kind, in declaration order.
    pub const ALL: [ModuleKind; 16] = [
        ModuleKind::AdvSas,
        ModuleKind::FuelLine,
        ModuleKind::FuelTank,
        ModuleKind::LiquidEngine,
        ModuleKind::CommandPod,
        ModuleKind::Parachutes,
        ModuleKind::RadialDecoupler,
        ModuleKind::Rcs,
        ModuleKind::RcsFuelTank,
        ModuleKind::Sas,
        ModuleKind::SolidRocket,
        ModuleKind::Decoupler,
        ModuleKind::Strut,
        ModuleKind::StrutConnector,
        ModuleKind::Winglet,
        ModuleKind::ControlSurface,
    ];

    /// Parse a wire name into a module kind.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// The wire name of this kind, as it appears in definition files.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::AdvSas => "AdvSASModule",
            ModuleKind::FuelLine => "FuelLine",
            ModuleKind::FuelTank => "FuelTank",
            ModuleKind::LiquidEngine => "LiquidEngine",
            ModuleKind::CommandPod => "CommandPod",
            ModuleKind::Parachutes => "Parachutes",
            ModuleKind::RadialDecoupler => "RadialDecoupler",
            ModuleKind::Rcs => "RCSModule",
            ModuleKind::RcsFuelTank => "RCSFuelTank",
            ModuleKind::Sas => "SASModule",
            ModuleKind::SolidRocket => "SolidRocket",
            ModuleKind::Decoupler => "Decoupler",
            ModuleKind::Strut => "Strut",
            ModuleKind::StrutConnector => "StrutConnector",
            ModuleKind::Winglet => "Winglet",
            ModuleKind::ControlSurface => "ControlSurface",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
