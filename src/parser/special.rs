//! Module-specific attribute loading.
//!
//! Runs after the scan, once the module kind is known, over the staged
//! extension lines. The dispatch is a wildcard-free match on purpose: a
//! new module kind will not compile until it gets an arm here.

use crate::error::{PartError, Result};
use crate::parser::nodes::ExtensionLine;
use crate::types::{AdvancedStabilityParams, ModuleKind, SpecialAttributes};

/// Build the special-attribute payload for a module kind.
pub fn load_special(kind: ModuleKind, extras: &[ExtensionLine]) -> Result<SpecialAttributes> {
    match kind {
        ModuleKind::AdvSas => Ok(SpecialAttributes::AdvancedStability(load_stability(extras)?)),
        ModuleKind::FuelLine => Ok(SpecialAttributes::FuelLine),
        ModuleKind::FuelTank => Ok(SpecialAttributes::FuelTank),
        ModuleKind::LiquidEngine => Ok(SpecialAttributes::LiquidEngine),
        ModuleKind::CommandPod => Ok(SpecialAttributes::CommandPod),
        ModuleKind::Parachutes => Ok(SpecialAttributes::Parachutes),
        ModuleKind::RadialDecoupler => Ok(SpecialAttributes::RadialDecoupler),
        ModuleKind::Rcs => Ok(SpecialAttributes::Rcs),
        ModuleKind::RcsFuelTank => Ok(SpecialAttributes::RcsFuelTank),
        ModuleKind::Sas => Ok(SpecialAttributes::Sas),
        ModuleKind::SolidRocket => Ok(SpecialAttributes::SolidRocket),
        ModuleKind::Decoupler => Ok(SpecialAttributes::Decoupler),
        ModuleKind::Strut => Ok(SpecialAttributes::Strut),
        ModuleKind::StrutConnector => Ok(SpecialAttributes::StrutConnector),
        ModuleKind::Winglet => Ok(SpecialAttributes::Winglet),
        ModuleKind::ControlSurface => Ok(SpecialAttributes::ControlSurface),
    }
}

/// Scan extension lines for the `Ki`/`Kp`/`Kd` gains.
///
/// Unknown keys are ignored; gains the input never sets stay zero.
fn load_stability(extras: &[ExtensionLine]) -> Result<AdvancedStabilityParams> {
    let mut gains = AdvancedStabilityParams::default();

    for line in extras {
        match line.key.as_str() {
            "Ki" => gains.ki = parse_gain(&line.key, &line.value)?,
            "Kp" => gains.kp = parse_gain(&line.key, &line.value)?,
            "Kd" => gains.kd = parse_gain(&line.key, &line.value)?,
            _ => {}
        }
    }

    Ok(gains)
}

fn parse_gain(key: &str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|cause| PartError::ModuleField {
        key: key.to_string(),
        value: value.to_string(),
        cause,
    })
}
