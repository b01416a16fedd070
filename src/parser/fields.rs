//! The field coercion table.
//!
//! Maps each known key to a typed conversion and a slot on the draft.
//! Unknown keys are handed back to the caller for node/extension
//! handling.

use crate::assets::MeshSource;
use crate::error::{CoercionCause, PartError, Result};
use crate::parser::part::{ParseOptions, PartDraft};
use crate::types::{AttachRules, ModuleKind, Vec3};

/// Outcome of offering a key/value pair to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// The key was recognized and its slot updated.
    Known,
    /// Not a generic field; belongs to the node/overflow collector.
    Unknown,
}

/// Coerce one assignment into the draft.
///
/// Recognized keys either succeed or abort the parse with an error
/// naming the field, the raw value, and the line.
pub(crate) fn apply_field(
    draft: &mut PartDraft,
    key: &str,
    value: &str,
    line: u32,
    meshes: &dyn MeshSource,
    options: &ParseOptions,
) -> Result<Applied> {
    match key {
        // identity
        "name" => draft.name = value.to_string(),
        "module" => draft.module = Some(parse_module(value, line)?),
        "author" => draft.author = value.to_string(),

        // asset
        "mesh" => draft.mesh = Some(meshes.load(value)?),
        "scale" => draft.scale = parse_float("scale", value, line)?,
        "texture" => draft.texture = value.to_string(),
        "specPower" => draft.spec_power = parse_float("specPower", value, line)?,
        "rimFalloff" => draft.rim_falloff = parse_float("rimFalloff", value, line)?,
        "alphaCutoff" => draft.alpha_cutoff = parse_float("alphaCutoff", value, line)?,
        "iconCenter" => draft.icon_center = parse_vec3("iconCenter", value, line)?,

        // catalog
        "cost" => draft.cost = parse_int("cost", value, line)?,
        "category" => draft.category = parse_int("category", value, line)?,
        "subcategory" => draft.subcategory = parse_int("subcategory", value, line)?,
        "title" => draft.title = value.to_string(),
        "manufacturer" => draft.manufacturer = value.to_string(),
        "description" => draft.description = value.to_string(),

        // attachment
        "attachRules" => draft.attach_rules = parse_attach_rules(value, line, options)?,

        // physical
        "mass" => draft.mass = parse_float("mass", value, line)?,
        "dragModelType" => draft.drag_model = value.to_string(),
        "maximum_drag" => draft.maximum_drag = parse_float("maximum_drag", value, line)?,
        "minimum_drag" => draft.minimum_drag = parse_float("minimum_drag", value, line)?,
        "angularDrag" => draft.angular_drag = parse_float("angularDrag", value, line)?,
        "crashTolerance" => draft.crash_tolerance = parse_float("crashTolerance", value, line)?,
        "maxTemp" => draft.max_temp = parse_float("maxTemp", value, line)?,

        _ => return Ok(Applied::Unknown),
    }

    Ok(Applied::Known)
}

fn parse_module(value: &str, line: u32) -> Result<ModuleKind> {
    ModuleKind::parse(value).ok_or_else(|| PartError::UnknownModule {
        value: value.to_string(),
        line,
    })
}

fn parse_float(field: &'static str, value: &str, line: u32) -> Result<f64> {
    value.trim().parse().map_err(|e| PartError::Field {
        field,
        value: value.to_string(),
        line,
        cause: CoercionCause::Float(e),
    })
}

fn parse_int(field: &'static str, value: &str, line: u32) -> Result<i32> {
    value.trim().parse().map_err(|e| PartError::Field {
        field,
        value: value.to_string(),
        line,
        cause: CoercionCause::Int(e),
    })
}

/// Decode a comma-separated 3-float vector.
fn parse_vec3(field: &'static str, value: &str, line: u32) -> Result<Vec3> {
    let components: Vec<&str> = value.split(',').map(str::trim).collect();

    if components.len() != 3 {
        return Err(PartError::Field {
            field,
            value: value.to_string(),
            line,
            cause: CoercionCause::Components {
                expected: 3,
                found: components.len(),
            },
        });
    }

    let mut parsed = [0.0f64; 3];
    for (slot, component) in parsed.iter_mut().zip(&components) {
        *slot = component.parse().map_err(|e| PartError::Field {
            field,
            value: value.to_string(),
            line,
            cause: CoercionCause::Float(e),
        })?;
    }

    Ok(Vec3::new(parsed[0], parsed[1], parsed[2]))
}

/// Decode the five attachment flags.
///
/// `"1"` is true; by default anything else, garbage included, is false.
/// With `strict_flags` only `"1"` and `"0"` are accepted.
fn parse_attach_rules(value: &str, line: u32, options: &ParseOptions) -> Result<AttachRules> {
    let components: Vec<&str> = value.split(',').map(str::trim).collect();

    if components.len() != 5 {
        return Err(PartError::AttachRules {
            value: value.to_string(),
            line,
        });
    }

    let mut flags = [false; 5];
    for (flag, component) in flags.iter_mut().zip(&components) {
        if options.strict_flags && *component != "1" && *component != "0" {
            return Err(PartError::AttachRules {
                value: value.to_string(),
                line,
            });
        }
        *flag = *component == "1";
    }

    Ok(AttachRules::from_flags(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DeferredMeshSource;

    fn apply(key: &str, value: &str) -> Result<(PartDraft, Applied)> {
        let mut draft = PartDraft::default();
        let applied = apply_field(
            &mut draft,
            key,
            value,
            1,
            &DeferredMeshSource,
            &ParseOptions::default(),
        )?;
        Ok((draft, applied))
    }

    #[test]
    fn test_string_fields_assign_verbatim() {
        let (draft, applied) = apply("manufacturer", "Probodobodyne Inc").unwrap();
        assert_eq!(applied, Applied::Known);
        assert_eq!(draft.manufacturer, "Probodobodyne Inc");
    }

    #[test]
    fn test_unknown_key_is_handed_back() {
        let (draft, applied) = apply("fuel", "100").unwrap();
        assert_eq!(applied, Applied::Unknown);
        assert_eq!(draft.mass, 0.0);
    }

    #[test]
    fn test_float_field() {
        let (draft, _) = apply("crashTolerance", "12.5").unwrap();
        assert_eq!(draft.crash_tolerance, 12.5);
    }

    #[test]
    fn test_int_field_rejects_decimal() {
        let err = apply("cost", "12.5").unwrap_err();
        assert!(matches!(
            err,
            PartError::Field {
                field: "cost",
                cause: CoercionCause::Int(_),
                ..
            }
        ));
    }

    #[test]
    fn test_mesh_is_delegated() {
        let (draft, _) = apply("mesh", "model.dae").unwrap();
        assert_eq!(draft.mesh.unwrap().reference, "model.dae");
    }

    #[test]
    fn test_icon_center_decodes_three_floats() {
        let (draft, _) = apply("iconCenter", "0, 1.5, -2").unwrap();
        assert_eq!(draft.icon_center, Vec3::new(0.0, 1.5, -2.0));
    }

    #[test]
    fn test_icon_center_wrong_arity() {
        let err = apply("iconCenter", "0, 1").unwrap_err();
        assert!(matches!(
            err,
            PartError::Field {
                field: "iconCenter",
                cause: CoercionCause::Components {
                    expected: 3,
                    found: 2
                },
                ..
            }
        ));
    }

    #[test]
    fn test_attach_rules_wrong_arity() {
        let err = apply("attachRules", "1,1,1,1").unwrap_err();
        assert!(matches!(err, PartError::AttachRules { line: 1, .. }));
    }

    #[test]
    fn test_attach_rules_garbage_component_is_false_by_default() {
        let (draft, _) = apply("attachRules", "1,yes,1,maybe,1").unwrap();
        assert_eq!(
            draft.attach_rules.to_flags(),
            [true, false, true, false, true]
        );
    }

    #[test]
    fn test_attach_rules_garbage_component_rejected_when_strict() {
        let mut draft = PartDraft::default();
        let err = apply_field(
            &mut draft,
            "attachRules",
            "1,yes,1,0,1",
            3,
            &DeferredMeshSource,
            &ParseOptions::strict(),
        )
        .unwrap_err();

        assert!(matches!(err, PartError::AttachRules { line: 3, .. }));
    }
}
