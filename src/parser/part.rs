//! The part definition scan loop.

use std::io::BufRead;

use crate::assets::{DeferredMeshSource, MeshHandle, MeshSource};
use crate::error::{PartError, Result};
use crate::parser::fields::{apply_field, Applied};
use crate::parser::line::{classify, Line};
use crate::parser::nodes::{collect_unmatched, ExtensionLine};
use crate::parser::special::load_special;
use crate::types::{AttachNode, AttachRules, ModuleKind, PartDefinition, Vec3};

/// Policy for lines that match neither the assignment grammar nor a
/// comment or terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLines {
    /// Ignore them silently. Compatible with the original format's
    /// tooling, which dropped such lines without a trace.
    #[default]
    Skip,
    /// Report them as `MalformedLine` errors.
    Error,
}

/// Lenience knobs for a parse.
///
/// The defaults reproduce the permissive behavior existing content
/// relies on; both knobs tighten it explicitly rather than by accident.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub malformed_lines: MalformedLines,
    /// Reject attachment-rule components other than `"1"` and `"0"`.
    /// When off, anything that is not `"1"` decodes to false.
    pub strict_flags: bool,
}

impl ParseOptions {
    /// Options with both lenience knobs tightened.
    pub fn strict() -> Self {
        Self {
            malformed_lines: MalformedLines::Error,
            strict_flags: true,
        }
    }
}

/// The in-progress record the scan mutates field by field.
///
/// Everything defaults to its zero value; `module` stays `None` until
/// the input assigns it, because a part has no default module.
#[derive(Debug, Default)]
pub(crate) struct PartDraft {
    pub(crate) name: String,
    pub(crate) module: Option<ModuleKind>,
    pub(crate) author: String,

    pub(crate) mesh: Option<MeshHandle>,
    pub(crate) scale: f64,
    pub(crate) texture: String,
    pub(crate) spec_power: f64,
    pub(crate) rim_falloff: f64,
    pub(crate) alpha_cutoff: f64,
    pub(crate) icon_center: Vec3,

    pub(crate) cost: i32,
    pub(crate) category: i32,
    pub(crate) subcategory: i32,
    pub(crate) title: String,
    pub(crate) manufacturer: String,
    pub(crate) description: String,

    pub(crate) attach_rules: AttachRules,
    pub(crate) nodes: Vec<AttachNode>,

    pub(crate) mass: f64,
    pub(crate) drag_model: String,
    pub(crate) maximum_drag: f64,
    pub(crate) minimum_drag: f64,
    pub(crate) angular_drag: f64,
    pub(crate) crash_tolerance: f64,
    pub(crate) max_temp: f64,
}

/// One definition scan: classifies lines, fills the draft, stages
/// extension lines for the module-specific second phase.
struct Scan<'a> {
    draft: PartDraft,
    extras: Vec<ExtensionLine>,
    options: &'a ParseOptions,
    meshes: &'a dyn MeshSource,
}

impl<'a> Scan<'a> {
    fn new(options: &'a ParseOptions, meshes: &'a dyn MeshSource) -> Self {
        Self {
            draft: PartDraft::default(),
            extras: Vec::new(),
            options,
            meshes,
        }
    }

    /// Consume one line. Returns false once the terminator is reached.
    fn line(&mut self, raw: &str, number: u32) -> Result<bool> {
        match classify(raw) {
            Line::Terminator => return Ok(false),
            Line::Comment => {}
            Line::Malformed => match self.options.malformed_lines {
                MalformedLines::Skip => {}
                MalformedLines::Error => {
                    return Err(PartError::MalformedLine {
                        line: number,
                        found: raw.to_string(),
                    })
                }
            },
            Line::Assignment { key, value } => {
                match apply_field(&mut self.draft, key, value, number, self.meshes, self.options)? {
                    Applied::Known => {}
                    Applied::Unknown => collect_unmatched(
                        &mut self.draft.nodes,
                        &mut self.extras,
                        key,
                        value,
                        number,
                    )?,
                }
            }
        }

        Ok(true)
    }

    /// Resolve the module and run the second phase over staged lines.
    fn finish(self) -> Result<PartDefinition> {
        let draft = self.draft;
        let module = draft.module.ok_or(PartError::MissingModule)?;
        let special = load_special(module, &self.extras)?;

        Ok(PartDefinition {
            name: draft.name,
            module,
            author: draft.author,
            mesh: draft.mesh,
            scale: draft.scale,
            texture: draft.texture,
            spec_power: draft.spec_power,
            rim_falloff: draft.rim_falloff,
            alpha_cutoff: draft.alpha_cutoff,
            icon_center: draft.icon_center,
            cost: draft.cost,
            category: draft.category,
            subcategory: draft.subcategory,
            title: draft.title,
            manufacturer: draft.manufacturer,
            description: draft.description,
            attach_rules: draft.attach_rules,
            nodes: draft.nodes,
            mass: draft.mass,
            drag_model: draft.drag_model,
            maximum_drag: draft.maximum_drag,
            minimum_drag: draft.minimum_drag,
            angular_drag: draft.angular_drag,
            crash_tolerance: draft.crash_tolerance,
            max_temp: draft.max_temp,
            special,
        })
    }
}

/// Parse one part definition with default options and a deferred mesh
/// source (the mesh reference is recorded, not resolved).
pub fn parse_part(source: &str) -> Result<PartDefinition> {
    parse_part_with(source, &ParseOptions::default(), &DeferredMeshSource)
}

/// Parse one part definition from a string.
///
/// The scan stops at the first exactly-empty line; the remainder of the
/// string is ignored. The first error aborts the parse - no partial
/// definition is returned.
pub fn parse_part_with(
    source: &str,
    options: &ParseOptions,
    meshes: &dyn MeshSource,
) -> Result<PartDefinition> {
    let mut scan = Scan::new(options, meshes);

    let mut number = 0u32;
    for raw in source.lines() {
        number += 1;
        if !scan.line(raw, number)? {
            break;
        }
    }

    scan.finish()
}

/// Parse one part definition from a buffered reader.
///
/// Consumes the stream only through the terminating empty line, leaving
/// the rest for the caller.
pub fn parse_part_stream<R: BufRead>(
    mut reader: R,
    options: &ParseOptions,
    meshes: &dyn MeshSource,
) -> Result<PartDefinition> {
    let mut scan = Scan::new(options, meshes);

    let mut buf = String::new();
    let mut number = 0u32;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        number += 1;

        let raw = buf.strip_suffix('\n').unwrap_or(&buf);
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if !scan.line(raw, number)? {
            break;
        }
    }

    scan.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpecialAttributes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_part() {
        let part = parse_part("name = Mk1 Pod\nmodule = CommandPod\nmass = 0.8\n\n").unwrap();

        assert_eq!(part.name, "Mk1 Pod");
        assert_eq!(part.module, ModuleKind::CommandPod);
        assert_eq!(part.mass, 0.8);

        // Everything else stays at its zero default.
        assert_eq!(part.author, "");
        assert_eq!(part.scale, 0.0);
        assert_eq!(part.cost, 0);
        assert_eq!(part.icon_center, Vec3::ZERO);
        assert!(part.nodes.is_empty());
        assert!(part.mesh.is_none());
        assert_eq!(part.special, SpecialAttributes::CommandPod);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "name = Strut\nmodule = Strut\nmass = 0.05\ncost = 42\n";
        assert_eq!(parse_part(source).unwrap(), parse_part(source).unwrap());
    }

    #[test]
    fn test_empty_input_fails_on_missing_module() {
        assert!(matches!(parse_part("\n"), Err(PartError::MissingModule)));
        assert!(matches!(parse_part(""), Err(PartError::MissingModule)));
    }

    #[test]
    fn test_terminator_stops_the_scan() {
        // The garbage after the empty line is never looked at.
        let part = parse_part("module = FuelTank\n\nscale = not-a-number\n").unwrap();
        assert_eq!(part.module, ModuleKind::FuelTank);
        assert_eq!(part.scale, 0.0);
    }

    #[test]
    fn test_comments_are_skipped() {
        let part = parse_part("// a tank\nmodule = FuelTank\n// mass = 9\nmass = 1.25\n").unwrap();
        assert_eq!(part.mass, 1.25);
    }

    #[test]
    fn test_malformed_lines_skipped_by_default() {
        let part = parse_part("module = FuelTank\nthis is not an assignment\nmass = 1\n").unwrap();
        assert_eq!(part.mass, 1.0);
    }

    #[test]
    fn test_malformed_lines_error_when_strict() {
        let err = parse_part_with(
            "module = FuelTank\nthis is not an assignment\n",
            &ParseOptions::strict(),
            &DeferredMeshSource,
        )
        .unwrap_err();

        assert!(
            matches!(err, PartError::MalformedLine { line: 2, ref found } if found == "this is not an assignment")
        );
    }

    #[test]
    fn test_unknown_module_fails() {
        let err = parse_part("module = BogusThruster\n\n").unwrap_err();
        assert!(
            matches!(err, PartError::UnknownModule { ref value, line: 1 } if value == "BogusThruster")
        );
    }

    #[test]
    fn test_bad_float_reports_field_and_line() {
        let err = parse_part("module = FuelTank\nscale = abc\n\n").unwrap_err();
        assert!(matches!(
            err,
            PartError::Field {
                field: "scale",
                ref value,
                line: 2,
                ..
            } if value == "abc"
        ));
    }

    #[test]
    fn test_stability_gains_loaded_from_extension_lines() {
        let part =
            parse_part("module = AdvSASModule\nKi = 0.5\nKp = 0.2\nKd = 0.1\n\n").unwrap();

        assert_eq!(
            part.special,
            SpecialAttributes::AdvancedStability(crate::types::AdvancedStabilityParams {
                ki: 0.5,
                kp: 0.2,
                kd: 0.1,
            })
        );
    }

    #[test]
    fn test_attach_rules_scenario() {
        let part = parse_part("module = FuelTank\nattachRules = 1,0,1,1,0\n\n").unwrap();

        assert!(part.attach_rules.stack);
        assert!(!part.attach_rules.surface);
        assert!(part.attach_rules.allow_stack);
        assert!(part.attach_rules.allow_surface);
        assert!(!part.attach_rules.allow_collision);
    }

    #[test]
    fn test_node_from_sniffed_value() {
        let part =
            parse_part("module = FuelTank\nbottomNode = node, 0,0,-1, 0,0,-1\n\n").unwrap();

        assert_eq!(part.nodes.len(), 1);
        let node = &part.nodes[0];
        assert_eq!(node.name, "bottomNode");
        assert_eq!(node.position, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(node.up, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_duplicate_nodes_are_both_kept() {
        let part = parse_part(
            "module = FuelTank\nnode0 = node, 0,0,1, 0,0,1\nnode0 = node, 0,0,-1, 0,0,-1\n\n",
        )
        .unwrap();

        assert_eq!(part.nodes.len(), 2);
        assert_eq!(part.nodes[0].name, "node0");
        assert_eq!(part.nodes[1].name, "node0");
        assert_eq!(part.nodes[0].position, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(part.nodes[1].position, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_full_definition() {
        let source = "\
// Rockomax tank
name = X200-32
module = FuelTank
author = dev
scale = 0.1
texture = tank_diffuse
specPower = 0.4
rimFalloff = 2
alphaCutoff = 0.5
iconCenter = 0, 1, 0
cost = 1250
category = 0
subcategory = 0
title = Rockomax Jumbo
manufacturer = Rockomax
description = A big tank.
attachRules = 1,1,1,1,0
mass = 18
dragModelType = default
maximum_drag = 0.2
minimum_drag = 0.3
angularDrag = 2
crashTolerance = 6
maxTemp = 2900
node0 = node, 0, 7.5, 0, 0, 1, 0
node1 = node, 0, -7.5, 0, 0, -1, 0

";
        let part = parse_part(source).unwrap();

        assert_eq!(part.name, "X200-32");
        assert_eq!(part.title, "Rockomax Jumbo");
        assert_eq!(part.scale, 0.1);
        assert_eq!(part.spec_power, 0.4);
        assert_eq!(part.icon_center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(part.cost, 1250);
        assert_eq!(part.mass, 18.0);
        assert_eq!(part.drag_model, "default");
        assert_eq!(part.angular_drag, 2.0);
        assert_eq!(part.max_temp, 2900.0);
        assert_eq!(part.nodes.len(), 2);
        assert_eq!(part.special, SpecialAttributes::FuelTank);
    }

    #[test]
    fn test_stream_leaves_the_rest_unread() {
        let mut cursor = std::io::Cursor::new(
            b"name = A\nmodule = Strut\n\nname = B\nmodule = Winglet\n\n".to_vec(),
        );

        let first =
            parse_part_stream(&mut cursor, &ParseOptions::default(), &DeferredMeshSource).unwrap();
        assert_eq!(first.name, "A");

        let second =
            parse_part_stream(&mut cursor, &ParseOptions::default(), &DeferredMeshSource).unwrap();
        assert_eq!(second.name, "B");
        assert_eq!(second.module, ModuleKind::Winglet);
    }

    #[test]
    fn test_stream_handles_crlf() {
        let cursor = std::io::Cursor::new(b"module = Decoupler\r\nmass = 0.4\r\n\r\n".to_vec());
        let part =
            parse_part_stream(cursor, &ParseOptions::default(), &DeferredMeshSource).unwrap();

        assert_eq!(part.module, ModuleKind::Decoupler);
        assert_eq!(part.mass, 0.4);
    }
}
