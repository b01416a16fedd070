//! The parsed part definition record.

use serde::Serialize;

use crate::assets::MeshHandle;
use crate::types::{ModuleKind, SpecialAttributes, Vec3};

/// A named attachment point on a part.
///
/// The name is the key the node was declared under in the source text
/// (e.g. `"node0"`, `"bottomNode"`). Names are not required to be unique;
/// duplicates are kept in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachNode {
    pub name: String,
    pub position: Vec3,
    /// Orientation of the node, pointing away from the part.
    pub up: Vec3,
}

/// The five independent attachment flags of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttachRules {
    /// The part stacks onto other parts.
    pub stack: bool,
    /// The part attaches to surfaces.
    pub surface: bool,
    /// Other parts may stack onto this part.
    pub allow_stack: bool,
    /// Other parts may surface-attach to this part.
    pub allow_surface: bool,
    /// The part participates in attachment collision checks.
    pub allow_collision: bool,
}

impl AttachRules {
    /// Build rules from the five flags in wire order:
    /// stack, surface, allowStack, allowSurface, allowCollision.
    pub fn from_flags(flags: [bool; 5]) -> Self {
        Self {
            stack: flags[0],
            surface: flags[1],
            allow_stack: flags[2],
            allow_surface: flags[3],
            allow_collision: flags[4],
        }
    }

    /// The flags in wire order.
    pub fn to_flags(self) -> [bool; 5] {
        [
            self.stack,
            self.surface,
            self.allow_stack,
            self.allow_surface,
            self.allow_collision,
        ]
    }
}

/// A fully parsed part definition.
///
/// Every field a definition file does not set keeps its zero default;
/// only `module` is required. The record exclusively owns its nodes and
/// its special-attribute payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartDefinition {
    // identity
    pub name: String,
    pub module: ModuleKind,
    pub author: String,

    // asset
    pub mesh: Option<MeshHandle>,
    pub scale: f64,
    pub texture: String,
    pub spec_power: f64,
    pub rim_falloff: f64,
    pub alpha_cutoff: f64,
    pub icon_center: Vec3,

    // catalog
    pub cost: i32,
    pub category: i32,
    pub subcategory: i32,
    pub title: String,
    pub manufacturer: String,
    pub description: String,

    // attachment
    pub attach_rules: AttachRules,
    pub nodes: Vec<AttachNode>,

    // physical
    pub mass: f64,
    pub drag_model: String,
    pub maximum_drag: f64,
    pub minimum_drag: f64,
    pub angular_drag: f64,
    pub crash_tolerance: f64,
    pub max_temp: f64,

    pub special: SpecialAttributes,
}

impl PartDefinition {
    /// The display name: title when set, raw name otherwise.
    pub fn display_name(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }

    /// Find attach nodes by name. Duplicate names yield multiple hits.
    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttachNode> {
        self.nodes.iter().filter(move |node| node.name == name)
    }
}
