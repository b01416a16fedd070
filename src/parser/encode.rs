//! Encode a part definition back to the key/value text format.
//!
//! Fields still at their zero defaults are left out so a sparse
//! definition stays sparse. Comment lines and empty-valued extension
//! lines are not retained by the parser, so they do not reappear here;
//! everything else survives a parse/encode/parse round trip.

use std::fmt::Write;

use crate::types::{PartDefinition, SpecialAttributes};

/// Render a part definition as definition-file text, including the
/// terminating blank line.
pub fn encode_part(part: &PartDefinition) -> String {
    let mut out = String::new();

    let mut field = |key: &str, value: &str| {
        let _ = writeln!(out, "{} = {}", key, value);
    };

    // identity
    if !part.name.is_empty() {
        field("name", &part.name);
    }
    field("module", part.module.as_str());
    if !part.author.is_empty() {
        field("author", &part.author);
    }

    // asset
    if let Some(mesh) = &part.mesh {
        field("mesh", &mesh.reference);
    }
    if part.scale != 0.0 {
        field("scale", &part.scale.to_string());
    }
    if !part.texture.is_empty() {
        field("texture", &part.texture);
    }
    if part.spec_power != 0.0 {
        field("specPower", &part.spec_power.to_string());
    }
    if part.rim_falloff != 0.0 {
        field("rimFalloff", &part.rim_falloff.to_string());
    }
    if part.alpha_cutoff != 0.0 {
        field("alphaCutoff", &part.alpha_cutoff.to_string());
    }
    if part.icon_center != crate::types::Vec3::ZERO {
        field("iconCenter", &part.icon_center.to_string());
    }

    // catalog
    if part.cost != 0 {
        field("cost", &part.cost.to_string());
    }
    if part.category != 0 {
        field("category", &part.category.to_string());
    }
    if part.subcategory != 0 {
        field("subcategory", &part.subcategory.to_string());
    }
    if !part.title.is_empty() {
        field("title", &part.title);
    }
    if !part.manufacturer.is_empty() {
        field("manufacturer", &part.manufacturer);
    }
    if !part.description.is_empty() {
        field("description", &part.description);
    }

    // attachment
    if part.attach_rules != Default::default() {
        let flags: Vec<&str> = part
            .attach_rules
            .to_flags()
            .iter()
            .map(|&on| if on { "1" } else { "0" })
            .collect();
        field("attachRules", &flags.join(","));
    }

    // physical
    if part.mass != 0.0 {
        field("mass", &part.mass.to_string());
    }
    if !part.drag_model.is_empty() {
        field("dragModelType", &part.drag_model);
    }
    if part.maximum_drag != 0.0 {
        field("maximum_drag", &part.maximum_drag.to_string());
    }
    if part.minimum_drag != 0.0 {
        field("minimum_drag", &part.minimum_drag.to_string());
    }
    if part.angular_drag != 0.0 {
        field("angularDrag", &part.angular_drag.to_string());
    }
    if part.crash_tolerance != 0.0 {
        field("crashTolerance", &part.crash_tolerance.to_string());
    }
    if part.max_temp != 0.0 {
        field("maxTemp", &part.max_temp.to_string());
    }

    // nodes
    for node in &part.nodes {
        field(
            &node.name,
            &format!("node, {}, {}", node.position, node.up),
        );
    }

    // module-specific payload
    if let SpecialAttributes::AdvancedStability(gains) = &part.special {
        field("Ki", &gains.ki.to_string());
        field("Kp", &gains.kp.to_string());
        field("Kd", &gains.kd.to_string());
    }

    out.push('\n');
    out
}
