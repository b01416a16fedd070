//! Node and overflow collection for keys the field table does not know.
//!
//! The node marker lives in the *value*, not the key: a value starting
//! with `node` declares an attachment node and the key becomes its name.
//! Any other unknown key with a non-empty value is staged for the
//! module-specific second phase; empty values are dropped.

use crate::error::{PartError, Result};
use crate::types::{AttachNode, Vec3};

/// A key/value pair deferred for module-specific interpretation.
///
/// Produced in encounter order during the scan, consumed exactly once by
/// the special-attribute loader, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionLine {
    pub key: String,
    pub value: String,
}

/// Route an unrecognized assignment to a node or the extension lines.
pub(crate) fn collect_unmatched(
    nodes: &mut Vec<AttachNode>,
    extras: &mut Vec<ExtensionLine>,
    key: &str,
    value: &str,
    line: u32,
) -> Result<()> {
    if value.starts_with("node") {
        nodes.push(parse_node(key, value, line)?);
    } else if !value.is_empty() {
        extras.push(ExtensionLine {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Decode a node value: the marker component, then exactly six floats
/// (position x/y/z, up-vector x/y/z).
fn parse_node(key: &str, value: &str, line: u32) -> Result<AttachNode> {
    let node_error = || PartError::Node {
        key: key.to_string(),
        value: value.to_string(),
        line,
    };

    // The first component is the `node` marker itself.
    let components: Vec<&str> = value.split(',').skip(1).map(str::trim).collect();
    if components.len() != 6 {
        return Err(node_error());
    }

    let mut parsed = [0.0f64; 6];
    for (slot, component) in parsed.iter_mut().zip(&components) {
        *slot = component.parse().map_err(|_| node_error())?;
    }

    Ok(AttachNode {
        name: key.to_string(),
        position: Vec3::new(parsed[0], parsed[1], parsed[2]),
        up: Vec3::new(parsed[3], parsed[4], parsed[5]),
    })
}
