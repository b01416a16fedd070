//! Validation checks for the part registry.
//!
//! Each check takes an `&PartRegistry` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::registry::PartRegistry;

use super::{Diagnostic, ValidationResult};

/// Run every check and merge the diagnostics.
pub fn validate_registry(registry: &PartRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_duplicate_names(registry));
    result.merge(check_catalog_text(registry));
    result.merge(check_physical(registry));
    result.merge(check_attachability(registry));

    result
}

/// Two definitions sharing a name means one silently shadows the other.
pub fn check_duplicate_names(registry: &PartRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for name in registry.duplicate_names() {
        if seen.insert(name) {
            result.push(
                Diagnostic::error(
                    "partcfg::validate::duplicate-part",
                    format!("Part name '{}' is defined more than once", name),
                )
                .with_help("Rename one of the definitions; lookups keep only the last one"),
            );
        }
    }

    result
}

/// Parts without catalog text render as blanks in an editor list.
pub fn check_catalog_text(registry: &PartRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for part in registry.parts() {
        if part.title.is_empty() {
            result.push(Diagnostic::warning(
                "partcfg::validate::no-title",
                format!("Part '{}' has no title", part.name),
            ));
        }
        if part.description.is_empty() {
            result.push(Diagnostic::warning(
                "partcfg::validate::no-description",
                format!("Part '{}' has no description", part.name),
            ));
        }
    }

    result
}

/// Physics fields the simulation will choke on.
pub fn check_physical(registry: &PartRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for part in registry.parts() {
        if part.mass <= 0.0 {
            result.push(
                Diagnostic::warning(
                    "partcfg::validate::no-mass",
                    format!("Part '{}' has no mass", part.name),
                )
                .with_help("Set `mass = <tonnes>`"),
            );
        }

        if part.maximum_drag < part.minimum_drag {
            result.push(Diagnostic::warning(
                "partcfg::validate::drag-bounds",
                format!(
                    "Part '{}' has maximum_drag {} below minimum_drag {}",
                    part.name, part.maximum_drag, part.minimum_drag
                ),
            ));
        }
    }

    result
}

/// A part with no nodes and no surface attachment can never join a craft.
pub fn check_attachability(registry: &PartRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for part in registry.parts() {
        if part.nodes.is_empty() && !part.attach_rules.surface {
            result.push(
                Diagnostic::warning(
                    "partcfg::validate::unattachable",
                    format!(
                        "Part '{}' has no attach nodes and does not surface-attach",
                        part.name
                    ),
                )
                .with_help("Add a `nodeN = node, ...` line or enable surface attachment"),
            );
        }

        let mut names: HashSet<&str> = HashSet::new();
        for node in &part.nodes {
            if !names.insert(node.name.as_str()) {
                result.push(Diagnostic::warning(
                    "partcfg::validate::duplicate-node",
                    format!(
                        "Part '{}' declares attach node '{}' more than once",
                        part.name, node.name
                    ),
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_part;
    use crate::registry::RegistryBuilder;

    fn registry_of(sources: &[&str]) -> PartRegistry {
        let mut builder = RegistryBuilder::new();
        for source in sources {
            builder.add_part(parse_part(source).unwrap());
        }
        builder.build()
    }

    #[test]
    fn test_clean_part_passes() {
        let registry = registry_of(&[
            "name = pod\nmodule = CommandPod\ntitle = Pod\ndescription = A pod.\nmass = 0.8\nnode0 = node, 0,0,-1, 0,0,-1\n\n",
        ]);

        assert!(validate_registry(&registry).is_ok());
    }

    #[test]
    fn test_missing_catalog_text_warns() {
        let registry = registry_of(&[
            "name = tank\nmodule = FuelTank\nmass = 1\nattachRules = 0,1,0,0,0\n\n",
        ]);

        let result = validate_registry(&registry);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 2); // no title, no description
    }

    #[test]
    fn test_zero_mass_warns() {
        let registry = registry_of(&[
            "name = ghost\nmodule = Strut\ntitle = T\ndescription = D\nattachRules = 0,1,0,0,0\n\n",
        ]);

        let result = check_physical(&registry);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_inverted_drag_bounds_warn() {
        let registry = registry_of(&[
            "name = brick\nmodule = FuelTank\nmass = 1\nmaximum_drag = 0.1\nminimum_drag = 0.3\n\n",
        ]);

        let result = check_physical(&registry);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_unattachable_part_warns() {
        let registry =
            registry_of(&["name = orphan\nmodule = FuelTank\nmass = 1\n\n"]);

        let result = check_attachability(&registry);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_surface_attachment_counts_as_attachable() {
        let registry = registry_of(&[
            "name = radial\nmodule = RadialDecoupler\nmass = 0.4\nattachRules = 0,1,0,0,0\n\n",
        ]);

        assert!(check_attachability(&registry).is_ok());
    }

    #[test]
    fn test_duplicate_node_names_warn() {
        let registry = registry_of(&[
            "name = twin\nmodule = FuelTank\nmass = 1\nnode0 = node, 0,0,1, 0,0,1\nnode0 = node, 0,0,-1, 0,0,-1\n\n",
        ]);

        let result = check_attachability(&registry);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_duplicate_part_names_error() {
        let registry = registry_of(&[
            "name = strut\nmodule = Strut\nmass = 0.1\nattachRules = 0,1,0,0,0\n\n",
            "name = strut\nmodule = StrutConnector\nmass = 0.1\nattachRules = 0,1,0,0,0\n\n",
        ]);

        let result = check_duplicate_names(&registry);
        assert!(result.has_errors());
        assert_eq!(result.error_count(), 1);
    }
}
