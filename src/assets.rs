//! Mesh asset collaborator.
//!
//! The parser does not understand mesh files. When a definition carries a
//! `mesh = <reference>` line it hands the raw reference to a `MeshSource`
//! and stores whatever handle comes back. Load failures propagate through
//! the parse unchanged.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{PartError, Result};

/// An opaque handle to a mesh asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshHandle {
    /// The raw reference string from the definition file.
    pub reference: String,
    /// Resolved filesystem path, when a filesystem source produced it.
    pub path: Option<PathBuf>,
}

impl MeshHandle {
    /// A handle that records the reference without resolving it.
    pub fn deferred(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            path: None,
        }
    }
}

/// Capability to turn a raw mesh reference into a handle.
pub trait MeshSource {
    fn load(&self, reference: &str) -> Result<MeshHandle>;
}

/// Mesh source that never touches storage.
///
/// Used for pure parses and encoder round-trips: the reference is kept
/// verbatim and resolution is somebody else's problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredMeshSource;

impl MeshSource for DeferredMeshSource {
    fn load(&self, reference: &str) -> Result<MeshHandle> {
        Ok(MeshHandle::deferred(reference))
    }
}

/// Mesh source that resolves references under a root directory.
#[derive(Debug, Clone)]
pub struct FsMeshSource {
    root: PathBuf,
}

impl FsMeshSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MeshSource for FsMeshSource {
    fn load(&self, reference: &str) -> Result<MeshHandle> {
        let path = self.root.join(reference);

        if !path.is_file() {
            return Err(PartError::MeshLoad {
                reference: reference.to_string(),
                message: format!("no such file under {}", self.root.display()),
            });
        }

        Ok(MeshHandle {
            reference: reference.to_string(),
            path: Some(path),
        })
    }
}
