//! Scene-object handle wrappers used as arguments by geometry operations.
//!
//! These are thin carriers: the scene graph itself is owned by the wrapped
//! library and is not modeled here.

use crate::object::{Handle, Value};

/// A foreign scene-graph object, the `copy` source argument.
#[derive(Clone)]
pub struct Object3D {
    handle: Handle,
}

impl Object3D {
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Borrows the underlying foreign handle.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Object(self.handle.clone())
    }
}

/// A foreign mesh, the `mergeMesh` operand.
#[derive(Clone)]
pub struct Mesh {
    handle: Handle,
}

impl Mesh {
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Borrows the underlying foreign handle.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Object(self.handle.clone())
    }
}
