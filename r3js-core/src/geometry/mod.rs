//! Geometry wrappers and their generated forwarding operations.
//!
//! Hand-written files hold the configuration structs and constructors; the
//! `gen_geometry_*` files are stamped by the `r3js-gen` tool and carry the
//! forwarding method set shared by every geometry kind.

mod circle;
mod ring;

mod gen_geometry_circle_geometry;
mod gen_geometry_ring_geometry;

pub use circle::{CircleGeometry, CircleGeometryConfig};
pub use ring::{RingGeometry, RingGeometryConfig};

use crate::object::{Handle, Value};

/// A foreign geometry of any kind, the base-class argument taken by
/// `merge` and `from_buffer_geometry`.
#[derive(Clone)]
pub struct Geometry {
    handle: Handle,
}

impl Geometry {
    /// Wraps an existing foreign geometry.
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
