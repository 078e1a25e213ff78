//! r3js Core Library - Typed wrappers over a foreign 3D object model
//!
//! This library exposes the wrapped 3D engine's geometries, matrices and
//! meshes as typed Rust structs. Every wrapper owns only an opaque handle
//! to an externally-owned object and forwards operations to it through the
//! narrow traits in [`object`]; adapters (see the `r3js-web` crate) decide
//! how those calls actually reach the foreign runtime.

pub mod geometry;
pub mod math;
pub mod object;
pub mod object3d;

#[cfg(test)]
pub(crate) mod fake;

// Re-export commonly used types
pub use geometry::{CircleGeometry, CircleGeometryConfig, Geometry, RingGeometry, RingGeometryConfig};
pub use math::Matrix4;
pub use object::{ForeignObject, Handle, ObjectFactory, Value};
pub use object3d::{Mesh, Object3D};
