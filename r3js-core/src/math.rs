//! Matrix wrapper and the bridge from nalgebra types.

use nalgebra as na;

use crate::object::{Handle, ObjectFactory, Value};

/// A 4x4 transformation matrix owned by the foreign runtime.
#[derive(Clone)]
pub struct Matrix4 {
    handle: Handle,
}

impl Matrix4 {
    /// Constructs the foreign identity matrix.
    pub fn identity(factory: &dyn ObjectFactory) -> Self {
        Self {
            handle: factory.construct("Matrix4", &[]),
        }
    }

    /// Constructs a foreign matrix loaded from a nalgebra matrix.
    ///
    /// The foreign `set` operation takes its sixteen elements in row-major
    /// order.
    pub fn from_nalgebra(factory: &dyn ObjectFactory, m: &na::Matrix4<f64>) -> Self {
        let matrix = Self::identity(factory);
        let mut args = Vec::with_capacity(16);
        for row in 0..4 {
            for col in 0..4 {
                args.push(Value::Number(m[(row, col)]));
            }
        }
        matrix.handle.call("set", &args);
        matrix
    }

    /// Wraps an existing foreign matrix.
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
