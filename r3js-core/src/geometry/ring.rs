//! The ring geometry kind: a flat annulus.

use std::f64::consts::PI;

use crate::object::{Handle, ObjectFactory, Value};

/// Construction parameters for [`RingGeometry`].
///
/// Zero is the unset sentinel for the radius and angle-length fields; the
/// constructor normalizes the config in place before forwarding it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingGeometryConfig {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub theta_segments: f64,
    pub phi_segments: f64,
    pub theta_start: f64,
    pub theta_length: f64,
}

impl RingGeometryConfig {
    /// Applies the default and clamping rules, in source order.
    ///
    /// Afterwards `theta_segments >= 3`, `phi_segments >= 1` and
    /// `theta_length != 0` hold; an already-normalized config is left
    /// unchanged.
    pub fn normalize(&mut self) {
        // A zero inner radius rewrites theta_length, not inner_radius.
        // Longstanding quirk, kept as observed; see
        // test_ring_defaults_all_zero.
        if self.inner_radius == 0.0 {
            self.theta_length = 0.5;
        }
        if self.outer_radius == 0.0 {
            self.outer_radius = 1.0;
        }
        if self.theta_segments < 3.0 {
            self.theta_segments = 3.0;
        }
        if self.phi_segments < 1.0 {
            self.phi_segments = 1.0;
        }
        if self.theta_length == 0.0 {
            self.theta_length = 2.0 * PI;
        }
    }
}

/// The two-dimensional ring primitive of the wrapped library, dimensioned
/// by inner/outer radius and the theta/phi segment counts.
#[derive(Clone)]
pub struct RingGeometry {
    handle: Handle,
}

impl RingGeometry {
    /// Normalizes `config` in place, then constructs the foreign ring
    /// geometry from its six parameters, forwarded positionally.
    pub fn new(factory: &dyn ObjectFactory, config: &mut RingGeometryConfig) -> Self {
        config.normalize();
        let handle = factory.construct(
            "RingGeometry",
            &[
                Value::Number(config.inner_radius),
                Value::Number(config.outer_radius),
                Value::Number(config.theta_segments),
                Value::Number(config.phi_segments),
                Value::Number(config.theta_start),
                Value::Number(config.theta_length),
            ],
        );
        Self { handle }
    }

    /// Wraps an existing foreign ring geometry.
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Borrows the underlying foreign handle.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    // Live properties of the foreign object.

    pub fn inner_radius(&self) -> f64 {
        self.handle.get("innerRadius").as_f64()
    }

    pub fn set_inner_radius(&self, value: f64) {
        self.handle.set("innerRadius", Value::Number(value));
    }

    pub fn outer_radius(&self) -> f64 {
        self.handle.get("outerRadius").as_f64()
    }

    pub fn set_outer_radius(&self, value: f64) {
        self.handle.set("outerRadius", Value::Number(value));
    }

    pub fn theta_segments(&self) -> f64 {
        self.handle.get("thetaSegments").as_f64()
    }

    pub fn set_theta_segments(&self, value: f64) {
        self.handle.set("thetaSegments", Value::Number(value));
    }

    pub fn phi_segments(&self) -> f64 {
        self.handle.get("phiSegments").as_f64()
    }

    pub fn set_phi_segments(&self, value: f64) {
        self.handle.set("phiSegments", Value::Number(value));
    }

    pub fn theta_start(&self) -> f64 {
        self.handle.get("thetaStart").as_f64()
    }

    pub fn set_theta_start(&self, value: f64) {
        self.handle.set("thetaStart", Value::Number(value));
    }

    pub fn theta_length(&self) -> f64 {
        self.handle.get("thetaLength").as_f64()
    }

    pub fn set_theta_length(&self, value: f64) {
        self.handle.set("thetaLength", Value::Number(value));
    }
}
