//! The circle geometry kind: a flat disc.

use std::f64::consts::PI;

use crate::object::{Handle, ObjectFactory, Value};

/// Construction parameters for [`CircleGeometry`], with the same
/// sentinel-zero defaulting scheme as the ring kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircleGeometryConfig {
    pub radius: f64,
    pub segments: f64,
    pub theta_start: f64,
    pub theta_length: f64,
}

impl CircleGeometryConfig {
    /// Applies the default and clamping rules, in source order.
    pub fn normalize(&mut self) {
        if self.radius == 0.0 {
            self.radius = 1.0;
        }
        if self.segments < 3.0 {
            self.segments = 3.0;
        }
        if self.theta_length == 0.0 {
            self.theta_length = 2.0 * PI;
        }
    }
}

/// The two-dimensional circle primitive of the wrapped library.
#[derive(Clone)]
pub struct CircleGeometry {
    handle: Handle,
}

impl CircleGeometry {
    /// Normalizes `config` in place, then constructs the foreign circle
    /// geometry from its four parameters, forwarded positionally.
    pub fn new(factory: &dyn ObjectFactory, config: &mut CircleGeometryConfig) -> Self {
        config.normalize();
        let handle = factory.construct(
            "CircleGeometry",
            &[
                Value::Number(config.radius),
                Value::Number(config.segments),
                Value::Number(config.theta_start),
                Value::Number(config.theta_length),
            ],
        );
        Self { handle }
    }

    /// Wraps an existing foreign circle geometry.
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Borrows the underlying foreign handle.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    // Live properties of the foreign object.

    pub fn radius(&self) -> f64 {
        self.handle.get("radius").as_f64()
    }

    pub fn set_radius(&self, value: f64) {
        self.handle.set("radius", Value::Number(value));
    }

    pub fn segments(&self) -> f64 {
        self.handle.get("segments").as_f64()
    }

    pub fn set_segments(&self, value: f64) {
        self.handle.set("segments", Value::Number(value));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeFactory, FakeObject};

    #[test]
    fn test_normalize_defaults_all_zero() {
        let mut config = CircleGeometryConfig::default();
        config.normalize();
        assert_eq!(
            config,
            CircleGeometryConfig {
                radius: 1.0,
                segments: 3.0,
                theta_start: 0.0,
                theta_length: 2.0 * PI,
            }
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_valid_config() {
        let valid = CircleGeometryConfig {
            radius: 2.0,
            segments: 16.0,
            theta_start: 0.5,
            theta_length: 3.0,
        };
        let mut config = valid;
        config.normalize();
        assert_eq!(config, valid);
    }

    #[test]
    fn test_normalize_clamps_segments() {
        let mut config = CircleGeometryConfig {
            radius: 1.0,
            segments: 2.0,
            theta_start: 0.0,
            theta_length: 1.0,
        };
        config.normalize();
        assert_eq!(config.segments, 3.0);
    }

    #[test]
    fn test_new_forwards_normalized_params_in_order() {
        let factory = FakeFactory::new();
        let mut config = CircleGeometryConfig {
            segments: 12.0,
            ..Default::default()
        };
        let _circle = CircleGeometry::new(&factory, &mut config);

        let constructed = factory.constructed();
        assert_eq!(constructed.len(), 1);
        let (class, args) = &constructed[0];
        assert_eq!(class, "CircleGeometry");
        assert_eq!(
            args,
            &[
                Value::Number(1.0),
                Value::Number(12.0),
                Value::Number(0.0),
                Value::Number(2.0 * PI),
            ]
        );
    }

    #[test]
    fn test_generated_methods_forward() {
        let circle = CircleGeometry::from_handle(FakeObject::new("CircleGeometry"));
        circle.center();
        circle.compute_bounding_box();
        let calls = FakeObject::of(circle.handle()).calls();
        let names: Vec<&str> = calls.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["center", "computeBoundingBox"]);
    }
}
