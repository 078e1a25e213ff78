//! Geometry forwarding-method generator
//!
//! Every geometry wrapper in `r3js-core` carries the same set of
//! forwarding methods, differing only in the type they are bound to. This
//! crate stamps that set from one fixed template into
//! `gen_geometry_<slug>.rs` source files, which are committed next to the
//! hand-written wrapper structs. A declarative registry drives batch
//! generation so every wrapper stays structurally identical.

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

/// Number of public forwarding methods stamped per geometry type.
pub const METHOD_COUNT: usize = 24;

const GEOMETRY_TEMPLATE: &str = r#"// Code generated by r3js-gen. DO NOT EDIT.
// Generated at: {{ timestamp }}
//
// Regenerate with:
// r3js-gen generate --geometry-type {{ type_name }} --geometry-slug {{ slug }}

use crate::math::Matrix4;
use crate::object::Value;
use crate::object3d::{Mesh, Object3D};

use super::{Geometry, {{ type_name }}};

impl {{ type_name }} {
    pub fn apply_matrix(&self, matrix: &Matrix4) {
        self.handle().call("applyMatrix", &[matrix.to_value()]);
    }

    pub fn rotate_x(&self) {
        self.handle().call("rotateX", &[]);
    }

    pub fn rotate_y(&self) {
        self.handle().call("rotateY", &[]);
    }

    pub fn rotate_z(&self) {
        self.handle().call("rotateZ", &[]);
    }

    pub fn translate(&self) {
        self.handle().call("translate", &[]);
    }

    pub fn scale(&self) {
        self.handle().call("scale", &[]);
    }

    pub fn look_at(&self) {
        self.handle().call("lookAt", &[]);
    }

    pub fn from_buffer_geometry(&self, geometry: &Geometry) {
        self.handle().call("fromBufferGeometry", &[geometry.to_value()]);
    }

    pub fn center(&self) {
        self.handle().call("center", &[]);
    }

    pub fn normalize(&self) -> &Self {
        self.handle().call("normalize", &[]);
        self
    }

    pub fn compute_face_normals(&self) {
        self.handle().call("computeFaceNormals", &[]);
    }

    pub fn compute_vertex_normals(&self, area_weighted: bool) {
        self.handle().call("computeVertexNormals", &[Value::Bool(area_weighted)]);
    }

    pub fn compute_flat_vertex_normals(&self) {
        self.handle().call("computeFlatVertexNormals", &[]);
    }

    pub fn compute_morph_normals(&self) {
        self.handle().call("computeMorphNormals", &[]);
    }

    pub fn compute_line_distances(&self) {
        self.handle().call("computeLineDistances", &[]);
    }

    pub fn compute_bounding_box(&self) {
        self.handle().call("computeBoundingBox", &[]);
    }

    pub fn compute_bounding_sphere(&self) {
        self.handle().call("computeBoundingSphere", &[]);
    }

    pub fn merge(&self, geometry: &Geometry, matrix: &Matrix4, material_index_offset: f64) {
        self.handle().call(
            "merge",
            &[
                geometry.to_value(),
                matrix.to_value(),
                Value::Number(material_index_offset),
            ],
        );
    }

    pub fn merge_mesh(&self, mesh: &Mesh) {
        self.handle().call("mergeMesh", &[mesh.to_value()]);
    }

    pub fn merge_vertices(&self) {
        self.handle().call("mergeVertices", &[]);
    }

    pub fn sort_faces_by_material_index(&self) {
        self.handle().call("sortFacesByMaterialIndex", &[]);
    }

    pub fn to_json(&self) -> Value {
        self.handle().call("toJSON", &[])
    }

    pub fn copy(&self, source: &Object3D, recursive: bool) -> Self {
        let copied = self
            .handle()
            .call("copy", &[source.to_value(), Value::Bool(recursive)]);
        Self::from_handle(copied.into_object())
    }

    pub fn dispose(&self) {
        self.handle().call("dispose", &[]);
    }
}
"#;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("missing required argument: --{name}")]
    MissingArgument { name: &'static str },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template rendering failed")]
    Template(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct TemplateData<'a> {
    type_name: &'a str,
    slug: &'a str,
    timestamp: String,
}

impl<'a> TemplateData<'a> {
    fn new(type_name: &'a str, slug: &'a str) -> Self {
        Self {
            type_name,
            slug,
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// One entry in the geometry registry.
pub struct GeometrySpec {
    /// Wrapper type the methods are bound to, e.g. `RingGeometry`.
    pub type_name: &'static str,
    /// Lowercase, underscore-separated file-name stem, e.g. `ring_geometry`.
    pub slug: &'static str,
    /// Extra template appended after the shared impl block, for kinds that
    /// need methods beyond the common set.
    pub extra_impl: Option<&'static str>,
}

/// Geometry kinds stamped by `all` and validated by `check`.
pub const GEOMETRIES: &[GeometrySpec] = &[
    GeometrySpec {
        type_name: "RingGeometry",
        slug: "ring_geometry",
        extra_impl: None,
    },
    GeometrySpec {
        type_name: "CircleGeometry",
        slug: "circle_geometry",
        extra_impl: None,
    },
];

/// File-name contract for generated wrappers: callers locate the output by
/// this name alone.
pub fn output_file_name(slug: &str) -> String {
    format!("gen_geometry_{}.rs", slug)
}

fn validate(name: &'static str, value: &str) -> Result<(), GenError> {
    if value.trim().is_empty() {
        return Err(GenError::MissingArgument { name });
    }
    Ok(())
}

/// Renders the forwarding methods for one geometry type.
pub fn render(type_name: &str, slug: &str) -> Result<String, GenError> {
    validate("geometry-type", type_name)?;
    validate("geometry-slug", slug)?;

    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    let data = TemplateData::new(type_name, slug);
    Ok(registry.render_template(GEOMETRY_TEMPLATE, &data)?)
}

/// Renders a registry entry, including its extra impl block if any.
pub fn render_spec(spec: &GeometrySpec) -> Result<String, GenError> {
    let mut rendered = render(spec.type_name, spec.slug)?;
    if let Some(extra) = spec.extra_impl {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        let data = TemplateData::new(spec.type_name, spec.slug);
        rendered.push('\n');
        rendered.push_str(&registry.render_template(extra, &data)?);
    }
    Ok(rendered)
}

/// Generates one wrapper file at `<out_dir>/gen_geometry_<slug>.rs`.
///
/// Inputs are validated before any filesystem interaction, so a rejected
/// invocation leaves no partial output. The file is written in one shot
/// and overwrites any previous version; a write failure is fatal to the
/// invocation, there is no retry.
pub fn generate(type_name: &str, slug: &str, out_dir: &Path) -> Result<PathBuf, GenError> {
    let contents = render(type_name, slug)?;
    let path = out_dir.join(output_file_name(slug));
    fs::write(&path, contents).map_err(|source| GenError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Stamps every registry entry into `out_dir`.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut paths = Vec::with_capacity(GEOMETRIES.len());
    for spec in GEOMETRIES {
        let contents = render_spec(spec)?;
        let path = out_dir.join(output_file_name(spec.slug));
        fs::write(&path, contents).map_err(|source| GenError::Io {
            path: path.clone(),
            source,
        })?;
        paths.push(path);
    }
    Ok(paths)
}

/// Checks the committed files in `dir` against a fresh render and returns
/// the out-of-sync paths. The timestamp header line is ignored; a missing
/// file counts as drift.
pub fn check(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut drifted = Vec::new();
    for spec in GEOMETRIES {
        let path = dir.join(output_file_name(spec.slug));
        let fresh = render_spec(spec)?;
        match fs::read_to_string(&path) {
            Ok(existing) if matches_ignoring_timestamp(&existing, &fresh) => {}
            _ => drifted.push(path),
        }
    }
    Ok(drifted)
}

fn matches_ignoring_timestamp(a: &str, b: &str) -> bool {
    fn significant(s: &str) -> Vec<&str> {
        s.lines()
            .filter(|line| !line.starts_with("// Generated at:"))
            .collect()
    }
    significant(a) == significant(b)
}
