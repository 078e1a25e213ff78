// Code generated by r3js-gen. DO NOT EDIT.
// Generated at: 2026-08-05 09:41:17 UTC
//
// Regenerate with:
// r3js-gen generate --geometry-type CircleGeometry --geometry-slug circle_geometry

use crate::math::Matrix4;
use crate::object::Value;
use crate::object3d::{Mesh, Object3D};

use super::{Geometry, CircleGeometry};

impl CircleGeometry {
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
