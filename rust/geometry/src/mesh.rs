// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexed polygon mesh.

use nalgebra::Point3;

/// Indexed polygon mesh extracted from a CityJSON document.
///
/// Owns a point array (a verbatim copy of the document's vertices, same
/// indexing), a list of variable-arity polygons referencing that array by
/// index, and two parallel per-polygon attribute columns: the owning city
/// object's type and id. The attribute columns always have exactly
/// `polygon_count()` entries.
///
/// A mesh is immutable once published by the builder; the query surface
/// returns read-only views or fresh copies. Zero points and zero polygons
/// are distinct legal empty states: a document without vertices produces a
/// fully empty mesh, while a document whose geometry yields no usable face
/// keeps its points alongside empty polygon columns.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh {
    points: Vec<Point3<f64>>,
    polygons: Vec<Vec<u32>>,
    object_type: Vec<String>,
    object_id: Vec<String>,
}

impl PolyMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh over a fixed point array, with no polygons yet
    pub(crate) fn with_points(points: Vec<Point3<f64>>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Append one polygon and its attribute slots.
    ///
    /// Builder-only hook; the columns stay parallel because this is the
    /// single place they grow.
    pub(crate) fn push_polygon(&mut self, indices: Vec<u32>, object_type: &str, object_id: &str) {
        self.polygons.push(indices);
        self.object_type.push(object_type.to_string());
        self.object_id.push(object_id.to_string());
    }

    /// Point array (read-only view)
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Polygons as vertex-index lists (read-only view)
    #[inline]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// Number of polygons
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Per-polygon owning object type, parallel to [`polygons`](Self::polygons)
    #[inline]
    pub fn object_types(&self) -> &[String] {
        &self.object_type
    }

    /// Per-polygon owning object id, parallel to [`polygons`](Self::polygons)
    #[inline]
    pub fn object_ids(&self) -> &[String] {
        &self.object_id
    }

    /// Check if the mesh has neither points nor polygons
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.polygons.is_empty()
    }

    /// Axis-aligned bounding box (min, max) of the point array
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.points.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        for point in &self.points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        (min, max)
    }

    /// Project the mesh down to polygons of one city object type.
    ///
    /// The match is exact and case-sensitive, relative polygon order is
    /// preserved, and the point array is retained as-is (not compacted), so
    /// polygon indices stay valid without remapping.
    ///
    /// Returns `None` both when the mesh carries no attribute columns (no
    /// polygons were ever produced) and when no polygon matches; callers
    /// cannot distinguish the two through this single sentinel.
    pub fn filter_by_type(&self, object_type: &str) -> Option<PolyMesh> {
        if self.polygons.is_empty() {
            return None;
        }

        let selected: Vec<usize> = self
            .object_type
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.as_str() == object_type)
            .map(|(i, _)| i)
            .collect();

        if selected.is_empty() {
            return None;
        }

        Some(PolyMesh {
            points: self.points.clone(),
            polygons: selected.iter().map(|&i| self.polygons[i].clone()).collect(),
            object_type: selected
                .iter()
                .map(|&i| self.object_type[i].clone())
                .collect(),
            object_id: selected
                .iter()
                .map(|&i| self.object_id[i].clone())
                .collect(),
        })
    }

    /// Placeholder for semantic-surface colouring.
    ///
    /// Currently a structural copy of the full mesh; `None` when the mesh
    /// holds no polygons. Reserved for per-surface attribute colouring once
    /// semantic surfaces are modelled.
    pub fn color_by_surface(&self) -> Option<PolyMesh> {
        if self.polygons.is_empty() {
            return None;
        }
        Some(self.clone())
    }
}
