// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry flattening.
//!
//! Walks every city object's geometry list and flattens the supported
//! boundary representations into one indexed polygon mesh. Geometry-level
//! problems never escalate to errors: an unsupported geometry type, a face
//! with fewer than 3 indices or an index outside the vertex pool each drop
//! at their own granularity, so a partially malformed document still yields
//! a mesh for its valid parts.

use cityjson_lite_core::{BoundaryNode, CityJsonDocument, FaceBoundary, Geometry, GeometryType};
use nalgebra::Point3;

use crate::mesh::PolyMesh;

/// Flatten a document into an indexed polygon mesh.
///
/// A document without vertices short-circuits to a fully empty mesh; city
/// objects are not visited. Otherwise the vertex pool is copied verbatim
/// (no deduplication, no coordinate transform) and every kept face becomes
/// one polygon tagged with its owning object's type and id.
pub fn build_mesh(document: &CityJsonDocument) -> PolyMesh {
    if document.vertices.is_empty() {
        tracing::debug!("document has no vertices, producing empty mesh");
        return PolyMesh::new();
    }

    let points: Vec<Point3<f64>> = document
        .vertices
        .iter()
        .map(|&[x, y, z]| Point3::new(x, y, z))
        .collect();
    let point_count = points.len();
    let mut mesh = PolyMesh::with_points(points);

    for (object_id, object) in &document.city_objects {
        for geometry in &object.geometry {
            for ring in extract_faces(geometry) {
                if ring.iter().any(|&index| index >= point_count) {
                    tracing::debug!(
                        object_id = %object_id,
                        "Dropping face with out-of-range vertex index"
                    );
                    continue;
                }
                let indices = ring.into_iter().map(|index| index as u32).collect();
                mesh.push_polygon(indices, &object.kind, object_id);
            }
        }
    }

    tracing::debug!(
        points = mesh.point_count(),
        polygons = mesh.polygon_count(),
        objects = document.object_count(),
        "Flattened document into mesh"
    );

    mesh
}

/// Extract outer rings from one geometry record, dispatching on its type.
///
/// Only rings with at least 3 indices are kept; shorter ones cannot form a
/// polygon and are dropped silently.
fn extract_faces(geometry: &Geometry) -> Vec<Vec<usize>> {
    match geometry.kind {
        GeometryType::Solid => {
            // shells → face entries
            geometry
                .boundaries
                .iter()
                .filter_map(|shell| shell.as_list())
                .flat_map(|faces| faces.iter().filter_map(resolve_face))
                .collect()
        }
        GeometryType::MultiSurface | GeometryType::CompositeSurface => {
            // face entries directly
            geometry
                .boundaries
                .iter()
                .filter_map(resolve_face)
                .collect()
        }
        GeometryType::Other => {
            tracing::debug!("Skipping unsupported geometry type");
            Vec::new()
        }
    }
}

/// Resolve one face entry to its outer ring, keeping it only if it can form
/// a polygon.
fn resolve_face(entry: &BoundaryNode) -> Option<Vec<usize>> {
    let ring = FaceBoundary::classify(entry)?.outer_ring()?;
    if ring.len() >= 3 {
        Some(ring)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn document(raw: &str) -> CityJsonDocument {
        CityJsonDocument::from_str(raw).unwrap()
    }

    // 8 vertices, one Solid with a single shell of 6 quad faces
    const CUBE: &str = r#"{
        "type": "CityJSON",
        "version": "1.1",
        "vertices": [
            [0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0],
            [0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]
        ],
        "CityObjects": {
            "building1": {
                "type": "Building",
                "geometry": [{
                    "type": "Solid",
                    "boundaries": [[
                        [[0, 1, 2, 3]],
                        [[4, 5, 6, 7]],
                        [[0, 1, 5, 4]],
                        [[2, 3, 7, 6]],
                        [[0, 3, 7, 4]],
                        [[1, 2, 6, 5]]
                    ]]
                }]
            }
        }
    }"#;

    #[test]
    fn test_solid_cube_yields_six_quads() {
        let mesh = build_mesh(&document(CUBE));

        assert_eq!(mesh.point_count(), 8);
        assert_eq!(mesh.polygon_count(), 6);
        assert_eq!(mesh.polygons()[0], vec![0, 1, 2, 3]);
        assert!(mesh.object_types().iter().all(|kind| kind == "Building"));
        assert!(mesh.object_ids().iter().all(|id| id == "building1"));
    }

    #[test]
    fn test_multisurface_single_quad() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [
                            {"type": "MultiSurface", "boundaries": [[[0, 1, 2, 3]]]}
                        ]
                    }
                }
            }"#,
        ));

        assert_eq!(mesh.point_count(), 4);
        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.object_types()[0], "Building");
        assert_eq!(mesh.object_ids()[0], "s1");
    }

    #[test]
    fn test_multisurface_accepts_flat_face_entries() {
        // faces given as bare rings, without the one-ring wrapper
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [
                            {"type": "MultiSurface", "boundaries": [[0, 1, 2, 3], [0, 2, 3]]}
                        ]
                    }
                }
            }"#,
        ));

        assert_eq!(mesh.polygon_count(), 2);
        assert_eq!(mesh.polygons()[0], vec![0, 1, 2, 3]);
        assert_eq!(mesh.polygons()[1], vec![0, 2, 3]);
    }

    #[test]
    fn test_composite_surface_behaves_like_multisurface() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]],
                "CityObjects": {
                    "c1": {
                        "type": "Bridge",
                        "geometry": [
                            {"type": "CompositeSurface", "boundaries": [[[0, 1, 2]], [[1, 2, 3]]]}
                        ]
                    }
                }
            }"#,
        ));

        assert_eq!(mesh.polygon_count(), 2);
        assert!(mesh.object_types().iter().all(|kind| kind == "Bridge"));
    }

    #[test]
    fn test_hole_rings_are_ignored() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [
                    [0, 0, 0], [4, 0, 0], [4, 4, 0], [0, 4, 0],
                    [1, 1, 0], [2, 1, 0], [2, 2, 0]
                ],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [{
                            "type": "MultiSurface",
                            "boundaries": [[[0, 1, 2, 3], [4, 5, 6]]]
                        }]
                    }
                }
            }"#,
        ));

        // one polygon from the outer ring; the hole ring contributes nothing
        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.polygons()[0], vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_vertices_short_circuits() {
        // city objects are present but never visited
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [
                            {"type": "MultiSurface", "boundaries": [[[0, 1, 2]]]}
                        ]
                    }
                }
            }"#,
        ));

        assert!(mesh.is_empty());
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.polygon_count(), 0);
    }

    #[test]
    fn test_degenerate_faces_are_dropped() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [{
                            "type": "MultiSurface",
                            "boundaries": [[[0, 1]], [[2]], [[]], [[0, 1, 2]]]
                        }]
                    }
                }
            }"#,
        ));

        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.polygons()[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_unsupported_geometry_contributes_nothing() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0]],
                "CityObjects": {
                    "p1": {
                        "type": "Building",
                        "geometry": [
                            {"type": "MultiPoint", "boundaries": [0, 1, 2]},
                            {"type": "GeometryInstance", "boundaries": [0]},
                            {"type": "MultiSurface", "boundaries": [[[0, 1, 2]]]}
                        ]
                    }
                }
            }"#,
        ));

        // only the MultiSurface contributes
        assert_eq!(mesh.polygon_count(), 1);
    }

    #[test]
    fn test_out_of_range_index_drops_only_that_face() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0]],
                "CityObjects": {
                    "s1": {
                        "type": "Building",
                        "geometry": [{
                            "type": "MultiSurface",
                            "boundaries": [[[0, 1, 99]], [[0, 1, 2]]]
                        }]
                    }
                }
            }"#,
        ));

        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.polygons()[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_junk_boundaries_never_panic() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0]],
                "CityObjects": {
                    "weird": {
                        "type": "Building",
                        "geometry": [
                            {"type": "Solid", "boundaries": ["shell", 3, {"x": 1}, [[[0, 1, 2]]]]},
                            {"type": "MultiSurface", "boundaries": [{"ring": true}, [[0, 1, 2]]]}
                        ]
                    }
                }
            }"#,
        ));

        // the valid face in each geometry survives
        assert_eq!(mesh.polygon_count(), 2);
    }

    #[test]
    fn test_no_usable_faces_keeps_points() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0]],
                "CityObjects": {
                    "s1": {"type": "Building", "geometry": [
                        {"type": "MultiSurface", "boundaries": [[[0, 1]]]}
                    ]}
                }
            }"#,
        ));

        // distinct empty state: points copied, polygon columns empty
        assert_eq!(mesh.point_count(), 2);
        assert_eq!(mesh.polygon_count(), 0);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_objects_visited_in_mapping_order() {
        let mesh = build_mesh(&document(
            r#"{
                "type": "CityJSON",
                "vertices": [[0, 0, 0], [1, 0, 0], [1, 1, 0]],
                "CityObjects": {
                    "b": {"type": "Bridge", "geometry": [
                        {"type": "MultiSurface", "boundaries": [[[0, 1, 2]]]}
                    ]},
                    "a": {"type": "Building", "geometry": [
                        {"type": "MultiSurface", "boundaries": [[[0, 1, 2]]]}
                    ]}
                }
            }"#,
        ));

        // BTreeMap order: "a" before "b"
        assert_eq!(mesh.object_ids(), ["a", "b"]);
        assert_eq!(mesh.object_types(), ["Building", "Bridge"]);
    }
}
