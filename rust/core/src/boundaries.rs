// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary index trees.
//!
//! CityJSON encodes geometry boundaries as nested JSON arrays of vertex
//! indices whose nesting depth depends on the geometry type: a `Solid` is
//! shells → faces → rings, a `MultiSurface` is faces → rings, and a face may
//! appear either as a flat ring or as a list of rings (outer ring first,
//! holes after). [`BoundaryNode`] keeps that tree as parsed, and
//! [`FaceBoundary`] classifies a single face entry exactly once instead of
//! shape-probing at every call site.

use serde::Deserialize;

/// One node of a `boundaries` array.
///
/// Anything that is neither an index nor a list (strings, objects, negative
/// or fractional numbers) is captured as [`BoundaryNode::Other`] and resolves
/// to nothing downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoundaryNode {
    /// Vertex index into the document's vertex array
    Index(u64),
    /// Nested list (shell, face or ring, depending on depth)
    List(Vec<BoundaryNode>),
    /// Unexpected content, kept so parsing never fails on geometry variance
    Other(serde_json::Value),
}

impl BoundaryNode {
    /// Get as a vertex index
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            BoundaryNode::Index(i) => usize::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Get as a nested list
    #[inline]
    pub fn as_list(&self) -> Option<&[BoundaryNode]> {
        match self {
            BoundaryNode::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A face entry as it appears inside a `boundaries` array.
///
/// The two encodings CityJSON producers emit for a face:
///
/// - `[0, 1, 2, 3]`: a bare outer ring ([`FaceBoundary::Ring`])
/// - `[[0, 1, 2, 3], [4, 5, 6]]`: a ring list, outer ring first, holes after
///   ([`FaceBoundary::WithHoles`])
///
/// Only the outer ring is ever used; hole rings are dropped. That loses hole
/// information for solid-fill visualization, a documented limitation of this
/// adapter rather than an oversight.
#[derive(Debug, Clone, Copy)]
pub enum FaceBoundary<'a> {
    /// Flat list of vertex indices
    Ring(&'a [BoundaryNode]),
    /// List of rings; the first is the outer boundary
    WithHoles(&'a [BoundaryNode]),
}

impl<'a> FaceBoundary<'a> {
    /// Classify a face entry by the shape of its first element.
    ///
    /// Returns `None` for entries that are not lists, empty lists, and lists
    /// whose first element is neither an index nor a ring.
    pub fn classify(entry: &'a BoundaryNode) -> Option<FaceBoundary<'a>> {
        let items = entry.as_list()?;
        match items.first() {
            Some(BoundaryNode::List(_)) => Some(FaceBoundary::WithHoles(items)),
            Some(BoundaryNode::Index(_)) => Some(FaceBoundary::Ring(items)),
            _ => None,
        }
    }

    /// Resolve the outer ring as vertex indices.
    ///
    /// Returns `None` when the ring contains anything other than indices, so
    /// a malformed face drops as a whole instead of emitting a partial ring.
    pub fn outer_ring(&self) -> Option<Vec<usize>> {
        let ring = match self {
            FaceBoundary::Ring(items) => *items,
            FaceBoundary::WithHoles(items) => items.first()?.as_list()?,
        };
        ring.iter().map(BoundaryNode::as_index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(raw: &str) -> BoundaryNode {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_flat_ring_classifies_as_ring() {
        let entry = node("[0, 1, 2, 3]");
        let face = FaceBoundary::classify(&entry).unwrap();
        assert!(matches!(face, FaceBoundary::Ring(_)));
        assert_eq!(face.outer_ring(), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_ring_list_takes_outer_ring_only() {
        let entry = node("[[0, 1, 2, 3], [4, 5, 6]]");
        let face = FaceBoundary::classify(&entry).unwrap();
        assert!(matches!(face, FaceBoundary::WithHoles(_)));
        // hole ring [4, 5, 6] is dropped
        assert_eq!(face.outer_ring(), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_empty_entry_resolves_to_nothing() {
        let entry = node("[]");
        assert!(FaceBoundary::classify(&entry).is_none());
    }

    #[test]
    fn test_non_list_entry_resolves_to_nothing() {
        assert!(FaceBoundary::classify(&node("7")).is_none());
        assert!(FaceBoundary::classify(&node("\"ring\"")).is_none());
    }

    #[test]
    fn test_junk_inside_ring_drops_whole_face() {
        let entry = node("[0, \"x\", 2]");
        let face = FaceBoundary::classify(&entry).unwrap();
        assert_eq!(face.outer_ring(), None);
    }

    #[test]
    fn test_negative_index_is_not_an_index() {
        // -1 falls through to Other in the untagged decode
        let entry = node("[0, -1, 2]");
        let face = FaceBoundary::classify(&entry).unwrap();
        assert_eq!(face.outer_ring(), None);
    }
}
