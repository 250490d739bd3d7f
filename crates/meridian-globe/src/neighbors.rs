//! One-time ring successor resolution for the base icosahedron.

use crate::vertex::{GlobeVertex, face_next, face_prev};

/// Link every record to the record of the tile across its forward edge.
///
/// For record `i` this finds the record `j` at the same position whose
/// backward neighbor sits where `i`'s forward neighbor sits; that tile shares
/// the edge `i -> face_next(i)`. Positions are compared exactly, which holds
/// because base records are copies of the same corner constants.
///
/// Runs in O(n²) and is only used on the 60 base records; subdivision derives
/// successors arithmetically from these.
///
/// # Panics
///
/// Panics if some record has no match, which means the base mesh is not a
/// closed manifold.
pub(crate) fn resolve_ring_successors(vertices: &mut [GlobeVertex]) {
    for i in 0..vertices.len() {
        let position = vertices[i].position;
        let forward = vertices[face_next(i)].position;
        let found = (0..vertices.len()).find(|&j| {
            j != i
                && vertices[j].position == position
                && vertices[face_prev(j)].position == forward
        });
        match found {
            Some(j) => vertices[i].next = j as u32,
            None => panic!("failed to find ring successor for vertex {i}"),
        }
    }
}
