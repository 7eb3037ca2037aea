use glam::DVec2;

use crate::bounds::BoundingBox;
use crate::error::RegionError;

/// A named polygon area on the map.
///
/// Vertices form a closed ring: the last vertex connects back to the first.
/// The bounding box always encloses every vertex ever inserted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    name: String,
    vertices: Vec<DVec2>,
    bounds: BoundingBox,
}

impl Region {
    /// Create an unnamed region with no vertices and an empty bounding box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty region with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a region by appending each vertex in order with [`add_vertex`](Self::add_vertex).
    pub fn from_vertices(name: impl Into<String>, vertices: impl IntoIterator<Item = DVec2>) -> Self {
        let mut region = Self::named(name);
        for v in vertices {
            region.add_vertex(v.x, v.y);
        }
        region
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The vertex ring in stored order.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Add a vertex just before the last stored vertex.
    ///
    /// The first vertex added stays at the end of the list, so the stored
    /// sequence is a rotation of insertion order and traces the same ring
    /// as a plain append.
    pub fn add_vertex(&mut self, x: f64, y: f64) {
        let index = self.vertices.len().saturating_sub(1);
        self.insert_at(index, x, y);
    }

    /// Insert a vertex at position `index` (`0..=len`).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::IndexOutOfBounds`] if `index > len`.
    pub fn insert_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<(), RegionError> {
        let len = self.vertices.len();
        if index > len {
            return Err(RegionError::IndexOutOfBounds { index, len });
        }
        self.insert_at(index, x, y);
        Ok(())
    }

    fn insert_at(&mut self, index: usize, x: f64, y: f64) {
        self.vertices.insert(index, DVec2::new(x, y));
        self.bounds.grow(x, y);
    }

    /// Strict bounding-box test; points on the box boundary are outside.
    pub fn point_in_bounding_box(&self, x: f64, y: f64) -> bool {
        self.bounds.contains_strict(x, y)
    }

    /// Coarse membership test using only the bounding box.
    ///
    /// Kept for callers that depend on the box-only answer. Use
    /// [`contains_point`](Self::contains_point) for the polygon itself.
    pub fn point_in_region(&self, x: f64, y: f64) -> bool {
        self.point_in_bounding_box(x, y)
    }

    /// Even-odd point-in-polygon test over the vertex ring.
    ///
    /// The bounding box rejects most outside points before the ring is
    /// walked. A region with fewer than three vertices contains nothing.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        if self.vertices.len() < 3 || !self.point_in_bounding_box(x, y) {
            return false;
        }

        let mut inside = false;
        let mut prev = self.vertices[self.vertices.len() - 1];
        for &curr in &self.vertices {
            if (curr.y > y) != (prev.y > y) {
                let crossing_x = curr.x + (prev.x - curr.x) * (y - curr.y) / (prev.y - curr.y);
                if x < crossing_x {
                    inside = !inside;
                }
            }
            prev = curr;
        }
        inside
    }
}
