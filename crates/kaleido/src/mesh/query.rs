//! Read-only traversals and derived geometry.
//!
//! Conventions
//! - A half-edge points at its destination; its origin is `prev.vertex`.
//! - `vertex_halfedges` lists the *incoming* half-edges of a vertex in
//!   cyclic order. Around a boundary vertex the list starts after the gap and
//!   ends with the unpaired incoming half-edge, so both neighbors of the gap
//!   are at the ends of the list.
//! - Walks are bounded by the half-edge count; a malformed mesh yields a
//!   short list, never a hang.

use nalgebra::Vector3;

use super::types::{FaceId, HalfedgeId, Mesh, VertexId};

impl Mesh {
    /// Origin of `h`.
    #[inline]
    pub fn from_vertex(&self, h: HalfedgeId) -> VertexId {
        self.halfedges[self.halfedges[h.0].prev.0].vertex
    }

    #[inline]
    pub fn next(&self, h: HalfedgeId) -> HalfedgeId {
        self.halfedges[h.0].next
    }

    #[inline]
    pub fn prev(&self, h: HalfedgeId) -> HalfedgeId {
        self.halfedges[h.0].prev
    }

    #[inline]
    pub fn pair(&self, h: HalfedgeId) -> Option<HalfedgeId> {
        self.halfedges[h.0].pair
    }

    /// Destination minus origin.
    #[inline]
    pub fn edge_vector(&self, h: HalfedgeId) -> Vector3<f64> {
        self.position(self.halfedges[h.0].vertex) - self.position(self.from_vertex(h))
    }

    /// Point at fraction `t` from the destination back toward the origin.
    #[inline]
    pub fn point_along(&self, h: HalfedgeId, t: f64) -> Vector3<f64> {
        let to = self.position(self.halfedges[h.0].vertex);
        to - t * self.edge_vector(h)
    }

    #[inline]
    pub fn midpoint(&self, h: HalfedgeId) -> Vector3<f64> {
        self.point_along(h, 0.5)
    }

    /// Half-edges of face `f`, starting at its anchor.
    pub fn face_halfedges(&self, f: FaceId) -> Vec<HalfedgeId> {
        let start = self.faces[f.0].halfedge;
        let mut out = vec![start];
        let mut h = self.next(start);
        while h != start && out.len() <= self.halfedges.len() {
            out.push(h);
            h = self.next(h);
        }
        out
    }

    /// Corner vertices of face `f`, in winding order.
    pub fn face_vertices(&self, f: FaceId) -> Vec<VertexId> {
        self.face_halfedges(f)
            .into_iter()
            .map(|h| self.halfedges[h.0].vertex)
            .collect()
    }

    #[inline]
    pub fn sides(&self, f: FaceId) -> usize {
        self.face_halfedges(f).len()
    }

    /// Vertex average.
    pub fn centroid(&self, f: FaceId) -> Vector3<f64> {
        let vs = self.face_vertices(f);
        let sum = vs
            .iter()
            .fold(Vector3::zeros(), |acc, &v| acc + self.position(v));
        sum / vs.len() as f64
    }

    /// Unit normal from the fan of cross products about the centroid.
    pub fn face_normal(&self, f: FaceId) -> Vector3<f64> {
        let c = self.centroid(f);
        let vs = self.face_vertices(f);
        let n = vs.len();
        let sum = (0..n).fold(Vector3::zeros(), |acc, i| {
            let a = self.position(vs[i]) - c;
            let b = self.position(vs[(i + 1) % n]) - c;
            acc + a.cross(&b)
        });
        unit_or_zero(sum)
    }

    /// Incoming half-edges of `v` in cyclic order.
    pub fn vertex_halfedges(&self, v: VertexId) -> Vec<HalfedgeId> {
        let Some(start) = self.vertices[v.0].halfedge else {
            return Vec::new();
        };
        let limit = self.halfedges.len();
        let mut around = vec![start];
        let mut boundary = false;
        let mut e = start;
        loop {
            let Some(p) = self.pair(e) else {
                boundary = true;
                break;
            };
            e = self.prev(p);
            if e == start || around.len() > limit {
                break;
            }
            around.push(e);
        }
        if !boundary {
            return around;
        }

        // Sweep the other way from the start until the gap.
        let mut back = Vec::new();
        e = start;
        while let Some(p) = self.pair(self.next(e)) {
            if p == start || back.len() > limit {
                break;
            }
            e = p;
            back.push(e);
        }
        back.reverse();
        back.extend(around);
        back
    }

    /// Faces around `v`, in the order of `vertex_halfedges`.
    pub fn vertex_faces(&self, v: VertexId) -> Vec<FaceId> {
        self.vertex_halfedges(v)
            .into_iter()
            .map(|h| self.halfedges[h.0].face)
            .collect()
    }

    /// Number of incident edges.
    #[inline]
    pub fn valence(&self, v: VertexId) -> usize {
        let he = self.vertex_halfedges(v);
        match he.first() {
            Some(&h) if self.pair(self.next(h)).is_none() => he.len() + 1,
            _ => he.len(),
        }
    }

    /// Whether `v` touches the boundary.
    pub fn is_boundary_vertex(&self, v: VertexId) -> bool {
        self.vertex_halfedges(v)
            .into_iter()
            .any(|h| self.pair(h).is_none() || self.pair(self.next(h)).is_none())
    }

    /// Normalized sum of the adjacent face normals.
    pub fn vertex_normal(&self, v: VertexId) -> Vector3<f64> {
        let sum = self
            .vertex_faces(v)
            .into_iter()
            .fold(Vector3::zeros(), |acc, f| acc + self.face_normal(f));
        unit_or_zero(sum)
    }

    /// One half-edge per undirected edge.
    pub fn edges(&self) -> Vec<HalfedgeId> {
        self.halfedges
            .iter()
            .enumerate()
            .filter(|(i, he)| he.pair.map_or(true, |p| *i < p.0))
            .map(|(i, _)| HalfedgeId(i))
            .collect()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn boundary_halfedges(&self) -> Vec<HalfedgeId> {
        (0..self.halfedges.len())
            .map(HalfedgeId)
            .filter(|&h| self.pair(h).is_none())
            .collect()
    }

    /// Closed chains of unpaired half-edges, each in face winding order.
    pub fn boundary_loops(&self) -> Vec<Vec<HalfedgeId>> {
        let limit = self.halfedges.len();
        let mut seen = vec![false; limit];
        let mut loops = Vec::new();
        for start in self.boundary_halfedges() {
            if seen[start.0] {
                continue;
            }
            let mut chain = Vec::new();
            let mut h = start;
            while !seen[h.0] && chain.len() <= limit {
                seen[h.0] = true;
                chain.push(h);
                // Rotate about the destination to the next unpaired outgoing edge.
                let mut out = self.next(h);
                let mut steps = 0;
                while let Some(p) = self.pair(out) {
                    out = self.next(p);
                    steps += 1;
                    if steps > limit {
                        break;
                    }
                }
                h = out;
            }
            loops.push(chain);
        }
        loops
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.halfedges.iter().all(|he| he.pair.is_some())
    }

    /// `V - E + F` over all vertices, including isolated ones.
    pub fn euler(&self) -> i64 {
        self.vertices.len() as i64 - self.edge_count() as i64 + self.faces.len() as i64
    }

    /// Positions plus index loops: the exchange format for renderers.
    pub fn to_face_lists(&self) -> (Vec<Vector3<f64>>, Vec<Vec<usize>>) {
        let positions = self.vertices.iter().map(|v| v.position).collect();
        let faces = (0..self.faces.len())
            .map(|f| {
                self.face_vertices(FaceId(f))
                    .into_iter()
                    .map(|v| v.0)
                    .collect()
            })
            .collect();
        (positions, faces)
    }
}

#[inline]
fn unit_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
}
