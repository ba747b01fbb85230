use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::convex_polytope::half_edge::{Face, HalfEdge, Vertex, NULL_ID};
use crate::shape::SupportMap;
use na::{self, Unit};

/// Default tolerance used when constructing a convex polytope.
///
/// It triggers a series of edge-cases, for instance whether a new point
/// should extend an existing face instead of spawning new ones.
pub const DEFAULT_CONSTRUCTION_EPSILON: Real = 1.0e-10;

/// A convex polytope represented as a half-edge mesh over flat index arenas.
///
/// The polytope maintains its convex-hull invariant under incremental vertex
/// insertion: faces visible from a new point are trimmed, the horizon is
/// re-closed with new faces, and near-coplanar or near-duplicate points are
/// merged (within [`Self::construction_epsilon`]) instead of creating
/// degenerate micro-faces.
///
/// Lower-dimensional states are valid polytopes, not errors: a single point
/// (no edges, no faces), a segment (one twin pair of half-edges, no face),
/// and a planar convex polygon (a single face whose boundary edges have no
/// twin). Once full-dimensional, every half-edge has a twin.
#[derive(Clone, Debug)]
pub struct ConvexPolytope {
    vertices: Vec<Vertex>,
    half_edges: Vec<HalfEdge>,
    faces: Vec<Face>,
    num_vertices: usize,
    num_half_edges: usize,
    num_faces: usize,
    construction_epsilon: Real,
}

impl Default for ConvexPolytope {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexPolytope {
    /// Creates an empty polytope with the default construction tolerance.
    pub fn new() -> Self {
        Self::with_construction_epsilon(DEFAULT_CONSTRUCTION_EPSILON)
    }

    /// Creates an empty polytope with the given construction tolerance.
    pub fn with_construction_epsilon(construction_epsilon: Real) -> Self {
        ConvexPolytope {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            num_vertices: 0,
            num_half_edges: 0,
            num_faces: 0,
            construction_epsilon,
        }
    }

    /// Builds the convex hull of `points` with the default construction tolerance.
    pub fn from_points(points: &[Point<Real>]) -> Self {
        Self::from_points_with_epsilon(points, DEFAULT_CONSTRUCTION_EPSILON)
    }

    /// Builds the convex hull of `points` with the given construction tolerance.
    pub fn from_points_with_epsilon(points: &[Point<Real>], construction_epsilon: Real) -> Self {
        let mut polytope = Self::with_construction_epsilon(construction_epsilon);
        for point in points {
            let _ = polytope.insert_vertex(*point);
        }
        polytope
    }

    /// The tolerance used by this polytope's construction edge-cases.
    #[inline]
    pub fn construction_epsilon(&self) -> Real {
        self.construction_epsilon
    }

    /// Does this polytope contain no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// The number of (live) vertices of this polytope.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// The number of (live) half-edges of this polytope.
    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.num_half_edges
    }

    /// The number of (live) faces of this polytope.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.num_faces
    }

    /// The vertex with the given id, if it is live.
    #[inline]
    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(id as usize).filter(|v| !v.deleted)
    }

    /// The half-edge with the given id, if it is live.
    #[inline]
    pub fn half_edge(&self, id: u32) -> Option<&HalfEdge> {
        self.half_edges.get(id as usize).filter(|e| !e.deleted)
    }

    /// The face with the given id, if it is live.
    #[inline]
    pub fn face(&self, id: u32) -> Option<&Face> {
        self.faces.get(id as usize).filter(|f| !f.deleted)
    }

    /// The ids of the live vertices of this polytope.
    pub fn vertex_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.deleted)
            .map(|(i, _)| i as u32)
    }

    /// The positions of the live vertices of this polytope.
    pub fn points(&self) -> impl Iterator<Item = &Point<Real>> + '_ {
        self.vertices
            .iter()
            .filter(|v| !v.deleted)
            .map(|v| &v.point)
    }

    /// The ids of the live faces of this polytope.
    pub fn face_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.deleted)
            .map(|(i, _)| i as u32)
    }

    /// The vertex ids of the given face's boundary loop, in order.
    pub fn face_vertex_ids(&self, fid: u32) -> Vec<u32> {
        self.face_loop(fid)
            .into_iter()
            .map(|eid| self.half_edges[eid as usize].origin)
            .collect()
    }

    /// The signed distance from the given face's supporting plane to `point`.
    ///
    /// Positive means `point` lies on the outer side of the face.
    #[inline]
    pub fn signed_distance_to_face(&self, fid: u32, point: &Point<Real>) -> Real {
        let face = &self.faces[fid as usize];
        face.normal.dot(&(point - face.centroid))
    }

    /// The id of the vertex of this polytope that is the farthest in the direction `dir`.
    ///
    /// Returns `None` if the polytope is empty. Full-dimensional polytopes
    /// are searched by hill-climbing the edge adjacency, lower-dimensional
    /// ones by linear scan; ties are broken toward the lowest id.
    pub fn supporting_vertex_id(&self, dir: &Vector<Real>) -> Option<u32> {
        if self.num_faces < 2 || self.num_vertices <= 8 {
            return self
                .vertex_ids()
                .map(|vid| (vid, self.vertices[vid as usize].point.coords.dot(dir)))
                .fold(None, |best: Option<(u32, Real)>, candidate| match best {
                    Some(best) if best.1 >= candidate.1 => Some(best),
                    _ => Some(candidate),
                })
                .map(|(vid, _)| vid);
        }

        let mut current = self.vertex_ids().next()?;
        let mut current_dot = self.vertices[current as usize].point.coords.dot(dir);

        loop {
            let mut next = current;
            let mut next_dot = current_dot;

            for &eid in self.vertices[current as usize].edges_out.iter() {
                let edge = &self.half_edges[eid as usize];
                if edge.deleted {
                    continue;
                }

                let neighbor = edge.dest;
                let neighbor_dot = self.vertices[neighbor as usize].point.coords.dot(dir);
                if neighbor_dot > next_dot {
                    next = neighbor;
                    next_dot = neighbor_dot;
                }
            }

            if next == current {
                return Some(current);
            }

            current = next;
            current_dot = next_dot;
        }
    }

    /// Adds a new point to this polytope, preserving its convex-hull invariant.
    ///
    /// Faces visible from `point` are removed and the horizon is re-closed;
    /// points that duplicate an existing vertex or fall inside the hull
    /// (within the construction tolerance) are absorbed. Returns `true` if
    /// the polytope was modified.
    pub fn insert_vertex(&mut self, point: Point<Real>) -> bool {
        match (self.num_faces, self.num_vertices) {
            (0, 0) => {
                let _ = self.push_vertex(point);
                true
            }
            (0, 1) => self.insert_into_point(point),
            (0, _) => self.insert_into_segment(point),
            (1, _) => self.insert_into_polygon(point),
            _ => self.insert_into_polytope(point),
        }
    }

    /*
     * Lower-dimensional insertions.
     */

    fn insert_into_point(&mut self, point: Point<Real>) -> bool {
        let v0 = match self.vertex_ids().next() {
            Some(v0) => v0,
            None => return false,
        };

        if na::distance(&self.vertices[v0 as usize].point, &point) <= self.construction_epsilon {
            return false;
        }

        let v1 = self.push_vertex(point);
        let e0 = self.push_half_edge(v0, v1, NULL_ID);
        let e1 = self.push_half_edge(v1, v0, NULL_ID);
        self.set_twins(e0, e1);
        self.link(e0, e1);
        self.link(e1, e0);
        true
    }

    fn insert_into_segment(&mut self, point: Point<Real>) -> bool {
        let e0 = match self.half_edges.iter().position(|e| !e.deleted) {
            Some(eid) => eid as u32,
            None => return false,
        };

        let (va, vb) = {
            let edge = &self.half_edges[e0 as usize];
            (edge.origin, edge.dest)
        };
        let a = self.vertices[va as usize].point;
        let b = self.vertices[vb as usize].point;
        let eps = self.construction_epsilon;

        if na::distance(&a, &point) <= eps || na::distance(&b, &point) <= eps {
            return false;
        }

        let ab = b - a;
        let t = (point - a).dot(&ab) / ab.norm_squared();
        let on_line = a + ab * t;

        if na::distance(&on_line, &point) <= eps {
            // Collinear: either extend the segment or absorb the point.
            if t < 0.0 {
                self.vertices[va as usize].point = point;
                true
            } else if t > 1.0 {
                self.vertices[vb as usize].point = point;
                true
            } else {
                false
            }
        } else {
            // The polytope becomes planar: replace the segment by a triangle.
            let e1 = self.half_edges[e0 as usize].twin;
            self.delete_half_edge(e0);
            self.delete_half_edge(e1);

            let vp = self.push_vertex(point);
            let _ = self.add_face(&[va, vb, vp]);
            true
        }
    }

    fn insert_into_polygon(&mut self, point: Point<Real>) -> bool {
        let fid = match self.face_ids().next() {
            Some(fid) => fid,
            None => return false,
        };

        let distance = self.signed_distance_to_face(fid, &point);

        if distance.abs() <= self.construction_epsilon {
            return self.extend_face_in_plane(fid, point);
        }

        // The polytope becomes full-dimensional. Orient the existing face
        // away from the new point, then close the cone from its boundary.
        if distance > 0.0 {
            self.flip_face(fid);
        }

        let base_loop = self.face_loop(fid);
        let vp = self.push_vertex(point);
        let mut new_faces = Vec::with_capacity(base_loop.len());

        for &eid in &base_loop {
            let (u, v) = {
                let edge = &self.half_edges[eid as usize];
                (edge.origin, edge.dest)
            };
            let new_fid = self.add_face(&[v, u, vp]);
            let new_loop = self.face_loop(new_fid);
            self.set_twins(eid, new_loop[0]);
            new_faces.push(new_loop);
        }

        for i in 0..new_faces.len() {
            // The face built over edge (u, v) exposes (u → p); the one built
            // over the previous base edge exposes (p → u).
            let prev = (i + new_faces.len() - 1) % new_faces.len();
            self.set_twins(new_faces[i][1], new_faces[prev][2]);
        }

        true
    }

    /*
     * Full-dimensional insertion.
     */

    fn insert_into_polytope(&mut self, point: Point<Real>) -> bool {
        let eps = self.construction_epsilon;

        for vid in 0..self.vertices.len() {
            let vertex = &self.vertices[vid];
            if !vertex.deleted && na::distance(&vertex.point, &point) <= eps {
                return false;
            }
        }

        let mut visible = vec![false; self.faces.len()];
        let mut any_visible = false;

        for (fid, face) in self.faces.iter().enumerate() {
            if !face.deleted && face.normal.dot(&(point - face.centroid)) > eps {
                visible[fid] = true;
                any_visible = true;
            }
        }

        if !any_visible {
            // Inside the hull, or within the epsilon shell of it.
            return false;
        }

        let horizon = match self.walk_horizon(&visible) {
            Some(horizon) => horizon,
            None => {
                log::debug!("Skipping vertex insertion: could not extract a closed horizon.");
                return false;
            }
        };

        // Plan the horizon elements before mutating anything: each element is
        // either a chain absorbed by an in-plane neighbor or a new triangle.
        #[derive(Copy, Clone)]
        enum PlannedElement {
            Extend { kept_fid: u32, first: usize, last: usize },
            NewFace { horizon_index: usize },
        }

        let mut planned = Vec::new();
        let mut extended = Vec::new();
        let mut i = 0;

        while i < horizon.len() {
            let kept_fid = self.half_edges
                [self.half_edges[horizon[i] as usize].twin as usize]
                .face;
            let coplanar = self.signed_distance_to_face(kept_fid, &point).abs() <= eps
                && !extended.contains(&kept_fid);

            if coplanar {
                let mut last = i;
                while last + 1 < horizon.len()
                    && self.half_edges[self.half_edges[horizon[last + 1] as usize].twin as usize]
                        .face
                        == kept_fid
                {
                    last += 1;
                }

                let chain_len = (last - i + 1) as u32;
                if chain_len >= self.faces[kept_fid as usize].num_edges {
                    log::debug!("Skipping vertex insertion: in-plane chain covers a whole face.");
                    return false;
                }

                extended.push(kept_fid);
                planned.push(PlannedElement::Extend {
                    kept_fid,
                    first: i,
                    last,
                });
                i = last + 1;
            } else {
                planned.push(PlannedElement::NewFace { horizon_index: i });
                i += 1;
            }
        }

        if planned.len() < 2 {
            log::debug!("Skipping vertex insertion: degenerate horizon.");
            return false;
        }

        /*
         * Carry the plan out.
         */
        let vp = self.push_vertex(point);

        // For each element: (edge toward the new vertex, edge away from it).
        let mut seams: Vec<(u32, u32)> = Vec::with_capacity(planned.len());

        for element in &planned {
            match *element {
                PlannedElement::Extend { kept_fid, first, last } => {
                    // Kept-side chain runs from the twin of the last horizon
                    // edge to the twin of the first one.
                    let first_kept = self.half_edges[horizon[last] as usize].twin;
                    let last_kept = self.half_edges[horizon[first] as usize].twin;
                    let chain_start = self.half_edges[first_kept as usize].origin;
                    let chain_end = self.half_edges[last_kept as usize].dest;
                    let before = self.half_edges[first_kept as usize].prev;
                    let after = self.half_edges[last_kept as usize].next;

                    let to_p = self.push_half_edge(chain_start, vp, kept_fid);
                    let from_p = self.push_half_edge(vp, chain_end, kept_fid);
                    self.link(before, to_p);
                    self.link(to_p, from_p);
                    self.link(from_p, after);

                    for k in first..=last {
                        self.delete_half_edge(self.half_edges[horizon[k] as usize].twin);
                    }

                    let chain_len = (last - first + 1) as u32;
                    let face = &mut self.faces[kept_fid as usize];
                    face.edge = to_p;
                    face.num_edges = face.num_edges - chain_len + 2;
                    self.update_face_plane(kept_fid);

                    seams.push((to_p, from_p));
                }
                PlannedElement::NewFace { horizon_index } => {
                    let eid = horizon[horizon_index];
                    let (u, v, kept_edge) = {
                        let edge = &self.half_edges[eid as usize];
                        (edge.origin, edge.dest, edge.twin)
                    };

                    let new_fid = self.add_face(&[u, v, vp]);
                    let new_loop = self.face_loop(new_fid);
                    self.set_twins(new_loop[0], kept_edge);
                    seams.push((new_loop[1], new_loop[2]));
                }
            }
        }

        for k in 0..seams.len() {
            let next = (k + 1) % seams.len();
            self.set_twins(seams[k].0, seams[next].1);
        }

        for fid in 0..visible.len() {
            if visible[fid] {
                self.delete_face(fid as u32);
            }
        }

        for vid in 0..self.vertices.len() {
            self.delete_vertex_if_isolated(vid as u32);
        }

        true
    }

    /// Walks the closed loop of half-edges separating the visible faces from
    /// the kept ones. Returned edges belong to visible faces, in order, each
    /// one's destination being the next one's origin.
    fn walk_horizon(&self, visible: &[bool]) -> Option<Vec<u32>> {
        let start = self.half_edges.iter().position(|edge| {
            !edge.deleted
                && visible[edge.face as usize]
                && !visible[self.half_edges[edge.twin as usize].face as usize]
        })? as u32;

        let mut horizon = vec![start];
        let mut current = start;

        loop {
            // Rotate around the destination of `current` through the visible
            // faces until the next horizon edge shows up.
            let mut candidate = self.half_edges[current as usize].next;
            let mut rotations = 0;

            loop {
                let twin = self.half_edges[candidate as usize].twin;
                if !visible[self.half_edges[twin as usize].face as usize] {
                    break;
                }
                candidate = self.half_edges[twin as usize].next;

                rotations += 1;
                if rotations > self.num_half_edges {
                    return None;
                }
            }

            if candidate == start {
                return (horizon.len() >= 3).then_some(horizon);
            }

            horizon.push(candidate);
            current = candidate;

            if horizon.len() > self.num_half_edges {
                return None;
            }
        }
    }

    /// Extends a face with a point lying in its supporting plane, keeping its
    /// boundary convex. Only used while the polytope is planar, where the
    /// boundary edges have no twin.
    fn extend_face_in_plane(&mut self, fid: u32, point: Point<Real>) -> bool {
        let eps = self.construction_epsilon;
        let normal = self.faces[fid as usize].normal;
        let boundary = self.face_loop(fid);

        for &eid in &boundary {
            let origin = self.half_edges[eid as usize].origin;
            if na::distance(&self.vertices[origin as usize].point, &point) <= eps {
                return false;
            }
        }

        let is_visible = |polytope: &Self, eid: u32| {
            let edge = &polytope.half_edges[eid as usize];
            let u = polytope.vertices[edge.origin as usize].point;
            let v = polytope.vertices[edge.dest as usize].point;
            (v - u).cross(&(point - u)).dot(&normal) < -eps
        };

        let visible_count = boundary.iter().filter(|&&e| is_visible(self, e)).count();

        if visible_count == 0 || visible_count == boundary.len() {
            // Inside the polygon, or a degenerate polygon seen edge-on.
            return false;
        }

        // The visible boundary edges form one contiguous chain; find its
        // first edge and walk it.
        let first = match boundary
            .iter()
            .find(|&&eid| is_visible(self, eid) && !is_visible(self, self.half_edges[eid as usize].prev))
        {
            Some(&first) => first,
            None => return false,
        };

        let mut chain = vec![first];
        let mut current = first;
        while is_visible(self, self.half_edges[current as usize].next) {
            current = self.half_edges[current as usize].next;
            chain.push(current);
        }

        let chain_first = chain[0];
        let chain_last = chain[chain.len() - 1];
        let chain_start = self.half_edges[chain_first as usize].origin;
        let chain_end = self.half_edges[chain_last as usize].dest;
        let before = self.half_edges[chain_first as usize].prev;
        let after = self.half_edges[chain_last as usize].next;

        let vp = self.push_vertex(point);
        let to_p = self.push_half_edge(chain_start, vp, fid);
        let from_p = self.push_half_edge(vp, chain_end, fid);
        self.link(before, to_p);
        self.link(to_p, from_p);
        self.link(from_p, after);

        for &eid in &chain {
            self.delete_half_edge(eid);
        }

        let chain_len = chain.len() as u32;
        let face = &mut self.faces[fid as usize];
        face.edge = to_p;
        face.num_edges = face.num_edges - chain_len + 2;
        self.update_face_plane(fid);

        for vid in 0..self.vertices.len() {
            self.delete_vertex_if_isolated(vid as u32);
        }

        true
    }

    /*
     * Arena bookkeeping.
     */

    fn push_vertex(&mut self, point: Point<Real>) -> u32 {
        let id = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(point));
        self.num_vertices += 1;
        id
    }

    fn push_half_edge(&mut self, origin: u32, dest: u32, face: u32) -> u32 {
        let id = self.half_edges.len() as u32;
        self.half_edges.push(HalfEdge {
            origin,
            dest,
            twin: NULL_ID,
            next: NULL_ID,
            prev: NULL_ID,
            face,
            deleted: false,
        });
        self.vertices[origin as usize].edges_out.push(id);
        self.num_half_edges += 1;
        id
    }

    #[inline]
    fn link(&mut self, first: u32, second: u32) {
        self.half_edges[first as usize].next = second;
        self.half_edges[second as usize].prev = first;
    }

    fn set_twins(&mut self, e1: u32, e2: u32) {
        debug_assert_eq!(
            self.half_edges[e1 as usize].origin,
            self.half_edges[e2 as usize].dest
        );
        debug_assert_eq!(
            self.half_edges[e1 as usize].dest,
            self.half_edges[e2 as usize].origin
        );
        self.half_edges[e1 as usize].twin = e2;
        self.half_edges[e2 as usize].twin = e1;
    }

    fn delete_half_edge(&mut self, eid: u32) {
        let edge = &mut self.half_edges[eid as usize];
        if edge.deleted {
            return;
        }
        edge.deleted = true;
        let origin = edge.origin;
        self.vertices[origin as usize]
            .edges_out
            .retain(|&mut e| e != eid);
        self.num_half_edges -= 1;
    }

    fn delete_vertex_if_isolated(&mut self, vid: u32) {
        let vertex = &mut self.vertices[vid as usize];
        if !vertex.deleted && vertex.edges_out.is_empty() && self.num_vertices > 1 {
            vertex.deleted = true;
            self.num_vertices -= 1;
        }
    }

    fn delete_face(&mut self, fid: u32) {
        if self.faces[fid as usize].deleted {
            return;
        }
        for eid in self.face_loop(fid) {
            self.delete_half_edge(eid);
        }
        self.faces[fid as usize].deleted = true;
        self.num_faces -= 1;
    }

    /// Creates a face from a loop of vertex ids, assumed ordered
    /// counter-clockwise as seen from the outside.
    fn add_face(&mut self, vids: &[u32]) -> u32 {
        let fid = self.faces.len() as u32;
        let (normal, centroid) = self.plane_of(vids);

        self.faces.push(Face {
            edge: NULL_ID,
            num_edges: vids.len() as u32,
            normal,
            centroid,
            deleted: false,
        });
        self.num_faces += 1;

        let mut edges = Vec::with_capacity(vids.len());
        for (i, &vid) in vids.iter().enumerate() {
            let dest = vids[(i + 1) % vids.len()];
            edges.push(self.push_half_edge(vid, dest, fid));
        }
        for i in 0..edges.len() {
            self.link(edges[i], edges[(i + 1) % edges.len()]);
        }
        self.faces[fid as usize].edge = edges[0];
        fid
    }

    fn face_loop(&self, fid: u32) -> Vec<u32> {
        let face = &self.faces[fid as usize];
        let mut loop_edges = Vec::with_capacity(face.num_edges as usize);
        let mut eid = face.edge;

        for _ in 0..face.num_edges {
            loop_edges.push(eid);
            eid = self.half_edges[eid as usize].next;
        }

        loop_edges
    }

    fn flip_face(&mut self, fid: u32) {
        let loop_edges = self.face_loop(fid);

        for &eid in &loop_edges {
            let (old_origin, old_dest) = {
                let edge = &self.half_edges[eid as usize];
                (edge.origin, edge.dest)
            };

            self.vertices[old_origin as usize]
                .edges_out
                .retain(|&mut e| e != eid);
            self.vertices[old_dest as usize].edges_out.push(eid);

            let edge = &mut self.half_edges[eid as usize];
            edge.origin = old_dest;
            edge.dest = old_origin;
            std::mem::swap(&mut edge.next, &mut edge.prev);
        }

        let face = &mut self.faces[fid as usize];
        face.normal = Unit::new_unchecked(-*face.normal);
    }

    /// Newell's method over a vertex loop; falls back to `+z` on a fully
    /// degenerate loop (logged, construction then absorbs the culprit).
    fn plane_of(&self, vids: &[u32]) -> (Unit<Vector<Real>>, Point<Real>) {
        let mut normal = Vector::zeros();
        let mut centroid = Vector::zeros();

        for (i, &vid) in vids.iter().enumerate() {
            let p = self.vertices[vid as usize].point;
            let q = self.vertices[vids[(i + 1) % vids.len()] as usize].point;
            normal.x += (p.y - q.y) * (p.z + q.z);
            normal.y += (p.z - q.z) * (p.x + q.x);
            normal.z += (p.x - q.x) * (p.y + q.y);
            centroid += p.coords;
        }

        let normal = Unit::try_new(normal, DEFAULT_EPSILON).unwrap_or_else(|| {
            log::debug!("Degenerate face normal encountered during construction.");
            Vector::z_axis()
        });

        (normal, Point::from(centroid / vids.len() as Real))
    }

    fn update_face_plane(&mut self, fid: u32) {
        let vids = self.face_vertex_ids(fid);
        let old_normal = self.faces[fid as usize].normal;
        let (mut normal, centroid) = self.plane_of(&vids);

        // Newell keeps the winding's orientation; guard against a sign flip
        // from a nearly-degenerate loop anyway.
        if normal.dot(&old_normal) < 0.0 {
            normal = Unit::new_unchecked(-*normal);
        }

        let face = &mut self.faces[fid as usize];
        face.normal = normal;
        face.centroid = centroid;
    }
}

impl SupportMap for ConvexPolytope {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.supporting_vertex_id(dir)
            .map(|vid| self.vertices[vid as usize].point)
            .unwrap_or_else(Point::origin)
    }
}
