//! Cell adjacency graph with per-vertex classification state.
//!
//! Each vertex is one cell, keyed by its seed. Topology (edges, seeds,
//! elevation) is fixed at build time; classification state lives in parallel
//! arrays indexed by [`VertexId`] so passes can mutate it and clear it in
//! O(n) without walking the graph.

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};

use crate::biome::Category;
use crate::error::BiomeError;

/// Grid coordinates of a cell's representative point; the cell's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed {
    pub x: u32,
    pub y: u32,
}

impl Seed {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Dense index of a vertex in its [`CellGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unordered adjacency between two cells sharing a border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// The endpoint opposite `from`.
    ///
    /// `from` must be one of the two endpoints.
    #[inline]
    pub fn other(self, from: VertexId) -> VertexId {
        debug_assert!(from == self.a || from == self.b);
        if from == self.a { self.b } else { self.a }
    }
}

/// Read-only snapshot of a cell's fixed attributes, handed to land predicates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub id: VertexId,
    pub seed: Seed,
    pub elevation: f64,
}

/// Incrementally assembles a [`CellGraph`].
#[derive(Debug, Default)]
pub struct CellGraphBuilder {
    seeds: Vec<Seed>,
    elevation: Vec<f64>,
    by_seed: HashMap<Seed, VertexId>,
    edges: Vec<Edge>,
    edge_set: HashSet<(VertexId, VertexId)>,
    incident: Vec<Vec<u32>>,
}

impl CellGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cell and returns its vertex id.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::DuplicateSeed`] if `seed` was already added.
    pub fn add_cell(&mut self, seed: Seed, elevation: f64) -> Result<VertexId, BiomeError> {
        if self.by_seed.contains_key(&seed) {
            return Err(BiomeError::DuplicateSeed(seed));
        }
        let id = VertexId(self.seeds.len() as u32);
        self.by_seed.insert(seed, id);
        self.seeds.push(seed);
        self.elevation.push(elevation);
        self.incident.push(Vec::new());
        Ok(id)
    }

    /// Connects two cells. Returns `false` if the edge already existed.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::SelfLoop`] for `a == b` and
    /// [`BiomeError::UnknownVertex`] for ids not issued by this builder.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<bool, BiomeError> {
        for v in [a, b] {
            if v.index() >= self.seeds.len() {
                return Err(BiomeError::UnknownVertex(v));
            }
        }
        if a == b {
            return Err(BiomeError::SelfLoop(a));
        }
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        if !self.edge_set.insert((a, b)) {
            return Ok(false);
        }
        let edge_index = self.edges.len() as u32;
        self.edges.push(Edge { a, b });
        self.incident[a.index()].push(edge_index);
        self.incident[b.index()].push(edge_index);
        Ok(true)
    }

    /// Connects the cells owning two seeds.
    pub fn add_edge_between(&mut self, a: Seed, b: Seed) -> Result<bool, BiomeError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.add_edge(a, b)
    }

    fn lookup(&self, seed: Seed) -> Result<VertexId, BiomeError> {
        self.by_seed
            .get(&seed)
            .copied()
            .ok_or(BiomeError::VertexNotFound(seed))
    }

    /// Freezes the topology. Every cell starts as water with no moisture.
    pub fn build(self) -> CellGraph {
        let n = self.seeds.len();
        CellGraph {
            seeds: self.seeds,
            elevation: self.elevation,
            by_seed: self.by_seed,
            edges: self.edges,
            incident: self.incident,
            land: vec![false; n],
            category: vec![Category::default(); n],
            moisture: vec![None; n],
            beach: vec![false; n],
            visited: vec![false; n],
        }
    }
}

/// Undirected cell graph plus mutable classification state.
#[derive(Debug, Clone)]
pub struct CellGraph {
    seeds: Vec<Seed>,
    elevation: Vec<f64>,
    by_seed: HashMap<Seed, VertexId>,
    edges: Vec<Edge>,
    incident: Vec<Vec<u32>>,

    land: Vec<bool>,
    category: Vec<Category>,
    moisture: Vec<Option<f64>>,
    beach: Vec<bool>,
    visited: Vec<bool>,
}

impl CellGraph {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex ids in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.seeds.len() as u32).map(VertexId)
    }

    /// Edges incident to `v`.
    pub fn edges(&self, v: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.incident[v.index()]
            .iter()
            .map(|&e| self.edges[e as usize])
    }

    /// Vertices sharing a border with `v`.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges(v).map(move |e| e.other(v))
    }

    /// Resolves a seed to its vertex.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::VertexNotFound`] if no cell was built for `seed`.
    pub fn vertex_for(&self, seed: Seed) -> Result<VertexId, BiomeError> {
        self.by_seed
            .get(&seed)
            .copied()
            .ok_or(BiomeError::VertexNotFound(seed))
    }

    pub fn seed(&self, v: VertexId) -> Seed {
        self.seeds[v.index()]
    }

    pub fn elevation(&self, v: VertexId) -> f64 {
        self.elevation[v.index()]
    }

    pub fn cell(&self, v: VertexId) -> CellView {
        CellView {
            id: v,
            seed: self.seeds[v.index()],
            elevation: self.elevation[v.index()],
        }
    }

    /// Whether land placement marked this cell as land.
    pub fn is_land(&self, v: VertexId) -> bool {
        self.land[v.index()]
    }

    pub(crate) fn set_land(&mut self, v: VertexId, land: bool) {
        self.land[v.index()] = land;
    }

    pub fn category(&self, v: VertexId) -> Category {
        self.category[v.index()]
    }

    pub fn set_category(&mut self, v: VertexId, category: Category) {
        self.category[v.index()] = category;
    }

    /// Stored moisture, or 0 if none has been assigned.
    pub fn moisture(&self, v: VertexId) -> f64 {
        self.moisture[v.index()].unwrap_or(0.0)
    }

    /// Stored moisture, `None` if the cell was never sampled or reached.
    pub fn assigned_moisture(&self, v: VertexId) -> Option<f64> {
        self.moisture[v.index()]
    }

    pub fn set_moisture(&mut self, v: VertexId, moisture: f64) {
        self.moisture[v.index()] = Some(moisture);
    }

    pub fn is_beach(&self, v: VertexId) -> bool {
        self.beach[v.index()]
    }

    pub(crate) fn set_beach(&mut self, v: VertexId, beach: bool) {
        self.beach[v.index()] = beach;
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v.index()]
    }

    /// Marks `v` visited; returns `false` if it already was.
    pub fn visit(&mut self, v: VertexId) -> bool {
        !std::mem::replace(&mut self.visited[v.index()], true)
    }

    /// Clears every traversal flag.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Restores the state land placement left behind: land cells back to
    /// `Land`, everything else to `Ocean`, no beaches, no moisture.
    pub fn reset_classification(&mut self) {
        for (category, &land) in self.category.iter_mut().zip(&self.land) {
            *category = if land {
                Category::Land
            } else {
                Category::default()
            };
        }
        self.moisture.fill(None);
        self.beach.fill(false);
        self.visited.fill(false);
    }

    /// Cell count per category.
    pub fn census(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for &category in &self.category {
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cells currently flagged as beach.
    pub fn beach_count(&self) -> usize {
        self.beach.iter().filter(|&&b| b).count()
    }
}
