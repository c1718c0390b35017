//! Undirected weighted graph with Kruskal MST and lazy Dijkstra.
//!
//! # Construction
//!
//! [`Graph::new`] snapshots the supplied vertices and edges into owned
//! [`DoubleLinkedList`]s and builds the adjacency mapping eagerly:
//! 1. **Vertex pass**: every distinct vertex gets an empty incident-edge
//!    list. Repeated vertices are collapsed to their first occurrence.
//! 2. **Edge pass**: each edge is checked (weight finite and `>= 0`, both
//!    endpoints known) and appended to both endpoints' lists. A self-loop is listed
//!    once.
//!
//! The graph is immutable afterwards. The algorithms live in
//! [`spanning_tree`] and [`shortest_path`].
use std::fmt;
use std::hash::Hash;

use crate::config::ContainerConfig;
use crate::dictionary::{ChainedHashDictionary, Dictionary};
use crate::sequence::{self, DoubleLinkedList};

mod edge;
pub mod shortest_path;
pub mod spanning_tree;

pub use edge::{Edge, WeightedEdge};
pub use shortest_path::PathError;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur while building a [`Graph`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphBuildError {
    /// An edge has a negative weight.
    NegativeWeight {
        /// Position of the offending edge in the input.
        edge_index: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge has an infinite or `NaN` weight.
    NonFiniteWeight {
        /// Position of the offending edge in the input.
        edge_index: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge references a vertex missing from the vertex collection.
    UnknownVertex {
        /// Position of the offending edge in the input.
        edge_index: usize,
    },
}

impl fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphBuildError::NegativeWeight { edge_index, weight } => {
                write!(f, "edge #{edge_index} has negative weight {weight}")
            }
            GraphBuildError::NonFiniteWeight { edge_index, weight } => {
                write!(f, "edge #{edge_index} has non-finite weight {weight}")
            }
            GraphBuildError::UnknownVertex { edge_index } => {
                write!(f, "edge #{edge_index} references a vertex not in the graph")
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An immutable undirected graph with non-negative edge weights.
///
/// May contain self-loops, parallel edges, and disconnected components.
pub struct Graph<V, E> {
    vertices: DoubleLinkedList<V>,
    edges: DoubleLinkedList<E>,
    adjacency: ChainedHashDictionary<V, DoubleLinkedList<E>>,
    config: ContainerConfig,
}

impl<V, E> Graph<V, E>
where
    V: Hash + Eq + Clone,
    E: Edge<Vertex = V> + Clone,
{
    /// Builds a graph with the default [`ContainerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphBuildError::NonFiniteWeight`] for an infinite or `NaN`
    /// weight, [`GraphBuildError::NegativeWeight`] for a weight below zero,
    /// and [`GraphBuildError::UnknownVertex`] for an edge with an endpoint
    /// outside `vertices`.
    pub fn new<IV, IE>(vertices: IV, edges: IE) -> Result<Self, GraphBuildError>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        Self::with_config(vertices, edges, ContainerConfig::default())
    }

    /// Builds a graph whose internal containers are sized from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::new`].
    pub fn with_config<IV, IE>(
        vertices: IV,
        edges: IE,
        config: ContainerConfig,
    ) -> Result<Self, GraphBuildError>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        let mut adjacency = ChainedHashDictionary::with_config(&config);
        let mut vertex_list = DoubleLinkedList::new();
        for vertex in vertices {
            if adjacency.contains_key(&vertex) {
                continue;
            }
            adjacency.put(vertex.clone(), DoubleLinkedList::new());
            vertex_list.add(vertex);
        }

        let mut edge_list = DoubleLinkedList::new();
        for (edge_index, edge) in edges.into_iter().enumerate() {
            let weight = edge.weight();
            if !weight.is_finite() {
                return Err(GraphBuildError::NonFiniteWeight { edge_index, weight });
            }
            if weight < 0.0 {
                return Err(GraphBuildError::NegativeWeight { edge_index, weight });
            }
            let unknown = GraphBuildError::UnknownVertex { edge_index };
            if !adjacency.contains_key(edge.vertex1()) || !adjacency.contains_key(edge.vertex2())
            {
                return Err(unknown);
            }
            adjacency
                .get_mut(edge.vertex1())
                .map_err(|_| unknown.clone())?
                .add(edge.clone());
            if edge.vertex1() != edge.vertex2() {
                adjacency
                    .get_mut(edge.vertex2())
                    .map_err(|_| unknown.clone())?
                    .add(edge.clone());
            }
            edge_list.add(edge);
        }

        tracing::debug!(
            vertices = vertex_list.len(),
            edges = edge_list.len(),
            "built graph"
        );

        Ok(Self {
            vertices: vertex_list,
            edges: edge_list,
            adjacency,
            config,
        })
    }

    /// Returns `true` if `vertex` belongs to the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// The edges touching `vertex`, or `None` if it is not in the graph.
    pub fn incident_edges(&self, vertex: &V) -> Option<&DoubleLinkedList<E>> {
        self.adjacency.get(vertex).ok()
    }
}

impl<V, E> Graph<V, E> {
    /// Number of distinct vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the vertices in input order.
    pub fn vertices(&self) -> sequence::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterates over the edges in input order.
    pub fn edges(&self) -> sequence::Iter<'_, E> {
        self.edges.iter()
    }

    /// The sizing configuration the graph was built with.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}
