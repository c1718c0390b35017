use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An undirected, weighted connection between two vertices.
///
/// [`crate::Graph`] only relies on the endpoints, the weight, and
/// [`Edge::other_vertex`]. Kruskal's algorithm additionally ranks edges by
/// their `Ord` implementation, which callers normally define as "by weight".
pub trait Edge {
    /// The vertex type at both ends.
    type Vertex: PartialEq;

    /// One endpoint.
    fn vertex1(&self) -> &Self::Vertex;

    /// The other endpoint.
    fn vertex2(&self) -> &Self::Vertex;

    /// Non-negative traversal cost.
    fn weight(&self) -> f64;

    /// Given one endpoint, returns the opposite one.
    ///
    /// `known` must be an endpoint. Debug builds assert this; release builds
    /// return [`Edge::vertex1`] for a vertex that is not an endpoint.
    fn other_vertex(&self, known: &Self::Vertex) -> &Self::Vertex {
        debug_assert!(
            self.vertex1() == known || self.vertex2() == known,
            "other_vertex called with a vertex that is not an endpoint"
        );
        if self.vertex1() == known {
            self.vertex2()
        } else {
            self.vertex1()
        }
    }
}

/// A plain weighted edge.
///
/// Ordered by weight first (using [`f64::total_cmp`]), then by endpoints, so
/// sorting a collection of these yields ascending weight.
#[derive(Debug, Clone)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge between `vertex1` and `vertex2`.
    pub fn new(vertex1: V, vertex2: V, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }
}

impl<V: PartialEq> Edge for WeightedEdge<V> {
    type Vertex = V;

    fn vertex1(&self) -> &V {
        &self.vertex1
    }

    fn vertex2(&self) -> &V {
        &self.vertex2
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.to_bits() == other.weight.to_bits()
            && self.vertex1 == other.vertex1
            && self.vertex2 == other.vertex2
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Hash> Hash for WeightedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex1.hash(state);
        self.vertex2.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex1.cmp(&other.vertex1))
            .then_with(|| self.vertex2.cmp(&other.vertex2))
    }
}
