//! Kruskal's minimum spanning tree.
//!
//! Every vertex starts as its own set in a fresh [`ArrayDisjointSet`]. Edges
//! are visited in ascending order (a full sort through [`top_k_with_config`]
//! with `k` equal to the edge count) and an edge is kept exactly when its
//! endpoints still belong to different sets, at which point the two sets are
//! merged.
//!
//! On a disconnected graph the result is a minimum spanning forest.
use std::hash::Hash;

use super::{Edge, Graph};
use crate::disjoint_set::ArrayDisjointSet;
use crate::set::ChainedHashSet;
use crate::top_k::top_k_with_config;

impl<V, E> Graph<V, E>
where
    V: Hash + Eq + Clone,
    E: Edge<Vertex = V> + Clone + Ord + Hash,
{
    /// Returns the edges of a minimum spanning tree (forest, if the graph is
    /// disconnected).
    ///
    /// When several minimum trees exist, which one is returned depends on how
    /// equal edges come out of the sort.
    pub fn find_minimum_spanning_tree(&self) -> ChainedHashSet<E> {
        let mut forest = ArrayDisjointSet::with_config(self.config());
        for vertex in self.vertices() {
            if let Err(err) = forest.make_set(vertex.clone()) {
                tracing::warn!(%err, "vertex registered twice in spanning forest");
            }
        }

        let mut tree = ChainedHashSet::with_config(self.config());
        let mut total_weight = 0.0;
        let sorted = top_k_with_config(self.num_edges(), self.edges(), self.config());
        for edge in sorted {
            let accepted = match (
                forest.find_set(edge.vertex1()),
                forest.find_set(edge.vertex2()),
            ) {
                (Ok(root1), Ok(root2)) => {
                    root1 != root2 && forest.union(edge.vertex1(), edge.vertex2()).is_ok()
                }
                (Err(_), _) | (_, Err(_)) => false,
            };
            if accepted {
                total_weight += edge.weight();
                tree.add(edge);
            }
        }

        tracing::debug!(
            edges = tree.len(),
            total_weight,
            "found minimum spanning tree"
        );
        tree
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::graph::WeightedEdge;

    fn e(a: char, b: char, w: f64) -> WeightedEdge<char> {
        WeightedEdge::new(a, b, w)
    }

    fn total(tree: &ChainedHashSet<WeightedEdge<char>>) -> f64 {
        tree.iter().map(Edge::weight).sum()
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let graph = Graph::new(
            ['a', 'b', 'c'],
            [e('a', 'b', 1.0), e('b', 'c', 2.0), e('a', 'c', 5.0)],
        )
        .expect("valid graph");
        let tree = graph.find_minimum_spanning_tree();
        let expected: ChainedHashSet<_> = [e('a', 'b', 1.0), e('b', 'c', 2.0)].into_iter().collect();
        assert_eq!(tree, expected);
        assert!((total(&tree) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tree_has_one_fewer_edge_than_vertices() {
        let graph = Graph::new(
            ['a', 'b', 'c', 'd', 'e'],
            [
                e('a', 'b', 4.0),
                e('a', 'c', 1.0),
                e('b', 'c', 2.0),
                e('b', 'd', 5.0),
                e('c', 'd', 8.0),
                e('c', 'e', 10.0),
                e('d', 'e', 2.0),
            ],
        )
        .expect("valid graph");
        let tree = graph.find_minimum_spanning_tree();
        assert_eq!(tree.len(), 4);
        assert!((total(&tree) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let graph = Graph::new(
            ['a', 'b', 'c', 'd'],
            [e('a', 'b', 3.0), e('c', 'd', 1.0), e('c', 'd', 0.5)],
        )
        .expect("valid graph");
        let tree = graph.find_minimum_spanning_tree();
        let expected: ChainedHashSet<_> = [e('a', 'b', 3.0), e('c', 'd', 0.5)].into_iter().collect();
        assert_eq!(tree, expected);
    }

    #[test]
    fn self_loops_never_join_the_tree() {
        let graph = Graph::new(['a', 'b'], [e('a', 'a', 0.0), e('a', 'b', 1.0)])
            .expect("valid graph");
        let tree = graph.find_minimum_spanning_tree();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&e('a', 'b', 1.0)));
    }

    #[test]
    fn repeated_calls_agree() {
        let graph = Graph::new(
            ['a', 'b', 'c'],
            [e('a', 'b', 1.0), e('b', 'c', 2.0), e('a', 'c', 5.0)],
        )
        .expect("valid graph");
        assert_eq!(
            graph.find_minimum_spanning_tree(),
            graph.find_minimum_spanning_tree()
        );
    }

    #[test]
    fn empty_graph_has_empty_tree() {
        let graph: Graph<char, WeightedEdge<char>> = Graph::new([], []).expect("valid graph");
        assert!(graph.find_minimum_spanning_tree().is_empty());
    }
}
