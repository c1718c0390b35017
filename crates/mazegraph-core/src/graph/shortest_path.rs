//! Dijkstra's shortest path with lazy deletion.
//!
//! There is no decrease-key. When a vertex's distance improves, a new
//! `(vertex, distance)` record is pushed and the old one stays in the heap.
//! The set of unprocessed vertices decides whether a popped record is live:
//! a record for a vertex that has already been finalized is stale and is
//! skipped. Extra pushes are bounded by the number of successful
//! relaxations, which keeps the routine at O(E log V).
//!
//! Reachability is tracked separately from distance: a record is either the
//! initial `+inf` seed of an undiscovered vertex or a discovered one. At equal
//! distance discovered records pop first, so popping a seed means nothing
//! else is reachable. A sum of finite weights that rounds to `+inf` still
//! counts as reachable.
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use super::{Edge, Graph};
use crate::dictionary::{ChainedHashDictionary, Dictionary};
use crate::priority_queue::ArrayHeap;
use crate::sequence::DoubleLinkedList;
use crate::set::ChainedHashSet;

/// Errors that can occur during a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The end vertex cannot be reached from the start vertex.
    NoPathExists,
    /// The start or end vertex is not part of the graph.
    VertexNotFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NoPathExists => write!(f, "no path exists between the vertices"),
            PathError::VertexNotFound => write!(f, "vertex not found in graph"),
        }
    }
}

impl std::error::Error for PathError {}

/// A heap record: the best distance known for `vertex` when it was pushed.
///
/// Ordered by distance using a three-way float comparison, then discovered
/// records before undiscovered seeds.
struct Reached<V> {
    vertex: V,
    distance: f64,
    discovered: bool,
}

impl<V> PartialEq for Reached<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for Reached<V> {}

impl<V> PartialOrd for Reached<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Reached<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| other.discovered.cmp(&self.discovered))
    }
}

impl<V, E> Graph<V, E>
where
    V: Hash + Eq + Clone,
    E: Edge<Vertex = V> + Clone,
{
    /// Returns the edges of a lightest path from `start` to `end`, in order.
    ///
    /// The first edge leaves `start` and the last edge enters `end`. Equal
    /// vertices (by `==`) yield an empty path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::VertexNotFound`] if either vertex is not in the
    /// graph, and [`PathError::NoPathExists`] if `end` is unreachable.
    pub fn find_shortest_path_between(
        &self,
        start: &V,
        end: &V,
    ) -> Result<DoubleLinkedList<E>, PathError> {
        if start == end {
            return Ok(DoubleLinkedList::new());
        }
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            return Err(PathError::VertexNotFound);
        }

        let config = self.config();
        let mut heap = ArrayHeap::with_config(config);
        let mut distances: ChainedHashDictionary<V, f64> =
            ChainedHashDictionary::with_config(config);
        let mut reached_by: ChainedHashDictionary<V, E> =
            ChainedHashDictionary::with_config(config);
        let mut unprocessed = ChainedHashSet::with_config(config);

        for vertex in self.vertices() {
            let discovered = vertex == start;
            let distance = if discovered { 0.0 } else { f64::INFINITY };
            heap.insert(Reached {
                vertex: vertex.clone(),
                distance,
                discovered,
            });
            distances.put(vertex.clone(), distance);
            unprocessed.add(vertex.clone());
        }

        let mut pushes = self.num_vertices();
        let mut stale = 0_usize;
        while !unprocessed.is_empty() {
            let Ok(Reached {
                vertex,
                distance,
                discovered,
            }) = heap.remove_min()
            else {
                break;
            };
            if !discovered {
                break;
            }
            if unprocessed.remove(&vertex).is_err() {
                stale += 1;
                continue;
            }

            if vertex == *end {
                tracing::debug!(pushes, stale, distance, "found shortest path");
                return walk_back(start, end, &reached_by);
            }

            let Some(incident) = self.incident_edges(&vertex) else {
                continue;
            };
            for edge in incident {
                let neighbor = edge.other_vertex(&vertex);
                if !unprocessed.contains(neighbor) {
                    continue;
                }
                let candidate = distance + edge.weight();
                let current = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < current || !reached_by.contains_key(neighbor) {
                    heap.insert(Reached {
                        vertex: neighbor.clone(),
                        distance: candidate,
                        discovered: true,
                    });
                    distances.put(neighbor.clone(), candidate);
                    reached_by.put(neighbor.clone(), edge.clone());
                    pushes += 1;
                }
            }
        }

        tracing::debug!(pushes, stale, "end vertex unreachable");
        Err(PathError::NoPathExists)
    }
}

/// Rebuilds the path by following `reached_by` from `end` back to `start`,
/// prepending each edge.
fn walk_back<V, E>(
    start: &V,
    end: &V,
    reached_by: &ChainedHashDictionary<V, E>,
) -> Result<DoubleLinkedList<E>, PathError>
where
    V: Hash + Eq + Clone,
    E: Edge<Vertex = V> + Clone,
{
    let mut path = DoubleLinkedList::new();
    let mut current = end.clone();
    while current != *start {
        let edge = reached_by
            .get(&current)
            .map_err(|_| PathError::NoPathExists)?;
        path.push_front(edge.clone());
        current = edge.other_vertex(&current).clone();
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::graph::WeightedEdge;

    fn e(a: char, b: char, w: f64) -> WeightedEdge<char> {
        WeightedEdge::new(a, b, w)
    }

    fn path_weight(path: &DoubleLinkedList<WeightedEdge<char>>) -> f64 {
        path.iter().map(Edge::weight).sum()
    }

    fn triangle() -> Graph<char, WeightedEdge<char>> {
        Graph::new(
            ['a', 'b', 'c'],
            [e('a', 'b', 1.0), e('b', 'c', 2.0), e('a', 'c', 5.0)],
        )
        .expect("valid graph")
    }

    #[test]
    fn prefers_lighter_two_hop_route() {
        let path = triangle()
            .find_shortest_path_between(&'a', &'c')
            .expect("path exists");
        let edges: Vec<_> = path.iter().cloned().collect();
        assert_eq!(edges, vec![e('a', 'b', 1.0), e('b', 'c', 2.0)]);
        assert!((path_weight(&path) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn path_runs_from_start_to_end() {
        let path = triangle()
            .find_shortest_path_between(&'c', &'a')
            .expect("path exists");
        let edges: Vec<_> = path.iter().cloned().collect();
        assert_eq!(edges, vec![e('b', 'c', 2.0), e('a', 'b', 1.0)]);
    }

    #[test]
    fn same_vertex_is_empty_path() {
        let path = triangle()
            .find_shortest_path_between(&'b', &'b')
            .expect("trivial path");
        assert!(path.is_empty());
    }

    #[test]
    fn disconnected_vertices_have_no_path() {
        let graph = Graph::new(['a', 'b', 'c', 'd'], [e('a', 'b', 1.0), e('c', 'd', 1.0)])
            .expect("valid graph");
        assert_eq!(
            graph.find_shortest_path_between(&'a', &'d'),
            Err(PathError::NoPathExists)
        );
    }

    #[test]
    fn isolated_end_has_no_path() {
        let graph = Graph::new(['a', 'b'], Vec::<WeightedEdge<char>>::new()).expect("valid graph");
        assert_eq!(
            graph.find_shortest_path_between(&'a', &'b'),
            Err(PathError::NoPathExists)
        );
    }

    #[test]
    fn unknown_vertex_is_reported() {
        assert_eq!(
            triangle().find_shortest_path_between(&'a', &'z'),
            Err(PathError::VertexNotFound)
        );
        assert_eq!(
            triangle().find_shortest_path_between(&'z', &'a'),
            Err(PathError::VertexNotFound)
        );
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 'd' is first reached at distance 10 and later improved to 3. Its
        // first record is popped before 'e' and must be ignored.
        let graph = Graph::new(
            ['a', 'b', 'c', 'd', 'e'],
            [
                e('a', 'd', 10.0),
                e('a', 'b', 1.0),
                e('b', 'c', 1.0),
                e('c', 'd', 1.0),
                e('d', 'e', 20.0),
            ],
        )
        .expect("valid graph");
        let path = graph
            .find_shortest_path_between(&'a', &'e')
            .expect("path exists");
        assert_eq!(path.len(), 4);
        assert!((path_weight(&path) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let graph = Graph::new(
            ['a', 'b', 'c'],
            [e('a', 'b', 0.0), e('b', 'c', 0.0), e('a', 'c', 0.5)],
        )
        .expect("valid graph");
        let path = graph
            .find_shortest_path_between(&'a', &'c')
            .expect("path exists");
        assert_eq!(path_weight(&path), 0.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn huge_weights_do_not_misorder() {
        let graph = Graph::new(
            ['a', 'b', 'c'],
            [e('a', 'b', 1e300), e('b', 'c', 1e300), e('a', 'c', 1.5e300)],
        )
        .expect("valid graph");
        let path = graph
            .find_shortest_path_between(&'a', &'c')
            .expect("path exists");
        let edges: Vec<_> = path.iter().cloned().collect();
        assert_eq!(edges, vec![e('a', 'c', 1.5e300)]);
    }

    #[test]
    fn reached_orders_by_distance() {
        let near = Reached {
            vertex: 'x',
            distance: 0.25,
            discovered: true,
        };
        let far = Reached {
            vertex: 'a',
            distance: f64::INFINITY,
            discovered: true,
        };
        assert!(near < far);
        assert_eq!(
            near.cmp(&Reached {
                vertex: 'q',
                distance: 0.25,
                discovered: true,
            }),
            Ordering::Equal
        );
    }

    #[test]
    fn discovered_records_pop_before_seeds() {
        let seed = Reached {
            vertex: 'a',
            distance: f64::INFINITY,
            discovered: false,
        };
        let overflowed = Reached {
            vertex: 'b',
            distance: f64::INFINITY,
            discovered: true,
        };
        assert!(overflowed < seed);
    }

    #[test]
    fn overflowing_distance_still_reaches_end() {
        let graph = Graph::new(
            ['a', 'b', 'c', 'd'],
            [e('a', 'b', 1e308), e('b', 'c', 1e308), e('c', 'd', 1.0)],
        )
        .expect("finite weights");
        let path = graph
            .find_shortest_path_between(&'a', &'c')
            .expect("c is reachable");
        let edges: Vec<_> = path.iter().cloned().collect();
        assert_eq!(edges, vec![e('a', 'b', 1e308), e('b', 'c', 1e308)]);

        let longer = graph
            .find_shortest_path_between(&'a', &'d')
            .expect("d is reachable");
        assert_eq!(longer.len(), 3);
    }
}
