//! Post-operation invariant checkers for correctness validation.

use std::fmt::Debug;
use std::hash::Hash;

use mazegraph_core::{ArrayDisjointSet, ChainedHashSet, DoubleLinkedList, Edge, Graph};

use crate::generator::{Cell, GridFixture};

/// Verifies graph construction invariants against the fixture it came from.
pub fn check_graph_invariants<E>(
    fixture: &GridFixture,
    graph: &Graph<Cell, E>,
) -> Result<(), String>
where
    E: Edge<Vertex = Cell> + Clone,
{
    if graph.num_vertices() != fixture.cells.len() {
        return Err(format!(
            "vertex count mismatch: graph={}, fixture={}",
            graph.num_vertices(),
            fixture.cells.len()
        ));
    }
    if graph.num_edges() != fixture.walls.len() {
        return Err(format!(
            "edge count mismatch: graph={}, fixture={}",
            graph.num_edges(),
            fixture.walls.len()
        ));
    }
    for cell in &fixture.cells {
        if !graph.contains_vertex(cell) {
            return Err(format!("cell {cell:?} not found in graph"));
        }
    }
    let incidences: usize = fixture
        .cells
        .iter()
        .filter_map(|cell| graph.incident_edges(cell))
        .map(DoubleLinkedList::len)
        .sum();
    if incidences != 2 * graph.num_edges() {
        return Err(format!(
            "adjacency lists {incidences} edge ends, expected {}",
            2 * graph.num_edges()
        ));
    }
    Ok(())
}

/// Number of connected components of `graph`.
pub fn component_count<V, E>(graph: &Graph<V, E>) -> Result<usize, String>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone,
{
    let mut forest = ArrayDisjointSet::with_config(graph.config());
    for vertex in graph.vertices() {
        forest
            .make_set(vertex.clone())
            .map_err(|e| format!("registering {vertex:?}: {e}"))?;
    }
    let mut components = graph.num_vertices();
    for edge in graph.edges() {
        if forest.union(edge.vertex1(), edge.vertex2()).is_ok() {
            components -= 1;
        }
    }
    Ok(components)
}

/// Verifies spanning tree invariants:
/// - every tree edge is a graph edge
/// - no tree edge closes a cycle
/// - the tree has `vertices - components` edges
pub fn check_spanning_tree<V, E>(
    graph: &Graph<V, E>,
    tree: &ChainedHashSet<E>,
) -> Result<(), String>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone + Hash + Eq + Debug,
{
    let graph_edges: ChainedHashSet<E> = graph.edges().cloned().collect();
    let mut forest = ArrayDisjointSet::with_config(graph.config());
    for vertex in graph.vertices() {
        forest
            .make_set(vertex.clone())
            .map_err(|e| format!("registering {vertex:?}: {e}"))?;
    }

    for edge in tree {
        if !graph_edges.contains(edge) {
            return Err(format!("tree edge {edge:?} is not a graph edge"));
        }
        forest
            .union(edge.vertex1(), edge.vertex2())
            .map_err(|e| format!("tree edge {edge:?} closes a cycle: {e}"))?;
    }

    let expected = graph.num_vertices() - component_count(graph)?;
    if tree.len() != expected {
        return Err(format!("tree has {} edges, expected {expected}", tree.len()));
    }
    Ok(())
}

/// Verifies a shortest path result:
/// - consecutive edges share an endpoint, starting at `start`
/// - the walk ends at `end`
/// - every edge is incident to the vertex it leaves
///
/// Returns the total weight.
pub fn check_path<V, E>(
    graph: &Graph<V, E>,
    start: &V,
    end: &V,
    path: &DoubleLinkedList<E>,
) -> Result<f64, String>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<Vertex = V> + Clone + PartialEq + Debug,
{
    let mut at = start.clone();
    let mut total = 0.0;
    for (step, edge) in path.iter().enumerate() {
        if edge.vertex1() != &at && edge.vertex2() != &at {
            return Err(format!("edge {step} ({edge:?}) does not touch {at:?}"));
        }
        let incident = graph
            .incident_edges(&at)
            .ok_or_else(|| format!("vertex {at:?} not in graph"))?;
        if !incident.contains(edge) {
            return Err(format!("edge {step} ({edge:?}) is not incident to {at:?}"));
        }
        total += edge.weight();
        at = edge.other_vertex(&at).clone();
    }
    if &at != end {
        return Err(format!("path ends at {at:?}, expected {end:?}"));
    }
    Ok(total)
}

/// Verifies that `items` is in non-decreasing order.
pub fn check_ascending<T: Ord + Debug>(items: &DoubleLinkedList<T>) -> Result<(), String> {
    for (index, (prev, item)) in items.iter().zip(items.iter().skip(1)).enumerate() {
        if prev > item {
            return Err(format!("item {} ({item:?}) is below {prev:?}", index + 1));
        }
    }
    Ok(())
}
