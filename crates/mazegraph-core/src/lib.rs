#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod dictionary;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod priority_queue;
pub mod sequence;
pub mod set;
pub mod top_k;

pub use config::{ConfigError, ContainerConfig};
pub use dictionary::{ArrayDictionary, ChainedHashDictionary, Dictionary};
pub use disjoint_set::{ArrayDisjointSet, DisjointSetError, Pointer};
pub use error::CollectionError;
pub use graph::{Edge, Graph, GraphBuildError, PathError, WeightedEdge};
pub use priority_queue::ArrayHeap;
pub use sequence::DoubleLinkedList;
pub use set::ChainedHashSet;
pub use top_k::{top_k, top_k_with_config};

/// Returns the current version of the mazegraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
