//! Weighted graph generator and benchmark utilities for mazegraph.
//!
//! This crate provides deterministic generation of maze-like grid graphs
//! for benchmarking and invariant testing of `mazegraph-core`.

pub mod correctness;
pub mod generator;

pub use generator::{Cell, GeneratorConfig, GridFixture, GridGraph, SizeTier, generate_grid};
