//! Grid graph generator.
//!
//! Produces a rectangular grid of cells where every pair of orthogonal
//! neighbours is joined by a randomly weighted wall edge, which is the shape
//! a maze carver hands to the spanning tree. A configurable share of cells
//! also gets a second, parallel wall towards its right neighbour.

use mazegraph_core::{Graph, GraphBuildError, WeightedEdge};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

impl Cell {
    /// Creates the cell at (`row`, `col`).
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A graph over grid cells.
pub type GridGraph = Graph<Cell, WeightedEdge<Cell>>;

/// Configuration for the grid generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Wall weights are drawn uniformly from `[0, max_weight)`.
    pub max_weight: f64,
    /// Fraction of cells that get a parallel wall to the right (0.0-1.0).
    pub parallel_edge_fraction: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 10x10 cells, ~180 edges
    Small,
    /// 50x50 cells, ~5000 edges
    Medium,
    /// 120x120 cells, ~29000 edges
    Large,
    /// 250x250 cells, ~125000 edges
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (rows, cols) = match self {
            SizeTier::Small => (10, 10),
            SizeTier::Medium => (50, 50),
            SizeTier::Large => (120, 120),
            SizeTier::XLarge => (250, 250),
        };
        GeneratorConfig {
            seed,
            rows,
            cols,
            max_weight: 100.0,
            parallel_edge_fraction: 0.05,
        }
    }
}

/// Generated cells and walls, ready to be turned into a [`GridGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridFixture {
    /// Every cell in row-major order.
    pub cells: Vec<Cell>,
    /// Every wall between neighbouring cells.
    pub walls: Vec<WeightedEdge<Cell>>,
    /// Grid height.
    pub rows: u32,
    /// Grid width.
    pub cols: u32,
}

impl GridFixture {
    /// Builds the graph with the default container sizing.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphBuildError`]; a generated fixture never triggers it.
    pub fn build(&self) -> Result<GridGraph, GraphBuildError> {
        Graph::new(self.cells.iter().copied(), self.walls.iter().cloned())
    }

    /// The top-left cell.
    pub fn first_cell(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// The bottom-right cell.
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }
}

/// Generates a weighted grid from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_grid(config: &GeneratorConfig) -> GridFixture {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cells = Vec::with_capacity((config.rows as usize) * (config.cols as usize));
    let mut walls = Vec::new();

    for row in 0..config.rows {
        for col in 0..config.cols {
            let cell = Cell::new(row, col);
            cells.push(cell);
            if col + 1 < config.cols {
                let right = Cell::new(row, col + 1);
                walls.push(WeightedEdge::new(cell, right, draw_weight(&mut rng, config)));
                if rng.gen_bool(config.parallel_edge_fraction.clamp(0.0, 1.0)) {
                    walls.push(WeightedEdge::new(right, cell, draw_weight(&mut rng, config)));
                }
            }
            if row + 1 < config.rows {
                let below = Cell::new(row + 1, col);
                walls.push(WeightedEdge::new(cell, below, draw_weight(&mut rng, config)));
            }
        }
    }

    GridFixture {
        cells,
        walls,
        rows: config.rows,
        cols: config.cols,
    }
}

fn draw_weight(rng: &mut StdRng, config: &GeneratorConfig) -> f64 {
    if config.max_weight > 0.0 {
        rng.gen_range(0.0..config.max_weight)
    } else {
        0.0
    }
}
