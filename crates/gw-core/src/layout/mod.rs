//! Level layout: classification, adjacency, the placement grid and the
//! assembly engine

mod classify;
mod engine;
mod grid;
mod matching;
mod report;

pub use classify::{BlockPools, Category, CategoryPools, category_of, classify};
pub use engine::{AssembledLevel, LevelRequest, assemble_level};
pub use grid::{GridCoord, GridSize, LevelGrid, PlacedBlock, WorldPos};
pub use matching::{forward_match, sideways_match, vertical_match};
pub use report::PlacementFailure;
