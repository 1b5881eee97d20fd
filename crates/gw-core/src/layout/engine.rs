//! The placement engine
//!
//! Fills the grid in a fixed phase order: spawn, goal, vertical links, row
//! turns, row fill. Placement is greedy and never backtracks; a phase that
//! cannot satisfy a cell reports the failure, leaves the cell empty and moves
//! on, so the result may contain holes.
//!
//! The path threads each layer as a serpentine: rows run along X and are
//! stacked along Z, the turn into the next row happens at alternating X
//! edges, and layers connect through matched way-up/way-down pairs at the
//! seam cells.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::block::{BlockId, BlockPrototype, Catalogue, Face, LevelStyle};
use crate::rng::MapRng;

use super::classify::BlockPools;
use super::grid::{GridCoord, GridSize, LevelGrid};
use super::matching::{forward_match, sideways_match, vertical_match};
use super::report::PlacementFailure;

/// One generation request
///
/// Extents and pitch are the caller's responsibility to validate; see
/// [`GridSize::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRequest {
    pub style: LevelStyle,
    pub size: GridSize,
    /// World units per grid cell
    pub pitch: u32,
}

/// Finished layout plus every failure reported along the way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledLevel {
    pub grid: LevelGrid,
    pub failures: Vec<PlacementFailure>,
}

impl AssembledLevel {
    /// True when no phase reported a failure
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Assemble a level from `catalogue` for one request
///
/// Runs to completion in a single synchronous call and always returns a grid,
/// holes included. The RNG drives every candidate ordering, so a fixed seed
/// reproduces the layout exactly.
pub fn assemble_level(
    catalogue: &Catalogue,
    request: &LevelRequest,
    rng: &mut MapRng,
) -> AssembledLevel {
    let pools = BlockPools::from_catalogue(catalogue, request.style);
    let mut assembler = Assembler {
        catalogue,
        pools,
        grid: LevelGrid::new(request.size, request.pitch),
        failures: Vec::new(),
        rng,
    };
    assembler.run();
    AssembledLevel {
        grid: assembler.grid,
        failures: assembler.failures,
    }
}

struct Assembler<'a> {
    catalogue: &'a Catalogue,
    pools: BlockPools,
    grid: LevelGrid,
    failures: Vec<PlacementFailure>,
    rng: &'a mut MapRng,
}

impl Assembler<'_> {
    fn block(&self, id: BlockId) -> &BlockPrototype {
        self.catalogue.block(id)
    }

    fn run(&mut self) {
        let size = self.grid.size();
        if size.x == 0 || size.y == 0 || size.z == 0 {
            // A zero-extent grid has no cells to fill.
            self.failures.push(PlacementFailure::MissingSpawn);
            self.failures.push(PlacementFailure::MissingGoal {
                at: GridCoord::new(0, 0, 0),
                face: Face::Back,
            });
            return;
        }
        self.place_spawn();
        self.place_goal();
        self.place_vertical_links();
        self.place_corners();
        self.fill_rows();
    }

    /// Phase 1: the spawn block sits at the origin and must open onto the
    /// first row.
    fn place_spawn(&mut self) {
        for id in self.rng.shuffled(&self.pools.spawn) {
            if self.block(id).has_opening(Face::Back) {
                self.grid.place(GridCoord::new(0, 0, 0), id);
                return;
            }
        }
        self.failures.push(PlacementFailure::MissingSpawn);
    }

    /// Where the serpentine ends on the top layer, and which face of the goal
    /// receives the incoming path.
    fn goal_target(&self) -> (GridCoord, Face) {
        let size = self.grid.size();
        let top = size.y - 1;
        let far = size.z - 1;
        if size.y % 2 == 0 {
            // An even layer count tops out right above the seam at the origin
            // corner.
            (GridCoord::new(0, top, 0), Face::Back)
        } else if far % 2 == 0 {
            (GridCoord::new(size.x - 1, top, far), Face::Front)
        } else {
            (GridCoord::new(0, top, far), Face::Back)
        }
    }

    /// Phase 2: first shuffled goal block open on the incoming face wins.
    fn place_goal(&mut self) {
        let (at, face) = self.goal_target();
        for id in self.rng.shuffled(&self.pools.goal) {
            if self.block(id).has_opening(face) {
                self.grid.place(at, id);
                return;
            }
        }
        self.failures.push(PlacementFailure::MissingGoal { at, face });
    }

    /// Phase 3: one matched way-up/way-down pair per layer transition.
    ///
    /// Even layers climb at the far end of the last row, on the X edge the
    /// serpentine reaches there; odd layers climb back at the origin corner.
    fn place_vertical_links(&mut self) {
        let size = self.grid.size();
        for layer in 0..size.y.saturating_sub(1) {
            let (x, z, face) = if layer % 2 == 0 {
                let far = size.z - 1;
                if far % 2 == 0 {
                    (size.x - 1, far, Face::Front)
                } else {
                    (0, far, Face::Back)
                }
            } else {
                (0, 0, Face::Back)
            };
            let lower = GridCoord::new(x, layer, z);
            let upper = GridCoord::new(x, layer + 1, z);
            if self.grid.is_occupied(lower) || self.grid.is_occupied(upper) {
                continue;
            }
            if !self.try_vertical_pair(lower, upper, face) {
                self.failures
                    .push(PlacementFailure::VerticalLinkUnsatisfiable { at: lower });
            }
        }
    }

    /// Search the shuffled way-up pool against the shuffled way-down pool for
    /// the first pair that opens onto the row on `face` and matches
    /// vertically; place both cells together.
    fn try_vertical_pair(&mut self, lower: GridCoord, upper: GridCoord, face: Face) -> bool {
        let ups = self.rng.shuffled(&self.pools.categories.way_up);
        let downs = self.rng.shuffled(&self.pools.categories.way_down);
        for up in ups {
            if !self.block(up).has_opening(face) {
                continue;
            }
            for &down in &downs {
                if !self.block(down).has_opening(face) {
                    continue;
                }
                if vertical_match(self.block(up), self.block(down)) {
                    self.grid.place(lower, up);
                    self.grid.place(upper, down);
                    return true;
                }
            }
        }
        false
    }

    /// Phase 4: fill the row-turn cells on both X edges of every row.
    ///
    /// The edge the serpentine arrives on validates sideways against the
    /// previous row; the edge it leaves from only needs the right faces open.
    fn place_corners(&mut self) {
        if self.pools.categories.corner.is_empty() {
            self.failures.push(PlacementFailure::NoCornerCandidates);
            return;
        }
        let size = self.grid.size();
        for y in 0..size.y {
            for z in 0..size.z {
                let near = GridCoord::new(0, y, z);
                let far = GridCoord::new(size.x - 1, y, z);
                if z % 2 == 0 {
                    self.try_corner(near, Face::Back, Face::Right, true);
                    self.try_corner(far, Face::Front, Face::Left, false);
                } else {
                    self.try_corner(near, Face::Back, Face::Left, false);
                    self.try_corner(far, Face::Front, Face::Right, true);
                }
            }
        }
    }

    /// Fill one row-turn cell. `validate_turn` cells must also connect
    /// sideways from the corner directly behind them in the previous row.
    fn try_corner(&mut self, at: GridCoord, row_face: Face, turn_face: Face, validate_turn: bool) {
        if self.grid.is_occupied(at) {
            return;
        }
        let previous = if validate_turn {
            let behind = at
                .z
                .checked_sub(1)
                .and_then(|pz| self.grid.get(GridCoord::new(at.x, at.y, pz)));
            match behind {
                Some(placed) => Some(placed.block),
                None => {
                    // An earlier phase left the turn anchor empty; there is
                    // nothing to validate against.
                    self.failures
                        .push(PlacementFailure::CornerUnsatisfiable { at });
                    return;
                }
            }
        } else {
            None
        };
        for id in self.rng.shuffled(&self.pools.categories.corner) {
            let candidate = self.block(id);
            if !candidate.has_opening(row_face) || !candidate.has_opening(turn_face) {
                continue;
            }
            if let Some(prev) = previous {
                if !sideways_match(self.block(prev), candidate) {
                    continue;
                }
            }
            self.grid.place(at, id);
            return;
        }
        self.failures
            .push(PlacementFailure::CornerUnsatisfiable { at });
    }

    /// Phase 5: greedy scan over every still-empty cell in (y, x, z) order.
    fn fill_rows(&mut self) {
        let size = self.grid.size();
        for y in 0..size.y {
            for x in 0..size.x {
                for z in 0..size.z {
                    let at = GridCoord::new(x, y, z);
                    if self.grid.is_occupied(at) {
                        continue;
                    }
                    self.fill_row_cell(at);
                }
            }
        }
    }

    /// A row cell must connect from its placed predecessor at x-1 and, when
    /// the successor at x+1 is already placed, into that successor too.
    fn fill_row_cell(&mut self, at: GridCoord) {
        let previous = at
            .x
            .checked_sub(1)
            .and_then(|px| self.grid.get(GridCoord::new(px, at.y, at.z)))
            .map(|placed| placed.block);
        let Some(previous) = previous else {
            self.failures
                .push(PlacementFailure::RowPredecessorMissing { at });
            return;
        };
        let next = self
            .grid
            .get(GridCoord::new(at.x + 1, at.y, at.z))
            .map(|placed| placed.block);
        for id in self.rng.shuffled(&self.pools.categories.ordinary) {
            let candidate = self.block(id);
            if !forward_match(self.block(previous), candidate) {
                continue;
            }
            if let Some(next) = next {
                if !forward_match(candidate, self.block(next)) {
                    continue;
                }
            }
            self.grid.place(at, id);
            return;
        }
        self.failures
            .push(PlacementFailure::RowPathUnsatisfiable { at });
    }
}
