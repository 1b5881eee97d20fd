//! Reported placement failures
//!
//! Every unmet placement is recoverable: the engine records it, leaves the
//! cell empty and keeps going. The caller decides whether a hole in a
//! required cell (spawn, goal, a vertical pair, a corner) fails the whole
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::Face;

use super::grid::GridCoord;

/// One reported condition from a generation run, keyed by phase and cell
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementFailure {
    /// No spawn block with an open back face was available for the origin
    /// cell.
    #[error("no spawn block with an open Back face for (0, 0, 0)")]
    MissingSpawn,

    /// No goal block opening onto the incoming row was available.
    #[error("no goal block with an open {face} face for {at}")]
    MissingGoal { at: GridCoord, face: Face },

    /// The corner pool was empty before row turns were placed.
    #[error("no corner blocks available")]
    NoCornerCandidates,

    /// No corner block fit this row-turn cell.
    #[error("no corner block fits {at}")]
    CornerUnsatisfiable { at: GridCoord },

    /// No compatible way-up/way-down pair for the layer transition anchored
    /// here.
    #[error("no vertical link from {at} to the layer above")]
    VerticalLinkUnsatisfiable { at: GridCoord },

    /// The cell one row position behind this one is empty, so no forward
    /// connection can be validated.
    #[error("no placed block ahead of {at} to connect from")]
    RowPredecessorMissing { at: GridCoord },

    /// No ordinary block bridges this cell and its placed neighbours.
    #[error("no row block connects through {at}")]
    RowPathUnsatisfiable { at: GridCoord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_coordinates() {
        let failure = PlacementFailure::VerticalLinkUnsatisfiable {
            at: GridCoord::new(2, 0, 1),
        };
        assert_eq!(
            failure.to_string(),
            "no vertical link from (2, 0, 1) to the layer above"
        );
    }

    #[test]
    fn test_display_carries_face() {
        let failure = PlacementFailure::MissingGoal {
            at: GridCoord::new(0, 1, 0),
            face: Face::Back,
        };
        assert_eq!(
            failure.to_string(),
            "no goal block with an open Back face for (0, 1, 0)"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let failure = PlacementFailure::RowPathUnsatisfiable {
            at: GridCoord::new(1, 2, 3),
        };
        let json = serde_json::to_string(&failure).unwrap();
        let back: PlacementFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
