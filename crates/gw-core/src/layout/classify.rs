//! Priority classification of a prototype pool
//!
//! Every block lands in exactly one placement category; a block that
//! qualifies as a corner is never also treated as a vertical link.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use strum::{Display, EnumIter};

use crate::block::{BlockId, BlockPrototype, BlockRole, Catalogue, Face, LevelStyle};

/// Placement category derived from a block's open faces, distinct from its
/// authored role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    /// Open on Front or Back and on Left or Right: can turn a row
    Corner,
    /// Open on Top: lower half of a vertical link
    WayUp,
    /// Open on Bottom: upper half of a vertical link
    WayDown,
    /// Fills the inside of a row
    Ordinary,
}

/// Category of one block, by first match in priority order
/// Corner > WayUp > WayDown > Ordinary
pub fn category_of(block: &BlockPrototype) -> Category {
    let along_row = block.has_opening(Face::Front) || block.has_opening(Face::Back);
    let across_row = block.has_opening(Face::Left) || block.has_opening(Face::Right);
    if along_row && across_row {
        Category::Corner
    } else if block.has_opening(Face::Top) {
        Category::WayUp
    } else if block.has_opening(Face::Bottom) {
        Category::WayDown
    } else {
        Category::Ordinary
    }
}

/// The four category pools produced by [`classify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPools {
    pub corner: Vec<BlockId>,
    pub way_up: Vec<BlockId>,
    pub way_down: Vec<BlockId>,
    pub ordinary: Vec<BlockId>,
}

/// Partition `pool` into the four placement categories
///
/// Pure: the input pool is left untouched and every id lands in exactly one
/// output pool.
pub fn classify(catalogue: &Catalogue, pool: &[BlockId]) -> CategoryPools {
    let mut pools = CategoryPools::default();
    for &id in pool {
        match category_of(catalogue.block(id)) {
            Category::Corner => pools.corner.push(id),
            Category::WayUp => pools.way_up.push(id),
            Category::WayDown => pools.way_down.push(id),
            Category::Ordinary => pools.ordinary.push(id),
        }
    }
    pools
}

/// Role and category pools feeding one generation run
#[derive(Debug, Clone, Default)]
pub struct BlockPools {
    pub spawn: Vec<BlockId>,
    pub goal: Vec<BlockId>,
    pub categories: CategoryPools,
}

impl BlockPools {
    /// Split the blocks of `style` by authored role, then classify the
    /// ordinary-role pool into placement categories
    pub fn from_catalogue(catalogue: &Catalogue, style: LevelStyle) -> Self {
        let mut spawn = Vec::new();
        let mut goal = Vec::new();
        let mut level = Vec::new();
        for id in catalogue.with_style(style) {
            match catalogue.block(id).role {
                BlockRole::Spawn => spawn.push(id),
                BlockRole::Goal => goal.push(id),
                BlockRole::Ordinary => level.push(id),
            }
        }
        Self {
            spawn,
            goal,
            categories: classify(catalogue, &level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{FaceMask, Port};

    fn block(name: &str, faces: &[(Face, &[Port])]) -> BlockPrototype {
        let mut b = BlockPrototype::new(name, LevelStyle(0), BlockRole::Ordinary);
        for (face, ports) in faces {
            b.set_face(*face, FaceMask::from_ports(ports));
        }
        b
    }

    #[test]
    fn test_corner_needs_both_axes() {
        let corner = block("c", &[(Face::Front, &[Port::Mid]), (Face::Right, &[Port::Mid])]);
        assert_eq!(category_of(&corner), Category::Corner);

        let straight = block("s", &[(Face::Front, &[Port::Mid]), (Face::Back, &[Port::Mid])]);
        assert_eq!(category_of(&straight), Category::Ordinary);

        let lateral = block("l", &[(Face::Left, &[Port::Mid])]);
        assert_eq!(category_of(&lateral), Category::Ordinary);
    }

    #[test]
    fn test_corner_wins_over_vertical() {
        // Open Top and Bottom as well: still a corner, never re-classified.
        let b = block(
            "c",
            &[
                (Face::Back, &[Port::Mid]),
                (Face::Left, &[Port::Mid]),
                (Face::Top, &[Port::Mid]),
                (Face::Bottom, &[Port::Mid]),
            ],
        );
        assert_eq!(category_of(&b), Category::Corner);
    }

    #[test]
    fn test_way_up_wins_over_way_down() {
        let b = block("ud", &[(Face::Top, &[Port::Mid]), (Face::Bottom, &[Port::Mid])]);
        assert_eq!(category_of(&b), Category::WayUp);
    }

    #[test]
    fn test_classify_partitions_pool() {
        let catalogue = Catalogue::new(vec![
            block("corner", &[(Face::Front, &[Port::Mid]), (Face::Left, &[Port::Mid])]),
            block("up", &[(Face::Top, &[Port::Mid])]),
            block("down", &[(Face::Bottom, &[Port::Mid])]),
            block("plain", &[(Face::Front, &[Port::Mid])]),
        ]);
        let pool: Vec<BlockId> = catalogue.iter().map(|(id, _)| id).collect();
        let pools = classify(&catalogue, &pool);

        assert_eq!(pools.corner, vec![BlockId(0)]);
        assert_eq!(pools.way_up, vec![BlockId(1)]);
        assert_eq!(pools.way_down, vec![BlockId(2)]);
        assert_eq!(pools.ordinary, vec![BlockId(3)]);

        let mut all: Vec<BlockId> = pools
            .corner
            .iter()
            .chain(&pools.way_up)
            .chain(&pools.way_down)
            .chain(&pools.ordinary)
            .copied()
            .collect();
        all.sort();
        assert_eq!(all, pool);
    }

    #[test]
    fn test_from_catalogue_splits_roles_first() {
        let mut spawn = block("spawn", &[(Face::Top, &[Port::Mid])]);
        spawn.role = BlockRole::Spawn;
        let mut goal = block("goal", &[(Face::Front, &[Port::Mid]), (Face::Left, &[Port::Mid])]);
        goal.role = BlockRole::Goal;
        let catalogue = Catalogue::new(vec![spawn, goal, block("plain", &[])]);

        let pools = BlockPools::from_catalogue(&catalogue, LevelStyle(0));
        // Spawn and goal blocks never enter the category pools, whatever
        // their faces look like.
        assert_eq!(pools.spawn, vec![BlockId(0)]);
        assert_eq!(pools.goal, vec![BlockId(1)]);
        assert!(pools.categories.way_up.is_empty());
        assert!(pools.categories.corner.is_empty());
        assert_eq!(pools.categories.ordinary, vec![BlockId(2)]);
    }

    #[test]
    fn test_from_catalogue_honours_style() {
        let mut other = block("other", &[]);
        other.style = LevelStyle(3);
        let catalogue = Catalogue::new(vec![block("plain", &[]), other]);
        let pools = BlockPools::from_catalogue(&catalogue, LevelStyle(0));
        assert_eq!(pools.categories.ordinary, vec![BlockId(0)]);
    }
}
