//! Block prototype templates

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::face::{Face, FaceMask};

/// Tag grouping blocks into unrelated level styles
///
/// Blocks of different styles never interoperate; a generation request names
/// the single style it draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelStyle(pub u16);

impl core::fmt::Display for LevelStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "style#{}", self.0)
    }
}

/// Authored role of a block
///
/// Distinct from the placement category, which is derived from the open faces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BlockRole {
    #[default]
    Ordinary = 0,
    Spawn = 1,
    Goal = 2,
}

/// Immutable template describing one kind of placeable cuboid block and the
/// connector openings on its six faces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPrototype {
    pub name: String,
    pub style: LevelStyle,
    pub role: BlockRole,
    faces: [FaceMask; 6],
}

impl BlockPrototype {
    /// Create a prototype with all faces closed
    pub fn new(name: impl Into<String>, style: LevelStyle, role: BlockRole) -> Self {
        Self {
            name: name.into(),
            style,
            role,
            faces: [FaceMask::empty(); 6],
        }
    }

    /// Builder-style face assignment
    pub fn with_face(mut self, face: Face, mask: FaceMask) -> Self {
        self.set_face(face, mask);
        self
    }

    /// Open the same ports on every face
    pub fn with_all_faces(mut self, mask: FaceMask) -> Self {
        self.faces = [mask; 6];
        self
    }

    /// The port mask of one face
    pub fn face(&self, face: Face) -> FaceMask {
        self.faces[face as usize]
    }

    pub fn set_face(&mut self, face: Face, mask: FaceMask) {
        self.faces[face as usize] = mask;
    }

    /// Whether the face has at least one open port
    pub fn has_opening(&self, face: Face) -> bool {
        !self.face(face).is_empty()
    }
}
