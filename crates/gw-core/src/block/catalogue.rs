//! Block catalogue
//!
//! The catalogue is an explicit value handed to the assembler; the core never
//! discovers prototypes from ambient state.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::prototype::{BlockPrototype, LevelStyle};

/// Stable reference to a prototype in a catalogue
///
/// Ids are positions in the catalogue that produced them and are what the
/// placement grid stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub usize);

/// The pool of block prototypes available to one generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    blocks: Vec<BlockPrototype>,
}

impl Catalogue {
    pub fn new(blocks: Vec<BlockPrototype>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The prototype behind `id`; only ids from this catalogue are valid
    pub fn block(&self, id: BlockId) -> &BlockPrototype {
        &self.blocks[id.0]
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockPrototype> {
        self.blocks.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &BlockPrototype)> {
        self.blocks.iter().enumerate().map(|(i, b)| (BlockId(i), b))
    }

    /// Ids of all blocks carrying `style`
    pub fn with_style(&self, style: LevelStyle) -> Vec<BlockId> {
        self.iter()
            .filter(|(_, b)| b.style == style)
            .map(|(id, _)| id)
            .collect()
    }
}

/// Errors from loading a catalogue
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("could not read catalogue '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("catalogue is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(feature = "std")]
impl Catalogue {
    /// Parse a catalogue from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalogue from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, CatalogueError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serialize the catalogue to pretty JSON
    pub fn to_json(&self) -> Result<String, CatalogueError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
