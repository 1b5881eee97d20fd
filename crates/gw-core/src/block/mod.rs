//! Block prototypes and the connector vocabulary on their faces

mod catalogue;
mod face;
mod prototype;

#[cfg(feature = "std")]
pub use catalogue::CatalogueError;
pub use catalogue::{BlockId, Catalogue};
pub use face::{Face, FaceMask, Port};
pub use prototype::{BlockPrototype, BlockRole, LevelStyle};
