//! gw-core: Core level-assembly logic for Gridweave
//!
//! Assembles a three-dimensional dungeon layout from a catalogue of cuboid
//! block prototypes whose faces carry connector openings. The crate is pure
//! logic with no I/O dependencies (catalogue file loading is gated behind the
//! `std` feature) and is deterministic under a seeded RNG.
//!
//! Supports `no_std` environments by disabling the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod block;
pub mod layout;

mod consts;
mod rng;

pub use consts::*;
pub use rng::MapRng;
