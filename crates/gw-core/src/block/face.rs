//! Face and port vocabulary for block connectors
//!
//! Every block face carries a fixed 3x3 grid of ports; an open port is an
//! opening at that sub-position of the face. Two facing blocks see each
//! other's ports horizontally mirrored.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// One of the six faces of a cuboid block
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Face {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Top = 4,
    Bottom = 5,
}

/// One of the nine port sub-positions on a face
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Port {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    MidLeft = 3,
    Mid = 4,
    MidRight = 5,
    BottomLeft = 6,
    Bottom = 7,
    BottomRight = 8,
}

impl Port {
    /// The port this one lines up with on a facing block: same row, column
    /// flipped.
    pub const fn mirrored(self) -> Port {
        match self {
            Port::TopLeft => Port::TopRight,
            Port::Top => Port::Top,
            Port::TopRight => Port::TopLeft,
            Port::MidLeft => Port::MidRight,
            Port::Mid => Port::Mid,
            Port::MidRight => Port::MidLeft,
            Port::BottomLeft => Port::BottomRight,
            Port::Bottom => Port::Bottom,
            Port::BottomRight => Port::BottomLeft,
        }
    }

    /// The `FaceMask` bit for this port
    pub const fn mask(self) -> FaceMask {
        match self {
            Port::TopLeft => FaceMask::TOP_LEFT,
            Port::Top => FaceMask::TOP,
            Port::TopRight => FaceMask::TOP_RIGHT,
            Port::MidLeft => FaceMask::MID_LEFT,
            Port::Mid => FaceMask::MID,
            Port::MidRight => FaceMask::MID_RIGHT,
            Port::BottomLeft => FaceMask::BOTTOM_LEFT,
            Port::Bottom => FaceMask::BOTTOM,
            Port::BottomRight => FaceMask::BOTTOM_RIGHT,
        }
    }
}

bitflags! {
    /// Open-port state of one face: a set bit is an opening at that port
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaceMask: u16 {
        const TOP_LEFT = 0x0001;
        const TOP = 0x0002;
        const TOP_RIGHT = 0x0004;
        const MID_LEFT = 0x0008;
        const MID = 0x0010;
        const MID_RIGHT = 0x0020;
        const BOTTOM_LEFT = 0x0040;
        const BOTTOM = 0x0080;
        const BOTTOM_RIGHT = 0x0100;
    }
}

impl FaceMask {
    /// Build a mask from a list of open ports
    pub fn from_ports(ports: &[Port]) -> FaceMask {
        let mut mask = FaceMask::empty();
        for port in ports {
            mask |= port.mask();
        }
        mask
    }

    /// Whether `port` is open on this face
    pub fn is_open(self, port: Port) -> bool {
        self.contains(port.mask())
    }

    /// The mask as seen from the facing block: rows preserved, columns flipped
    pub fn mirrored(self) -> FaceMask {
        let mut out = FaceMask::empty();
        for port in Port::iter() {
            if self.is_open(port) {
                out |= port.mirrored().mask();
            }
        }
        out
    }

    /// True iff at least one port pair is open on both faces under the mirror
    /// permutation
    ///
    /// A single matching connector is enough for two blocks to count as
    /// traversable neighbours; full socket congruence is not required.
    pub fn connects(self, facing: FaceMask) -> bool {
        self.mirrored().intersects(facing)
    }
}

// Manual serde impl for FaceMask: a mask travels as its raw bits
impl Serialize for FaceMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FaceMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(FaceMask::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_involution() {
        for port in Port::iter() {
            assert_eq!(port.mirrored().mirrored(), port);
        }
    }

    #[test]
    fn test_mirror_preserves_row() {
        assert_eq!(Port::TopLeft.mirrored(), Port::TopRight);
        assert_eq!(Port::Mid.mirrored(), Port::Mid);
        assert_eq!(Port::BottomRight.mirrored(), Port::BottomLeft);
    }

    #[test]
    fn test_mask_mirror_is_involution() {
        let mask = FaceMask::from_ports(&[Port::TopLeft, Port::Mid, Port::Bottom]);
        assert_eq!(mask.mirrored().mirrored(), mask);
    }

    #[test]
    fn test_connects_on_center_port() {
        let a = FaceMask::from_ports(&[Port::Mid]);
        let b = FaceMask::from_ports(&[Port::Mid]);
        assert!(a.connects(b));
    }

    #[test]
    fn test_connects_across_columns() {
        // An opening on the left column faces the right column of the
        // neighbouring face.
        let a = FaceMask::from_ports(&[Port::MidLeft]);
        let b = FaceMask::from_ports(&[Port::MidRight]);
        assert!(a.connects(b));
        assert!(!a.connects(a));
    }

    #[test]
    fn test_connects_requires_same_row() {
        let a = FaceMask::from_ports(&[Port::TopLeft]);
        let b = FaceMask::from_ports(&[Port::BottomRight]);
        assert!(!a.connects(b));
    }

    #[test]
    fn test_connects_empty_never_matches() {
        assert!(!FaceMask::empty().connects(FaceMask::all()));
        assert!(!FaceMask::all().connects(FaceMask::empty()));
    }

    #[test]
    fn test_serde_as_bits() {
        let mask = FaceMask::from_ports(&[Port::TopLeft, Port::MidRight]);
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "33");
        let back: FaceMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }

    #[test]
    fn test_deserialize_ignores_unknown_bits() {
        let back: FaceMask = serde_json::from_str("65535").unwrap();
        assert_eq!(back, FaceMask::all());
    }
}
