//! Adjacency predicates between neighbouring blocks
//!
//! All three predicates compare one face's ports against the mirrored ports
//! of the facing block and accept on any single open pair. They are pure and
//! total: two well-formed prototypes either connect or they don't.

use crate::block::{BlockPrototype, Face};

/// Can the path step from `current` into `next`, one row position ahead?
pub fn forward_match(current: &BlockPrototype, next: &BlockPrototype) -> bool {
    current.face(Face::Back).connects(next.face(Face::Front))
}

/// Can a row turn step from `previous` into `current` at a grid edge?
pub fn sideways_match(previous: &BlockPrototype, current: &BlockPrototype) -> bool {
    previous.face(Face::Left).connects(current.face(Face::Right))
}

/// Can the path climb from `lower` into `upper` on the layer above?
pub fn vertical_match(lower: &BlockPrototype, upper: &BlockPrototype) -> bool {
    lower.face(Face::Top).connects(upper.face(Face::Bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockRole, FaceMask, LevelStyle, Port};

    fn block(face: Face, ports: &[Port]) -> BlockPrototype {
        BlockPrototype::new("t", LevelStyle(0), BlockRole::Ordinary)
            .with_face(face, FaceMask::from_ports(ports))
    }

    #[test]
    fn test_forward_match_mirrors_columns() {
        let current = block(Face::Back, &[Port::TopLeft]);
        let next = block(Face::Front, &[Port::TopRight]);
        assert!(forward_match(&current, &next));

        let misaligned = block(Face::Front, &[Port::TopLeft]);
        assert!(!forward_match(&current, &misaligned));
    }

    #[test]
    fn test_sideways_match_reads_left_against_right() {
        let previous = block(Face::Left, &[Port::Mid]);
        let current = block(Face::Right, &[Port::Mid]);
        assert!(sideways_match(&previous, &current));
        assert!(!sideways_match(&current, &previous));
    }

    #[test]
    fn test_vertical_match_reads_top_against_bottom() {
        let lower = block(Face::Top, &[Port::BottomLeft]);
        let upper = block(Face::Bottom, &[Port::BottomRight]);
        assert!(vertical_match(&lower, &upper));
        assert!(!vertical_match(&upper, &lower));
    }

    #[test]
    fn test_one_open_pair_suffices() {
        let mut current = block(Face::Back, &[Port::Mid]);
        current.set_face(Face::Back, FaceMask::all());
        let next = block(Face::Front, &[Port::BottomRight]);
        assert!(forward_match(&current, &next));
    }

    #[test]
    fn test_predicates_are_structurally_interchangeable() {
        // The same two masks produce the same verdict whichever face pair
        // carries them.
        let masks = [
            FaceMask::from_ports(&[Port::TopLeft, Port::Mid]),
            FaceMask::from_ports(&[Port::TopRight]),
        ];
        let [out, inc] = masks;

        let fwd_a = block(Face::Back, &[]).with_face(Face::Back, out);
        let fwd_b = block(Face::Front, &[]).with_face(Face::Front, inc);
        let side_a = block(Face::Left, &[]).with_face(Face::Left, out);
        let side_b = block(Face::Right, &[]).with_face(Face::Right, inc);
        let vert_a = block(Face::Top, &[]).with_face(Face::Top, out);
        let vert_b = block(Face::Bottom, &[]).with_face(Face::Bottom, inc);

        let expected = out.connects(inc);
        assert_eq!(forward_match(&fwd_a, &fwd_b), expected);
        assert_eq!(sideways_match(&side_a, &side_b), expected);
        assert_eq!(vertical_match(&vert_a, &vert_b), expected);
    }
}
