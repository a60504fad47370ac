//! Tests for piece rotation, reflection and canonicalization

#[cfg(test)]
mod tests {
    use jigtile::edge::algebra::EdgeAlgebra;
    use jigtile::spatial::piece::{ORBIT_SIZE, Piece};

    fn mirrored() -> EdgeAlgebra {
        // 3 and 4 are mirror images of each other
        EdgeAlgebra::new(vec![0, 2, 1, 4, 3], vec![0, 1, 2, 4, 3]).expect("valid tables")
    }

    // Tests slot accessors follow right, top, left, bottom order
    // Verified by swapping the top and bottom slot constants
    #[test]
    fn test_slot_accessors() {
        let piece = Piece::new([1, 2, 3, 4]);
        assert_eq!(piece.right(), 1);
        assert_eq!(piece.top(), 2);
        assert_eq!(piece.left(), 3);
        assert_eq!(piece.bottom(), 4);
        assert_eq!(piece.edges(), [1, 2, 3, 4]);
        assert_eq!(Piece::from([1, 2, 3, 4]), piece);
        assert_eq!(piece.to_string(), "[1, 2, 3, 4]");
    }

    // Tests a clockwise quarter turn moves the top edge to the right
    // Verified by rotating the slots in the opposite direction
    #[test]
    fn test_rotate_cw() {
        let piece = Piece::new([1, 2, 3, 4]);
        assert_eq!(piece.rotate_cw(), Piece::new([2, 3, 4, 1]));
        assert_eq!(piece.rotate_ccw(), Piece::new([4, 1, 2, 3]));
    }

    // Tests four clockwise turns restore the piece and ccw inverts cw
    // Verified by breaking the rotation permutation
    #[test]
    fn test_rotation_group() {
        let piece = Piece::new([1, 0, 3, 2]);
        let turned = piece.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(turned, piece);
        assert_eq!(piece.rotate_cw().rotate_ccw(), piece);
        assert_eq!(piece.rotate_ccw().rotate_cw(), piece);
    }

    // Tests reflection reverses slots and flips each code
    // Verified by omitting the flip lookup
    #[test]
    fn test_reflect() {
        let algebra = mirrored();
        let piece = Piece::new([3, 1, 0, 2]);
        assert_eq!(piece.reflect(&algebra).ok(), Some(Piece::new([2, 0, 1, 4])));
        let twice = piece
            .reflect(&algebra)
            .and_then(|reflected| reflected.reflect(&algebra));
        assert_eq!(twice.ok(), Some(piece));
    }

    // Tests the orbit lists rotations first, then reflected rotations
    // Verified by starting the reflected half from the unreflected piece
    #[test]
    fn test_images_order() {
        let algebra = mirrored();
        let piece = Piece::new([1, 2, 3, 4]);
        let images = piece.images(&algebra).expect("defined codes");
        assert_eq!(images.len(), ORBIT_SIZE);
        assert_eq!(images[0], piece);
        assert_eq!(images[1], piece.rotate_cw());
        assert_eq!(images[3], piece.rotate_ccw());
        assert_eq!(images[4], piece.reflect(&algebra).expect("defined codes"));
        assert_eq!(images[5], images[4].rotate_cw());
    }

    // Tests canonicalization picks the smallest image and is idempotent
    // Verified by returning the maximum image instead
    #[test]
    fn test_canonicalize_minimum() {
        let algebra = mirrored();
        let piece = Piece::new([2, 0, 1, 0]);
        let canonical = piece.canonicalize(&algebra).expect("defined codes");
        assert_eq!(canonical, Piece::new([0, 1, 0, 2]));
        assert_eq!(canonical.canonicalize(&algebra).ok(), Some(canonical));
    }

    // Tests every image of a piece canonicalizes to the same representative
    // Verified by canonicalizing over rotations only
    #[test]
    fn test_orbit_invariance() {
        let algebra = mirrored();
        for piece in [
            Piece::new([3, 1, 0, 2]),
            Piece::new([4, 4, 3, 1]),
            Piece::new([0, 0, 0, 0]),
            Piece::new([2, 3, 1, 0]),
        ] {
            let canonical = piece.canonicalize(&algebra).expect("defined codes");
            for image in piece.images(&algebra).expect("defined codes") {
                assert_eq!(image.canonicalize(&algebra).ok(), Some(canonical));
            }
        }
    }

    // Tests reflection reaches a smaller representative than rotation alone
    // Verified by removing the reflected half of the orbit
    #[test]
    fn test_canonicalize_uses_reflection() {
        let algebra = mirrored();
        // only a reflection can turn a 4 into a 3
        let piece = Piece::new([4, 4, 4, 4]);
        assert_eq!(piece.canonicalize(&algebra).ok(), Some(Piece::new([3, 3, 3, 3])));
    }

    // Tests undefined codes surface as errors
    // Verified by defaulting undefined flips to the code itself
    #[test]
    fn test_undefined_code() {
        let algebra = mirrored();
        assert!(Piece::new([0, 9, 0, 0]).reflect(&algebra).is_err());
        assert!(Piece::new([0, 9, 0, 0]).canonicalize(&algebra).is_err());
    }
}
