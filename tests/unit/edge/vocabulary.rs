//! Tests for the default jigsaw vocabulary

#[cfg(test)]
mod tests {
    use jigtile::edge::algebra::EdgeAlgebra;
    use jigtile::edge::vocabulary::{
        EdgeKind, FLAT, FLAT_ALTERNATIVE, JIGSAW_EDGE_TYPES, TabFamily, TabSize,
    };

    // Tests every code decodes and re-encodes to itself
    // Verified by swapping the size and gender terms in the encoding
    #[test]
    fn test_code_round_trip() {
        for code in 0..JIGSAW_EDGE_TYPES as u8 {
            let kind = EdgeKind::from_code(code).expect("code in vocabulary");
            assert_eq!(kind.code(), code);
        }
        assert_eq!(EdgeKind::from_code(JIGSAW_EDGE_TYPES as u8), None);
    }

    // Tests the layout of tab codes
    // Verified by changing the family stride
    #[test]
    fn test_code_layout() {
        assert_eq!(EdgeKind::from_code(FLAT), Some(EdgeKind::Flat));
        assert_eq!(
            EdgeKind::from_code(FLAT_ALTERNATIVE),
            Some(EdgeKind::FlatAlternative)
        );
        assert_eq!(
            EdgeKind::from_code(1),
            Some(EdgeKind::Tab {
                family: TabFamily::Centered,
                size: TabSize::Big,
                male: true
            })
        );
        assert_eq!(
            EdgeKind::from_code(14),
            Some(EdgeKind::Tab {
                family: TabFamily::Left,
                size: TabSize::Big,
                male: false
            })
        );
        assert_eq!(
            EdgeKind::from_code(30).map(EdgeKind::name).as_deref(),
            Some("TWISTED_SMALL_FEMALE")
        );
    }

    // Tests opposite pairs genders and mirrors asymmetric families
    // Verified by keeping the family for right/left tabs
    #[test]
    fn test_opposite_kinds() {
        let algebra = EdgeAlgebra::jigsaw().expect("valid vocabulary");
        assert_eq!(algebra.len(), JIGSAW_EDGE_TYPES);
        assert_eq!(algebra.opposite(FLAT).ok(), Some(FLAT));
        assert_eq!(algebra.opposite(1).ok(), Some(2));
        // RIGHT_BIG_MALE mates with LEFT_BIG_FEMALE
        assert_eq!(algebra.opposite(7).ok(), Some(14));
        // twisted tabs mate with themselves
        assert_eq!(algebra.opposite(25).ok(), Some(25));
        assert_eq!(algebra.opposite(FLAT_ALTERNATIVE).ok(), Some(FLAT_ALTERNATIVE));
    }

    // Tests flip mirrors right/left tabs and swaps twisted genders
    // Verified by treating twisted tabs as symmetric
    #[test]
    fn test_flip_kinds() {
        let algebra = EdgeAlgebra::jigsaw().expect("valid vocabulary");
        assert_eq!(algebra.flip(1).ok(), Some(1));
        assert_eq!(algebra.flip(7).ok(), Some(13));
        assert_eq!(algebra.flip(25).ok(), Some(26));
        assert_eq!(algebra.flip(19).ok(), Some(19));
    }

    // Tests the vocabulary is closed: closing all codes returns all codes
    // Verified by mapping a code outside the vocabulary
    #[test]
    fn test_vocabulary_closed() {
        let algebra = EdgeAlgebra::jigsaw().expect("valid vocabulary");
        let all: Vec<u8> = (0..JIGSAW_EDGE_TYPES as u8).collect();
        assert_eq!(algebra.close(&all).ok(), Some(all));
        assert_eq!(algebra.close(&[7]).ok(), Some(vec![7, 8, 13, 14]));
    }
}
