//! Tests for problem preparation and the compatibility relations

#[cfg(test)]
mod tests {
    use jigtile::TilingError;
    use jigtile::algorithm::bitset::VariantBitset;
    use jigtile::algorithm::constraints::Constraints;
    use jigtile::algorithm::problem::{CompatibilityMatrix, Problem};
    use jigtile::edge::algebra::EdgeAlgebra;
    use jigtile::io::configuration::MAX_GRID_DIMENSION;
    use jigtile::spatial::piece::Piece;
    use ndarray::array;

    fn gendered() -> EdgeAlgebra {
        EdgeAlgebra::new(vec![0, 2, 1, 4, 3], vec![0, 1, 2, 4, 3]).expect("valid tables")
    }

    fn pieces(raw: &[[u8; 4]]) -> Vec<Piece> {
        raw.iter().copied().map(Piece::new).collect()
    }

    // Tests raw pieces are grouped into canonical classes with counts
    // Verified by counting raw tuples instead of canonical classes
    #[test]
    fn test_prepare_groups_classes() {
        let algebra = EdgeAlgebra::identity(2).expect("valid tables");
        let problem = Problem::prepare(
            1,
            3,
            &pieces(&[[1, 0, 0, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
            &algebra,
            &Constraints::None,
        )
        .expect("valid problem");

        assert_eq!(
            problem.classes(),
            &[Piece::new([0, 0, 0, 0]), Piece::new([0, 0, 0, 1])]
        );
        assert_eq!(problem.counts(), &[1, 2]);
        assert_eq!(problem.piece_count(), 3);
        assert_eq!(problem.cells(), 3);
        assert_eq!(problem.variants().len(), 5);
        assert_eq!(problem.compatibility().len(), 5);
        assert_eq!(problem.acceptance().dim(), (1, 3, 5));
    }

    // Tests the grid entry point matches the flat one
    // Verified by transposing the grid before flattening
    #[test]
    fn test_prepare_grid() {
        let algebra = gendered();
        let grid = array![
            [Piece::new([1, 0, 0, 0]), Piece::new([0, 0, 2, 0])],
            [Piece::new([0, 0, 0, 3]), Piece::new([0, 4, 0, 0])]
        ];
        let from_grid =
            Problem::prepare_grid(&grid, &algebra, &Constraints::Border).expect("valid problem");
        let flat: Vec<Piece> = grid.iter().copied().collect();
        let from_flat = Problem::prepare(2, 2, &flat, &algebra, &Constraints::Border)
            .expect("valid problem");

        assert_eq!(from_grid.rows(), 2);
        assert_eq!(from_grid.cols(), 2);
        assert_eq!(from_grid.classes(), from_flat.classes());
        assert_eq!(from_grid.acceptance(), from_flat.acceptance());
    }

    // Tests invalid dimensions are rejected
    // Verified by removing the upper bound check
    #[test]
    fn test_prepare_dimensions() {
        let algebra = gendered();
        assert!(matches!(
            Problem::prepare(0, 1, &[], &algebra, &Constraints::None),
            Err(TilingError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
        let too_wide = vec![Piece::default(); MAX_GRID_DIMENSION + 1];
        assert!(matches!(
            Problem::prepare(1, MAX_GRID_DIMENSION + 1, &too_wide, &algebra, &Constraints::None),
            Err(TilingError::InvalidParameter {
                parameter: "cols",
                ..
            })
        ));
    }

    // Tests a piece count different from the cell count is rejected
    // Verified by removing the piece count check
    #[test]
    fn test_prepare_piece_count() {
        let result = Problem::prepare(
            2,
            2,
            &pieces(&[[0, 0, 0, 0]; 3]),
            &gendered(),
            &Constraints::None,
        );
        assert!(matches!(
            result,
            Err(TilingError::InconsistentPieceSet { .. })
        ));
    }

    // Tests undefined piece codes are rejected before expansion
    // Verified by skipping the piece check
    #[test]
    fn test_prepare_undefined_code() {
        let result = Problem::prepare(
            1,
            1,
            &pieces(&[[0, 0, 7, 0]]),
            &gendered(),
            &Constraints::None,
        );
        assert!(matches!(
            result,
            Err(TilingError::UndefinedEdgeCode { code: 7, .. })
        ));
    }

    // Tests horizontal compatibility pairs a right side with the opposite left side
    // Verified by comparing the right side with the left side directly
    #[test]
    fn test_horizontal_compatibility() {
        let algebra = gendered();
        let variants = pieces(&[[1, 0, 0, 0], [0, 0, 2, 0], [0, 0, 1, 0]]);
        let compatibility = CompatibilityMatrix::build(&variants, &algebra).expect("defined");

        assert!(compatibility.horizontal(0, 1));
        assert!(!compatibility.horizontal(0, 2));
        assert!(compatibility.horizontal(1, 0));
        assert!(!compatibility.horizontal(2, 2));
        assert!(!compatibility.horizontal(0, 9));
    }

    // Tests vertical compatibility pairs a bottom side with the opposite top side
    // Verified by comparing bottom against bottom
    #[test]
    fn test_vertical_compatibility() {
        let algebra = gendered();
        let variants = pieces(&[[0, 0, 0, 3], [0, 4, 0, 0], [0, 3, 0, 0]]);
        let compatibility = CompatibilityMatrix::build(&variants, &algebra).expect("defined");

        assert!(compatibility.vertical(0, 1));
        assert!(!compatibility.vertical(0, 2));
        assert!(!compatibility.vertical(9, 0));
        assert!(!compatibility.is_empty());
    }

    // Tests hand-built relations must be square
    // Verified by removing the row length check
    #[test]
    fn test_compatibility_from_rows() {
        let mut full = VariantBitset::new(2);
        full.insert(0);
        full.insert(1);
        let rows = vec![full.clone(), VariantBitset::new(2)];
        let matrix = CompatibilityMatrix::from_rows(rows.clone(), rows.clone()).expect("square");
        assert!(matrix.horizontal(0, 1));
        assert!(!matrix.vertical(1, 1));

        assert!(CompatibilityMatrix::from_rows(rows.clone(), vec![full]).is_err());
        assert!(
            CompatibilityMatrix::from_rows(vec![VariantBitset::new(3), VariantBitset::new(3)], rows)
                .is_err()
        );
    }

    // Tests decomposing and reassembling a problem preserves it
    // Verified by dropping the counts when splitting
    #[test]
    fn test_parts_round_trip() {
        let problem = Problem::prepare(
            1,
            2,
            &pieces(&[[1, 0, 0, 0], [0, 0, 2, 0]]),
            &gendered(),
            &Constraints::Border,
        )
        .expect("valid problem");
        let solutions = problem.count_solutions(None);

        let rebuilt = Problem::from_parts(problem.into_parts()).expect("consistent parts");
        assert_eq!(rebuilt.count_solutions(None), solutions);
        assert_eq!(rebuilt.variants().len(), 8);
    }

    // Tests inconsistent hand-built parts are rejected
    // Verified by removing the class index bound check
    #[test]
    fn test_from_parts_shapes() {
        let problem = Problem::prepare(
            1,
            2,
            &pieces(&[[1, 0, 0, 0], [0, 0, 2, 0]]),
            &gendered(),
            &Constraints::None,
        )
        .expect("valid problem");
        let parts = problem.into_parts();

        let mut bad_counts = parts.clone();
        bad_counts.counts.push(1);
        assert!(matches!(
            Problem::from_parts(bad_counts),
            Err(TilingError::ShapeMismatch {
                array: "counts",
                ..
            })
        ));

        let mut bad_class = parts.clone();
        bad_class.class_of[0] = 5;
        assert!(Problem::from_parts(bad_class).is_err());

        let mut bad_rows = parts.clone();
        bad_rows.rows = 2;
        assert!(matches!(
            Problem::from_parts(bad_rows),
            Err(TilingError::ShapeMismatch {
                array: "acceptance",
                ..
            })
        ));

        let mut bad_variants = parts;
        bad_variants.variants.pop();
        assert!(Problem::from_parts(bad_variants).is_err());
    }

    // Tests solution counting honours the limit
    // Verified by ignoring the limit
    #[test]
    fn test_count_solutions_limit() {
        let algebra = EdgeAlgebra::identity(1).expect("valid tables");
        let problem = Problem::prepare(
            2,
            2,
            &pieces(&[[0, 0, 0, 0]; 4]),
            &algebra,
            &Constraints::None,
        )
        .expect("valid problem");

        assert_eq!(problem.count_solutions(None), 1);
        assert_eq!(problem.count_solutions(Some(0)), 0);
    }
}
