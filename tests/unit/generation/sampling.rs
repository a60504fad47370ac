//! Tests for seeded edge grid sampling

#[cfg(test)]
mod tests {
    use jigtile::TilingError;
    use jigtile::edge::algebra::{EdgeAlgebra, MAX_EDGE_TYPES};
    use jigtile::generation::sampling::{first_edge_types, sample_grid, sample_grid_seeded};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests edge type counts start at the flat code and cap at the code space
    // Verified by starting the list at one
    #[test]
    fn test_first_edge_types() {
        assert_eq!(first_edge_types(3), vec![0, 1, 2]);
        assert_eq!(first_edge_types(1000).len(), MAX_EDGE_TYPES);
        assert!(first_edge_types(0).is_empty());

        let algebra = EdgeAlgebra::identity(4).expect("valid tables");
        let grid = sample_grid_seeded(3, 3, &first_edge_types(4), None, &algebra, 5)
            .expect("valid parameters");
        assert!(grid.horizontal.iter().all(|&code| (1..4).contains(&code)));
        assert!(sample_grid_seeded(3, 3, &first_edge_types(1), None, &algebra, 5).is_err());
    }

    // Tests the same seed reproduces the same grid
    // Verified by seeding from entropy
    #[test]
    fn test_seed_reproducible() {
        let algebra = EdgeAlgebra::identity(6).expect("valid tables");
        let first = sample_grid_seeded(4, 5, &[0, 1, 2, 3, 4, 5], None, &algebra, 7);
        let second = sample_grid_seeded(4, 5, &[0, 1, 2, 3, 4, 5], None, &algebra, 7);
        assert_eq!(first.ok(), second.ok());
    }

    // Tests the shared generator advances between draws
    // Verified by reseeding inside sample_grid
    #[test]
    fn test_generator_advances() {
        let algebra = EdgeAlgebra::identity(6).expect("valid tables");
        let mut rng = StdRng::seed_from_u64(3);
        let first = sample_grid(6, 6, &[0, 1, 2, 3, 4, 5], None, &algebra, &mut rng);
        let second = sample_grid(6, 6, &[0, 1, 2, 3, 4, 5], None, &algebra, &mut rng);
        assert_ne!(first.ok(), second.ok());
    }

    // Tests the first edge type is never drawn
    // Verified by drawing from the whole list
    #[test]
    fn test_draws_skip_first_type() {
        let algebra = EdgeAlgebra::identity(4).expect("valid tables");
        let grid = sample_grid_seeded(5, 5, &[0, 2, 3], None, &algebra, 11).expect("valid");

        assert_eq!(grid.horizontal.dim(), (5, 6));
        assert_eq!(grid.vertical.dim(), (6, 5));
        assert!(
            grid.horizontal
                .iter()
                .chain(grid.vertical.iter())
                .all(|&code| code == 2 || code == 3)
        );
    }

    // Tests the border code overwrites every perimeter edge only
    // Verified by skipping the bottom row of the border
    #[test]
    fn test_border_applied() {
        let algebra = EdgeAlgebra::identity(3).expect("valid tables");
        let grid = sample_grid_seeded(3, 4, &[0, 1, 2], Some(0), &algebra, 5).expect("valid");

        for row in grid.horizontal.rows() {
            assert_eq!(row[0], 0);
            assert_eq!(row[4], 0);
            assert!(row.iter().skip(1).take(3).all(|&code| code != 0));
        }
        for column in grid.vertical.columns() {
            assert_eq!(column[0], 0);
            assert_eq!(column[3], 0);
            assert!(column.iter().skip(1).take(2).all(|&code| code != 0));
        }
    }

    // Tests invalid parameters are rejected
    // Verified by allowing a single edge type
    #[test]
    fn test_invalid_parameters() {
        let algebra = EdgeAlgebra::identity(3).expect("valid tables");
        assert!(matches!(
            sample_grid_seeded(0, 2, &[0, 1], None, &algebra, 1),
            Err(TilingError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
        assert!(matches!(
            sample_grid_seeded(2, 2, &[0], None, &algebra, 1),
            Err(TilingError::InvalidParameter {
                parameter: "edge_types",
                ..
            })
        ));
        assert!(matches!(
            sample_grid_seeded(2, 2, &[0, 7], None, &algebra, 1),
            Err(TilingError::UndefinedEdgeCode { code: 7, .. })
        ));
        assert!(sample_grid_seeded(2, 2, &[0, 1], Some(8), &algebra, 1).is_err());
    }
}
