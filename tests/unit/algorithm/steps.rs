//! Tests for section layout, step chunking and plan assembly

#[cfg(test)]
mod tests {
    use brickplan::algorithm::steps::{
        SectionMode, StepBounds, StepOptions, build_sections, chunk_placements, plan,
    };
    use brickplan::algorithm::tiling::{Placement, PlacementSet};
    use brickplan::spatial::{Bounds, Color};

    fn piece(x: usize, y: usize, width: usize, height: usize) -> Placement {
        Placement {
            x,
            y,
            width,
            height,
            shape_type: format!("{height}x{width}"),
            color: Color::rgb(10, 20, 30),
        }
    }

    fn unit_grid(width: usize, height: usize) -> PlacementSet {
        let placements = (0..height)
            .flat_map(|y| (0..width).map(move |x| piece(x, y, 1, 1)))
            .collect();
        PlacementSet {
            width,
            height,
            placements,
        }
    }

    fn options(mode: SectionMode, rows_per_section: usize, rows_per_step: usize, cap: usize) -> StepOptions {
        StepOptions {
            section_mode: mode,
            rows_per_section,
            rows_per_step,
            max_placements_per_step: cap,
        }
    }

    // Tests section mode parsing and display agree
    // Verified by mislabeling quadrants
    #[test]
    fn test_section_mode_strings() {
        for mode in [SectionMode::Single, SectionMode::Rows, SectionMode::Quadrants] {
            assert_eq!(mode.to_string().parse::<SectionMode>().unwrap(), mode);
        }
        assert_eq!(" Quadrants ".parse::<SectionMode>().unwrap(), SectionMode::Quadrants);
        assert!("diagonal".parse::<SectionMode>().is_err());
        assert_eq!(SectionMode::default(), SectionMode::Rows);
    }

    // Tests normalization clamps sizes to at least one
    // Verified by leaving zero values untouched
    #[test]
    fn test_options_normalized() {
        let normalized = options(SectionMode::Rows, 0, 0, 0).normalized();
        assert_eq!(normalized.rows_per_section, 1);
        assert_eq!(normalized.rows_per_step, 1);
        assert_eq!(normalized.max_placements_per_step, 1);

        let defaults = StepOptions::default();
        assert_eq!(defaults.rows_per_section, 16);
        assert_eq!(defaults.rows_per_step, 2);
        assert_eq!(defaults.max_placements_per_step, 256);
    }

    // Tests rows mode truncates the last band
    // Verified by emitting a full-height last band
    #[test]
    fn test_sections_rows() {
        let sections = build_sections(8, 10, SectionMode::Rows, 4);

        let bounds: Vec<Bounds> = sections.iter().map(|s| s.bounds).collect();
        assert_eq!(
            bounds,
            vec![
                Bounds::new(0, 0, 8, 4),
                Bounds::new(0, 4, 8, 4),
                Bounds::new(0, 8, 8, 2),
            ]
        );
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rows 1-4", "Rows 5-8", "Rows 9-10"]);
        let ids: Vec<usize> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    // Tests quadrant split at integer midpoints
    // Verified by rounding the midpoint up
    #[test]
    fn test_sections_quadrants() {
        let sections = build_sections(5, 3, SectionMode::Quadrants, 16);

        let bounds: Vec<Bounds> = sections.iter().map(|s| s.bounds).collect();
        assert_eq!(
            bounds,
            vec![
                Bounds::new(0, 0, 2, 1),
                Bounds::new(2, 0, 3, 1),
                Bounds::new(0, 1, 2, 2),
                Bounds::new(2, 1, 3, 2),
            ]
        );
        assert_eq!(sections.first().unwrap().name, "Top left");
    }

    // Tests zero-size quadrants are omitted
    // Verified by keeping empty bounds
    #[test]
    fn test_sections_quadrants_degenerate() {
        let sections = build_sections(1, 1, SectionMode::Quadrants, 16);
        assert_eq!(sections.len(), 1);
        let only = sections.first().unwrap();
        assert_eq!(only.name, "Bottom right");
        assert_eq!(only.id, 1);
    }

    // Tests single mode covers the whole grid
    // Verified by splitting the grid in half
    #[test]
    fn test_sections_single() {
        let sections = build_sections(6, 4, SectionMode::Single, 1);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.first().unwrap().bounds, Bounds::new(0, 0, 6, 4));
        assert!(build_sections(0, 0, SectionMode::Single, 1).is_empty());
    }

    // Tests chunking groups distinct origin rows then applies the cap
    // Verified by grouping rows by index arithmetic instead of distinct values
    #[test]
    fn test_chunk_rows_then_cap() {
        let placements = vec![
            piece(0, 0, 1, 1),
            piece(1, 0, 1, 1),
            piece(2, 0, 1, 1),
            piece(0, 3, 1, 1),
            piece(0, 5, 1, 1),
            piece(1, 5, 1, 1),
        ];
        let chunks = chunk_placements(placements, 2, 2);

        let origins: Vec<Vec<(usize, usize)>> = chunks
            .iter()
            .map(|chunk| chunk.iter().map(|p| (p.x, p.y)).collect())
            .collect();
        assert_eq!(
            origins,
            vec![
                vec![(0, 0), (1, 0)],
                vec![(2, 0), (0, 3)],
                vec![(0, 5), (1, 5)],
            ]
        );
    }

    // Tests chunking sorts by origin before grouping
    // Verified by removing the sort
    #[test]
    fn test_chunk_sorts() {
        let placements = vec![piece(3, 1, 1, 1), piece(0, 1, 2, 1), piece(2, 0, 1, 1)];
        let chunks = chunk_placements(placements, 1, 10);

        assert_eq!(chunks.len(), 2);
        let second: Vec<usize> = chunks.get(1).unwrap().iter().map(|p| p.x).collect();
        assert_eq!(second, vec![0, 3]);
        assert!(chunk_placements(Vec::new(), 1, 1).is_empty());
    }

    // Tests a 32x32 grid of 1x1 pieces yields 64 capped steps
    // Verified by ignoring the placement cap
    #[test]
    fn test_plan_large_single_section() {
        let set = unit_grid(32, 32);
        let result = plan(&set, &options(SectionMode::Single, 16, 2, 16));

        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.steps.len(), 64);
        assert!(result.steps.iter().all(|s| s.stats.placements == 16));

        let ids: Vec<usize> = result.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }

    // Tests every placement appears in exactly one step
    // Verified by duplicating the last chunk
    #[test]
    fn test_plan_partitions_placements() {
        let set = unit_grid(9, 7);
        let result = plan(&set, &options(SectionMode::Quadrants, 16, 3, 5));

        let mut seen: Vec<(usize, usize)> = result
            .steps
            .iter()
            .flat_map(|s| s.placements.iter().map(|p| (p.x, p.y)))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<(usize, usize)> =
            set.placements.iter().map(|p| (p.x, p.y)).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
        assert!(result.steps.iter().all(|s| s.placements.len() <= 5));
    }

    // Tests membership follows the placement origin
    // Verified by assigning by the far corner
    #[test]
    fn test_plan_origin_membership() {
        let set = PlacementSet {
            width: 4,
            height: 4,
            placements: vec![piece(0, 1, 4, 2), piece(0, 0, 4, 1), piece(0, 3, 4, 1)],
        };
        let result = plan(&set, &options(SectionMode::Rows, 2, 2, 16));

        assert_eq!(result.sections.len(), 2);
        let first_section: Vec<usize> = result
            .steps
            .iter()
            .filter(|s| s.section_id == 1)
            .flat_map(|s| s.placements.iter().map(|p| p.y))
            .collect();
        assert_eq!(first_section, vec![0, 1]);
    }

    // Tests sections without pieces are listed but produce no steps
    // Verified by emitting an empty step per section
    #[test]
    fn test_plan_empty_sections() {
        let set = PlacementSet {
            width: 4,
            height: 4,
            placements: vec![piece(0, 0, 2, 2)],
        };
        let result = plan(&set, &options(SectionMode::Quadrants, 16, 2, 16));

        assert_eq!(result.sections.len(), 4);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps.first().unwrap().section_id, 1);
    }

    // Tests step metadata, bounding box and part counts
    // Verified by using an exclusive bounding box
    #[test]
    fn test_step_metadata() {
        let set = PlacementSet {
            width: 6,
            height: 4,
            placements: vec![piece(0, 0, 4, 2), piece(4, 0, 2, 1), piece(4, 1, 2, 1)],
        };
        let result = plan(&set, &options(SectionMode::Single, 16, 2, 16));

        assert_eq!(result.steps.len(), 1);
        let step = result.steps.first().unwrap();
        assert_eq!(step.title, "Step 1");
        assert_eq!(step.description, "Rows 1-2");
        assert_eq!(step.index, 1);
        assert_eq!(step.stats.studs, 12);
        assert_eq!(
            step.bbox,
            Some(StepBounds {
                min_x: 0,
                min_y: 0,
                max_x: 5,
                max_y: 1,
            })
        );

        let counts: Vec<(&str, usize)> = step
            .parts_summary
            .iter()
            .map(|item| (item.shape_type.as_str(), item.count))
            .collect();
        assert_eq!(counts, vec![("1x2", 2), ("2x4", 1)]);
    }

    // Tests single-row steps are described by one row number
    // Verified by always printing a range
    #[test]
    fn test_step_single_row_description() {
        let set = unit_grid(3, 2);
        let result = plan(&set, &options(SectionMode::Single, 16, 1, 16));

        let descriptions: Vec<&str> = result.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Row 1", "Row 2"]);
        let indices: Vec<usize> = result.steps.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    // Tests planning an empty placement set
    // Verified by emitting a step for an empty section
    #[test]
    fn test_plan_empty() {
        let set = PlacementSet {
            width: 0,
            height: 0,
            placements: Vec::new(),
        };
        let result = plan(&set, &StepOptions::default());
        assert!(result.sections.is_empty());
        assert!(result.steps.is_empty());
    }
}
