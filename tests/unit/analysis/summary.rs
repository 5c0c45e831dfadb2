//! Tests for guide summaries and difficulty rating

#[cfg(test)]
mod tests {
    use brickplan::algorithm::tiling::Placement;
    use brickplan::analysis::summary::{Difficulty, summarize};
    use brickplan::spatial::Color;

    fn pieces(count: usize, colors: u8) -> Vec<Placement> {
        (0..count)
            .map(|i| Placement {
                x: i,
                y: 0,
                width: 1,
                height: 1,
                shape_type: if i % 2 == 0 { "1x1" } else { "1x2" }.to_string(),
                color: Color::rgb((i % usize::from(colors)) as u8, 0, 0),
            })
            .collect()
    }

    // Tests the rating thresholds are inclusive
    // Verified by using strict comparisons
    #[test]
    fn test_rate_thresholds() {
        assert_eq!(Difficulty::rate(800, 6), Difficulty::Beginner);
        assert_eq!(Difficulty::rate(801, 6), Difficulty::Intermediate);
        assert_eq!(Difficulty::rate(800, 7), Difficulty::Intermediate);
        assert_eq!(Difficulty::rate(2000, 12), Difficulty::Intermediate);
        assert_eq!(Difficulty::rate(2001, 1), Difficulty::Advanced);
        assert_eq!(Difficulty::rate(10, 13), Difficulty::Advanced);
    }

    // Tests labels and time estimates
    // Verified by swapping the intermediate and advanced estimates
    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!(Difficulty::Advanced.estimated_time(), "90+ min");
        assert_eq!(Difficulty::Intermediate.estimated_time(), "40-90 min");
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }

    // Tests summary counts distinct shapes and colors
    // Verified by counting placements instead of distinct colors
    #[test]
    fn test_summarize_counts() {
        let summary = summarize(&pieces(10, 3));

        assert_eq!(summary.total_bricks, 10);
        assert_eq!(summary.unique_types, 2);
        assert_eq!(summary.unique_colors, 3);
        assert_eq!(summary.difficulty, Difficulty::Beginner);
        assert_eq!(summary.estimated_time, "20-40 min");
    }

    // Tests large colorful builds are rated advanced
    // Verified by ignoring the color count
    #[test]
    fn test_summarize_advanced() {
        let summary = summarize(&pieces(50, 20));
        assert_eq!(summary.unique_colors, 20);
        assert_eq!(summary.difficulty, Difficulty::Advanced);
    }

    // Tests an empty build
    // Verified by rejecting empty input
    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_bricks, 0);
        assert_eq!(summary.unique_types, 0);
        assert_eq!(summary.difficulty, Difficulty::Beginner);
    }

    // Tests summaries serialize with camelCase keys
    // Verified by removing the serde rename
    #[test]
    fn test_summary_json() {
        let json = serde_json::to_value(summarize(&pieces(2, 1))).unwrap();
        assert_eq!(json["totalBricks"], 2);
        assert_eq!(json["difficulty"], "beginner");
        assert_eq!(json["estimatedTime"], "20-40 min");
    }
}
