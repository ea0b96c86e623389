//! Pattern scores for the per-cell heuristic
//!
//! Scores are added to an empty cell for each of the four orientations
//! through it. The `Black*` values reward cells next to the human's lines;
//! the `White*` values reward cells next to the AI's own lines.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Human (Black) lines adjacent to the cell
    /// One black stone next to the cell
    pub const BLACK_ONE: i32 = 10;
    /// Three black stones, one open end
    pub const BLACK_THREE_CLOSED: i32 = 30;
    /// Three black stones, both ends open
    pub const BLACK_THREE_OPEN: i32 = 40;
    /// Four black stones: playing here blocks a five
    pub const BLACK_FOUR: i32 = 20_000;

    // AI (White) lines adjacent to the cell
    /// No white stone along this orientation
    pub const WHITE_NONE: i32 = 5;
    /// One white stone next to the cell
    pub const WHITE_ONE: i32 = 10;
    /// Three white stones, one open end
    pub const WHITE_THREE_CLOSED: i32 = 25;
    /// Three white stones, both ends open
    pub const WHITE_THREE_OPEN: i32 = 50;
    /// Four or more white stones: playing here makes five
    pub const WHITE_FOUR: i32 = 30_000;
}

/// Score for the black stones and open ends counted along one orientation.
///
/// Two stones, or more than four, add nothing.
#[inline]
pub fn black_line_score(stones: u32, empties: u32) -> i32 {
    match (stones, empties) {
        (1, _) => PatternScore::BLACK_ONE,
        (3, 1) => PatternScore::BLACK_THREE_CLOSED,
        (3, 2) => PatternScore::BLACK_THREE_OPEN,
        (4, _) => PatternScore::BLACK_FOUR,
        _ => 0,
    }
}

/// Score for the white stones and open ends counted along one orientation.
#[inline]
pub fn white_line_score(stones: u32, empties: u32) -> i32 {
    match (stones, empties) {
        (0, _) => PatternScore::WHITE_NONE,
        (1, _) => PatternScore::WHITE_ONE,
        (3, 1) => PatternScore::WHITE_THREE_CLOSED,
        (3, 2) => PatternScore::WHITE_THREE_OPEN,
        (4.., _) => PatternScore::WHITE_FOUR,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_line_score_table() {
        assert_eq!(black_line_score(0, 2), 0);
        assert_eq!(black_line_score(1, 0), 10);
        assert_eq!(black_line_score(2, 2), 0);
        assert_eq!(black_line_score(3, 0), 0);
        assert_eq!(black_line_score(3, 1), 30);
        assert_eq!(black_line_score(3, 2), 40);
        assert_eq!(black_line_score(4, 0), 20_000);
        // Only exactly four counts for the human side
        assert_eq!(black_line_score(5, 1), 0);
    }

    #[test]
    fn test_white_line_score_table() {
        assert_eq!(white_line_score(0, 0), 5);
        assert_eq!(white_line_score(1, 2), 10);
        assert_eq!(white_line_score(2, 1), 0);
        assert_eq!(white_line_score(3, 0), 0);
        assert_eq!(white_line_score(3, 1), 25);
        assert_eq!(white_line_score(3, 2), 50);
        assert_eq!(white_line_score(4, 0), 30_000);
        assert_eq!(white_line_score(7, 1), 30_000);
    }

    #[test]
    fn test_completing_five_outranks_blocking_five() {
        assert!(PatternScore::WHITE_FOUR > PatternScore::BLACK_FOUR);
    }
}
