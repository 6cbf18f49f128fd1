//! Word scoring
//!
//! All three game modes pay out by word length. Lengths 3-16 come from the
//! in-game table; anything else falls back to `400 * (length - 2)`.

/// Points per word length for lengths 3 through 16
const SCORE_TABLE: [(usize, u32); 14] = [
    (3, 100),
    (4, 400),
    (5, 800),
    (6, 1400),
    (7, 1800),
    (8, 2200),
    (9, 2600),
    (10, 3000),
    (11, 3400),
    (12, 3800),
    (13, 4200),
    (14, 4600),
    (15, 5000),
    (16, 5400),
];

/// Points awarded per letter beyond the second, for lengths outside the table
const POINTS_PER_EXTRA_LETTER: u32 = 400;

/// Score a word by its length in letters
///
/// # Examples
/// ```
/// use word_game_solver::core::score_for_length;
///
/// assert_eq!(score_for_length(3), 100);
/// assert_eq!(score_for_length(6), 1400);
/// assert_eq!(score_for_length(20), 7200);
/// ```
#[must_use]
pub fn score_for_length(length: usize) -> u32 {
    SCORE_TABLE
        .iter()
        .find(|&&(len, _)| len == length)
        .map_or_else(
            // Lengths 0-2 never reach the board; clamp rather than go negative
            || POINTS_PER_EXTRA_LETTER * length.saturating_sub(2) as u32,
            |&(_, points)| points,
        )
}

/// Score a single word
#[inline]
#[must_use]
pub fn score(word: &str) -> u32 {
    score_for_length(word.chars().count())
}

/// Total score for a collection of words
pub fn total_score<'a, I>(words: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 100)]
    #[case(4, 400)]
    #[case(5, 800)]
    #[case(6, 1400)]
    #[case(9, 2600)]
    #[case(16, 5400)]
    #[case(17, 6000)]
    #[case(20, 7200)]
    fn known_lengths(#[case] length: usize, #[case] expected: u32) {
        assert_eq!(score_for_length(length), expected);
    }

    #[test]
    fn table_trails_formula_by_200_from_six_up() {
        for &(length, points) in SCORE_TABLE.iter().filter(|(len, _)| *len >= 6) {
            assert_eq!(points + 200, POINTS_PER_EXTRA_LETTER * (length as u32 - 2), "{length}");
        }
        // Past the table the formula applies as is
        assert_eq!(score_for_length(17), 6000);
        assert_eq!(score_for_length(20), 7200);
    }

    #[test]
    fn short_lengths_are_bonus_exceptions() {
        // 3-5 letter words do not follow the linear formula
        assert_ne!(score_for_length(3), 400);
        assert_ne!(score_for_length(4), 800);
        assert_ne!(score_for_length(5), 1200);
    }

    #[test]
    fn degenerate_lengths_clamp_to_zero() {
        assert_eq!(score_for_length(2), 0);
        assert_eq!(score_for_length(0), 0);
    }

    #[test]
    fn score_counts_letters() {
        assert_eq!(score("cat"), 100);
        assert_eq!(score("LISTEN"), 1400);
    }

    #[test]
    fn total_score_sums_words() {
        assert_eq!(total_score(["CAT", "LIST", "LISTEN"]), 100 + 400 + 1400);
        assert_eq!(total_score(std::iter::empty()), 0);
    }
}
