//! Play order
//!
//! Found words are played highest score first, but words from the same
//! family (PLAY, PLAYER, PLAYERS) are kept together so the execution layer
//! can build each one from the last instead of starting over.

use super::anagram::AnagramWord;
use super::bites::WordBitesMove;
use super::grid::GridWord;
use crate::config::SCORE_THRESHOLD;
use std::cmp::Ordering;

/// Anything with a word and a point value
pub trait Scored {
    fn word(&self) -> &str;
    fn score(&self) -> u32;
}

impl Scored for GridWord {
    fn word(&self) -> &str {
        &self.word
    }

    fn score(&self) -> u32 {
        self.score
    }
}

impl Scored for AnagramWord {
    fn word(&self) -> &str {
        &self.word
    }

    fn score(&self) -> u32 {
        self.score
    }
}

impl Scored for WordBitesMove {
    fn word(&self) -> &str {
        &self.word
    }

    fn score(&self) -> u32 {
        self.score
    }
}

/// Length of the shared stem checked between two words
const STEM_LENGTH: usize = 4;

/// Whether two words look like members of one family
///
/// True for identical words, when one is a prefix of the other, or when
/// both have at least three letters and share their first
/// `min(4, shorter length)` letters. This is a heuristic: THINK/THINKER
/// match, so do unrelated words sharing four leading letters, while
/// UNTHINK/THINK do not.
///
/// # Examples
/// ```
/// use word_game_solver::solver::are_words_related;
///
/// assert!(are_words_related("PLAY", "PLAYERS"));
/// assert!(are_words_related("WALKING", "WALKER"));
/// assert!(!are_words_related("RUN", "WALK"));
/// assert!(!are_words_related("UNTHINK", "THINK"));
/// ```
#[must_use]
pub fn are_words_related(a: &str, b: &str) -> bool {
    if a == b || a.starts_with(b) || b.starts_with(a) {
        return true;
    }
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a < 3 || len_b < 3 {
        return false;
    }
    let stem = STEM_LENGTH.min(len_a).min(len_b);
    a.chars().take(stem).eq(b.chars().take(stem))
}

/// Highest score first, alphabetical among equals
fn by_score_desc<T: Scored>(a: &T, b: &T) -> Ordering {
    b.score().cmp(&a.score()).then_with(|| a.word().cmp(b.word()))
}

/// Shortest first, alphabetical among equals
fn by_length_then_word<T: Scored>(a: &T, b: &T) -> Ordering {
    a.word()
        .chars()
        .count()
        .cmp(&b.word().chars().count())
        .then_with(|| a.word().cmp(b.word()))
}

/// Order found words for play
///
/// Repeatedly seeds a group with the best remaining word, then pulls in
/// every remaining word related to a group member, as long as no unrelated
/// remaining word outscores it by more than `SCORE_THRESHOLD`. Each group
/// is played shortest word first.
///
/// # Examples
/// ```
/// use word_game_solver::solver::{Direction, Placement, WordBitesMove, optimize_order};
///
/// let at = Placement::new(Direction::Across, 0, 0);
/// let moves = vec![
///     WordBitesMove::new("PLAYER".to_string(), at, vec![]),
///     WordBitesMove::new("QUIZ".to_string(), at, vec![]),
///     WordBitesMove::new("PLAY".to_string(), at, vec![]),
/// ];
/// let words: Vec<String> = optimize_order(moves).into_iter().map(|m| m.word).collect();
/// assert_eq!(words, ["PLAY", "PLAYER", "QUIZ"]);
/// ```
#[must_use]
pub fn optimize_order<T: Scored>(moves: Vec<T>) -> Vec<T> {
    let mut pool = moves;
    pool.sort_by(by_score_desc);

    let mut ordered = Vec::with_capacity(pool.len());
    let mut groups = 0usize;

    while !pool.is_empty() {
        let mut group = vec![pool.remove(0)];

        loop {
            let related = |m: &T| group.iter().any(|g| are_words_related(g.word(), m.word()));
            let best_outsider = pool.iter().filter(|m| !related(*m)).map(Scored::score).max();
            let next = pool.iter().position(|m| {
                related(m)
                    && best_outsider.is_none_or(|best| best <= m.score() + SCORE_THRESHOLD)
            });
            match next {
                Some(idx) => group.push(pool.remove(idx)),
                None => break,
            }
        }

        group.sort_by(by_length_then_word);
        ordered.extend(group);
        groups += 1;
    }

    log::debug!("ordered {} words in {groups} groups", ordered.len());
    ordered
}
