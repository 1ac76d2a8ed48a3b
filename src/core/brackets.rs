//! Lazy bracket matching within a single row segment
//!
//! A lazy match pairs a bracket with the *nearest* partner in the search
//! direction and ignores nesting: in `{a{b}c}` the outer `{` pairs with the
//! first `}`. Matches never cross from one column segment into the other,
//! because callers only ever hand in one segment.

/// Bracket pairs as (opening, closing)
pub const PAIRS: [(char, char); 4] = [('{', '}'), ('[', ']'), ('<', '>'), ('(', ')')];

/// Inclusive range of offsets inside one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of cells covered, both ends included
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.end - self.start + 1
    }
}

/// Closing partner of an opening bracket
#[must_use]
pub fn closing_for(c: char) -> Option<char> {
    PAIRS.iter().find(|&&(open, _)| open == c).map(|&(_, close)| close)
}

/// Opening partner of a closing bracket
#[must_use]
pub fn opening_for(c: char) -> Option<char> {
    PAIRS.iter().find(|&&(_, close)| close == c).map(|&(open, _)| open)
}

/// Whether `c` is any of the recognised brackets
#[must_use]
pub fn is_bracket(c: char) -> bool {
    closing_for(c).is_some() || opening_for(c).is_some()
}

/// Find the lazy match for the bracket at `position` in `segment`
///
/// Returns the inclusive span `(start, end)`, or `None` when the character is
/// not a bracket, has no partner in the search direction, or `position` is out
/// of range.
///
/// # Examples
/// ```
/// use hexhack::core::brackets::{Span, find_lazy_match};
///
/// let row: Vec<char> = "{abc}".chars().collect();
/// assert_eq!(find_lazy_match(&row, 0), Some(Span::new(0, 4)));
/// assert_eq!(find_lazy_match(&row, 4), Some(Span::new(0, 4)));
/// assert_eq!(find_lazy_match(&row, 2), None);
/// ```
#[must_use]
pub fn find_lazy_match(segment: &[char], position: usize) -> Option<Span> {
    let &c = segment.get(position)?;

    if let Some(close) = closing_for(c) {
        return segment[position + 1..]
            .iter()
            .position(|&x| x == close)
            .map(|i| Span::new(position, position + 1 + i));
    }

    let open = opening_for(c)?;
    segment[..position]
        .iter()
        .rposition(|&x| x == open)
        .map(|i| Span::new(i, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn simple_pair_matches_from_both_ends() {
        let row = chars("{abc}");
        assert_eq!(find_lazy_match(&row, 0), Some(Span::new(0, 4)));
        assert_eq!(find_lazy_match(&row, 4), Some(Span::new(0, 4)));
    }

    #[test]
    fn nested_open_takes_nearest_closer() {
        let row = chars("{a{b}c}");
        // Not (0, 6): nesting is ignored
        assert_eq!(find_lazy_match(&row, 0), Some(Span::new(0, 4)));
        assert_eq!(find_lazy_match(&row, 2), Some(Span::new(2, 4)));
    }

    #[test]
    fn nested_close_takes_nearest_opener() {
        let row = chars("{a{b}c}");
        assert_eq!(find_lazy_match(&row, 6), Some(Span::new(2, 6)));
        assert_eq!(find_lazy_match(&row, 4), Some(Span::new(2, 4)));
    }

    #[test]
    fn intervening_closers_are_skipped_backwards() {
        let row = chars("(x))");
        assert_eq!(find_lazy_match(&row, 3), Some(Span::new(0, 3)));
    }

    #[test]
    fn mixed_types_do_not_pair() {
        let row = chars("(]<}");
        for pos in 0..row.len() {
            assert_eq!(find_lazy_match(&row, pos), None, "position {pos}");
        }
    }

    #[test]
    fn all_pair_types_match() {
        for (open, close) in PAIRS {
            let row = vec![open, '.', close];
            assert_eq!(find_lazy_match(&row, 0), Some(Span::new(0, 2)));
            assert_eq!(find_lazy_match(&row, 2), Some(Span::new(0, 2)));
        }
    }

    #[test]
    fn unmatched_bracket_has_no_span() {
        assert_eq!(find_lazy_match(&chars("..{.."), 2), None);
        assert_eq!(find_lazy_match(&chars(">...."), 0), None);
        assert_eq!(find_lazy_match(&chars("....<"), 4), None);
    }

    #[test]
    fn non_bracket_and_out_of_range() {
        let row = chars("a{}");
        assert_eq!(find_lazy_match(&row, 0), None);
        assert_eq!(find_lazy_match(&row, 3), None);
        assert_eq!(find_lazy_match(&[], 0), None);
    }

    #[test]
    fn adjacent_pair_spans_two_cells() {
        let span = find_lazy_match(&chars("[]"), 1).unwrap();
        assert_eq!(span, Span::new(0, 1));
        assert_eq!(span.width(), 2);
    }

    #[test]
    fn bracket_classification() {
        for c in ['{', '}', '[', ']', '<', '>', '(', ')'] {
            assert!(is_bracket(c));
        }
        for c in ['a', ' ', '.', '/', '|'] {
            assert!(!is_bracket(c));
        }
        assert_eq!(closing_for('<'), Some('>'));
        assert_eq!(opening_for(')'), Some('('));
        assert_eq!(closing_for(')'), None);
    }
}
