//! Per-digit player notes
//!
//! Annotations are a scratchpad. Nothing in scoring reads them and guesses never
//! update them; only explicit toggles do.

use std::fmt;

/// Player's tag for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitMark {
    #[default]
    Unknown,
    /// In the secret, position worked out
    InKnownPosition,
    /// In the secret, position not yet known
    InUnknownPosition,
    NotPresent,
}

impl DigitMark {
    /// All tags in toggle order
    pub const CYCLE: [Self; 4] = [
        Self::Unknown,
        Self::InKnownPosition,
        Self::InUnknownPosition,
        Self::NotPresent,
    ];

    /// The tag that follows this one, wrapping back to `Unknown`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown => Self::InKnownPosition,
            Self::InKnownPosition => Self::InUnknownPosition,
            Self::InUnknownPosition => Self::NotPresent,
            Self::NotPresent => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::InKnownPosition => "in, known position",
            Self::InUnknownPosition => "in, unknown position",
            Self::NotPresent => "not in",
        }
    }
}

impl fmt::Display for DigitMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tags for digits 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotations {
    marks: [DigitMark; 10],
}

impl Annotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tag for `digit`, or `None` if it is above 9
    #[inline]
    #[must_use]
    pub fn get(&self, digit: u8) -> Option<DigitMark> {
        self.marks.get(usize::from(digit)).copied()
    }

    /// Advance the tag for `digit` and return the new tag
    ///
    /// Digits above 9 leave every tag untouched and return `None`.
    pub fn toggle(&mut self, digit: u8) -> Option<DigitMark> {
        let mark = self.marks.get_mut(usize::from(digit))?;
        *mark = mark.next();
        Some(*mark)
    }

    /// Set every digit back to `Unknown`
    pub fn reset(&mut self) {
        self.marks = [DigitMark::Unknown; 10];
    }

    /// Iterate `(digit, tag)` pairs in digit order
    pub fn iter(&self) -> impl Iterator<Item = (u8, DigitMark)> + '_ {
        (0u8..).zip(self.marks.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotations_start_unknown() {
        let annotations = Annotations::new();
        assert_eq!(annotations.iter().count(), 10);
        assert!(annotations.iter().all(|(_, m)| m == DigitMark::Unknown));
    }

    #[test]
    fn four_toggles_visit_cycle_and_return() {
        let mut annotations = Annotations::new();
        let mut visited = vec![annotations.get(5).unwrap()];
        for _ in 0..3 {
            visited.push(annotations.toggle(5).unwrap());
        }
        assert_eq!(visited, DigitMark::CYCLE);

        assert_eq!(annotations.toggle(5), Some(DigitMark::Unknown));
    }

    #[test]
    fn toggle_touches_only_one_digit() {
        let mut annotations = Annotations::new();
        annotations.toggle(3);
        annotations.toggle(3);

        for (digit, mark) in annotations.iter() {
            if digit == 3 {
                assert_eq!(mark, DigitMark::InUnknownPosition);
            } else {
                assert_eq!(mark, DigitMark::Unknown);
            }
        }
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut annotations = Annotations::new();
        assert_eq!(annotations.toggle(10), None);
        assert_eq!(annotations.get(10), None);
        assert_eq!(annotations, Annotations::new());
    }

    #[test]
    fn reset_clears_marks() {
        let mut annotations = Annotations::new();
        annotations.toggle(0);
        annotations.toggle(9);
        annotations.reset();
        assert_eq!(annotations, Annotations::new());
    }

    #[test]
    fn next_wraps() {
        assert_eq!(DigitMark::NotPresent.next(), DigitMark::Unknown);
        for mark in DigitMark::CYCLE {
            let mut m = mark;
            for _ in 0..4 {
                m = m.next();
            }
            assert_eq!(m, mark);
        }
    }
}
