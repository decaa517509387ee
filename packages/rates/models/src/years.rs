//! The closed range of years covered by the dataset.

/// First year of the default focus range.
pub const FIRST_YEAR: u16 = 2000;

/// Last year of the default focus range.
pub const LAST_YEAR: u16 = 2023;

/// A closed, non-empty range of calendar years.
///
/// Only [`YearRange::new`] and [`Default`] construct one, so `first <= last`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    first: u16,
    last: u16,
}

impl YearRange {
    /// Creates a range, returning `None` if `first > last`.
    #[must_use]
    pub const fn new(first: u16, last: u16) -> Option<Self> {
        if first > last {
            None
        } else {
            Some(Self { first, last })
        }
    }

    /// First year in the range.
    #[must_use]
    pub const fn first(self) -> u16 {
        self.first
    }

    /// Last year in the range.
    #[must_use]
    pub const fn last(self) -> u16 {
        self.last
    }

    /// Number of years in the range.
    #[must_use]
    pub const fn len(self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always `false`; a range holds at least one year.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `year` lies inside the range.
    #[must_use]
    pub const fn contains(self, year: u16) -> bool {
        year >= self.first && year <= self.last
    }

    /// Clamps `year` into the range.
    #[must_use]
    pub fn clamp(self, year: u16) -> u16 {
        year.clamp(self.first, self.last)
    }

    /// The year after `year`, wrapping from the last year back to the first.
    #[must_use]
    pub fn next_wrapping(self, year: u16) -> u16 {
        if year >= self.last {
            self.first
        } else {
            self.clamp(year + 1)
        }
    }

    /// Zero-based offset of `year` from the first year.
    #[must_use]
    pub fn offset(self, year: u16) -> Option<usize> {
        self.contains(year).then(|| usize::from(year - self.first))
    }

    /// Iterates the years in ascending order.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = u16> + ExactSizeIterator {
        self.first..=self.last
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: FIRST_YEAR,
            last: LAST_YEAR,
        }
    }
}
