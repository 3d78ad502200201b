#![forbid(unsafe_code)]

//! Per-column three-way comparison and click-to-toggle sort direction.
//!
//! `id` compares numerically, `name` and `description` lexicographically by
//! byte order. Equal keys compare equal: there is no secondary key, so a
//! stable sort keeps equal rows in their previous relative order.

use std::cmp::Ordering;
use std::fmt;

use super::store::Record;

/// Sortable column of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Name,
    Description,
}

impl SortColumn {
    /// All columns in display order.
    pub const ALL: [SortColumn; 3] = [Self::Id, Self::Name, Self::Description];

    /// Column at display position `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Id => 0,
            Self::Name => 1,
            Self::Description => 2,
        }
    }

    /// Header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Sort direction, equivalent to a `+1` / `-1` multiplier on the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `+1` for ascending, `-1` for descending.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// Direction for a multiplier; negative means descending, anything else
    /// ascending.
    #[must_use]
    pub const fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header arrow.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Ascending => '^',
            Self::Descending => 'v',
        }
    }

    /// Apply the direction to an ascending ordering.
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Three-way comparison of two records on one column, ascending.
#[must_use]
pub fn compare(a: &Record, b: &Record, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Description => a.description.cmp(&b.description),
    }
}

/// [`compare`] scaled by `direction`.
#[must_use]
pub fn compare_directed(
    a: &Record,
    b: &Record,
    column: SortColumn,
    direction: SortDirection,
) -> Ordering {
    direction.apply(compare(a, b, column))
}

/// Stored direction for one sort trigger.
///
/// Each trigger (a header row, a "sort by id" button) owns its own toggle.
/// [`advance`](Self::advance) returns the direction to use now and flips the
/// stored one for the next activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortToggle {
    next: SortDirection,
}

impl SortToggle {
    /// Toggle whose first activation sorts `first`.
    #[must_use]
    pub const fn starting(first: SortDirection) -> Self {
        Self { next: first }
    }

    /// Direction the next activation will use.
    #[must_use]
    pub const fn peek(&self) -> SortDirection {
        self.next
    }

    /// Take the current direction and flip the stored one.
    pub fn advance(&mut self) -> SortDirection {
        let now = self.next;
        self.next = now.toggled();
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, name: &str, description: &str) -> Record {
        Record::new(id, name, description)
    }

    #[test]
    fn column_index_roundtrip() {
        for col in SortColumn::ALL {
            assert_eq!(SortColumn::from_index(col.index()), Some(col));
        }
        assert_eq!(SortColumn::from_index(3), None);
    }

    #[test]
    fn titles() {
        assert_eq!(SortColumn::Id.to_string(), "ID");
        assert_eq!(SortColumn::Description.title(), "Description");
    }

    #[test]
    fn direction_sign() {
        assert_eq!(SortDirection::Ascending.sign(), 1);
        assert_eq!(SortDirection::Descending.sign(), -1);
        assert_eq!(SortDirection::from_sign(-1), SortDirection::Descending);
        assert_eq!(SortDirection::from_sign(1), SortDirection::Ascending);
        assert_eq!(SortDirection::from_sign(0), SortDirection::Ascending);
    }

    #[test]
    fn id_compares_numerically() {
        let a = rec(8, "x", "x");
        let b = rec(20, "x", "x");
        assert_eq!(compare(&a, &b, SortColumn::Id), Ordering::Less);
        assert_eq!(
            compare_directed(&a, &b, SortColumn::Id, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn text_compares_bytewise() {
        let a = rec(1, "B-Another", "bar");
        let b = rec(2, "a-lower", "bar");
        // Uppercase sorts before lowercase.
        assert_eq!(compare(&a, &b, SortColumn::Name), Ordering::Less);
        assert_eq!(compare(&a, &b, SortColumn::Description), Ordering::Equal);
        assert_eq!(
            compare_directed(&a, &b, SortColumn::Description, SortDirection::Descending),
            Ordering::Equal
        );
    }

    #[test]
    fn toggle_alternates() {
        let mut t = SortToggle::default();
        assert_eq!(t.advance(), SortDirection::Ascending);
        assert_eq!(t.advance(), SortDirection::Descending);
        assert_eq!(t.advance(), SortDirection::Ascending);
        assert_eq!(t.peek(), SortDirection::Descending);
    }

    #[test]
    fn toggle_can_start_descending() {
        let mut t = SortToggle::starting(SortDirection::Descending);
        assert_eq!(t.advance(), SortDirection::Descending);
        assert_eq!(t.peek(), SortDirection::Ascending);
    }
}
