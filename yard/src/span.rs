/// A range of chars inside the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// inclusive
    pub start: usize,
    /// exclusive
    pub end: usize,
}

impl Span {
    pub const fn of(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn pos(pos: usize) -> Self {
        Self::of(pos, pos + 1)
    }

    pub const fn across(a: Self, b: Self) -> Self {
        Self::of(a.start, b.end)
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn intersects(&self, other: &Self) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }

    pub const fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}
