use std::ops::Range;

/// A half-open byte range into a source.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

pub trait AsSpan {
    fn as_span(&self) -> Span;
}

impl AsSpan for Span {
    fn as_span(&self) -> Span {
        *self
    }
}

impl AsSpan for Range<usize> {
    fn as_span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::{AsSpan, Span};

    #[test]
    fn empty_span() {
        let span = Span::empty(4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn union_covers_both() {
        assert_eq!(Span::new(3, 5).union(Span::new(1, 2)), Span::new(1, 5));
        assert_eq!((2..9).as_span().union(Span::new(4, 6)), Span::new(2, 9));
    }
}
