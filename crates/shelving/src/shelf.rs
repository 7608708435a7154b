use serde::{Serialize, Serializer};

use spicerack_core::{BucketCounts, Letter, ValueObject};

/// An inclusive run of letters, rendered `"A"` or `"A-F"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LetterRange {
    start: Letter,
    end: Letter,
}

impl LetterRange {
    /// `None` if `end` comes before `start`.
    pub fn new(start: Letter, end: Letter) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn full() -> Self {
        Self {
            start: Letter::A,
            end: Letter::Z,
        }
    }

    pub fn start(&self) -> Letter {
        self.start
    }

    pub fn end(&self) -> Letter {
        self.end
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.start <= letter && letter <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.index() - self.start.index() + 1
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> {
        let (start, end) = (self.start.index(), self.end.index());
        Letter::all().skip(start).take(end - start + 1)
    }
}

impl ValueObject for LetterRange {}

impl core::fmt::Display for LetterRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl Serialize for LetterRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One shelf of a distribution.
///
/// `letters` are the populated letters stored on the shelf (ascending and
/// contiguous among populated letters); `range` is the label span, which also
/// absorbs neighbouring empty letters so that all shelves together cover A-Z.
/// A shelf may have no letters at all when there are more shelves than
/// populated letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shelf {
    letters: Vec<Letter>,
    range: LetterRange,
}

impl Shelf {
    pub(crate) fn new(letters: Vec<Letter>, range: LetterRange) -> Self {
        debug_assert!(letters.iter().all(|&l| range.contains(l)));
        Self { letters, range }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn range(&self) -> LetterRange {
        self.range
    }

    /// Display label, e.g. `"C"` or `"D-Z"`.
    pub fn label(&self) -> String {
        self.range.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Jars on this shelf according to `counts`.
    pub fn count(&self, counts: &BucketCounts) -> u64 {
        counts.sum_over(self.letters.iter().copied())
    }
}

impl ValueObject for Shelf {}

/// Display projection of a shelf: its label and how many jars it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfInfo {
    pub range: String,
    pub count: u64,
}

impl ValueObject for ShelfInfo {}

/// Project shelves for display. Counts always sum to `counts.total()` when
/// `shelves` came from distributing the same `counts`.
pub fn summarize(shelves: &[Shelf], counts: &BucketCounts) -> Vec<ShelfInfo> {
    shelves
        .iter()
        .map(|shelf| ShelfInfo {
            range: shelf.label(),
            count: shelf.count(counts),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn single_letter_range_renders_alone() {
        let r = LetterRange::new(l('C'), l('C')).unwrap();
        assert_eq!(r.to_string(), "C");
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn multi_letter_range_renders_with_dash() {
        let r = LetterRange::new(l('D'), l('Z')).unwrap();
        assert_eq!(r.to_string(), "D-Z");
        assert_eq!(r.len(), 23);
        assert_eq!(r.letters().count(), 23);
        assert!(r.contains(l('M')));
        assert!(!r.contains(l('C')));
        assert_eq!(LetterRange::full().to_string(), "A-Z");
    }

    #[test]
    fn backwards_range_is_rejected() {
        assert!(LetterRange::new(l('D'), l('B')).is_none());
    }

    #[test]
    fn summarize_counts_letters_on_each_shelf() {
        let counts = BucketCounts::from_pairs([(l('B'), 2), (l('C'), 3)]);
        let shelves = vec![
            Shelf::new(vec![l('B')], LetterRange::new(l('A'), l('B')).unwrap()),
            Shelf::new(vec![l('C')], LetterRange::new(l('C'), l('Z')).unwrap()),
        ];

        let info = summarize(&shelves, &counts);
        assert_eq!(
            info,
            vec![
                ShelfInfo { range: "A-B".into(), count: 2 },
                ShelfInfo { range: "C-Z".into(), count: 3 },
            ]
        );
    }

    #[test]
    fn shelf_serializes_letters_and_label() {
        let shelf = Shelf::new(vec![l('B')], LetterRange::new(l('A'), l('B')).unwrap());
        let json = serde_json::to_value(&shelf).unwrap();
        assert_eq!(json, serde_json::json!({ "letters": ["B"], "range": "A-B" }));
    }
}
