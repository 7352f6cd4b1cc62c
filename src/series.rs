//! Labeled point-series collection.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{QuickplotError, Result};

/// A single (x, y) coordinate pair.
pub type Point = (f64, f64);

/// An ordered collection of named point series.
///
/// Labels keep the order in which they were first seen; each label owns an
/// ordered sequence of points. Series are append-only: points can be added
/// under a label but never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct SeriesCollection {
    labels: Vec<String>,
    series: HashMap<String, Vec<Point>>,
}

impl SeriesCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append points under a label, creating the series if the label is new.
    pub fn add_points<I>(&mut self, label: impl Into<String>, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        match self.series.entry(label.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().extend(points),
            Entry::Vacant(entry) => {
                self.labels.push(entry.key().clone());
                entry.insert(points.into_iter().collect());
            }
        }
    }

    /// Append a single point under a label.
    pub fn add_point(&mut self, label: impl Into<String>, point: Point) {
        self.add_points(label, [point]);
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Points recorded under a label.
    pub fn points(&self, label: &str) -> Result<&[Point]> {
        self.series
            .get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| QuickplotError::label_not_found(label))
    }

    /// Iterate over `(label, points)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Point])> {
        self.labels.iter().filter_map(|label| {
            self.series
                .get(label)
                .map(|points| (label.as_str(), points.as_slice()))
        })
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the collection holds no series.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L: Into<String>> Extend<(L, Vec<Point>)> for SeriesCollection {
    fn extend<T: IntoIterator<Item = (L, Vec<Point>)>>(&mut self, iter: T) {
        for (label, points) in iter {
            self.add_points(label, points);
        }
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<Point>)> for SeriesCollection {
    fn from_iter<T: IntoIterator<Item = (L, Vec<Point>)>>(iter: T) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<'a> IntoIterator for &'a SeriesCollection {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter().map(|label| label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_keep_first_seen_order() {
        let mut series = SeriesCollection::new();
        series.add_points("first", vec![(1.0, 10.0)]);
        series.add_points("second", vec![(2.0, 10.0)]);
        series.add_points("first", vec![(3.0, 10.0)]);
        series.add_point("third", (4.0, 10.0));
        series.add_point("second", (5.0, 10.0));

        assert_eq!(series.labels(), ["first", "second", "third"]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_add_points_concatenates_in_order() {
        let mut series = SeriesCollection::new();
        series.add_points("a", vec![(1.0, 10.0), (2.0, 11.0)]);
        series.add_points("a", vec![(2.0, 11.0), (-1.0, 17.0)]);

        assert_eq!(
            series.points("a").unwrap(),
            [(1.0, 10.0), (2.0, 11.0), (2.0, 11.0), (-1.0, 17.0)]
        );
    }

    #[test]
    fn test_add_point_appends_single_pair() {
        let mut series = SeriesCollection::new();
        series.add_points("a", vec![(1.0, 10.0)]);
        series.add_point("a", (100.0, 102.0));

        assert_eq!(series.points("a").unwrap(), [(1.0, 10.0), (100.0, 102.0)]);
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let series = SeriesCollection::new();
        let err = series.points("z").unwrap_err();

        assert!(matches!(
            err,
            QuickplotError::LabelNotFound { ref label } if label == "z"
        ));
    }

    #[test]
    fn test_seeded_construction_merges_duplicates() {
        let series: SeriesCollection = [
            ("a", vec![(1.0, 10.0)]),
            ("b", vec![(2.0, 10.0)]),
            ("a", vec![(2.0, 11.0)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.labels(), ["a", "b"]);
        assert_eq!(series.points("a").unwrap(), [(1.0, 10.0), (2.0, 11.0)]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut series = SeriesCollection::new();
        series.add_point("a", (1.0, 10.0));
        series.add_point("b", (2.0, 10.0));

        let first: Vec<&str> = (&series).into_iter().collect();
        let second: Vec<&str> = (&series).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, ["a", "b"]);

        let pairs: Vec<(&str, &[Point])> = series.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[1].1, [(2.0, 10.0)]);
    }

    #[test]
    fn test_empty_collection() {
        let series = SeriesCollection::new();
        assert!(series.is_empty());
        assert!(series.labels().is_empty());
        assert_eq!(series.iter().count(), 0);
    }
}
