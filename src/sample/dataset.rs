//! The dataset abstraction the tree grower works on.
use fixedbitset::FixedBitSet;

use std::sync::Arc;

use crate::common::{entropy_of, DatasetError, LogBase};
use crate::tree::ActionLeaf;
use super::attribute::{Attribute, Action};
use super::record::Record;


/// A collection of records together with
/// the attributes already used for splitting
/// on the path from the root to the current node.
///
/// Records are shared between a dataset and its filtered children;
/// each dataset only owns the indices of the records it contains.
/// A `Dataset` is never mutated after construction,
/// [`Dataset::filter`] always returns a new one.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
    indices: Vec<usize>,
    filtered_on: FixedBitSet,
}


impl Dataset {
    /// Construct a dataset that has not been filtered on any attribute.
    pub fn new<I>(records: I) -> Self
        where I: IntoIterator<Item = Record>,
    {
        Self::from_parts(records, [])
    }


    /// Construct a dataset that behaves as if it had already been
    /// filtered on the given attributes.
    /// Duplicated attributes are counted once.
    pub fn from_parts<I, A>(records: I, filtered_on: A) -> Self
        where I: IntoIterator<Item = Record>,
              A: IntoIterator<Item = Attribute>,
    {
        let records = records.into_iter().collect::<Arc<[Record]>>();
        let indices = (0..records.len()).collect();

        let mut bits = FixedBitSet::with_capacity(Attribute::ALL.len());
        for attribute in filtered_on {
            bits.insert(attribute.index());
        }

        Self { records, indices, filtered_on: bits }
    }


    /// Returns the number of records.
    #[inline]
    pub fn size(&self) -> usize {
        self.indices.len()
    }


    /// Returns `true` if this dataset has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }


    /// Returns the `i`-th record of this dataset.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Record> {
        self.indices.get(i).map(|&ix| &self.records[ix])
    }


    /// Iterates over the records of this dataset in input order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.indices.iter().map(|&ix| &self.records[ix])
    }


    /// Returns `true` if `attribute` was used for splitting
    /// on the path to this dataset.
    #[inline]
    pub fn is_filtered_on(&self, attribute: Attribute) -> bool {
        self.filtered_on.contains(attribute.index())
    }


    /// Iterates over the attributes already filtered on.
    pub fn filtered_on(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter()
            .filter(|&attribute| self.is_filtered_on(attribute))
    }


    /// Returns `true` if every attribute was already filtered on.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.filtered_on.count_ones(..) == Attribute::ALL.len()
    }


    /// Iterates over the attributes not yet filtered on,
    /// in the tie-breaking order of [`Attribute::PRIORITY`].
    pub fn remaining_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::PRIORITY.into_iter()
            .filter(|&attribute| !self.is_filtered_on(attribute))
    }


    /// Returns the action shared by every record,
    /// or `None` if the records disagree or there are none.
    pub fn shared_action(&self) -> Option<Action> {
        let first = self.get(0)?.action();
        self.records()
            .all(|record| record.action() == first)
            .then_some(first)
    }


    /// Returns `true` if every record has the action of the first record.
    pub fn try_all_same_action(&self) -> Result<bool, DatasetError> {
        if self.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        Ok(self.shared_action().is_some())
    }


    /// Returns `true` if every record has the action of the first record.
    ///
    /// # Panics
    /// Panics if the dataset is empty.
    pub fn all_same_action(&self) -> bool {
        self.try_all_same_action()
            .unwrap_or_else(|err| panic!("{err}"))
    }


    /// Returns the fraction of records labeled `action`.
    /// An empty dataset yields `0`.
    pub fn proportion_of_action(&self, action: Action) -> f64 {
        if self.is_empty() { return 0f64; }

        let count = self.records()
            .filter(|record| record.action() == action)
            .count();
        count as f64 / self.size() as f64
    }


    /// Returns the fraction of records whose `attribute` equals `value`.
    /// An empty dataset yields `0`.
    pub fn proportion_of_attribute(&self, attribute: Attribute, value: bool)
        -> f64
    {
        if self.is_empty() { return 0f64; }

        let count = self.records()
            .filter(|record| record.value(attribute) == value)
            .count();
        count as f64 / self.size() as f64
    }


    /// Returns the records whose `attribute` equals `value`.
    /// The result is filtered on `attribute`
    /// in addition to the attributes of `self`.
    pub fn filter(&self, attribute: Attribute, value: bool) -> Self {
        let indices = self.indices.iter()
            .copied()
            .filter(|&ix| self.records[ix].value(attribute) == value)
            .collect();

        let mut filtered_on = self.filtered_on.clone();
        filtered_on.insert(attribute.index());

        Self {
            records: Arc::clone(&self.records),
            indices,
            filtered_on,
        }
    }


    /// Entropy of the action labels with the default logarithm base.
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.entropy_with(LogBase::default())
    }


    /// Entropy of the action labels, `-Σ p log_b(p)`.
    pub fn entropy_with(&self, base: LogBase) -> f64 {
        let proportions = Action::ALL.into_iter()
            .map(|action| self.proportion_of_action(action));
        entropy_of(proportions, base)
    }


    /// Information gain of splitting on `attribute`
    /// with the default logarithm base.
    #[inline]
    pub fn information_gain(&self, attribute: Attribute) -> f64 {
        self.information_gain_with(attribute, LogBase::default())
    }


    /// Expected reduction of entropy when splitting on `attribute`.
    pub fn information_gain_with(&self, attribute: Attribute, base: LogBase)
        -> f64
    {
        let pt = self.proportion_of_attribute(attribute, true);
        let pf = self.proportion_of_attribute(attribute, false);

        let ht = self.filter(attribute, true).entropy_with(base);
        let hf = self.filter(attribute, false).entropy_with(base);

        self.entropy_with(base) - pt * ht - pf * hf
    }


    /// Returns the remaining attribute with the largest information gain.
    /// Ties go to the attribute listed first in [`Attribute::PRIORITY`].
    pub fn try_best_criteria_with(&self, base: LogBase)
        -> Result<Attribute, DatasetError>
    {
        let mut best: Option<(Attribute, f64)> = None;
        for attribute in self.remaining_attributes() {
            let gain = self.information_gain_with(attribute, base);
            if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((attribute, gain));
            }
        }

        best.map(|(attribute, _)| attribute)
            .ok_or(DatasetError::NoRemainingAttributes)
    }


    /// Same as [`Dataset::try_best_criteria_with`]
    /// with the default logarithm base.
    #[inline]
    pub fn try_best_criteria(&self) -> Result<Attribute, DatasetError> {
        self.try_best_criteria_with(LogBase::default())
    }


    /// Returns the remaining attribute with the largest information gain.
    ///
    /// # Panics
    /// Panics if every attribute was already filtered on.
    pub fn best_criteria_with(&self, base: LogBase) -> Attribute {
        self.try_best_criteria_with(base)
            .unwrap_or_else(|err| panic!("{err}"))
    }


    /// Same as [`Dataset::best_criteria_with`]
    /// with the default logarithm base.
    #[inline]
    pub fn best_criteria(&self) -> Attribute {
        self.best_criteria_with(LogBase::default())
    }


    /// Returns a leaf whose probabilities are
    /// the action proportions of this dataset.
    /// Actions that never occur are left out.
    ///
    /// # Panics
    /// Panics if the dataset is empty.
    pub fn randomize_remaining_actions(&self) -> ActionLeaf {
        assert!(!self.is_empty(), "{}", DatasetError::EmptyDataset);

        let proportions = Action::ALL.into_iter()
            .map(|action| (action, self.proportion_of_action(action)));
        ActionLeaf::from_proportions(proportions)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn sample() -> Dataset {
        Dataset::new([
            Record::new(true,  true,  false, false, Action::Chase),
            Record::new(true,  true,  true,  false, Action::Chase),
            Record::new(true,  false, false, false, Action::CollectCoin),
            Record::new(false, false, false, true,  Action::ChangeRoom),
            Record::new(false, false, true,  false, Action::RoamRoom),
            Record::new(true,  false, true,  true,  Action::CollectCoin),
        ])
    }

    #[test]
    fn test_size_and_get() {
        let dataset = sample();
        assert_eq!(dataset.size(), 6);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.get(2).unwrap().action(), Action::CollectCoin);
        assert!(dataset.get(6).is_none());
    }

    #[test]
    fn test_proportions() {
        let dataset = sample();
        let p = dataset.proportion_of_action(Action::Chase);
        assert!((p - 2.0 / 6.0).abs() < TOLERANCE, "got {p}");

        let p = dataset.proportion_of_attribute(Attribute::CoinsInRoom, true);
        assert!((p - 4.0 / 6.0).abs() < TOLERANCE, "got {p}");
    }

    #[test]
    fn test_proportions_of_empty_dataset() {
        let dataset = Dataset::new([]);
        assert_eq!(dataset.proportion_of_action(Action::Chase), 0.0);
        assert_eq!(
            dataset.proportion_of_attribute(Attribute::CloseToChar, true),
            0.0
        );
        assert_eq!(dataset.entropy(), 0.0);
    }

    #[test]
    fn test_filter_keeps_parent_untouched() {
        let dataset = sample();
        let close = dataset.filter(Attribute::CloseToChar, true);

        assert_eq!(close.size(), 2);
        assert!(close.records().all(|r| r.value(Attribute::CloseToChar)));
        assert!(close.is_filtered_on(Attribute::CloseToChar));

        assert_eq!(dataset.size(), 6);
        assert!(!dataset.is_filtered_on(Attribute::CloseToChar));
    }

    #[test]
    fn test_filtered_on_accumulates() {
        let dataset = sample()
            .filter(Attribute::CloseToChar, false)
            .filter(Attribute::FiveSecondRoom, false);
        let filtered = dataset.filtered_on().collect::<Vec<_>>();
        assert_eq!(
            filtered,
            vec![Attribute::CloseToChar, Attribute::FiveSecondRoom]
        );
        let remaining = dataset.remaining_attributes().collect::<Vec<_>>();
        assert_eq!(
            remaining,
            vec![Attribute::CoinsInRoom, Attribute::FiveCoinsSince]
        );
        assert!(!dataset.is_exhausted());
    }

    #[test]
    fn test_all_same_action() {
        let dataset = sample();
        assert!(!dataset.all_same_action());
        assert!(dataset.filter(Attribute::CloseToChar, true).all_same_action());
        assert_eq!(
            dataset.filter(Attribute::CloseToChar, true).shared_action(),
            Some(Action::Chase)
        );
    }

    #[test]
    fn test_all_same_action_on_empty_dataset() {
        let dataset = Dataset::new([]);
        assert_eq!(
            dataset.try_all_same_action(),
            Err(DatasetError::EmptyDataset)
        );
        assert_eq!(dataset.shared_action(), None);
    }

    #[test]
    #[should_panic(expected = "no records")]
    fn test_all_same_action_panics_on_empty_dataset() {
        Dataset::new([]).all_same_action();
    }

    #[test]
    fn test_entropy_of_two_equal_actions() {
        let dataset = Dataset::new([
            Record::new(true, true, true, true, Action::Chase),
            Record::new(true, true, true, true, Action::RoamRoom),
        ]);
        let h = dataset.entropy_with(LogBase::Two);
        assert!((h - 1.0).abs() < TOLERANCE, "expected 1 bit, got {h}");
    }

    #[test]
    fn test_information_gain_of_perfect_split() {
        let dataset = sample();
        let close = dataset.filter(Attribute::CloseToChar, false);
        // Within `close_to_char = false`, `coins_in_room` separates
        // `CollectCoin` from the other two actions.
        let gain = close.information_gain(Attribute::CoinsInRoom);
        assert!(gain > 0.0);
        assert!(gain <= close.entropy() + TOLERANCE);
    }

    #[test]
    fn test_best_criteria_prefers_priority_on_ties() {
        // Every attribute is constant, so every gain is zero.
        let dataset = Dataset::new([
            Record::new(true, true, true, true, Action::Chase),
            Record::new(true, true, true, true, Action::ChangeRoom),
        ]);
        assert_eq!(dataset.best_criteria(), Attribute::CloseToChar);

        let dataset = dataset.filter(Attribute::CloseToChar, true);
        assert_eq!(dataset.best_criteria(), Attribute::CoinsInRoom);
    }

    #[test]
    fn test_best_criteria_without_remaining_attributes() {
        let dataset = Dataset::from_parts(
            [Record::new(true, true, true, true, Action::Chase)],
            Attribute::ALL,
        );
        assert!(dataset.is_exhausted());
        assert_eq!(
            dataset.try_best_criteria(),
            Err(DatasetError::NoRemainingAttributes)
        );
    }

    #[test]
    #[should_panic(expected = "already filtered on")]
    fn test_best_criteria_panics_without_remaining_attributes() {
        let dataset = Dataset::from_parts([], Attribute::ALL);
        dataset.best_criteria();
    }

    #[test]
    fn test_randomize_remaining_actions() {
        let leaf = sample().randomize_remaining_actions();
        assert!(leaf.is_randomized());
        assert_eq!(leaf.len(), 4);
        let p = leaf.probability(Action::CollectCoin);
        assert!((p - 2.0 / 6.0).abs() < TOLERANCE, "got {p}");
    }

    #[test]
    fn test_randomize_single_action() {
        let leaf = sample()
            .filter(Attribute::CloseToChar, true)
            .randomize_remaining_actions();
        assert!(!leaf.is_randomized());
        assert_eq!(leaf.len(), 1);
        assert_eq!(leaf.probability(Action::Chase), 1.0);
        assert_eq!(leaf.probability(Action::RoamRoom), 0.0);
    }
}
