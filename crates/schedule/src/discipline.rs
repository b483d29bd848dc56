//! Spacing-constrained random discipline assignment.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::error::ScheduleError;

/// Default discipline rotation, in its fixed order.
pub const DEFAULT_DISCIPLINES: [&str; 7] = [
    "Sprint",
    "Häck",
    "Längdhopp",
    "Kulstötning",
    "Höjdhopp",
    "Spjut",
    "Fyspass",
];

/// Minimum number of session slots between two uses of one discipline.
pub const DEFAULT_MIN_SPACING: usize = 4;

/// An ordered, non-empty set of unique discipline names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineSet {
    names: Vec<String>,
}

impl DisciplineSet {
    /// Creates a discipline set, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if `names` is empty, contains a blank name,
    /// or repeats a name.
    pub fn new<I, S>(names: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ScheduleError::EmptyDisciplines);
        }
        let mut seen = BTreeSet::new();
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ScheduleError::BlankDiscipline { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(ScheduleError::DuplicateDiscipline { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Number of disciplines.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterates over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for DisciplineSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_DISCIPLINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Assigns one discipline index per slot.
///
/// Greedy online assignment: at slot `i` the candidates are the
/// disciplines never used so far or last used at least `min_spacing` slots
/// earlier, and one is drawn uniformly from them. When no discipline
/// qualifies the draw falls back to the whole set, so a slot may then
/// violate the spacing but generation never fails.
///
/// The returned vector has exactly `n_slots` entries, each a valid index
/// into `disciplines`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stride_schedule::{DisciplineSet, assign_disciplines};
///
/// let set = DisciplineSet::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let slots = assign_disciplines(20, &set, 4, &mut rng);
/// assert_eq!(slots.len(), 20);
/// ```
#[tracing::instrument(skip_all, fields(n_slots = n_slots, n_disciplines = disciplines.len(), min_spacing = min_spacing))]
pub fn assign_disciplines(
    n_slots: usize,
    disciplines: &DisciplineSet,
    min_spacing: usize,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let n_disc = disciplines.len();
    let mut last_occurrence: Vec<Option<usize>> = vec![None; n_disc];
    let mut candidates: Vec<usize> = Vec::with_capacity(n_disc);
    let mut assigned = Vec::with_capacity(n_slots);
    let mut n_relaxed = 0usize;

    for slot in 0..n_slots {
        candidates.clear();
        candidates.extend((0..n_disc).filter(|&d| match last_occurrence[d] {
            None => true,
            Some(last) => slot - last >= min_spacing,
        }));
        if candidates.is_empty() {
            n_relaxed += 1;
            candidates.extend(0..n_disc);
        }

        let chosen = candidates[rng.random_range(0..candidates.len())];
        last_occurrence[chosen] = Some(slot);
        assigned.push(chosen);
    }

    if n_relaxed > 0 {
        debug!(n_relaxed, "spacing constraint relaxed for some slots");
    }
    assigned
}

/// Like [`assign_disciplines`], but returns discipline names.
pub fn assign_discipline_names<'a>(
    n_slots: usize,
    disciplines: &'a DisciplineSet,
    min_spacing: usize,
    rng: &mut impl Rng,
) -> Vec<&'a str> {
    assign_disciplines(n_slots, disciplines, min_spacing, rng)
        .into_iter()
        .map(|i| disciplines.names[i].as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_set_order() {
        let set = DisciplineSet::default();
        assert_eq!(set.len(), 7);
        assert_eq!(set.get(0), Some("Sprint"));
        assert_eq!(set.get(6), Some("Fyspass"));
        assert_eq!(set.get(7), None);
        assert!(!set.is_empty());
    }

    #[test]
    fn new_rejects_empty() {
        let names: [&str; 0] = [];
        assert_eq!(
            DisciplineSet::new(names).unwrap_err(),
            ScheduleError::EmptyDisciplines
        );
    }

    #[test]
    fn new_rejects_duplicates() {
        assert_eq!(
            DisciplineSet::new(["Sprint", "Spjut", "Sprint"]).unwrap_err(),
            ScheduleError::DuplicateDiscipline {
                name: "Sprint".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_blank() {
        assert_eq!(
            DisciplineSet::new(["Sprint", "  "]).unwrap_err(),
            ScheduleError::BlankDiscipline { index: 1 }
        );
    }

    #[test]
    fn zero_slots() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(assign_disciplines(0, &DisciplineSet::default(), 4, &mut rng).is_empty());
    }

    #[test]
    fn first_slots_are_distinct() {
        // With spacing 4 the first four slots can never repeat.
        let set = DisciplineSet::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let slots = assign_disciplines(4, &set, 4, &mut rng);
            let unique: BTreeSet<usize> = slots.iter().copied().collect();
            assert_eq!(unique.len(), 4, "seed {seed}: {slots:?}");
        }
    }

    #[test]
    fn single_discipline_falls_back() {
        let set = DisciplineSet::new(["Sprint"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let slots = assign_disciplines(5, &set, 4, &mut rng);
        assert_eq!(slots, vec![0; 5]);
    }

    #[test]
    fn spacing_zero_is_unconstrained() {
        let set = DisciplineSet::new(["A", "B"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let slots = assign_disciplines(100, &set, 0, &mut rng);
        assert_eq!(slots.len(), 100);
        assert!(slots.iter().all(|&i| i < 2));
    }

    #[test]
    fn names_follow_indices() {
        let set = DisciplineSet::default();
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let indices = assign_disciplines(30, &set, 4, &mut a);
        let names = assign_discipline_names(30, &set, 4, &mut b);
        for (i, name) in indices.iter().zip(&names) {
            assert_eq!(set.get(*i), Some(*name));
        }
    }
}
