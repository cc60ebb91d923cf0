//! Bipartite relation between pitch classes and modes.
//!
//! At first, every branch, degree and direction is expanded into a mode.
//! Then every ratio of the mode is multiplied by the branch and octave-reduced.
//! Both indices are filled together, in one pass, so every mode has exactly
//! one record with all of its pitch classes.

use std::collections::{BTreeMap, BTreeSet};

use itertools::{iproduct, Itertools};

use crate::error::{TuningError, TuningResult};
use crate::primitives::{
    generate_mode, Direction, ModeId, PitchClass, Ratio,
};

/// Every pitch class with modes containing it, and every mode with its
/// pitch classes.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Universe {
    pitch_classes: BTreeMap<PitchClass, BTreeSet<ModeId>>,
    modes: BTreeMap<ModeId, BTreeSet<PitchClass>>,
}

/// Tones, shared by two modes and unique to each of them.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ModeComparison {
    pub common: BTreeSet<PitchClass>,
    pub unique_a: BTreeSet<PitchClass>,
    pub unique_b: BTreeSet<PitchClass>,
}

impl Universe {
    fn insert(&mut self, mode: ModeId, pitch_class: PitchClass) {
        self.modes.entry(mode).or_default().insert(pitch_class);
        self.pitch_classes
            .entry(pitch_class)
            .or_default()
            .insert(mode);
    }

    /// Pitch classes in ascending order.
    pub fn pitch_classes(
        &self,
    ) -> impl Iterator<Item = (&PitchClass, &BTreeSet<ModeId>)> + Clone {
        self.pitch_classes.iter()
    }
    pub fn modes(
        &self,
    ) -> impl Iterator<Item = (&ModeId, &BTreeSet<PitchClass>)> + Clone {
        self.modes.iter()
    }
    pub fn modes_of(
        &self,
        pitch_class: &PitchClass,
    ) -> Option<&BTreeSet<ModeId>> {
        self.pitch_classes.get(pitch_class)
    }
    pub fn pitch_classes_of(
        &self,
        mode: &ModeId,
    ) -> Option<&BTreeSet<PitchClass>> {
        self.modes.get(mode)
    }
    pub fn contains_pitch_class(&self, pitch_class: &PitchClass) -> bool {
        self.pitch_classes.contains_key(pitch_class)
    }
    pub fn pitch_class_count(&self) -> usize {
        self.pitch_classes.len()
    }
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    /// Split tones of two modes into common and unique.
    ///
    /// None, if any of modes is not in the universe.
    pub fn compare_modes(
        &self,
        a: &ModeId,
        b: &ModeId,
    ) -> Option<ModeComparison> {
        let (tones_a, tones_b) =
            (self.pitch_classes_of(a)?, self.pitch_classes_of(b)?);
        Some(ModeComparison {
            common: tones_a.intersection(tones_b).copied().collect(),
            unique_a: tones_a.difference(tones_b).copied().collect(),
            unique_b: tones_b.difference(tones_a).copied().collect(),
        })
    }
}

/// Expand every (branch, degree, direction) combination into the universe.
///
/// Branches should be at least 1, degrees at least 2. Parameters are
/// checked before anything is built.
///
/// # Example
/// ```
/// # use primodality::universe::build_universe;
/// # use primodality::primitives::{Direction, ModeId, PitchClass};
/// let universe = build_universe([1, 7], [5]).unwrap();
/// assert_eq!(universe.mode_count(), 4);
/// let seven_four = PitchClass::new(7, 4).unwrap();
/// let b7_over = ModeId::new(7, 5, Direction::Overtone).unwrap();
/// assert!(universe.modes_of(&seven_four).unwrap().contains(&b7_over));
/// ```
pub fn build_universe(
    branches: impl IntoIterator<Item = u32>,
    degrees: impl IntoIterator<Item = u32>,
) -> TuningResult<Universe> {
    let branches: BTreeSet<u32> = branches.into_iter().collect();
    let degrees: BTreeSet<u32> = degrees.into_iter().collect();
    if let Some(branch) = branches.iter().find(|b| **b < 1) {
        return Err(TuningError::InvalidParameter(format!(
            "branch should be at least 1, got: {}",
            branch
        )));
    }
    if let Some(degree) = degrees.iter().find(|d| **d < 2) {
        return Err(TuningError::InvalidParameter(format!(
            "mode degree should be at least 2, got: {}",
            degree
        )));
    }

    let mut universe = Universe::default();
    for (branch, degree, direction) in
        iproduct!(&branches, &degrees, Direction::ALL)
    {
        let mode = ModeId::new(*branch, *degree, direction)?;
        for ratio in generate_mode(*degree, direction)? {
            let scaled = ratio.multiply(Ratio::new(u64::from(*branch), 1)?)?;
            let pitch_class = PitchClass::from_ratio(scaled)?;
            universe.insert(mode, pitch_class);
        }
    }
    log::debug!(
        "built universe for branches [{}] and degrees [{}]: \
        {} pitch classes, {} modes",
        branches.iter().join(", "),
        degrees.iter().join(", "),
        universe.pitch_class_count(),
        universe.mode_count()
    );
    Ok(universe)
}
