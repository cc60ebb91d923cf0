//! How related two modes are.
//!
//! Two modes are related, if they share more than one pitch class. Related
//! pairs are ordered by [ModeDistance]: the bigger share of the smaller mode
//! comes first, then more shared tones, then lower average Tenney height
//! over every cross pair of tones.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
};

use itertools::Itertools;

use crate::error::TuningResult;
use crate::harmonicity::tenney_height;
use crate::primitives::{ModeId, PitchClass};
use crate::universe::Universe;

/// Unordered pair of distinct modes.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ModePair {
    lower: ModeId,
    higher: ModeId,
}
impl ModePair {
    pub fn new(a: ModeId, b: ModeId) -> Self {
        match a <= b {
            true => Self {
                lower: a,
                higher: b,
            },
            false => Self {
                lower: b,
                higher: a,
            },
        }
    }
    pub fn lower(&self) -> ModeId {
        self.lower
    }
    pub fn higher(&self) -> ModeId {
        self.higher
    }
    pub fn contains(&self, mode: &ModeId) -> bool {
        self.lower == *mode || self.higher == *mode
    }
    /// The other mode of the pair, if `mode` is one of them.
    pub fn other(&self, mode: &ModeId) -> Option<ModeId> {
        match mode {
            m if *m == self.lower => Some(self.higher),
            m if *m == self.higher => Some(self.lower),
            _ => None,
        }
    }
}

/// Relation of two modes. Smaller is closer.
///
/// Ordering follows [ModeDistance::key] exactly, floats are compared with
/// `total_cmp`.
#[derive(Debug, Clone, Copy)]
pub struct ModeDistance {
    common: usize,
    weighted_common: f64,
    average_tenney: f64,
}
impl ModeDistance {
    /// Number of shared pitch classes.
    pub fn common(&self) -> usize {
        self.common
    }
    /// Shared part of the smaller mode, in (0, 1].
    pub fn weighted_common(&self) -> f64 {
        self.weighted_common
    }
    /// Mean Tenney height over every cross pair of tones.
    pub fn average_tenney(&self) -> f64 {
        self.average_tenney
    }

    /// `(-weighted_common, -common, average_tenney)`, ascending is closest
    /// first.
    pub fn key(&self) -> (f64, i64, f64) {
        (
            -self.weighted_common,
            -(self.common as i64),
            self.average_tenney,
        )
    }

    /// None, if modes share less than two tones.
    fn between(
        tones_a: &BTreeSet<PitchClass>,
        tones_b: &BTreeSet<PitchClass>,
    ) -> TuningResult<Option<Self>> {
        let common = tones_a.intersection(tones_b).count();
        if common <= 1 {
            return Ok(None);
        }
        let weighted_common =
            common as f64 / tones_a.len().min(tones_b.len()) as f64;
        // unisons (x == y) stay in, with zero height
        let heights = tones_a
            .iter()
            .cartesian_product(tones_b.iter())
            .map(|(x, y)| tenney_height(x.ratio().interval_to(y.ratio())?))
            .collect::<TuningResult<Vec<_>>>()?;
        let average_tenney =
            heights.iter().sum::<f64>() / heights.len() as f64;
        Ok(Some(Self {
            common,
            weighted_common,
            average_tenney,
        }))
    }
}
impl PartialEq for ModeDistance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for ModeDistance {}
impl PartialOrd for ModeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ModeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weighted_common
            .total_cmp(&self.weighted_common)
            .then_with(|| other.common.cmp(&self.common))
            .then_with(|| self.average_tenney.total_cmp(&other.average_tenney))
    }
}

pub type ModeDistances = HashMap<ModePair, ModeDistance>;

/// Distance for every pair of modes, sharing more than one pitch class.
///
/// Pairs with one or no shared tones are absent from the result.
///
/// # Example
/// ```
/// # use primodality::{distance::compute_mode_distances,
/// #     universe::build_universe};
/// let universe = build_universe([1], [5, 10]).unwrap();
/// let distances = compute_mode_distances(&universe).unwrap();
/// assert!(distances.values().all(|d| d.common() > 1));
/// ```
pub fn compute_mode_distances(
    universe: &Universe,
) -> TuningResult<ModeDistances> {
    let mut distances = HashMap::new();
    let mut compared = 0_usize;
    for ((mode_a, tones_a), (mode_b, tones_b)) in
        universe.modes().tuple_combinations()
    {
        compared += 1;
        if let Some(distance) = ModeDistance::between(tones_a, tones_b)? {
            distances.insert(ModePair::new(*mode_a, *mode_b), distance);
        }
    }
    log::debug!(
        "mode distances: {} of {} pairs are related",
        distances.len(),
        compared
    );
    Ok(distances)
}

/// Every related pair, closest first. Equal distances are ordered by pair.
pub fn ranked_relations(
    distances: &ModeDistances,
) -> Vec<(ModePair, ModeDistance)> {
    distances
        .iter()
        .map(|(pair, distance)| (*pair, *distance))
        .sorted_by(|(pair_a, dist_a), (pair_b, dist_b)| {
            dist_a.cmp(dist_b).then_with(|| pair_a.cmp(pair_b))
        })
        .collect()
}

/// Every mode related to `mode`, closest first.
pub fn nearest_modes(
    distances: &ModeDistances,
    mode: &ModeId,
) -> Vec<(ModeId, ModeDistance)> {
    distances
        .iter()
        .filter_map(|(pair, distance)| {
            pair.other(mode).map(|other| (other, *distance))
        })
        .sorted_by(|(mode_a, dist_a), (mode_b, dist_b)| {
            dist_a.cmp(dist_b).then_with(|| mode_a.cmp(mode_b))
        })
        .collect()
}
