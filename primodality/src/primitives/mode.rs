//! Harmonic and subharmonic series segments ("modes").

use std::fmt;

use super::Ratio;
use crate::error::{TuningError, TuningResult};

/// Direction of the series.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Direction {
    /// Ascending harmonic series.
    Overtone,
    /// Descending subharmonic mirror.
    Undertone,
}
impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Overtone, Direction::Undertone];
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overtone => write!(f, "over"),
            Self::Undertone => write!(f, "under"),
        }
    }
}

/// Identity of a mode: branch multiplier, degree and direction.
///
/// Pitch classes of the mode are kept by
/// [Universe](crate::universe::Universe).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ModeId {
    branch: u32,
    degree: u32,
    direction: Direction,
}
impl ModeId {
    pub fn new(
        branch: u32,
        degree: u32,
        direction: Direction,
    ) -> TuningResult<Self> {
        if branch < 1 {
            return Err(TuningError::InvalidParameter(format!(
                "branch should be at least 1, got: {}",
                branch
            )));
        }
        if degree < 2 {
            return Err(TuningError::InvalidParameter(format!(
                "mode degree should be at least 2, got: {}",
                degree
            )));
        }
        Ok(Self {
            branch,
            degree,
            direction,
        })
    }
    pub fn branch(&self) -> u32 {
        self.branch
    }
    pub fn degree(&self) -> u32 {
        self.degree
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{} m{} {}", self.branch, self.degree, self.direction)
    }
}

/// Generate `degree` ratios of the series in the given direction.
///
/// - Overtone: `(degree + i) / degree`
/// - Undertone: `2 * degree / (2 * degree - i)`
///
/// for `i` in `0..degree`. Both start at unison.
///
/// # Example
/// ```
/// # use primodality::primitives::{generate_mode, Direction, Ratio};
/// let over = generate_mode(3, Direction::Overtone).unwrap();
/// assert_eq!(over, vec![
///     Ratio::new(3, 3).unwrap(),
///     Ratio::new(4, 3).unwrap(),
///     Ratio::new(5, 3).unwrap(),
/// ]);
/// let under = generate_mode(3, Direction::Undertone).unwrap();
/// assert_eq!(under, vec![
///     Ratio::new(6, 6).unwrap(),
///     Ratio::new(6, 5).unwrap(),
///     Ratio::new(6, 4).unwrap(),
/// ]);
/// ```
pub fn generate_mode(
    degree: u32,
    direction: Direction,
) -> TuningResult<Vec<Ratio>> {
    if degree < 1 {
        return Err(TuningError::InvalidParameter(format!(
            "mode degree should be at least 1, got: {}",
            degree
        )));
    }
    let degree = u64::from(degree);
    (0..degree)
        .map(|i| match direction {
            Direction::Overtone => Ratio::new(degree + i, degree),
            Direction::Undertone => {
                Ratio::new(2 * degree, degree + (degree - i))
            }
        })
        .collect()
}

/// Single-argument form, always ascending.
pub fn generate_overtone_mode(degree: u32) -> TuningResult<Vec<Ratio>> {
    generate_mode(degree, Direction::Overtone)
}
