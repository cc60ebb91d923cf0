//! Values, from which everything else is built.
//!
//! [Ratio] is an exact fraction. [PitchClass] is a ratio, reduced to the
//! first octave. [ModeId] names one harmonic or subharmonic series, which
//! [generate_mode] turns into ratios.

pub mod mode;
pub mod pitch_class;
pub mod ratio;

pub use mode::{generate_mode, generate_overtone_mode, Direction, ModeId};
pub use pitch_class::PitchClass;
pub use ratio::{octave_reduce, Ratio};
