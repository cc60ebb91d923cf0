//! Just-intonation modes and how they relate.
//!
//! At first, [universe::build_universe] expands branches and degrees into
//! modes of octave-reduced pitch classes.
//! Then [distance::compute_mode_distances] ranks every pair of related modes.
//! [chord] builds chords of a given size from any pool of pitches and ranks
//! them by [harmonicity].
//!
//! Nothing here prints, reads files or picks at random: callers receive
//! fully-ordered values and decide what to show.

pub mod chord;
pub mod distance;
pub mod error;
pub mod harmonicity;
pub mod primitives;
pub mod universe;

pub use error::{TuningError, TuningResult};
