//! Unit-cell and periodicity descriptors handed to the lattice builder.
//!
//! - `Primitive`: size of the primitive-cell block, in unit-vector counts or nanometers.
//! - `TranslationalSymmetry`: per-direction periodicity, sentinel-encoded
//!   (`-1` disabled, `0` automatic, positive = manual length in nm).

mod primitive;
mod symmetry;

pub use primitive::{primitive, Primitive};
pub use symmetry::{translational_symmetry, Translation, TranslationalSymmetry};
