//! Shape of the lattice's primitive unit cell.

/// Lengths along the (up to three) primitive vector directions.
///
/// Invariants:
/// - `nanometers == false`: lengths count unit-vector lengths.
/// - `nanometers == true`: lengths are in nm, for all three directions alike.
/// - Negative or non-finite lengths are passed through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Primitive {
    pub lengths: [f64; 3],
    pub nanometers: bool,
}

impl Primitive {
    #[inline]
    pub fn new(lengths: [f64; 3], nanometers: bool) -> Self {
        Self {
            lengths,
            nanometers,
        }
    }

    /// Number of directions with a non-zero length.
    pub fn dimensionality(&self) -> usize {
        self.lengths.iter().filter(|&&l| l != 0.0).count()
    }
}

/// Primitive-cell descriptor; unspecified directions default to zero length.
pub fn primitive(
    v1: Option<f64>,
    v2: Option<f64>,
    v3: Option<f64>,
    nanometers: bool,
) -> Primitive {
    Primitive::new(
        [v1.unwrap_or(0.0), v2.unwrap_or(0.0), v3.unwrap_or(0.0)],
        nanometers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero_lengths() {
        let p = primitive(None, None, None, false);
        assert_eq!(p.lengths, [0.0, 0.0, 0.0]);
        assert!(!p.nanometers);
        assert_eq!(p, Primitive::default());
        assert_eq!(p.dimensionality(), 0);
    }

    #[test]
    fn nanometers_flag_applies_to_all_directions() {
        let p = primitive(Some(3.0), Some(2.5), None, true);
        assert_eq!(p.lengths, [3.0, 2.5, 0.0]);
        assert!(p.nanometers);
        assert_eq!(p.dimensionality(), 2);
    }

    #[test]
    fn no_validation_of_odd_lengths() {
        let p = primitive(Some(-2.0), Some(f64::INFINITY), Some(1.0), false);
        assert_eq!(p.lengths[0], -2.0);
        assert!(p.lengths[1].is_infinite());
        assert_eq!(p.dimensionality(), 3);
    }
}
