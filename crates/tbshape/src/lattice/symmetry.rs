//! Simple translational symmetry, encoded per direction for the lattice builder.

use std::fmt;

/// Sentinel for "no translational symmetry in this direction".
pub const DISABLED: f64 = -1.0;
/// Sentinel for "translation length equals the unit cell length".
pub const AUTOMATIC: f64 = 0.0;

/// Translation setting for one lattice-vector direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Translation {
    Disabled,
    #[default]
    Automatic,
    /// Translation length in nanometers.
    Manual(f64),
}

impl Translation {
    /// Sentinel encoding: `-1` disabled, `0` automatic, otherwise the length.
    #[inline]
    pub fn encode(self) -> f64 {
        match self {
            Translation::Disabled => DISABLED,
            Translation::Automatic => AUTOMATIC,
            Translation::Manual(length) => length,
        }
    }

    /// Inverse of `encode`. A manual length of `-1` or `0` cannot survive
    /// the round trip and decodes to the sentinel meaning.
    #[inline]
    pub fn decode(value: f64) -> Self {
        if value == DISABLED {
            Translation::Disabled
        } else if value == AUTOMATIC {
            Translation::Automatic
        } else {
            Translation::Manual(value)
        }
    }
}

impl From<bool> for Translation {
    #[inline]
    fn from(enabled: bool) -> Self {
        if enabled {
            Translation::Automatic
        } else {
            Translation::Disabled
        }
    }
}

impl From<f64> for Translation {
    #[inline]
    fn from(length: f64) -> Self {
        Translation::Manual(length)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Disabled => write!(f, "disabled"),
            Translation::Automatic => write!(f, "automatic"),
            Translation::Manual(length) => write!(f, "{length} nm"),
        }
    }
}

/// Translational symmetry descriptor holding the encoded `a1, a2, a3` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslationalSymmetry {
    pub lengths: [f64; 3],
}

impl TranslationalSymmetry {
    pub fn new(a1: Translation, a2: Translation, a3: Translation) -> Self {
        Self {
            lengths: [a1.encode(), a2.encode(), a3.encode()],
        }
    }

    /// Decoded per-direction settings.
    pub fn directions(&self) -> [Translation; 3] {
        self.lengths.map(Translation::decode)
    }
}

impl Default for TranslationalSymmetry {
    /// Automatic in all three directions.
    fn default() -> Self {
        Self::new(
            Translation::Automatic,
            Translation::Automatic,
            Translation::Automatic,
        )
    }
}

/// Translational symmetry from `bool` (`false` disabled, `true` automatic)
/// or `f64` (manual length in nm) per direction. No cross-direction checks.
pub fn translational_symmetry(
    a1: impl Into<Translation>,
    a2: impl Into<Translation>,
    a3: impl Into<Translation>,
) -> TranslationalSymmetry {
    TranslationalSymmetry::new(a1.into(), a2.into(), a3.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_settings_encode_to_sentinels() {
        let sym = translational_symmetry(false, true, 2.5);
        assert_eq!(sym.lengths, [-1.0, 0.0, 2.5]);
        assert_eq!(
            sym.directions(),
            [
                Translation::Disabled,
                Translation::Automatic,
                Translation::Manual(2.5)
            ]
        );
    }

    #[test]
    fn default_is_automatic_everywhere() {
        assert_eq!(TranslationalSymmetry::default().lengths, [0.0; 3]);
        assert_eq!(
            translational_symmetry(true, true, true),
            TranslationalSymmetry::default()
        );
        assert_eq!(Translation::default(), Translation::Automatic);
    }

    #[test]
    fn all_disabled_is_accepted() {
        let sym = translational_symmetry(false, false, false);
        assert_eq!(sym.lengths, [-1.0; 3]);
    }

    #[test]
    fn manual_sentinel_collisions_decode_as_sentinels() {
        assert_eq!(Translation::Manual(0.0).encode(), AUTOMATIC);
        assert_eq!(Translation::decode(0.0), Translation::Automatic);
        assert_eq!(Translation::decode(-1.0), Translation::Disabled);
        assert_eq!(Translation::decode(-3.0), Translation::Manual(-3.0));
    }

    #[test]
    fn display() {
        assert_eq!(Translation::Manual(1.5).to_string(), "1.5 nm");
        assert_eq!(Translation::from(false).to_string(), "disabled");
    }
}
