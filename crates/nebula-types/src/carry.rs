//! Exact fractional carry of a produced resource.
//!
//! Production accrues `rate * elapsed_ms` unit-milliseconds, and one whole
//! unit is [`Carry::DENOMINATOR`] of them. A [`Carry`] holds the leftover
//! numerator, so the carried fraction is always
//! `numerator / 3_600_000` with the numerator in `[0, 3_600_000)`.
//! Integer arithmetic keeps chained advances exact.
//!
//! On the wire a carry is a plain JSON number in `[0, 1)`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[allow(clippy::cast_precision_loss)]
const DENOMINATOR_F64: f64 = Carry::DENOMINATOR as f64;

/// Fraction of a unit, held as an integer numerator over
/// [`Carry::DENOMINATOR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Carry(u32);

impl Carry {
    /// Unit-milliseconds in one whole unit (milliseconds per hour).
    pub const DENOMINATOR: u64 = 3_600_000;

    /// No carried fraction.
    pub const ZERO: Self = Self(0);

    /// Build a carry from its numerator, or `None` if it would reach a
    /// whole unit.
    pub fn from_numerator(numerator: u64) -> Option<Self> {
        if numerator >= Self::DENOMINATOR {
            return None;
        }
        u32::try_from(numerator).ok().map(Self)
    }

    /// Numerator over [`Carry::DENOMINATOR`].
    pub fn numerator(self) -> u64 {
        u64::from(self.0)
    }

    /// Whether nothing is carried.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The carried fraction as a float in `[0, 1)`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / DENOMINATOR_F64
    }

    /// Nearest carry to a fraction read from the wire.
    ///
    /// Returns `None` for values outside `[0, 1)` or not finite.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_f64(fraction: f64) -> Option<Self> {
        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return None;
        }
        // Bounded to [0, DENOMINATOR] above, so the cast cannot wrap.
        let numerator = (fraction * DENOMINATOR_F64).round() as u64;
        Self::from_numerator(numerator)
    }
}

impl Serialize for Carry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Carry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fraction = f64::deserialize(deserializer)?;
        Self::from_f64(fraction).ok_or_else(|| {
            D::Error::custom(format!("remainder {fraction} is outside [0, 1)"))
        })
    }
}
