//! Validated domain primitives shared across the workspace.

/// Errors that can occur when creating validated clinical rating types.
#[derive(Debug, thiserror::Error)]
pub enum AcuityError {
    /// The rating was outside the 1-5 scale
    #[error("acuity must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// A patient acuity rating on the 1-5 scale, 5 being the most critical.
///
/// This type wraps a `u8` and guarantees the value is within the clinical
/// acuity scale. Construction outside 1-5 is rejected rather than clamped so
/// that malformed caller input surfaces at the boundary instead of silently
/// shifting scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Acuity(u8);

impl Acuity {
    /// Creates a new `Acuity` from the given rating.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Acuity)` if the rating is within 1-5,
    /// or `Err(AcuityError::OutOfRange)` otherwise.
    pub fn new(rating: u8) -> Result<Self, AcuityError> {
        if !(1..=5).contains(&rating) {
            return Err(AcuityError::OutOfRange(rating));
        }
        Ok(Self(rating))
    }

    /// Returns the raw rating value.
    pub fn level(self) -> u8 {
        self.0
    }

    /// Whether the rating calls for enhanced monitoring (level 4 or above).
    pub fn is_high(self) -> bool {
        self.0 >= 4
    }
}

impl Default for Acuity {
    /// Acuity 3 is the neutral midpoint used when no rating was supplied.
    fn default() -> Self {
        Self(3)
    }
}

impl std::fmt::Display for Acuity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Acuity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Acuity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rating = u8::deserialize(deserializer)?;
        Acuity::new(rating).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acuity_accepts_full_scale() {
        for rating in 1..=5 {
            let acuity = Acuity::new(rating).expect("rating within scale");
            assert_eq!(acuity.level(), rating);
        }
    }

    #[test]
    fn test_acuity_rejects_zero_and_six() {
        assert!(matches!(Acuity::new(0), Err(AcuityError::OutOfRange(0))));
        assert!(matches!(Acuity::new(6), Err(AcuityError::OutOfRange(6))));
    }

    #[test]
    fn test_acuity_default_is_midpoint() {
        assert_eq!(Acuity::default().level(), 3);
    }

    #[test]
    fn test_acuity_high_threshold() {
        assert!(!Acuity::new(3).unwrap().is_high());
        assert!(Acuity::new(4).unwrap().is_high());
        assert!(Acuity::new(5).unwrap().is_high());
    }

    #[test]
    fn test_acuity_ordering() {
        assert!(Acuity::new(5).unwrap() > Acuity::new(4).unwrap());
    }
}
