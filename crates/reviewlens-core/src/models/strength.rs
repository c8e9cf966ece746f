use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean membership confidence of a cluster, clamped to [0.0, 1.0].
///
/// Serializes as a bare float so persisted summaries keep the flat
/// `{label, member_ids, centroid, strength}` shape.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strength(f64);

impl Strength {
    /// Every member is a core member.
    pub const FULL: Strength = Strength(1.0);

    /// Create a new Strength, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Strength {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Strength> for f64 {
    fn from(s: Strength) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Strength::new(1.5).value(), 1.0);
        assert_eq!(Strength::new(-0.2).value(), 0.0);
        assert_eq!(Strength::new(0.56).value(), 0.56);
    }

    #[test]
    fn serializes_as_bare_float() {
        let s = Strength::new(0.8);
        assert_eq!(serde_json::to_string(&s).unwrap(), "0.8");
    }

    proptest::proptest! {
        #[test]
        fn always_within_unit_interval(value in -10.0f64..10.0) {
            let s = Strength::new(value);
            proptest::prop_assert!((0.0..=1.0).contains(&s.value()));
        }
    }
}
