//! Points cap checking.

use serde::{Deserialize, Serialize};

/// Maximum points a fighter may cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointsCap(pub i32);

impl PointsCap {
    /// Create a new cap.
    #[must_use]
    pub const fn new(points: i32) -> Self {
        Self(points)
    }

    /// Check if `total` is over the cap. Hitting the cap exactly is allowed.
    #[must_use]
    pub const fn is_exceeded_by(&self, total: i32) -> bool {
        total > self.0
    }

    /// Points left under the cap (negative when over), saturating.
    #[must_use]
    pub const fn remaining(&self, total: i32) -> i32 {
        self.0.saturating_sub(total)
    }

    /// Points over the cap (zero or negative when under), saturating.
    #[must_use]
    pub const fn excess(&self, total: i32) -> i32 {
        total.saturating_sub(self.0)
    }
}

impl std::fmt::Display for PointsCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_boundary() {
        let cap = PointsCap::new(375);
        assert!(!cap.is_exceeded_by(374));
        assert!(!cap.is_exceeded_by(375));
        assert!(cap.is_exceeded_by(376));
    }

    #[test]
    fn test_remaining() {
        let cap = PointsCap::new(100);
        assert_eq!(cap.remaining(73), 27);
        assert_eq!(cap.remaining(110), -10);
    }

    #[test]
    fn test_negative_cap() {
        let cap = PointsCap::new(-5);
        assert!(cap.is_exceeded_by(0));
        assert_eq!(cap.excess(0), 5);
    }

    #[test]
    fn test_extreme_caps_saturate() {
        let floor = PointsCap::new(i32::MIN);
        assert!(floor.is_exceeded_by(16));
        assert_eq!(floor.remaining(16), i32::MIN);
        assert_eq!(floor.excess(16), i32::MAX);

        let ceiling = PointsCap::new(i32::MAX);
        assert!(!ceiling.is_exceeded_by(i32::MAX));
        assert_eq!(ceiling.remaining(-2), i32::MAX);
        assert_eq!(ceiling.excess(i32::MIN), i32::MIN);
    }
}
