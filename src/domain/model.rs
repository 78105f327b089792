//! # Box model
//!
//! [`Cuboid`] is a rectangular box with three integer dimensions. It is
//! immutable once built and has three ways in:
//!
//! ```
//! use box_volume::Cuboid;
//!
//! assert_eq!(Cuboid::default().volume(), 0);
//! assert_eq!(Cuboid::cube(5).volume(), 125);
//! assert_eq!(Cuboid::new(5, 8, 12).volume(), 480);
//! assert_eq!(Cuboid::from((2, 4, 6)).volume(), 48);
//! ```

use crate::utils::error::{BoxError, Result};
use crate::utils::validation::{validate_non_negative, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular box. Dimensions are meant to be non-negative, but only
/// [`Validate::validate`] checks that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuboid {
    width: i32,
    length: i32,
    height: i32,
}

impl Cuboid {
    pub const fn new(width: i32, length: i32, height: i32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Builds a cube with every side equal to `side`.
    ///
    /// This is the only single-integer construction path. There is no
    /// `From<i32>`, so a bare integer never turns into a box by itself:
    ///
    /// ```compile_fail
    /// use box_volume::Cuboid;
    ///
    /// fn volume_of(b: Cuboid) -> i32 {
    ///     b.volume()
    /// }
    /// volume_of(5);
    /// ```
    ///
    /// ```compile_fail
    /// use box_volume::Cuboid;
    ///
    /// let b: Cuboid = 5.into();
    /// ```
    pub const fn cube(side: i32) -> Self {
        Self::new(side, side, side)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn length(&self) -> i32 {
        self.length
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn dimensions(&self) -> (i32, i32, i32) {
        (self.width, self.length, self.height)
    }

    pub const fn is_cube(&self) -> bool {
        self.width == self.length && self.length == self.height
    }

    /// `width * length * height` with two's-complement wrapping on overflow.
    pub const fn volume(&self) -> i32 {
        self.width
            .wrapping_mul(self.length)
            .wrapping_mul(self.height)
    }

    pub fn checked_volume(&self) -> Option<i32> {
        i32::try_from(self.exact_volume()).ok()
    }

    pub fn saturating_volume(&self) -> i32 {
        // Clamp the exact product; saturating step by step can land one off
        // when a later factor flips the sign.
        self.exact_volume()
            .clamp(i32::MIN as i128, i32::MAX as i128) as i32
    }

    pub fn volume_with(&self, policy: OverflowPolicy) -> Result<i32> {
        match policy {
            OverflowPolicy::Wrap => Ok(self.volume()),
            OverflowPolicy::Saturate => Ok(self.saturating_volume()),
            OverflowPolicy::Error => {
                self.checked_volume()
                    .ok_or(BoxError::VolumeOverflowError {
                        width: self.width,
                        length: self.length,
                        height: self.height,
                    })
            }
        }
    }

    fn exact_volume(&self) -> i128 {
        self.width as i128 * self.length as i128 * self.height as i128
    }
}

impl From<(i32, i32, i32)> for Cuboid {
    fn from((width, length, height): (i32, i32, i32)) -> Self {
        Self::new(width, length, height)
    }
}

impl From<[i32; 3]> for Cuboid {
    fn from([width, length, height]: [i32; 3]) -> Self {
        Self::new(width, length, height)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.width, self.length, self.height)
    }
}

impl Validate for Cuboid {
    fn validate(&self) -> Result<()> {
        validate_non_negative("width", self.width)?;
        validate_non_negative("length", self.length)?;
        validate_non_negative("height", self.height)
    }
}

/// What to do when `width * length * height` does not fit in an `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    Wrap,
    Saturate,
    #[default]
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBox {
    pub label: String,
    pub cuboid: Cuboid,
}

impl LabeledBox {
    pub fn new(label: impl Into<String>, cuboid: Cuboid) -> Self {
        Self {
            label: label.into(),
            cuboid,
        }
    }

    /// The four boxes built when nothing else is requested.
    pub fn demo_set() -> Vec<Self> {
        vec![
            Self::new("default", Cuboid::default()),
            Self::new("cube", Cuboid::cube(5)),
            Self::new("dimensions", Cuboid::new(5, 8, 12)),
            Self::new("dimensions-alt", Cuboid::from((2, 4, 6))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let b = Cuboid::default();
        assert_eq!(b.dimensions(), (0, 0, 0));
        assert_eq!(b.volume(), 0);
    }

    #[test]
    fn test_cube_broadcasts_side() {
        let b = Cuboid::cube(5);
        assert_eq!(b.dimensions(), (5, 5, 5));
        assert!(b.is_cube());
        assert_eq!(b.volume(), 125);
    }

    #[test]
    fn test_cube_volume_is_side_cubed() {
        for side in [0, 1, 2, 7, 13, 100, 1290] {
            assert_eq!(Cuboid::cube(side).volume(), side * side * side);
        }
    }

    #[test]
    fn test_three_dimensions() {
        let b = Cuboid::new(5, 8, 12);
        assert_eq!(b.width(), 5);
        assert_eq!(b.length(), 8);
        assert_eq!(b.height(), 12);
        assert!(!b.is_cube());
        assert_eq!(b.volume(), 480);
    }

    #[test]
    fn test_alternate_syntax_matches_new() {
        assert_eq!(Cuboid::from((2, 4, 6)), Cuboid::new(2, 4, 6));
        assert_eq!(Cuboid::from([2, 4, 6]), Cuboid::new(2, 4, 6));
        assert_eq!(Cuboid::from((2, 4, 6)).volume(), 48);
    }

    #[test]
    fn test_volume_ignores_argument_order() {
        let expected = 48;
        for (w, l, h) in [(2, 4, 6), (4, 6, 2), (6, 2, 4), (6, 4, 2)] {
            assert_eq!(Cuboid::new(w, l, h).volume(), expected);
        }
    }

    #[test]
    fn test_overflow_policies() {
        let b = Cuboid::new(i32::MAX, 2, 1);
        assert_eq!(b.volume(), i32::MAX.wrapping_mul(2));
        assert_eq!(b.checked_volume(), None);
        assert_eq!(b.saturating_volume(), i32::MAX);
        assert_eq!(b.volume_with(OverflowPolicy::Wrap).unwrap(), -2);
        assert_eq!(b.volume_with(OverflowPolicy::Saturate).unwrap(), i32::MAX);
        assert!(matches!(
            b.volume_with(OverflowPolicy::Error),
            Err(BoxError::VolumeOverflowError { width: i32::MAX, length: 2, height: 1 })
        ));
    }

    #[test]
    fn test_saturating_volume_tracks_final_sign() {
        let b = Cuboid::new(i32::MAX, 2, -1);
        assert_eq!(b.saturating_volume(), i32::MIN);
        // Zero anywhere wins even if the partial product overflowed.
        assert_eq!(Cuboid::new(i32::MAX, i32::MAX, 0).saturating_volume(), 0);
        assert_eq!(Cuboid::new(i32::MAX, i32::MAX, 0).checked_volume(), Some(0));
    }

    #[test]
    fn test_largest_cube_that_fits() {
        assert_eq!(Cuboid::cube(1290).checked_volume(), Some(2_146_689_000));
        assert_eq!(Cuboid::cube(1291).checked_volume(), None);
    }

    #[test]
    fn test_validate_rejects_negative_dimensions() {
        assert!(Cuboid::new(1, 2, 3).validate().is_ok());
        assert!(Cuboid::default().validate().is_ok());
        let err = Cuboid::new(1, -2, 3).validate().unwrap_err();
        assert!(matches!(
            err,
            BoxError::InvalidConfigValueError { ref field, .. } if field == "length"
        ));
    }

    #[test]
    fn test_negative_dimensions_still_construct() {
        assert_eq!(Cuboid::cube(-2).volume(), -8);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cuboid::new(5, 8, 12).to_string(), "5 x 8 x 12");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Cuboid::new(1, 2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"width": 1, "length": 2, "height": 3}));
    }

    #[test]
    fn test_demo_set() {
        let volumes: Vec<i32> = LabeledBox::demo_set()
            .iter()
            .map(|b| b.cuboid.volume())
            .collect();
        assert_eq!(volumes, vec![0, 125, 480, 48]);
    }
}
