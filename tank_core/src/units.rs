//! # Unit Types
//!
//! Type-safe wrappers for the units that show up in tank inspection math.
//! These are lightweight f64 newtypes, not a full units library: the
//! domain uses a small, fixed set of US customary units and the JSON
//! serialization should stay plain numbers.
//!
//! Internal calculator math works in consistent raw f64 units (feet for
//! elevations, inches for thickness, psi for stress). The wrappers guard
//! the seams where confusion actually happens: elevation feet versus
//! display inches in the settlement results, survey degrees versus
//! radians in the plane fit, and mils versus inches per year in
//! remaining-life projection.
//!
//! ## Example
//!
//! ```rust
//! use tank_core::units::{Feet, Inches};
//!
//! let settlement = Feet(1.0 / 12.0);
//! let display: Inches = settlement.into();
//! assert!((display.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

/// Corrosion rate in mils per year (1 mil = 0.001 in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpy(pub f64);

impl Mpy {
    /// Convert to inches of metal loss per year
    pub fn inches_per_year(self) -> f64 {
        self.0 / 1000.0
    }
}

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Mpy);
impl_arithmetic!(Degrees);
