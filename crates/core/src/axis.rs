//! Signed principal axes of a local frame.
//!
//! Box orientations are described by naming which principal direction the
//! box length and width run along. The third (height) direction is their
//! cross product, so only orthogonal pairs form a valid frame.

use nalgebra::Vector3;
use std::fmt;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used when matching a vector against a principal direction.
const AXIS_EPSILON: f64 = 1e-6;

/// One of the six signed principal directions.
///
/// The declaration order defines the ordinal used for ranking layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// -X
    XNeg,
    /// +X
    XPos,
    /// -Y
    YNeg,
    /// +Y
    YPos,
    /// -Z
    ZNeg,
    /// +Z
    ZPos,
}

impl Axis {
    /// All six axes in ordinal order.
    pub const ALL: [Axis; 6] = [
        Axis::XNeg,
        Axis::XPos,
        Axis::YNeg,
        Axis::YPos,
        Axis::ZNeg,
        Axis::ZPos,
    ];

    /// Returns the ordinal of this axis (0..6).
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the axis with the given ordinal.
    pub fn from_ordinal(ordinal: usize) -> Result<Self> {
        Self::ALL
            .get(ordinal)
            .copied()
            .ok_or_else(|| Error::InvalidAxis(format!("ordinal {} out of range", ordinal)))
    }

    /// Returns the component index (0 = x, 1 = y, 2 = z) this axis runs along.
    pub fn component(self) -> usize {
        self.ordinal() / 2
    }

    /// Returns true for the positive direction.
    pub fn is_positive(self) -> bool {
        self.ordinal() % 2 == 1
    }

    /// Returns +1.0 or -1.0.
    pub fn sign(self) -> f64 {
        if self.is_positive() {
            1.0
        } else {
            -1.0
        }
    }

    /// Returns the axis pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Axis::XNeg => Axis::XPos,
            Axis::XPos => Axis::XNeg,
            Axis::YNeg => Axis::YPos,
            Axis::YPos => Axis::YNeg,
            Axis::ZNeg => Axis::ZPos,
            Axis::ZPos => Axis::ZNeg,
        }
    }

    /// Returns the axis after a half turn about Z: X and Y flip, Z is kept.
    pub fn half_turn(self) -> Self {
        match self {
            Axis::ZNeg | Axis::ZPos => self,
            _ => self.opposite(),
        }
    }

    /// Returns the unit vector of this axis.
    pub fn to_vector(self) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        v[self.component()] = self.sign();
        v
    }

    /// Maps a unit vector back to its principal axis.
    ///
    /// Fails with [`Error::InvalidAxis`] when the vector is not a signed
    /// principal unit vector.
    pub fn from_vector(v: &Vector3<f64>) -> Result<Self> {
        if !v.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidAxis(format!(
                "non-finite vector ({}, {}, {})",
                v.x, v.y, v.z
            )));
        }

        let component = v.iamax();
        let value = v[component];
        let off_axis = v
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != component)
            .all(|(_, c)| c.abs() < AXIS_EPSILON);

        if (value.abs() - 1.0).abs() > AXIS_EPSILON || !off_axis {
            return Err(Error::InvalidAxis(format!(
                "({}, {}, {}) is not a principal direction",
                v.x, v.y, v.z
            )));
        }

        let positive = usize::from(value > 0.0);
        Self::from_ordinal(component * 2 + positive)
    }

    /// Returns the axis completing a right-handed frame with `self` and `other`.
    ///
    /// Fails with [`Error::InvalidAxis`] when the two axes are parallel.
    pub fn cross(self, other: Axis) -> Result<Self> {
        if self.component() == other.component() {
            return Err(Error::InvalidAxis(format!(
                "{} and {} are parallel",
                self, other
            )));
        }
        Self::from_vector(&self.to_vector().cross(&other.to_vector()))
    }

    /// Returns true when both axes run along different components.
    pub fn is_orthogonal(self, other: Axis) -> bool {
        self.component() != other.component()
    }

    /// Short name of the axis ("XN", "XP", ...).
    pub fn name(self) -> &'static str {
        match self {
            Axis::XNeg => "XN",
            Axis::XPos => "XP",
            Axis::YNeg => "YN",
            Axis::YPos => "YP",
            Axis::ZNeg => "ZN",
            Axis::ZPos => "ZP",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_roundtrip() {
        for axis in Axis::ALL {
            let v = axis.to_vector();
            assert_eq!(Axis::from_vector(&v).unwrap(), axis);
        }
    }

    #[test]
    fn test_from_vector_rejects_non_principal() {
        assert!(Axis::from_vector(&Vector3::new(1.0, 1.0, 0.0)).is_err());
        assert!(Axis::from_vector(&Vector3::new(0.5, 0.0, 0.0)).is_err());
        assert!(Axis::from_vector(&Vector3::zeros()).is_err());
        assert!(Axis::from_vector(&Vector3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(Axis::XPos.cross(Axis::YPos).unwrap(), Axis::ZPos);
        assert_eq!(Axis::YPos.cross(Axis::XPos).unwrap(), Axis::ZNeg);
        assert_eq!(Axis::YPos.cross(Axis::ZPos).unwrap(), Axis::XPos);
        assert_eq!(Axis::ZPos.cross(Axis::XPos).unwrap(), Axis::YPos);
        assert_eq!(Axis::YPos.cross(Axis::XNeg).unwrap(), Axis::ZPos);
    }

    #[test]
    fn test_cross_parallel_fails() {
        assert!(matches!(
            Axis::XPos.cross(Axis::XNeg),
            Err(Error::InvalidAxis(_))
        ));
        assert!(Axis::ZPos.cross(Axis::ZPos).is_err());
    }

    #[test]
    fn test_ordinal() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.ordinal(), i);
            assert_eq!(Axis::from_ordinal(i).unwrap(), *axis);
        }
        assert!(Axis::from_ordinal(6).is_err());
        assert!(Axis::XNeg < Axis::ZPos);
    }

    #[test]
    fn test_half_turn() {
        assert_eq!(Axis::XPos.half_turn(), Axis::XNeg);
        assert_eq!(Axis::YNeg.half_turn(), Axis::YPos);
        assert_eq!(Axis::ZPos.half_turn(), Axis::ZPos);
    }
}
