//! Axis frames and axis-aligned bounding boxes.

use nalgebra::{Matrix3, Point2, Point3, RealField, Vector3};

use crate::axis::Axis;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An orthonormal frame spanned by two principal axes and their cross product.
///
/// The rotation matrix has the length, width and height axes as its rows,
/// so it maps a vector expressed in the parent frame to the frame's own
/// coordinates. Its transpose maps back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    length: Axis,
    width: Axis,
    height: Axis,
    rotation: Matrix3<f64>,
}

impl Frame {
    /// Builds the frame of a (length, width) axis pair.
    ///
    /// Fails with [`crate::Error::InvalidAxis`] when the axes are parallel.
    pub fn new(length: Axis, width: Axis) -> Result<Self> {
        let height = length.cross(width)?;
        let rotation = Matrix3::from_rows(&[
            length.to_vector().transpose(),
            width.to_vector().transpose(),
            height.to_vector().transpose(),
        ]);
        Ok(Self {
            length,
            width,
            height,
            rotation,
        })
    }

    /// Returns the length axis.
    pub fn length(&self) -> Axis {
        self.length
    }

    /// Returns the width axis.
    pub fn width(&self) -> Axis {
        self.width
    }

    /// Returns the height axis (length × width).
    pub fn height(&self) -> Axis {
        self.height
    }

    /// Returns the rotation matrix (rows = length, width, height).
    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    /// Returns the inverse rotation, mapping frame coordinates to the parent.
    pub fn inverse(&self) -> Matrix3<f64> {
        // Rows are orthonormal so the transpose is the inverse.
        self.rotation.transpose()
    }

    /// Expresses a parent-frame vector in frame coordinates.
    pub fn to_local(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * v
    }

    /// Expresses a frame-coordinate vector in the parent frame.
    pub fn to_parent(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.inverse() * v
    }

    /// Maps a principal axis of the frame back to the parent frame.
    pub fn axis_to_parent(&self, axis: Axis) -> Result<Axis> {
        Axis::from_vector(&self.to_parent(&axis.to_vector()))
    }
}

/// Rotates a point by a half turn about the center of a `length` × `width` footprint.
pub fn half_turn_point(p: &Point3<f64>, length: f64, width: f64) -> Point3<f64> {
    Point3::new(length - p.x, width - p.y, p.z)
}

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
}

impl<S: RealField + Copy> AABB2D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates an AABB from a set of points.
    pub fn from_points(points: &[Point2<S>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self::new(first.x, first.y, first.x, first.y);
        Some(rest.iter().fold(init, |acc, p| Self {
            min_x: acc.min_x.min(p.x),
            min_y: acc.min_y.min(p.y),
            max_x: acc.max_x.max(p.x),
            max_y: acc.max_y.max(p.y),
        }))
    }

    /// Returns the extent along x.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the extent along y.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the area of the AABB.
    pub fn area(&self) -> S {
        self.width() * self.height()
    }

    /// Checks if this AABB contains another one, allowing `margin` of slack.
    pub fn contains(&self, other: &Self, margin: S) -> bool {
        other.min_x >= self.min_x - margin
            && other.min_y >= self.min_y - margin
            && other.max_x <= self.max_x + margin
            && other.max_y <= self.max_y + margin
    }

    /// Checks if the interiors of two AABBs overlap by more than `epsilon`.
    pub fn overlaps(&self, other: &Self, epsilon: S) -> bool {
        self.min_x < other.max_x - epsilon
            && other.min_x < self.max_x - epsilon
            && self.min_y < other.max_y - epsilon
            && other.min_y < self.max_y - epsilon
    }

    /// Returns the union (bounding box) of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from a set of points.
    pub fn from_points(points: &[Point3<S>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self::new(first.x, first.y, first.z, first.x, first.y, first.z);
        Some(rest.iter().fold(init, |acc, p| acc.extend_point(p)))
    }

    /// Returns this AABB grown to include `p`.
    pub fn extend_point(&self, p: &Point3<S>) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            min_z: self.min_z.min(p.z),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
            max_z: self.max_z.max(p.z),
        }
    }

    /// Returns the width (x dimension) of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the depth (y dimension) of the AABB.
    pub fn depth(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the height (z dimension) of the AABB.
    pub fn height(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.depth() * self.height()
    }

    /// Returns the union (bounding box) of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            max_z: self.max_z.max(other.max_z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_identity() {
        let frame = Frame::new(Axis::XPos, Axis::YPos).unwrap();
        assert_eq!(frame.height(), Axis::ZPos);
        assert_eq!(*frame.rotation(), Matrix3::identity());
    }

    #[test]
    fn test_frame_inverse() {
        let frame = Frame::new(Axis::YPos, Axis::XNeg).unwrap();
        let product = frame.rotation() * frame.inverse();
        assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-12);

        // The frame's own length axis is +Y in the parent.
        assert_eq!(frame.axis_to_parent(Axis::XPos).unwrap(), Axis::YPos);
        assert_eq!(frame.axis_to_parent(Axis::YPos).unwrap(), Axis::XNeg);
        assert_eq!(frame.axis_to_parent(Axis::ZPos).unwrap(), Axis::ZPos);
    }

    #[test]
    fn test_frame_parallel_axes() {
        assert!(Frame::new(Axis::XPos, Axis::XNeg).is_err());
    }

    #[test]
    fn test_half_turn_point() {
        let p = half_turn_point(&Point3::new(10.0, 20.0, 5.0), 120.0, 80.0);
        assert_relative_eq!(p.x, 110.0);
        assert_relative_eq!(p.y, 60.0);
        assert_relative_eq!(p.z, 5.0);
    }

    #[test]
    fn test_aabb2d_from_points() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(3.0, 8.0),
        ];
        let aabb = AABB2D::from_points(&points).unwrap();
        assert_relative_eq!(aabb.min_x, 0.0);
        assert_relative_eq!(aabb.max_x, 10.0);
        assert_relative_eq!(aabb.max_y, 8.0);
        assert!(AABB2D::<f64>::from_points(&[]).is_none());
    }

    #[test]
    fn test_aabb2d_overlap_touching() {
        let a = AABB2D::new(0.0, 0.0, 10.0, 10.0);
        let b = AABB2D::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.overlaps(&b, 1e-9));
        let c = AABB2D::new(9.0, 9.0, 12.0, 12.0);
        assert!(a.overlaps(&c, 1e-9));
    }

    #[test]
    fn test_aabb3d_volume() {
        let aabb = AABB3D::new(0.0, 0.0, 0.0, 10.0, 20.0, 30.0);
        assert_relative_eq!(aabb.volume(), 6000.0);
    }
}
