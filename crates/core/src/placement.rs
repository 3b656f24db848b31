//! Realized box poses.

use nalgebra::{Point2, Point3, Vector3};

use crate::axis::Axis;
use crate::geometry::BoxDimensions;
use crate::transform::{half_turn_point, AABB2D, AABB3D};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One positioned box: an origin corner plus the directions its own length
/// and width run along. The box extends from the origin by its length along
/// `length_axis`, its width along `width_axis` and its height along their
/// cross product.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxPosition {
    origin: Point3<f64>,
    length_axis: Axis,
    width_axis: Axis,
    height_axis: Axis,
}

impl BoxPosition {
    /// Creates a box position.
    ///
    /// Fails with [`crate::Error::InvalidAxis`] when the axes are parallel.
    pub fn new(origin: Point3<f64>, length_axis: Axis, width_axis: Axis) -> Result<Self> {
        let height_axis = length_axis.cross(width_axis)?;
        Ok(Self {
            origin,
            length_axis,
            width_axis,
            height_axis,
        })
    }

    /// Returns the origin corner.
    pub fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Returns the direction of the box length.
    pub fn length_axis(&self) -> Axis {
        self.length_axis
    }

    /// Returns the direction of the box width.
    pub fn width_axis(&self) -> Axis {
        self.width_axis
    }

    /// Returns the direction of the box height.
    pub fn height_axis(&self) -> Axis {
        self.height_axis
    }

    /// Returns the corner diagonally opposite to the origin.
    pub fn far_corner(&self, dims: &BoxDimensions) -> Point3<f64> {
        let offset: Vector3<f64> = self.length_axis.to_vector() * dims.length()
            + self.width_axis.to_vector() * dims.width()
            + self.height_axis.to_vector() * dims.height();
        self.origin + offset
    }

    /// Returns the 3D bounding box of the placed box.
    pub fn bounding_box(&self, dims: &BoxDimensions) -> AABB3D<f64> {
        let far = self.far_corner(dims);
        AABB3D::new(
            self.origin.x.min(far.x),
            self.origin.y.min(far.y),
            self.origin.z.min(far.z),
            self.origin.x.max(far.x),
            self.origin.y.max(far.y),
            self.origin.z.max(far.z),
        )
    }

    /// Returns the footprint of the placed box projected on the deck.
    pub fn footprint(&self, dims: &BoxDimensions) -> AABB2D<f64> {
        let aabb = self.bounding_box(dims);
        AABB2D::new(aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y)
    }

    /// Returns the four deck corners of the footprint.
    pub fn corners_2d(&self, dims: &BoxDimensions) -> [Point2<f64>; 4] {
        let f = self.footprint(dims);
        [
            Point2::new(f.min_x, f.min_y),
            Point2::new(f.max_x, f.min_y),
            Point2::new(f.max_x, f.max_y),
            Point2::new(f.min_x, f.max_y),
        ]
    }

    /// Returns this position rotated by a half turn about the center of a
    /// `length` × `width` footprint.
    pub fn half_turn(&self, length: f64, width: f64) -> Self {
        Self {
            origin: half_turn_point(&self.origin, length, width),
            length_axis: self.length_axis.half_turn(),
            width_axis: self.width_axis.half_turn(),
            height_axis: self.height_axis.half_turn(),
        }
    }

    /// Returns this position raised by `dz`.
    pub fn raised(&self, dz: f64) -> Self {
        Self {
            origin: self.origin + Vector3::new(0.0, 0.0, dz),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounding_box_rotated() {
        let dims = BoxDimensions::new(40.0, 30.0, 20.0);
        // Length along +Y, width along -X: origin is the lower-right corner.
        let pos = BoxPosition::new(Point3::new(30.0, 0.0, 0.0), Axis::YPos, Axis::XNeg).unwrap();
        assert_eq!(pos.height_axis(), Axis::ZPos);

        let aabb = pos.bounding_box(&dims);
        assert_relative_eq!(aabb.min_x, 0.0);
        assert_relative_eq!(aabb.max_x, 30.0);
        assert_relative_eq!(aabb.min_y, 0.0);
        assert_relative_eq!(aabb.max_y, 40.0);
        assert_relative_eq!(aabb.max_z, 20.0);
    }

    #[test]
    fn test_half_turn_keeps_footprint_size() {
        let dims = BoxDimensions::new(40.0, 30.0, 20.0);
        let pos = BoxPosition::new(Point3::new(0.0, 0.0, 0.0), Axis::XPos, Axis::YPos).unwrap();
        let turned = pos.half_turn(120.0, 80.0);

        assert_eq!(turned.length_axis(), Axis::XNeg);
        assert_eq!(turned.width_axis(), Axis::YNeg);
        let f = turned.footprint(&dims);
        assert_relative_eq!(f.min_x, 80.0);
        assert_relative_eq!(f.max_x, 120.0);
        assert_relative_eq!(f.min_y, 50.0);
        assert_relative_eq!(f.max_y, 80.0);
    }

    #[test]
    fn test_half_turn_with_height_in_deck_plane() {
        let dims = BoxDimensions::new(40.0, 30.0, 20.0);
        // Length up, width along +X: the height lies along +Y.
        let pos = BoxPosition::new(Point3::new(10.0, 25.0, 0.0), Axis::ZPos, Axis::XPos).unwrap();
        assert_eq!(pos.height_axis(), Axis::YPos);
        let turned = pos.half_turn(120.0, 80.0);
        assert_eq!(turned.height_axis(), Axis::YNeg);

        let before = pos.footprint(&dims);
        let after = turned.footprint(&dims);
        assert_relative_eq!(after.min_x, 120.0 - before.max_x);
        assert_relative_eq!(after.max_x, 120.0 - before.min_x);
        assert_relative_eq!(after.min_y, 80.0 - before.max_y);
        assert_relative_eq!(after.max_y, 80.0 - before.min_y);

        let aabb = turned.bounding_box(&dims);
        assert_relative_eq!(aabb.min_z, 0.0);
        assert_relative_eq!(aabb.max_z, 40.0);
    }

    #[test]
    fn test_raised() {
        let pos = BoxPosition::new(Point3::new(1.0, 2.0, 3.0), Axis::XPos, Axis::YPos).unwrap();
        assert_relative_eq!(pos.raised(10.0).origin().z, 13.0);
    }

    #[test]
    fn test_parallel_axes_rejected() {
        assert!(BoxPosition::new(Point3::origin(), Axis::YPos, Axis::YNeg).is_err());
    }
}
