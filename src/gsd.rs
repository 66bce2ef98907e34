// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The gsd module contains functions for calculating the ground sample
//! distance (GSD) of an image: the distance on the ground represented by
//! one pixel.
//!
//! The ground footprint of an image is the ground extent covered by the
//! camera's angle of view from a given altitude:
//!
//! footprint = 2 * altitude * tan(angle of view / 2)
//!
//! The GSD along an image axis is the footprint divided by the number of
//! pixels along that axis.

use crate::Metres;
use angle_sc::{Angle, Degrees};

/// The ground sample distance of an image along its width and height,
/// in metres per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundSampleDistance {
    /// Metres per pixel across the width of the image.
    width: f64,
    /// Metres per pixel across the height of the image.
    height: f64,
}

impl GroundSampleDistance {
    /// Constructor.
    /// * `width` - metres per pixel across the width of the image.
    /// * `height` - metres per pixel across the height of the image.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Calculate the `GroundSampleDistance` of an image from its ground
    /// footprint.
    /// @pre `image_width` > 0 and `image_height` > 0.
    /// * `footprint` - the ground footprint of the image.
    /// * `image_width`, `image_height` - the image dimensions in pixels.
    #[must_use]
    pub fn from_footprint(footprint: Metres, image_width: u32, image_height: u32) -> Self {
        Self::new(
            calculate_gsd(footprint, image_width),
            calculate_gsd(footprint, image_height),
        )
    }

    /// Metres per pixel across the width of the image.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Metres per pixel across the height of the image.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Calculate half of a camera angle of view.
/// * `angle_of_view` - the camera angle of view.
#[must_use]
pub fn half_angle_of_view(angle_of_view: Degrees) -> Angle {
    Angle::from(Degrees(0.5 * angle_of_view.0))
}

/// Calculate the ground footprint of an image using the half angle tangent
/// rule.
/// @pre 0° < `half_angle` < 90°.
/// * `altitude` - the altitude of the camera above the ground.
/// * `half_angle` - half of the camera angle of view.
/// # Examples
/// ```
/// use aerial_gsd::{Degrees, Metres};
/// use aerial_gsd::gsd::{calculate_ground_footprint, half_angle_of_view};
/// use angle_sc::is_within_tolerance;
///
/// // A 90° angle of view covers twice the altitude.
/// let half_angle = half_angle_of_view(Degrees(90.0));
/// let footprint = calculate_ground_footprint(Metres(500.0), half_angle);
/// assert!(is_within_tolerance(1000.0, footprint.0, 1e-9));
/// ```
#[must_use]
pub fn calculate_ground_footprint(altitude: Metres, half_angle: Angle) -> Metres {
    let tan_half_angle = half_angle.sin().0 / half_angle.cos().0;
    Metres(2.0 * altitude.0 * tan_half_angle)
}

/// Calculate the ground sample distance along an image axis.
/// @pre `pixels` > 0.
/// * `footprint` - the ground footprint of the image.
/// * `pixels` - the number of pixels along the axis.
///
/// returns the ground sample distance in metres per pixel.
/// # Examples
/// ```
/// use aerial_gsd::Metres;
/// use aerial_gsd::gsd::calculate_gsd;
///
/// assert_eq!(0.5, calculate_gsd(Metres(960.0), 1920));
/// ```
#[must_use]
pub fn calculate_gsd(footprint: Metres, pixels: u32) -> f64 {
    footprint.0 / f64::from(pixels)
}

/// Calculate the ground extent of an object from its size in pixels.
/// * `gsd` - the ground sample distance in metres per pixel.
/// * `pixels` - the extent of the object in pixels.
/// # Examples
/// ```
/// use aerial_gsd::Metres;
/// use aerial_gsd::gsd::calculate_object_extent;
///
/// assert_eq!(Metres(960.0), calculate_object_extent(0.5, 1920));
/// ```
#[must_use]
pub fn calculate_object_extent(gsd: f64, pixels: u32) -> Metres {
    Metres(f64::from(pixels) * gsd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Radians};

    #[test]
    fn test_half_angle_of_view() {
        for i in 1..180 {
            let angle_of_view = i as f64;
            let half_angle = half_angle_of_view(Degrees(angle_of_view));
            assert!(is_within_tolerance(
                0.5 * angle_of_view.to_radians(),
                Radians::from(half_angle).0,
                8.0 * f64::EPSILON
            ));
        }
    }

    #[test]
    fn test_calculate_ground_footprint() {
        let altitude = Metres(1000.0);

        let footprint = calculate_ground_footprint(altitude, half_angle_of_view(Degrees(60.0)));
        assert!(is_within_tolerance(1154.7005383792514, footprint.0, 1e-9));

        let footprint = calculate_ground_footprint(altitude, half_angle_of_view(Degrees(120.0)));
        assert!(is_within_tolerance(3464.1016151377535, footprint.0, 1e-9));

        let footprint = calculate_ground_footprint(Metres(0.0), half_angle_of_view(Degrees(60.0)));
        assert_eq!(0.0, footprint.0);
    }

    #[test]
    fn test_calculate_ground_footprint_increases_with_angle() {
        let altitude = Metres(250.0);
        let mut previous = Metres(0.0);
        for i in 1..180 {
            let half_angle = half_angle_of_view(Degrees(i as f64));
            let footprint = calculate_ground_footprint(altitude, half_angle);
            assert!(previous.0 < footprint.0);
            previous = footprint;
        }
    }

    #[test]
    fn test_ground_sample_distance_from_footprint() {
        let footprint = Metres(1152.0);
        let gsd = GroundSampleDistance::from_footprint(footprint, 1920, 1080);
        assert_eq!(0.6, gsd.width());
        assert!(is_within_tolerance(1152.0 / 1080.0, gsd.height(), f64::EPSILON));

        let extent = calculate_object_extent(gsd.width(), 1920);
        assert!(is_within_tolerance(footprint.0, extent.0, 1e-12));
        let extent = calculate_object_extent(gsd.height(), 1080);
        assert!(is_within_tolerance(footprint.0, extent.0, 1e-12));

        let gsd_clone = gsd;
        assert_eq!(gsd_clone, gsd);
        println!("GroundSampleDistance: {:?}", gsd);
    }
}
