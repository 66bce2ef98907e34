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

//! aerial-gsd
//!
//! A library for estimating the size on the ground of an object visible in
//! an aerial or satellite image.
//!
//! ## Ground sample distance
//!
//! The ground sample distance (GSD) of an image is the distance on the ground
//! represented by one pixel. A camera at an altitude `h` with an angle of
//! view `θ` covers a ground footprint of:
//!
//! footprint = 2 * h * tan(θ / 2)
//!
//! The GSD along each image axis is the footprint divided by the number of
//! pixels along that axis, and the ground extent of an object is its pixel
//! extent multiplied by the GSD.
//!
//! In this model the object's pixel extent is the full image, so the pixel
//! counts cancel: the estimated width and height of the object are both
//! equal to the ground footprint, whatever the image dimensions.
//! The focal length of the camera lens is accepted by the interface but
//! does not take part in the calculation.
//!
//! ## Design
//!
//! The `Capture` class holds the parameters of an image capture: the image
//! dimensions in pixels, the lens focal length, the altitude and the
//! camera angle of view. A `Capture` can only be constructed from parameters
//! for which the calculation is defined; invalid parameters are reported as
//! an `InvalidInput` error.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//! - [thiserror](https://crates.io/crates/thiserror) - to define `InvalidInput`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//! The `aerial-size` command line program is built with the `cli` feature.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;

pub mod camera;
pub mod error;
pub mod gsd;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use camera::Millimetres;
pub use error::InvalidInput;
pub use gsd::GroundSampleDistance;
pub use icao_units::si::Metres;

/// The parameters of an aerial or satellite image capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capture {
    /// The width of the image in pixels.
    image_width: u32,
    /// The height of the image in pixels.
    image_height: u32,
    /// The focal length of the camera lens, currently inert.
    focal_length: Millimetres,
    /// The altitude of the camera above the ground.
    altitude: Metres,
    /// The camera angle of view.
    angle_of_view: Degrees,
}

impl Validate for Capture {
    /// Test whether a `Capture` is valid.
    /// Whether the image dimensions are not zero, 0° < `angle_of_view` < 180°,
    /// the `altitude` is positive and the object size is finite.
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

impl Capture {
    /// Constructor.
    /// * `image_width`, `image_height` - the image dimensions in pixels.
    /// * `focal_length` - the focal length of the camera lens.
    /// * `altitude` - the altitude of the camera above the ground.
    /// * `angle_of_view` - the camera angle of view.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either image dimension is zero, the angle
    /// of view is not between 0° and 180°, the altitude is not positive or
    /// the object size is too large to represent.
    pub fn new(
        image_width: u32,
        image_height: u32,
        focal_length: Millimetres,
        altitude: Metres,
        angle_of_view: Degrees,
    ) -> Result<Self, InvalidInput> {
        let capture = Self {
            image_width,
            image_height,
            focal_length,
            altitude,
            angle_of_view,
        };
        capture.check()?;
        Ok(capture)
    }

    fn check(&self) -> Result<(), InvalidInput> {
        if self.image_width == 0 {
            return Err(InvalidInput::ZeroImageWidth);
        }
        if self.image_height == 0 {
            return Err(InvalidInput::ZeroImageHeight);
        }
        if !camera::is_valid_angle_of_view(self.angle_of_view) {
            return Err(InvalidInput::AngleOfView(self.angle_of_view.0));
        }
        if !(self.altitude.0.is_finite() && 0.0 < self.altitude.0) {
            return Err(InvalidInput::Altitude(self.altitude.0));
        }
        let (width, height) = self.object_size();
        if !(width.0.is_finite() && height.0.is_finite()) {
            return Err(InvalidInput::Overflow(self.altitude.0));
        }
        Ok(())
    }

    /// The width of the image in pixels.
    #[must_use]
    pub const fn image_width(&self) -> u32 {
        self.image_width
    }

    /// The height of the image in pixels.
    #[must_use]
    pub const fn image_height(&self) -> u32 {
        self.image_height
    }

    /// The focal length of the camera lens.
    #[must_use]
    pub const fn focal_length(&self) -> Millimetres {
        self.focal_length
    }

    /// The focal length of the camera lens in metres.
    #[must_use]
    pub fn focal_length_metres(&self) -> Metres {
        Metres::from(self.focal_length)
    }

    /// The altitude of the camera above the ground.
    #[must_use]
    pub const fn altitude(&self) -> Metres {
        self.altitude
    }

    /// The camera angle of view.
    #[must_use]
    pub const fn angle_of_view(&self) -> Degrees {
        self.angle_of_view
    }

    /// Half of the camera angle of view.
    #[must_use]
    pub fn half_angle(&self) -> Angle {
        gsd::half_angle_of_view(self.angle_of_view)
    }

    /// The ground extent covered by the camera angle of view.
    #[must_use]
    pub fn ground_footprint(&self) -> Metres {
        gsd::calculate_ground_footprint(self.altitude, self.half_angle())
    }

    /// The ground sample distance along the width and height of the image.
    #[must_use]
    pub fn ground_sample_distance(&self) -> GroundSampleDistance {
        GroundSampleDistance::from_footprint(
            self.ground_footprint(),
            self.image_width,
            self.image_height,
        )
    }

    /// The estimated width and height of the object on the ground.
    ///
    /// returns the object width and height.
    #[must_use]
    pub fn object_size(&self) -> (Metres, Metres) {
        let gsd = self.ground_sample_distance();
        (
            gsd::calculate_object_extent(gsd.width(), self.image_width),
            gsd::calculate_object_extent(gsd.height(), self.image_height),
        )
    }
}

/// Estimate the width and height on the ground of an object in an aerial
/// or satellite image.
/// * `image_width_pixels`, `image_height_pixels` - the image dimensions in pixels.
/// * `focal_length` - the focal length of the camera lens, not used.
/// * `altitude` - the altitude of the image capture.
/// * `angle_of_view` - the camera angle of view.
///
/// returns the estimated object width and height.
///
/// # Errors
///
/// Returns `InvalidInput` if either image dimension is zero, the angle
/// of view is not between 0° and 180° or the altitude is not positive.
///
/// # Examples
/// ```
/// use aerial_gsd::*;
/// use angle_sc::is_within_tolerance;
///
/// let (width, height) = estimate_object_size(
///     1920,
///     1080,
///     Millimetres(35.0),
///     Metres(1000.0),
///     Degrees(60.0),
/// )
/// .expect("valid capture");
/// assert!(is_within_tolerance(1154.70, width.0, 0.005));
/// assert!(is_within_tolerance(1154.70, height.0, 0.005));
///
/// let result = estimate_object_size(0, 1080, Millimetres(35.0), Metres(1000.0), Degrees(60.0));
/// assert_eq!(Err(InvalidInput::ZeroImageWidth), result);
/// ```
pub fn estimate_object_size(
    image_width_pixels: u32,
    image_height_pixels: u32,
    focal_length: Millimetres,
    altitude: Metres,
    angle_of_view: Degrees,
) -> Result<(Metres, Metres), InvalidInput> {
    let capture = Capture::new(
        image_width_pixels,
        image_height_pixels,
        focal_length,
        altitude,
        angle_of_view,
    )?;
    Ok(capture.object_size())
}
