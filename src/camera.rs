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

//! The camera module contains the camera parameters used to describe an
//! image capture: the lens focal length and the limits of the angle of view.

use crate::Metres;
use angle_sc::Degrees;

/// The number of millimetres in a metre.
pub const MILLIMETRES_PER_METRE: f64 = 1000.0;

/// The exclusive lower bound of a camera angle of view.
pub const MIN_ANGLE_OF_VIEW: Degrees = Degrees(0.0);

/// The exclusive upper bound of a camera angle of view.  
/// At 180° the half angle tangent is infinite.
pub const MAX_ANGLE_OF_VIEW: Degrees = Degrees(180.0);

/// A length in millimetres, e.g. the focal length of a camera lens.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Millimetres(pub f64);

impl From<Millimetres> for Metres {
    /// Convert a length in millimetres to metres.
    /// # Examples
    /// ```
    /// use aerial_gsd::Metres;
    /// use aerial_gsd::camera::Millimetres;
    ///
    /// assert_eq!(Metres(0.035), Metres::from(Millimetres(35.0)));
    /// ```
    fn from(a: Millimetres) -> Self {
        Self(a.0 / MILLIMETRES_PER_METRE)
    }
}

impl From<Metres> for Millimetres {
    fn from(a: Metres) -> Self {
        Self(a.0 * MILLIMETRES_PER_METRE)
    }
}

/// Whether an angle of view lies strictly between `MIN_ANGLE_OF_VIEW` and
/// `MAX_ANGLE_OF_VIEW`.  
/// NaN is not a valid angle of view.
/// * `angle_of_view` - the camera angle of view.
/// # Examples
/// ```
/// use aerial_gsd::Degrees;
/// use aerial_gsd::camera::is_valid_angle_of_view;
///
/// assert!(is_valid_angle_of_view(Degrees(60.0)));
/// assert!(!is_valid_angle_of_view(Degrees(0.0)));
/// assert!(!is_valid_angle_of_view(Degrees(180.0)));
/// ```
#[must_use]
pub fn is_valid_angle_of_view(angle_of_view: Degrees) -> bool {
    MIN_ANGLE_OF_VIEW.0 < angle_of_view.0 && angle_of_view.0 < MAX_ANGLE_OF_VIEW.0
}
