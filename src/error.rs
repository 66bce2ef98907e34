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

//! The error module contains the single error class of the library:
//! input parameters for which the size formula is undefined.

use thiserror::Error;

/// An input parameter that makes the object size formula undefined.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// The image width is zero pixels, a division by zero.
    #[error("image width must be greater than zero pixels")]
    ZeroImageWidth,

    /// The image height is zero pixels, a division by zero.
    #[error("image height must be greater than zero pixels")]
    ZeroImageHeight,

    /// The angle of view is not strictly between 0° and 180°.
    #[error("angle of view must be between 0 and 180 degrees, got {0}")]
    AngleOfView(f64),

    /// The altitude is not a positive, finite number of metres.
    #[error("altitude must be a positive number of metres, got {0}")]
    Altitude(f64),

    /// The object size at this altitude is too large to represent.
    #[error("object size overflows at an altitude of {0} metres")]
    Overflow(f64),
}
