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

//! aerial-size
//!
//! Estimate the size on the ground of an object in an aerial or satellite
//! image from the image dimensions, camera and altitude of the capture.
//!
//! Set `RUST_LOG=debug` to trace the intermediate ground sample distance.

use aerial_gsd::{Capture, Degrees, Metres, Millimetres};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aerial-size")]
#[command(about = "Estimate the ground size of an object in an aerial image")]
#[command(version)]
struct Cli {
    /// Image width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: u32,

    /// Image height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: u32,

    /// Camera lens focal length in millimetres
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    focal_length: f64,

    /// Image capture altitude in metres
    #[arg(long, value_name = "METRES", allow_negative_numbers = true)]
    altitude: f64,

    /// Camera angle of view in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    angle_of_view: f64,
}

impl Cli {
    fn capture(&self) -> Result<Capture> {
        Capture::new(
            self.width,
            self.height,
            Millimetres(self.focal_length),
            Metres(self.altitude),
            Degrees(self.angle_of_view),
        )
        .context("invalid image capture parameters")
    }
}

/// Render the estimated object size, one line per axis.
fn format_object_size(width: Metres, height: Metres) -> String {
    format!(
        "Estimated object width: {:.2} meters\nEstimated object height: {:.2} meters",
        width.0, height.0
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let capture = cli.capture()?;
    let gsd = capture.ground_sample_distance();
    tracing::debug!(
        footprint_m = capture.ground_footprint().0,
        gsd_width_m = gsd.width(),
        gsd_height_m = gsd.height(),
        "ground sample distance"
    );

    let (width, height) = capture.object_size();
    println!("{}", format_object_size(width, height));

    Ok(())
}
