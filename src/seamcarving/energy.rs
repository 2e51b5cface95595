// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dual-gradient energy of a pixel
//!
//! Takes the channels (R,G,B) of the pixels on either side of a pixel,
//! squares the difference of each channel, and sums them all up.  A
//! neighbour past the edge of the picture is replaced by the pixel
//! itself.

use super::EnergyFunction;
use image::{GenericImageView, Pixel, Primitive, Rgb};
use itertools::Itertools;
use num_traits::NumCast;

/// The dual-gradient energy function, optionally square-rooted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DualGradientEnergy {
    square_root: bool,
}

impl DualGradientEnergy {
    pub fn new() -> Self {
        DualGradientEnergy { square_root: false }
    }

    /// √(|Δx|² + |Δy|²) rather than the plain sum.
    pub fn square_root() -> Self {
        DualGradientEnergy { square_root: true }
    }
}

// (Pixel, Pixel) -> squared distance in RGB.  This is the rusty
// expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = |Δx|²+|Δy|²
fn energy_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S>,
    S: Primitive,
    Rgb<S>: Pixel<Subpixel = S>,
{
    let channel = |c: &S| -> f64 { <f64 as NumCast>::from(*c).unwrap_or_default() };
    p1.to_rgb()
        .channels()
        .iter()
        .zip_eq(p2.to_rgb().channels())
        .map(|(c1, c2)| {
            let d = channel(c1) - channel(c2);
            d * d
        })
        .sum()
}

impl<I, P, S> EnergyFunction<I> for DualGradientEnergy
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S>,
    S: Primitive,
    Rgb<S>: Pixel<Subpixel = S>,
{
    fn energy(&self, picture: &I, x: u32, y: u32) -> f64 {
        let (mw, mh) = (picture.width() - 1, picture.height() - 1);
        let (left, right) = (x.saturating_sub(1), (x + 1).min(mw));
        let (up, down) = (y.saturating_sub(1), (y + 1).min(mh));

        let dx = energy_of_pair(&picture.get_pixel(left, y), &picture.get_pixel(right, y));
        let dy = energy_of_pair(&picture.get_pixel(x, up), &picture.get_pixel(x, down));
        if self.square_root {
            (dx + dy).sqrt()
        } else {
            dx + dy
        }
    }
}
