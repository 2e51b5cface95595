// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam finding by dynamic programming.
//!
//! Fills a table of the least energy of any seam ending at each pixel,
//! one column at a time, then walks back from the cheapest cell of the
//! last column.  No graph is built.

use super::{check_dimensions, EnergyFunction, SeamFinder};
use crate::errors::Result;
use crate::twodmap::TwoDimensionalMap;
use image::GenericImageView;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// The rows a seam may come from (or go to) in the adjacent column.
fn adjacent_rows(y: u32, height: u32) -> RangeInclusive<u32> {
    y.saturating_sub(1)..=(y + 1).min(height - 1)
}

// The row in `rows` of column `x` with the least cumulative energy.
// The first one wins a tie.
fn cheapest_row(table: &TwoDimensionalMap<f64>, x: u32, rows: RangeInclusive<u32>) -> u32 {
    let start = *rows.start();
    rows.min_by(|a, b| {
        table[(x, *a)]
            .partial_cmp(&table[(x, *b)])
            .unwrap_or(Ordering::Equal)
    })
    .unwrap_or(start)
}

/// Builds the cumulative energy table: column 0 holds each pixel's
/// energy, and every later cell its own energy plus the least of the
/// (up to) three cells beside it in the previous column.
fn cumulative_energy<I, E>(picture: &I, energy: &E, width: u32, height: u32) -> TwoDimensionalMap<f64>
where
    I: GenericImageView,
    E: EnergyFunction<I> + ?Sized,
{
    let mut table = TwoDimensionalMap::new(width, height);
    for y in 0..height {
        table[(0, y)] = energy.energy(picture, 0, y);
    }
    for x in 1..width {
        for y in 0..height {
            let parent = cheapest_row(&table, x - 1, adjacent_rows(y, height));
            table[(x, y)] = energy.energy(picture, x, y) + table[(x - 1, parent)];
        }
    }
    table
}

/// Given a filled table, return the row of the least-energy seam in
/// each column, left to right.  The walk back re-examines each
/// column's neighbours rather than storing parents.
fn table_to_seam(table: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = (table.width, table.height);
    let mut row = cheapest_row(table, width - 1, 0..=height - 1);
    let mut seam = Vec::with_capacity(width as usize);
    seam.push(row);
    for x in (1..width).rev() {
        row = cheapest_row(table, x - 1, adjacent_rows(row, height));
        seam.push(row);
    }
    seam.reverse();
    seam
}

/// The dynamic programming seam finder: O(width × height) time and one
/// table of that size.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgrammingSeamFinder;

impl SeamFinder for DynamicProgrammingSeamFinder {
    fn find_seam<I, E>(&self, picture: &I, energy: &E) -> Result<Vec<u32>>
    where
        I: GenericImageView,
        E: EnergyFunction<I> + ?Sized,
    {
        let (width, height) = check_dimensions(picture)?;
        let table = cumulative_energy(picture, energy, width, height);
        Ok(table_to_seam(&table))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{luma_energy, picture, ENERGY_DATA};
    use super::*;

    #[test]
    fn adjacent_rows_clip_to_the_picture() {
        assert_eq!(adjacent_rows(0, 4), 0..=1);
        assert_eq!(adjacent_rows(2, 4), 1..=3);
        assert_eq!(adjacent_rows(3, 4), 2..=3);
        assert_eq!(adjacent_rows(0, 1), 0..=0);
    }

    #[test]
    fn cumulative_table() {
        let image = picture(5, 4, &ENERGY_DATA);
        let table = cumulative_energy(&image, &luma_energy, 5, 4);
        let column = |x| table.column(x).collect::<Vec<_>>();
        assert_eq!(column(0), vec![9.0, 9.0, 9.0, 9.0]);
        assert_eq!(column(1), vec![18.0, 10.0, 18.0, 18.0]);
        assert_eq!(column(2), vec![10.0, 19.0, 19.0, 27.0]);
        assert_eq!(column(3), vec![19.0, 18.0, 28.0, 19.0]);
        assert_eq!(column(4), vec![27.0, 27.0, 18.0, 28.0]);
    }

    #[test]
    fn energy_grid_to_seam() {
        let image = picture(5, 4, &ENERGY_DATA);
        let seam = DynamicProgrammingSeamFinder
            .find_seam(&image, &luma_energy)
            .unwrap();
        assert_eq!(seam, vec![0, 1, 0, 1, 2]);
    }

    #[test]
    fn single_row_is_all_zeros() {
        let image = picture(4, 1, &[3, 1, 4, 1]);
        let seam = DynamicProgrammingSeamFinder
            .find_seam(&image, &luma_energy)
            .unwrap();
        assert_eq!(seam, vec![0, 0, 0, 0]);
    }

    #[test]
    fn seam_follows_a_diagonal_valley() {
        #[rustfmt::skip]
        let image = picture(4, 4, &[
            0, 9, 9, 9,
            9, 0, 9, 9,
            9, 9, 0, 9,
            9, 9, 9, 0,
        ]);
        let seam = DynamicProgrammingSeamFinder
            .find_seam(&image, &luma_energy)
            .unwrap();
        assert_eq!(seam, vec![0, 1, 2, 3]);
    }
}
