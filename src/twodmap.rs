// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, one cell per pixel.  Holds
/// the energy of each pixel, or the cumulative seam cost of each
/// pixel while the dynamic programming table is being filled.
#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to the default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map from cells laid out row by row.  Returns `None` if
    /// there aren't exactly `width * height` of them.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    // Keep the index math in exactly one place.  Row-major, the same
    // as image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The values of column `x`, top to bottom.
    pub fn column(&self, x: u32) -> impl Iterator<Item = P> + '_ {
        (0..self.height).map(move |y| self[(x, y)])
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_raw(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map.column(1).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn from_raw_rejects_wrong_size() {
        assert!(TwoDimensionalMap::from_raw(3, 2, vec![0u32; 5]).is_none());
    }

    #[test]
    fn cells_are_writable() {
        let mut map: TwoDimensionalMap<f64> = TwoDimensionalMap::new(2, 2);
        map[(1, 1)] = 4.5;
        assert_eq!(map[(1, 1)], 4.5);
        assert_eq!(map[(0, 0)], 0.0);
    }
}
