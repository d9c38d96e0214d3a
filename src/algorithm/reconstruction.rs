//! Grid reconstruction by walking the union graph
//!
//! Reconstruction works row by row:
//! 1. Top row: tiles without a top neighbor seed a walk along `right` links
//! 2. Bottom row: the same with tiles lacking a bottom neighbor
//! 3. Middle rows: derived one at a time outward from a discovered anchor
//!    row, bridging missing `right` links through the anchor's vertical links
//! 4. Rows are flattened top to bottom, left to right
//!
//! Nothing here raises an error for an unsolvable puzzle. Rows that cannot
//! be derived stay empty and the flattened order comes back short.

use crate::algorithm::union::Union;
use crate::io::error::{Result, invalid_source};
use crate::spatial::grid::GridShape;
use crate::spatial::permutation::is_permutation;
use crate::spatial::side::Side;

/// Rows discovered by the reconstructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    rows: Vec<Vec<usize>>,
    tile_count: usize,
}

impl Reconstruction {
    /// Discovered rows, top to bottom; unsolved rows are empty
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Flattened row-major order: slot `i` holds the input index of its tile
    pub fn order(&self) -> Vec<usize> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Number of rows that were filled
    pub fn filled_rows(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_empty()).count()
    }

    /// Whether the order places every input tile exactly once
    pub fn is_complete(&self) -> bool {
        is_permutation(&self.order(), self.tile_count)
    }
}

/// Walks unions into a row-major tile order
pub struct GridReconstructor<'a> {
    unions: &'a [Union],
    shape: GridShape,
    rows: Vec<Vec<usize>>,
}

impl<'a> GridReconstructor<'a> {
    /// Prepare a reconstruction over unions keyed by input index
    ///
    /// # Errors
    ///
    /// Returns an error if the union at position `i` does not describe tile `i`
    pub fn new(unions: &'a [Union], shape: GridShape) -> Result<Self> {
        if let Some((position, union)) = unions
            .iter()
            .enumerate()
            .find(|(position, union)| union.index != *position)
        {
            return Err(invalid_source(&format!(
                "union at position {position} describes tile {}",
                union.index
            )));
        }

        Ok(Self {
            unions,
            shape,
            rows: vec![Vec::new(); shape.rows],
        })
    }

    /// Run all reconstruction stages
    pub fn reconstruct(mut self) -> Reconstruction {
        let last = self.shape.rows.saturating_sub(1);

        if let Some(row) = self.discover_edge_row(Side::Top) {
            log::info!("top row found: {row:?}");
            self.set_row(0, row);
        } else {
            log::warn!("no seed completed the top row");
        }

        if self.row(last).is_empty() {
            if let Some(row) = self.discover_edge_row(Side::Bottom) {
                log::info!("bottom row found: {row:?}");
                self.set_row(last, row);
            } else {
                log::warn!("no seed completed the bottom row");
            }
        }

        if !self.row(0).is_empty() {
            for target in 1..self.shape.rows {
                if !self.infer_row(target, target - 1) {
                    break;
                }
            }
        } else if !self.row(last).is_empty() {
            for target in (0..last).rev() {
                if !self.infer_row(target, target + 1) {
                    break;
                }
            }
        } else {
            log::warn!("no anchor row, middle rows skipped");
        }

        Reconstruction {
            rows: self.rows,
            tile_count: self.unions.len(),
        }
    }

    fn union(&self, index: usize) -> Option<&'a Union> {
        self.unions.get(index)
    }

    fn row(&self, index: usize) -> &[usize] {
        self.rows.get(index).map_or(&[][..], Vec::as_slice)
    }

    fn set_row(&mut self, index: usize, row: Vec<usize>) {
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row;
        }
    }

    // Seeds are tried in input order; the first complete walk wins
    fn discover_edge_row(&self, wall: Side) -> Option<Vec<usize>> {
        self.unions
            .iter()
            .filter(|union| union.neighbor(wall).is_none())
            .find_map(|seed| self.walk_edge_row(seed, wall))
    }

    fn walk_edge_row(&self, seed: &'a Union, wall: Side) -> Option<Vec<usize>> {
        let mut row = vec![seed.index];
        let mut current = seed;

        while row.len() < self.shape.cols {
            let next = self.union(current.right?)?;
            if next.neighbor(wall).is_some() || next.index == current.index {
                return None;
            }
            row.push(next.index);
            current = next;
        }

        Some(row)
    }

    fn infer_row(&mut self, target: usize, known: usize) -> bool {
        let Some(known_row) = self.rows.get(known).cloned() else {
            return false;
        };
        let toward = if target > known {
            Side::Bottom
        } else {
            Side::Top
        };

        let mut candidates = Vec::new();
        for neighbor in known_row
            .iter()
            .filter_map(|&index| self.union(index).and_then(|union| union.neighbor(toward)))
        {
            if !candidates.contains(&neighbor) {
                candidates.push(neighbor);
            }
        }

        // Keep only candidates linked sideways to another candidate
        let members: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&index| {
                self.union(index).is_some_and(|union| {
                    [union.left, union.right]
                        .into_iter()
                        .flatten()
                        .any(|side_neighbor| candidates.contains(&side_neighbor))
                })
            })
            .collect();

        for &seed in &members {
            if let Some(row) = self.walk_inner_row(seed, &known_row, toward, &members) {
                log::info!("row {target} inferred from row {known}: {row:?}");
                self.set_row(target, row);
                return true;
            }
        }

        log::warn!(
            "row {target} could not be inferred from {} candidates",
            members.len()
        );
        self.set_row(target, Vec::new());
        false
    }

    // Missing right links fall back to the known row's vertical link at the next column
    fn walk_inner_row(
        &self,
        seed: usize,
        known_row: &[usize],
        toward: Side,
        members: &[usize],
    ) -> Option<Vec<usize>> {
        let mut row = vec![seed];
        let mut current = seed;
        let mut matched = 1;

        for column in 1..self.shape.cols {
            let previous = current;
            current = match self.union(current)?.right {
                Some(next) => next,
                None => self.union(*known_row.get(column)?)?.neighbor(toward)?,
            };
            row.push(current);

            if members.contains(&current) && previous != current {
                matched += 1;
            }
        }

        (matched >= members.len()).then_some(row)
    }
}
