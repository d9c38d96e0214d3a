//! Best-neighbor summaries derived from similarity scores

use crate::analysis::similarity::SimilarityTable;
use crate::io::configuration::ACCURACY_FACTOR;
use crate::io::error::{ReassemblyError, Result};
use crate::spatial::side::Side;

/// Best accepted neighbor of one tile in each direction
///
/// `None` means no candidate cleared the accuracy factor. A tile on the
/// true grid border and a tile whose real neighbor scored too low look the
/// same here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Union {
    /// Input index of the tile this union describes
    pub index: usize,
    /// Neighbor above
    pub top: Option<usize>,
    /// Neighbor below
    pub bottom: Option<usize>,
    /// Neighbor to the left
    pub left: Option<usize>,
    /// Neighbor to the right
    pub right: Option<usize>,
}

impl Union {
    /// Union with no accepted neighbor in any direction
    pub const fn isolated(index: usize) -> Self {
        Self {
            index,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// Accepted neighbor in a direction
    pub const fn neighbor(&self, side: Side) -> Option<usize> {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set_neighbor(&mut self, side: Side, neighbor: Option<usize>) {
        match side {
            Side::Top => self.top = neighbor,
            Side::Bottom => self.bottom = neighbor,
            Side::Left => self.left = neighbor,
            Side::Right => self.right = neighbor,
        }
    }
}

/// Index and value of the maximum score, first occurrence winning ties
pub fn best_match<I>(scores: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    scores
        .into_iter()
        .enumerate()
        .fold(None, |best, (index, score)| {
            if score.is_nan() {
                return best;
            }
            match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((index, score)),
            }
        })
}

/// Turns per-side score lists into unions
pub struct UnionBuilder<'a> {
    table: &'a SimilarityTable,
    accuracy_factor: f64,
}

impl<'a> UnionBuilder<'a> {
    /// Builder using the default accuracy factor
    pub const fn new(table: &'a SimilarityTable) -> Self {
        Self::with_accuracy(table, ACCURACY_FACTOR)
    }

    /// Builder with an explicit accuracy factor
    pub const fn with_accuracy(table: &'a SimilarityTable, accuracy_factor: f64) -> Self {
        Self {
            table,
            accuracy_factor,
        }
    }

    /// Build the union of one tile
    ///
    /// A direction gets the first index attaining the maximum score when
    /// that maximum strictly exceeds the accuracy factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile index is out of range
    pub fn build(&self, tile_index: usize) -> Result<Union> {
        let mut union = Union::isolated(tile_index);

        for side in Side::ALL {
            let scores =
                self.table
                    .scores(tile_index, side)
                    .ok_or(ReassemblyError::InvalidTileIndex {
                        index: tile_index,
                        tile_count: self.table.tile_count(),
                    })?;

            let best = best_match(scores.iter().copied());
            let neighbor = best
                .filter(|&(_, score)| score > self.accuracy_factor)
                .map(|(index, _)| index);

            if let Some((index, score)) = best {
                log::debug!("tile {tile_index} {side}: best {index} scoring {score:.3}");
            }
            union.set_neighbor(side, neighbor);
        }

        Ok(union)
    }

    /// Build the unions of every tile, keyed by input index
    ///
    /// # Errors
    ///
    /// Returns the first error of [`Self::build`]
    pub fn build_all(&self) -> Result<Vec<Union>> {
        (0..self.table.tile_count())
            .map(|index| self.build(index))
            .collect()
    }
}
