//! Supply module - bag-randomized shape queue
//!
//! Implements the bag randomizer: the whole catalog is shuffled into a bag with
//! Fisher-Yates, shapes are drawn from the front until the bag is empty, then a
//! fresh shuffled copy replaces it. Every catalog shape appears exactly once per bag,
//! so no shape can go missing for more than `2 * catalog_len - 1` draws.
//!
//! A bounded lookahead queue sits in front of the bag; players see the lookahead,
//! never the bag.

use std::collections::VecDeque;

use log::debug;
use rand::RngCore;

use crate::error::ConfigError;
use crate::game_over::has_any_move;
use crate::grid::Grid;
use crate::rng::{shuffle, SimpleRng};
use crate::shape::Shape;

/// Bag-fed lookahead queue of shapes
#[derive(Debug, Clone)]
pub struct ShapeSupply<R = SimpleRng> {
    catalog: Vec<Shape>,
    /// Catalog indices still to be drawn from the current bag
    bag: VecDeque<usize>,
    /// Catalog indices of upcoming shapes, front first
    lookahead: VecDeque<usize>,
    lookahead_size: usize,
    bags_dealt: u64,
    rng: R,
}

impl<R: RngCore> ShapeSupply<R> {
    /// Create a supply for a `rows x columns` grid with the lookahead pre-filled.
    ///
    /// Fails on an empty catalog, a zero lookahead, or a shape whose bounding box is
    /// larger than the grid (it could never be placed).
    pub fn new(
        catalog: Vec<Shape>,
        rows: usize,
        columns: usize,
        lookahead_size: usize,
        rng: R,
    ) -> Result<Self, ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if lookahead_size == 0 {
            return Err(ConfigError::InvalidLookahead);
        }
        if let Some(shape) = catalog
            .iter()
            .find(|s| s.height() > rows || s.width() > columns)
        {
            return Err(ConfigError::ShapeExceedsGrid {
                name: shape.name().to_string(),
                height: shape.height(),
                width: shape.width(),
                rows,
                columns,
            });
        }

        let mut supply = Self {
            bag: VecDeque::with_capacity(catalog.len()),
            lookahead: VecDeque::with_capacity(lookahead_size),
            catalog,
            lookahead_size,
            bags_dealt: 0,
            rng,
        };
        while supply.lookahead.len() < supply.lookahead_size {
            let next = supply.draw();
            supply.lookahead.push_back(next);
        }
        Ok(supply)
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        let mut order: Vec<usize> = (0..self.catalog.len()).collect();
        shuffle(&mut self.rng, &mut order);
        self.bag.extend(order);
        self.bags_dealt += 1;
        debug!("supply: dealt bag #{} ({} shapes)", self.bags_dealt, self.catalog.len());
    }

    /// Draw the next catalog index from the bag
    fn draw(&mut self) -> usize {
        if self.bag.is_empty() {
            self.refill_bag();
        }
        // The catalog is non-empty, so a refilled bag always has a front.
        self.bag.pop_front().unwrap_or_default()
    }

    /// Remove and return the front of the lookahead, then append one new shape
    pub fn take_next(&mut self) -> Shape {
        let front = match self.lookahead.pop_front() {
            Some(idx) => idx,
            None => self.draw(),
        };
        let next = self.draw();
        self.lookahead.push_back(next);
        self.catalog[front].clone()
    }

    /// The current lookahead, in draw order
    pub fn peek_all(&self) -> impl ExactSizeIterator<Item = &Shape> + '_ {
        self.lookahead.iter().map(move |&idx| &self.catalog[idx])
    }

    /// Peek at the shape that the next `take_next` returns
    pub fn peek(&self) -> Option<&Shape> {
        self.lookahead.front().map(|&idx| &self.catalog[idx])
    }

    /// True if none of the lookahead shapes fits anywhere on `grid`
    pub fn is_game_over(&self, grid: &Grid) -> bool {
        !has_any_move(self.peek_all(), grid)
    }

    pub fn catalog(&self) -> &[Shape] {
        &self.catalog
    }

    pub fn lookahead_size(&self) -> usize {
        self.lookahead_size
    }

    /// Number of bags shuffled so far
    pub fn bags_dealt(&self) -> u64 {
        self.bags_dealt
    }

    /// Shapes left in the current bag
    pub fn bag_remaining(&self) -> usize {
        self.bag.len()
    }
}
