#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::{debug, log_enabled, trace, warn, Level};

use crate::auxiliary::config::INITIAL_FILL;
use crate::auxiliary::randomizer::{draw_state, generate_seed, seeded_rng, Seed};
use crate::traits_and_structs::{Cell, CellAutomata};

/// Next state indexed by `[live neighbor count][current state]`. Any nonzero
/// entry means alive.
pub type RuleTable = [[u8; 2]; 9];

/// (Δrow, Δcol) of the eight surrounding cells.
#[rustfmt::skip]
pub const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// B3/S23.
pub const RULES: RuleTable = [
    [0, 0], // 0
    [0, 0], // 1
    [0, 1], // 2: unchanged
    [1, 1], // 3: born or survives
    [0, 0], // 4
    [0, 0], // 5
    [0, 0], // 6
    [0, 0], // 7
    [0, 0], // 8
];

/// A toroidal Life grid holding two generations in one flat buffer.
///
/// The half picked by `cur` is the current generation, the other half is
/// scratch. `step` reads only the current half, writes only the scratch half,
/// then flips `cur`.
#[derive(Clone, Debug)]
pub struct GridState {
    cells: Vec<u8>,
    cur: bool,
    height: usize,
    width: usize,
    generation: u64,
    fill: f32,
}

impl GridState {
    /// A randomized `height x width` grid. Zero dimensions are clamped to 1.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_fill(height, width, INITIAL_FILL)
    }

    /// Like `new`, with cells starting alive when their sample clears `fill`.
    pub fn with_fill(height: usize, width: usize, fill: f32) -> Self {
        if height == 0 || width == 0 {
            warn!(
                "grid of {}x{} cannot be indexed, clamping to at least 1x1",
                height, width
            );
        }
        let height = height.max(1);
        let width = width.max(1);
        let size = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(2))
            .expect("too big");
        let mut result = Self {
            cells: vec![0; size],
            cur: false,
            height,
            width,
            generation: 0,
            fill,
        };
        result.randomize();
        debug!(
            "created {}x{} grid, {} cells alive",
            height,
            width,
            result.population()
        );
        result
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Refill the current generation from a fresh OS-entropy seed.
    pub fn randomize(&mut self) {
        self.randomize_with_seed(generate_seed());
    }

    /// Refill the current generation from `seed`. The scratch half is left alone.
    pub fn randomize_with_seed(&mut self, seed: Seed) {
        let mut rng = seeded_rng(seed);
        let fill = self.fill;
        for c in self.current_mut() {
            *c = draw_state(&mut rng, fill);
        }
    }

    /// Kill every cell of the current generation.
    pub fn clear(&mut self) {
        for c in self.current_mut() {
            *c = 0;
        }
    }

    /// Current-generation cell at (row, col).
    ///
    /// # Panics
    ///
    /// If the coordinate lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.try_get(row, col) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) out of range for {}x{} grid",
                row, col, self.height, self.width
            ),
        }
    }

    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid_idx(row, col)
            .map(|i| Cell::from_state(self.current()[i]))
    }

    /// Overwrite a current-generation cell.
    ///
    /// # Panics
    ///
    /// If the coordinate lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = match self.grid_idx(row, col) {
            Some(i) => i,
            None => panic!(
                "cell ({}, {}) out of range for {}x{} grid",
                row, col, self.height, self.width
            ),
        };
        self.current_mut()[i] = cell.state();
    }

    /// Live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current().iter().filter(|&&c| c != 0).count()
    }

    /// Live toroidal neighbors of (row, col) in the current generation.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.height && col < self.width);
        count_neighbors(self.current(), self.height, self.width, row, col)
    }

    /// Advance one generation under B3/S23.
    pub fn step(&mut self) {
        self.step_with(&RULES);
    }

    /// Advance one generation under `rules`.
    pub fn step_with(&mut self, rules: &RuleTable) {
        let (height, width) = (self.height, self.width);
        let (lo, hi) = self.cells.split_at_mut(height * width);
        let (current, scratch) = if self.cur {
            (&*hi, lo)
        } else {
            (&*lo, hi)
        };

        for row in 0..height {
            for col in 0..width {
                let i = row * width + col;
                let count = count_neighbors(current, height, width, row, col);
                scratch[i] = (rules[count as usize][current[i] as usize] != 0) as u8;
            }
        }

        self.cur = !self.cur;
        self.generation += 1;
        if log_enabled!(Level::Trace) {
            trace!(
                "generation {}: {} cells alive",
                self.generation,
                self.population()
            );
        }
    }

    fn grid_idx(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    fn half_offset(&self) -> usize {
        self.cur as usize * self.height * self.width
    }

    fn current(&self) -> &[u8] {
        let start = self.half_offset();
        &self.cells[start..start + self.height * self.width]
    }

    fn current_mut(&mut self) -> &mut [u8] {
        let start = self.half_offset();
        let len = self.height * self.width;
        &mut self.cells[start..start + len]
    }
}

fn count_neighbors(current: &[u8], height: usize, width: usize, row: usize, col: usize) -> u8 {
    let (h, w) = (height as isize, width as isize);
    NEIGHBORS
        .iter()
        .map(|&(dr, dc)| {
            let r = (row as isize + dr + h) % h;
            let c = (col as isize + dc + w) % w;
            current[r as usize * width + c as usize]
        })
        .sum()
}

impl CellAutomata for GridState {
    fn randomize(&mut self) {
        GridState::randomize(self)
    }

    fn update(&mut self) {
        self.step()
    }

    fn clear(&mut self) {
        GridState::clear(self)
    }

    fn describe() -> String {
        "Conway's Game of Life (B3/S23) on a torus: a dead cell with three live \
         neighbors is born, a live cell with two or three survives, everything \
         else dies."
            .to_string()
    }
}
