use rand::Rng;

use crate::grid::{Cell, Grid};

pub struct Food {
    grid: Grid,
    pub(crate) position: Cell,
}

impl Food {
    pub fn new(grid: Grid, rng: &mut impl Rng) -> Self {
        let mut food = Food {
            grid,
            position: Cell::new(0, 0),
        };
        food.randomize_position(rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Uniform draw over the whole grid. The new cell may land on the
    /// snake's body; gameplay tolerates that, so no exclusion is done.
    pub fn randomize_position(&mut self, rng: &mut impl Rng) {
        self.position = Cell::new(
            rng.gen_range(0..self.grid.width),
            rng.gen_range(0..self.grid.height),
        );
    }
}
