use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Direction, Grid};

/// Self-collision checks skip the head and the two segments nearest it:
/// those cells are being vacated as the head advances, and a smaller
/// exclusion would falsely kill a length-2 or length-3 snake turning back
/// toward itself.
const SELF_COLLISION_OFFSET: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateResult {
    Continuing,
    Collided,
}

pub struct Snake {
    grid: Grid,
    /// Body cells, head first; insertion order is the movement history.
    /// Holds at most `length` cells after every update.
    pub(crate) positions: Vec<Cell>,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
    pub(crate) score: u32,
    pub(crate) game_over: bool,
}

impl Snake {
    /// A length-1 snake at the grid center, heading in a random direction.
    pub fn new(grid: Grid, rng: &mut impl Rng) -> Self {
        Snake {
            grid,
            positions: vec![grid.center()],
            length: 1,
            direction: *Direction::ALL
                .choose(rng)
                .unwrap_or(&Direction::Right),
            score: 0,
            game_over: false,
        }
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Advances the head one cell in the current direction. On a boundary
    /// hit, or when the new head lands on a body cell at offset
    /// `SELF_COLLISION_OFFSET` or beyond, sets `game_over` and leaves the
    /// body untouched. Otherwise prepends the new head and trims the tail
    /// back to `length`.
    pub fn update(&mut self) -> UpdateResult {
        let new_head = self.head().step(self.direction);

        if !self.grid.contains(new_head) {
            self.game_over = true;
            return UpdateResult::Collided;
        }

        if self
            .positions
            .iter()
            .skip(SELF_COLLISION_OFFSET)
            .any(|&cell| cell == new_head)
        {
            self.game_over = true;
            return UpdateResult::Collided;
        }

        self.positions.insert(0, new_head);
        self.positions.truncate(self.length);
        UpdateResult::Continuing
    }

    /// Called once per food eaten, before the food is repositioned.
    pub fn grow_and_score(&mut self) {
        self.length += 1;
        self.score += 1;
    }

    /// A reversal request is physically invalid mid-body and is dropped
    /// without complaint; anything else takes effect.
    pub fn change_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Snake::new(self.grid, rng);
    }
}
