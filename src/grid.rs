use ggez::input::keyboard::KeyCode;

pub const WINDOW_WIDTH: i16 = 800;
pub const WINDOW_HEIGHT: i16 = 600;
pub const SCORE_PANEL_HEIGHT: i16 = 60;
pub const PLAYING_AREA_HEIGHT: i16 = WINDOW_HEIGHT - SCORE_PANEL_HEIGHT;

/// Side of one grid cell in pixels. Occupied cells are drawn as squares of
/// side GRID_SIZE - 2, leaving a 2 px gap between neighbours.
pub const GRID_SIZE: i16 = 20;
pub const GRID_WIDTH: i16 = WINDOW_WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: i16 = PLAYING_AREA_HEIGHT / GRID_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }

    /// One step in `dir`. The result may lie outside the grid; callers
    /// check bounds with `Grid::contains`.
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_keycode(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Logical playing field, in cells. The production grid is derived from the
/// window dimensions; tests build smaller ones.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_and_back_returns_to_start() {
        let p = Cell::new(5, 5);
        for dir in Direction::ALL {
            assert_eq!(p.step(dir).step(dir.opposite()), p);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn deltas_are_unit_moves() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn grid_contains_interior_and_rejects_outside() {
        let grid = Grid::new(10, 10);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(9, 9)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(10, 5)));
        assert!(!grid.contains(Cell::new(5, -1)));
        assert!(!grid.contains(Cell::new(5, 10)));
    }

    #[test]
    fn default_grid_matches_window_layout() {
        let grid = Grid::default();
        assert_eq!(grid.width, 40);
        assert_eq!(grid.height, 27);
        assert_eq!(grid.center(), Cell::new(20, 13));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_keycode(KeyCode::Up), Some(Direction::Up));
        assert_eq!(Direction::from_keycode(KeyCode::Down), Some(Direction::Down));
        assert_eq!(Direction::from_keycode(KeyCode::Left), Some(Direction::Left));
        assert_eq!(Direction::from_keycode(KeyCode::Right), Some(Direction::Right));
        assert_eq!(Direction::from_keycode(KeyCode::Space), None);
    }
}
