use ggez::event::EventHandler;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{graphics, Context, GameResult};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::grid::{
    Cell, Direction, Grid, GRID_SIZE, SCORE_PANEL_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::score::HighScoreStore;
use crate::snake::{Snake, UpdateResult};

/// 10 simulation ticks per second.
const TICK_SECONDS: f32 = 0.1;

const BACKGROUND_COLOR: graphics::Color = graphics::Color::new(0.0, 0.0, 0.0, 1.0);
const PANEL_COLOR: graphics::Color = graphics::Color::new(0.157, 0.157, 0.157, 1.0);
const SNAKE_COLOR: graphics::Color = graphics::Color::new(0.0, 1.0, 0.0, 1.0);
const FOOD_COLOR: graphics::Color = graphics::Color::new(1.0, 0.0, 0.0, 1.0);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum GameState {
    Playing,
    GameOver,
}

pub struct Game {
    state: GameState,
    grid: Grid,
    snake: Snake,
    food: Food,
    store: HighScoreStore,
    /// Best score seen so far, kept current for the score panel.
    high_score: u32,
    /// What the store currently holds; a game ending at or below this
    /// value must not rewrite the file.
    saved_high_score: u32,
    /// Last direction key pressed since the previous tick; one effective
    /// change per tick, last press wins.
    pending_direction: Option<Direction>,
    rng: StdRng,
    last_update: f32,
}

impl Game {
    pub fn new(store: HighScoreStore) -> Self {
        Self::with_parts(Grid::default(), store, StdRng::from_entropy())
    }

    fn with_parts(grid: Grid, store: HighScoreStore, mut rng: StdRng) -> Self {
        let high_score = store.load();
        let snake = Snake::new(grid, &mut rng);
        let food = Food::new(grid, &mut rng);
        Game {
            state: GameState::Playing,
            grid,
            snake,
            food,
            store,
            high_score,
            saved_high_score: high_score,
            pending_direction: None,
            rng,
            last_update: 0.0,
        }
    }

    /// One simulation tick: apply the pending direction change, move the
    /// snake, and resolve either the collision transition or an eaten food.
    fn advance(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.snake.change_direction(dir);
        }

        match self.snake.update() {
            UpdateResult::Collided => {
                info!("game over with score {}", self.snake.score());
                if self.high_score > self.saved_high_score {
                    self.store.save(self.high_score);
                    self.saved_high_score = self.high_score;
                    info!("new high score {}", self.high_score);
                }
                self.state = GameState::GameOver;
            }
            UpdateResult::Continuing => {
                if self.snake.head() == self.food.position() {
                    self.snake.grow_and_score();
                    if self.snake.score() > self.high_score {
                        self.high_score = self.snake.score();
                    }
                    self.food.randomize_position(&mut self.rng);
                }
            }
        }
    }

    fn restart(&mut self) {
        self.snake.reset(&mut self.rng);
        self.food.randomize_position(&mut self.rng);
        self.pending_direction = None;
        self.state = GameState::Playing;
    }

    fn cell_rect(cell: Cell) -> graphics::Rect {
        graphics::Rect::new(
            (cell.x * GRID_SIZE) as f32,
            (cell.y * GRID_SIZE + SCORE_PANEL_HEIGHT) as f32,
            (GRID_SIZE - 2) as f32,
            (GRID_SIZE - 2) as f32,
        )
    }

    fn draw_score_panel(&self, ctx: &mut Context, canvas: &mut graphics::Canvas) -> GameResult {
        let panel = graphics::Rect::new(
            0.0,
            0.0,
            WINDOW_WIDTH as f32,
            SCORE_PANEL_HEIGHT as f32,
        );
        canvas.draw(
            &graphics::Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), panel, PANEL_COLOR)?,
            graphics::DrawParam::default(),
        );

        let rule = graphics::Rect::new(
            0.0,
            SCORE_PANEL_HEIGHT as f32,
            WINDOW_WIDTH as f32,
            2.0,
        );
        canvas.draw(
            &graphics::Mesh::new_rectangle(
                ctx,
                graphics::DrawMode::fill(),
                rule,
                graphics::Color::WHITE,
            )?,
            graphics::DrawParam::default(),
        );

        let mut score_text = graphics::Text::new(format!("Score: {}", self.snake.score()));
        let score_text = score_text.set_scale(28.0);
        canvas.draw(
            score_text,
            graphics::DrawParam::default()
                .dest(Point2 {
                    x: WINDOW_WIDTH as f32 / 4.0 - 60.0,
                    y: SCORE_PANEL_HEIGHT as f32 / 2.0 - 14.0,
                })
                .color(graphics::Color::WHITE),
        );

        let mut high_text = graphics::Text::new(format!("High Score: {}", self.high_score));
        let high_text = high_text.set_scale(28.0);
        canvas.draw(
            high_text,
            graphics::DrawParam::default()
                .dest(Point2 {
                    x: 3.0 * WINDOW_WIDTH as f32 / 4.0 - 90.0,
                    y: SCORE_PANEL_HEIGHT as f32 / 2.0 - 14.0,
                })
                .color(graphics::Color::BLUE),
        );

        Ok(())
    }

    fn draw_playing_area(&self, ctx: &mut Context, canvas: &mut graphics::Canvas) -> GameResult {
        for &cell in self.snake.positions() {
            canvas.draw(
                &graphics::Mesh::new_rectangle(
                    ctx,
                    graphics::DrawMode::fill(),
                    Self::cell_rect(cell),
                    SNAKE_COLOR,
                )?,
                graphics::DrawParam::default(),
            );
        }

        canvas.draw(
            &graphics::Mesh::new_rectangle(
                ctx,
                graphics::DrawMode::fill(),
                Self::cell_rect(self.food.position()),
                FOOD_COLOR,
            )?,
            graphics::DrawParam::default(),
        );

        Ok(())
    }

    fn draw_game_over(&self, canvas: &mut graphics::Canvas) -> GameResult {
        let center_x = WINDOW_WIDTH as f32 / 2.0;
        let center_y = WINDOW_HEIGHT as f32 / 2.0;

        let mut title = graphics::Text::new("GAME OVER");
        let title = title.set_scale(48.0);
        canvas.draw(
            title,
            graphics::DrawParam::default()
                .dest(Point2 {
                    x: center_x - 120.0,
                    y: center_y - 100.0,
                })
                .color(FOOD_COLOR),
        );

        let lines = [
            format!("Score: {}", self.snake.score()),
            format!("High Score: {}", self.high_score),
            "Press SPACE to restart".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            let mut text = graphics::Text::new(line.as_str());
            let text = text.set_scale(28.0);
            canvas.draw(
                text,
                graphics::DrawParam::default()
                    .dest(Point2 {
                        x: center_x - 110.0,
                        y: center_y + (i as f32 * 40.0),
                    })
                    .color(graphics::Color::WHITE),
            );
        }

        Ok(())
    }
}

impl EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if let GameState::Playing = self.state {
            let current_time = ctx.time.time_since_start().as_secs_f32();
            if current_time - self.last_update >= TICK_SECONDS {
                self.last_update = current_time;
                self.advance();
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);

        self.draw_score_panel(ctx, &mut canvas)?;
        self.draw_playing_area(ctx, &mut canvas)?;
        if let GameState::GameOver = self.state {
            self.draw_game_over(&mut canvas)?;
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            match self.state {
                GameState::Playing => {
                    if let Some(dir) = Direction::from_keycode(keycode) {
                        self.pending_direction = Some(dir);
                    } else if keycode == KeyCode::Escape {
                        ctx.request_quit();
                    }
                }
                GameState::GameOver => match keycode {
                    KeyCode::Space => self.restart(),
                    KeyCode::Escape => ctx.request_quit(),
                    _ => {}
                },
            }
        }
        Ok(())
    }
}
