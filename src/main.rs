use std::fs::File;

use ggez::event;
use ggez::GameResult;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

mod food;
mod game;
mod grid;
mod score;
mod snake;

use game::Game;
use grid::{WINDOW_HEIGHT, WINDOW_WIDTH};
use score::HighScoreStore;

const LOG_FILE: &str = "gridsnake.log";
const HIGH_SCORE_FILE: &str = "high_score.json";

fn init_logging() {
    // A game without a log file is still a game.
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}

fn main() -> GameResult {
    init_logging();
    info!("starting gridsnake");

    let window_setup = ggez::conf::WindowSetup::default().title("Snake").vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("gridsnake", "gridsnake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let game = Game::new(HighScoreStore::new(HIGH_SCORE_FILE));
    event::run(ctx, event_loop, game)
}
