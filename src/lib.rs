pub mod args;
pub mod board;
pub mod db;
pub mod game;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod ui;
