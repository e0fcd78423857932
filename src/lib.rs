#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod controller;
mod game;
mod player;
pub mod renderer;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod cli;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::GameController;
pub use game::*;
pub use player::PlayerId;
#[cfg(feature = "std")]
pub use renderer::EventLog;
pub use renderer::{Event, Renderer};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use cli::{
    parse_command, render_frame, run_session, Command, JsonRenderer, TerminalRenderer,
    WriteRenderer,
};
