//! skillpath - A terminal learning ladder for full stack JavaScript
//!
//! skillpath takes you from a placement assessment through a five-level test
//! ladder, a ten-chapter curriculum, mock weekly competitions, and a career
//! path view, entirely in the terminal.

pub mod app;
pub mod career;
pub mod catalog;
pub mod competition;
pub mod config;
pub mod progress;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
