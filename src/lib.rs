// Domain layer - grid, rules, patterns
pub mod domain;

// Application layer - session, clock, zoom, pattern loading
pub mod application;

pub mod audio;
pub mod config;

// Presentation layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub use application::{Session, SimulationClock, TickRate, ZoomLevel};
pub use config::AppConfig;
pub use domain::{Cell, Grid, NewbornReport, Pattern, presets};
