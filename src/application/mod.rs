mod clock;
mod session;
mod zoom;
pub mod loader;

pub use clock::{SimulationClock, TickRate};
pub use session::Session;
pub use zoom::ZoomLevel;
