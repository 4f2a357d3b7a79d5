//! Front-end independent application logic
//!
//! Commands in, snapshot out. A front end only translates input events
//! into [`AppCommand`]s and renders [`AppSnapshot`].

pub mod controller;
pub mod gesture;
pub mod state;

pub use controller::AppController;
pub use gesture::LongPress;
pub use state::{AppCommand, AppSnapshot, Tab};
