pub mod api;
pub mod blueprint;
pub mod errors;
pub mod manifest;
mod scaffold;
pub mod vfs;

pub use api::{run, run_in, ScaffoldError};
