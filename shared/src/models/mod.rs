//! Domain models for the FarmEase platform

mod activity;
mod crop;
mod farm;
mod market;
mod progress;
mod soil;
mod user;
mod weather;

pub use activity::*;
pub use crop::*;
pub use farm::*;
pub use market::*;
pub use progress::*;
pub use soil::*;
pub use user::*;
pub use weather::*;
