//! HTTP handlers

mod activity;
mod auth;
mod farm;
mod health;
mod market;
mod weather;

pub use activity::*;
pub use auth::*;
pub use farm::*;
pub use health::*;
pub use market::*;
pub use weather::*;

use chrono::NaiveDate;

/// Calendar date on the server clock, fed to the growth estimator
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
