//! Business logic services for the FarmEase platform

pub mod activity;
pub mod auth;
pub mod farm;
pub mod market;
pub mod weather;

pub use activity::ActivityService;
pub use auth::AuthService;
pub use farm::FarmService;
pub use market::MarketService;
pub use weather::WeatherService;
