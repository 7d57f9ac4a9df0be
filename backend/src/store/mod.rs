//! Storage collaborators
//!
//! Services depend only on these traits; the in-memory implementations are
//! what the server wires up today.

mod memory;

pub use memory::{MemoryActivityStore, MemoryFarmStore, MemoryUserStore};

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Activity, FarmPlot, User};

/// User accounts keyed by id, unique by email
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `DuplicateEntry("email")` if the email is taken.
    fn insert_user(&self, user: User) -> AppResult<User>;

    fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>>;
}

/// Farm plots, always scoped to their owner
pub trait FarmStore: Send + Sync {
    fn insert_farm(&self, farm: FarmPlot) -> AppResult<FarmPlot>;

    /// All plots of one owner, oldest first
    fn list_farms(&self, owner_id: Uuid) -> AppResult<Vec<FarmPlot>>;

    fn get_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<Option<FarmPlot>>;

    /// Replace a stored plot. Returns `None` if it does not exist for that owner.
    fn update_farm(&self, farm: FarmPlot) -> AppResult<Option<FarmPlot>>;

    /// Returns whether a plot was removed
    fn delete_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<bool>;
}

/// Field activity log
pub trait ActivityStore: Send + Sync {
    fn insert_activity(&self, activity: Activity) -> AppResult<Activity>;

    /// Activities of one owner, newest first, optionally for a single plot
    fn list_activities(&self, owner_id: Uuid, farm_id: Option<Uuid>) -> AppResult<Vec<Activity>>;

    /// Drop every activity attached to a plot; returns how many were removed
    fn delete_for_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<usize>;
}
