//! In-memory stores backed by `RwLock<HashMap>`

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use super::{ActivityStore, FarmStore, UserStore};
use crate::error::{AppError, AppResult};
use crate::models::{Activity, FarmPlot, User};

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::StorageError("in-memory store lock poisoned".to_string())
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn insert_user(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&user_id).cloned())
    }
}

#[derive(Default)]
pub struct MemoryFarmStore {
    farms: RwLock<HashMap<Uuid, FarmPlot>>,
}

impl MemoryFarmStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FarmStore for MemoryFarmStore {
    fn insert_farm(&self, farm: FarmPlot) -> AppResult<FarmPlot> {
        let mut farms = self.farms.write().map_err(poisoned)?;
        farms.insert(farm.id, farm.clone());
        Ok(farm)
    }

    fn list_farms(&self, owner_id: Uuid) -> AppResult<Vec<FarmPlot>> {
        let farms = self.farms.read().map_err(poisoned)?;
        let mut owned: Vec<FarmPlot> = farms
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    fn get_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<Option<FarmPlot>> {
        let farms = self.farms.read().map_err(poisoned)?;
        Ok(farms
            .get(&farm_id)
            .filter(|f| f.owner_id == owner_id)
            .cloned())
    }

    fn update_farm(&self, farm: FarmPlot) -> AppResult<Option<FarmPlot>> {
        let mut farms = self.farms.write().map_err(poisoned)?;
        match farms.get_mut(&farm.id) {
            Some(existing) if existing.owner_id == farm.owner_id => {
                *existing = farm.clone();
                Ok(Some(farm))
            }
            _ => Ok(None),
        }
    }

    fn delete_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<bool> {
        let mut farms = self.farms.write().map_err(poisoned)?;
        let owned = farms
            .get(&farm_id)
            .map(|f| f.owner_id == owner_id)
            .unwrap_or(false);
        if owned {
            farms.remove(&farm_id);
        }
        Ok(owned)
    }
}

#[derive(Default)]
pub struct MemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivityStore for MemoryActivityStore {
    fn insert_activity(&self, activity: Activity) -> AppResult<Activity> {
        let mut activities = self.activities.write().map_err(poisoned)?;
        activities.push(activity.clone());
        Ok(activity)
    }

    fn list_activities(&self, owner_id: Uuid, farm_id: Option<Uuid>) -> AppResult<Vec<Activity>> {
        let activities = self.activities.read().map_err(poisoned)?;
        // appended in log order, so reversing gives newest first
        Ok(activities
            .iter()
            .rev()
            .filter(|a| a.owner_id == owner_id)
            .filter(|a| farm_id.map_or(true, |id| a.farm_id == Some(id)))
            .cloned()
            .collect())
    }

    fn delete_for_farm(&self, owner_id: Uuid, farm_id: Uuid) -> AppResult<usize> {
        let mut activities = self.activities.write().map_err(poisoned)?;
        let before = activities.len();
        activities.retain(|a| !(a.owner_id == owner_id && a.farm_id == Some(farm_id)));
        Ok(before - activities.len())
    }
}
