use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use deedflow_core::users::{NewUserRecord, User, UserRepositoryTrait};
use deedflow_core::{Error, Result};

use crate::store::MemoryStore;

pub struct UserRepository {
    store: Arc<MemoryStore>,
}

impl UserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        UserRepository { store }
    }

    fn modify<F>(&self, user_id: &str, apply: F) -> Result<User>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.store.users.write()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))?;
        apply(user);
        Ok(user.clone())
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let users = self.store.users.read()?;
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.store.users.read()?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, record: NewUserRecord) -> Result<User> {
        let mut users = self.store.users.write()?;
        // Checked again under the write lock so racing registrations cannot both land
        if users.iter().any(|u| u.email == record.email) {
            return Err(Error::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            created_at: Utc::now(),
            last_login: None,
            watchlist: Vec::new(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_last_login(&self, user_id: &str, at: DateTime<Utc>) -> Result<User> {
        self.modify(user_id, |u| u.last_login = Some(at))
    }

    async fn add_to_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>> {
        self.modify(user_id, |u| {
            if !u.watchlist.contains(&property_id) {
                u.watchlist.push(property_id);
            }
        })
        .map(|u| u.watchlist)
    }

    async fn remove_from_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>> {
        self.modify(user_id, |u| u.watchlist.retain(|id| *id != property_id))
            .map(|u| u.watchlist)
    }
}
