use crate::errors::Result;
use crate::properties::Property;
use crate::users::users_model::{NewUser, NewUserRecord, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One-way password hashing with verification.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;
    /// `Ok(false)` for a wrong password; `Err` only when the hash itself is unusable.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Fails with a constraint violation when the email is already registered.
    async fn insert(&self, record: NewUserRecord) -> Result<User>;
    async fn update_last_login(&self, user_id: &str, at: DateTime<Utc>) -> Result<User>;
    /// Appends the property id unless already present. Returns the new watchlist.
    async fn add_to_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>>;
    /// Removes the property id if present. Returns the new watchlist.
    async fn remove_from_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<User>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_watchlist(&self, user_id: &str) -> Result<Vec<Property>>;
    async fn add_to_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>>;
    async fn remove_from_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>>;
}
