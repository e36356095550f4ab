use crate::errors::{Error, Result, ValidationError};
use crate::properties::{Property, PropertyRepositoryTrait};
use crate::users::users_model::{NewUser, NewUserRecord, User};
use crate::users::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

const DEFAULT_USER_NAME: &str = "User";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        UserService {
            repository,
            property_repository,
            hasher,
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        let email = normalize_email(&new_user.email);
        if email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if new_user.password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        let name = new_user
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
        let password_hash = self.hasher.hash_password(&new_user.password)?;

        let user = self
            .repository
            .insert(NewUserRecord {
                name,
                email,
                password_hash,
            })
            .await?;
        info!("New user registered: {} (id={})", user.email, user.id);
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Email and password required".to_string(),
            )
            .into());
        }

        let user = self
            .repository
            .find_by_email(&email)?
            .ok_or_else(|| Error::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!("Rejected login for {}", email);
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        self.repository.update_last_login(&user.id, Utc::now()).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .get_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))
    }

    fn get_watchlist(&self, user_id: &str) -> Result<Vec<Property>> {
        let user = self.get_user(user_id)?;
        let properties = self.property_repository.list()?;
        Ok(properties
            .into_iter()
            .filter(|p| user.watchlist.contains(&p.id))
            .collect())
    }

    async fn add_to_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>> {
        if self.property_repository.get_by_id(property_id)?.is_none() {
            return Err(Error::NotFound(format!(
                "Property {} not found",
                property_id
            )));
        }
        self.repository.add_to_watchlist(user_id, property_id).await
    }

    async fn remove_from_watchlist(&self, user_id: &str, property_id: i64) -> Result<Vec<i64>> {
        self.repository
            .remove_from_watchlist(user_id, property_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::valuation::{PropertyHistoryMap, ValuationPoint};
    use crate::properties::PropertyDraft;
    use chrono::DateTime;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    struct PlainHasher;

    impl PasswordHasherTrait for PlainHasher {
        fn hash_password(&self, password: &str) -> Result<String> {
            Ok(format!("hashed:{}", password))
        }

        fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
            Ok(password_hash == format!("hashed:{}", password))
        }
    }

    #[derive(Default)]
    struct MockUserRepository {
        users: RwLock<Vec<User>>,
    }

    impl MockUserRepository {
        fn modify<F>(&self, user_id: &str, f: F) -> Result<User>
        where
            F: FnOnce(&mut User),
        {
            let mut users = self.users.write().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or_else(|| Error::NotFound(user_id.to_string()))?;
            f(user);
            Ok(user.clone())
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .read()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .read()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn insert(&self, record: NewUserRecord) -> Result<User> {
            let mut users = self.users.write().unwrap();
            let user = User {
                id: format!("user-{}", users.len() + 1),
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

        async fn remove_from_watchlist(
            &self,
            user_id: &str,
            property_id: i64,
        ) -> Result<Vec<i64>> {
            self.modify(user_id, |u| u.watchlist.retain(|id| *id != property_id))
                .map(|u| u.watchlist)
        }
    }

    struct TwoProperties;

    #[async_trait]
    impl PropertyRepositoryTrait for TwoProperties {
        fn list(&self) -> Result<Vec<Property>> {
            Ok((1..=2)
                .map(|id| Property {
                    id,
                    name: format!("Property {}", id),
                    location: "Midtown".into(),
                    price: dec!(750000),
                    symbol: Some("PRO".into()),
                    change: None,
                })
                .collect())
        }

        fn get_by_id(&self, property_id: i64) -> Result<Option<Property>> {
            Ok(self.list()?.into_iter().find(|p| p.id == property_id))
        }

        fn get_history(&self, _property_id: i64) -> Result<Vec<ValuationPoint>> {
            Ok(Vec::new())
        }

        fn get_histories(&self, _property_ids: &[i64]) -> Result<PropertyHistoryMap> {
            Ok(PropertyHistoryMap::new())
        }

        async fn insert(&self, _draft: PropertyDraft) -> Result<Property> {
            unimplemented!()
        }
    }

    fn service() -> UserService {
        UserService::new(
            Arc::new(MockUserRepository::default()),
            Arc::new(TwoProperties),
            Arc::new(PlainHasher),
        )
    }

    fn new_user(name: Option<&str>, email: &str, password: &str) -> NewUser {
        NewUser {
            name: name.map(str::to_string),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_email_and_hashes_password() {
        let service = service();
        let user = service
            .register(new_user(None, "  Ada@Example.COM ", "s3cret"))
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "User");
        assert_eq!(user.password_hash, "hashed:s3cret");
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates_and_missing_fields() {
        let service = service();
        service
            .register(new_user(Some("Ada"), "ada@example.com", "s3cret"))
            .await
            .unwrap();

        let duplicate = service
            .register(new_user(Some("Ada"), "ADA@example.com", "other"))
            .await;
        assert!(matches!(duplicate, Err(Error::ConstraintViolation(_))));

        let no_email = service.register(new_user(None, "", "pw")).await;
        assert!(matches!(no_email, Err(Error::Validation(_))));

        let no_password = service.register(new_user(None, "bob@example.com", "")).await;
        assert!(matches!(no_password, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate_checks_password_and_records_login() {
        let service = service();
        service
            .register(new_user(Some("Ada"), "ada@example.com", "s3cret"))
            .await
            .unwrap();

        let wrong = service.authenticate("ada@example.com", "nope").await;
        assert!(matches!(wrong, Err(Error::Unauthorized(_))));

        let unknown = service.authenticate("eve@example.com", "s3cret").await;
        assert!(matches!(unknown, Err(Error::Unauthorized(_))));

        let user = service
            .authenticate("Ada@Example.com", "s3cret")
            .await
            .unwrap();
        assert!(user.last_login.is_some());
    }

    #[tokio::test]
    async fn test_watchlist_add_is_idempotent_and_remove_works() {
        let service = service();
        let user = service
            .register(new_user(Some("Ada"), "ada@example.com", "s3cret"))
            .await
            .unwrap();

        assert_eq!(service.add_to_watchlist(&user.id, 2).await.unwrap(), vec![2]);
        assert_eq!(service.add_to_watchlist(&user.id, 2).await.unwrap(), vec![2]);
        assert_eq!(
            service.add_to_watchlist(&user.id, 1).await.unwrap(),
            vec![2, 1]
        );

        let watched = service.get_watchlist(&user.id).unwrap();
        assert_eq!(watched.len(), 2);

        assert_eq!(
            service.remove_from_watchlist(&user.id, 2).await.unwrap(),
            vec![1]
        );
    }

    #[tokio::test]
    async fn test_watchlist_rejects_unknown_property() {
        let service = service();
        let user = service
            .register(new_user(Some("Ada"), "ada@example.com", "s3cret"))
            .await
            .unwrap();

        let result = service.add_to_watchlist(&user.id, 77).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_get_unknown_user() {
        let result = service().get_user("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
