//! Users module - registration, credential checks and watchlists.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, NewUserRecord, User, UserProfile, UserSummary};
pub use users_service::UserService;
pub use users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
