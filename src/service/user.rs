//! User service for account management and authentication business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserDto, CreateUserParam, LoginDto, Role, UpdateUserDto, UpdateUserParam, User},
    service::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
    validate,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates the payload, rejects already-registered emails, hashes the
    /// password, and stores the account with the regular user role. Role
    /// escalation is not possible through this path.
    ///
    /// # Arguments
    /// - `payload` - Registration request body
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation)` - One or more fields violated validation rules
    /// - `Err(AppError::Conflict)` - Email is already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, payload: CreateUserDto) -> Result<User, AppError> {
        validate::validate_user_create(&payload).map_err(AppError::Validation)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&payload.password)?;

        let user = user_repo
            .create(CreateUserParam {
                username: payload.username,
                email: payload.email,
                password_hash,
                role: Role::User,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Authenticates a user and issues a bearer token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response never reveals whether an account exists.
    ///
    /// # Arguments
    /// - `payload` - Login request body
    /// - `tokens` - Token service used to sign the session token
    ///
    /// # Returns
    /// - `Ok((String, User))` - The signed token and the authenticated user
    /// - `Err(AppError::Validation)` - Malformed credentials
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        payload: LoginDto,
        tokens: &TokenService,
    ) -> Result<(String, User), AppError> {
        validate::validate_login(&payload).map_err(AppError::Validation)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&payload.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&payload.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = tokens.issue(user.id)?;

        tracing::info!("User {} logged in", user.id);

        Ok((token, user))
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users ordered by email.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }

    /// Applies a partial update to the user with the given email.
    ///
    /// When the payload moves the account to a new email, the new address
    /// must not belong to another account. A supplied password is re-hashed
    /// before storage.
    ///
    /// # Arguments
    /// - `email` - Email of the account to update
    /// - `payload` - Fields to apply
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Validation)` - A supplied field violated validation rules
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::Conflict)` - New email already belongs to another account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, email: &str, payload: UpdateUserDto) -> Result<User, AppError> {
        validate::validate_user_update(&payload).map_err(AppError::Validation)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if let Some(new_email) = &payload.email {
            if new_email != email && user_repo.find_by_email(new_email).await?.is_some() {
                return Err(AppError::Conflict("Email already registered".to_string()));
            }
        }

        let password_hash = match &payload.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let updated = user_repo
            .update(
                user.id,
                UpdateUserParam {
                    username: payload.username,
                    email: payload.email,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes the user with the given email.
    ///
    /// Admins may delete any account; a regular user may only delete their
    /// own.
    ///
    /// # Arguments
    /// - `email` - Email of the account to delete
    /// - `actor` - The authenticated user performing the deletion
    ///
    /// # Returns
    /// - `Ok(())` - Account removed
    /// - `Err(AuthError::AccessDenied)` - Actor may not delete this account
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, email: &str, actor: &User) -> Result<(), AppError> {
        if actor.role != Role::Admin && actor.email != email {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("attempted to delete account {email}"),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);

        let rows = user_repo.delete_by_email(email).await?;
        if rows == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted account {}", actor.id, email);

        Ok(())
    }
}
