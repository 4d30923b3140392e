//! Admin accounts: sign-in, password change and first-run bootstrap.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Role, User, mask_email};
use crate::error::DomainError;
use crate::ports::{AuthError, PasswordService, TokenService, UserRepository};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A successful sign-in.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => DomainError::Internal(msg),
            _ => DomainError::Unauthorized,
        }
    }
}

pub struct AccountService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Check credentials and issue a session token carrying the user's role.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let email = email.trim();
        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::info!(email = %mask_email(email), "Login rejected: unknown account");
            return Err(DomainError::Unauthorized);
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::info!(email = %mask_email(email), "Login rejected: wrong password");
            return Err(DomainError::Unauthorized);
        }

        let token = self.tokens.generate_token(
            user.id,
            &user.email,
            vec![user.role.as_str().to_string()],
        )?;

        tracing::info!(user_id = %user.id, "User signed in");
        Ok(Session {
            token,
            expires_in: self.tokens.expiration_seconds(),
            user,
        })
    }

    pub async fn find(&self, id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        current: &str,
        new: &str,
    ) -> Result<(), DomainError> {
        if current.is_empty() || new.is_empty() {
            return Err(DomainError::validation(
                "Current password and new password are required",
            ));
        }
        if new.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "New password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if new == current {
            return Err(DomainError::validation(
                "New password must be different from the current password",
            ));
        }

        let mut user = self.find(user_id).await?;
        if !self.passwords.verify(current, &user.password_hash)? {
            return Err(DomainError::validation("Current password is incorrect"));
        }

        user.password_hash = self.passwords.hash(new)?;
        user.updated_at = Utc::now();
        self.users.update(user).await?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Create the configured admin account unless it already exists.
    /// Returns `true` when a new account was created.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let email = email.trim();
        if self.users.find_by_email(email).await?.is_some() {
            return Ok(false);
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Admin password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let hash = self.passwords.hash(password)?;
        let user = User::new(email.to_string(), Some("Admin".to_string()), hash, Role::Admin);
        self.users.insert(user).await?;

        tracing::info!(email = %mask_email(email), "Admin account created");
        Ok(true)
    }
}
