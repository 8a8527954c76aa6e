use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection. The
/// authenticator carries the signing secret and token lifetime; nothing here reads
/// the environment.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and session token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn ensure_username_free(
        &self,
        username: &Username,
        owner: Option<&UserId>,
    ) -> Result<(), UserError> {
        match self.repository.find_by_username(username).await? {
            Some(existing) if Some(&existing.id) != owner => {
                Err(UserError::UsernameAlreadyExists(username.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_email_free(
        &self,
        email: &EmailAddress,
        owner: Option<&UserId>,
    ) -> Result<(), UserError> {
        match self.repository.find_by_email(email).await? {
            Some(existing) if Some(&existing.id) != owner => {
                Err(UserError::EmailAlreadyExists(email.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        self.ensure_username_free(&command.username, None).await?;
        self.ensure_email_free(&command.email, None).await?;

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            username: command.username,
            email: command.email,
            password_hash,
            gender: command.gender,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session, UserError> {
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        self.authenticator
            .verify_password(password, user.as_ref().map(|u| u.password_hash.as_str()))
            .map_err(|e| {
                tracing::warn!(username = %username, "Login rejected");
                UserError::from(e)
            })?;

        let mut user = user.ok_or(UserError::InvalidCredentials)?;
        user.last_login_at = Some(Utc::now());
        let user = self.repository.update(user).await?;

        let issued = self.authenticator.issue_token(user.id)?;
        tracing::info!(user_id = %user.id, expires_at = %issued.expires_at, "Session issued");

        Ok(Session {
            token: issued.access_token,
            expires_at: issued.expires_at,
            user,
        })
    }

    async fn validate_token(&self, token: &str) -> Result<UserId, UserError> {
        let claims = self.authenticator.validate_token(token)?;

        UserId::from_string(claims.subject()).map_err(|e| UserError::InvalidToken(e.to_string()))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        self.ensure_username_free(&command.username, Some(id)).await?;
        self.ensure_email_free(&command.email, Some(id)).await?;

        user.name = command.name;
        user.username = command.username;
        user.email = command.email;
        user.gender = command.gender;
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }
}
