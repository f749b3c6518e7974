//! Authentication endpoints.

use super::{ApiError, Client};
use crate::models::{AuthTokens, LoginRequest, LoginResponse, RefreshTokenRequest, User};

impl Client {
    /// Authenticate with email and password, persisting the issued tokens.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/api/v1/auth/login", &request).await?;

        self.set_token(response.tokens.access_token.clone());
        if let Err(e) = self
            .config()
            .save_tokens(&response.tokens.access_token, &response.tokens.refresh_token)
        {
            tracing::warn!("login succeeded but tokens could not be persisted: {e}");
        }

        Ok(response)
    }

    /// End the session.
    ///
    /// The server-side call is best effort; local credentials are cleared
    /// regardless of its outcome.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Err(e) = self.post_empty::<()>("/api/v1/auth/logout", None).await {
            tracing::debug!("server-side logout failed (ignored): {e}");
        }
        self.clear_token();
        self.config()
            .clear_tokens()
            .map_err(|e| ApiError::Transport(format!("failed to clear credentials: {e}")))
    }

    /// Fetch the currently authenticated user.
    pub async fn whoami(&self) -> Result<User, ApiError> {
        self.get("/api/v1/auth/me").await
    }

    /// Explicitly exchange the stored refresh token for a new pair.
    pub async fn refresh_token(&self) -> Result<AuthTokens, ApiError> {
        let refresh_token = self.config().refresh_token().ok_or_else(|| {
            ApiError::Unauthorized("no refresh token stored; please log in".to_string())
        })?;

        let request = RefreshTokenRequest { refresh_token };
        let tokens: AuthTokens = self.post("/api/v1/auth/refresh", &request).await?;

        self.set_token(tokens.access_token.clone());
        if let Err(e) = self
            .config()
            .save_tokens(&tokens.access_token, &tokens.refresh_token)
        {
            tracing::warn!("refreshed tokens could not be persisted: {e}");
        }

        Ok(tokens)
    }
}
