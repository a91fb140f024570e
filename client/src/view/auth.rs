//! Login, signup and password-reset flows.

use edubridge_shared::account::handle::{RegisterDescriptor, ResetPasswordDescriptor};
use edubridge_shared::account::Role;
use tracing::warn;

use crate::api::{AuthApi, UserApi};
use crate::store::LocalStore;

use super::Nav;

/// The login form.
pub struct LoginFlow<A: AuthApi> {
    api: A,
    error: Option<String>,
    loading: bool,
}

impl<A: AuthApi> LoginFlow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            error: None,
            loading: false,
        }
    }

    /// On success the token lands in the store and the shell navigates
    /// home; on failure the form shows an error and stays put.
    pub async fn submit(&mut self, store: &LocalStore, email: &str, password: &str) -> Option<Nav> {
        self.error = None;
        self.loading = true;
        let result = self.api.login(email, password).await;
        self.loading = false;
        match result {
            Ok(token) => {
                if let Err(err) = store.set_token(token) {
                    warn!("token persist failed: {err}");
                }
                Some(Nav::Home)
            }
            Err(err) => {
                warn!("login failed: {err}");
                self.error = Some("Invalid Email or Password".to_string());
                None
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Drops the stored token. The theme preference survives.
pub fn logout(store: &LocalStore) -> crate::Result<()> {
    store.logout()
}

enum SignupStep {
    Details,
    Verify {
        name: String,
        email: String,
        password: String,
    },
}

/// Two-step signup: details first, then the mailed one-time code.
pub struct SignupWizard<A: AuthApi> {
    api: A,
    step: SignupStep,
    error: Option<String>,
}

impl<A: AuthApi> SignupWizard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            step: SignupStep::Details,
            error: None,
        }
    }

    /// Validates the details locally, requests the one-time code and
    /// advances to the verification step.
    pub async fn submit_details(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> crate::Result<()> {
        self.error = None;
        if password != confirm {
            self.error = Some("Passwords do not match!".to_string());
            return Ok(());
        }
        self.api.send_otp(email).await?;
        self.step = SignupStep::Verify {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        Ok(())
    }

    /// Registers with the entered code. Self-signup always creates a
    /// student account.
    pub async fn submit_otp(&mut self, otp: &str) -> crate::Result<Option<Nav>> {
        let SignupStep::Verify {
            name,
            email,
            password,
        } = &self.step
        else {
            return Ok(None);
        };
        self.api
            .register(RegisterDescriptor {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                role: Role::Student,
                otp: otp.to_string(),
            })
            .await?;
        Ok(Some(Nav::Login))
    }

    pub fn awaiting_otp(&self) -> bool {
        matches!(self.step, SignupStep::Verify { .. })
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Forgot-password: request a mailed code, then reset with it.
pub struct PasswordResetFlow<A: UserApi> {
    api: A,
    email: Option<String>,
}

impl<A: UserApi> PasswordResetFlow<A> {
    pub fn new(api: A) -> Self {
        Self { api, email: None }
    }

    pub async fn request(&mut self, email: &str) -> crate::Result<()> {
        self.api.forgot_password(email).await?;
        self.email = Some(email.to_string());
        Ok(())
    }

    pub async fn complete(&mut self, otp: &str, new_password: &str) -> crate::Result<Option<Nav>> {
        let Some(email) = &self.email else {
            return Ok(None);
        };
        self.api
            .reset_password(ResetPasswordDescriptor {
                email: email.clone(),
                otp: otp.to_string(),
                new_password: new_password.to_string(),
            })
            .await?;
        Ok(Some(Nav::Login))
    }

    pub fn awaiting_code(&self) -> bool {
        self.email.is_some()
    }
}
