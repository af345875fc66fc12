//! Credential resolution
//!
//! Credentials are read from the captured `Environment` once per invocation
//! and handed to the client factory as an opaque bundle. Missing keys are not
//! an error here: the service rejects the eventual request instead.

use std::fmt;

use crate::env_file::Environment;

/// Environment variable holding the access key id
pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the optional session token
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Access credentials for one invocation.
///
/// The bundle is never logged and never persisted; its Debug form redacts
/// every field.
#[derive(Clone)]
pub struct CredentialBundle {
    access_key: Option<String>,
    secret_key: Option<String>,
    session_token: Option<String>,
}

impl CredentialBundle {
    /// Resolve credentials from an environment snapshot
    pub fn resolve(env: &Environment) -> Self {
        Self {
            access_key: env.get(ACCESS_KEY_VAR).map(str::to_owned),
            secret_key: env.get(SECRET_KEY_VAR).map(str::to_owned),
            session_token: env.get(SESSION_TOKEN_VAR).map(str::to_owned),
        }
    }

    /// Build a bundle from explicit parts
    pub fn from_parts(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key: Some(access_key.into()),
            secret_key: Some(secret_key.into()),
            session_token,
        }
    }

    /// Access key id, empty when unresolved
    pub fn access_key(&self) -> &str {
        self.access_key.as_deref().unwrap_or("")
    }

    /// Secret access key, empty when unresolved
    pub fn secret_key(&self) -> &str {
        self.secret_key.as_deref().unwrap_or("")
    }

    /// Session token, if one was resolved
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Whether both key halves were resolved
    pub fn is_complete(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

impl fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            match value {
                Some(_) => "<redacted>",
                None => "<unset>",
            }
        }

        f.debug_struct("CredentialBundle")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("session_token", &redact(&self.session_token))
            .finish()
    }
}
