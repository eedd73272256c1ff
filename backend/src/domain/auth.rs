//! Credential and identity types for the external authenticator.

/// Credentials forwarded to the external identity service.
///
/// The password is deliberately excluded from `Debug` output so credentials
/// can appear in tracing fields without leaking secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Bundle an email/password pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Login identity.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plaintext password. Only the outbound adapter reads this; it must
    /// never be logged or persisted.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity returned by a successful authentication call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable user identifier, used as `author_id` for subsequent writes.
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let creds = Credentials::new("a@x.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
