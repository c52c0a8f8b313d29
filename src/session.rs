//! Explicit session context for outbound feed requests.
//!
//! The token travels with the components that need it instead of sitting in
//! ambient module state. Issuing and validating tokens is an external
//! collaborator's job; the pipeline only carries the opaque value.

/// Session handed to feed clients. Holds at most a bearer token.
#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session with no credentials; the feed is fetched unauthenticated.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Bearer token to attach to requests, if the session carries one.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
