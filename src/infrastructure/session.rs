//! Authenticated session context for backend calls
//!
//! Created once at startup from configuration and handed to the HTTP store
//! clients at construction. There is no global auth state; a client without
//! a session simply sends unauthenticated requests.

use std::fmt;

#[derive(Clone)]
pub struct SessionContext {
    token: String,
}

impl SessionContext {
    pub fn new(token: String) -> Self {
        SessionContext { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Keep the token out of debug output and logs.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"***")
            .finish()
    }
}
