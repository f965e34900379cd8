//! Session token type.

use std::borrow::Borrow;
use std::fmt;

use uuid::Uuid;

/// Opaque, unguessable identifier for one session.
///
/// Backed by a random (v4) UUID rendered as a lowercase hyphenated string.
/// Anything the client sends back is accepted as a token; unknown values
/// simply resolve to "no session".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// First 8 characters, safe to put in logs.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the store be queried with a plain `&str` coming off a cookie.
impl Borrow<str> for SessionToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}
