//! HTTP authorization schemes

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Name of the HTTP header carrying [`Authorization::header_value`]
pub const HEADER_NAME: &str = "Authorization";

/// HTTP authorization schemes
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Authorization {
    /// Basic authorization
    Basic {
        /// User name, sent base64 encoded with the password
        username: String,
        /// Password
        password: String,
    },
    /// Bearer authorization
    Bearer {
        /// Opaque token
        token: String,
    },
}

impl Authorization {
    /// Basic authorization from a user name and password
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer authorization from a token
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self { Self::Bearer { token: token.into() } }

    /// Value of the `Authorization` header.
    ///
    /// Basic credentials are `username:password` in standard padded base64.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Self::Bearer { token } => format!("Bearer {token}"),
        }
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
