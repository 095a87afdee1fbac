//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::user::User;

/// The single authority granted to every authenticated principal
pub const ROLE_USER: &str = "ROLE_USER";

/// Claims structure for JWT payload
///
/// Only `exp` is required to parse. A correctly signed token is accepted
/// whatever else it carries; the remaining claims are checked by the
/// operation that needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    #[serde(default)]
    pub iss: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Subject (user email)
    #[serde(default)]
    pub sub: String,

    /// Numeric user id
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_user_id"
    )]
    pub id: Option<UserIdClaim>,
}

/// The `id` claim as found in the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserIdClaim {
    Numeric(i64),
    Malformed,
}

impl UserIdClaim {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            UserIdClaim::Numeric(id) => Some(*id),
            UserIdClaim::Malformed => None,
        }
    }
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<UserIdClaim>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Numeric(i64),
        Other(IgnoredAny),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Numeric(id)) => Some(UserIdClaim::Numeric(id)),
        Some(RawId::Other(_)) => Some(UserIdClaim::Malformed),
        None => None,
    })
}

impl Claims {
    /// Creates claims for `user` issued at `now` and expiring after `ttl`
    pub fn new(issuer: &str, user: &User, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expiry = now + ttl;

        Self {
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            sub: user.email.clone(),
            id: Some(UserIdClaim::Numeric(user.id)),
        }
    }

    /// Checks if the claims have expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// The authenticated caller decoded from a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Token subject (the user's email)
    pub subject: String,

    /// Granted authorities; always exactly [`ROLE_USER`]
    pub authorities: Vec<String>,

    /// The bearer token the principal was decoded from
    #[serde(skip)]
    pub credentials: String,
}

impl Principal {
    /// Builds a principal holding the standard user role
    pub fn user(subject: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities: vec![ROLE_USER.to_string()],
            credentials: credentials.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.subject
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
