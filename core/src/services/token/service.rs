//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, Principal, UserIdClaim};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying signed access tokens
///
/// Stateless apart from the keys derived from the configured secret, so one
/// instance is shared by every request handler.
///
/// `is_valid` is the fail-closed boundary: every verification failure turns
/// into `false`. `decode_identity` and `extract_user_id` run the same
/// verification and return the failure as an error instead.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Issuer and signing secret
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for `user`, valid for `ttl` from now
    ///
    /// # Arguments
    ///
    /// * `user` - Identity whose email becomes the subject and whose id becomes the `id` claim
    /// * `ttl` - Positive lifetime of the token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Non-positive `ttl` or signing failure
    pub fn issue(&self, user: &User, ttl: Duration) -> Result<String, DomainError> {
        if ttl <= Duration::zero() {
            return Err(DomainError::Validation {
                message: "Token lifetime must be positive".to_string(),
            });
        }

        let claims = Claims::new(&self.config.issuer, user, Utc::now(), ttl);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims
    ///
    /// Checks structure, signature under the configured secret, and that the
    /// current time is strictly before `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                _ => TokenError::InvalidTokenFormat,
            })?;

        // jsonwebtoken accepts exp == now; a token is only valid strictly before exp
        if token_data.claims.is_expired_at(Utc::now()) {
            return Err(TokenError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Whether `token` is well-formed, correctly signed and unexpired
    ///
    /// Never fails; the reason for a rejection is only logged.
    pub fn is_valid(&self, token: &str) -> bool {
        match self.verify(token) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(%reason, "Rejected bearer token");
                false
            }
        }
    }

    /// Decodes the authenticated principal from a token
    ///
    /// The principal's subject is the token subject and it carries the single
    /// `ROLE_USER` authority.
    pub fn decode_identity(&self, token: &str) -> Result<Principal, DomainError> {
        let claims = self.verify(token)?;
        if claims.sub.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }
            .into());
        }
        Ok(Principal::user(claims.sub, token))
    }

    /// Extracts the numeric user id stored in the `id` claim
    ///
    /// An `id` that is absent or not an integer is reported as a missing claim.
    pub fn extract_user_id(&self, token: &str) -> Result<i64, DomainError> {
        let claims = self.verify(token)?;
        claims.id.as_ref().and_then(UserIdClaim::as_i64).ok_or_else(|| {
            DomainError::Token(TokenError::MissingClaim {
                claim: "id".to_string(),
            })
        })
    }
}
