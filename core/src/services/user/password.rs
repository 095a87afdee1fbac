//! bcrypt hashing, run off the async executor

use crate::errors::DomainError;

pub(super) async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

pub(super) async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

    // A stored hash bcrypt cannot parse never matches
    Ok(verified.unwrap_or(false))
}
