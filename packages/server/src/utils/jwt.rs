use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Admin username
    pub exp: usize,  // Expiration timestamp
}

/// Token lifetime. Long enough to cover an evaluation session.
const TOKEN_VALIDITY_HOURS: i64 = 12;

/// Sign a new admin token.
pub fn sign(username: &str, secret: &str) -> Result<String> {
    let expiration = (Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS)).timestamp();

    let claims = Claims {
        sub: username.to_owned(),
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode an admin token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
