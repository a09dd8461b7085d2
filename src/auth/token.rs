use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token, the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Mints and verifies JWTs with a secret fixed at construction time.
///
/// One `TokenManager` is built from `Config.jwt_secret_key` during assembly
/// and carried in the application state, so handlers and middleware never
/// read the environment themselves.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenManager {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Generates a JWT for the given user ID, expiring in 24 hours.
    pub fn generate(&self, user_id: i32) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::hours(24))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a JWT string and decodes its claims.
    ///
    /// Default validation checks apply (signature, expiration). Returns
    /// `AppError::Unauthorized` for malformed, mis-signed or expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation_and_verification() {
        let manager = TokenManager::new("test_secret_for_gen_verify");
        let user_id = 1;
        let token = manager.generate(user_id).unwrap();
        let claims = manager.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        let manager = TokenManager::new("test_secret_for_expiration");

        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret("test_secret_for_expiration".as_bytes()),
        )
        .unwrap();

        match manager.verify(&expired_token) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(msg.contains("Invalid token: ExpiredSignature"));
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        let minting = TokenManager::new("secret_a");
        let verifying = TokenManager::new("a_completely_different_secret");

        let token = minting.generate(3).unwrap();

        match verifying.verify(&token) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(
                    msg.contains("Invalid token: InvalidSignature")
                        || msg.contains("Invalid token: InvalidToken")
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }
}
