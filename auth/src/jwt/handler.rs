use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Claims whose absence makes a token unacceptable.
const REQUIRED_CLAIMS: [&str; 5] = ["exp", "nbf", "sub", "iss", "aud"];

/// JWT token handler for issuing and verifying access tokens.
///
/// Signs with HS256 and accepts nothing else on the way back in: a token whose
/// header names another algorithm (or `none`) is rejected before its claims are
/// looked at. Issuer, audience and lifetime are fixed at construction.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret
    /// * `issuer` - Value written to and required in `iss`
    /// * `audience` - Value written to and required in `aud`
    /// * `lifetime` - Validity horizon of issued tokens
    ///
    /// # Errors
    /// * `EmptySecret` - The secret has no bytes
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // A token is rejected the second its `exp` has passed.
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            audience,
            lifetime,
        })
    }

    /// Build the claim set for `subject` without signing it.
    pub fn claims_for(&self, subject: impl ToString) -> Claims {
        Claims::new(subject, &self.issuer, &self.audience, self.lifetime)
    }

    /// Issue a signed token for `subject`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject: impl ToString) -> Result<String, JwtError> {
        self.encode(&self.claims_for(subject))
    }

    /// Sign an explicit claim set.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(Algorithm::HS256);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// # Returns
    /// The verified claims
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` has elapsed
    /// * `NotYetValid` - `nbf` lies in the future
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `InvalidAlgorithm` - Header names an algorithm other than HS256
    /// * `InvalidIssuer` / `InvalidAudience` - Claim does not match configuration
    /// * `MissingClaim` - A required claim is absent
    /// * `Malformed` - Not a decodable JWT
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(map_decode_error)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> JwtError {
    match err.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        ErrorKind::ImmatureSignature => JwtError::NotYetValid,
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => JwtError::InvalidAlgorithm,
        ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        ErrorKind::InvalidAudience => JwtError::InvalidAudience,
        ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
        _ => JwtError::Malformed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn handler() -> JwtHandler {
        JwtHandler::new(SECRET, "bookstore", "bookstore-clients", Duration::days(3))
            .expect("Failed to build handler")
    }

    #[test]
    fn test_issue_and_decode() {
        let handler = handler();

        let token = handler.issue(42).expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "bookstore");
        assert_eq!(claims.aud, "bookstore-clients");
        assert_eq!(claims.exp - claims.iat, 3 * 24 * 60 * 60);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = JwtHandler::new(b"", "iss", "aud", Duration::hours(1));
        assert!(matches!(result, Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = handler();
        let past = Utc::now().timestamp() - 3600;
        let claims = handler
            .claims_for(42)
            .with_expiration(past)
            .with_not_before(past - 60);

        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(handler.decode(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_token_expired_one_second_ago() {
        let handler = handler();
        let now = Utc::now().timestamp();
        let claims = handler
            .claims_for(42)
            .with_expiration(now - 1)
            .with_not_before(now - 120);

        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(handler.decode(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_token_expired_thirty_seconds_ago() {
        let handler = handler();
        let now = Utc::now().timestamp();
        let claims = handler
            .claims_for(42)
            .with_expiration(now - 30)
            .with_not_before(now - 120);

        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(handler.decode(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_token_not_yet_valid() {
        let handler = handler();
        let future = Utc::now().timestamp() + 3600;
        let claims = handler.claims_for(42).with_not_before(future);

        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(handler.decode(&token), Err(JwtError::NotYetValid));
    }

    #[test]
    fn test_flipping_any_signature_bit_is_rejected() {
        let handler = handler();
        let token = handler.issue(42).expect("Failed to issue token");

        let (signed_part, signature) = token.rsplit_once('.').unwrap();
        let signature = URL_SAFE_NO_PAD.decode(signature).unwrap();

        for byte in 0..signature.len() {
            for bit in 0..8 {
                let mut tampered = signature.clone();
                tampered[byte] ^= 1 << bit;
                let forged = format!("{}.{}", signed_part, URL_SAFE_NO_PAD.encode(&tampered));

                assert_eq!(
                    handler.decode(&forged),
                    Err(JwtError::InvalidSignature),
                    "bit {} of byte {} accepted",
                    bit,
                    byte
                );
            }
        }
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let other = JwtHandler::new(
            b"secret2_at_least_32_bytes_long_key!",
            "bookstore",
            "bookstore-clients",
            Duration::days(3),
        )
        .unwrap();

        let token = other.issue(42).expect("Failed to issue token");

        assert_eq!(handler().decode(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_wrong_issuer() {
        let other = JwtHandler::new(SECRET, "someone-else", "bookstore-clients", Duration::days(3))
            .unwrap();
        let token = other.issue(42).unwrap();

        assert_eq!(handler().decode(&token), Err(JwtError::InvalidIssuer));
    }

    #[test]
    fn test_decode_wrong_audience() {
        let other = JwtHandler::new(SECRET, "bookstore", "another-app", Duration::days(3)).unwrap();
        let token = other.issue(42).unwrap();

        assert_eq!(handler().decode(&token), Err(JwtError::InvalidAudience));
    }

    #[test]
    fn test_decode_rejects_other_hmac_algorithm() {
        let handler = handler();
        let claims = handler.claims_for(42);

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(handler.decode(&token), Err(JwtError::InvalidAlgorithm));
    }

    #[test]
    fn test_decode_rejects_unsigned_token() {
        let handler = handler();
        let token = handler.issue(42).unwrap();
        let payload = token.split('.').nth(1).unwrap();

        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let unsigned = format!("{}.{}.", header, payload);

        assert!(handler.decode(&unsigned).is_err());
    }

    #[test]
    fn test_decode_missing_expiration() {
        #[derive(serde::Serialize)]
        struct NoExpiry {
            sub: String,
            iat: i64,
            nbf: i64,
            iss: String,
            aud: String,
            jti: String,
        }

        let handler = handler();
        let now = Utc::now().timestamp();
        let claims = NoExpiry {
            sub: "42".to_string(),
            iat: now,
            nbf: now,
            iss: "bookstore".to_string(),
            aud: "bookstore-clients".to_string(),
            jti: "id".to_string(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            handler.decode(&token),
            Err(JwtError::MissingClaim("exp".to_string()))
        );
    }

    #[test]
    fn test_decode_garbage() {
        let result = handler().decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }
}
