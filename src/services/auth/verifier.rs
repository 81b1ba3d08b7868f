use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::services::auth::{Claims, VerifyError};

/// HS256 access-token verifier.
///
/// - 署名 secret と leeway は起動時に一度だけ注入し、以降は読み取り専用
/// - 期限判定は `verify_at` に現在時刻を渡す形にして、テストで時刻を固定できるようにする
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    leeway_seconds: i64,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp は verify_at で注入時刻と比較する (jsonwebtoken 側はシステム時刻固定のため)
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            leeway_seconds: i64::try_from(leeway_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Verify against the current wall clock.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify a token as of `now` (unix seconds).
    ///
    /// Checks:
    /// - signature (HS256, configured secret)
    /// - claims shape (`role` must be a known `Role`)
    /// - `sub` is not blank
    /// - `now < exp + leeway`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, VerifyError> {
        let claims =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.sub.trim().is_empty() {
            return Err(VerifyError::EmptyClaim("sub"));
        }

        if now >= claims.exp.saturating_add(self.leeway_seconds) {
            return Err(VerifyError::Expired {
                exp: claims.exp,
                now,
            });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;
    use crate::services::auth::{Role, TokenIssuer};

    const SECRET: &[u8] = b"test-secret-test-secret-test-secret";
    const NOW: i64 = 1_700_000_000;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, 600)
    }

    #[test]
    fn accepts_valid_token() {
        let token = issuer().issue_at("staff-1", Role::Cashier, NOW).unwrap();

        let claims = TokenVerifier::new(SECRET, 0)
            .verify_at(&token, NOW + 10)
            .unwrap();

        assert_eq!(claims.sub, "staff-1");
        assert_eq!(claims.role, Role::Cashier);
        assert_eq!(claims.iat, NOW);
        assert_eq!(claims.exp, NOW + 600);
    }

    #[test]
    fn rejects_token_expired_one_second_ago() {
        let token = issuer().issue_at("staff-1", Role::Admin, NOW).unwrap();

        let err = TokenVerifier::new(SECRET, 0)
            .verify_at(&token, NOW + 601)
            .unwrap_err();

        assert!(matches!(
            err,
            VerifyError::Expired {
                exp,
                now
            } if exp == NOW + 600 && now == NOW + 601
        ));
    }

    #[test]
    fn token_is_expired_exactly_at_exp() {
        let token = issuer().issue_at("staff-1", Role::Admin, NOW).unwrap();

        let verifier = TokenVerifier::new(SECRET, 0);
        assert!(verifier.verify_at(&token, NOW + 599).is_ok());
        assert!(verifier.verify_at(&token, NOW + 600).is_err());
    }

    #[test]
    fn leeway_extends_expiry() {
        let token = issuer().issue_at("staff-1", Role::Admin, NOW).unwrap();

        let verifier = TokenVerifier::new(SECRET, 30);
        assert!(verifier.verify_at(&token, NOW + 620).is_ok());
        assert!(verifier.verify_at(&token, NOW + 630).is_err());
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = TokenIssuer::new(b"another-secret-another-secret-xx", 600)
            .issue_at("staff-1", Role::Admin, NOW)
            .unwrap();

        let err = TokenVerifier::new(SECRET, 0)
            .verify_at(&token, NOW)
            .unwrap_err();

        match err {
            VerifyError::Jwt(e) => assert!(matches!(e.kind(), ErrorKind::InvalidSignature)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        let verifier = TokenVerifier::new(SECRET, 0);

        assert!(matches!(
            verifier.verify_at("not-a-jwt", NOW),
            Err(VerifyError::Jwt(_))
        ));
        assert!(matches!(
            verifier.verify_at("a.b.c", NOW),
            Err(VerifyError::Jwt(_))
        ));
    }

    #[test]
    fn rejects_unknown_role_and_blank_subject() {
        let key = EncodingKey::from_secret(SECRET);
        let verifier = TokenVerifier::new(SECRET, 0);

        let unknown_role = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({"sub": "u1", "role": "manager", "iat": NOW, "exp": NOW + 60}),
            &key,
        )
        .unwrap();
        assert!(matches!(
            verifier.verify_at(&unknown_role, NOW),
            Err(VerifyError::Jwt(_))
        ));

        let blank_sub = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({"sub": "  ", "role": "admin", "iat": NOW, "exp": NOW + 60}),
            &key,
        )
        .unwrap();
        assert!(matches!(
            verifier.verify_at(&blank_sub, NOW),
            Err(VerifyError::EmptyClaim("sub"))
        ));
    }

    #[test]
    fn accepts_token_without_iat() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({"sub": "u1", "role": "customer", "exp": NOW + 60}),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let claims = TokenVerifier::new(SECRET, 0).verify_at(&token, NOW).unwrap();

        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.iat, 0);
    }

    #[test]
    fn rejects_other_algorithm() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &serde_json::json!({"sub": "u1", "role": "admin", "iat": NOW, "exp": NOW + 60}),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(TokenVerifier::new(SECRET, 0).verify_at(&token, NOW).is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let out = format!("{:?}", TokenVerifier::new(SECRET, 0));
        assert!(!out.contains("test-secret"));
    }
}
