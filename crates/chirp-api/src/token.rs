use chirp_types::api::Claims;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

pub fn issue(secret: &str, user_id: Uuid) -> anyhow::Result<String> {
    // Sessions expire one hour after issuance.
    let claims = Claims {
        sub: user_id,
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn verify(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_the_same_identity() {
        let user_id = Uuid::new_v4();
        let token = issue("secret", user_id).unwrap();

        let claims = verify("secret", &token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue("secret", Uuid::new_v4()).unwrap();
        assert!(verify("other-secret", &token).is_err());
    }

    #[test]
    fn garbage_and_tampered_tokens_are_rejected() {
        assert!(verify("secret", "not-a-jwt").is_err());

        let token = issue("secret", Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(verify("secret", &tampered).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issue a token that expired in the past by hand.
        let claims = Claims {
            sub: Uuid::new_v4(),
            exp: (chrono::Utc::now() - chrono::Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(verify("secret", &token).is_err());
    }
}
