use chirp::server::utils::token_utils::{Claims, TokenUtil};
use uuid::Uuid;

#[test]
fn test_token_roundtrip() {
    let util = TokenUtil::new("test_secret".to_string());
    let user_id = Uuid::new_v4();

    let token = util.issue(user_id).expect("issuing should work");
    let claims = util.verify(&token).expect("fresh token should verify");

    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_token_wrong_secret() {
    let util = TokenUtil::new("test_secret".to_string());
    let other = TokenUtil::new("other_secret".to_string());

    let token = util.issue(Uuid::new_v4()).expect("issuing should work");

    assert!(other.verify(&token).is_err());
    assert!(util.verify("not even a token").is_err());
}

#[test]
fn test_expired_token() {
    let secret = "test_secret";
    let util = TokenUtil::new(secret.to_string());

    // hand-rolled token with an expiry in the past
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: 1234567890, // a while ago
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    // expired token should fail even though the signature is correct
    assert!(util.verify(&token).is_err());
}
