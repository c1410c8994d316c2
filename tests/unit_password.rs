use todoapp_auth::{AuthError, MAX_PASSWORD_BYTES, PasswordHasher};

fn hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hasher().hash(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_empty() {
    let hasher = hasher();
    let hash = hasher.hash("").unwrap();

    assert!(hasher.verify("", &hash).unwrap());
    assert!(!hasher.verify(" ", &hash).unwrap());
}

#[test]
fn test_verify_password_correct() {
    let hasher = hasher();
    let hash = hasher.hash("correctpassword").unwrap();

    let result = hasher.verify("correctpassword", &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hasher = hasher();
    let hash = hasher.hash("correctpassword").unwrap();

    let result = hasher.verify("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = hasher().verify("testpassword", "not_a_valid_bcrypt_hash");

    assert!(matches!(result, Err(AuthError::Hashing(_))));
}

#[test]
fn test_hash_generates_unique_hashes() {
    let hasher = hasher();
    let hash1 = hasher.hash("samepassword").unwrap();
    let hash2 = hasher.hash("samepassword").unwrap();

    assert_ne!(hash1, hash2);
    assert!(hasher.verify("samepassword", &hash1).unwrap());
    assert!(hasher.verify("samepassword", &hash2).unwrap());
}

#[test]
fn test_verify_accepts_hash_of_other_cost() {
    let strong = PasswordHasher::new(6).hash("password123").unwrap();

    assert!(hasher().verify("password123", &strong).unwrap());
}

#[test]
fn test_hash_unicode_password() {
    let hasher = hasher();
    let hash = hasher.hash("pässwörd-密码-🔐").unwrap();

    assert!(hasher.verify("pässwörd-密码-🔐", &hash).unwrap());
    assert!(!hasher.verify("passwort", &hash).unwrap());
}

#[test]
fn test_hash_is_case_sensitive() {
    let hasher = hasher();
    let hash = hasher.hash("CaseSensitive").unwrap();

    assert!(!hasher.verify("casesensitive", &hash).unwrap());
}

#[test]
fn test_passwords_differing_after_72_bytes_never_cross_verify() {
    let hasher = hasher();
    let prefix = "a".repeat(MAX_PASSWORD_BYTES);
    let one = format!("{prefix}one");
    let two = format!("{prefix}two");

    assert!(matches!(
        hasher.hash(&two),
        Err(AuthError::PasswordTooLong { .. })
    ));

    let digest = hasher.hash(&prefix).unwrap();
    assert!(hasher.verify(&prefix, &digest).unwrap());
    assert!(!hasher.verify(&one, &digest).unwrap());
    assert!(!hasher.verify(&two, &digest).unwrap());
}
