//! The login flow.
//!
//! [`Authority`] owns the hasher, issuer and verifier and holds no mutable
//! state, so a single instance behind an `Arc` serves every request.

use std::sync::Arc;

use chrono::Duration;
use todoapp_config::{JwtConfig, PasswordConfig};
use tracing::{debug, instrument};

use crate::{
    AuthError, Clock, CredentialStore, IdentityContext, PasswordHasher, TokenIssuer,
    TokenVerifier,
};

pub struct Authority {
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    access_ttl: Duration,
    dummy_hash: String,
}

impl Authority {
    /// # Errors
    ///
    /// - [`AuthError::Hashing`] if the configured bcrypt cost is rejected
    /// - [`AuthError::ExpiryOutOfRange`] if the access TTL does not fit a [`Duration`]
    pub fn new(
        jwt_config: &JwtConfig,
        password_config: &PasswordConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AuthError> {
        let access_ttl = Duration::try_seconds(jwt_config.access_token_expiry)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or(AuthError::ExpiryOutOfRange)?;
        let hasher = PasswordHasher::from_config(password_config);
        // Verified against on unknown usernames so both login paths cost one bcrypt round.
        let dummy_hash = hasher.hash("todoapp-unknown-user")?;

        Ok(Self {
            hasher,
            issuer: TokenIssuer::new(jwt_config, clock.clone()),
            verifier: TokenVerifier::new(jwt_config, clock),
            access_ttl,
            dummy_hash,
        })
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Checks `password` against the stored hash for `username` and issues
    /// an access token on success.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] for an unknown user or a wrong password
    /// - [`AuthError::Store`] if the lookup itself fails
    /// - [`AuthError::Hashing`] if the stored hash is not a bcrypt digest
    #[instrument(skip(self, store, password))]
    pub async fn login<S>(
        &self,
        store: &S,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError>
    where
        S: CredentialStore + ?Sized,
    {
        let record = store
            .find_credential_by_username(username)
            .await
            .map_err(AuthError::Store)?;

        let Some(record) = record else {
            // Result ignored: this call only spends the same bcrypt time as a real check.
            let _timing = self.hasher.verify(password, &self.dummy_hash);
            debug!("unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &record.password_hash)? {
            debug!(user_id = record.user_id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.issuer.issue(
            &record.username,
            record.user_id,
            &record.role,
            self.access_ttl,
        )
    }

    pub fn verify(&self, token: &str) -> Result<IdentityContext, AuthError> {
        self.verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::DateTime;
    use jsonwebtoken::Algorithm;
    use secrecy::SecretString;

    use super::*;
    use crate::{CredentialRecord, ManualClock};

    struct MapStore(HashMap<String, CredentialRecord>);

    #[async_trait]
    impl CredentialStore for MapStore {
        async fn find_credential_by_username(
            &self,
            username: &str,
        ) -> anyhow::Result<Option<CredentialRecord>> {
            Ok(self.0.get(username).cloned())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl CredentialStore for FailingStore {
        async fn find_credential_by_username(
            &self,
            _username: &str,
        ) -> anyhow::Result<Option<CredentialRecord>> {
            Err(anyhow::anyhow!("pool timed out"))
        }
    }

    fn setup() -> (Arc<ManualClock>, Authority, MapStore) {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let jwt_config = JwtConfig {
            secret: SecretString::from("test-secret-key-at-least-32-characters-long".to_string()),
            algorithm: Algorithm::HS256,
            access_token_expiry: 20 * 60,
        };
        let authority =
            Authority::new(&jwt_config, &PasswordConfig { bcrypt_cost: 4 }, clock.clone())
                .unwrap();

        let record = CredentialRecord {
            user_id: 42,
            username: "alice".to_string(),
            password_hash: authority.hasher().hash("correctpass").unwrap(),
            role: "user".to_string(),
            is_active: true,
        };
        let store = MapStore(HashMap::from([("alice".to_string(), record)]));
        (clock, authority, store)
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let (_, authority, store) = setup();
        let token = authority.login(&store, "alice", "correctpass").await.unwrap();

        let identity = authority.verify(&token).unwrap();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.user_role.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_identical() {
        let (_, authority, store) = setup();

        let wrong_password = authority
            .login(&store, "alice", "wrongpass")
            .await
            .unwrap_err();
        let unknown_user = authority
            .login(&store, "nonexistent", "anything")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_login_token_expires_after_ttl() {
        let (clock, authority, store) = setup();
        let token = authority.login(&store, "alice", "correctpass").await.unwrap();

        clock.advance(Duration::minutes(19));
        assert!(authority.verify(&token).is_ok());

        clock.advance(Duration::minutes(2));
        assert!(matches!(authority.verify(&token), Err(AuthError::Expired)));
    }

    #[tokio::test]
    async fn test_store_failure_is_not_invalid_credentials() {
        let (_, authority, _) = setup();
        let err = authority
            .login(&FailingStore, "alice", "correctpass")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));
        assert!(!err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_is_internal() {
        let (_, authority, mut store) = setup();
        if let Some(record) = store.0.get_mut("alice") {
            record.password_hash = "not-a-bcrypt-hash".to_string();
        }
        let err = authority
            .login(&store, "alice", "correctpass")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Hashing(_)));
    }

    #[tokio::test]
    async fn test_login_through_trait_object() {
        let (_, authority, store) = setup();
        let store: Arc<dyn CredentialStore> = Arc::new(store);
        assert!(authority
            .login(store.as_ref(), "alice", "correctpass")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_overlong_password_is_invalid_credentials() {
        let (_, authority, store) = setup();
        let overlong = format!("correctpass{}", "x".repeat(80));

        let found = authority.login(&store, "alice", &overlong).await.unwrap_err();
        let unknown = authority.login(&store, "nobody", &overlong).await.unwrap_err();

        assert!(matches!(found, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_unrepresentable_ttl_is_rejected() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::starting_now());
        let password_config = PasswordConfig { bcrypt_cost: 4 };
        for expiry in [0, -1, i64::MAX] {
            let jwt_config = JwtConfig {
                secret: SecretString::from("test-secret-key-at-least-32-characters-long".to_string()),
                algorithm: Algorithm::HS256,
                access_token_expiry: expiry,
            };
            let result = Authority::new(&jwt_config, &password_config, clock.clone());
            assert!(
                matches!(result, Err(AuthError::ExpiryOutOfRange)),
                "expiry {expiry} should be rejected"
            );
        }
    }
}
