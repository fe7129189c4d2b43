//! Upstream identity-token verification.
//!
//! The identity provider signs an HS256 JWT carrying the user's profile
//! ([`IdentityClaims`]). This service never runs the OAuth handshake itself:
//! a token that verifies against the shared secret *is* the verified
//! external identity.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use learndsa_core::identity::ExternalIdentity;
use serde::{Deserialize, Serialize};

/// Claims carried by an identity token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Subject -- the provider's opaque account identifier.
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Issuer, checked only when [`IdentityTokenConfig::issuer`] is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

impl IdentityClaims {
    /// The reconcilable identity in these claims, or `None` if the provider
    /// supplied no usable email.
    pub fn external_identity(&self) -> Option<ExternalIdentity> {
        ExternalIdentity::from_profile(
            self.email.as_deref(),
            self.name.as_deref(),
            self.picture.as_deref(),
        )
    }
}

/// Configuration for identity-token verification.
#[derive(Debug, Clone)]
pub struct IdentityTokenConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Expected `iss` claim; `None` disables the issuer check.
    pub issuer: Option<String>,
}

impl IdentityTokenConfig {
    /// Load identity-token configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `IDENTITY_TOKEN_SECRET` | **yes**  | --      |
    /// | `IDENTITY_TOKEN_ISSUER` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `IDENTITY_TOKEN_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("IDENTITY_TOKEN_SECRET")
            .expect("IDENTITY_TOKEN_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "IDENTITY_TOKEN_SECRET must not be empty");

        let issuer = std::env::var("IDENTITY_TOKEN_ISSUER")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self { secret, issuer }
    }
}

/// Sign an identity token with the shared secret.
///
/// The service only verifies tokens; this is the provider side, used by
/// development tooling and tests.
pub fn issue_identity_token(
    claims: &IdentityClaims,
    config: &IdentityTokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode an identity token, returning the embedded [`IdentityClaims`].
///
/// Validates the signature and expiration, plus the issuer when configured.
pub fn verify_identity_token(
    token: &str,
    config: &IdentityTokenConfig,
) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);
    }

    let token_data = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
