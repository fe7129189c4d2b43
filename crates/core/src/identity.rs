//! External identity normalisation.
//!
//! The upstream identity provider is trusted but not owned: whatever profile
//! it hands over is mapped onto an [`ExternalIdentity`] before the reconciler
//! touches the `users` table. Reconciliation is keyed by email, so an
//! identity without a usable email cannot be reconciled at all.

/// A verified identity as supplied by the upstream provider, ready to be
/// reconciled into an internal user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    /// Email exactly as received (case preserved), trimmed of surrounding whitespace.
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl ExternalIdentity {
    /// Build an identity from raw provider fields.
    ///
    /// Returns `None` when the email is absent or blank; callers must then
    /// skip reconciliation. Blank `name` / `avatar_url` values become `None`.
    pub fn from_profile(
        email: Option<&str>,
        name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Option<Self> {
        let email = non_blank(email)?;
        Some(Self {
            email,
            name: non_blank(name),
            avatar_url: non_blank(avatar_url),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
