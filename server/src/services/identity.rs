//! Auth provider identity lookup: session token in, `SessionUser` out.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use content::SessionUser;
use reqwest::StatusCode;
use serde::Deserialize;

/// User-info payload. Accepts both provider-native field names and the
/// OpenID Connect standard claims.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    #[serde(alias = "sub", alias = "user_id")]
    id: String,
    #[serde(default, alias = "given_name", alias = "firstName")]
    first_name: Option<String>,
    #[serde(default, alias = "family_name", alias = "lastName")]
    last_name: Option<String>,
    #[serde(default, alias = "name", alias = "fullName")]
    full_name: Option<String>,
}

impl From<ProviderUser> for SessionUser {
    fn from(user: ProviderUser) -> Self {
        Self { id: user.id, first_name: user.first_name, last_name: user.last_name, full_name: user.full_name }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider does not recognise the session.
    #[error("session rejected by auth provider ({0})")]
    Rejected(StatusCode),
    #[error("auth provider error: {0}")]
    Provider(String),
    #[error("auth provider request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Resolve a provider session token into the signed-in user.
///
/// # Errors
///
/// [`IdentityError::Rejected`] on 401/403, [`IdentityError::Provider`] on any
/// other non-2xx answer or an unreadable body, [`IdentityError::Request`] when
/// the provider cannot be reached.
pub async fn fetch_session_user(
    http: &reqwest::Client,
    userinfo_url: &str,
    token: &str,
) -> Result<SessionUser, IdentityError> {
    let resp = http
        .get(userinfo_url)
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(IdentityError::Rejected(status));
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(IdentityError::Provider(format!("{status}: {body}")));
    }

    let body = resp.text().await?;
    parse_user(&body)
}

fn parse_user(body: &str) -> Result<SessionUser, IdentityError> {
    serde_json::from_str::<ProviderUser>(body)
        .map(SessionUser::from)
        .map_err(|e| IdentityError::Provider(format!("unexpected user-info body: {e}")))
}
