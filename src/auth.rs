//! Authentication Collaborator
//!
//! Adapter over the external redirect-based auth provider. The wizard only
//! cares about three things: the current session status, login/logout
//! redirects, and a bearer access token for outgoing API calls. The
//! provider's internal protocol is not modeled here.

use leptos::*;

use crate::storage::{local_get, local_remove, local_set};

/// Local storage keys written by the redirect return handling
const TOKEN_KEY: &str = "trimly_access_token";
const AUTH_DOMAIN_KEY: &str = "trimly_auth_domain";

const DEFAULT_AUTH_DOMAIN: &str = "trimly.eu.auth0.com";
const CLIENT_ID: &str = "trimly-onboarding";

/// Audience the access token is scoped to
pub const AUTH_AUDIENCE: &str = "https://api.trimly.app";
/// Permission scope requested on login
pub const AUTH_SCOPE: &str = "offline_access openid profile email";

/// Session status reported by the auth collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Reactive auth session provided to all components
#[derive(Clone, Copy)]
pub struct AuthSession {
    pub status: RwSignal<AuthStatus>,
}

/// Auth provider domain, overridable through local storage
fn auth_domain() -> String {
    local_get(AUTH_DOMAIN_KEY).unwrap_or_else(|| DEFAULT_AUTH_DOMAIN.to_string())
}

/// Provide the auth session and resolve the initial status.
///
/// A redirect return carries the token in the URL fragment; it is cached in
/// local storage and stripped from the visible URL before the status flips
/// to authenticated.
pub fn provide_auth() {
    let session = AuthSession {
        status: create_rw_signal(AuthStatus::Loading),
    };
    provide_context(session);

    if let Some(token) = take_fragment_token() {
        local_set(TOKEN_KEY, &token);
    }

    let status = if local_get(TOKEN_KEY).is_some() {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Anonymous
    };
    session.status.set(status);
}

/// Obtain a bearer access token for an outgoing request.
///
/// Single attempt: a missing or expired session rejects the call and the
/// caller surfaces the failure. No retry or refresh-backoff logic.
pub async fn access_token() -> Result<String, String> {
    local_get(TOKEN_KEY).ok_or_else(|| "Not authenticated".to_string())
}

/// Redirect the browser to the provider's login page
pub fn login() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let origin = window.location().origin().unwrap_or_default();

    let url = format!(
        "https://{}/authorize?client_id={}&response_type=token&redirect_uri={}&audience={}&scope={}",
        auth_domain(),
        CLIENT_ID,
        js_sys::encode_uri_component(&origin),
        js_sys::encode_uri_component(AUTH_AUDIENCE),
        js_sys::encode_uri_component(AUTH_SCOPE),
    );
    let _ = window.location().assign(&url);
}

/// Drop the cached token and return to the landing page
pub fn logout(session: AuthSession) {
    local_remove(TOKEN_KEY);
    session.status.set(AuthStatus::Anonymous);

    if let Some(window) = web_sys::window() {
        let _ = window.location().assign("/");
    }
}

/// Start a passwordless "magic link" login for the given email
pub async fn send_magic_link(email: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct PasswordlessStart {
        client_id: String,
        connection: String,
        email: String,
        send: String,
    }

    let url = format!("https://{}/passwordless/start", auth_domain());
    let response = gloo_net::http::Request::post(&url)
        .json(&PasswordlessStart {
            client_id: CLIENT_ID.to_string(),
            connection: "email".to_string(),
            email: email.to_string(),
            send: "link".to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Could not send magic link".to_string());
    }
    Ok(())
}

/// Pull an access token out of the redirect-return URL fragment, if present,
/// and strip the fragment from the visible URL.
fn take_fragment_token() -> Option<String> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let token = fragment_token(&hash)?;

    let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
    Some(token)
}

/// Extract `access_token` from a `#key=value&...` fragment
fn fragment_token(hash: &str) -> Option<String> {
    hash.trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("access_token="))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_token_found_among_other_params() {
        let hash = "#token_type=Bearer&access_token=abc123&expires_in=7200";
        assert_eq!(fragment_token(hash), Some("abc123".to_string()));
    }

    #[test]
    fn fragment_token_absent_or_empty() {
        assert_eq!(fragment_token("#foo=bar"), None);
        assert_eq!(fragment_token("#access_token="), None);
        assert_eq!(fragment_token(""), None);
    }
}
