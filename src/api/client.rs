//! HTTP API Client
//!
//! Adapter for the Trimly profile/business API. Every outgoing request
//! obtains a fresh access token from the auth collaborator and attaches it
//! as a bearer authorization header. One attempt per call; failures
//! propagate to the caller.

use std::fmt;

use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth;
use crate::state::session::{BookingPolicies, Preferences, Profile, Provider, Service, WeekSchedule};
use crate::storage::local_get;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.trimly.app/api/v1";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "trimly_api_url";

/// Get the API base URL from local storage or use the default.
/// Normalized: no trailing slash.
pub fn get_api_base() -> String {
    local_get(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Error returned by API calls
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Token acquisition failed; the user must re-authenticate
    Auth(String),
    /// Transport failure or request build failure
    Network(String),
    /// Non-2xx response from the API
    Remote { status: u16, message: String },
    /// Response body did not match the expected shape
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Remote { status, message } => write!(f, "{} ({})", message, status),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Partial body for `PATCH /business_info/{user_id}`. Each step saves its
/// own slice independently; absent fields are left untouched by the API.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BusinessInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<WeekSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<BookingPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

/// Response of the provider connect endpoints
#[derive(Debug, Default, serde::Deserialize)]
pub struct ConnectResponse {
    /// Authorization URL to send the browser to
    pub url: String,
}

/// Bearer-authenticated HTTP client.
///
/// The stub variant performs no network I/O and resolves every call with an
/// empty success response, so dependent components stay testable without a
/// live network or live credentials.
#[derive(Clone, Copy)]
pub struct ApiClient {
    stub: bool,
}

impl ApiClient {
    /// Client talking to the live API
    pub fn new() -> Self {
        Self { stub: false }
    }

    /// No-op stand-in for non-interactive contexts
    pub fn stub() -> Self {
        Self { stub: true }
    }

    /// GET a resource. Query parameters are part of `path`.
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        if self.stub {
            return Ok(T::default());
        }
        let request = Request::get(&format!("{}{}", get_api_base(), path));
        send(request, None::<&()>).await
    }

    /// POST a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        if self.stub {
            return Ok(T::default());
        }
        let request = Request::post(&format!("{}{}", get_api_base(), path));
        send(request, Some(body)).await
    }

    /// PATCH a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        if self.stub {
            return Ok(T::default());
        }
        let request =
            RequestBuilder::new(&format!("{}{}", get_api_base(), path)).method(Method::PATCH);
        send(request, Some(body)).await
    }

    /// DELETE a resource.
    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        if self.stub {
            return Ok(T::default());
        }
        let request = Request::delete(&format!("{}{}", get_api_base(), path));
        send(request, None::<&()>).await
    }

    // ============ Typed endpoints ============

    /// Fetch the current user's profile including nested business info
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get("/users/me").await
    }

    /// Persist one slice of the business info
    pub async fn update_business_info(
        &self,
        user_id: &str,
        patch: &BusinessInfoPatch,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self.patch(&business_info_path(user_id), patch).await?;
        Ok(())
    }

    /// Ask the API for a provider authorization URL to redirect to
    pub async fn connect_url(&self, provider: Provider) -> Result<String, ApiError> {
        let response: ConnectResponse = self.get(&connect_path(provider)).await?;
        Ok(response.url)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send<T, B>(request: RequestBuilder, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
    B: Serialize,
{
    let token = auth::access_token().await.map_err(ApiError::Auth)?;
    let request = request.header("Authorization", &format!("Bearer {}", token));

    let request = match body {
        Some(body) => request
            .json(body)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
        None => request
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|b| b.error)
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Remote { status, message });
    }

    // Some endpoints respond with an empty body on success
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    if text.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Path of the business-info resource for a user
pub fn business_info_path(user_id: &str) -> String {
    format!("/business_info/{}", user_id)
}

/// Path of the connect endpoint for a provider
pub fn connect_path(provider: Provider) -> String {
    format!("/integrations/{}/connect", provider.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    // Stubbed calls short-circuit before any request is built, so their
    // futures resolve on the first poll and need no executor.
    fn poll_once<F: Future>(future: F) -> Option<F::Output> {
        const VTABLE: RawWakerVTable =
            RawWakerVTable::new(|_| RAW, |_| {}, |_| {}, |_| {});
        const RAW: RawWaker = RawWaker::new(std::ptr::null(), &VTABLE);
        let waker = unsafe { Waker::from_raw(RAW) };
        let mut cx = Context::from_waker(&waker);

        let mut future = std::pin::pin!(future);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => Some(output),
            Poll::Pending => None,
        }
    }

    #[test]
    fn stub_resolves_default_success_without_network() {
        let client = ApiClient::stub();

        let profile = poll_once(client.fetch_profile())
            .expect("stub call did not resolve synchronously");
        assert_eq!(profile.unwrap(), Profile::default());

        let saved = poll_once(client.update_business_info("u-1", &BusinessInfoPatch::default()))
            .expect("stub call did not resolve synchronously");
        assert_eq!(saved, Ok(()));
    }

    #[test]
    fn paths_are_scoped_to_the_resource() {
        assert_eq!(business_info_path("u-42"), "/business_info/u-42");
        assert_eq!(connect_path(Provider::Mail), "/integrations/mail/connect");
        assert_eq!(
            connect_path(Provider::Messaging),
            "/integrations/messaging/connect"
        );
    }

    #[test]
    fn patch_serializes_only_the_saved_slice() {
        let patch = BusinessInfoPatch {
            services: Some(vec![Service {
                name: "Haircut".to_string(),
                duration: "30 min".to_string(),
                price: 55.0,
                currency: "USD".to_string(),
            }]),
            ..Default::default()
        };
        let v = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "services": [
                    { "name": "Haircut", "duration": "30 min", "price": 55.0, "currency": "USD" }
                ]
            })
        );
    }
}
