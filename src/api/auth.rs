//! Authentication endpoints: register, login, token refresh, and password
//! change. Tokens are explicit call-time context, never module state.

use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::signup::{SignupRecord, SubmissionError, Submitter};

use super::client::ApiClient;

/// Fallback for failures the caller cannot classify (malformed responses,
/// client-side setup errors).
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred.";

/// Access/refresh token pair issued by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn access(&self) -> AccessToken {
        AccessToken::new(self.access_token.clone())
    }
}

/// Bearer token passed explicitly into authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "userName")]
    user_name: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    data: TokenPair,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

/// Wrapper over the `/auth/*` endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &crate::config::ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    /// Registers a new user with the complete signup record. The date of
    /// birth is normalized to an ISO-8601 instant on the wire.
    pub fn register(&self, record: &SignupRecord) -> Result<(), ApiError> {
        let mut body = record.clone();
        if let Some(iso) = record.date_of_birth_iso() {
            body.date_of_birth = iso;
        }
        let _: serde_json::Value = self.client.post("/auth/register", &body)?;
        Ok(())
    }

    pub fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let request = LoginRequest {
            user_name: username,
            password,
        };
        let response: TokenResponse = self.client.post("/auth/login", &request)?;
        Ok(response.data)
    }

    /// Exchanges the stored refresh token for a fresh pair. Callers replace
    /// the persisted pair with the returned one; there is no expiry metadata.
    pub fn refresh(&self, tokens: &TokenPair) -> Result<TokenPair, ApiError> {
        let request = RefreshRequest {
            refresh_token: &tokens.refresh_token,
        };
        let response: TokenResponse = self.client.post("/auth/refresh_token", &request)?;
        Ok(response.data)
    }

    pub fn change_password(
        &self,
        token: &AccessToken,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let request = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let _: serde_json::Value = self.client.request(
            reqwest::Method::POST,
            "/auth/change_password",
            Some(token),
            Some(&request),
        )?;
        Ok(())
    }
}

impl Submitter for AuthApi {
    fn submit(&self, record: &SignupRecord) -> Result<(), SubmissionError> {
        self.register(record).map_err(SubmissionError::from)
    }
}

impl From<ApiError> for SubmissionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Server { status, message } => SubmissionError::new(Some(status), message),
            ApiError::Transport(err) => {
                SubmissionError::new(err.status().map(|code| code.as_u16()), None)
            }
            ApiError::Unexpected(_) | ApiError::BaseUrl(_) => {
                SubmissionError::new(None, Some(UNEXPECTED_FAILURE.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_wire_key_names() {
        let request = LoginRequest {
            user_name: "tester",
            password: "12345678",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["userName"], "tester");
        assert_eq!(value["password"], "12345678");
    }

    #[test]
    fn token_response_unwraps_data_envelope() {
        let json = r#"{"data":{"access_token":"a","refresh_token":"r"}}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.access_token, "a");
        assert_eq!(response.data.refresh_token, "r");
    }

    #[test]
    fn server_errors_map_to_structured_submission_failures() {
        let err = ApiError::Server {
            status: 400,
            message: Some("email taken".into()),
        };
        let submission: SubmissionError = err.into();
        assert_eq!(submission.status, Some(400));
        assert_eq!(submission.message_or_fallback(), "email taken");

        let bare = ApiError::Server {
            status: 502,
            message: None,
        };
        let submission: SubmissionError = bare.into();
        assert_eq!(
            submission.message_or_fallback(),
            crate::signup::GENERIC_FAILURE
        );
    }

    #[test]
    fn unexpected_errors_use_the_generic_unexpected_message() {
        let err = ApiError::Unexpected("not json".into());
        let submission: SubmissionError = err.into();
        assert_eq!(submission.message_or_fallback(), UNEXPECTED_FAILURE);
    }
}
