//! Sentiment service implementation over HTTP.
//!
//! Provides [`HttpSentimentService`] which implements [`SentimentService`]
//! with a single reusable `reqwest::Client`.

use crate::http::error::{HttpError, Result};
use crate::http::protocol::{
    PREDICT_PATH, PredictRequest, PredictResponse, TOKEN_PATH, TokenForm, TokenResponse,
    USER_INFO_PATH,
};
use crate::http::settings::ServiceSettings;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use sentiment_application::ports::sentiment_service::{SentimentService, ServiceError};
use sentiment_domain::{AccessToken, Credentials, PredictionResult, ReviewText, UserInfo};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Maximum number of body bytes echoed back in error messages
const MAX_ERROR_BODY: usize = 512;

/// REST adapter for the sentiment service
pub struct HttpSentimentService {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl HttpSentimentService {
    /// Create an adapter from connection settings
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let base_url = Self::parse_base_url(&settings.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("HttpSentimentService initialized for {}", base_url);

        Ok(Self {
            client,
            base_url,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// Create an adapter pointing at `base_url` with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ServiceSettings::new(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Parse the base URL so that endpoint paths are appended to it,
    /// whether or not it was written with a trailing slash.
    fn parse_base_url(raw: &str) -> Result<Url> {
        let invalid = |reason: String| HttpError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Connection(format!("invalid endpoint '{}': {}", path, e)))
    }

    fn authorized(&self, request: RequestBuilder, token: &AccessToken) -> RequestBuilder {
        request.header(AUTHORIZATION, token.bearer_header())
    }

    /// Send a request and decode a 200 body as `T`
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<T, ServiceError> {
        let response = request
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ServiceError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Connection(format!("failed to read response body: {}", e)))?;

        debug!("Response status {}", status.as_u16());

        if status != StatusCode::OK {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: sentiment_domain::truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SentimentService for HttpSentimentService {
    async fn exchange_token(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AccessToken, ServiceError> {
        let url = self.endpoint(TOKEN_PATH)?;
        debug!("POST {}", url);

        let form = TokenForm {
            username: credentials.username(),
            password: credentials.password(),
        };
        let response: TokenResponse = self.send_json(self.client.post(url).form(&form)).await?;

        if let Some(token_type) = &response.token_type
            && !token_type.eq_ignore_ascii_case("bearer")
        {
            debug!("Service issued token of type '{}'", token_type);
        }

        Ok(AccessToken::new(response.access_token))
    }

    async fn fetch_user_info(
        &self,
        token: &AccessToken,
    ) -> std::result::Result<UserInfo, ServiceError> {
        let url = self.endpoint(USER_INFO_PATH)?;
        debug!("GET {}", url);

        self.send_json(self.authorized(self.client.get(url), token))
            .await
    }

    async fn predict(
        &self,
        token: &AccessToken,
        review: &ReviewText,
    ) -> std::result::Result<PredictionResult, ServiceError> {
        let url = self.endpoint(PREDICT_PATH)?;
        debug!("POST {}", url);

        let body = PredictRequest {
            review: review.content(),
        };
        let response: PredictResponse = self
            .send_json(self.authorized(self.client.post(url).json(&body), token))
            .await?;

        Ok(response.into_result())
    }
}
