//! HTTP client for the fines backend

use async_trait::async_trait;

use crate::domain::{FineStore, StoreError};
use crate::infrastructure::SessionContext;
use crate::models::Fine;

pub struct HttpFineStore {
    client: reqwest::Client,
    base_url: String,
    session: Option<SessionContext>,
}

impl HttpFineStore {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Option<SessionContext>,
    ) -> Self {
        HttpFineStore {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session {
            Some(session) => request.bearer_auth(session.token()),
            None => request,
        }
    }
}

#[async_trait]
impl FineStore for HttpFineStore {
    async fn create(&self, fine: &Fine) -> Result<Fine, StoreError> {
        let url = format!("{}/fines", self.base_url);
        let response = self
            .authorize(self.client.post(&url))
            .json(fine)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<Fine>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
