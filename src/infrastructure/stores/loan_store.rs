//! HTTP client for the lendings backend

use async_trait::async_trait;

use crate::domain::{LoanStore, StoreError};
use crate::infrastructure::SessionContext;
use crate::models::Loan;

pub struct HttpLoanStore {
    client: reqwest::Client,
    base_url: String,
    session: Option<SessionContext>,
}

impl HttpLoanStore {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Option<SessionContext>,
    ) -> Self {
        HttpLoanStore {
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
impl LoanStore for HttpLoanStore {
    async fn get(&self, loan_id: &str) -> Result<Option<Loan>, StoreError> {
        let url = format!("{}/lendings/{}", self.base_url, loan_id);
        let response = self.authorize(self.client.get(&url)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let loan = response
            .json::<Loan>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Some(loan))
    }

    async fn update(&self, loan: &Loan) -> Result<Loan, StoreError> {
        let url = format!("{}/lendings/{}", self.base_url, loan.id);
        let response = self
            .authorize(self.client.put(&url))
            .json(loan)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<Loan>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
