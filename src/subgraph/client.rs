//! HTTP client for the referrals subgraph.

use super::types::{GraphQlRequest, GraphQlResponse, ReferralsQueryData};
use crate::utils::config::DEFAULT_QUERY_TIMEOUT;
use crate::utils::error::RetrievalError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Executes referrals queries against an indexing service
///
/// The executor owns transport, timeout and retry policy. The report
/// assembler only sees the query text going in and typed records coming out.
pub trait QueryExecutor {
    fn execute(&self, query: &str) -> Result<ReferralsQueryData, RetrievalError>;
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for &E {
    fn execute(&self, query: &str) -> Result<ReferralsQueryData, RetrievalError> {
        (**self).execute(query)
    }
}

/// GraphQL-over-HTTP client for one subgraph endpoint
#[derive(Debug, Clone)]
pub struct SubgraphClient {
    client: Client,
    endpoint: String,
}

impl SubgraphClient {
    /// Create a new subgraph client
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RetrievalError> {
        Self::with_timeout(endpoint, DEFAULT_QUERY_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RetrievalError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QueryExecutor for SubgraphClient {
    fn execute(&self, query: &str) -> Result<ReferralsQueryData, RetrievalError> {
        info!("Querying subgraph: {}", self.endpoint);
        debug!("GraphQL query: {}", query);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query })
            .send()
            .map_err(RetrievalError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(RetrievalError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let body: GraphQlResponse<ReferralsQueryData> =
            response.json().map_err(RetrievalError::RequestFailed)?;

        into_query_data(body)
    }
}

/// Unwrap a GraphQL envelope, surfacing `errors` as a failure
fn into_query_data(
    body: GraphQlResponse<ReferralsQueryData>,
) -> Result<ReferralsQueryData, RetrievalError> {
    if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(RetrievalError::QueryFailed(messages.join("; ")));
    }

    body.data
        .ok_or_else(|| RetrievalError::InvalidResponse("Missing data field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::types::GraphQlError;

    #[test]
    fn test_into_query_data_errors() {
        let body = GraphQlResponse::<ReferralsQueryData> {
            data: Some(ReferralsQueryData::default()),
            errors: Some(vec![
                GraphQlError { message: "bad filter".to_string() },
                GraphQlError { message: "store error".to_string() },
            ]),
        };

        match into_query_data(body) {
            Err(RetrievalError::QueryFailed(message)) => {
                assert_eq!(message, "bad filter; store error")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_query_data_missing_data() {
        let body = GraphQlResponse::<ReferralsQueryData> { data: None, errors: Some(vec![]) };
        assert!(matches!(
            into_query_data(body),
            Err(RetrievalError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_new_client_keeps_endpoint() {
        let client = SubgraphClient::new("http://localhost:8000/subgraphs/name/referrals").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/subgraphs/name/referrals");
    }
}
