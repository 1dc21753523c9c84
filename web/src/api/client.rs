use std::sync::OnceLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::api::envelope::{EnvelopeError, GraphqlEnvelope};
use crate::config::AppConfig;

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

pub fn http_client() -> &'static reqwest::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent(concat!("platter-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("platform api request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// Posts one GraphQL operation against `{api_base_url}/graphql` and unwraps
/// the envelope into the caller's data type.
pub async fn graphql<V, T>(query: &str, variables: V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    graphql_at(&AppConfig::from_env().api_base_url, query, variables).await
}

pub async fn graphql_at<V, T>(base_url: &str, query: &str, variables: V) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let url = format!("{}/graphql", base_url.trim_end_matches('/'));
    let envelope: GraphqlEnvelope<T> = http_client()
        .post(&url)
        .json(&json!({ "query": query, "variables": variables }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(envelope.into_data()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use shared_types::ZoneCheck;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct ZoneData {
        #[serde(rename = "zoneCheck")]
        zone_check: ZoneCheck,
    }

    #[tokio::test]
    async fn posts_query_and_unwraps_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(
                serde_json::json!({ "variables": { "latitude": 52.5, "longitude": 13.4 } }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "zoneCheck": { "selectedZone": "zone-1", "fallbackZone": null } }
            })))
            .mount(&server)
            .await;

        let data: ZoneData = graphql_at(
            &server.uri(),
            "query { zoneCheck }",
            serde_json::json!({ "latitude": 52.5, "longitude": 13.4 }),
        )
        .await
        .unwrap();
        assert_eq!(data.zone_check.selected_zone.as_deref(), Some("zone-1"));
    }

    #[tokio::test]
    async fn surfaces_graphql_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{ "message": "zone service unavailable" }]
            })))
            .mount(&server)
            .await;

        let result: Result<ZoneData, ApiError> =
            graphql_at(&server.uri(), "query { zoneCheck }", serde_json::json!({})).await;
        assert!(matches!(result, Err(ApiError::Envelope(_))));
    }

    #[tokio::test]
    async fn surfaces_http_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result: Result<ZoneData, ApiError> =
            graphql_at(&server.uri(), "query { zoneCheck }", serde_json::json!({})).await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }
}
