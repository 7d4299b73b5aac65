//! Object CRUD operations.

use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use cirro_client::RequestMethod;

use crate::error::Result;
use crate::query::QueryParams;
use crate::types::{CreateAck, ListResults, UpdateAck};

impl super::Cirro {
    /// Create an object in a collection.
    ///
    /// Returns the acknowledgment carrying the generated object id and the
    /// creation timestamp.
    #[instrument(skip(self, object))]
    pub async fn create<B: Serialize>(
        &self,
        class_name: &str,
        object: &B,
        params: QueryParams,
    ) -> Result<CreateAck> {
        let url = self.collection_url(class_name)?;
        let body = encode_body(object)?;
        self.submit(RequestMethod::Post, url, params, Some(body))
            .await
    }

    /// Retrieve a single object by id, decoded into the caller's type.
    ///
    /// Query parameters pass through opaquely, e.g. constrained field
    /// selection with `keys=score,playerName`.
    #[instrument(skip(self))]
    pub async fn retrieve<T>(
        &self,
        class_name: &str,
        object_id: &str,
        params: QueryParams,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.object_url(class_name, object_id)?;
        self.submit(RequestMethod::Get, url, params, None).await
    }

    /// Retrieve matching objects from a collection.
    ///
    /// The service wraps the records in a `results` field; filters and
    /// limits are passed through as opaque key/value pairs.
    #[instrument(skip(self))]
    pub async fn retrieve_many<T>(
        &self,
        class_name: &str,
        params: QueryParams,
    ) -> Result<ListResults<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.collection_url(class_name)?;
        self.submit(RequestMethod::Get, url, params, None).await
    }

    /// Update an object.
    ///
    /// Returns the acknowledgment carrying the update timestamp.
    #[instrument(skip(self, object))]
    pub async fn update<B: Serialize>(
        &self,
        class_name: &str,
        object_id: &str,
        object: &B,
        params: QueryParams,
    ) -> Result<UpdateAck> {
        let url = self.object_url(class_name, object_id)?;
        let body = encode_body(object)?;
        self.submit(RequestMethod::Put, url, params, Some(body))
            .await
    }

    /// Delete an object.
    ///
    /// Only success or failure is reported; the body of a success response
    /// is discarded.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        class_name: &str,
        object_id: &str,
        params: QueryParams,
    ) -> Result<()> {
        let url = self.object_url(class_name, object_id)?;
        self.submit_discard(RequestMethod::Delete, url, params, None)
            .await
    }
}

fn encode_body<B: Serialize>(object: &B) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(object)?))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::ErrorKind;
    use crate::query::QueryParams;
    use crate::{Cirro, ClientConfig, APPLICATION_ID_HEADER, API_KEY_HEADER};

    #[derive(Debug, Deserialize, PartialEq)]
    struct GameScore {
        score: i64,
        #[serde(rename = "playerName")]
        player_name: String,
    }

    fn client(server: &MockServer) -> Cirro {
        Cirro::with_config(
            "app-id",
            "rest-api-key",
            ClientConfig::builder().with_base_url(server.uri()).build(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_decodes_target() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/GameScore/Ed1nuqPvcm"))
            .and(header(APPLICATION_ID_HEADER, "app-id"))
            .and(header(API_KEY_HEADER, "rest-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "score": 1337,
                "playerName": "Sean"
            })))
            .mount(&mock_server)
            .await;

        let score: GameScore = client(&mock_server)
            .retrieve("GameScore", "Ed1nuqPvcm", QueryParams::new())
            .await
            .expect("retrieve should succeed");

        assert_eq!(
            score,
            GameScore {
                score: 1337,
                player_name: "Sean".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_retrieve_passes_query_params_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/GameScore/Ed1nuqPvcm"))
            .and(query_param("keys", "score"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"score": 1337, "playerName": ""})),
            )
            .mount(&mock_server)
            .await;

        let score: GameScore = client(&mock_server)
            .retrieve(
                "GameScore",
                "Ed1nuqPvcm",
                QueryParams::new().append("keys", "score"),
            )
            .await
            .expect("retrieve should succeed");

        assert_eq!(score.score, 1337);
    }

    #[tokio::test]
    async fn test_retrieve_not_found_carries_decoded_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/GameScore/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string(r#"{"code":101,"error":"object not found"}"#),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .retrieve::<GameScore>("GameScore", "missing", QueryParams::new())
            .await
            .unwrap_err();

        let api = err.api().expect("expected an API error");
        assert_eq!(api.status, 404);
        assert_eq!(api.decoded.code, 101);
        assert_eq!(api.decoded.error, "object not found");
        assert!(api.url.ends_with("/GameScore/missing"));
    }

    #[tokio::test]
    async fn test_malformed_error_body_is_preserved() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/GameScore/x"))
            .respond_with(ResponseTemplate::new(400).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .retrieve::<GameScore>("GameScore", "x", QueryParams::new())
            .await
            .unwrap_err();

        let api = err.api().expect("expected an API error");
        assert_eq!(api.status, 400);
        assert_eq!(api.body, "oops");
        assert_eq!(api.decoded.code, 0);
        assert_eq!(api.decoded.error, "");
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/GameScore"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"Name":"x"}"#))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "objectId": "abc123",
                "createdAt": "2024-01-01T00:00:00Z"
            })))
            .mount(&mock_server)
            .await;

        let ack = client(&mock_server)
            .create(
                "GameScore",
                &serde_json::json!({"Name": "x"}),
                QueryParams::new(),
            )
            .await
            .expect("create should succeed");

        assert_eq!(ack.object_id, "abc123");
        assert_eq!(ack.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_create_decode_failure_is_surfaced() {
        let mock_server = MockServer::start().await;

        // Success status, but the body is not a creation acknowledgment.
        Mock::given(method("POST"))
            .and(path("/GameScore"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .create(
                "GameScore",
                &serde_json::json!({"Name": "x"}),
                QueryParams::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/GameScore/Ed1nuqPvcm"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"score":2674}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "updatedAt": "2024-03-01T12:30:45Z"
            })))
            .mount(&mock_server)
            .await;

        let ack = client(&mock_server)
            .update(
                "GameScore",
                "Ed1nuqPvcm",
                &serde_json::json!({"score": 2674}),
                QueryParams::new(),
            )
            .await
            .expect("update should succeed");

        assert_eq!(ack.updated_at.to_rfc3339(), "2024-03-01T12:30:45+00:00");
    }

    #[tokio::test]
    async fn test_retrieve_many_unwraps_collection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/GameScore"))
            .and(query_param("limit", "2"))
            .and(query_param("count", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"score": 1337, "playerName": "Sean"},
                    {"score": 1338, "playerName": "ZeroCool"}
                ],
                "count": 219
            })))
            .mount(&mock_server)
            .await;

        let list = client(&mock_server)
            .retrieve_many::<GameScore>(
                "GameScore",
                QueryParams::new().append("limit", "2").append("count", "1"),
            )
            .await
            .expect("retrieve_many should succeed");

        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[1].player_name, "ZeroCool");
        assert_eq!(list.count, Some(219));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/GameScore/Ed1nuqPvcm"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        client(&mock_server)
            .delete("GameScore", "Ed1nuqPvcm", QueryParams::new())
            .await
            .expect("delete should succeed");
    }

    #[tokio::test]
    async fn test_delete_forbidden() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/GameScore/Ed1nuqPvcm"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"code":119,"error":"operation forbidden"}"#),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .delete("GameScore", "Ed1nuqPvcm", QueryParams::new())
            .await
            .unwrap_err();

        let api = err.api().expect("expected an API error");
        assert_eq!(api.status, 403);
        assert_eq!(api.decoded.code, 119);
    }

    #[tokio::test]
    async fn test_invalid_class_name_never_reaches_the_wire() {
        let mock_server = MockServer::start().await;

        // No mocks mounted: any request would return 404 and the expect(0)
        // below would fail on drop.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .retrieve::<GameScore>("Game/Score", "x", QueryParams::new())
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.to_string().contains("invalid class name"));
    }
}
