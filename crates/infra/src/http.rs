//! Thin JSON client for the REST backend.
//!
//! Every call is a single request with no retry; any transport failure or
//! non-2xx status is returned as a [`RestError`].

use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::{ResourcePaths, RestConfig};
use crate::error::{RestError, Result};

#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    http: reqwest::Client,
    base_url: Url,
    paths: ResourcePaths,
}

impl RestClient {
    pub fn new(config: &RestConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self::with_http_client(builder.build()?, config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &RestConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        // Drop any query/fragment so joined paths stay clean.
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self {
            inner: Arc::new(RestClientInner {
                http,
                base_url,
                paths: config.paths.clone(),
            }),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.inner.paths
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send::<(), T>(Method::GET, segments, None).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, segments, Some(body)).await
    }

    pub async fn patch<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, segments, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send::<(), T>(Method::DELETE, segments, None).await
    }

    /// Appends percent-encoded path segments to the base url.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(segments)?;
        let path = url.path().to_string();
        tracing::debug!(%method, %path, "rest request");

        let mut request = self.inner.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %path, "rest backend unreachable: {e}");
            RestError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %path, status = status.as_u16(), "rest backend rejected request");
            return Err(RestError::Status {
                status,
                method,
                path,
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            // 204s and empty bodies decode as JSON null
            return Ok(serde_json::from_slice(b"null")?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::{json, Value};

    fn client_for(server: &mockito::ServerGuard) -> RestClient {
        RestClient::new(&RestConfig::with_base_url(server.url())).unwrap()
    }

    #[tokio::test]
    async fn get_decodes_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"7","username":"ana"}"#)
            .expect(1)
            .create_async()
            .await;

        let body: Value = client_for(&server).get(&["users", "7"]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, json!({"id": "7", "username": "ana"}));
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/users")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"id": "1", "username": "ana"})))
            .with_status(201)
            .with_body(r#"{"id":"1","username":"ana"}"#)
            .create_async()
            .await;

        let body: Value = client_for(&server)
            .post(&["users"], &json!({"id": "1", "username": "ana"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["id"], "1");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/users/404")
            .with_status(404)
            .with_body("{}")
            .create_async()
            .await;

        let err = client_for(&server)
            .delete::<Value>(&["users", "404"])
            .await
            .unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[tokio::test]
    async fn empty_body_decodes_as_null() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/users/1")
            .with_status(204)
            .create_async()
            .await;

        let body: Option<Value> = client_for(&server).delete(&["users", "1"]).await.unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn mismatched_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/numbers/1")
            .with_status(200)
            .with_body(r#"{"value":"not a number"}"#)
            .create_async()
            .await;

        #[derive(Debug, serde::Deserialize)]
        struct Number {
            #[allow(dead_code)]
            value: i32,
        }

        let err = client_for(&server)
            .get::<Number>(&["numbers", "1"])
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::Decode(_)));
    }

    #[test]
    fn url_segments_are_percent_encoded() {
        let client = RestClient::new(&RestConfig::with_base_url("http://localhost:3000/api/")).unwrap();
        let url = client.url_for(&["users", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/users/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(RestClient::new(&RestConfig::with_base_url("not a url")).is_err());
        assert!(RestClient::new(&RestConfig::with_base_url("mailto:ops@example.com")).is_err());
    }
}
