use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::gql::{build_schema, AppSchema};
use api::AppState;
use async_graphql::{Request, Variables};
use infra::{IdGenerator, RestClient, RestConfig};

/// Predictable ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{n}")
    }
}

/// Schema wired to a mock REST backend.
pub fn test_schema(server: &mockito::ServerGuard) -> AppSchema {
    test_schema_with_config(RestConfig::with_base_url(server.url()))
}

#[allow(dead_code)]
pub fn test_schema_with_config(config: RestConfig) -> AppSchema {
    let rest = RestClient::new(&config).expect("Failed to create REST client");
    build_schema(AppState::with_parts(rest, Arc::new(SequentialIds::default())))
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Registers a JSON mock answering `method path` once.
#[allow(dead_code)]
pub async fn mock_json(
    server: &mut mockito::ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: serde_json::Value,
) -> mockito::Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await
}
