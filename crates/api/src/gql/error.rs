use infra::RestError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<RestError>` — logs the backend failure, shows the status line to clients
///   - `GqlError::missing(..)` — a backend body lacking a field the schema declares non-null
#[derive(Debug)]
pub enum GqlError {
    Rest(RestError),
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },
}

impl GqlError {
    pub fn missing(type_name: &'static str, field: &'static str) -> Self {
        GqlError::MissingField { type_name, field }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Rest(e @ RestError::Status { .. }) => write!(f, "{e}"),
            GqlError::Rest(RestError::Decode(e)) => write!(f, "Invalid backend response: {e}"),
            GqlError::Rest(e) => {
                // Keep transport detail in the logs; clients get a generic message
                tracing::error!("REST backend error: {e}");
                write!(f, "Backend request failed")
            }
            GqlError::MissingField { type_name, field } => {
                write!(f, "Cannot return null for non-nullable field {type_name}.{field}")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<RestError> for GqlError {
    fn from(e: RestError) -> Self {
        GqlError::Rest(e)
    }
}
