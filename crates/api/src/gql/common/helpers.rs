use crate::gql::error::GqlError;

/// Unwraps a backend field the schema declares non-null.
pub fn required<T>(
    value: Option<T>,
    type_name: &'static str,
    field: &'static str,
) -> Result<T, GqlError> {
    value.ok_or_else(|| GqlError::missing(type_name, field))
}
