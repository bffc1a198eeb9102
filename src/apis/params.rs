//! Helpers shared by the operation modules.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::apis::ApiError;
use crate::clients::HttpResponse;

/// Percent-encodes a value for use as a single path segment.
pub fn path_param(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// Joins values with commas, the `csv` collection format.
pub fn csv<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Fails with [`ApiError::MissingRequiredParameter`] if `value` is blank.
pub fn require_non_blank(
    value: &str,
    parameter: &'static str,
    operation: &'static str,
) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingRequiredParameter {
            parameter,
            operation,
        });
    }
    Ok(())
}

/// Fails with [`ApiError::MissingRequiredParameter`] if `values` is empty.
pub fn require_non_empty<T>(
    values: &[T],
    parameter: &'static str,
    operation: &'static str,
) -> Result<(), ApiError> {
    if values.is_empty() {
        return Err(ApiError::MissingRequiredParameter {
            parameter,
            operation,
        });
    }
    Ok(())
}

/// Encodes a request model as a JSON value.
pub fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(ApiError::Serialization)
}

/// Decodes a response body into the operation's return type.
pub fn decode<T: DeserializeOwned>(
    response: HttpResponse,
    operation: &'static str,
) -> Result<T, ApiError> {
    serde_json::from_value(response.body)
        .map_err(|source| ApiError::Deserialization { operation, source })
}
