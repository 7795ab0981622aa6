//! The response envelope shared by every backend API endpoint.
//!
//! Every call to the backend returns the same discriminated wrapper: a
//! `success` flag, a `data` payload inhabited only on success, and an
//! `errors` list inhabited only on failure. [`ApiResponse`] models the two
//! shapes as a sum type that cannot be constructed in an inconsistent state:
//! the only ways to obtain a value are the [`ApiResponse::success`] and
//! [`ApiResponse::failure`] factories and the validating `Deserialize` impl,
//! all of which enforce the invariant.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One reason a backend request failed.
///
/// A failure envelope carries at least one of these; the first entry is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_code: i32,
    pub error_message: String,
    pub error_cause: String,
}

impl ApiError {
    pub fn new(error_code: i32, error_message: impl Into<String>, error_cause: impl Into<String>) -> Self {
        Self {
            error_code,
            error_message: error_message.into(),
            error_cause: error_cause.into(),
        }
    }
}

/// A malformed envelope, or a misuse of one.
///
/// Observing one of the wire variants means the backend broke the response
/// contract; such a reply is rejected outright rather than coerced into
/// either variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("success envelope carries {count} error(s)")]
    SuccessWithErrors { count: usize },

    #[error("success envelope has no data")]
    SuccessWithoutData,

    #[error("failure envelope has populated data")]
    FailureWithData,

    #[error("failure envelope has no errors")]
    FailureWithoutErrors,

    #[error("data requested from a failure envelope")]
    DataFromFailure,
}

/// Discriminated success/failure result of one backend call.
///
/// Invariant, upheld by construction: the success variant holds exactly a
/// payload and the failure variant holds a non-empty error list. The wire
/// form is `{"success": bool, "data": ..., "errors": [...]}`.
///
/// Consumers either pattern-match via [`into_result`](Self::into_result) or
/// probe with [`is_success`](Self::is_success) before extracting data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    repr: Repr<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr<T> {
    Success(T),
    Failure(Vec<ApiError>),
}

impl<T> ApiResponse<T> {
    /// Builds the success variant.
    pub fn success(data: T) -> Self {
        Self {
            repr: Repr::Success(data),
        }
    }

    /// Builds the failure variant.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::FailureWithoutErrors`] when `errors` is
    /// empty; a failure without a reason is not a representable value.
    pub fn failure(errors: Vec<ApiError>) -> Result<Self, ContractViolation> {
        if errors.is_empty() {
            return Err(ContractViolation::FailureWithoutErrors);
        }
        Ok(Self {
            repr: Repr::Failure(errors),
        })
    }

    /// True iff the success variant is inhabited.
    pub fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// The payload, if this is the success variant.
    pub fn data(&self) -> Option<&T> {
        match &self.repr {
            Repr::Success(data) => Some(data),
            Repr::Failure(_) => None,
        }
    }

    /// The error list: empty for success, non-empty for failure.
    pub fn errors(&self) -> &[ApiError] {
        match &self.repr {
            Repr::Success(_) => &[],
            Repr::Failure(errors) => errors,
        }
    }

    /// The first error's message, if this is the failure variant.
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors().first().map(|e| e.error_message.as_str())
    }

    /// Extracts the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::DataFromFailure`] on the failure
    /// variant. Callers that pattern-match first never hit this.
    pub fn into_data(self) -> Result<T, ContractViolation> {
        match self.repr {
            Repr::Success(data) => Ok(data),
            Repr::Failure(_) => Err(ContractViolation::DataFromFailure),
        }
    }

    /// Converts into a plain `Result` for exhaustive matching.
    ///
    /// The error list is non-empty by construction.
    pub fn into_result(self) -> Result<T, Vec<ApiError>> {
        match self.repr {
            Repr::Success(data) => Ok(data),
            Repr::Failure(errors) => Err(errors),
        }
    }
}

/// Raw wire shape, validated before becoming an [`ApiResponse`].
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct WireEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ApiError>,
}

impl<T> TryFrom<WireEnvelope<T>> for ApiResponse<T> {
    type Error = ContractViolation;

    fn try_from(wire: WireEnvelope<T>) -> Result<Self, Self::Error> {
        match (wire.success, wire.data, wire.errors) {
            (true, Some(data), errors) if errors.is_empty() => Ok(ApiResponse::success(data)),
            (true, Some(_), errors) => Err(ContractViolation::SuccessWithErrors {
                count: errors.len(),
            }),
            (true, None, _) => Err(ContractViolation::SuccessWithoutData),
            (false, Some(_), _) => Err(ContractViolation::FailureWithData),
            (false, None, errors) => ApiResponse::failure(errors),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireEnvelope::<T>::deserialize(deserializer)?;
        ApiResponse::try_from(wire).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut envelope = serializer.serialize_struct("ApiResponse", 3)?;
        match &self.repr {
            Repr::Success(data) => {
                envelope.serialize_field("success", &true)?;
                envelope.serialize_field("data", data)?;
                envelope.serialize_field("errors", &[] as &[ApiError])?;
            }
            Repr::Failure(errors) => {
                envelope.serialize_field("success", &false)?;
                envelope.serialize_field("data", &Option::<T>::None)?;
                envelope.serialize_field("errors", errors)?;
            }
        }
        envelope.end()
    }
}
