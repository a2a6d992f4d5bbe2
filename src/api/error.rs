use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snafu::Snafu;

use crate::model::ParseSortKeyError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("cannot sort the table: {source}"))]
    UnknownSortKey { source: ParseSortKeyError },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownSortKey { .. } => StatusCode::NOT_FOUND,
        };

        tracing::debug!(error = %self, %status, "rejecting request");
        (status, self.to_string()).into_response()
    }
}
