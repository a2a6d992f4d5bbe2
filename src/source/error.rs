use reqwest::StatusCode;
use snafu::Snafu;
use url::Url;

pub type Result<T, E = FetchError> = ::std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum FetchError {
    #[snafu(display("could not build the HTTP client"))]
    BuildClient { source: reqwest::Error },

    #[snafu(display("request to `{endpoint}` failed"))]
    Request {
        endpoint: Url,
        source: reqwest::Error,
    },

    #[snafu(display("`{endpoint}` answered {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()))]
    Status {
        endpoint: Url,
        status: StatusCode,
        message: Option<String>,
    },

    #[snafu(display("malformed response from `{endpoint}`"))]
    Decode {
        endpoint: Url,
        source: serde_json::Error,
    },
}
