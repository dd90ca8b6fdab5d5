use strum_macros::Display;
use url::Url;
use utils::redacted;

const SECRET_PARAMS: &[&str] = &["key"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    Transport,
    Status,
    Decode,
    Url,
}

/// Failure of a single upstream call.
///
/// Surf errors are not `std::error::Error`, so their message is kept instead
/// of the error itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn transport(url: &Url, error: surf::Error) -> Self {
        Error::Transport {
            url: redacted(url, SECRET_PARAMS),
            message: error.to_string(),
        }
    }

    pub(crate) fn status(url: &Url, status: surf::StatusCode) -> Self {
        Error::Status {
            url: redacted(url, SECRET_PARAMS),
            status: status.into(),
        }
    }

    pub(crate) fn decode(url: &Url, error: surf::Error) -> Self {
        Error::Decode {
            url: redacted(url, SECRET_PARAMS),
            message: error.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Status { .. } => ErrorKind::Status,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Url(_) => ErrorKind::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_hides_api_key() {
        let url = Url::parse("https://api.example.com/schema?key=secret&appid=7").unwrap();
        let error = Error::status(&url, surf::StatusCode::Forbidden);

        assert_eq!(error.kind(), ErrorKind::Status);
        let message = error.to_string();
        assert!(!message.contains("secret"));
        assert!(message.contains("403"));
    }
}
