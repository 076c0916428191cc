// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure (connection refused, timeout, TLS).
    Http(String),
    /// The appliance answered with a non-success status.
    Api { status: u16, message: String },
    /// The appliance answered with a body we could not decode.
    Decode(String),
    /// A filter list snapshot contained the same URL twice.
    DuplicateFilterUrl(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error in a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Http(_) => "error-connection",
            Error::Api { status, .. } if *status == 401 || *status == 403 => "error-unauthorized",
            Error::Api { .. } => "error-server",
            Error::Decode(_) => "error-decode",
            Error::DuplicateFilterUrl(_) => "error-duplicate-filter",
        }
    }

    /// Short human-readable detail passed as `$detail` to the localized message.
    pub fn detail(&self) -> String {
        match self {
            Error::Io(msg) | Error::Config(msg) | Error::Http(msg) | Error::Decode(msg) => {
                msg.clone()
            }
            Error::Api { status, message } if message.is_empty() => status.to_string(),
            Error::Api { status, message } => format!("{}: {}", status, message.trim()),
            Error::DuplicateFilterUrl(url) => url.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api { status, message } => write!(f, "API Error ({}): {}", status, message),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::DuplicateFilterUrl(url) => write!(f, "Duplicate filter URL: {}", url),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
