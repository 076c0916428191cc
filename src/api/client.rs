// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the appliance control API.

use super::wire::{
    AddUrlRequest, RefreshResponse, RemoveUrlRequest, SetUrlRequest, StatusResponse,
};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::filtering::{FilterPatch, FilteringStatus, Intent, Outcome};
use reqwest::{RequestBuilder, Response, Url};

const STATUS_PATH: &str = "control/filtering/status";
const ADD_URL_PATH: &str = "control/filtering/add_url";
const REMOVE_URL_PATH: &str = "control/filtering/remove_url";
const SET_URL_PATH: &str = "control/filtering/set_url";
const REFRESH_PATH: &str = "control/filtering/refresh";
const SET_RULES_PATH: &str = "control/filtering/set_rules";

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: Option<String>,
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
    credentials: Option<Credentials>,
}

impl Client {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let mut raw = server.url.trim().to_string();
        // Relative joins would drop the last path segment otherwise.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid server url '{}': {}", server.url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(server.timeout())
            .user_agent(concat!("DnsConsole/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let credentials = server.username.as_ref().map(|username| Credentials {
            username: username.clone(),
            password: server.password.clone(),
        });

        Ok(Self {
            http,
            base,
            credentials,
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(c) => request.basic_auth(&c.username, c.password.as_ref()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn status(&self) -> Result<FilteringStatus> {
        let request = self.http.get(self.endpoint(STATUS_PATH)?);
        let body: StatusResponse = self.send(request).await?.json().await?;
        Ok(body.into())
    }

    pub async fn add_url(&self, url: &str, name: &str) -> Result<()> {
        let request = self
            .http
            .post(self.endpoint(ADD_URL_PATH)?)
            .json(&AddUrlRequest { name, url });
        self.send(request).await.map(drop)
    }

    pub async fn remove_url(&self, url: &str) -> Result<()> {
        let request = self
            .http
            .post(self.endpoint(REMOVE_URL_PATH)?)
            .json(&RemoveUrlRequest { url });
        self.send(request).await.map(drop)
    }

    pub async fn set_url(&self, url: &str, patch: &FilterPatch) -> Result<()> {
        let request = self
            .http
            .post(self.endpoint(SET_URL_PATH)?)
            .json(&SetUrlRequest::new(url, patch));
        self.send(request).await.map(drop)
    }

    /// Asks the appliance to re-download every list; returns how many changed.
    pub async fn refresh(&self) -> Result<u32> {
        let request = self.http.post(self.endpoint(REFRESH_PATH)?);
        let response = self.send(request).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(0);
        }
        let body: RefreshResponse = serde_json::from_str(&text)?;
        Ok(body.updated)
    }

    pub async fn set_rules(&self, rules: &str) -> Result<()> {
        let request = self
            .http
            .post(self.endpoint(SET_RULES_PATH)?)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(rules.to_string());
        self.send(request).await.map(drop)
    }
}

/// Runs `intent` against the appliance and wraps the answer as an [`Outcome`].
pub async fn execute(client: Client, intent: Intent) -> Outcome {
    let label = intent.label();
    let outcome = match intent {
        Intent::FetchStatus => Outcome::StatusFetched(client.status().await),
        Intent::ToggleFilter { url, patch } => {
            let result = client.set_url(&url, &patch).await;
            Outcome::FilterToggled { url, result }
        }
        Intent::AddFilter { url, name } => Outcome::FilterAdded(client.add_url(&url, &name).await),
        Intent::EditFilter { url, patch } => {
            let result = client.set_url(&url, &patch).await;
            Outcome::FilterEdited { url, result }
        }
        Intent::RemoveFilter { url } => {
            let result = client.remove_url(&url).await;
            Outcome::FilterRemoved { url, result }
        }
        Intent::RefreshFilters => Outcome::FiltersRefreshed(client.refresh().await),
        Intent::SetRules(rules) => Outcome::RulesSaved(client.set_rules(&rules).await),
    };
    tracing::debug!(intent = label, "appliance request finished");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(url: &str) -> ServerConfig {
        ServerConfig {
            url: url.to_string(),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = Client::new(&server("http://10.0.0.53:3000/adguard")).unwrap();
        assert_eq!(client.base_url().as_str(), "http://10.0.0.53:3000/adguard/");
        assert_eq!(
            client.endpoint(STATUS_PATH).unwrap().as_str(),
            "http://10.0.0.53:3000/adguard/control/filtering/status"
        );
    }

    #[test]
    fn invalid_server_url_is_config_error() {
        let err = Client::new(&server("not a url")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn credentials_require_username() {
        let client = Client::new(&ServerConfig {
            password: Some("secret".into()),
            ..server("http://127.0.0.1:3000")
        })
        .unwrap();
        assert!(client.credentials.is_none());
    }
}
