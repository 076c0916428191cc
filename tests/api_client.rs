// SPDX-License-Identifier: MPL-2.0
//! Client tests against an in-process mock appliance.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use dns_console::api::{execute, Client};
use dns_console::config::ServerConfig;
use dns_console::error::Error;
use dns_console::filtering::{FilterPatch, Intent, Outcome};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Requests received by the mock, as (path, body).
type Log = Arc<Mutex<Vec<(String, String)>>>;

fn record(log: &Log, path: &str, body: String) {
    log.lock().unwrap().push((path.to_string(), body));
}

async fn status(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    // "admin:secret"
    let expected = "Basic YWRtaW46c2VjcmV0";
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "enabled": true,
        "interval": 24,
        "filters": [
            {
                "url": "https://adguardteam.github.io/filter.txt",
                "name": "AdGuard DNS filter",
                "enabled": true,
                "rules_count": 48211,
                "last_updated": "2024-03-02T14:05:09Z"
            },
            {
                "url": "https://example.org/hosts",
                "name": "Never downloaded",
                "enabled": false,
                "rules_count": 0,
                "last_updated": "0001-01-01T00:00:00Z"
            }
        ],
        "user_rules": ["||ads.example^", "@@||good.example^"]
    })))
}

async fn spawn() -> (String, Log) {
    let log: Log = Arc::default();
    let app = Router::new()
        .route("/control/filtering/status", get(status))
        .route(
            "/control/filtering/add_url",
            post(|State(log): State<Log>, body: String| async move {
                record(&log, "add_url", body);
                StatusCode::OK
            }),
        )
        .route(
            "/control/filtering/set_url",
            post(|State(log): State<Log>, body: String| async move {
                record(&log, "set_url", body);
                StatusCode::OK
            }),
        )
        .route(
            "/control/filtering/remove_url",
            post(|State(log): State<Log>, body: String| async move {
                record(&log, "remove_url", body);
                (StatusCode::BAD_REQUEST, "filter not found")
            }),
        )
        .route(
            "/control/filtering/refresh",
            post(|| async { Json(json!({ "updated": 2 })) }),
        )
        .route(
            "/control/filtering/set_rules",
            post(
                |State(log): State<Log>, headers: HeaderMap, body: String| async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    record(&log, "set_rules", format!("{content_type}|{body}"));
                    StatusCode::OK
                },
            ),
        )
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), log)
}

fn client(base: &str) -> Client {
    Client::new(&ServerConfig {
        url: base.to_string(),
        username: Some("admin".to_string()),
        password: Some("secret".to_string()),
        timeout_secs: Some(5),
    })
    .unwrap()
}

fn body_json(log: &Log, path: &str) -> Value {
    let log = log.lock().unwrap();
    let (_, body) = log.iter().find(|(p, _)| p == path).unwrap();
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn status_is_decoded_into_filter_rows() {
    let (base, _) = spawn().await;
    let status = client(&base).status().await.unwrap();

    assert!(status.enabled);
    assert_eq!(status.interval, 24);
    assert_eq!(status.filters.len(), 2);
    assert_eq!(status.filters[0].name, "AdGuard DNS filter");
    assert_eq!(status.filters[0].rules_count, 48211);
    assert!(status.filters[0].last_updated.is_some());
    assert!(status.filters[1].last_updated.is_none());
    assert_eq!(status.user_rules, "||ads.example^\n@@||good.example^");
}

#[tokio::test]
async fn missing_credentials_are_reported_as_unauthorized() {
    let (base, _) = spawn().await;
    let anonymous = Client::new(&ServerConfig {
        url: base,
        ..ServerConfig::default()
    })
    .unwrap();

    let err = anonymous.status().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 401, .. }));
    assert_eq!(err.i18n_key(), "error-unauthorized");
}

#[tokio::test]
async fn toggle_sends_set_url_with_full_data() {
    let (base, log) = spawn().await;
    let outcome = execute(
        client(&base),
        Intent::ToggleFilter {
            url: "https://example.org/hosts".into(),
            patch: FilterPatch {
                name: "Hosts".into(),
                url: "https://example.org/hosts".into(),
                enabled: true,
            },
        },
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::FilterToggled {
            url: "https://example.org/hosts".into(),
            result: Ok(()),
        }
    );
    assert_eq!(
        body_json(&log, "set_url"),
        json!({
            "url": "https://example.org/hosts",
            "data": { "name": "Hosts", "url": "https://example.org/hosts", "enabled": true }
        })
    );
}

#[tokio::test]
async fn add_sends_name_and_url() {
    let (base, log) = spawn().await;
    let outcome = execute(
        client(&base),
        Intent::AddFilter {
            url: "https://c.example/list.txt".into(),
            name: "C".into(),
        },
    )
    .await;

    assert_eq!(outcome, Outcome::FilterAdded(Ok(())));
    assert_eq!(
        body_json(&log, "add_url"),
        json!({ "name": "C", "url": "https://c.example/list.txt" })
    );
}

#[tokio::test]
async fn rejected_remove_carries_status_and_body() {
    let (base, log) = spawn().await;
    let outcome = execute(
        client(&base),
        Intent::RemoveFilter {
            url: "https://gone.example".into(),
        },
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::FilterRemoved {
            url: "https://gone.example".into(),
            result: Err(Error::Api {
                status: 400,
                message: "filter not found".into(),
            }),
        }
    );
    assert_eq!(
        body_json(&log, "remove_url"),
        json!({ "url": "https://gone.example" })
    );
}

#[tokio::test]
async fn refresh_returns_updated_count() {
    let (base, _) = spawn().await;
    let outcome = execute(client(&base), Intent::RefreshFilters).await;
    assert_eq!(outcome, Outcome::FiltersRefreshed(Ok(2)));
}

#[tokio::test]
async fn rules_are_sent_as_plain_text() {
    let (base, log) = spawn().await;
    let outcome = execute(
        client(&base),
        Intent::SetRules("||ads.example^\n! comment".into()),
    )
    .await;

    assert_eq!(outcome, Outcome::RulesSaved(Ok(())));
    let log = log.lock().unwrap();
    let (_, body) = log.iter().find(|(p, _)| p == "set_rules").unwrap();
    assert_eq!(body, "text/plain|||ads.example^\n! comment");
}

#[tokio::test]
async fn unreachable_appliance_is_a_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).status().await.unwrap_err();
    assert_eq!(err.i18n_key(), "error-connection");
}
