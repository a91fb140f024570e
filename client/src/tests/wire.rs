//! Wire-level tests against a loopback server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::config::Config;
use crate::raw;
use crate::store::LocalStore;
use crate::{Context, Error};

use super::token_with_claims;

fn serve(router: Router) -> SocketAddr {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(router.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

fn context(addr: SocketAddr, store: Arc<LocalStore>) -> Context {
    let config = Config {
        base_url: format!("http://{addr}"),
        ..Config::default()
    };
    Context::new(&config, store).unwrap()
}

#[tokio::test]
async fn bearer_token_is_attached_when_stored() {
    let seen = Arc::new(Mutex::new(None::<String>));
    let router = Router::new().route(
        "/materials",
        get({
            let seen = seen.clone();
            move |headers: HeaderMap| async move {
                *seen.lock() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(json!([]))
            }
        }),
    );
    let addr = serve(router);

    let store = Arc::new(LocalStore::in_memory());
    let cx = context(addr, store.clone());

    raw::call(raw::material::All, &cx).await.unwrap();
    assert_eq!(*seen.lock(), None);

    let token = token_with_claims(json!({"sub": "alice"}));
    store.set_token(token.clone()).unwrap();
    raw::call(raw::material::All, &cx).await.unwrap();
    assert_eq!(*seen.lock(), Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn vote_sends_the_expected_body() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let router = Router::new().route(
        "/forum/posts/7/vote",
        post({
            let seen = seen.clone();
            move |Json(body): Json<Value>| async move {
                *seen.lock() = Some(body);
                StatusCode::OK
            }
        }),
    );
    let addr = serve(router);
    let cx = context(addr, Arc::new(LocalStore::in_memory()));

    raw::call(
        raw::forum::Vote {
            post: 7,
            kind: edubridge_shared::forum::handle::VoteKind::Upvote,
        },
        &cx,
    )
    .await
    .unwrap();

    assert_eq!(*seen.lock(), Some(json!({"voteType": "UPVOTE"})));
}

#[tokio::test]
async fn search_filters_become_query_parameters() {
    let seen = Arc::new(Mutex::new(None::<HashMap<String, String>>));
    let router = Router::new().route(
        "/materials/search",
        get({
            let seen = seen.clone();
            move |Query(params): Query<HashMap<String, String>>| async move {
                *seen.lock() = Some(params);
                Json(json!([]))
            }
        }),
    );
    let addr = serve(router);
    let cx = context(addr, Arc::new(LocalStore::in_memory()));

    let filters = edubridge_shared::material::handle::SearchDescriptor {
        query: "algebra".to_string(),
        subject: Some("Maths".to_string()),
        kind: Some(edubridge_shared::material::MaterialKind::Pyq),
    };
    raw::call(raw::material::Search { filters }, &cx).await.unwrap();

    let params = seen.lock().clone().unwrap();
    assert_eq!(params.get("query").map(String::as_str), Some("algebra"));
    assert_eq!(params.get("subject").map(String::as_str), Some("Maths"));
    assert_eq!(params.get("type").map(String::as_str), Some("PYQ"));
}

#[tokio::test]
async fn error_bodies_surface_their_message() {
    let router = Router::new().route(
        "/materials",
        get(|| async { (StatusCode::BAD_REQUEST, Json(json!({"message": "nope"}))) }),
    );
    let addr = serve(router);
    let cx = context(addr, Arc::new(LocalStore::in_memory()));

    let err = raw::call(raw::material::All, &cx).await.unwrap_err();
    match err {
        Error::Status { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message.as_deref(), Some("nope"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn message_less_errors_still_carry_the_status() {
    let router = Router::new().route("/materials", get(|| async { StatusCode::FORBIDDEN }));
    let addr = serve(router);
    let cx = context(addr, Arc::new(LocalStore::in_memory()));

    let err = raw::call(raw::material::All, &cx).await.unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn login_accepts_both_token_body_shapes() {
    let router = Router::new()
        .route(
            "/wrapped/auth/login",
            post(|| async { Json(json!({"token": "tok-wrapped"})) }),
        )
        .route("/bare/auth/login", post(|| async { Json(json!("tok-bare")) }));
    let addr = serve(router);
    let store = Arc::new(LocalStore::in_memory());

    let config = Config {
        base_url: format!("http://{addr}/wrapped"),
        ..Config::default()
    };
    let cx = Context::new(&config, store.clone()).unwrap();
    let login = raw::auth::Login {
        email: "a@b.c".to_string(),
        password: "pw".to_string(),
    };
    assert_eq!(raw::call(login, &cx).await.unwrap(), "tok-wrapped");

    let config = Config {
        base_url: format!("http://{addr}/bare"),
        ..Config::default()
    };
    let cx = Context::new(&config, store).unwrap();
    let login = raw::auth::Login {
        email: "a@b.c".to_string(),
        password: "pw".to_string(),
    };
    assert_eq!(raw::call(login, &cx).await.unwrap(), "tok-bare");
}

#[tokio::test]
async fn upload_body_is_consumed_once() {
    let descriptor = edubridge_shared::material::handle::UploadDescriptor {
        title: "t".to_string(),
        description: String::new(),
        subject: "Maths".to_string(),
        semester: None,
        year: None,
        kind: edubridge_shared::material::MaterialKind::Note,
    };
    let cx = context("127.0.0.1:9".parse().unwrap(), Arc::new(LocalStore::in_memory()));

    let upload = raw::material::Upload::new(
        descriptor,
        "notes.pdf".to_string(),
        bytes::Bytes::from_static(b"pdf"),
    );
    use crate::raw::Request;
    let builder = cx
        .http
        .request(reqwest::Method::POST, format!("{}/materials/upload", cx.base_url));
    assert!(upload.make_req(builder).is_ok());

    // The file body was taken by the first build; a retry must fail
    // instead of sending an empty file.
    let builder = cx
        .http
        .request(reqwest::Method::POST, format!("{}/materials/upload", cx.base_url));
    assert!(matches!(
        upload.make_req(builder),
        Err(Error::UploadFileMissing)
    ));
}
