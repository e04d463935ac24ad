//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use pessoas_core::{MemoryStore, Person, Registry, store::PersonStore};
use pessoas_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{api_router, people::CountResponse};

fn memory_app() -> Router { api_router(Arc::new(Registry::new(MemoryStore::new()))) }

async fn sqlite_app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(Registry::new(store)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn json_body(res: Response) -> Value {
  let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn bar_bar() -> Value {
  json!({
    "apelido":    "bar_bar",
    "nome":       "Bar",
    "nascimento": "2003-07-21",
    "stack":      ["go"],
  })
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_location_and_record() {
  let app = memory_app();

  let res = send(&app, "POST", "/pessoas", Some(bar_bar())).await;
  assert_eq!(res.status(), StatusCode::CREATED);

  let location = res.headers()[header::LOCATION].to_str().unwrap().to_owned();
  let created: Person = serde_json::from_value(json_body(res).await).unwrap();
  assert_eq!(location, format!("/pessoas/{}", created.id));
  assert_eq!(created.nick, "bar_bar");
  assert_eq!(created.stack, ["go"]);

  let res = send(&app, "GET", &location, None).await;
  assert_eq!(res.status(), StatusCode::OK);
  let fetched: Person = serde_json::from_value(json_body(res).await).unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_nick_is_unprocessable() {
  for app in [memory_app(), sqlite_app().await] {
    assert_eq!(
      send(&app, "POST", "/pessoas", Some(bar_bar())).await.status(),
      StatusCode::CREATED
    );
    assert_eq!(
      send(&app, "POST", "/pessoas", Some(bar_bar())).await.status(),
      StatusCode::UNPROCESSABLE_ENTITY
    );

    let res = send(&app, "GET", "/contagem-pessoas", None).await;
    let count: CountResponse = serde_json::from_value(json_body(res).await).unwrap();
    assert_eq!(count.count, 1);
  }
}

#[tokio::test]
async fn long_name_is_bad_request() {
  let app = memory_app();
  let body = json!({
    "apelido":    "ok",
    "nome":       "a".repeat(101),
    "nascimento": "2000-01-01",
    "stack":      [],
  });

  let res = send(&app, "POST", "/pessoas", Some(body)).await;
  assert_eq!(res.status(), StatusCode::BAD_REQUEST);
  assert!(json_body(res).await["error"].as_str().unwrap().contains("nome"));

  let res = send(&app, "GET", "/contagem-pessoas", None).await;
  assert_eq!(json_body(res).await, json!({ "count": 0 }));
}

#[tokio::test]
async fn wrong_field_types_are_bad_request() {
  let app = memory_app();
  let bodies = [
    json!({ "apelido": 1, "nome": "Ana", "nascimento": "2000-01-01", "stack": [] }),
    json!({ "apelido": "ana", "nome": "Ana", "nascimento": "2000-01-01", "stack": [1] }),
    json!({ "apelido": "ana", "nome": "Ana", "nascimento": "2000-13-01", "stack": [] }),
  ];
  for body in bodies {
    let res = send(&app, "POST", "/pessoas", Some(body)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
  }
}

#[tokio::test]
async fn unparseable_json_is_unprocessable() {
  let app = memory_app();
  let req = Request::builder()
    .method("POST")
    .uri("/pessoas")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{\"apelido\":"))
    .unwrap();

  let res = app.oneshot(req).await.unwrap();
  assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_or_malformed_id_is_not_found() {
  let app = memory_app();
  let unknown = format!("/pessoas/{}", uuid::Uuid::now_v7());

  assert_eq!(send(&app, "GET", &unknown, None).await.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    send(&app, "GET", "/pessoas/not-a-uuid", None).await.status(),
    StatusCode::NOT_FOUND
  );
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_status_codes() {
  for app in [memory_app(), sqlite_app().await] {
    send(&app, "POST", "/pessoas", Some(bar_bar())).await;

    assert_eq!(send(&app, "GET", "/pessoas", None).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
      send(&app, "GET", "/pessoas?t=", None).await.status(),
      StatusCode::BAD_REQUEST
    );

    let res = send(&app, "GET", "/pessoas?t=xyz123", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(res).await, json!([]));

    let res = send(&app, "GET", "/pessoas?t=go", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let found: Vec<Person> = serde_json::from_value(json_body(res).await).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].nick, "bar_bar");
  }
}

// ─── Storage failures ────────────────────────────────────────────────────────

/// A store whose every operation fails, to exercise the 503 mapping.
struct BrokenStore;

impl PersonStore for BrokenStore {
  type Error = pessoas_core::Error;

  async fn create(&self, _: &Person) -> pessoas_core::Result<()> { Err(down()) }

  async fn get(&self, _: uuid::Uuid) -> pessoas_core::Result<Option<Person>> {
    Err(down())
  }

  async fn search(&self, _: &str) -> pessoas_core::Result<Vec<Person>> { Err(down()) }

  async fn count(&self) -> pessoas_core::Result<u64> { Err(down()) }
}

fn down() -> pessoas_core::Error { pessoas_core::Error::Storage("database is down".into()) }

#[tokio::test]
async fn storage_failure_is_not_reported_as_zero() {
  let app = api_router(Arc::new(Registry::new(BrokenStore)));

  let res = send(&app, "GET", "/contagem-pessoas", None).await;
  assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
  assert!(json_body(res).await.get("count").is_none());

  assert_eq!(
    send(&app, "POST", "/pessoas", Some(bar_bar())).await.status(),
    StatusCode::SERVICE_UNAVAILABLE
  );
  assert_eq!(
    send(&app, "GET", "/pessoas?t=go", None).await.status(),
    StatusCode::SERVICE_UNAVAILABLE
  );
}
