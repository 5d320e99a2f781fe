use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use shared::{aggregate, models::*};
use crate::{
    build_rocket,
    cors::CORS,
    routes::{AppState, VOTE_RECORDED_MESSAGE},
    store::{MemoryVoteStore, StoreError, VoteRepository},
};

struct BrokenStore;

#[rocket::async_trait]
impl VoteRepository for BrokenStore {
    async fn insert(&self, _product_id: &ProductId) -> Result<VoteRecord, StoreError> {
        Err(StoreError::LockFailed)
    }

    async fn all(&self) -> Result<Vec<VoteRecord>, StoreError> {
        Err(StoreError::LockFailed)
    }
}

fn client(store: impl VoteRepository + 'static) -> Client {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("backend=debug")
        .with_test_writer()
        .try_init();
    Client::tracked(build_rocket(AppState::new(store), CORS::default())).expect("valid rocket instance")
}

fn cast(client: &Client, body: &str) -> (Status, VoteReceipt) {
    let response = client
        .post("/api/votes")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    let status = response.status();
    (status, response.into_json().expect("receipt body"))
}

#[test]
fn test_record_and_list_votes() {
    let client = client(MemoryVoteStore::default());

    for body in [r#"{"productId":"1"}"#, r#"{"productId":"2"}"#, r#"{"productId":1}"#] {
        let (status, receipt) = cast(&client, body);
        assert_eq!(status, Status::Ok);
        assert_eq!(receipt, VoteReceipt::accepted(VOTE_RECORDED_MESSAGE));
    }

    let response = client.get("/api/votes").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let listing: VoteListing = response.into_json().expect("listing body");
    assert!(listing.status);
    assert_eq!(listing.data, vec![Vote::new("1"), Vote::new("2"), Vote::new("1")]);

    let tally = aggregate(&listing.data);
    assert_eq!(tally.get(&"1".into()), 2);
    assert_eq!(tally.total(), 3);
}

#[test]
fn test_empty_store_lists_nothing() {
    let client = client(MemoryVoteStore::default());
    let body = client.get("/api/votes").dispatch().into_string().expect("body");
    let listing: VoteListing = serde_json::from_str(&body).expect("valid json");
    assert_eq!(listing, VoteListing { status: true, data: Vec::new() });
}

#[test]
fn test_missing_product_is_rejected() {
    let client = client(MemoryVoteStore::default());

    let (status, receipt) = cast(&client, "{}");
    assert_eq!(status, Status::BadRequest);
    assert_eq!(receipt, VoteReceipt::rejected("Seleccione un producto"));

    let (status, receipt) = cast(&client, r#"{"productId":"   "}"#);
    assert_eq!(status, Status::BadRequest);
    assert!(!receipt.status);

    let listing: VoteListing = client.get("/api/votes").dispatch().into_json().expect("listing body");
    assert!(listing.data.is_empty());
}

#[test]
fn test_store_failure_is_reported_in_band() {
    let client = client(BrokenStore);

    let (status, receipt) = cast(&client, r#"{"productId":"3"}"#);
    assert_eq!(status, Status::InternalServerError);
    assert_eq!(receipt, VoteReceipt::rejected("No se pudo registrar el voto"));

    let response = client.get("/api/votes").dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    let listing: VoteListing = response.into_json().expect("listing body");
    assert_eq!(listing, VoteListing::unavailable());
}

#[test]
fn test_malformed_payload_hits_catcher() {
    let client = client(MemoryVoteStore::default());
    let response = client
        .post("/api/votes")
        .header(ContentType::JSON)
        .body("not json")
        .dispatch();
    assert!(response.status().class().is_client_error());

    let response = client.get("/api/unknown").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body: serde_json::Value = response.into_json().expect("catcher body");
    assert_eq!(body["status"], 404);
}

#[test]
fn test_cors_headers_for_allowed_origin() {
    let client = client(MemoryVoteStore::default());

    let response = client
        .options("/api/votes")
        .header(Header::new("Origin", "http://localhost:8080"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("http://localhost:8080")
    );

    let response = client
        .get("/api/votes")
        .header(Header::new("Origin", "https://elsewhere.example"))
        .dispatch();
    assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
}
