//! Wire-level tests for the HTTP store clients against mock backends.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lendkeeper::domain::{FineStore, LoanStore, StoreError};
use lendkeeper::infrastructure::{HttpFineStore, HttpLoanStore, SessionContext};
use lendkeeper::models::{Fine, Loan};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn loan_json(id: &str, return_date: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "bookId": "book-1",
        "userId": "user-1",
        "issueDate": "2024-01-01",
        "dueDate": "2024-01-10",
        "returnDate": return_date,
    })
}

#[tokio::test]
async fn get_parses_the_backend_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lendings/loan-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json("loan-1", None)))
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(reqwest::Client::new(), server.uri(), None);
    let loan = store.get("loan-1").await.unwrap().unwrap();

    assert_eq!(loan.id, "loan-1");
    assert_eq!(loan.book_id, "book-1");
    assert_eq!(loan.issue_date, date(2024, 1, 1));
    assert_eq!(loan.due_date, date(2024, 1, 10));
    assert_eq!(loan.return_date, None);
}

#[tokio::test]
async fn get_unknown_loan_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lendings/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(reqwest::Client::new(), server.uri(), None);
    assert_eq!(store.get("ghost").await.unwrap(), None);
}

#[tokio::test]
async fn get_backend_error_carries_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lendings/loan-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(reqwest::Client::new(), server.uri(), None);
    let err = store.get("loan-1").await.unwrap_err();

    assert_eq!(
        err,
        StoreError::Status {
            status: 500,
            body: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn update_puts_the_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/lendings/loan-1"))
        .and(body_partial_json(loan_json("loan-1", Some("2024-01-15"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json(
            "loan-1",
            Some("2024-01-15"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(reqwest::Client::new(), server.uri(), None);
    let loan = Loan {
        id: "loan-1".to_string(),
        book_id: "book-1".to_string(),
        user_id: "user-1".to_string(),
        issue_date: date(2024, 1, 1),
        due_date: date(2024, 1, 10),
        return_date: Some(date(2024, 1, 15)),
    };

    let saved = store.update(&loan).await.unwrap();
    assert_eq!(saved.return_date, Some(date(2024, 1, 15)));
}

#[tokio::test]
async fn update_of_unknown_loan_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/lendings/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(reqwest::Client::new(), server.uri(), None);
    let loan = Loan {
        id: "ghost".to_string(),
        book_id: "book-1".to_string(),
        user_id: "user-1".to_string(),
        issue_date: date(2024, 1, 1),
        due_date: date(2024, 1, 10),
        return_date: Some(date(2024, 1, 15)),
    };

    assert_eq!(store.update(&loan).await.unwrap_err(), StoreError::NotFound);
}

#[tokio::test]
async fn create_posts_the_fine_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fines"))
        .and(body_partial_json(json!({
            "lendId": "loan-1",
            "fineAmount": "100",
            "paidStatus": false,
            "paymentDate": null,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "fineId": "fine-42",
            "lendId": "loan-1",
            "fineAmount": "100",
            "paidStatus": false,
            "paymentDate": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpFineStore::new(reqwest::Client::new(), server.uri(), None);
    let created = store
        .create(&Fine::pending("loan-1".to_string(), dec!(100)))
        .await
        .unwrap();

    assert_eq!(created.fine_id.as_deref(), Some("fine-42"));
    assert_eq!(created.fine_amount, dec!(100));
}

#[tokio::test]
async fn session_token_is_sent_as_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lendings/loan-1"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(loan_json("loan-1", None)))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpLoanStore::new(
        reqwest::Client::new(),
        server.uri(),
        Some(SessionContext::new("sekrit".to_string())),
    );
    store.get("loan-1").await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // nothing listens on port 1
    let store = HttpLoanStore::new(reqwest::Client::new(), "http://127.0.0.1:1", None);
    let err = store.get("loan-1").await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
}
