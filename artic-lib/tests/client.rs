//! Integration tests for the artworks client against a local HTTP server.
//!
//! Each test binds a throwaway `hyper` server on `127.0.0.1:0` that answers
//! every request with a canned status and body and records the request URIs.
//!
//! The live API test is ignored by default. Run it with:
//! `cargo test -p artic-lib -- --ignored`

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use artic_lib::ArticClient;
use artic_lib::api::ApiPage;
use artic_lib::api::UiPage;
use artic_lib::error::ApiError;
use artic_lib::error::Error;
use artic_lib::view::PageChangeEvent;
use artic_lib::view::TableView;
use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

const TWO_ARTWORKS: &str = r#"{
    "pagination": {"total": 30, "limit": 12, "offset": 0, "total_pages": 3, "current_page": 1},
    "data": [
        {
            "id": 129884,
            "title": "Starry Night and the Astronauts",
            "place_of_origin": "United States",
            "artist_display": "Alma Thomas\nAmerican, 1891–1978",
            "inscriptions": null,
            "date_start": 1972,
            "date_end": 1972
        },
        {
            "id": 16568,
            "title": "Water Lilies",
            "place_of_origin": "France",
            "artist_display": "Claude Monet\nFrench, 1840-1926",
            "inscriptions": "Claude Monet 1906",
            "date_start": 1906,
            "date_end": 1906
        }
    ]
}"#;

struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let seen = seen.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let seen = seen.clone();
                        async move {
                            seen.lock().unwrap().push(req.uri().to_string());
                            let response = Response::builder()
                                .status(status)
                                .header("content-type", "application/json")
                                .body(Full::new(Bytes::from_static(body.as_bytes())))
                                .unwrap();
                            Ok::<_, Infallible>(response)
                        }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, requests }
    }

    fn client(&self) -> ArticClient {
        ArticClient::builder()
            .base_url(format!("http://{}/api/v1", self.addr))
            .build()
            .unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn test_fetch_page_sends_page_and_limit() {
    let server = MockServer::start(200, TWO_ARTWORKS).await;
    let client = server.client();

    let page = client.fetch_page(UiPage(0).to_api()).await.unwrap();

    assert_eq!(server.requests(), vec!["/api/v1/artworks?page=1&limit=12"]);
    assert_eq!(page.len(), 2);
    assert_eq!(page.total_records(), 30);
    assert_eq!(page.pagination().total_pages, Some(3));

    let first = &page.records()[0];
    assert_eq!(first.id, 129884);
    assert_eq!(first.inscriptions, "");
    assert_eq!(page.records()[1].inscriptions, "Claude Monet 1906");
}

#[tokio::test]
async fn test_fetch_page_http_error() {
    let server = MockServer::start(503, r#"{"error": "unavailable"}"#).await;
    let result = server.client().fetch_page(ApiPage::new(4).unwrap()).await;

    match result {
        Err(Error::Api(ApiError::Http { status, .. })) => assert_eq!(status, 503),
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert_eq!(server.requests(), vec!["/api/v1/artworks?page=4&limit=12"]);
}

#[tokio::test]
async fn test_fetch_page_parse_error() {
    let server = MockServer::start(200, "<html>maintenance</html>").await;
    let result = server.client().fetch_page(ApiPage::new(1).unwrap()).await;

    match result {
        Err(Error::Api(ApiError::Parse { body, .. })) => {
            assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_page_swallows_errors() {
    let server = MockServer::start(500, "").await;
    let page = server.client().load_page(ApiPage::new(1).unwrap()).await;

    assert!(page.is_empty());
    assert_eq!(page.total_records(), 0);
}

#[tokio::test]
async fn test_load_page_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArticClient::builder()
        .base_url(format!("http://{}/api/v1", addr))
        .build()
        .unwrap();

    let result = client.fetch_page(ApiPage::new(1).unwrap()).await;
    assert!(matches!(result, Err(Error::Api(ApiError::Network(_)))));

    let page = client.load_page(ApiPage::new(1).unwrap()).await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_table_view_over_http() {
    let server = MockServer::start(200, TWO_ARTWORKS).await;
    let client = server.client();
    let mut view = TableView::new();

    let request = view.mount();
    assert!(view.load(&client, request).await);
    assert_eq!(view.records().len(), 2);
    assert_eq!(view.page_report(), "Showing 1 to 12 of 30 entries");

    let event = view.toggle_row(1).unwrap();
    view.on_selection_change(event);

    let request = view.on_page_change(PageChangeEvent { page: UiPage(2) });
    view.load(&client, request).await;
    assert_eq!(view.selected_count(), 0);
    assert_eq!(view.page_report(), "Showing 25 to 30 of 30 entries");

    let request = view.on_page_change(PageChangeEvent { page: UiPage(0) });
    view.load(&client, request).await;
    assert_eq!(view.selected_count(), 1);
    assert_eq!(view.selected_records()[0].id, 16568);

    assert_eq!(
        server.requests(),
        vec![
            "/api/v1/artworks?page=1&limit=12",
            "/api/v1/artworks?page=3&limit=12",
            "/api/v1/artworks?page=1&limit=12",
        ]
    );
}

#[tokio::test]
#[ignore = "requires network access to api.artic.edu"]
async fn test_live_first_page() {
    let client = ArticClient::new().expect("client");
    let page = client
        .fetch_page(UiPage::FIRST.to_api())
        .await
        .expect("fetch first page");

    assert!(page.len() <= 12);
    assert!(page.total_records() > 0);
    println!(
        "Fetched {} artworks of {}",
        page.len(),
        page.total_records()
    );
}
