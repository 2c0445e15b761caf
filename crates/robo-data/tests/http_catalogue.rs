//! Loads catalogues over real HTTP from a one-shot local server.

use robo_commerce::prelude::*;
use robo_data::{FetchError, HttpCatalogue};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one HTTP response and return the endpoint URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/api/catalogue", addr)
}

/// An endpoint nothing is listening on.
async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/catalogue", addr)
}

fn seeded_view() -> CatalogueView {
    CatalogueView::with_products(StaticCatalogue::robotics().products().to_vec())
}

#[tokio::test]
async fn test_load_replaces_catalogue() {
    let endpoint = serve_once(
        "200 OK",
        r#"[
            {"_id": "a1", "name": "Warehouse Drone", "price": 999.99, "category": "drones"},
            {"_id": "b2", "name": "Desert Rover", "price": 1500}
        ]"#,
    )
    .await;

    let mut view = seeded_view();
    assert!(view.load_catalogue(&HttpCatalogue::new(endpoint)).await);

    assert_eq!(view.products().len(), 2);
    view.set_filter("drones");
    let visible: Vec<&str> = view.visible_products().map(|p| p.name.as_str()).collect();
    assert_eq!(visible, vec!["Warehouse Drone"]);
    assert_eq!(view.products()[0].price.display(), "$999.99");
}

#[tokio::test]
async fn test_invalid_price_records_are_skipped() {
    let endpoint = serve_once(
        "200 OK",
        r#"[{"id": 1, "name": "Good", "price": 10}, {"id": 2, "name": "Bad", "price": -1}]"#,
    )
    .await;

    let products = HttpCatalogue::new(endpoint).fetch_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId::new("1"));
}

#[tokio::test]
async fn test_records_with_both_ids_load() {
    let endpoint = serve_once(
        "200 OK",
        r#"[{"_id": "64f", "id": "64f", "name": "Drone", "price": 100, "__v": 0}]"#,
    )
    .await;

    let mut view = seeded_view();
    assert!(view.load_catalogue(&HttpCatalogue::new(endpoint)).await);
    assert_eq!(view.products().len(), 1);
    assert_eq!(view.products()[0].id, ProductId::new("64f"));
}

#[tokio::test]
async fn test_incomplete_record_does_not_discard_the_rest() {
    let endpoint = serve_once(
        "200 OK",
        r#"[{"id": 1, "name": "Drone", "price": 100}, {"id": 2, "name": "Rover"}, {"id": 3, "price": 5}]"#,
    )
    .await;

    let mut view = seeded_view();
    assert!(view.load_catalogue(&HttpCatalogue::new(endpoint)).await);
    let names: Vec<&str> = view.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Drone"]);
}

#[tokio::test]
async fn test_server_error_keeps_existing_list() {
    let endpoint = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let mut view = seeded_view();
    assert!(!view.load_catalogue(&HttpCatalogue::new(endpoint)).await);
    assert_eq!(view.products(), StaticCatalogue::robotics().products());
}

#[tokio::test]
async fn test_http_error_status_surfaces() {
    let endpoint = serve_once("404 Not Found", "missing").await;
    let err = HttpCatalogue::new(endpoint).fetch_records().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpError { status: 404, .. }));
}

#[tokio::test]
async fn test_connection_failure_keeps_existing_list() {
    let mut view = seeded_view();
    let source = HttpCatalogue::new(dead_endpoint().await);

    assert!(!view.load_catalogue(&source).await);
    assert_eq!(view.products().len(), 5);
}

#[tokio::test]
async fn test_malformed_body_keeps_empty_list() {
    let endpoint = serve_once("200 OK", "<html>not json</html>").await;

    let mut store = Storefront::new(Currency::USD);
    assert!(!store.load_catalogue(&HttpCatalogue::new(endpoint)).await);
    assert!(store.catalogue.products().is_empty());
    assert_eq!(store.catalogue.visible_products().count(), 0);
}
