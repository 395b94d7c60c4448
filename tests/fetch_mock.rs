//! Page fetching and sitemap probing against a mock HTTP server.

use httptest::{matchers::*, responders::*, Expectation, Server};
use seo_analyzer::fetch::{check_sitemap, fetch_page, FetchEndpoint};
use seo_analyzer::FetchError;

#[path = "helpers.rs"]
mod helpers;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to create client")
}

#[tokio::test]
async fn test_direct_fetch_returns_page_and_load_time() {
    let server = Server::run();
    let html = helpers::healthy_page();
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .respond_with(status_code(200).body(html.clone())),
    );

    let url = format!("http://{}/page", server.addr());
    let page = fetch_page(&client(), &url, &[FetchEndpoint::Direct])
        .await
        .expect("Direct fetch should succeed");

    assert_eq!(page.url, url);
    assert_eq!(page.html, html);
    assert_eq!(page.endpoint, FetchEndpoint::Direct);
    assert!(page.load_time_ms > 0.0);
}

#[tokio::test]
async fn test_failed_direct_fetch_falls_back_to_proxy() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .respond_with(status_code(500).body("Internal Server Error")),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/proxy"),
            request::query(url_decoded(contains(key("u")))),
        ])
        .respond_with(status_code(200).body(helpers::healthy_page())),
    );

    let url = format!("http://{}/page", server.addr());
    let proxy = FetchEndpoint::Proxy(format!("http://{}/proxy?u={{url}}", server.addr()));
    let page = fetch_page(&client(), &url, &[FetchEndpoint::Direct, proxy.clone()])
        .await
        .expect("Proxy fetch should succeed");

    assert_eq!(page.endpoint, proxy);
    // The page keeps the target URL, not the proxy URL
    assert_eq!(page.url, url);
}

#[tokio::test]
async fn test_short_content_fails_every_attempt() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/tiny"))
            .respond_with(status_code(200).body("<html></html>")),
    );

    let url = format!("http://{}/tiny", server.addr());
    let err = fetch_page(&client(), &url, &[FetchEndpoint::Direct])
        .await
        .unwrap_err();

    match err {
        FetchError::AllAttemptsFailed {
            attempts,
            last_error,
            ..
        } => {
            assert_eq!(attempts, 1);
            assert!(last_error.contains("content too short"));
        }
        other => panic!("Expected AllAttemptsFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_last_error_is_reported_after_all_endpoints_fail() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/page"))
            .respond_with(status_code(503)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/proxy"))
            .respond_with(status_code(403)),
    );

    let url = format!("http://{}/page", server.addr());
    let proxy = FetchEndpoint::Proxy(format!("http://{}/proxy?u={{url}}", server.addr()));
    let err = fetch_page(&client(), &url, &[FetchEndpoint::Direct, proxy])
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("2 attempt(s)"), "unexpected message: {msg}");
    assert!(msg.contains("HTTP 403"), "unexpected message: {msg}");
}

#[tokio::test]
async fn test_sitemap_found_at_first_location() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml"))
            .respond_with(status_code(200).body("<urlset></urlset>")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap_index.xml"))
            .respond_with(status_code(404)),
    );

    let url = format!("http://{}/some/page", server.addr());
    let record = check_sitemap(&client(), &url).await;

    assert!(record.present);
    assert_eq!(record.url, format!("http://{}/sitemap.xml", server.addr()));
    assert_eq!(record.checked.len(), 2);
    assert_eq!(record.checked[1].status, Some(404));
    assert!(!record.checked[1].exists);
}

#[tokio::test]
async fn test_sitemap_missing_everywhere() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml"))
            .respond_with(status_code(404)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap_index.xml"))
            .respond_with(status_code(404)),
    );

    let url = format!("http://{}/", server.addr());
    let record = check_sitemap(&client(), &url).await;

    assert!(!record.present);
    assert!(record.url.is_empty());
    assert!(record.checked.iter().all(|p| p.status == Some(404)));
}
