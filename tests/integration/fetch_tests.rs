use crate::{blocking, test_config};
use page_harvest::{
    derive_language, derive_title, harvest_links, FetchError, FetchState, Fetcher, HttpFetcher,
    Resource,
};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="pl">
<head><title data-rh="true">Aktualności</title></head>
<body>
  <a href="/posts/1">First</a>
  <a href="/posts/2">Second</a>
  <a href="/posts/1">First again</a>
  <a href="https://other.com/y">Elsewhere</a>
</body>
</html>"#;

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let state = blocking(move || {
        let fetcher = HttpFetcher::new(&test_config().fetch).unwrap();
        let mut page = Resource::new(url, fetcher);
        assert!(page.is_valid());
        page.into_state()
    })
    .await;

    assert_eq!(state, FetchState::FetchedOk(PAGE.to_string()));
}

#[tokio::test]
async fn test_repeated_access_fetches_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/feed", mock_server.uri());
    blocking(move || {
        let fetcher = HttpFetcher::new(&test_config().fetch).unwrap();
        let mut page = Resource::new(url, fetcher);

        let first = page.ensure_content().map(str::to_string);
        let second = page.ensure_content().map(str::to_string);
        assert_eq!(first, second);

        let links_first = harvest_links(&mut page);
        let links_second = harvest_links(&mut page);
        assert_eq!(links_first, links_second);

        assert_eq!(derive_title(&mut page).as_deref(), Some("Aktualności"));
    })
    .await;

    mock_server.verify().await;
}

#[tokio::test]
async fn test_full_extraction_against_server() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/section/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    let url = format!("{}/section/page", base_url);
    let (title, language, links) = blocking(move || {
        let config = test_config();
        let fetcher = HttpFetcher::new(&config.fetch).unwrap();
        let mut page = Resource::new(url, fetcher);
        (
            derive_title(&mut page),
            derive_language(&mut page, &config.language),
            harvest_links(&mut page),
        )
    })
    .await;

    assert_eq!(title.as_deref(), Some("Aktualności"));
    assert_eq!(language, "pl");
    assert_eq!(links.len(), 2);
    assert!(links.contains(&format!("{}/posts/1", base_url)));
    assert!(links.contains(&format!("{}/posts/2", base_url)));
    assert!(!links.contains("https://other.com/y"));
}

#[tokio::test]
async fn test_not_found_degrades_to_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let (title, language, links, state) = blocking(move || {
        let config = test_config();
        let fetcher = HttpFetcher::new(&config.fetch).unwrap();
        let mut page = Resource::new(url, fetcher);
        (
            derive_title(&mut page),
            derive_language(&mut page, &config.language),
            harvest_links(&mut page),
            page.into_state(),
        )
    })
    .await;

    assert_eq!(title, None);
    assert_eq!(language, "en-US");
    assert!(links.is_empty());
    assert_eq!(state, FetchState::FetchedFail(FetchError::Status(404)));
}

#[tokio::test]
async fn test_timeout_is_reported_as_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/slow", mock_server.uri());
    let result = blocking(move || {
        let mut config = test_config();
        config.fetch.timeout_ms = 200;
        let fetcher = HttpFetcher::new(&config.fetch).unwrap();
        fetcher.fetch(&url)
    })
    .await;

    assert_eq!(result, Err(FetchError::Timeout));
}

#[tokio::test]
async fn test_invalid_utf8_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x3c, 0x61, 0xff, 0xfe, 0xfd]))
        .mount(&mock_server)
        .await;

    let url = format!("{}/binary", mock_server.uri());
    let (valid, state) = blocking(move || {
        let fetcher = HttpFetcher::new(&test_config().fetch).unwrap();
        let mut page = Resource::new(url, fetcher);
        (page.is_valid(), page.into_state())
    })
    .await;

    assert!(!valid);
    assert!(matches!(state, FetchState::FetchedFail(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on the discard port
    let result = blocking(|| {
        let fetcher = HttpFetcher::new(&test_config().fetch).unwrap();
        fetcher.fetch("http://127.0.0.1:9/")
    })
    .await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("User-Agent", "TestAgent/1.0"))
        .and(header("Accept-Language", "pl-PL"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>ok</title>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let title = blocking(move || {
        let mut config = test_config();
        config.fetch.headers.clear();
        config
            .fetch
            .headers
            .insert("User-Agent".to_string(), "TestAgent/1.0".to_string());
        config
            .fetch
            .headers
            .insert("Accept-Language".to_string(), "pl-PL".to_string());

        let fetcher = HttpFetcher::new(&config.fetch).unwrap();
        let mut page = Resource::new(url, fetcher);
        derive_title(&mut page)
    })
    .await;

    assert_eq!(title.as_deref(), Some("ok"));
}
