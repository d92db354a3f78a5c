use crate::{blocking, test_config};
use page_harvest::harvest::harvest_sources;
use page_harvest::{FetchError, HttpFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_harvest_multiple_sources() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html lang="en-GB"><title>English</title><a href="/en/about">About</a></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/de"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html lang="de"><title>Deutsch</title><a href="https://example.org/">Ext</a></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let urls = vec![
        format!("{}/en", base_url),
        format!("{}/de", base_url),
        format!("{}/gone", base_url),
    ];

    let handle = tokio::runtime::Handle::current();
    let sources = urls.clone();
    let reports = blocking(move || {
        let config = test_config();
        let fetcher = HttpFetcher::new(&config.fetch).unwrap();
        handle.block_on(harvest_sources(&fetcher, sources, &config))
    })
    .await
    .unwrap();

    assert_eq!(reports.len(), 3);
    for (report, url) in reports.iter().zip(&urls) {
        assert_eq!(&report.url, url);
    }

    let english = reports[0].metadata.as_ref().unwrap();
    assert_eq!(english.title.as_deref(), Some("English"));
    assert_eq!(english.language, "en-GB");
    assert_eq!(english.domain, base_url);
    assert!(reports[0].links.contains(&format!("{}/en/about", base_url)));

    let german = reports[1].metadata.as_ref().unwrap();
    assert_eq!(german.title.as_deref(), Some("Deutsch"));
    assert_eq!(german.language, "en-US");
    assert!(reports[1].links.is_empty());

    assert!(!reports[2].is_success());
    assert_eq!(reports[2].fetch_error, Some(FetchError::Status(410)));
}
