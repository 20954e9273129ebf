//! Integration tests for the archiver
//!
//! These tests run the full crawl cycle against wiremock servers standing in
//! for both external collaborators: the paginated feed source and the
//! document render service.

use feedpress::config::RetryPolicy;
use feedpress::{
    ArchiveError, ArchiveWriter, Crawler, FeedPager, HttpRenderer, RateLimiter, RetryingRenderer,
};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMPTY_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Author</title></channel></rss>"#;

/// RSS body with two entries published on consecutive days
fn two_entry_feed(base: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Author</title>
<item>
  <title>Hello, World!!! -- 2024</title>
  <link>{base}/hello</link>
  <pubDate>Tue, 05 Mar 2024 10:30:00 +0000</pubDate>
</item>
<item>
  <title>Second Post</title>
  <link>{base}/second</link>
  <pubDate>Wed, 06 Mar 2024 08:00:00 +0000</pubDate>
</item>
</channel></rss>"#
    )
}

async fn mount_feed_page(server: &MockServer, page: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/feed/"))
        .and(query_param("paged", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

async fn mount_render_service(server: &MockServer, artifact: &[u8]) {
    Mock::given(method("POST"))
        .and(path("/render"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(artifact.to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(server)
        .await;
}

/// Assembles a crawler with no rate-limit delay and the given retry policy
fn build_crawler(
    feed_server: &MockServer,
    render_server: &MockServer,
    output_dir: &Path,
    start_page: u32,
    retry: RetryPolicy,
) -> Crawler<RetryingRenderer<HttpRenderer>, feedpress::crawler::TokioSleeper> {
    let client = Client::new();
    let feed_url = Url::parse(&format!("{}/feed/", feed_server.uri())).unwrap();
    let render_service = Url::parse(&render_server.uri()).unwrap();

    let pager = FeedPager::new(client.clone(), feed_url, start_page, retry);
    let renderer = RetryingRenderer::new(HttpRenderer::new(client, render_service), retry);
    let writer = ArchiveWriter::new(output_dir);
    let limiter = RateLimiter::new(Duration::ZERO);

    Crawler::new(pager, renderer, writer, limiter)
}

fn artifact_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn archives_feed_to_exhaustion() {
    let feed_server = MockServer::start().await;
    let render_server = MockServer::start().await;

    mount_feed_page(&feed_server, "1", two_entry_feed("https://example.com"), 1).await;
    mount_feed_page(&feed_server, "2", EMPTY_FEED.to_string(), 1).await;
    mount_render_service(&render_server, b"%PDF-1.7 artifact").await;

    let dir = tempfile::tempdir().unwrap();
    let mut crawler = build_crawler(
        &feed_server,
        &render_server,
        dir.path(),
        1,
        RetryPolicy::disabled(),
    );

    let summary = crawler.run().await.expect("run should succeed");

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.entries_archived, 2);
    assert_eq!(summary.last_page, Some(1));
    assert_eq!(artifact_count(dir.path()), 2);

    // Deterministic names, including the merge-of-separators slug
    let hello = dir.path().join("2024-03-05-Hello_World_2024.pdf");
    let second = dir.path().join("2024-03-06-Second_Post.pdf");
    assert_eq!(std::fs::read(&hello).unwrap(), b"%PDF-1.7 artifact");
    assert_eq!(std::fs::read(&second).unwrap(), b"%PDF-1.7 artifact");
}

#[tokio::test]
async fn respects_the_start_page_flag() {
    let feed_server = MockServer::start().await;
    let render_server = MockServer::start().await;

    // Pages 1..4 must never be requested when starting at 5
    mount_feed_page(&feed_server, "5", two_entry_feed("https://example.com"), 1).await;
    mount_feed_page(&feed_server, "6", EMPTY_FEED.to_string(), 1).await;
    mount_render_service(&render_server, b"%PDF").await;

    let dir = tempfile::tempdir().unwrap();
    let mut crawler = build_crawler(
        &feed_server,
        &render_server,
        dir.path(),
        5,
        RetryPolicy::disabled(),
    );

    let summary = crawler.run().await.expect("run should succeed");

    assert_eq!(summary.last_page, Some(5));
    assert_eq!(crawler.cursor(), 7);
}

#[tokio::test]
async fn malformed_feed_aborts_with_no_artifacts() {
    let feed_server = MockServer::start().await;
    let render_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a feed</html>"))
        .mount(&feed_server)
        .await;

    // The render service must never be reached
    Mock::given(method("POST"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&render_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut crawler = build_crawler(
        &feed_server,
        &render_server,
        dir.path(),
        1,
        RetryPolicy::disabled(),
    );

    let err = crawler.run().await.expect_err("malformed feed must abort");

    assert!(matches!(err, ArchiveError::Feed(_)));
    assert_eq!(crawler.cursor(), 1, "cursor must remain at the start value");
    assert_eq!(artifact_count(dir.path()), 0);
}

#[tokio::test]
async fn render_failure_aborts_and_stops_paging() {
    let feed_server = MockServer::start().await;
    let render_server = MockServer::start().await;

    mount_feed_page(&feed_server, "1", two_entry_feed("https://example.com"), 1).await;
    // Page 2 must never be fetched once the first render fails
    mount_feed_page(&feed_server, "2", EMPTY_FEED.to_string(), 0).await;

    Mock::given(method("POST"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&render_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut crawler = build_crawler(
        &feed_server,
        &render_server,
        dir.path(),
        1,
        RetryPolicy::disabled(),
    );

    let err = crawler.run().await.expect_err("render failure must abort");

    assert!(matches!(err, ArchiveError::Render(_)));
    assert_eq!(artifact_count(dir.path()), 0);
}

#[tokio::test]
async fn rerun_overwrites_existing_artifacts() {
    let feed_server = MockServer::start().await;

    mount_feed_page(&feed_server, "1", two_entry_feed("https://example.com"), 2).await;
    mount_feed_page(&feed_server, "2", EMPTY_FEED.to_string(), 2).await;

    let dir = tempfile::tempdir().unwrap();

    // First run
    let render_v1 = MockServer::start().await;
    mount_render_service(&render_v1, b"first rendering").await;
    build_crawler(&feed_server, &render_v1, dir.path(), 1, RetryPolicy::disabled())
        .run()
        .await
        .expect("first run should succeed");

    // Second run over the same feed: no dedup, same names, contents replaced
    let render_v2 = MockServer::start().await;
    mount_render_service(&render_v2, b"second rendering").await;
    build_crawler(&feed_server, &render_v2, dir.path(), 1, RetryPolicy::disabled())
        .run()
        .await
        .expect("second run should succeed");

    assert_eq!(artifact_count(dir.path()), 2);
    let hello = dir.path().join("2024-03-05-Hello_World_2024.pdf");
    assert_eq!(std::fs::read(&hello).unwrap(), b"second rendering");
}

#[tokio::test]
async fn enabled_retries_recover_from_transient_render_failure() {
    let feed_server = MockServer::start().await;
    let render_server = MockServer::start().await;

    mount_feed_page(&feed_server, "1", two_entry_feed("https://example.com"), 1).await;
    mount_feed_page(&feed_server, "2", EMPTY_FEED.to_string(), 1).await;

    // First render attempt fails transiently, everything after succeeds
    Mock::given(method("POST"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&render_server)
        .await;
    mount_render_service(&render_server, b"%PDF recovered").await;

    let dir = tempfile::tempdir().unwrap();
    let retry = RetryPolicy::with_retries(1).with_base_delay(Duration::from_millis(1));
    let mut crawler = build_crawler(&feed_server, &render_server, dir.path(), 1, retry);

    let summary = crawler.run().await.expect("retry should recover");

    assert_eq!(summary.entries_archived, 2);
    assert_eq!(
        std::fs::read(dir.path().join("2024-03-05-Hello_World_2024.pdf")).unwrap(),
        b"%PDF recovered"
    );
}
