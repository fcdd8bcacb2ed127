//! Provider and aggregator tests against a mock HTTP server.

use research_agent::client::{ArxivClient, ScholarClient};
use research_agent::config::{Config, fields};
use research_agent::error::{ClientError, SearchError};
use research_agent::search::{SearchAggregator, search_arxiv, search_by_author, search_scholar};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title type="html">ArXiv Query</title>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <published>2024-01-02T10:00:00Z</published>
    <title>Graph Learning
      at Scale</title>
    <summary>We study graphs.</summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Alan Turing</name></author>
    <link href="http://arxiv.org/abs/2401.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2401.00001v1" rel="related" type="application/pdf"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2312.00002v2</id>
    <published>2023-12-05T10:00:00Z</published>
    <title>Message Passing &amp; Friends</title>
    <summary>Another abstract.</summary>
    <author><name>Grace Hopper</name></author>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2312.00003v1</id>
    <published>2023-12-01T10:00:00Z</published>
    <title></title>
    <summary>Untitled entries are kept.</summary>
  </entry>
</feed>"#;

fn scholar_paper(id: &str, title: &str, year: i32) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "year": year,
        "abstract": format!("Abstract of {title}"),
        "url": format!("https://www.semanticscholar.org/paper/{id}"),
        "citationCount": 12,
        "authors": [{"authorId": "1", "name": "Ada Lovelace"}, {"authorId": "2", "name": "Alan Turing"}]
    })
}

async fn mount_empty_arxiv(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#,
        ))
        .mount(server)
        .await;
}

// =============================================================================
// arXiv
// =============================================================================

#[tokio::test]
async fn test_arxiv_search_maps_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "graph learning OR GCN"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .and(query_param("max_results", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let client = ArxivClient::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = search_arxiv(&client, "graph learning OR GCN", 5).await.unwrap();

    assert_eq!(papers.len(), 3);
    assert_eq!(papers[0].title, "Graph Learning at Scale");
    assert_eq!(papers[0].authors, "Ada Lovelace, Alan Turing");
    assert_eq!(papers[0].year, Some(2024));
    assert_eq!(papers[0].url.as_deref(), Some("http://arxiv.org/pdf/2401.00001v1"));
    assert_eq!(papers[0].citations, None);

    assert_eq!(papers[1].title, "Message Passing & Friends");
    assert_eq!(papers[1].url.as_deref(), Some("https://arxiv.org/pdf/2312.00002v2"));

    assert_eq!(papers[2].title, "");
    assert_eq!(papers[2].year, Some(2023));
    assert_eq!(papers[2].url.as_deref(), Some("https://arxiv.org/pdf/2312.00003v1"));
}

#[tokio::test]
async fn test_arxiv_search_truncates_to_max() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let client = ArxivClient::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = search_arxiv(&client, "graphs", 1).await.unwrap();
    assert_eq!(papers.len(), 1);
}

#[tokio::test]
async fn test_arxiv_server_error_is_query_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let client = ArxivClient::new(&Config::for_testing(&server.uri())).unwrap();
    let err = search_arxiv(&client, "graphs", 5).await.unwrap_err();
    assert!(matches!(err, SearchError::Query(ClientError::Server { status: 503, .. })));
}

#[tokio::test]
async fn test_arxiv_garbage_body_is_feed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed><entry></feed>"))
        .mount(&server)
        .await;

    let client = ArxivClient::new(&Config::for_testing(&server.uri())).unwrap();
    let err = search_arxiv(&client, "graphs", 5).await.unwrap_err();
    assert!(matches!(err, SearchError::Query(ClientError::Feed(_))));
}

// =============================================================================
// Semantic Scholar
// =============================================================================

#[tokio::test]
async fn test_scholar_search_maps_and_skips_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "transformers"))
        .and(query_param("limit", "3"))
        .and(query_param("fields", fields::PAPER.join(",")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "offset": 0,
            "data": [
                scholar_paper("a", "First", 2020),
                {"paperId": "b", "year": "not a number"},
                {
                    "paperId": "c",
                    "title": "Open Access",
                    "openAccessPdf": {"url": "https://example.org/c.pdf", "status": "GREEN"}
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = search_scholar(&client, "transformers", 3).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title, "First");
    assert_eq!(papers[0].authors, "Ada Lovelace, Alan Turing");
    assert_eq!(papers[0].citations, Some(12));
    assert_eq!(papers[1].url.as_deref(), Some("https://example.org/c.pdf"));
    assert_eq!(papers[1].citations, Some(0));
    assert_eq!(papers[1].authors, "");
}

#[tokio::test]
async fn test_scholar_client_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(wiremock::matchers::header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::for_testing(&server.uri());
    config.api_key = Some("secret".to_string());
    let client = ScholarClient::new(&config).unwrap();

    let papers = search_scholar(&client, "anything", 5).await.unwrap();
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_author_fallback_fetches_each_publication() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "data": [{"authorId": "42", "name": "Ada Lovelace", "paperCount": 3}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/42/papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"paperId": "p1"}, {"paperId": "p2"}, {"title": "no id"}, {"paperId": "p3"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scholar_paper("p1", "One", 2019)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scholar_paper("p3", "Three", 2021)))
        .mount(&server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = search_by_author(&client, "Ada Lovelace", 10).await.unwrap();

    let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Three"]);
}

#[tokio::test]
async fn test_author_fallback_without_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "data": []})))
        .mount(&server)
        .await;

    let client = ScholarClient::new(&Config::for_testing(&server.uri())).unwrap();
    let err = search_by_author(&client, "nobody", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::NoAuthorMatch { .. }));
}

// =============================================================================
// Aggregator
// =============================================================================

#[tokio::test]
async fn test_aggregator_concatenates_providers_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "graph learning OR GCN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "data": [scholar_paper("s1", "Scholar Paper", 2022)]
        })))
        .mount(&server)
        .await;

    let mut aggregator = SearchAggregator::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = aggregator.search("graph learning", &["GCN".to_string()]).await;

    let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Graph Learning at Scale", "Message Passing & Friends", "", "Scholar Paper"]
    );
    assert_eq!(aggregator.papers().len(), 4);
}

#[tokio::test]
async fn test_aggregator_falls_back_when_search_fails() {
    let server = MockServer::start().await;
    mount_empty_arxiv(&server).await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"authorId": "7", "name": "Grace Hopper"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/7/papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"paperId": "g1"}]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scholar_paper("g1", "COBOL", 1959)))
        .mount(&server)
        .await;

    let mut aggregator = SearchAggregator::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = aggregator.search("Grace Hopper", &[]).await;

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "COBOL");
    assert_eq!(papers[0].year, Some(1959));
}

#[tokio::test]
async fn test_aggregator_survives_total_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut aggregator = SearchAggregator::new(&Config::for_testing(&server.uri())).unwrap();
    let papers = aggregator.search("anything", &[]).await;
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_aggregator_accumulates_across_searches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut aggregator = SearchAggregator::new(&Config::for_testing(&server.uri())).unwrap();
    aggregator.search("first", &[]).await;
    let papers = aggregator.search("second", &[]).await;
    assert_eq!(papers.len(), 6);
}

#[tokio::test]
async fn test_save_results_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [scholar_paper("s1", "Scholar Paper", 2022)]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&server.uri());
    config.output_dir = dir.path().join("nested");

    let mut aggregator = SearchAggregator::new(&config).unwrap();
    let papers = aggregator.search("graphs", &[]).await;
    let saved = aggregator.save_results("paper_results.json").unwrap();

    let body = std::fs::read_to_string(saved).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let restored: Vec<research_agent::Paper> =
        serde_json::from_value(value["papers"].clone()).unwrap();
    assert_eq!(restored, papers);
    assert!(body.contains("\n  "), "results are pretty-printed");
}
