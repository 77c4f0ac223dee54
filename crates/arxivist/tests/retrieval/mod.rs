use super::*;

#[tokio::test]
async fn test_single_entry_record() -> TestResult<()> {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string(ATTENTION_FEED)).await;

  let record = pipeline_for(&server).lookup("1706.03762").await?;

  assert_eq!(record.id, "http://arxiv.org/abs/1706.03762v7");
  assert_eq!(record.title, "Attention Is All You Need");
  assert_eq!(record.summary, "");
  assert_eq!(record.published, "2017-06-12T17:57:34Z");
  assert_eq!(record.updated, "2023-08-02T00:41:18Z");
  assert_eq!(record.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
  Ok(())
}

#[tokio::test]
async fn test_end_to_end_default_template() -> TestResult<()> {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string(ATTENTION_FEED)).await;

  let extract = pipeline_for(&server).retrieve("1706.03762", &Template::default()).await?;

  assert_eq!(extract, "Attention Is All You Need\nAshish Vaswani, Noam Shazeer\n");
  Ok(())
}

#[tokio::test]
async fn test_custom_template() -> TestResult<()> {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string(ATTENTION_FEED)).await;

  let template = Template::new("[{{title}}]({{id}}) {{published}} {{doi}}");
  let extract = pipeline_for(&server).retrieve("1706.03762", &template).await?;

  assert_eq!(
    extract,
    "[Attention Is All You Need](http://arxiv.org/abs/1706.03762v7) 2017-06-12T17:57:34Z {{doi}}"
  );
  Ok(())
}

#[tokio::test]
async fn test_old_style_identifier_is_escaped() -> TestResult<()> {
  let server = MockServer::start().await;
  serve(&server, "math.GT/0309136", ResponseTemplate::new(200).set_body_string(ATTENTION_FEED))
    .await;

  let record = pipeline_for(&server).lookup("math.GT/0309136").await?;
  assert_eq!(record.title, "Attention Is All You Need");

  let requests = server.received_requests().await.unwrap_or_default();
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0].url.query(), Some("id_list=math.GT%2F0309136"));
  Ok(())
}

#[tokio::test]
async fn test_empty_feed_is_not_found() {
  let server = MockServer::start().await;
  serve(&server, "nonexistent.0000", ResponseTemplate::new(200).set_body_string(EMPTY_FEED)).await;

  let err = pipeline_for(&server)
    .retrieve("nonexistent.0000", &Template::default())
    .await
    .unwrap_err();

  assert!(matches!(err, RetrievalError::NotFound { .. }));
  assert_eq!(err.to_string(), "nonexistent.0000 not found on arXiv.");
}

#[tokio::test]
async fn test_catalog_error_entry_is_not_found() {
  let server = MockServer::start().await;
  serve(&server, "not-an-id", ResponseTemplate::new(200).set_body_string(ERROR_ENTRY_FEED)).await;

  let err = pipeline_for(&server).lookup("not-an-id").await.unwrap_err();
  assert!(matches!(err, RetrievalError::NotFound { .. }));
}

#[tokio::test]
async fn test_error_status_is_transport_failure() {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(503).set_body_string("Service Unavailable"))
    .await;

  let err = pipeline_for(&server).lookup("1706.03762").await.unwrap_err();
  assert!(matches!(
    err,
    RetrievalError::TransportFailure { source: TransportError::Status { status: 503, .. }, .. }
  ));
  assert_eq!(err.to_string(), "Failed to get arXiv. Check your internet connection.");
}

#[tokio::test]
async fn test_unreachable_catalog_is_transport_failure() -> TestResult<()> {
  // Nothing listens on the port once the listener is dropped.
  let address = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?;
  let settings =
    Settings { endpoint: format!("http://{address}/api/query?id_list="), ..Settings::default() };

  let err = settings.pipeline().lookup("1706.03762").await.unwrap_err();
  assert!(matches!(
    err,
    RetrievalError::TransportFailure { source: TransportError::Request(_), .. }
  ));
  Ok(())
}

#[tokio::test]
async fn test_garbage_body_is_not_found() {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string("<html><p>oops")).await;

  let err = pipeline_for(&server).lookup("1706.03762").await.unwrap_err();
  assert!(matches!(err, RetrievalError::NotFound { .. }));
}

#[tokio::test]
async fn test_multiple_entries_take_first() -> TestResult<()> {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string(TWO_ENTRY_FEED)).await;

  let record = pipeline_for(&server).lookup("1706.03762").await?;

  assert_eq!(record.title, "Attention Is All You Need");
  assert_eq!(record.summary, "First.");
  Ok(())
}

#[tokio::test]
async fn test_multiple_entries_rejected_by_policy() {
  let server = MockServer::start().await;
  serve(&server, "1706.03762", ResponseTemplate::new(200).set_body_string(TWO_ENTRY_FEED)).await;

  let settings = Settings { entry_policy: EntryPolicy::Reject, ..settings_for(&server) };
  let err = settings.pipeline().lookup("1706.03762").await.unwrap_err();

  match err {
    RetrievalError::DisambiguationUnresolved { identifier, candidates } => {
      assert_eq!(identifier, "1706.03762");
      assert_eq!(candidates, vec![
        "http://arxiv.org/abs/1706.03762v7",
        "http://arxiv.org/abs/1810.04805v2"
      ]);
    },
    other => panic!("expected an unresolved disambiguation, got {other:?}"),
  }
}
