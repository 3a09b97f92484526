use raintale_surrogate::{
    MementoEmbedClient, SurrogateClient, SurrogateConfig, SurrogateEndpoint,
};

fn unreachable_client() -> MementoEmbedClient {
    // TCP port 1 refuses connections; keep the timeout short so a
    // firewalled environment that drops packets fails fast too.
    let mut config = SurrogateConfig::new("http://127.0.0.1:1");
    config.timeout_secs = 1;
    MementoEmbedClient::new(config).unwrap()
}

#[tokio::test]
async fn test_unreachable_service_means_fields_absent_not_fatal() {
    let client = unreachable_client();

    let fields = vec!["title".to_string(), "archive-name".to_string()];
    let data = client
        .memento_data("https://archive.example/memento/1", &fields)
        .await;

    // Every field degrades to absent; no error surfaces to the caller.
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_no_body() {
    let client = unreachable_client();

    let body = client
        .endpoint_data(
            SurrogateEndpoint::Contentdata,
            "https://archive.example/memento/1",
        )
        .await;
    assert!(body.is_none());
}

#[tokio::test]
async fn test_unreachable_media_fetch_yields_none() {
    let client = unreachable_client();
    assert!(client.fetch_media("http://127.0.0.1:1/img.png").await.is_none());
}
