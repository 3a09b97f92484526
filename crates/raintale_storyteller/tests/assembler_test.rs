use raintale_core::{CommentPost, MementoData, StoryData};
use raintale_error::{RaintaleErrorKind, TemplateErrorKind};
use raintale_storyteller::StoryAssembler;
use raintale_surrogate::SurrogateClient;
use serde_json::json;
use std::sync::Mutex;

/// Canned surrogate data; records every request it serves.
#[derive(Default)]
struct StubClient {
    requests: Mutex<Vec<(String, Vec<String>)>>,
}

#[async_trait::async_trait]
impl SurrogateClient for StubClient {
    async fn memento_data(&self, urim: &str, fields: &[String]) -> MementoData {
        self.requests
            .lock()
            .unwrap()
            .push((urim.to_string(), fields.to_vec()));

        let mut data = MementoData::default();
        for field in fields {
            match field.as_str() {
                "title" => data.insert("title", json!("An Archived Page")),
                "best-image-uri" => {
                    data.insert("best-image-uri", json!("https://archive.example/img.png"))
                }
                "archive-favicon" => {
                    data.insert("archive-favicon", json!("https://archive.example/fav.ico"))
                }
                // Anything else stays absent, like a non-success response.
                _ => {}
            }
        }
        data
    }
}

const SIMPLE_TEMPLATE: &str = "{# RAINTALE MULTIPART TEMPLATE #}\n\
{# RAINTALE TITLE PART #}\n\
{{ title }}\
{# RAINTALE ELEMENT PART #}\n\
{{ element.surrogate.title }}";

#[tokio::test]
async fn test_text_only_story_end_to_end() {
    let story = StoryData::from_json_str(
        r#"{"title": "My Story", "elements": [{"type": "text", "value": "hi"}]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, SIMPLE_TEMPLATE)
        .await
        .unwrap();

    assert_eq!(rendered.main_post, "My Story");
    assert_eq!(rendered.comment_posts, vec![CommentPost::text_only("hi")]);
    // Text elements never reach the surrogate service.
    assert!(client.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_link_element_renders_surrogate_data() {
    let story = StoryData::from_json_str(
        r#"{"title": "t", "elements": [
            {"type": "link", "value": "https://archive.example/memento/1"}
        ]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, SIMPLE_TEMPLATE)
        .await
        .unwrap();

    assert_eq!(rendered.comment_posts.len(), 1);
    assert_eq!(rendered.comment_posts[0].text, "An Archived Page");
    assert!(rendered.comment_posts[0].media.is_empty());

    let requests = client.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "https://archive.example/memento/1");
    assert_eq!(requests[0].1, vec!["title".to_string()]);
}

#[tokio::test]
async fn test_media_templates_produce_ordered_media() {
    let template = "{# RAINTALE MULTIPART TEMPLATE #}\n\
{# RAINTALE TITLE PART #}\n\
{{ title }}\
{# RAINTALE ELEMENT PART #}\n\
{{ element.surrogate.title }}\
{# RAINTALE ELEMENT MEDIA #}\n\
{{ element.surrogate['best-image-uri'] }}\n\
{{ element.surrogate['archive-favicon'] }}\n";

    let story = StoryData::from_json_str(
        r#"{"title": "t", "elements": [
            {"type": "link", "value": "https://archive.example/memento/1"}
        ]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, template)
        .await
        .unwrap();

    // Media order matches the media templates' declared order, even though
    // the per-field lookups are issued concurrently.
    assert_eq!(
        rendered.comment_posts[0].media,
        vec![
            "https://archive.example/img.png".to_string(),
            "https://archive.example/fav.ico".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_bad_elements_are_skipped_not_fatal() {
    let story = StoryData::from_json_str(
        r#"{"title": "t", "elements": [
            {"type": "link"},
            {"type": "gif", "value": "spinning"},
            {"type": "text", "value": "hello"}
        ]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, SIMPLE_TEMPLATE)
        .await
        .unwrap();

    // Only the valid element survives, and processing reached it.
    assert_eq!(rendered.comment_posts, vec![CommentPost::text_only("hello")]);
}

#[tokio::test]
async fn test_comment_count_never_exceeds_element_count() {
    let story = StoryData::from_json_str(
        r#"{"title": "t", "elements": [
            {"type": "link", "value": "https://archive.example/memento/1"},
            {"type": "unknown"},
            {"type": "text", "value": "a"},
            {"type": "text", "value": "b"}
        ]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, SIMPLE_TEMPLATE)
        .await
        .unwrap();

    assert!(rendered.comment_posts.len() <= story.elements().len());
    assert_eq!(rendered.comment_posts.len(), 3);
}

#[tokio::test]
async fn test_absent_surrogate_data_degrades_to_blanks() {
    let template = "{# RAINTALE MULTIPART TEMPLATE #}\n\
{# RAINTALE TITLE PART #}\n\
{{ title }}\
{# RAINTALE ELEMENT PART #}\n\
[{{ element.surrogate.snippet }}]";

    let story = StoryData::from_json_str(
        r#"{"title": "t", "elements": [
            {"type": "link", "value": "https://archive.example/memento/1"}
        ]}"#,
    )
    .unwrap();

    let client = StubClient::default();
    let rendered = StoryAssembler::new()
        .render(&story, &client, template)
        .await
        .unwrap();

    assert_eq!(rendered.comment_posts[0].text, "[]");
}

#[tokio::test]
async fn test_structural_template_error_aborts_the_run() {
    let story =
        StoryData::from_json_str(r#"{"title": "t", "elements": []}"#).unwrap();

    let client = StubClient::default();
    let err = StoryAssembler::new()
        .render(&story, &client, "{{ title }}")
        .await
        .unwrap_err();

    match err.kind() {
        RaintaleErrorKind::Template(e) => {
            assert_eq!(e.kind, TemplateErrorKind::MissingMultipartMarker)
        }
        other => panic!("expected template error, got {}", other),
    }
}
