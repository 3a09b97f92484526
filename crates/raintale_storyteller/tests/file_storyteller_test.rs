use raintale_core::{MementoData, RenderedStory, StoryData};
use raintale_storyteller::{FileStoryteller, Storyteller};
use raintale_surrogate::SurrogateClient;
use std::sync::Arc;

struct EmptyClient;

#[async_trait::async_trait]
impl SurrogateClient for EmptyClient {
    async fn memento_data(&self, _urim: &str, _fields: &[String]) -> MementoData {
        MementoData::default()
    }
}

const TEMPLATE: &str = "{# RAINTALE MULTIPART TEMPLATE #}\n\
{# RAINTALE TITLE PART #}\n\
{{ title }}\
{# RAINTALE ELEMENT PART #}\n\
{{ element.surrogate.title }}";

#[tokio::test]
async fn test_tell_story_writes_rendered_story_json() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("story-output.json");

    let story = StoryData::from_json_str(
        r#"{"title": "My Story", "elements": [{"type": "text", "value": "hi"}]}"#,
    )
    .unwrap();

    let teller = FileStoryteller::new(Arc::new(EmptyClient), &output_path);
    let output = teller.tell_story(&story, TEMPLATE).await.unwrap();

    assert_eq!(output.main_post, "My Story");

    let written: RenderedStory =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written, output);
}

#[tokio::test]
async fn test_publish_to_unwritable_path_fails() {
    let teller = FileStoryteller::new(
        Arc::new(EmptyClient),
        "/nonexistent-dir/story-output.json",
    );
    let output = RenderedStory::default();
    assert!(teller.publish_story(&output).await.is_err());
}
