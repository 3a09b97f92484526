use raintale_core::StoryData;
use raintale_error::{RaintaleErrorKind, VideoErrorKind};
use raintale_storyteller::Storyteller;
use raintale_surrogate::{MementoGatherer, MementoSnapshot};
use raintale_video::{Slide, VideoConfig, VideoStoryteller};
use std::path::PathBuf;
use std::sync::Arc;

/// Canned snapshots; serves a 1x1 PNG for any media URI.
struct StubGatherer;

#[async_trait::async_trait]
impl MementoGatherer for StubGatherer {
    async fn snapshot(&self, urim: &str) -> MementoSnapshot {
        MementoSnapshot {
            title: Some(format!("Title of {}", urim)),
            top_sentence: Some("A ranked sentence.".to_string()),
            top_image_uri: Some("https://archive.example/top.png".to_string()),
            ..Default::default()
        }
    }

    async fn fetch_media(&self, _uri: &str) -> Option<Vec<u8>> {
        let mut png = Vec::new();
        let image = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        image
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .ok()?;
        Some(png)
    }
}

/// Find a usable TTF font on this machine, or None to skip font-dependent
/// assertions.
fn find_font() -> Option<PathBuf> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
    ];
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

fn story() -> StoryData {
    StoryData::from_json_str(
        r#"{
            "title": "My Story",
            "generated_by": "raintale",
            "elements": [
                {"type": "link", "value": "https://archive.example/memento/1"},
                {"type": "text", "value": "an interlude"},
                {"type": "gif", "value": "spinning"}
            ]
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_storyboard_expands_links_into_text_and_image_slides() {
    let teller = VideoStoryteller::new(
        Arc::new(StubGatherer),
        VideoConfig::new("/nonexistent/font.ttf"),
        "out.mp4",
    );

    let storyboard = teller.generate_story(&story(), "").await.unwrap();

    assert_eq!(storyboard.title, "My Story");
    assert_eq!(storyboard.generated_by, "raintale");
    assert_eq!(
        storyboard.slides,
        vec![
            Slide::text_only(
                "Title of https://archive.example/memento/1\n\nA ranked sentence."
            ),
            Slide::image_only(Some("https://archive.example/top.png".to_string())),
            Slide::text_only("an interlude"),
        ]
    );
}

#[tokio::test]
async fn test_missing_font_is_a_fatal_resource_error() {
    let teller = VideoStoryteller::new(
        Arc::new(StubGatherer),
        VideoConfig::new("/nonexistent/font.ttf"),
        "out.mp4",
    );

    let storyboard = teller.generate_story(&story(), "").await.unwrap();
    let err = teller.publish_story(&storyboard).await.unwrap_err();

    match err.kind() {
        RaintaleErrorKind::Video(e) => {
            assert!(matches!(e.kind, VideoErrorKind::FontLoad { .. }))
        }
        other => panic!("expected video error, got {}", other),
    }
}

/// Serves bytes that are not a decodable image.
struct GarbageMediaGatherer;

#[async_trait::async_trait]
impl MementoGatherer for GarbageMediaGatherer {
    async fn snapshot(&self, _urim: &str) -> MementoSnapshot {
        MementoSnapshot {
            top_image_uri: Some("https://archive.example/broken.png".to_string()),
            ..Default::default()
        }
    }

    async fn fetch_media(&self, _uri: &str) -> Option<Vec<u8>> {
        Some(b"not an image".to_vec())
    }
}

#[tokio::test]
async fn test_undecodable_media_is_skipped_not_fatal() {
    let Some(font) = find_font() else {
        eprintln!("no usable font found, skipping");
        return;
    };

    let output = tempfile::tempdir().unwrap();
    let teller = VideoStoryteller::new(
        Arc::new(GarbageMediaGatherer),
        VideoConfig::new(font),
        output.path().join("story.mp4"),
    );

    let storyboard = teller.generate_story(&story(), "").await.unwrap();

    // Encoding may fail (ffmpeg may be unavailable), but a decode failure
    // never surfaces as the run's error; the slide is skipped instead.
    match teller.publish_story(&storyboard).await {
        Ok(()) => {}
        Err(err) => match err.kind() {
            RaintaleErrorKind::Video(e) => {
                assert!(!matches!(e.kind, VideoErrorKind::ImageDecode { .. }))
            }
            other => panic!("expected video error, got {}", other),
        },
    }
}

#[test]
fn test_square_images_keep_their_aspect_ratio_when_fitted() {
    let Some(font) = find_font() else {
        eprintln!("no usable font found, skipping");
        return;
    };

    let composer = raintale_video::FrameComposer::new(&VideoConfig::new(font)).unwrap();
    let square = image::RgbaImage::from_pixel(100, 100, image::Rgba([0, 255, 0, 255]));

    let fitted = composer.fit_image(&square);
    assert_eq!(fitted.width(), fitted.height());
    // 70% of the default 480px frame height.
    assert!(fitted.height() <= 336);
}

#[tokio::test]
async fn test_workspace_is_removed_on_every_exit_path() {
    let Some(font) = find_font() else {
        eprintln!("no usable font found, skipping");
        return;
    };

    let output = tempfile::tempdir().unwrap();
    let mut config = VideoConfig::new(font);
    // Unique prefix so leftovers are attributable to this run.
    config.workdir_prefix = format!("raintale-cleanup-test-{}-", std::process::id());

    let teller = VideoStoryteller::new(
        Arc::new(StubGatherer),
        config.clone(),
        output.path().join("story.mp4"),
    );

    let storyboard = teller.generate_story(&story(), "").await.unwrap();

    // The run may fail (ffmpeg may be unavailable); cleanup must happen
    // either way.
    let _ = teller.publish_story(&storyboard).await;

    let leftovers: Vec<_> = std::fs::read_dir(std::env::temp_dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with(&config.workdir_prefix)
        })
        .collect();
    assert!(leftovers.is_empty(), "workspace directories left behind");
}
