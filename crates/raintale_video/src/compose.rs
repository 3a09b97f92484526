//! Frame composition: base frames, text slides, and image placement.

use crate::VideoConfig;
use ab_glyph::{FontVec, PxScale};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use raintale_error::{VideoError, VideoErrorKind};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

const TITLE_SCALE: f32 = 20.0;
const METADATA_SCALE: f32 = 16.0;
const SENTENCE_SCALE: f32 = 40.0;

/// Text longer than this is word-wrapped before drawing.
const WRAP_THRESHOLD: usize = 60;
/// Wrapped lines are at most this many characters.
const WRAP_WIDTH: usize = 40;

/// Builds the frames the video storyteller fades between.
///
/// All frames share the configured video geometry. Content images are scaled
/// to fit within 70% of the frame dimensions, preserving aspect ratio, and
/// composited centered over the base frame.
pub struct FrameComposer {
    width: u32,
    height: u32,
    content_width: f32,
    content_height: f32,
    font: FontVec,
}

impl FrameComposer {
    /// Create a composer for the configured geometry, loading its font.
    ///
    /// # Errors
    ///
    /// Fails when the configured font file cannot be read or parsed.
    pub fn new(config: &VideoConfig) -> Result<Self, VideoError> {
        let font_bytes = std::fs::read(&config.font_path).map_err(|e| {
            VideoError::new(VideoErrorKind::FontLoad {
                path: config.font_path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let font = FontVec::try_from_vec(font_bytes).map_err(|e| {
            VideoError::new(VideoErrorKind::FontLoad {
                path: config.font_path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let (content_width, content_height) = config.content_box();

        Ok(Self {
            width: config.width,
            height: config.height,
            content_width,
            content_height,
            font,
        })
    }

    /// A solid black frame with no text.
    pub fn blank_frame(&self) -> RgbaImage {
        RgbaImage::from_pixel(self.width, self.height, BLACK)
    }

    /// The base frame: black, stamped with the story title and a
    /// "Generated by" caption.
    ///
    /// Every element fades from and back to this frame; it never advances
    /// between elements.
    pub fn base_frame(&self, title: &str, generated_by: &str) -> RgbaImage {
        let mut frame = self.blank_frame();
        self.draw_text(&mut frame, title, 10, 10, TITLE_SCALE);
        self.draw_text(
            &mut frame,
            &format!("Generated by {}", generated_by),
            30,
            self.height as i32 - 30,
            METADATA_SCALE,
        );
        frame
    }

    /// A text slide: word-wrapped sentence text on a blank frame.
    pub fn text_frame(&self, text: &str) -> RgbaImage {
        let text = if text.len() > WRAP_THRESHOLD {
            wrap_text(text, WRAP_WIDTH).join("\n")
        } else {
            text.to_string()
        };

        tracing::debug!("writing sentence item {}", text);

        let mut frame = self.blank_frame();
        self.draw_text(&mut frame, &text, 0, 0, SENTENCE_SCALE);
        frame
    }

    /// The terminal frame: the base frame stamped "The End".
    pub fn end_frame(&self, base: &RgbaImage) -> RgbaImage {
        let mut frame = base.clone();
        self.draw_text(&mut frame, "The End", 40, 40, SENTENCE_SCALE);
        frame
    }

    /// Scale an image to fit within 70% of the frame dimensions, preserving
    /// aspect ratio.
    pub fn fit_image(&self, im: &RgbaImage) -> RgbaImage {
        let im_width = im.width() as f32;
        let im_height = im.height() as f32;

        tracing::debug!(
            "original image size {} x {}, video size is {} x {}",
            im_width,
            im_height,
            self.width,
            self.height
        );

        let (new_width, new_height) =
            fit_dimensions(im_width, im_height, self.content_width, self.content_height);

        tracing::debug!("resizing image to {} x {}", new_width, new_height);

        image::imageops::resize(
            im,
            new_width as u32,
            new_height as u32,
            FilterType::CatmullRom,
        )
    }

    /// Composite a content image centered over a copy of the base frame.
    pub fn composite_centered(&self, base: &RgbaImage, im: &RgbaImage) -> RgbaImage {
        let mut frame = base.clone();
        let x = (self.width.saturating_sub(im.width()) / 2) as i64;
        let y = (self.height.saturating_sub(im.height()) / 2) as i64;
        tracing::debug!("offset is ({}, {})", x, y);
        image::imageops::overlay(&mut frame, im, x, y);
        frame
    }

    fn draw_text(&self, frame: &mut RgbaImage, text: &str, x: i32, y: i32, scale: f32) {
        let px_scale = PxScale::from(scale);
        let line_height = scale.ceil() as i32;
        for (index, line) in text.lines().enumerate() {
            draw_text_mut(
                frame,
                WHITE,
                x,
                y + index as i32 * line_height,
                px_scale,
                &self.font,
                line,
            );
        }
    }
}

/// Target dimensions for scaling an image into a content box, preserving
/// aspect ratio.
///
/// The scale factor comes from the larger image dimension; a square image
/// uses one uniform factor, the tighter of the two, so neither dimension
/// overflows the box.
fn fit_dimensions(
    im_width: f32,
    im_height: f32,
    content_width: f32,
    content_height: f32,
) -> (f32, f32) {
    if im_width > im_height {
        (content_width, (content_width / im_width) * im_height)
    } else if im_height > im_width {
        ((content_height / im_height) * im_width, content_height)
    } else {
        let factor = (content_width / im_width).min(content_height / im_height);
        (im_width * factor, im_height * factor)
    }
}

/// Blend two equally sized frames: `alpha` 0.0 yields `from`, 1.0 yields
/// `to`.
pub fn blend_frames(from: &RgbaImage, to: &RgbaImage, alpha: f32) -> RgbaImage {
    let mut out = from.clone();
    for (dst, src) in out.pixels_mut().zip(to.pixels()) {
        for channel in 0..4 {
            let a = dst.0[channel] as f32;
            let b = src.0[channel] as f32;
            dst.0[channel] = (a + (b - a) * alpha).round() as u8;
        }
    }
    out
}

/// Greedy word wrap to lines of at most `width` characters.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|line| line.len() <= 15));
        assert_eq!(
            lines.join(" "),
            "the quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn wrap_keeps_short_text_whole() {
        assert_eq!(wrap_text("short", 40), vec!["short".to_string()]);
    }

    #[test]
    fn square_images_scale_uniformly_within_the_content_box() {
        let (width, height) = fit_dimensions(100.0, 100.0, 600.0, 300.0);
        assert_eq!(width, height);
        assert_eq!(width, 300.0);

        // The tighter box dimension wins either way around.
        let (width, height) = fit_dimensions(100.0, 100.0, 300.0, 600.0);
        assert_eq!((width, height), (300.0, 300.0));
    }

    #[test]
    fn fit_scales_from_the_larger_image_dimension() {
        let (width, height) = fit_dimensions(200.0, 100.0, 600.0, 300.0);
        assert_eq!((width, height), (600.0, 300.0));

        let (width, height) = fit_dimensions(100.0, 200.0, 600.0, 300.0);
        assert_eq!((width, height), (150.0, 300.0));
    }

    #[test]
    fn blend_endpoints_reproduce_inputs() {
        let from = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let to = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 255]));

        assert_eq!(blend_frames(&from, &to, 0.0), from);
        assert_eq!(blend_frames(&from, &to, 1.0), to);

        let half = blend_frames(&from, &to, 0.5);
        assert_eq!(half.get_pixel(0, 0).0, [100, 50, 25, 255]);
    }
}
