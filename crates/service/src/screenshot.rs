use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage};
use tracing::warn;

use crate::errors::ServiceError;

/// Screenshot payloads above this many encoded characters are re-encoded
/// before they reach the store.
pub const SHRINK_THRESHOLD_CHARS: usize = 1_000_000;

/// Re-encodes an oversized screenshot payload. Input and output share
/// framing: a `data:` URL stays a `data:` URL, bare base64 stays bare.
/// Implementations must be safe to call from the blocking pool.
pub trait ImageShrinker: Send + Sync {
    fn shrink(&self, encoded: String) -> Result<String, ServiceError>;
}

/// Stores the payload unchanged. Useful as a test double or when payload
/// size is capped upstream.
pub struct PassthroughShrinker;

impl ImageShrinker for PassthroughShrinker {
    fn shrink(&self, encoded: String) -> Result<String, ServiceError> {
        Ok(encoded)
    }
}

/// Lossy JPEG re-encoder. Walks quality down first, then downscales, until
/// the re-encoded payload fits `target_chars` or the image reaches
/// `min_dimension` on its shorter side (best effort at that point).
///
/// Payloads that do not decode as base64 images are stored as submitted;
/// customers paste screenshots from arbitrary sources and a rejected order
/// costs more than an oversized row.
pub struct JpegShrinker {
    pub target_chars: usize,
    pub min_dimension: u32,
    pub start_quality: u8,
    pub min_quality: u8,
}

impl Default for JpegShrinker {
    fn default() -> Self {
        Self {
            target_chars: SHRINK_THRESHOLD_CHARS,
            min_dimension: 200,
            start_quality: 80,
            min_quality: 40,
        }
    }
}

impl ImageShrinker for JpegShrinker {
    fn shrink(&self, encoded: String) -> Result<String, ServiceError> {
        let (is_data_url, b64) = split_data_url(&encoded);
        let Ok(bytes) = BASE64.decode(b64.as_bytes()) else {
            warn!(chars = encoded.len(), "screenshot is not valid base64, storing as submitted");
            return Ok(encoded);
        };
        let Ok(mut img) = image::load_from_memory(&bytes) else {
            warn!(chars = encoded.len(), "screenshot is not a decodable image, storing as submitted");
            return Ok(encoded);
        };

        let mut quality = self.start_quality;
        loop {
            let jpeg = encode_jpeg(&img, quality)?;
            let out = if is_data_url {
                format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg))
            } else {
                BASE64.encode(&jpeg)
            };
            if out.len() <= self.target_chars {
                return Ok(out);
            }
            if quality > self.min_quality {
                quality = quality.saturating_sub(10).max(self.min_quality);
                continue;
            }
            let (w, h) = (img.width(), img.height());
            if w.min(h) <= self.min_dimension {
                return Ok(out);
            }
            img = img.resize(scale_down(w), scale_down(h), FilterType::Lanczos3);
            quality = self.start_quality;
        }
    }
}

fn scale_down(dim: u32) -> u32 {
    (dim * 7 / 10).max(1)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ServiceError> {
    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&rgb)
        .map_err(|e| ServiceError::Screenshot(e.to_string()))?;
    Ok(buf.into_inner())
}

fn split_data_url(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix("data:") {
        if let Some(idx) = rest.find("base64,") {
            return (true, &rest[idx + "base64,".len()..]);
        }
    }
    (false, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic RGB noise; noise defeats PNG compression, which keeps
    /// the encoded input comfortably above the shrink threshold.
    fn noise_image(w: u32, h: u32) -> image::RgbImage {
        let mut state = 0x1234_5678u32;
        image::RgbImage::from_fn(w, h, |x, y| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let v = state
                .wrapping_add(x.wrapping_mul(31))
                .wrapping_add(y.wrapping_mul(17));
            image::Rgb([(v & 0xff) as u8, ((v >> 8) & 0xff) as u8, ((v >> 16) & 0xff) as u8])
        })
    }

    fn png_base64(w: u32, h: u32) -> String {
        let img = DynamicImage::ImageRgb8(noise_image(w, h));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).expect("encode png");
        BASE64.encode(buf.into_inner())
    }

    #[test]
    fn oversized_image_is_reencoded_under_the_target() {
        let input = png_base64(640, 640);
        assert!(input.len() > SHRINK_THRESHOLD_CHARS, "fixture must exceed the threshold");

        let out = JpegShrinker::default().shrink(input.clone()).expect("shrink");
        assert_ne!(out, input);
        assert!(out.len() <= SHRINK_THRESHOLD_CHARS);

        let bytes = BASE64.decode(out.as_bytes()).expect("output is base64");
        image::load_from_memory(&bytes).expect("output decodes as an image");
    }

    #[test]
    fn small_targets_force_downscaling() {
        let shrinker = JpegShrinker {
            target_chars: 20_000,
            min_dimension: 16,
            ..JpegShrinker::default()
        };
        let out = shrinker.shrink(png_base64(640, 640)).expect("shrink");
        assert!(out.len() <= 20_000);
    }

    #[test]
    fn data_url_framing_is_preserved() {
        let input = format!("data:image/png;base64,{}", png_base64(640, 640));
        let out = JpegShrinker::default().shrink(input).expect("shrink");
        assert!(out.starts_with("data:image/jpeg;base64,"));
        let b64 = out.trim_start_matches("data:image/jpeg;base64,");
        let bytes = BASE64.decode(b64.as_bytes()).expect("output is base64");
        image::load_from_memory(&bytes).expect("output decodes as an image");
    }

    #[test]
    fn non_base64_payload_is_stored_as_submitted() {
        let input = "!!! definitely not base64 !!!".to_string();
        let out = JpegShrinker::default().shrink(input.clone()).expect("shrink");
        assert_eq!(out, input);
    }

    #[test]
    fn base64_of_non_image_bytes_is_stored_as_submitted() {
        let input = BASE64.encode(b"just some text, no image header");
        let out = JpegShrinker::default().shrink(input.clone()).expect("shrink");
        assert_eq!(out, input);
    }
}
