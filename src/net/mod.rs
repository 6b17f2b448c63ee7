// SPDX-License-Identifier: MPL-2.0
//! Remote image specs, URL generation, and fetching.
//!
//! Gallery images come from a seeded placeholder service; a seed plus target
//! dimensions fully determines the URL, so list rows stay stable across
//! re-renders and the same seed always yields the same picture.

use crate::error::{Error, Result};
use iced::widget::image;
use rand::Rng;
use std::ops::RangeInclusive;

/// Range the random default seed is drawn from.
pub const SEED_RANGE: RangeInclusive<u32> = 0..=100_000;

/// Default edge length for generated image specs.
pub const DEFAULT_IMAGE_SIZE: u32 = 300;

/// A seeded remote image request: `<host>/seed/<seed>/<width>/<height>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub seed: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageSpec {
    #[must_use]
    pub fn new(seed: u32, width: u32, height: u32) -> Self {
        Self {
            seed,
            width,
            height,
        }
    }

    /// A square spec at the default size.
    #[must_use]
    pub fn square(seed: u32, size: u32) -> Self {
        Self::new(seed, size, size)
    }

    /// A spec with a random seed at the default 300x300 size.
    #[must_use]
    pub fn sample() -> Self {
        let seed = rand::thread_rng().gen_range(SEED_RANGE);
        Self::square(seed, DEFAULT_IMAGE_SIZE)
    }

    /// Renders the request URL against the given image host.
    #[must_use]
    pub fn url(&self, host: &str) -> String {
        format!(
            "{}/seed/{}/{}/{}",
            host.trim_end_matches('/'),
            self.seed,
            self.width,
            self.height
        )
    }
}

/// Builds the list screen's item specs: `count` squares at `size`, seeded
/// sequentially so keys are unique by construction.
#[must_use]
pub fn gallery_items(count: u32, size: u32) -> Vec<ImageSpec> {
    (0..count).map(|seed| ImageSpec::square(seed, size)).collect()
}

/// A fetched and decoded remote image, ready for the image widget.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl RemoteImage {
    /// Creates a `RemoteImage` from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Fetches and decodes a remote image.
///
/// One-shot GET with no retry; a failure is reported once and the caller
/// renders a placeholder.
pub async fn fetch_image(url: String) -> Result<RemoteImage> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(RemoteImage::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_places_seed_width_and_height_in_template_positions() {
        let spec = ImageSpec::new(42, 300, 200);
        assert_eq!(
            spec.url("https://picsum.photos"),
            "https://picsum.photos/seed/42/300/200"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash_on_host() {
        let spec = ImageSpec::square(7, 64);
        assert_eq!(
            spec.url("https://picsum.photos/"),
            "https://picsum.photos/seed/7/64/64"
        );
    }

    #[test]
    fn sample_uses_default_dimensions() {
        let spec = ImageSpec::sample();
        assert_eq!(spec.width, DEFAULT_IMAGE_SIZE);
        assert_eq!(spec.height, DEFAULT_IMAGE_SIZE);
    }

    #[test]
    fn sample_seed_stays_in_range() {
        for _ in 0..100 {
            let spec = ImageSpec::sample();
            assert!(SEED_RANGE.contains(&spec.seed));
        }
    }

    #[test]
    fn gallery_items_have_unique_sequential_seeds() {
        let items = gallery_items(40, 300);
        assert_eq!(items.len(), 40);
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.seed, index as u32);
            assert_eq!(item.width, 300);
            assert_eq!(item.height, 300);
        }
    }

    #[test]
    fn remote_image_from_rgba_keeps_dimensions() {
        let image = RemoteImage::from_rgba(2, 3, vec![255; 2 * 3 * 4]);
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 3);
    }

    #[tokio::test]
    async fn fetch_image_reports_connection_failure_as_http_error() {
        // Nothing listens on port 1; the request fails before any decoding.
        let result = fetch_image("http://127.0.0.1:1/seed/0/1/1".to_string()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
