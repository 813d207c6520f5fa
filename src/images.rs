//! Remote image loading for card thumbnails and hero backdrops.
//!
//! Fetches run on tokio tasks bounded by a semaphore, with a disk cache so
//! restarts don't refetch. Decoded pixels come back to the UI thread as
//! [`Msg::ImageDecoded`] and are uploaded as egui textures there. A failed
//! URL is remembered and degrades silently to the loading placeholder.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use eframe::egui;
use tokio::sync::Semaphore;

use crate::app_state::Msg;
use crate::logger::{log_error, log_line};

pub fn image_cache_dir() -> PathBuf {
    let dir = directories::ProjectDirs::from("com", "marquee", "Marquee")
        .map(|dirs| dirs.cache_dir().join("images"))
        .unwrap_or_else(|| PathBuf::from("image-cache"));
    let _ = std::fs::create_dir_all(&dir);
    dir
}

pub fn image_cache_path(url: &str) -> PathBuf {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    image_cache_dir().join(format!("{:x}.img", hasher.finish()))
}

pub struct ImageManager {
    loading: HashSet<String>,
    failed: HashSet<String>,
    textures: HashMap<String, egui::TextureHandle>,
    load_semaphore: Arc<Semaphore>,
}

impl Default for ImageManager {
    fn default() -> Self {
        Self::new(6)
    }
}

impl ImageManager {
    pub fn new(concurrent_loads: usize) -> Self {
        Self {
            loading: HashSet::new(),
            failed: HashSet::new(),
            textures: HashMap::new(),
            load_semaphore: Arc::new(Semaphore::new(concurrent_loads)),
        }
    }

    pub fn texture(&self, url: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(url)
    }

    /// Kick off a background fetch+decode unless the URL is already cached,
    /// in flight, or known bad.
    pub fn request(&mut self, url: &str, tx: &Sender<Msg>, ctx: &egui::Context) {
        if self.textures.contains_key(url)
            || self.loading.contains(url)
            || self.failed.contains(url)
        {
            return;
        }
        self.loading.insert(url.to_string());

        let url = url.to_string();
        let tx = tx.clone();
        let ctx = ctx.clone();
        let semaphore = self.load_semaphore.clone();
        tokio::spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_) => return, // semaphore closed, app is shutting down
            };
            let msg = match fetch_and_decode(&url).await {
                Ok((rgba, width, height)) => Msg::ImageDecoded {
                    url,
                    rgba,
                    width,
                    height,
                },
                Err(e) => {
                    log_line(&format!("image load failed for {}: {}", url, e));
                    Msg::ImageFailed { url }
                }
            };
            if tx.send(msg).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    /// Apply a background result on the UI thread.
    pub fn handle(&mut self, msg: Msg, ctx: &egui::Context) {
        match msg {
            Msg::ImageDecoded {
                url,
                rgba,
                width,
                height,
            } => {
                self.loading.remove(&url);
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [width as usize, height as usize],
                    &rgba,
                );
                let texture =
                    ctx.load_texture(url.clone(), color_image, egui::TextureOptions::LINEAR);
                self.textures.insert(url, texture);
            }
            Msg::ImageFailed { url } => {
                self.loading.remove(&url);
                self.failed.insert(url);
            }
        }
    }
}

async fn fetch_and_decode(
    url: &str,
) -> Result<(Vec<u8>, u32, u32), Box<dyn std::error::Error + Send + Sync>> {
    let bytes = load_bytes_with_cache(url).await?;
    let dynamic = image::load_from_memory(&bytes)?;
    let rgba = dynamic.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

async fn load_bytes_with_cache(
    url: &str,
) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let cache_path = image_cache_path(url);
    if cache_path.exists() {
        if let Ok(data) = tokio::fs::read(&cache_path).await {
            return Ok(data);
        }
    }

    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()).into());
    }
    let data = response.bytes().await?.to_vec();

    if let Err(e) = tokio::fs::write(&cache_path, &data).await {
        log_error("failed to cache image", &e);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_is_stable_per_url() {
        let a = image_cache_path("https://example.com/a.jpg");
        let b = image_cache_path("https://example.com/a.jpg");
        let c = image_cache_path("https://example.com/b.jpg");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
