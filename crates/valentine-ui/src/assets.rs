use std::path::{Path, PathBuf};

use tracing::{info, warn};
use valentine_platform::{AssetSource, Result, RgbaImage};

/// Resolves logical paths against a directory on disk, the way a web root would.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, logical_path: &str) -> PathBuf {
        self.root.join(logical_path.trim_start_matches('/'))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FsAssets {
    fn load_image(&self, logical_path: &str) -> Result<RgbaImage> {
        let path = self.resolve(logical_path);
        let decoded = image::open(&path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(RgbaImage {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }
}

/// Moon artwork, resolved the first time the night scene is drawn.
pub enum MoonArt {
    Pending,
    Loaded(egui::TextureHandle),
    Broken,
}

impl MoonArt {
    pub fn ensure_loaded(&mut self, ctx: &egui::Context, assets: &impl AssetSource, logical_path: &str) {
        if !matches!(self, MoonArt::Pending) {
            return;
        }
        *self = match assets.load_image(logical_path) {
            Ok(decoded) => {
                info!("moon image {logical_path} loaded ({}x{})", decoded.width, decoded.height);
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [decoded.width as usize, decoded.height as usize],
                    &decoded.pixels,
                );
                MoonArt::Loaded(ctx.load_texture("moon", image, egui::TextureOptions::LINEAR))
            }
            Err(err) => {
                warn!("moon image {logical_path} unavailable, drawing placeholder: {err}");
                MoonArt::Broken
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Source that never finds anything and counts how often it was asked.
    #[derive(Default)]
    struct EmptyShelf {
        lookups: Cell<usize>,
    }

    impl AssetSource for EmptyShelf {
        fn load_image(&self, logical_path: &str) -> Result<RgbaImage> {
            self.lookups.set(self.lookups.get() + 1);
            Err(format!("{logical_path} not found").into())
        }
    }

    #[test]
    fn logical_paths_are_rooted_in_asset_dir() {
        let assets = FsAssets::new("/srv/card");
        assert_eq!(assets.resolve("/fullmoon.png"), PathBuf::from("/srv/card/fullmoon.png"));
        assert_eq!(assets.resolve("img/moon.png"), PathBuf::from("/srv/card/img/moon.png"));
    }

    #[test]
    fn missing_image_is_an_error() {
        let assets = FsAssets::new("/nonexistent-valentine-assets");
        assert!(assets.load_image("/fullmoon.png").is_err());
    }

    #[test]
    fn failed_moon_is_looked_up_once() {
        let ctx = egui::Context::default();
        let shelf = EmptyShelf::default();
        let mut moon = MoonArt::Pending;
        moon.ensure_loaded(&ctx, &shelf, "/fullmoon.png");
        moon.ensure_loaded(&ctx, &shelf, "/fullmoon.png");
        assert!(matches!(moon, MoonArt::Broken));
        assert_eq!(shelf.lookups.get(), 1);
    }
}
