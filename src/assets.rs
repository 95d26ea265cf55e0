//! Tip image resolution
//!
//! Turns an [`AssetId`] into an egui texture. Ids are looked up among the
//! bytes a host registered with [`register`] first, then among the images
//! embedded in the crate. Decoded textures are cached in egui memory, and so
//! are failures, which are only logged the first time.

use egui::{ColorImage, Context, Id, TextureHandle, TextureOptions};
use std::sync::Arc;
use thiserror::Error;

use crate::page_state::AssetId;

const TIP_PNG: &[u8] = include_bytes!("../assets/tip.png");

/// Images shipped with the crate
const BUILTIN: &[(&str, &[u8])] = &[("tip", TIP_PNG)];

/// Errors from resolving or decoding an image asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Unknown image asset: {0}")]
    Unknown(String),

    #[error("Failed to decode image asset {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Cached outcome of loading one asset; `None` means loading failed
#[derive(Clone)]
struct CachedTexture(Option<TextureHandle>);

fn texture_key(id: &AssetId) -> Id {
    Id::new(("statelayout.texture", id.as_str()))
}

fn bytes_key(id: &AssetId) -> Id {
    Id::new(("statelayout.bytes", id.as_str()))
}

/// Bytes of an image embedded in the crate
pub fn builtin(id: &AssetId) -> Option<&'static [u8]> {
    BUILTIN
        .iter()
        .find(|(name, _)| *name == id.as_str())
        .map(|(_, bytes)| *bytes)
}

/// Make PNG bytes available under `id`, replacing any earlier texture for it
pub fn register(ctx: &Context, id: AssetId, bytes: Arc<[u8]>) {
    tracing::debug!("Registered image asset {} ({} bytes)", id, bytes.len());
    ctx.data_mut(|d| {
        d.remove::<CachedTexture>(texture_key(&id));
        d.insert_temp(bytes_key(&id), bytes);
    });
}

/// Decode PNG bytes into an egui image
pub fn decode(name: &str, bytes: &[u8]) -> Result<ColorImage, AssetError> {
    let image = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?
        .into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

fn load(ctx: &Context, id: &AssetId) -> Result<TextureHandle, AssetError> {
    let registered: Option<Arc<[u8]>> = ctx.data(|d| d.get_temp(bytes_key(id)));
    let image = match (&registered, builtin(id)) {
        (Some(bytes), _) => decode(id.as_str(), bytes)?,
        (None, Some(bytes)) => decode(id.as_str(), bytes)?,
        (None, None) => return Err(AssetError::Unknown(id.to_string())),
    };

    Ok(ctx.load_texture(format!("statelayout/{}", id), image, TextureOptions::LINEAR))
}

/// Texture for `id`, loading it on first use
pub fn texture(ctx: &Context, id: &AssetId) -> Option<TextureHandle> {
    let key = texture_key(id);
    if let Some(CachedTexture(cached)) = ctx.data(|d| d.get_temp::<CachedTexture>(key)) {
        return cached;
    }

    let loaded = match load(ctx, id) {
        Ok(texture) => Some(texture),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };
    ctx.data_mut(|d| d.insert_temp(key, CachedTexture(loaded.clone())));
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tip_decodes() {
        let bytes = builtin(&AssetId::TIP).unwrap();
        let image = decode("tip", bytes).unwrap();
        assert_eq!(image.size, [96, 96]);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = decode("broken", b"definitely not a png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { ref name, .. } if name == "broken"));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unknown_asset() {
        let ctx = Context::default();
        let id = AssetId::from_static("nope");
        assert!(builtin(&id).is_none());
        assert!(matches!(load(&ctx, &id), Err(AssetError::Unknown(_))));
        assert!(texture(&ctx, &id).is_none());
    }

    #[test]
    fn test_builtin_texture_is_cached() {
        let ctx = Context::default();
        let first = texture(&ctx, &AssetId::TIP).unwrap();
        let second = texture(&ctx, &AssetId::TIP).unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(first.size(), [96, 96]);
    }

    #[test]
    fn test_registered_bytes_replace_failure() {
        let ctx = Context::default();
        let id = AssetId::new("banner".to_string());
        assert!(texture(&ctx, &id).is_none());

        register(&ctx, id.clone(), Arc::from(TIP_PNG));
        let texture = texture(&ctx, &id).unwrap();
        assert_eq!(texture.size(), [96, 96]);
    }
}
