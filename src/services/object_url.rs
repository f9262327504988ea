// ============================================================================
// OBJECT URL - Referencias blob: con liberación garantizada
// ============================================================================
// Cada URL creada con URL.createObjectURL retiene el blob en memoria hasta que
// se revoca. `ObjectUrl` revoca en Drop, así que reemplazar o soltar el valor
// libera el recurso.
// ============================================================================

use std::fmt;
use std::rc::Rc;
use web_sys::{Blob, BlobPropertyBag, Url};
use crate::services::error::UploadError;

/// Crea y revoca URLs locales para datos binarios
pub trait ObjectUrlFactory {
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, UploadError>;
    fn revoke(&self, url: &str);
}

/// URL local viva. Se revoca al hacer drop.
pub struct ObjectUrl {
    url: String,
    factory: Rc<dyn ObjectUrlFactory>,
}

impl ObjectUrl {
    pub fn create(
        factory: &Rc<dyn ObjectUrlFactory>,
        bytes: &[u8],
        mime: &str,
    ) -> Result<Self, UploadError> {
        let url = factory.create(bytes, mime)?;
        log::debug!("🎞️ [URL] Creada {} ({} bytes, {})", url, bytes.len(), mime);
        Ok(Self {
            url,
            factory: factory.clone(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        log::debug!("🧹 [URL] Revocando {}", self.url);
        self.factory.revoke(&self.url);
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

/// Implementación del navegador: Blob + URL.createObjectURL
#[derive(Clone, Copy, Default)]
pub struct BlobUrlFactory;

impl ObjectUrlFactory for BlobUrlFactory {
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, UploadError> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);

        let options = BlobPropertyBag::new();
        options.set_type(mime);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| UploadError::from_js("Blob creation failed", e))?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|e| UploadError::from_js("createObjectURL failed", e))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("⚠️ [URL] No se pudo revocar {}: {:?}", url, e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::CountingUrlFactory;
    use super::*;

    #[test]
    fn drop_revokes_exactly_once() {
        let counting = Rc::new(CountingUrlFactory::default());
        let factory: Rc<dyn ObjectUrlFactory> = counting.clone();

        let url = ObjectUrl::create(&factory, b"mp4", "video/mp4").unwrap();
        assert_eq!(url.as_str(), "blob:test/1-3");
        assert_eq!(counting.live_count(), 1);

        drop(url);
        assert_eq!(counting.live_count(), 0);
        assert_eq!(counting.revoked.borrow().as_slice(), ["blob:test/1-3"]);
    }

    #[test]
    fn replacing_an_option_releases_the_old_url() {
        let counting = Rc::new(CountingUrlFactory::default());
        let factory: Rc<dyn ObjectUrlFactory> = counting.clone();

        let mut slot = Some(ObjectUrl::create(&factory, b"a", "video/mp4").unwrap());
        assert_eq!(slot.as_ref().map(ObjectUrl::as_str), Some("blob:test/1-1"));
        slot = Some(ObjectUrl::create(&factory, b"bb", "video/mp4").unwrap());

        assert_eq!(counting.live_count(), 1);
        assert_eq!(counting.revoked_count(), 1);
        assert_eq!(slot.as_ref().map(ObjectUrl::as_str), Some("blob:test/2-2"));
    }

    #[test]
    fn failed_creation_leaves_nothing_alive() {
        let counting = Rc::new(CountingUrlFactory::default());
        counting.fail_next.set(true);
        let factory: Rc<dyn ObjectUrlFactory> = counting.clone();

        assert!(ObjectUrl::create(&factory, b"a", "video/mp4").is_err());
        assert_eq!(counting.live_count(), 0);
        assert_eq!(counting.revoked_count(), 0);
    }
}
