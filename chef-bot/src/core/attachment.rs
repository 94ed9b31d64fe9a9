//! Uploaded file as seen by the upload handler.

/// File extensions accepted as images when the platform gives no content type.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// An attachment delivered with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub url: String,
    pub filename: String,
    /// MIME type reported by the platform, e.g. `image/png`.
    pub content_type: Option<String>,
}

impl ImageAttachment {
    pub fn new(url: impl Into<String>, filename: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
            content_type,
        }
    }

    /// True when the content type is `image/*`; without a content type, decided by extension.
    pub fn is_image(&self) -> bool {
        match self.content_type.as_deref() {
            Some(ct) => ct.trim().to_ascii_lowercase().starts_with("image/"),
            None => self
                .filename
                .rsplit_once('.')
                .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_content_type_is_image() {
        let a = ImageAttachment::new("https://cdn/x", "x.bin", Some("image/jpeg".into()));
        assert!(a.is_image());
        let a = ImageAttachment::new("https://cdn/x", "x.png", Some("IMAGE/PNG".into()));
        assert!(a.is_image());
    }

    #[test]
    fn content_type_wins_over_extension() {
        let a = ImageAttachment::new("https://cdn/x", "recipe.png", Some("application/pdf".into()));
        assert!(!a.is_image());
    }

    #[test]
    fn extension_fallback() {
        assert!(ImageAttachment::new("u", "Dinner.JPG", None).is_image());
        assert!(!ImageAttachment::new("u", "notes.txt", None).is_image());
        assert!(!ImageAttachment::new("u", "noext", None).is_image());
    }
}
