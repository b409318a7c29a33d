//! Avatar picker support.
//!
//! The form stores the avatar as a URL, while the picker hands us a file.
//! Turning one into the other is the job of an [`AvatarUploader`]; this
//! crate only ships [`LocalFileUploader`], which points at the file itself.

use std::fs;
use std::path::Path;

use log::debug;
use url::Url;

use crate::error::SettingsError;

/// MIME patterns accepted by the avatar picker.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/*"];

/// Guesses the MIME type of an image from its file extension.
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "svg" => Some("image/svg+xml"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Checks a MIME type against [`ACCEPTED_MIME_TYPES`], honouring `type/*`
/// wildcards.
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.iter().any(|pattern| {
        match pattern.strip_suffix("/*") {
            Some(top_level) => mime
                .split_once('/')
                .is_some_and(|(kind, subtype)| kind == top_level && !subtype.is_empty()),
            None => *pattern == mime,
        }
    })
}

/// Turns a picked avatar file into the URL stored in the form.
pub trait AvatarUploader {
    /// Uploads (or otherwise publishes) the file and returns its URL.
    fn upload_avatar(&self, path: &Path) -> Result<Url, SettingsError>;
}

/// Uploader that "publishes" a file by returning its absolute `file://` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileUploader;

impl AvatarUploader for LocalFileUploader {
    fn upload_avatar(&self, path: &Path) -> Result<Url, SettingsError> {
        let mime = mime_type_for_path(path)
            .filter(|m| is_accepted_mime(m))
            .ok_or_else(|| {
                SettingsError::Avatar(format!("{} is not a supported image", path.display()))
            })?;

        let absolute = fs::canonicalize(path)?;
        if !absolute.is_file() {
            return Err(SettingsError::Avatar(format!(
                "{} is not a file",
                absolute.display()
            )));
        }

        debug!("Using {} ({}) as avatar", absolute.display(), mime);
        Url::from_file_path(&absolute).map_err(|_| {
            SettingsError::Avatar(format!("{} cannot be expressed as a URL", absolute.display()))
        })
    }
}
