//! Page resources and the platform boundary.
//!
//! Resources are constant descriptors from page configuration: a file to
//! download, a text to copy, or a document to open. [`activate`] hands a
//! resource to a [`Platform`]; no content is generated or transformed here.

mod error;
mod platform;

pub use error::PlatformError;
pub use platform::{DirectoryPlatform, Platform};

use serde::{Deserialize, Serialize};
use tracing::info;

/// One resource action offered by a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    /// Save constant text content as a file
    Download {
        id: String,
        label: String,
        filename: String,
        media_type: String,
        content: String,
    },

    /// Copy constant text to the clipboard
    Clipboard {
        id: String,
        label: String,
        text: String,
        /// Message shown after a successful copy
        #[serde(default)]
        confirmation: Option<String>,
    },

    /// Open a static document
    Link {
        id: String,
        label: String,
        href: String,
        /// Suggested name when the document is downloaded
        #[serde(default)]
        filename: Option<String>,
    },
}

impl Resource {
    pub fn id(&self) -> &str {
        match self {
            Self::Download { id, .. } | Self::Clipboard { id, .. } | Self::Link { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Download { label, .. }
            | Self::Clipboard { label, .. }
            | Self::Link { label, .. } => label,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Download { .. } => "download",
            Self::Clipboard { .. } => "clipboard",
            Self::Link { .. } => "link",
        }
    }
}

/// What a resource activation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Downloaded { filename: String },
    Copied { chars: usize },
    Opened { href: String },
}

/// Carry out a resource action on `platform`.
///
/// # Example
///
/// ```rust
/// use infodeck::resources::{activate, Activation, Platform, PlatformError, Resource};
///
/// #[derive(Default)]
/// struct Recorder {
///     clipboard: String,
/// }
///
/// impl Platform for Recorder {
///     fn save_file(&mut self, _: &str, _: &str, _: &[u8]) -> Result<(), PlatformError> {
///         Ok(())
///     }
///     fn write_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
///         self.clipboard = text.to_string();
///         Ok(())
///     }
///     fn open_link(&mut self, _: &str, _: Option<&str>) -> Result<(), PlatformError> {
///         Ok(())
///     }
/// }
///
/// let prompt = Resource::Clipboard {
///     id: "prompt".into(),
///     label: "Copy prompt".into(),
///     text: "Analyse this spreadsheet".into(),
///     confirmation: None,
/// };
///
/// let mut platform = Recorder::default();
/// let outcome = activate(&prompt, &mut platform).unwrap();
///
/// assert_eq!(outcome, Activation::Copied { chars: 24 });
/// assert_eq!(platform.clipboard, "Analyse this spreadsheet");
/// ```
pub fn activate<P>(resource: &Resource, platform: &mut P) -> Result<Activation, PlatformError>
where
    P: Platform + ?Sized,
{
    info!(id = resource.id(), kind = resource.kind(), "activating resource");

    match resource {
        Resource::Download {
            filename,
            media_type,
            content,
            ..
        } => {
            platform.save_file(filename, media_type, content.as_bytes())?;
            Ok(Activation::Downloaded {
                filename: filename.clone(),
            })
        }
        Resource::Clipboard {
            text, confirmation, ..
        } => {
            platform.write_clipboard(text)?;
            if let Some(message) = confirmation {
                platform.notify(message)?;
            }
            Ok(Activation::Copied {
                chars: text.chars().count(),
            })
        }
        Resource::Link { href, filename, .. } => {
            platform.open_link(href, filename.as_deref())?;
            Ok(Activation::Opened { href: href.clone() })
        }
    }
}

/// Find the resource with `id` in `resources`.
pub fn find<'a>(resources: &'a [Resource], id: &str) -> Option<&'a Resource> {
    resources.iter().find(|r| r.id() == id)
}
