//! Crate for harvesting candidate links out of a json manifest and downloading
//! each one to a local file.

/// Fetching the manifest and downloading harvested links.
pub mod download;

/// Recursive descent over a json value collecting strings.
pub mod walk;

pub use download::{download, fetch_manifest, flatten_url, DownloadError, ManifestError};
pub use walk::harvest_strings;
