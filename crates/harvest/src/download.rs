use log::debug;
use serde_json::Value;
use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failure fetching or decoding the top level manifest.
///
/// Unlike [`DownloadError`] this aborts the whole run. Without a manifest
/// there is nothing to harvest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest request to {url} failed: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("manifest at {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("manifest at {url} is not valid json: {source}")]
    Decode { url: String, source: io::Error },
}

/// Failure downloading a single harvested link.
///
/// Distinguishes network failure, non-success status, and save i/o failure so
/// callers can report what went wrong while skipping to the next link.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("saving {url} to {path} failed: {source}")]
    Save {
        url: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// Fetch and decode the json manifest listing the sound files.
pub fn fetch_manifest(url: &str) -> Result<Value, ManifestError> {
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => ManifestError::Status {
            url: url.to_owned(),
            status,
        },
        err => ManifestError::Transport {
            url: url.to_owned(),
            source: Box::new(err),
        },
    })?;
    response.into_json().map_err(|source| ManifestError::Decode {
        url: url.to_owned(),
        source,
    })
}

/// Download `url` into `dir` and return the path written.
///
/// The file is named after the url with every path separator replaced by an
/// underscore, so nested looking urls can't create unintended subdirectories.
/// An existing file of the same name is overwritten.
pub fn download(url: &str, dir: &Path) -> Result<PathBuf, DownloadError> {
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => DownloadError::Status {
            url: url.to_owned(),
            status,
        },
        err => DownloadError::Transport {
            url: url.to_owned(),
            source: Box::new(err),
        },
    })?;

    let path = dir.join(flatten_url(url));
    let save_err = |source| DownloadError::Save {
        url: url.to_owned(),
        path: path.clone(),
        source,
    };
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(save_err)?;
    fs::write(&path, &body).map_err(save_err)?;
    debug!("Saved {url} to {}", path.display());
    Ok(path)
}

/// Replace every path separator character in `url` with an underscore.
#[must_use]
pub fn flatten_url(url: &str) -> String {
    url.chars()
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_replaces_every_separator() {
        assert_eq!(
            flatten_url("http://a/b/c.mp3"),
            "http:__a_b_c.mp3".to_owned()
        );
        assert_eq!(flatten_url("plain.wav"), "plain.wav".to_owned());
    }

    #[test]
    fn flattened_url_has_no_parent_components() {
        let name = flatten_url("https://host/deeply/nested/../path/file.ogg");
        assert_eq!(PathBuf::from(&name).components().count(), 1);
    }
}
