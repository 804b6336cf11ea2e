//! Host pipeline: photo file → decoded tags → editable form → status.
//!
//! ```text
//! file ──read──▶ bytes ──decode──▶ TagMap ──build_form──▶ FormState
//!   │                                                         ▲
//!   └──image_dimensions──▶ (w, h) ──Orientation::for_dimensions┘
//! ```
//!
//! Metadata and pixel dimensions are independent: a photo with no EXIF still
//! gets a form (every field empty) as long as its pixels can be sized, and a
//! photo whose format the `image` crate cannot size still gets its tags.
//! Only when both are missing is there nothing to show.
//!
//! ## Batch scan
//!
//! [`scan_directory`] walks a directory tree for JPEG and TIFF files and
//! loads each in parallel on the global [rayon](https://docs.rs/rayon) pool.

use crate::exif::{TagMap, decode};
use crate::form::{FormState, Orientation, build_form};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions the batch scan picks up.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tif", "tiff"];

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not read photo metadata or dimensions: {0}")]
    Unusable(PathBuf),
    #[error("Photo not found: {0}")]
    NotFound(PathBuf),
}

/// Pixel size of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Outcome message shown after a photo is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    MetadataFound,
    NoMetadata,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Status::MetadataFound => "Metadata pulled from EXIF. Update the fields if needed.",
            Status::NoMetadata => "No EXIF metadata found. Fill the fields manually.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A photo ready for editing and layout.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedPhoto {
    pub path: PathBuf,
    pub dimensions: Option<Dimensions>,
    pub tags: TagMap,
    pub state: FormState,
    pub status: Status,
}

/// Load one photo: decode its tags, size its pixels, build the auto form.
///
/// Orientation follows the pixel aspect (landscape when width ≥ height),
/// portrait when the size is unknown.
pub fn load_photo(path: &Path) -> Result<LoadedPhoto, ProcessError> {
    if !path.is_file() {
        return Err(ProcessError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let tags = decode(&bytes);
    let dimensions = read_dimensions(path);

    if tags.is_empty() && dimensions.is_none() {
        return Err(ProcessError::Unusable(path.to_path_buf()));
    }

    let orientation = dimensions
        .map(|d| Orientation::for_dimensions(d.width, d.height))
        .unwrap_or_default();
    let status = if tags.is_empty() {
        Status::NoMetadata
    } else {
        Status::MetadataFound
    };
    debug!(
        "{}: {} tags, {:?}, {orientation}",
        path.display(),
        tags.len(),
        dimensions
    );

    Ok(LoadedPhoto {
        path: path.to_path_buf(),
        dimensions,
        state: FormState::new(build_form(&tags, orientation)),
        tags,
        status,
    })
}

/// Pixel size via the `image` crate; `None` when unreadable or zero-sized.
fn read_dimensions(path: &Path) -> Option<Dimensions> {
    match image::image_dimensions(path) {
        Ok((width, height)) if width > 0 && height > 0 => Some(Dimensions { width, height }),
        Ok(_) => None,
        Err(e) => {
            debug!("cannot size {}: {e}", path.display());
            None
        }
    }
}

/// Every photo under `root`, sorted by path.
pub fn collect_photos(root: &Path) -> Vec<PathBuf> {
    let mut photos: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_photo(e.path()))
        .map(|e| e.into_path())
        .collect();
    photos.sort();
    photos
}

fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Per-file result of a batch scan.
#[derive(Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub result: Result<LoadedPhoto, ProcessError>,
}

/// Load every photo under `root` in parallel. Entries keep path order.
pub fn scan_directory(root: &Path) -> Result<Vec<ScanEntry>, ProcessError> {
    if !root.is_dir() {
        return Err(ProcessError::NotFound(root.to_path_buf()));
    }
    let photos = collect_photos(root);
    debug!("scanning {} photos under {}", photos.len(), root.display());

    let entries = photos
        .into_par_iter()
        .map(|path| {
            let result = load_photo(&path);
            if let Err(e) = &result {
                warn!("{e}");
            }
            ScanEntry { path, result }
        })
        .collect();
    Ok(entries)
}
