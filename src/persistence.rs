use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ImportError};
use crate::stroke::Stroke;

/// Container format version written by this build
pub const FORMAT_VERSION: u32 = 1;

/// Extension appended to saved drawings
pub const FILE_EXTENSION: &str = "shp";

/// On-disk form of a drawing: the committed strokes in paint order
#[derive(Debug, Serialize, Deserialize)]
struct SavedDrawing {
    version: u32,
    strokes: Vec<Stroke>,
}

/// Serializes `strokes` into the drawing container
pub fn to_json(strokes: &[Stroke]) -> Result<String, ExportError> {
    #[derive(Serialize)]
    struct SavedDrawingRef<'a> {
        version: u32,
        strokes: &'a [Stroke],
    }

    let json = serde_json::to_string_pretty(&SavedDrawingRef {
        version: FORMAT_VERSION,
        strokes,
    })?;
    Ok(json)
}

/// Parses a complete drawing.
///
/// Every stroke is validated before anything is returned, so callers either
/// get all strokes or an error.
pub fn from_json(json: &str) -> Result<Vec<Stroke>, ImportError> {
    let drawing: SavedDrawing = serde_json::from_str(json)?;
    if drawing.version != FORMAT_VERSION {
        return Err(ImportError::UnsupportedVersion {
            found: drawing.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(drawing.strokes)
}

/// Writes a drawing to `path`, adding the `.shp` extension if it has none
pub fn save_to_path(path: impl AsRef<Path>, strokes: &[Stroke]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let path = if path.extension().is_none() {
        path.with_extension(FILE_EXTENSION)
    } else {
        path.to_path_buf()
    };

    let json = to_json(strokes)?;
    fs::write(&path, json)?;
    log::info!("Saved {} strokes to {}", strokes.len(), path.display());
    Ok(())
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Stroke>, ImportError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let strokes = from_json(&json)?;
    log::info!("Loaded {} strokes from {}", strokes.len(), path.display());
    Ok(strokes)
}
