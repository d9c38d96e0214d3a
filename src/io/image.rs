//! Tile image I/O: slicing, loading, saving and assembling PNG tiles

use crate::io::configuration::{TILE_FILE_EXTENSION, TILE_FILE_PREFIX};
use crate::io::error::{ReassemblyError, Result, invalid_parameter, invalid_source};
use crate::spatial::grid::GridShape;
use image::{RgbImage, imageops};
use std::path::{Path, PathBuf};

/// Cut an image into a row-major grid of equally sized tiles
///
/// Tiles are `width / cols` by `height / rows` pixels; remainder pixels on
/// the right and bottom edges are dropped.
///
/// # Errors
///
/// Returns an error if the shape is empty or the image is smaller than one
/// pixel per tile
pub fn slice_image(image: &RgbImage, shape: GridShape) -> Result<Vec<RgbImage>> {
    let tile_width = image.width().checked_div(shape.cols as u32).unwrap_or(0);
    let tile_height = image.height().checked_div(shape.rows as u32).unwrap_or(0);
    if tile_width == 0 || tile_height == 0 {
        return Err(invalid_parameter(
            "shape",
            &shape,
            &format!(
                "{}x{} image is too small to slice",
                image.width(),
                image.height()
            ),
        ));
    }

    let mut tiles = Vec::with_capacity(shape.slot_count());
    for row in 0..shape.rows as u32 {
        for col in 0..shape.cols as u32 {
            tiles.push(
                imageops::crop_imm(
                    image,
                    col * tile_width,
                    row * tile_height,
                    tile_width,
                    tile_height,
                )
                .to_image(),
            );
        }
    }
    Ok(tiles)
}

/// Paste tiles into one image following a reconstruction order
///
/// Slot `i` of `order` names the tile placed at row-major grid slot `i`.
/// Slots beyond the end of `order` are left black.
///
/// # Errors
///
/// Returns an error if:
/// - No tiles are supplied
/// - The order names a tile that does not exist
/// - The order has more entries than the grid has slots
pub fn assemble(tiles: &[RgbImage], order: &[usize], shape: GridShape) -> Result<RgbImage> {
    let first = tiles
        .first()
        .ok_or_else(|| invalid_source(&"no tiles to assemble"))?;
    let (tile_width, tile_height) = first.dimensions();

    if order.len() > shape.slot_count() {
        return Err(invalid_parameter(
            "order",
            &order.len(),
            &format!("exceeds the {} slots of a {shape} grid", shape.slot_count()),
        ));
    }

    let mut canvas = RgbImage::new(tile_width * shape.cols as u32, tile_height * shape.rows as u32);
    for (slot, &index) in order.iter().enumerate() {
        let tile = tiles.get(index).ok_or(ReassemblyError::InvalidTileIndex {
            index,
            tile_count: tiles.len(),
        })?;
        let (row, col) = (slot / shape.cols, slot % shape.cols);
        imageops::replace(
            &mut canvas,
            tile,
            i64::from(col as u32 * tile_width),
            i64::from(row as u32 * tile_height),
        );
    }
    Ok(canvas)
}

/// Save an image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn export_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReassemblyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| ReassemblyError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// File name of the tile stored at an input index (`image_1.png` for index 0)
pub fn tile_file_name(index: usize) -> String {
    format!("{TILE_FILE_PREFIX}{}.{TILE_FILE_EXTENSION}", index + 1)
}

/// Write tiles as `image_1.png`, `image_2.png`, ... into a directory
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a tile cannot be
/// written
pub fn save_tiles(tiles: &[RgbImage], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| ReassemblyError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let path = dir.join(tile_file_name(index));
            export_png(tile, &path)?;
            Ok(path)
        })
        .collect()
}

/// Load every PNG of a directory as a tile, ordered by file number
///
/// Files sort by the number trailing their stem (`image_2` before
/// `image_10`), falling back to the file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read, holds no PNG files or
/// an image cannot be decoded
pub fn load_tiles(dir: &Path) -> Result<Vec<RgbImage>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ReassemblyError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some(TILE_FILE_EXTENSION) {
            paths.push(path);
        }
    }
    if paths.is_empty() {
        return Err(invalid_source(&format!(
            "no {TILE_FILE_EXTENSION} tiles in '{}'",
            dir.display()
        )));
    }
    paths.sort_by_cached_key(|path| tile_sort_key(path));

    paths.iter().map(|path| load_image(path)).collect()
}

/// Decode one image file as 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|image| image.to_rgb8())
        .map_err(|e| ReassemblyError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

fn tile_sort_key(path: &Path) -> (Option<u64>, String) {
    let stem = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let digits: String = stem
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    (digits.parse().ok(), stem)
}
