//! Text and PNG renderings of a grid region

use crate::element::ElementHandle;
use crate::io::configuration::{
    ELEMENT_PALETTE, ELEMENT_SYMBOLS, EMPTY_CELL_COLOUR, EMPTY_CELL_SYMBOL, MAX_IMAGE_PIXELS,
};
use crate::io::error::{GridError, Result, file_system_error, invalid_parameter};
use crate::math::Cell;
use crate::spatial::bounds::{Boundary, Extent};
use crate::spatial::grid::Grid;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Label every cell of `region` with the index of the element covering it
///
/// Elements are indexed by anchor in row-major order, so labels are stable
/// across runs. Returns the raster (rows, columns) and the indexed elements.
pub fn occupancy_raster<B: Boundary>(
    grid: &Grid<B>,
    region: Extent,
) -> (Array2<Option<usize>>, Vec<ElementHandle>) {
    let rows = usize::try_from(region.height).unwrap_or(0);
    let cols = usize::try_from(region.width).unwrap_or(0);

    let mut elements = grid.elements();
    elements.sort_by_key(|element| element.anchor().map(|cell| (cell.y, cell.x)));

    let mut raster = Array2::from_elem((rows, cols), None);
    for (index, element) in elements.iter().enumerate() {
        for cell in element.taken_positions() {
            if region.contains(cell)
                && let Some(slot) = raster.get_mut([cell.y as usize, cell.x as usize])
            {
                *slot = Some(index);
            }
        }
    }

    (raster, elements)
}

/// Draw `region` as text, one line per row
///
/// Empty cells use [`EMPTY_CELL_SYMBOL`]; elements cycle through
/// [`ELEMENT_SYMBOLS`].
pub fn render_text<B: Boundary>(grid: &Grid<B>, region: Extent) -> String {
    let (raster, _) = occupancy_raster(grid, region);
    let symbols: Vec<char> = ELEMENT_SYMBOLS.chars().collect();

    let mut text = String::with_capacity(raster.len() + raster.nrows());
    for row in raster.rows() {
        for &label in row {
            let symbol = label
                .and_then(|index| symbols.get(index % symbols.len()).copied())
                .unwrap_or(EMPTY_CELL_SYMBOL);
            text.push(symbol);
        }
        text.push('\n');
    }
    text
}

/// Write `region` as a PNG with `cell_pixels` pixels per cell side
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the region is empty
/// - The scaled image would overflow or exceed [`MAX_IMAGE_PIXELS`]
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png<B: Boundary>(
    grid: &Grid<B>,
    region: Extent,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be positive",
        ));
    }
    if region.cell_count() == 0 {
        return Err(invalid_parameter(
            "region",
            &format!("{}x{}", region.width, region.height),
            &"must cover at least one cell",
        ));
    }

    let scaled = |cells: i32| u32::try_from(cells).ok()?.checked_mul(cell_pixels);
    let (Some(width), Some(height)) = (scaled(region.width), scaled(region.height)) else {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"image dimensions overflow",
        ));
    };
    if u64::from(width) * u64::from(height) > MAX_IMAGE_PIXELS {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &format!("image would exceed {MAX_IMAGE_PIXELS} pixels"),
        ));
    }

    let (raster, _) = occupancy_raster(grid, region);

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let cell = Cell::new((x / cell_pixels) as i32, (y / cell_pixels) as i32);
        let colour = raster
            .get([cell.y as usize, cell.x as usize])
            .copied()
            .flatten()
            .and_then(|index| ELEMENT_PALETTE.get(index % ELEMENT_PALETTE.len()).copied())
            .unwrap_or(EMPTY_CELL_COLOUR);
        Rgba(colour)
    });

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
