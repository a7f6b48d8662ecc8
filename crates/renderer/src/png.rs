//! PNG encoding for RGBA image data.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when image has ≤256 unique colors.
//!   Produces smaller files and encodes faster.
//! - **RGBA PNG (color type 6)**: Fallback for images with >256 colors.
//!
//! Both modes write a `pHYs` chunk so viewers see the intended resolution.
//! Palette order follows first appearance in scan order, so identical
//! pixels always encode to identical bytes.

use std::collections::HashMap;
use std::io::Write;

use heatmap_common::{HeatmapError, HeatmapResult};

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const METERS_PER_INCH: f32 = 0.0254;

/// Create a PNG image with automatic format selection.
///
/// Uses indexed color when the image has at most 256 distinct colors and
/// falls back to RGBA otherwise.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
/// - `dpi`: Resolution recorded in the `pHYs` chunk
pub fn create_png_auto(
    pixels: &[u8],
    width: usize,
    height: usize,
    dpi: f32,
) -> HeatmapResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;
    match extract_palette(pixels) {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices, dpi),
        None => create_png(pixels, width, height, dpi),
    }
}

/// Pack RGBA bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Palette in order of first appearance plus one index per pixel, or
/// `None` when the image has too many colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8, u8)>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2], chunk[3]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2], chunk[3]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
pub fn create_png_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8, u8)],
    indices: &[u8],
    dpi: f32,
) -> HeatmapResult<Vec<u8>> {
    if indices.len() != width * height {
        return Err(HeatmapError::RenderError(format!(
            "expected {} palette indices, got {}",
            width * height,
            indices.len()
        )));
    }
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(HeatmapError::RenderError(format!(
            "palette must hold 1..={} colors, got {}",
            MAX_PALETTE_SIZE,
            palette.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let mut plte_data = Vec::with_capacity(palette.len() * 3);
    for (r, g, b, _) in palette {
        plte_data.extend_from_slice(&[*r, *g, *b]);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    // tRNS only when some entry is not fully opaque
    if palette.iter().any(|(_, _, _, a)| *a < 255) {
        let trns_data: Vec<u8> = palette.iter().map(|(_, _, _, a)| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns_data);
    }

    write_chunk(&mut png, b"pHYs", &phys(dpi));

    let idat_data = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// This is the fallback for images with >256 unique colors.
pub fn create_png(pixels: &[u8], width: usize, height: usize, dpi: f32) -> HeatmapResult<Vec<u8>> {
    check_dimensions(pixels, width, height)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));
    write_chunk(&mut png, b"pHYs", &phys(dpi));

    let idat_data = deflate_scanlines(pixels, width, height, 4)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<()> {
    if width == 0 || height == 0 {
        return Err(HeatmapError::RenderError(format!(
            "invalid image size: {}x{}",
            width, height
        )));
    }
    if width > u32::MAX as usize || height > u32::MAX as usize {
        return Err(HeatmapError::RenderError(format!(
            "image too large for PNG: {}x{}",
            width, height
        )));
    }
    if pixels.len() != width * height * 4 {
        return Err(HeatmapError::RenderError(format!(
            "expected {} bytes of RGBA data for {}x{}, got {}",
            width * height * 4,
            width,
            height,
            pixels.len()
        )));
    }
    Ok(())
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Pixels per meter on both axes.
fn phys(dpi: f32) -> [u8; 9] {
    let ppm = (dpi / METERS_PER_INCH).round() as u32;
    let mut data = [0u8; 9];
    data[0..4].copy_from_slice(&ppm.to_be_bytes());
    data[4..8].copy_from_slice(&ppm.to_be_bytes());
    data[8] = 1; // unit: meter
    data
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate scanlines for the IDAT chunk, each prefixed with filter type 0.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> HeatmapResult<Vec<u8>> {
    let stride = width * bytes_per_pixel;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in data.chunks_exact(stride).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed).map_err(compression_error)?;
    encoder.finish().map_err(compression_error)
}

fn compression_error(e: std::io::Error) -> HeatmapError {
    HeatmapError::RenderError(format!("IDAT compression failed: {}", e))
}
