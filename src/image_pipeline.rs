use iced::widget::image::Handle;

use crate::model::StructureResult;

pub const SLICE_SIZE: u32 = 256;

pub const WINDOW_WIDTH: i16 = 400;
pub const WINDOW_LEVEL: i16 = 40;

const AIR_HU: i16 = -1000;
const SOFT_TISSUE_HU: i16 = 40;
const FAT_HU: i16 = -90;
const LUNG_HU: i16 = -820;
const HEART_HU: i16 = 55;
const BONE_HU: i16 = 700;

const OVERLAY_ALPHA: f32 = 0.4;

/// Draws the placeholder chest slice shown by the viewer. Nothing here reads
/// patient data: the anatomy is a handful of ellipses whose size follows the
/// slice position, mapped to grey through a fixed window/level.
pub struct SliceImagePipeline;

impl SliceImagePipeline {
    pub fn render(slice: u16, total_slices: u16, overlays: &[StructureResult]) -> Handle {
        let rgba = Self::render_rgba(SLICE_SIZE, SLICE_SIZE, slice, total_slices, overlays);
        Handle::from_rgba(SLICE_SIZE, SLICE_SIZE, rgba)
    }

    pub fn render_rgba(
        width: u32,
        height: u32,
        slice: u16,
        total_slices: u16,
        overlays: &[StructureResult],
    ) -> Vec<u8> {
        let coverage = slice_coverage(slice, total_slices);
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);

        for y in 0..height {
            for x in 0..width {
                let u = (x as f32 + 0.5) / width as f32;
                let v = (y as f32 + 0.5) / height as f32;
                let gray = window_to_u8(phantom_hu(u, v, coverage), WINDOW_LEVEL, WINDOW_WIDTH);
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
        }

        for structure in overlays {
            blend_region(&mut rgba, width, height, structure);
        }

        rgba
    }
}

/// 0.0 at either end of the series, 1.0 in the middle.
fn slice_coverage(slice: u16, total_slices: u16) -> f32 {
    if total_slices <= 1 {
        return 1.0;
    }
    let position = (slice.clamp(1, total_slices) - 1) as f32 / (total_slices - 1) as f32;
    (position * std::f32::consts::PI).sin()
}

fn phantom_hu(u: f32, v: f32, coverage: f32) -> i16 {
    let organ_scale = 0.6 + 0.4 * coverage;

    if !inside_ellipse(u, v, 0.5, 0.5, 0.42, 0.34) {
        return AIR_HU;
    }
    if inside_ellipse(u, v, 0.5, 0.72, 0.035, 0.035) {
        return BONE_HU;
    }
    if inside_ellipse(u, v, 0.5, 0.25, 0.03, 0.05) {
        return BONE_HU;
    }
    if inside_ellipse(u, v, 0.53, 0.5, 0.1 * organ_scale, 0.12 * organ_scale) {
        return HEART_HU;
    }
    let lung_rx = 0.12 * organ_scale;
    let lung_ry = 0.22 * organ_scale;
    if inside_ellipse(u, v, 0.3, 0.45, lung_rx, lung_ry)
        || inside_ellipse(u, v, 0.72, 0.45, lung_rx, lung_ry)
    {
        return LUNG_HU;
    }
    if !inside_ellipse(u, v, 0.5, 0.5, 0.39, 0.31) {
        return FAT_HU;
    }
    SOFT_TISSUE_HU
}

fn inside_ellipse(u: f32, v: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (u - cx) / rx;
    let dy = (v - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Linear window/level mapping of a Hounsfield value to an 8-bit grey.
pub fn window_to_u8(hu: i16, level: i16, width: i16) -> u8 {
    if width <= 0 {
        return if hu >= level { 255 } else { 0 };
    }
    let lower = level as f32 - width as f32 / 2.0;
    let normalized = (hu as f32 - lower) / width as f32;
    (normalized * 255.0).clamp(0.0, 255.0).round() as u8
}

fn blend_region(rgba: &mut [u8], width: u32, height: u32, structure: &StructureResult) {
    let (x0, y0, x1, y1) = structure.region.pixel_bounds(width, height);
    let color = structure.color.rgb();

    for y in y0..y1 {
        for x in x0..x1 {
            let offset = (y as usize * width as usize + x as usize) * 4;
            if let Some(pixel) = rgba.get_mut(offset..offset + 3) {
                for (channel, tint) in pixel.iter_mut().zip(color) {
                    *channel = blend_channel(*channel, tint, OVERLAY_ALPHA);
                }
            }
        }
    }
}

fn blend_channel(base: u8, tint: u8, alpha: f32) -> u8 {
    (base as f32 * (1.0 - alpha) + tint as f32 * alpha)
        .clamp(0.0, 255.0)
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demo_structures;

    fn pixel(rgba: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = (y * width + x) as usize * 4;
        [rgba[offset], rgba[offset + 1], rgba[offset + 2], rgba[offset + 3]]
    }

    #[test]
    fn buffer_covers_every_pixel() {
        let rgba = SliceImagePipeline::render_rgba(64, 32, 10, 247, &[]);
        assert_eq!(rgba.len(), 64 * 32 * 4);
    }

    #[test]
    fn slice_without_overlays_is_grey() {
        let rgba = SliceImagePipeline::render_rgba(64, 64, 120, 247, &[]);
        assert!(rgba
            .chunks(4)
            .all(|px| px[0] == px[1] && px[1] == px[2] && px[3] == 255));
        // corner is outside the body
        assert_eq!(pixel(&rgba, 64, 0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn overlays_tint_their_region_only() {
        let structures = demo_structures();
        let tumor = &structures[0];
        let rgba = SliceImagePipeline::render_rgba(100, 100, 120, 247, std::slice::from_ref(tumor));
        let plain = SliceImagePipeline::render_rgba(100, 100, 120, 247, &[]);

        let (x0, y0, x1, y1) = tumor.region.pixel_bounds(100, 100);
        let inside = pixel(&rgba, 100, (x0 + x1) / 2, (y0 + y1) / 2);
        assert!(inside[0] > inside[2], "tumor overlay should lean red");

        assert_eq!(pixel(&rgba, 100, 0, 0), pixel(&plain, 100, 0, 0));
    }

    #[test]
    fn window_maps_level_to_mid_grey() {
        assert_eq!(window_to_u8(-160, WINDOW_LEVEL, WINDOW_WIDTH), 0);
        assert_eq!(window_to_u8(240, WINDOW_LEVEL, WINDOW_WIDTH), 255);
        assert_eq!(window_to_u8(40, WINDOW_LEVEL, WINDOW_WIDTH), 128);
        assert_eq!(window_to_u8(-1000, WINDOW_LEVEL, WINDOW_WIDTH), 0);
        assert_eq!(window_to_u8(3000, WINDOW_LEVEL, WINDOW_WIDTH), 255);
    }

    #[test]
    fn organs_grow_towards_mid_series() {
        assert!(slice_coverage(124, 247) > slice_coverage(10, 247));
        assert!(slice_coverage(1, 247).abs() < 1e-6);
        assert_eq!(slice_coverage(1, 1), 1.0);
    }
}
