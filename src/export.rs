use std::io::Cursor;

use ab_glyph::{Font, FontArc, ScaleFont};
use egui::{Color32, Pos2};
use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;
use thiserror::Error;

use crate::drawable::{Drawable, STAMP_FONT_SIZE, Stamp, Stroke};

/// Offscreen raster settings. The defaults mirror the app: a 256-logical
/// canvas exported at 4x into a 1024x1024 PNG.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Output edge length in pixels; the export surface is square.
    pub size: u32,
    /// Multiplier from logical canvas coordinates to output pixels.
    pub scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            size: 1024,
            scale: 4.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export size and scale must both be positive")]
    InvalidOptions,
    #[error("no font available to rasterize sticker text")]
    NoFont,
    #[error("font cannot rasterize {0:?}")]
    UnmappedGlyph(char),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render committed drawables to PNG bytes on an offscreen surface.
///
/// The live preview is never exported. `font` is only consulted when the
/// drawing contains stamps; a stroke-only drawing exports without one.
/// Takes a plain slice so a caller that ever moves export off-thread can
/// hand it a cloned snapshot of the committed list.
pub fn export_png(
    drawables: &[Drawable],
    options: ExportOptions,
    font: Option<&FontArc>,
) -> Result<Vec<u8>, ExportError> {
    if options.size == 0 || !(options.scale.is_finite() && options.scale > 0.0) {
        return Err(ExportError::InvalidOptions);
    }

    let mut surface =
        RgbaImage::from_pixel(options.size, options.size, Rgba([255, 255, 255, 255]));

    for drawable in drawables {
        match drawable {
            Drawable::Stroke(stroke) => rasterize_stroke(&mut surface, stroke, options.scale),
            Drawable::Stamp(stamp) => {
                let font = font.ok_or(ExportError::NoFont)?;
                rasterize_stamp(&mut surface, stamp, options.scale, font)?;
            }
        }
    }

    let mut bytes = Vec::new();
    surface.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!(
        "exported {} drawables to a {}px PNG ({} bytes)",
        drawables.len(),
        options.size,
        bytes.len()
    );
    Ok(bytes)
}

fn scaled(pos: Pos2, scale: f32) -> (f32, f32) {
    (pos.x * scale, pos.y * scale)
}

fn pixel(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Discs stamped along every segment, plus end caps, reproduce the
/// round-join look of the on-screen polyline. A one-point stroke comes out
/// as a single disc, matching the screen rendering of a click.
fn rasterize_stroke(surface: &mut RgbaImage, stroke: &Stroke, scale: f32) {
    let radius = stroke.thickness() * scale / 2.0;
    let color = pixel(stroke.color());
    let points = stroke.points();

    if let Some(first) = points.first() {
        fill_disc(surface, scaled(*first, scale), radius, color);
    }
    if points.len() > 1 {
        if let Some(last) = points.last() {
            fill_disc(surface, scaled(*last, scale), radius, color);
        }
    }
    for pair in points.windows(2) {
        stamp_segment(
            surface,
            scaled(pair[0], scale),
            scaled(pair[1], scale),
            radius,
            color,
        );
    }
}

fn stamp_segment(
    surface: &mut RgbaImage,
    a: (f32, f32),
    b: (f32, f32),
    radius: f32,
    color: Rgba<u8>,
) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let length = (dx * dx + dy * dy).sqrt();
    // Quarter-radius spacing keeps the disc overlap seamless.
    let step = (radius / 4.0).max(0.5);
    let count = (length / step).ceil() as u32;
    for i in 0..=count {
        let t = if count == 0 {
            0.0
        } else {
            i as f32 / count as f32
        };
        fill_disc(surface, (a.0 + dx * t, a.1 + dy * t), radius, color);
    }
}

fn fill_disc(surface: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    let radius = radius.max(0.5);
    let radius_sq = radius * radius;
    let x0 = ((center.0 - radius).floor() as i64).max(0);
    let y0 = ((center.1 - radius).floor() as i64).max(0);
    let x1 = ((center.0 + radius).ceil() as i64).min(surface.width() as i64 - 1);
    let y1 = ((center.1 + radius).ceil() as i64).min(surface.height() as i64 - 1);

    for y in y0..=y1 {
        let dy = y as f32 + 0.5 - center.1;
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - center.0;
            if dx * dx + dy * dy <= radius_sq {
                surface.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn rasterize_stamp(
    surface: &mut RgbaImage,
    stamp: &Stamp,
    scale: f32,
    font: &FontArc,
) -> Result<(), ExportError> {
    let staging = rasterize_text(font, stamp.text(), STAMP_FONT_SIZE * scale, pixel(stamp.color()))?;
    if staging.width() == 0 || staging.height() == 0 {
        return Ok(());
    }
    blit_rotated(
        surface,
        &staging,
        scaled(stamp.pos(), scale),
        stamp.rotation_deg().to_radians(),
    );
    Ok(())
}

/// Lay the text out on one line (advance plus kerning) and rasterize it
/// into a tight RGBA staging buffer.
///
/// Any visible character the font cannot turn into an outline fails the
/// whole export; skipping it would write a blank or partial stamp with a
/// success result.
fn rasterize_text(
    font: &FontArc,
    text: &str,
    px: f32,
    color: Rgba<u8>,
) -> Result<RgbaImage, ExportError> {
    let scaled_font = font.as_scaled(px);
    let height = scaled_font.height().ceil().max(1.0) as u32;

    let mut width = 0.0f32;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        // Glyph id 0 is the .notdef tofu box.
        if id.0 == 0 && !ch.is_whitespace() {
            return Err(ExportError::UnmappedGlyph(ch));
        }
        if let Some(prev_id) = prev {
            width += scaled_font.kern(prev_id, id);
        }
        width += scaled_font.h_advance(id);
        prev = Some(id);
    }

    let mut staging = RgbaImage::new(width.ceil().max(1.0) as u32, height);
    let ascent = scaled_font.ascent();
    let mut caret = 0.0f32;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled_font.kern(prev_id, id);
        }
        let glyph = id.with_scale_and_position(px, ab_glyph::point(caret, ascent));
        caret += scaled_font.h_advance(id);
        prev = Some(id);

        match font.outline_glyph(glyph) {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    if coverage > 0.0
                        && (0..staging.width() as i64).contains(&x)
                        && (0..staging.height() as i64).contains(&y)
                    {
                        let alpha = (coverage * color[3] as f32) as u8;
                        staging.put_pixel(
                            x as u32,
                            y as u32,
                            Rgba([color[0], color[1], color[2], alpha]),
                        );
                    }
                });
            }
            // Mapped but outline-less, as in bitmap-only emoji fonts.
            None if !ch.is_whitespace() => return Err(ExportError::UnmappedGlyph(ch)),
            None => {}
        }
    }
    Ok(staging)
}

/// Paste `src` onto `dst` centered at `center` and rotated about it.
/// Inverse mapping: walk the destination bounding box and sample the
/// un-rotated source, so no angle leaves holes.
fn blit_rotated(dst: &mut RgbaImage, src: &RgbaImage, center: (f32, f32), angle: f32) {
    let (sin, cos) = angle.sin_cos();
    let half_w = src.width() as f32 / 2.0;
    let half_h = src.height() as f32 / 2.0;
    let extent = (half_w * half_w + half_h * half_h).sqrt().ceil();

    let x0 = ((center.0 - extent).floor() as i64).max(0);
    let y0 = ((center.1 - extent).floor() as i64).max(0);
    let x1 = ((center.0 + extent).ceil() as i64).min(dst.width() as i64 - 1);
    let y1 = ((center.1 + extent).ceil() as i64).min(dst.height() as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            // Rotate back by -angle into source space.
            let sx = cos * dx + sin * dy + half_w;
            let sy = -sin * dx + cos * dy + half_h;
            if sx < 0.0 || sy < 0.0 || sx >= src.width() as f32 || sy >= src.height() as f32 {
                continue;
            }
            let over = *src.get_pixel(sx as u32, sy as u32);
            if over[3] > 0 {
                let under = *dst.get_pixel(x as u32, y as u32);
                dst.put_pixel(x as u32, y as u32, blend_over(under, over));
            }
        }
    }
}

fn blend_over(under: Rgba<u8>, over: Rgba<u8>) -> Rgba<u8> {
    let alpha = over[3] as f32 / 255.0;
    let mix = |o: u8, u: u8| (o as f32 * alpha + u as f32 * (1.0 - alpha)).round() as u8;
    Rgba([
        mix(over[0], under[0]),
        mix(over[1], under[1]),
        mix(over[2], under[2]),
        under[3].max(over[3]),
    ])
}
