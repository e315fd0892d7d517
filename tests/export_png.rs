use egui::{Color32, Pos2};
use sketchbook::{Drawable, ExportError, ExportOptions, Stamp, Stroke, export_png};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn line(from: Pos2, to: Pos2, thickness: f32, color: Color32) -> Drawable {
    let mut stroke = Stroke::new(from, thickness, color);
    stroke.drag(to);
    Drawable::Stroke(stroke)
}

#[test]
fn empty_drawing_exports_a_blank_png() {
    let bytes = export_png(&[], ExportOptions::default(), None).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(512, 512).0, [255, 255, 255, 255]);
}

#[test]
fn strokes_land_where_the_scale_puts_them() {
    let drawing = vec![line(
        Pos2::new(8.0, 32.0),
        Pos2::new(56.0, 32.0),
        6.0,
        Color32::RED,
    )];
    let options = ExportOptions {
        size: 64,
        scale: 1.0,
    };
    let bytes = export_png(&drawing, options, None).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 64);

    // On the stroke path.
    assert_eq!(decoded.get_pixel(32, 32).0, [255, 0, 0, 255]);
    // End caps cover the endpoints themselves.
    assert_eq!(decoded.get_pixel(8, 32).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(56, 32).0, [255, 0, 0, 255]);
    // Far corner stays background.
    assert_eq!(decoded.get_pixel(1, 60).0, [255, 255, 255, 255]);
}

#[test]
fn scale_multiplies_logical_coordinates() {
    let drawing = vec![line(
        Pos2::new(4.0, 4.0),
        Pos2::new(12.0, 4.0),
        2.0,
        Color32::BLUE,
    )];
    let options = ExportOptions {
        size: 64,
        scale: 4.0,
    };
    let bytes = export_png(&drawing, options, None).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    // Logical (8, 4) lands at output (32, 16).
    assert_eq!(decoded.get_pixel(32, 16).0, [0, 0, 255, 255]);
    // Logical y = 12 is well clear of the 4-px-wide scaled stroke.
    assert_eq!(decoded.get_pixel(32, 48).0, [255, 255, 255, 255]);
}

#[test]
fn single_point_stroke_exports_its_cap_disc() {
    let dot = Drawable::Stroke(Stroke::new(Pos2::new(16.0, 16.0), 8.0, Color32::BLACK));
    let options = ExportOptions {
        size: 32,
        scale: 1.0,
    };
    let bytes = export_png(&[dot], options, None).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(decoded.get_pixel(16, 16).0, [0, 0, 0, 255]);
    // Just outside the 4-px radius.
    assert_eq!(decoded.get_pixel(16, 25).0, [255, 255, 255, 255]);
}

#[test]
fn stamps_without_a_font_fail_cleanly() {
    let drawing = vec![Drawable::Stamp(Stamp::new(
        Pos2::new(50.0, 50.0),
        "😊",
        0.0,
        Color32::BLACK,
    ))];
    let err = export_png(&drawing, ExportOptions::default(), None).unwrap_err();
    assert!(matches!(err, ExportError::NoFont));
}

#[test]
fn unmapped_sticker_characters_fail_the_export() {
    // Needs a real font; environments without one are covered by the
    // NoFont path above.
    let Some(font) = sketchbook::load_system_font() else {
        return;
    };
    // A Private Use Area codepoint no stock font maps.
    let drawing = vec![Drawable::Stamp(Stamp::new(
        Pos2::new(50.0, 50.0),
        "\u{e005}",
        0.0,
        Color32::BLACK,
    ))];
    let err = export_png(&drawing, ExportOptions::default(), Some(&font)).unwrap_err();
    assert!(matches!(err, ExportError::UnmappedGlyph(_)));
}

#[test]
fn bad_options_are_rejected_up_front() {
    let err = export_png(
        &[],
        ExportOptions {
            size: 0,
            scale: 4.0,
        },
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::InvalidOptions));

    let err = export_png(
        &[],
        ExportOptions {
            size: 64,
            scale: 0.0,
        },
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::InvalidOptions));
}
