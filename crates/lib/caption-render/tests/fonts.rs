//! Tests for font loading and caption styling.

use caption_fit::{Geometry, Size};
use caption_render::{DEFAULT_FONT_FAMILY, FontError, Style, load_font_file};

#[test]
fn missing_font_file_is_a_read_error() {
    let mut db = cosmic_text::fontdb::Database::new();

    let error = load_font_file(&mut db, std::path::Path::new("tests/fixtures/missing.ttf"))
        .expect_err("missing file should error");

    assert!(matches!(error, FontError::Read { .. }));
    assert!(error.to_string().contains("missing.ttf"));
}

#[test]
fn file_without_faces_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    std::io::Write::write_all(&mut file, b"definitely not a font").expect("write temp file");
    let mut db = cosmic_text::fontdb::Database::new();

    let error = load_font_file(&mut db, file.path()).expect_err("junk should error");

    assert!(matches!(error, FontError::NoFaces { .. }));
    assert_eq!(db.len(), 0);
}

#[test]
fn default_style_scales_shadow_with_height() {
    let style = Style::for_image(&Geometry::new(Size::new(512.0, 512.0)));

    assert_eq!(style.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(style.foreground, image::Rgba([255, 255, 255, 255]));
    assert_eq!(style.shadow.offset_x, 0.0);
    assert_eq!(style.shadow.offset_y, -8.0);
    assert_eq!(style.shadow.blur_radius, 8.0);
}

#[test]
fn font_family_override() {
    let style = Style::for_image(&Geometry::new(Size::new(64.0, 64.0))).with_font_family("Inter");

    assert_eq!(style.font_family, "Inter");
    assert_eq!(style.shadow.blur_radius, 1.0);
}

#[test]
fn fonts_debug_reports_face_count() {
    let fonts = caption_render::Fonts::system();

    let debug = format!("{fonts:?}");

    assert!(debug.starts_with("Fonts"), "got: {debug}");
    assert!(debug.contains("faces"), "got: {debug}");
}
