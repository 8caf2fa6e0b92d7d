// Host-side tests for scene text layout, font metrics and panel copy.
// `core` builds on every target, so these link against the library directly.

use portfolio_web::core::constants::{ABOUT_COLOR, CONTACT_COLOR, WORK_COLOR};
use portfolio_web::core::font::Typeface;
use portfolio_web::core::layout::{css_hex, row_centers, SceneLayout};
use portfolio_web::core::panels::panel_content;
use portfolio_web::core::{Label, Section};

const FONT_JSON: &str = r#"{
    "glyphs": {
        "A": { "ha": 500, "x_min": 0, "o": "m 0 0 l 1 1" },
        "B": { "ha": 600 },
        "?": { "ha": 400 }
    },
    "resolution": 1000,
    "familyName": "Test Bold",
    "ascender": 900
}"#;

#[test]
fn row_centers_keep_equal_gaps() {
    let widths = [600.0, 750.0, 1050.0];
    let c = row_centers(widths, 800.0);
    assert_eq!(c, [-1700.0, -225.0, 1475.0]);
    for i in 0..2 {
        let gap = (c[i + 1] - widths[i + 1] / 2.0) - (c[i] + widths[i] / 2.0);
        assert!((gap - 800.0).abs() < 1e-3);
    }
    // the row is centred on zero
    let left = c[0] - widths[0] / 2.0;
    let right = c[2] + widths[2] / 2.0;
    assert!((left + right).abs() < 1e-3);
}

#[test]
fn single_word_row_is_centred() {
    assert_eq!(row_centers([300.0], 50.0), [0.0]);
}

#[test]
fn layout_anchors_follow_the_ground_plane() {
    let layout = SceneLayout::new(50.0, [600.0, 750.0, 1050.0]);
    let enter = layout.label(Label::Enter);
    assert_eq!(enter.anchor.to_array(), [0.0, 250.0, -3000.0]);
    assert_eq!(enter.size, 400.0);

    let portfolio = layout.label(Label::Portfolio);
    assert_eq!(portfolio.anchor.to_array(), [0.0, 250.0, -1000.0]);

    for s in Section::ALL {
        let nav = layout.label(Label::Nav(s));
        assert_eq!(nav.anchor.y, 350.0);
        assert_eq!(nav.anchor.z, -1000.0);
        assert_eq!(nav.size, 240.0);
    }
}

#[test]
fn navigation_row_is_mirrored_to_face_the_camera() {
    // read from the default camera at -Z looking +Z, WORK is on the left of screen,
    // which is +X in world space
    let layout = SceneLayout::new(0.0, [600.0, 750.0, 1050.0]);
    let work = layout.label(Label::Nav(Section::Work)).anchor.x;
    let about = layout.label(Label::Nav(Section::About)).anchor.x;
    let contact = layout.label(Label::Nav(Section::Contact)).anchor.x;
    assert_eq!(work, 1700.0);
    assert_eq!(about, 225.0);
    assert_eq!(contact, -1475.0);
    assert!(work > about && about > contact);
}

#[test]
fn section_colors() {
    let layout = SceneLayout::with_font(0.0, None);
    assert_eq!(layout.label(Label::Nav(Section::Work)).color, WORK_COLOR);
    assert_eq!(layout.label(Label::Nav(Section::About)).color, ABOUT_COLOR);
    assert_eq!(layout.label(Label::Nav(Section::Contact)).color, CONTACT_COLOR);
    assert_eq!(layout.label(Label::Enter).color, [1.0, 1.0, 1.0]);

    assert_eq!(css_hex(WORK_COLOR), "#ff6b9d");
    assert_eq!(css_hex(ABOUT_COLOR), "#4ecdc4");
    assert_eq!(css_hex(CONTACT_COLOR), "#ffe66d");
    assert_eq!(css_hex([2.0, -1.0, 0.5]), "#ff0080");
}

#[test]
fn typeface_measures_text() {
    let face = Typeface::from_json("test.json", FONT_JSON.as_bytes()).expect("valid font");
    assert!((face.text_width("AB", 100.0) - 110.0).abs() < 1e-3);
    // missing glyphs use the '?' advance
    assert!((face.text_width("AZ", 100.0) - 90.0).abs() < 1e-3);
    assert_eq!(face.text_width("", 100.0), 0.0);
}

#[test]
fn typeface_without_fallback_glyph_uses_half_em() {
    let json = r#"{ "glyphs": { "A": { "ha": 700 } }, "resolution": 1000 }"#;
    let face = Typeface::from_json("test.json", json.as_bytes()).expect("valid font");
    assert!((face.text_width("Z", 200.0) - 100.0).abs() < 1e-3);
}

#[test]
fn typeface_rejects_bad_input() {
    assert!(Typeface::from_json("bad.json", b"not json").is_err());
    let zero = r#"{ "glyphs": {}, "resolution": 0 }"#;
    assert!(Typeface::from_json("zero.json", zero.as_bytes()).is_err());
}

#[test]
fn layout_uses_font_widths_when_available() {
    let json = r#"{ "glyphs": { "?": { "ha": 1000 } }, "resolution": 1000 }"#;
    let face = Typeface::from_json("mono.json", json.as_bytes()).expect("valid font");
    let measured = SceneLayout::with_font(0.0, Some(&face));
    // every glyph is one em, so WORK=4, ABOUT=5, CONTACT=7 ems at 240
    let expected = SceneLayout::new(0.0, [960.0, 1200.0, 1680.0]);
    for s in Section::ALL {
        let a = measured.label(Label::Nav(s)).anchor;
        let b = expected.label(Label::Nav(s)).anchor;
        assert!((a - b).length() < 1e-2);
    }
    assert_ne!(measured, SceneLayout::with_font(0.0, None));
}

#[test]
fn panel_copy_matches_sections() {
    for s in Section::ALL {
        let content = panel_content(s);
        assert_eq!(content.title, s.slug());
        assert!(!content.paragraphs.is_empty() || !content.links.is_empty());
    }
    assert_eq!(panel_content(Section::Work).accent, WORK_COLOR);
    let contact = panel_content(Section::Contact);
    assert!(!contact.links.is_empty());
    assert!(contact.links.iter().all(|l| !l.href.is_empty() && !l.text.is_empty()));
}
