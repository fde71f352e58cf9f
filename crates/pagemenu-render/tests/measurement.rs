//! Integration tests for text measurement as seen by menu layout code.

use pagemenu_render::text::{Font, FontFamily, HeuristicTextMeasurer, TextMeasurer};
use pagemenu_render::{Rect, Size};

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn titles() -> Vec<&'static str> {
    vec!["", "A", "Home", "Library", "Recently Played", "Downloads and Offline"]
}

#[test]
fn test_width_grows_with_title_length() {
    setup();
    let font = Font::new(FontFamily::SansSerif, 14.0);
    let widths: Vec<f32> = titles()
        .into_iter()
        .map(|t| HeuristicTextMeasurer.measure(t, &font).width)
        .collect();

    for pair in widths.windows(2) {
        assert!(pair[0] <= pair[1], "{widths:?} is not non-decreasing");
    }
}

#[test]
fn test_measurement_is_deterministic() {
    let font = Font::new(FontFamily::Name("Inter".into()), 17.0);
    let measurer = HeuristicTextMeasurer;
    assert_eq!(
        measurer.measure("Favorites", &font),
        measurer.measure("Favorites", &font)
    );
}

#[test]
fn test_larger_font_measures_larger() {
    let small = Font::new(FontFamily::SansSerif, 12.0);
    let large = small.with_size(18.0);
    let a = HeuristicTextMeasurer.measure("Search", &small);
    let b = HeuristicTextMeasurer.measure("Search", &large);
    assert!(b.width > a.width);
    assert!(b.height > a.height);
}

#[test]
fn test_measured_text_fits_item_frame() {
    let font = Font::new(FontFamily::SansSerif, 16.0);
    let text = HeuristicTextMeasurer.measure("Home", &font);
    let frame = Rect::new(0.0, 0.0, text.width + 16.0, 50.0);
    let label = frame.inset(8.0, (frame.height() - text.height) / 2.0);
    assert_eq!(label.size, Size::new(text.width, text.height));
}
