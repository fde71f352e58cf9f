//! Integration tests for loading menu options from TOML files.

use std::io::Write;

use pagemenu::prelude::*;
use pagemenu::Error;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_configuration() {
    let file = write_config(
        r##"
        item_count = 4
        height = 44.0
        background_color = "#FAFAFA"

        [display_mode]
        kind = "standard"
        width_mode = "fixed"
        fixed_width = 96.0
        center_item = true
        scrolling_mode = "scroll_enabled"

        [focus_mode]
        kind = "round_rect"
        radius = 12.0
        horizontal_padding = 4.0
        vertical_padding = 6.0
        selected_color = "#EEEEEE"

        [item_style]
        text_color = "#808080"
        selected_text_color = "#000000"
        item_margin = 12.0
        font = { family = "sans-serif", size = 15.0 }
        selected_font = { family = "serif", size = 15.0, weight = 700 }
        "##,
    );

    let options = MenuOptions::from_toml_file(file.path()).unwrap();

    assert_eq!(options.item_count(), 4);
    assert_eq!(options.height(), 44.0);
    assert_eq!(options.background_color(), Color::from_rgb8(0xFA, 0xFA, 0xFA));
    assert_eq!(
        *options.display_mode(),
        DisplayMode::Standard {
            width_mode: WidthMode::Fixed { width: 96.0 },
            center_item: true,
            scrolling_mode: ScrollingMode::ScrollEnabled,
        }
    );
    assert!(options.focus_mode().clears_item_background());

    let style = options.item_style();
    assert_eq!(style.item_margin, 12.0);
    assert_eq!(*style.selected_font.family(), FontFamily::Serif);
    assert_eq!(style.selected_font.weight(), FontWeight::BOLD);

    let policy = ItemLayoutPolicy::from_options(&options);
    let size = policy.compute_size(
        &HeuristicTextMeasurer,
        "Anything",
        &style.font,
        Size::new(320.0, 568.0),
    );
    assert_eq!(size.width, 120.0);
}

#[test]
fn test_load_infinite_flexible() {
    let file = write_config(
        r#"
        [display_mode]
        kind = "infinite"
        "#,
    );
    let options = MenuOptions::from_toml_file(file.path()).unwrap();
    assert_eq!(*options.display_mode(), DisplayMode::infinite(WidthMode::Flexible));
    assert!(options.display_mode().centers_selected_item());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.toml");

    let err = MenuOptions::from_toml_file(&path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_syntax_error_is_reported() {
    let file = write_config("item_count = ");
    let err = MenuOptions::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_segmented_control_without_items_is_rejected() {
    let file = write_config(
        r#"
        [display_mode]
        kind = "segmented_control"
        "#,
    );
    let err = MenuOptions::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::ZeroItemCount));
}
