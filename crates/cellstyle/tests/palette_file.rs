//! Loading palettes from YAML files.

use std::io::Write;

use cellstyle::{style_for, CellStyle, Color, MatchTier, Palette, StyleError};

#[test]
fn loads_palette_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
strong:
  bg: "#4CAF50"
  fg: white
weak:
  fg: gray
"##
    )
    .unwrap();

    let palette = Palette::from_file(file.path()).unwrap();

    assert_eq!(
        palette.style_for(85.0),
        CellStyle::new()
            .fg(Color::WHITE)
            .bg(Color::Rgb(0x4C, 0xAF, 0x50))
    );
    assert_eq!(
        palette.style(MatchTier::Weak),
        &CellStyle::new().fg(Color::parse("gray").unwrap())
    );
    // untouched tiers keep the built-in styles
    assert_eq!(palette.style_for(99.0), style_for(99.0));
    assert_eq!(palette.style_for(60.0), style_for(60.0));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Palette::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, StyleError::Io(_)));
}

#[test]
fn parse_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "good: [unclosed").unwrap();

    let err = Palette::from_file(file.path()).unwrap_err();
    match &err {
        StyleError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
