//! Wiring style functions into a grid column definition.

use cellstyle::{
    format_percent, similarity_percent, style_for, CellStyle, StyleError, StyleFunctions,
    RECOMMENDATION_MATCH_STYLE,
};
use serde_json::json;

#[test]
fn column_definition_binds_match_style() {
    let functions = StyleFunctions::with_defaults();

    let column = json!({
        "headerName": "Recommendation Match",
        "field": "similarity_percent",
        "cellStyle": functions.binding(RECOMMENDATION_MATCH_STYLE).unwrap(),
    });

    assert_eq!(
        column["cellStyle"]["function"],
        "recommendationMatchStyle(params.value)"
    );
}

#[test]
fn rows_are_styled_from_similarity() {
    let functions = StyleFunctions::with_defaults();
    let rows = [
        ("Heat (1995)", 0.962),
        ("Ronin (1998)", 0.81),
        ("Collateral (2004)", 0.64),
        ("Drive (2011)", 0.2),
    ];

    let styled: Vec<(String, CellStyle)> = rows
        .iter()
        .map(|(_, similarity)| {
            let percent = similarity_percent(*similarity);
            let style = functions
                .apply(RECOMMENDATION_MATCH_STYLE, percent)
                .unwrap();
            (format_percent(percent), style)
        })
        .collect();

    assert_eq!(styled[0], ("96%".to_string(), style_for(96.0)));
    assert_eq!(styled[1], ("81%".to_string(), style_for(81.0)));
    assert_eq!(styled[2], ("64%".to_string(), style_for(64.0)));
    assert_eq!(styled[3], ("20%".to_string(), CellStyle::default()));
}

#[test]
fn application_supplies_its_own_functions() {
    let functions = StyleFunctions::new().add("matchStyle", style_for);

    assert!(functions.apply("matchStyle", 70.0).is_ok());
    assert!(matches!(
        functions.apply(RECOMMENDATION_MATCH_STYLE, 70.0),
        Err(StyleError::UnknownFunction(_))
    ));
}

#[test]
fn functions_can_be_shared_across_threads() {
    let functions = StyleFunctions::with_defaults();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let functions = functions.clone();
            std::thread::spawn(move || {
                let score = 50.0 + 15.0 * i as f64;
                functions.apply(RECOMMENDATION_MATCH_STYLE, score).unwrap()
            })
        })
        .collect();

    let results: Vec<CellStyle> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], style_for(50.0));
    assert_eq!(results[1], style_for(65.0));
    assert_eq!(results[2], style_for(80.0));
    assert_eq!(results[3], style_for(95.0));
}
