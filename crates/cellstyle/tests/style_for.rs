//! Behavior of the score-to-style function at and around tier boundaries.

use cellstyle::{
    style_for, CellStyle, Color, FontWeight, LIGHT_GREEN, MEDIUM_GREEN, PALE_YELLOW, STRONG_GREEN,
};

fn top_tier() -> CellStyle {
    CellStyle {
        text_color: Some(Color::WHITE),
        background_color: Some(STRONG_GREEN),
        font_weight: Some(FontWeight::Bold),
    }
}

fn background(color: Color) -> CellStyle {
    CellStyle {
        text_color: None,
        background_color: Some(color),
        font_weight: None,
    }
}

// ============================================================================
// Boundary scenarios
// ============================================================================

#[test]
fn exactly_95_is_top_tier() {
    assert_eq!(style_for(95.0), top_tier());
}

#[test]
fn just_below_95_is_medium_green() {
    assert_eq!(style_for(94.999), background(MEDIUM_GREEN));
}

#[test]
fn exactly_80_is_medium_green() {
    assert_eq!(style_for(80.0), background(MEDIUM_GREEN));
}

#[test]
fn exactly_65_is_light_green() {
    assert_eq!(style_for(65.0), background(LIGHT_GREEN));
}

#[test]
fn exactly_50_is_pale_yellow() {
    assert_eq!(style_for(50.0), background(PALE_YELLOW));
}

#[test]
fn just_below_50_is_unstyled() {
    assert_eq!(style_for(49.9), CellStyle::default());
}

#[test]
fn negative_score_is_unstyled() {
    assert_eq!(style_for(-5.0), CellStyle::default());
}

#[test]
fn score_far_above_100_is_top_tier() {
    assert_eq!(style_for(1000.0), top_tier());
}

// ============================================================================
// Serialized form consumed by the grid
// ============================================================================

#[test]
fn serialized_styles_match_host_mapping() {
    let cases = [
        (
            97.0,
            serde_json::json!({
                "color": "white",
                "backgroundColor": "#72BF78",
                "fontWeight": "bold"
            }),
        ),
        (85.0, serde_json::json!({ "backgroundColor": "#A0D683" })),
        (70.0, serde_json::json!({ "backgroundColor": "#D3EE98" })),
        (55.0, serde_json::json!({ "backgroundColor": "#FEFF9F" })),
        (10.0, serde_json::json!({})),
    ];

    for (score, expected) in cases {
        assert_eq!(
            serde_json::to_value(style_for(score)).unwrap(),
            expected,
            "score {}",
            score
        );
    }
}

#[test]
fn idempotent() {
    for score in [-1.0, 0.0, 50.0, 64.99, 79.0, 80.0, 99.5] {
        assert_eq!(style_for(score), style_for(score));
    }
}
