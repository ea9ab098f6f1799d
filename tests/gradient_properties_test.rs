//! Gradient and parser properties, checked through the public API.
//!
//! Run: cargo test --test gradient_properties_test

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use proptest::prelude::*;

use color_fader::prelude::*;
use color_fader::{fade_colors_signed, Syntax};

fn raw(colors: &[&str]) -> Vec<RawColor> {
    colors.iter().copied().map(RawColor::from).collect()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn red_to_blue_over_ten_points() {
    let result = fade_colors(&raw(&["#ff0000", "#0000ff"]), 10).unwrap();

    assert_eq!(result.len(), 10);
    assert_eq!((result[0].r, result[0].b), (255, 0));
    assert_eq!((result[9].r, result[9].b), (0, 255));
    for pair in result.windows(2) {
        assert!(pair[1].r < pair[0].r, "red must strictly decrease: {pair:?}");
        assert!(pair[1].b > pair[0].b, "blue must strictly increase: {pair:?}");
    }
}

#[test]
fn nine_points_over_two_segments_hit_the_middle_stop() {
    let result = fade_colors(&raw(&["#ff0000", "#0f0", "#0000ff"]), 9).unwrap();
    assert_eq!(result[4], Rgba::new(0, 255, 0, 1.0));
}

#[test]
fn achromatic_hsl() {
    assert_eq!(parse_color("hsl(0,0%,50%)").unwrap(), Rgba::new(128, 128, 128, 1.0));
}

#[test]
fn short_hex_alpha_duplicates_digit() {
    let color = parse_color("#f008").unwrap();
    assert_relative_eq!(color.a, 136.0 / 255.0);
}

#[test]
fn rgb_channels_clamp() {
    assert_eq!(parse_color("rgb(300,-50,1000)").unwrap(), Rgba::new(255, 0, 255, 1.0));
}

#[test]
fn hsl_and_named_stops_mix() {
    let result = fade_colors(&raw(&["hsl(0, 100%, 50%)", "lime", "blue"]), 5).unwrap();
    assert_eq!(result[0], Rgba::RED);
    assert_eq!(result[2], Rgba::GREEN);
    assert_eq!(result[4], Rgba::BLUE);
}

#[test]
fn formatted_output_round_trips_through_parser() {
    let hex = fade_colors_formatted(&raw(&["black", "white"]), 5, &FadeOptions::new()).unwrap();
    let reparsed: Vec<RawColor> = hex.iter().map(|s| RawColor::from(s.as_str())).collect();
    assert_eq!(
        fade_colors(&reparsed, 5).unwrap(),
        fade_colors(&raw(&["black", "white"]), 5).unwrap()
    );
}

// ============================================================================
// Error cases
// ============================================================================

#[test]
fn empty_colors_fail_regardless_of_size() {
    for size in [-5, 0, 1, 10] {
        assert_eq!(fade_colors_signed(&[], size), Err(Error::EmptyInput));
    }
}

#[test]
fn non_positive_size_fails() {
    for size in [0, -1, -10] {
        assert_eq!(
            fade_colors_signed(&raw(&["red"]), size),
            Err(Error::InvalidSize { requested: size })
        );
    }
}

#[test]
fn too_few_rgb_components_is_invalid() {
    assert!(matches!(
        parse_color("rgb(255,0)"),
        Err(Error::InvalidFormat { syntax: Syntax::Rgb, .. })
    ));
}

#[test]
fn cmyk_is_unsupported() {
    assert_eq!(
        parse_color("cmyk(0,0,0,0)"),
        Err(Error::UnsupportedFormat("cmyk(0,0,0,0)".to_string()))
    );
}

#[test]
fn malformed_stop_aborts_gradient() {
    assert!(matches!(
        fade_colors(&raw(&["red", "#12345", "blue"]), 4),
        Err(Error::InvalidFormat { syntax: Syntax::Hex, .. })
    ));
}

// ============================================================================
// Properties
// ============================================================================

fn any_rgba() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, f64::from(a) / 255.0))
}

fn any_css(color: Rgba) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(color.to_hex_string()),
        Just(color.to_rgba_string()),
        Just(color.to_hex_string().to_uppercase()),
        Just(format!("  {}\t", color.to_hex_string())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_endpoints_match_parsed_stops(
        colors in prop::collection::vec(any_rgba(), 1..8),
        size in 1usize..200
    ) {
        let stops: Vec<RawColor> = colors.iter().map(|c| RawColor::from(c.to_hex_string())).collect();
        let result = fade_colors(&stops, size).unwrap();

        prop_assert_eq!(result.len(), size);
        prop_assert_eq!(result[0], parse_color(&colors[0].to_hex_string()).unwrap());
        if size > 1 {
            let last = colors[colors.len() - 1].to_hex_string();
            prop_assert_eq!(result[size - 1], parse_color(&last).unwrap());
        }
    }

    #[test]
    fn prop_single_output_point(colors in prop::collection::vec(any_rgba(), 1..8)) {
        let stops: Vec<RawColor> = colors.iter().copied().map(RawColor::from).collect();
        prop_assert_eq!(fade_colors(&stops, 1).unwrap(), vec![colors[0]]);
    }

    #[test]
    fn prop_hex_round_trip(color in any_rgba()) {
        let hex = color.to_hex_string();
        let reparsed = parse_color(&hex).unwrap();
        prop_assert_eq!(reparsed, color);
        prop_assert_eq!(reparsed.to_hex_string(), hex);
    }

    #[test]
    fn prop_css_spellings_agree(
        (color, css) in any_rgba().prop_flat_map(|c| (Just(c), any_css(c)))
    ) {
        let parsed = parse_color(&css).unwrap();
        prop_assert_eq!((parsed.r, parsed.g, parsed.b), (color.r, color.g, color.b));
        prop_assert!((parsed.a - color.a).abs() < 1e-12);
    }
}
