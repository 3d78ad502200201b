#![forbid(unsafe_code)]

//! Property tests for colour parsing and id allocation.

use proptest::prelude::*;
use tether_core::{BindError, Rgb, ValidationReason, WidgetIds};

proptest! {
    #[test]
    fn displayed_colour_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let colour = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::parse_hex(&colour.to_string()), Ok(colour));
        prop_assert_eq!(colour.to_string().to_uppercase().parse::<Rgb>(), Ok(colour));
    }

    #[test]
    fn parse_never_panics(text in ".{0,12}") {
        match Rgb::parse_hex(&text) {
            Ok(_) => {
                let digits = text.trim().trim_start_matches('#');
                prop_assert_eq!(digits.len(), 6);
            }
            Err(BindError::Validation { reason, .. }) => {
                prop_assert!(matches!(reason, ValidationReason::Empty | ValidationReason::NotAColour));
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    #[test]
    fn luminance_is_monotone_in_each_channel(r in 0u8..255, g in any::<u8>(), b in any::<u8>()) {
        prop_assert!(Rgb::new(r, g, b).luminance_u8() <= Rgb::new(r + 1, g, b).luminance_u8());
    }

    #[test]
    fn ids_are_unique_and_increasing(n in 1usize..64) {
        let mut ids = WidgetIds::new();
        let drawn: Vec<_> = (0..n).map(|_| ids.next_id()).collect();
        prop_assert!(drawn.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(drawn[0].get(), WidgetIds::BASE);
    }
}
