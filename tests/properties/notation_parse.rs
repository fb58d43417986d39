//! Property tests for notation parsing.

use proptest::prelude::*;

use impldeps::Notation;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics, and a rejected input is quoted back.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        match input.parse::<Notation>() {
            Ok(notation) => {
                let trimmed = input.trim();
                prop_assert!(
                    trimmed == notation.display_name() || trimmed == notation.name()
                );
            }
            Err(err) => {
                let message = err.to_string();
                prop_assert!(message.contains(input.trim()), "{}", message);
            }
        }
    }

    /// PROPERTY: Surrounding whitespace is ignored.
    #[test]
    fn property_parse_ignores_padding(
        idx in 0..Notation::COUNT,
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
        registry_key in any::<bool>(),
    ) {
        let notation = Notation::ALL[idx];
        let text = if registry_key { notation.name() } else { notation.display_name() };
        let padded = format!("{left}{text}{right}");
        prop_assert_eq!(padded.parse::<Notation>().unwrap(), notation);
    }
}
