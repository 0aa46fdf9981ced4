//! Property tests for shell quoting.

use proptest::prelude::*;

use shipsync::domain::value_objects::shell_quote;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: words made of path-safe characters are never quoted.
    #[test]
    fn property_safe_words_unchanged(s in "[A-Za-z0-9/._:=@,+-]{1,64}") {
        prop_assert_eq!(shell_quote(&s), s);
    }

    /// PROPERTY: anything else is wrapped in single quotes and every quote
    /// inside is closed, escaped and reopened.
    #[test]
    fn property_unsafe_words_are_single_quoted(s in "(?s).{0,64}") {
        let quoted = shell_quote(&s);
        if quoted != s {
            prop_assert!(quoted.starts_with('\''));
            prop_assert!(quoted.ends_with('\''));
            let inner = &quoted[1..quoted.len() - 1];
            prop_assert_eq!(inner.replace("'\\''", "'"), s);
        }
    }
}
