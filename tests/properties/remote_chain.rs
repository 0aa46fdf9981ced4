//! Property tests for remote command chaining.

use proptest::prelude::*;

use shipsync::domain::value_objects::RemoteChain;

fn step() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9./_-][a-z0-9 ./_-]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the chain line is the steps joined by ` && `, in order.
    #[test]
    fn property_chain_preserves_step_order(
        steps in proptest::collection::vec(step(), 1..8)
    ) {
        let chain = RemoteChain::new(steps.clone());
        let line = chain.command_line();

        let split: Vec<&str> = line.split(" && ").collect();
        prop_assert_eq!(split, steps.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(line.matches(" && ").count(), steps.len() - 1);
    }

    /// PROPERTY: a single step is sent as-is, with no separator.
    #[test]
    fn property_single_step_is_unchanged(s in step()) {
        prop_assert_eq!(RemoteChain::new([s.clone()]).command_line(), s);
    }
}
