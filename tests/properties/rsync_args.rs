//! Property tests for the rsync invocation.

use proptest::prelude::*;

use shipsync::infrastructure::RsyncTransfer;
use shipsync::DeployConfig;

fn pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9.*_/-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one `--exclude <p>` pair per pattern, in configured order,
    /// between the fixed flags and the source/destination operands.
    #[test]
    fn property_one_exclude_per_pattern_in_order(
        patterns in proptest::collection::vec(pattern(), 0..12),
        dry_run in any::<bool>(),
    ) {
        let mut config = DeployConfig::default();
        config.sync.exclude = patterns.clone();

        let inv = RsyncTransfer::new(&config).dry_run(dry_run).invocation();
        let args = inv.arguments();

        let fixed = if dry_run { 3 } else { 2 };
        prop_assert_eq!(&args[..2], ["-avz", "--delete"]);
        prop_assert_eq!(args.len(), fixed + patterns.len() * 2 + 2);

        let excludes: Vec<&String> = args[fixed..args.len() - 2]
            .chunks(2)
            .map(|pair| {
                assert_eq!(pair[0], "--exclude");
                &pair[1]
            })
            .collect();
        let expected: Vec<&String> = patterns.iter().collect();
        prop_assert_eq!(excludes, expected);

        prop_assert_eq!(&args[args.len() - 1], &config.remote_destination());
    }
}
