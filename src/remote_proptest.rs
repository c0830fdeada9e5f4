//! Property-based tests for remote identity extraction and placement.
//!
//! These tests use proptest to generate random owners, names and hosts and
//! verify that extraction and resolution hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{Config, RemoteStrategy};
    use crate::path::clean_path;
    use crate::placement::resolve;
    use crate::remote::{remotes_by_name, Remote, RemoteIdentity};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    // Segments git hosts accept: no slashes, never "." or ".."
    const SEGMENT: &str = "[A-Za-z0-9_-][A-Za-z0-9_.-]{0,20}";
    const HOST: &str = "[a-z][a-z0-9-]{0,10}(\\.[a-z]{2,5}){1,2}";

    fn strategy() -> impl Strategy<Value = RemoteStrategy> {
        prop_oneof![
            Just(RemoteStrategy::Default),
            Just(RemoteStrategy::Origin),
            Just(RemoteStrategy::Symlink),
            Just(RemoteStrategy::Quarantine),
        ]
    }

    /// Names ending in ".git" lose the suffix, so keep generated names
    /// distinct from it
    fn name_segment() -> impl Strategy<Value = String> {
        SEGMENT.prop_filter("name must not end with .git", |s| !s.ends_with(".git"))
    }

    // ============================================================================
    // RemoteIdentity::from_url property tests
    // ============================================================================

    proptest! {
        /// Property: https://host/OWNER/NAME.git yields exactly (OWNER, NAME)
        #[test]
        fn https_url_yields_owner_and_name(
            host in HOST,
            owner in SEGMENT,
            name in name_segment(),
        ) {
            let url = format!("https://{}/{}/{}.git", host, owner, name);
            let id = RemoteIdentity::from_url(&url).unwrap();
            prop_assert_eq!(id.owner, owner);
            prop_assert_eq!(id.name, name);
        }

        /// Property: user@host:OWNER/NAME.git yields exactly (OWNER, NAME)
        #[test]
        fn ssh_url_yields_owner_and_name(
            host in HOST,
            owner in SEGMENT,
            name in name_segment(),
        ) {
            let url = format!("git@{}:{}/{}.git", host, owner, name);
            // Anything mentioning http is parsed as a URL first
            prop_assume!(!url.contains("http"));
            let id = RemoteIdentity::from_url(&url).unwrap();
            prop_assert_eq!(id.owner, owner);
            prop_assert_eq!(id.name, name);
        }

        /// Property: a single path segment is never enough
        #[test]
        fn single_segment_is_rejected(host in HOST, name in name_segment()) {
            let https = format!("https://{}/{}.git", host, name);
            let ssh = format!("git@{}:{}", host, name);
            prop_assert!(RemoteIdentity::from_url(&https).is_err());
            prop_assert!(RemoteIdentity::from_url(&ssh).is_err());
        }

        /// Property: extraction is deterministic
        #[test]
        fn extraction_is_deterministic(input in ".*") {
            let first = RemoteIdentity::from_url(&input).ok();
            let second = RemoteIdentity::from_url(&input).ok();
            prop_assert_eq!(first, second);
        }
    }

    // ============================================================================
    // resolve property tests
    // ============================================================================

    proptest! {
        /// Property: an origin-only repository lands at destination/owner/name
        /// whatever the strategy
        #[test]
        fn origin_only_ignores_strategy(
            owner in SEGMENT,
            name in name_segment(),
            remote_strategy in strategy(),
        ) {
            let config = Config {
                destination: PathBuf::from("/dest"),
                remote_strategy,
                ..Config::default()
            };
            let remotes = remotes_by_name(vec![Remote::new(
                "origin",
                format!("https://github.com/{}/{}.git", owner, name),
            )]);

            let placement = resolve(&config, "original", &remotes).unwrap();
            prop_assert_eq!(
                placement.primary,
                clean_path(&Path::new("/dest").join(&owner).join(&name))
            );
            prop_assert!(placement.aliases.is_empty());
        }

        /// Property: the primary path always stays under the destination
        #[test]
        fn primary_stays_under_destination(
            owner in SEGMENT,
            name in name_segment(),
            other_owner in SEGMENT,
            remote_strategy in strategy(),
        ) {
            prop_assume!(other_owner != "quarantine");
            prop_assume!(![&owner, &name, &other_owner].iter().any(|s| s.contains("http")));
            let config = Config {
                destination: PathBuf::from("/dest"),
                remote_strategy,
                ..Config::default()
            };
            let remotes = remotes_by_name(vec![
                Remote::new("origin", format!("git@github.com:{}/{}.git", owner, name)),
                Remote::new("fork", format!("git@github.com:{}/{}.git", other_owner, name)),
            ]);

            let placement = resolve(&config, "original", &remotes).unwrap();
            prop_assert!(placement.primary.starts_with("/dest"));
            for alias in &placement.aliases {
                prop_assert!(alias.starts_with("/dest"));
                prop_assert!(!alias.starts_with("/dest/quarantine"));
            }
        }
    }
}
