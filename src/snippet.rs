//! Kotlin dependency pin injected into the Android app module
//!
//! Cordova plugins pull in different kotlin-stdlib versions. Without a pin,
//! Gradle ends up with both the jdk7/jdk8 split artifacts and the merged
//! stdlib on the classpath, and the build fails on duplicate classes.

macro_rules! pinned_version {
    () => {
        "1.8.22"
    };
}

/// Kotlin version every stdlib artifact is resolved to
pub const PINNED_KOTLIN_VERSION: &str = pinned_version!();

/// Resolution strategy appended to app/build.gradle
///
/// Must stay byte-for-byte stable: existing projects detect it through `MARKER`.
pub const RESOLUTION_STRATEGY: &str = concat!(
    r#"configurations.all {
    resolutionStrategy {
        eachDependency { details ->
            if (details.requested.group == 'org.jetbrains.kotlin') {
                if (details.requested.name == 'kotlin-stdlib' ||
                    details.requested.name == 'kotlin-stdlib-jdk7' ||
                    details.requested.name == 'kotlin-stdlib-jdk8') {
                    details.useVersion '"#,
    pinned_version!(),
    r#"'
                }
            }
        }
    }
}"#
);

/// Text whose presence means the strategy was already injected
pub const MARKER: &str = concat!("details.useVersion '", pinned_version!(), "'");

#[cfg(test)]
mod tests {
    use super::*;

    const KOTLIN_GROUP: &str = "org.jetbrains.kotlin";
    const PINNED_ARTIFACTS: [&str; 3] = ["kotlin-stdlib", "kotlin-stdlib-jdk7", "kotlin-stdlib-jdk8"];

    #[test]
    fn test_marker_appears_once_in_strategy() {
        assert_eq!(RESOLUTION_STRATEGY.matches(MARKER).count(), 1);
    }

    #[test]
    fn test_marker_is_the_literal_use_version_line() {
        assert_eq!(MARKER, "details.useVersion '1.8.22'");
        assert!(RESOLUTION_STRATEGY.contains("                    details.useVersion '1.8.22'\n"));
    }

    #[test]
    fn test_marker_uses_pinned_version() {
        assert_eq!(MARKER, format!("details.useVersion '{}'", PINNED_KOTLIN_VERSION));
    }

    #[test]
    fn test_strategy_names_every_pinned_artifact() {
        assert!(RESOLUTION_STRATEGY.contains(&format!("'{}'", KOTLIN_GROUP)));
        for artifact in PINNED_ARTIFACTS {
            assert!(
                RESOLUTION_STRATEGY.contains(&format!("details.requested.name == '{}'", artifact)),
                "missing artifact {}",
                artifact
            );
        }
    }

    #[test]
    fn test_strategy_has_no_surrounding_newlines() {
        assert!(RESOLUTION_STRATEGY.starts_with("configurations.all {"));
        assert!(RESOLUTION_STRATEGY.ends_with('}'));
    }
}
