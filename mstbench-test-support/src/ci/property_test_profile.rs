//! Property-test run profile read from the environment.
//!
//! CI raises case counts and enables forking through environment variables;
//! local runs fall back to the defaults each suite passes in. Invalid values
//! are logged and ignored rather than aborting the suite.

use std::{env, num::NonZeroU32};

/// Environment variable overriding proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const MSTBENCH_PBT_FORK_ENV_KEY: &str = "MSTBENCH_PBT_FORK";
/// Environment variable overriding the repetition count of determinism
/// properties.
pub const DETERMINISM_REPS_ENV_KEY: &str = "MSTBENCH_MST_PBT_DETERMINISM_REPS";

/// Resolved proptest settings for one suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile, preferring environment overrides over the given
    /// defaults.
    ///
    /// # Examples
    /// ```
    /// use mstbench_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, |raw| {
                parse_positive(raw).map(NonZeroU32::get)
            }),
            fork: override_or(MSTBENCH_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

/// Returns how many times determinism properties should repeat each run.
#[must_use]
pub fn determinism_repetitions(default: usize) -> usize {
    override_or(DETERMINISM_REPS_ENV_KEY, default, |raw| {
        parse_positive(raw).map(|reps| reps.get() as usize)
    })
}

fn override_or<T>(key: &'static str, default: T, parse: impl Fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<NonZeroU32, String> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|error| format!("expected a positive integer: {error}"))
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean switch")),
    }
}
