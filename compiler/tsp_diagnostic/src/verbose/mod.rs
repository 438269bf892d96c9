//! Opt-in verbose output for test runs.
//!
//! Set `TSP_VERBOSE_TEST_OUTPUT` to a non-empty value to have tests print
//! extra detail (emitted files, intermediate models). The variable is read
//! once per process.

use std::sync::OnceLock;

/// Environment variable enabling verbose test output.
pub const VERBOSE_TEST_OUTPUT_ENV: &str = "TSP_VERBOSE_TEST_OUTPUT";

/// Whether verbose test output is enabled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct VerboseConfig {
    pub enabled: bool,
}

impl VerboseConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(VERBOSE_TEST_OUTPUT_ENV).as_deref())
    }

    fn from_value(value: Option<&std::ffi::OsStr>) -> Self {
        VerboseConfig {
            enabled: value.is_some_and(|v| !v.is_empty()),
        }
    }

    /// The process-wide configuration, read on first use.
    pub fn global() -> VerboseConfig {
        static GLOBAL: OnceLock<VerboseConfig> = OnceLock::new();
        *GLOBAL.get_or_init(VerboseConfig::from_env)
    }

    /// Print `message` if enabled.
    pub fn log(self, message: &str) {
        self.log_with(|print| print(message));
    }

    /// Run `callback` with a printer if enabled.
    ///
    /// For output that is costly to build; nothing is computed when disabled.
    pub fn log_with(self, callback: impl FnOnce(&mut dyn FnMut(&str))) {
        if self.enabled {
            let mut print = |message: &str| println!("{message}");
            callback(&mut print);
        }
    }
}

/// Print `message` when verbose test output is enabled.
pub fn log_verbose_test_output(message: &str) {
    VerboseConfig::global().log(message);
}

/// Run `callback` with a printer when verbose test output is enabled.
pub fn log_verbose_test_output_with(callback: impl FnOnce(&mut dyn FnMut(&str))) {
    VerboseConfig::global().log_with(callback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn unset_or_empty_is_disabled() {
        assert!(!VerboseConfig::from_value(None).enabled);
        assert!(!VerboseConfig::from_value(Some(OsStr::new(""))).enabled);
    }

    #[test]
    fn any_value_enables() {
        assert!(VerboseConfig::from_value(Some(OsStr::new("1"))).enabled);
        assert!(VerboseConfig::from_value(Some(OsStr::new("false"))).enabled);
    }

    #[test]
    fn disabled_skips_callback() {
        let mut ran = false;
        VerboseConfig { enabled: false }.log_with(|_| ran = true);
        assert!(!ran);
    }

    #[test]
    fn enabled_runs_callback_with_printer() {
        let mut lines = 0;
        VerboseConfig { enabled: true }.log_with(|print| {
            print("first");
            print("second");
            lines = 2;
        });
        assert_eq!(lines, 2);
    }

    #[test]
    fn global_is_stable() {
        assert_eq!(VerboseConfig::global(), VerboseConfig::global());
        log_verbose_test_output("visible only with the variable set");
        log_verbose_test_output_with(|print| print("same"));
    }
}
