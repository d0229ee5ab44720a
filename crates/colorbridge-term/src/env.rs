use clap::ValueEnum;

/// A trait to abstract over environment variable access.
///
/// Only [`Environment::read_os`] needs implementing. Tests substitute a fake
/// environment, so that color detection does not depend on the process's
/// actual environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine whether the environment variable has the given value.
    fn has_value(&self, key: &str, expected_value: &str) -> bool {
        self.read_os(key).is_some_and(|v| v == expected_value)
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

/// The user's choice for colored output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ColorChoice {
    /// Use color when the environment and terminal support it
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Determine whether to render color swatches.
    ///
    /// For [`ColorChoice::Auto`], a non-empty `NO_COLOR` disables color and a
    /// non-empty `FORCE_COLOR` enables it. Otherwise, output must go to a
    /// terminal other than `TERM=dumb`.
    pub(crate) fn use_color(self, env: &impl Environment, has_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if env.is_non_empty("NO_COLOR") {
                    false
                } else if env.is_non_empty("FORCE_COLOR") {
                    true
                } else {
                    has_tty && !env.has_value("TERM", "dumb")
                }
            }
        }
    }
}
