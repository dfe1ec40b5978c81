use std::fmt;
use std::path::PathBuf;

use crate::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    /// Diagnostics are written.
    Local,
    /// Diagnostics are dropped; selected by the `online-judge` feature.
    OnlineJudge,
}

impl BuildMode {
    pub const CURRENT: BuildMode = if debug::ENABLED { BuildMode::Local } else { BuildMode::OnlineJudge };
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildMode::Local => "local",
            BuildMode::OnlineJudge => "online-judge",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestCount {
    /// Solve is called exactly once.
    #[default]
    Single,
    /// The first token of the input is the number of cases.
    FromInput,
}

/// Where the runner reads, writes and logs.
///
/// Streams left as `None` fall back to stdin, stdout and stderr.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub diagnostics: Option<PathBuf>,
    pub tests: TestCount,
    pub seed: Option<u64>,
    pub mode: BuildMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            output: None,
            diagnostics: None,
            tests: TestCount::Single,
            seed: None,
            mode: BuildMode::CURRENT,
        }
    }
}

impl Config {
    pub const INPUT_FILE: &'static str = "input.txt";
    pub const OUTPUT_FILE: &'static str = "output.txt";
    pub const DIAGNOSTICS_FILE: &'static str = "debug.txt";

    /// `input.txt`, `output.txt` and `debug.txt` in the working directory.
    pub fn local_files() -> Self {
        Config::default()
            .input(Self::INPUT_FILE)
            .output(Self::OUTPUT_FILE)
            .diagnostics(Self::DIAGNOSTICS_FILE)
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn diagnostics(mut self, path: impl Into<PathBuf>) -> Self {
        self.diagnostics = Some(path.into());
        self
    }

    pub fn tests(mut self, tests: TestCount) -> Self {
        self.tests = tests;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Builds a [`Config`] with file-backed streams.
///
/// ```
/// use std::path::Path;
///
/// let config = contest_template::file_io!(in: "in.txt", out: "out.txt");
/// assert_eq!(config.input.as_deref(), Some(Path::new("in.txt")));
/// assert_eq!(config.diagnostics, None);
/// ```
#[macro_export]
macro_rules! file_io {
    (
        $(in : $in_file : literal $(,)?)?
        $(out: $out_file: literal $(,)?)?
        $(err: $err_file: literal $(,)?)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::config::Config::default();
        $(config = config.input($in_file);)?
        $(config = config.output($out_file);)?
        $(config = config.diagnostics($err_file);)?
        config
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_to_standard_streams() {
        let config = Config::default();
        assert_eq!(config.input, None);
        assert_eq!(config.output, None);
        assert_eq!(config.diagnostics, None);
        assert_eq!(config.tests, TestCount::Single);
        assert_eq!(config.mode, BuildMode::CURRENT);
    }

    #[test]
    fn local_files_use_fixed_names() {
        let config = Config::local_files();
        assert_eq!(config.input.as_deref(), Some(Path::new("input.txt")));
        assert_eq!(config.output.as_deref(), Some(Path::new("output.txt")));
        assert_eq!(config.diagnostics.as_deref(), Some(Path::new("debug.txt")));
    }

    #[test]
    fn file_io_macro() {
        let all = crate::file_io!(in: "a", out: "b", err: "c");
        assert_eq!(all, Config::default().input("a").output("b").diagnostics("c"));
        let only_out = crate::file_io!(out: "b");
        assert_eq!(only_out, Config::default().output("b"));
        assert_eq!(crate::file_io!(), Config::default());
    }

    #[test]
    fn mode_matches_feature() {
        assert_eq!(BuildMode::CURRENT == BuildMode::Local, debug::ENABLED);
        assert_eq!(BuildMode::OnlineJudge.to_string(), "online-judge");
    }
}
