/// Settings for one generator run. The command-line tool always uses
/// [`DEFAULT_CONFIG`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// File extension selecting shader files, without the leading period.
    pub extension: &'static str,
    /// Appended to the derived identifier, before the `_str` of the declaration.
    pub suffix: &'static str,
    /// Preprocessor symbol used for the include guard.
    pub include_guard: &'static str,
    /// Sort selected files by name, so output does not depend on directory listing order.
    pub sort: bool,
}

pub const DEFAULT_CONFIG: Config = Config {
    extension: "glsl",
    suffix: "_shader",
    include_guard: "SHADER_STRINGS_H",
    sort: true,
};

impl Default for Config {
    fn default() -> Config {
        DEFAULT_CONFIG
    }
}

impl Config {
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension)
            .is_some_and(|rest| rest.ends_with('.'))
    }
}

#[test]
fn matches_only_full_extension() {
    assert!(DEFAULT_CONFIG.matches("water.frag.glsl"));
    assert!(DEFAULT_CONFIG.matches(".glsl"));
    assert!(!DEFAULT_CONFIG.matches("water.xglsl"));
    assert!(!DEFAULT_CONFIG.matches("glsl"));
    assert!(!DEFAULT_CONFIG.matches("water.glsl.bak"));
}
