use crate::config::Config;

/// Decodes bytes as UTF-8, dropping every invalid sequence.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Splits on `\n`, `\r\n` and lone `\r`. Terminators are not included, and a
/// trailing terminator does not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Whitespace as the blank-line test sees it: Unicode whitespace plus the
/// ASCII separators U+001C..=U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn escape_quotes(line: &str) -> String {
    line.replace('"', "\\\"")
}

/// File name with the shader extension removed. Names that would be left
/// without a stem (`.glsl`, `..glsl`) are kept whole.
pub fn file_stem<'a>(config: &Config, file_name: &'a str) -> &'a str {
    file_name
        .strip_suffix(config.extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|stem| !stem.chars().all(|c| c == '.'))
        .unwrap_or(file_name)
}

pub fn derive_identifier(config: &Config, file_name: &str) -> String {
    let stem = file_stem(config, file_name).replace('.', "_");
    format!("{stem}{}", config.suffix)
}

pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[test]
fn decode_drops_invalid_sequences() {
    assert_eq!(decode_lossy(b"ab\xffc\xc3"), "abc");
    assert_eq!(decode_lossy("fragColor \u{fffd}".as_bytes()), "fragColor \u{fffd}");
}

#[test]
fn split_universal_newlines() {
    let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
    assert_eq!(lines, ["a", "b", "c", "d"]);
    let lines: Vec<_> = split_lines("a\n\n").collect();
    assert_eq!(lines, ["a", ""]);
    assert_eq!(split_lines("").count(), 0);
    assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
}

#[test]
fn separators_are_blank() {
    assert!(is_blank(' '));
    assert!(is_blank('\u{85}'));
    assert!(is_blank('\x1c'));
    assert!(is_blank('\x1f'));
    assert!(!is_blank('\x1b'));
    assert!(!is_blank('a'));
}

#[test]
fn escape_only_quotes() {
    assert_eq!(escape_quotes(r#"abc"def"#), r#"abc\"def"#);
    assert_eq!(escape_quotes(r"a\nb"), r"a\nb");
}

#[test]
fn identifier_from_file_name() {
    let config = Config::default();
    assert_eq!(derive_identifier(&config, "water.frag.glsl"), "water_frag_shader");
    assert_eq!(derive_identifier(&config, "basic.glsl"), "basic_shader");
    assert_eq!(derive_identifier(&config, "a..glsl"), "a__shader");
    assert_eq!(derive_identifier(&config, ".glsl"), "_glsl_shader");
    assert_eq!(derive_identifier(&config, "..glsl"), "__glsl_shader");
}

#[test]
fn c_identifiers() {
    assert!(is_c_identifier("water_frag_shader"));
    assert!(is_c_identifier("_glsl_shader"));
    assert!(!is_c_identifier("2d_shader"));
    assert!(!is_c_identifier("my-shader_shader"));
    assert!(!is_c_identifier(""));
}
