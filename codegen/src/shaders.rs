use crate::config::Config;
use crate::error::{Error, ShaderError};
use crate::helper::{
    decode_lossy, derive_identifier, escape_quotes, is_blank, is_c_identifier, split_lines,
};
use log::warn;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ShaderFile {
    pub path: PathBuf,
    pub file_name: String,
    pub identifier: String,
}

/// Lists the shader files directly inside `dir`, without recursing.
pub fn find_shaders(config: &Config, dir: &Path) -> Result<Vec<ShaderFile>, Error> {
    let read_dir_error = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut shaders = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let Ok(file_name) = entry.file_name().into_string() else {
            warn!("skipping non-UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !config.matches(&file_name) {
            continue;
        }
        let identifier = derive_identifier(config, &file_name);
        if !is_c_identifier(&identifier) {
            warn!("{file_name} maps to {identifier}, which is not a valid C identifier");
        }
        shaders.push(ShaderFile {
            path: entry.path(),
            file_name,
            identifier,
        });
    }
    if config.sort {
        shaders.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }
    check_unique(&shaders)?;
    Ok(shaders)
}

fn check_unique(shaders: &[ShaderFile]) -> Result<(), Error> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for shader in shaders {
        if let Some(first) = seen.insert(&shader.identifier, &shader.file_name) {
            return Err(Error::DuplicateIdentifier {
                identifier: shader.identifier.clone(),
                first: first.to_owned(),
                second: shader.file_name.clone(),
            });
        }
    }
    Ok(())
}

/// Reads a shader and renders its body as a sequence of C string literal
/// fragments, one per source line.
pub fn shader_to_literal(path: &Path) -> Result<String, ShaderError> {
    let bytes = std::fs::read(path).map_err(|source| ShaderError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text_to_literal(&decode_lossy(&bytes)))
}

pub fn text_to_literal(text: &str) -> String {
    split_lines(text)
        .map(line_to_fragment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_to_fragment(line: &str) -> String {
    let line = line.replace('\0', "");
    if line.trim_matches(is_blank).is_empty() {
        "    \"\"".to_owned()
    } else {
        format!("    \"{}\\n\"", escape_quotes(&line).trim_end_matches(is_blank))
    }
}

#[test]
fn quote_is_escaped() {
    assert_eq!(text_to_literal("abc\"def\n"), r#"    "abc\"def\n""#);
}

#[test]
fn blank_lines_have_no_newline_escape() {
    assert_eq!(text_to_literal("\n"), r#"    """#);
    assert_eq!(text_to_literal(" \t \r\n"), r#"    """#);
    assert_eq!(
        text_to_literal("void main() {\n\n}\n"),
        "    \"void main() {\\n\"\n    \"\"\n    \"}\\n\""
    );
}

#[test]
fn nulls_are_removed() {
    assert_eq!(text_to_literal("ab\0c\0\n"), r#"    "abc\n""#);
    assert_eq!(text_to_literal("\0\0\n"), r#"    """#);
}

#[test]
fn indentation_kept_trailing_whitespace_dropped() {
    assert_eq!(
        text_to_literal("    gl_Position = vec4(0.0);   \r\n"),
        r#"    "    gl_Position = vec4(0.0);\n""#
    );
}

#[test]
fn information_separators_count_as_whitespace() {
    assert_eq!(text_to_literal("\x1c\x1f\n"), r#"    """#);
    assert_eq!(text_to_literal("x = 1;\x1e\n"), r#"    "x = 1;\n""#);
}

#[test]
fn empty_text_has_no_fragments() {
    assert_eq!(text_to_literal(""), "");
}
