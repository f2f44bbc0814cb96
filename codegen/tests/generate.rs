use glslembed_codegen::{generate_header, Error};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EMPTY_HEADER: &str =
    "#ifndef SHADER_STRINGS_H\n#define SHADER_STRINGS_H\n\n#endif // SHADER_STRINGS_H\n";

fn shader_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write shader");
    }
    dir
}

fn run(dir: &TempDir) -> String {
    let out = dir.path().join("out").join("shader_strings.h");
    fs::create_dir_all(out.parent().unwrap()).unwrap();
    generate_header(dir.path(), &out).unwrap();
    fs::read_to_string(out).unwrap()
}

#[test]
fn empty_directory() {
    let dir = shader_dir(&[]);
    assert_eq!(run(&dir), EMPTY_HEADER);
}

#[test]
fn non_shader_files_are_ignored() {
    let dir = shader_dir(&[("README.md", "# shaders\n"), ("basic.vert", "void main() {}\n")]);
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("deep.glsl"), "void main() {}\n").unwrap();
    assert_eq!(run(&dir), EMPTY_HEADER);
}

#[test]
fn full_header() {
    let dir = shader_dir(&[
        ("water.frag.glsl", "#version 330 core\n\nout vec4 color; // \"blue\"\n"),
        ("basic.vert.glsl", "void main() {\r\n    gl_Position = vec4(0.0);\r\n}"),
    ]);
    assert_eq!(
        run(&dir),
        r##"#ifndef SHADER_STRINGS_H
#define SHADER_STRINGS_H

static const char* basic_vert_shader_str = 
    "void main() {\n"
    "    gl_Position = vec4(0.0);\n"
    "}\n";

static const char* water_frag_shader_str = 
    "#version 330 core\n"
    ""
    "out vec4 color; // \"blue\"\n";

#endif // SHADER_STRINGS_H
"##
    );
}

#[test]
fn invalid_utf8_and_nulls_are_dropped() {
    let dir = shader_dir(&[]);
    fs::write(dir.path().join("a.glsl"), b"fl\xffoat x\0;\n").unwrap();
    let header = run(&dir);
    assert!(header.contains("static const char* a_shader_str = \n    \"float x;\\n\";\n"));
}

#[test]
fn empty_shader_is_omitted() {
    let dir = shader_dir(&[("empty.glsl", "")]);
    assert_eq!(run(&dir), EMPTY_HEADER);
}

#[test]
fn repeated_runs_are_identical() {
    let dir = shader_dir(&[
        ("c.glsl", "void c() {}\n"),
        ("a.glsl", "void a() {}\n"),
        ("b.glsl", "void b() {}\n"),
    ]);
    let first = run(&dir);
    let second = run(&dir);
    assert_eq!(first, second);
    let a = first.find("a_shader_str").unwrap();
    let b = first.find("b_shader_str").unwrap();
    let c = first.find("c_shader_str").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn unreadable_shader_is_skipped() {
    let dir = shader_dir(&[("good.glsl", "void main() {}\n")]);
    fs::create_dir(dir.path().join("bad.glsl")).unwrap();
    let out = dir.path().join("shader_strings.h");
    let report = generate_header(dir.path(), &out).unwrap();
    assert_eq!(report.written, ["good_shader"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path(), dir.path().join("bad.glsl"));
    let header = fs::read_to_string(out).unwrap();
    assert_eq!(header.matches("static const char*").count(), 1);
    assert!(header.contains("good_shader_str"));
}

#[test]
fn colliding_identifiers_are_rejected() {
    let dir = shader_dir(&[("a.b.glsl", "x\n"), ("a_b.glsl", "y\n")]);
    let out = dir.path().join("shader_strings.h");
    match generate_header(dir.path(), &out) {
        Err(Error::DuplicateIdentifier { identifier, first, second }) => {
            assert_eq!(identifier, "a_b_shader");
            assert_eq!(first, "a.b.glsl");
            assert_eq!(second, "a_b.glsl");
        }
        other => panic!("expected duplicate identifier, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn missing_input_directory() {
    let dir = TempDir::new().unwrap();
    let result = generate_header(&dir.path().join("missing"), &dir.path().join("out.h"));
    assert!(matches!(result, Err(Error::ReadDir { .. })));
}

#[test]
fn unwritable_output() {
    let dir = shader_dir(&[("a.glsl", "x\n")]);
    let out = Path::new("/nonexistent-dir/shader_strings.h");
    let result = generate_header(dir.path(), out);
    assert!(matches!(result, Err(Error::Write { .. })));
}
