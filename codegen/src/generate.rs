use crate::config::Config;
use std::io::Write;

pub struct Declaration {
    pub identifier: String,
    pub literal: String,
}

pub fn write_header(
    out: &mut impl Write,
    config: &Config,
    declarations: &[Declaration],
) -> std::io::Result<()> {
    let guard = config.include_guard;
    write!(out, "#ifndef {guard}\n#define {guard}\n\n")?;
    for declaration in declarations {
        write!(
            out,
            "static const char* {}_str = \n{};\n\n",
            declaration.identifier, declaration.literal
        )?;
    }
    writeln!(out, "#endif // {guard}")
}

#[cfg(test)]
fn render(declarations: &[Declaration]) -> String {
    let mut out = Vec::new();
    write_header(&mut out, &Config::default(), declarations).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn no_declarations() {
    assert_eq!(
        render(&[]),
        "#ifndef SHADER_STRINGS_H\n#define SHADER_STRINGS_H\n\n#endif // SHADER_STRINGS_H\n"
    );
}

#[test]
fn declarations_separated_by_blank_lines() {
    let declarations = [
        Declaration {
            identifier: "basic_vert_shader".to_owned(),
            literal: "    \"#version 330 core\\n\"\n    \"\"".to_owned(),
        },
        Declaration {
            identifier: "basic_frag_shader".to_owned(),
            literal: "    \"out vec4 color;\\n\"".to_owned(),
        },
    ];
    assert_eq!(
        render(&declarations),
        r##"#ifndef SHADER_STRINGS_H
#define SHADER_STRINGS_H

static const char* basic_vert_shader_str = 
    "#version 330 core\n"
    "";

static const char* basic_frag_shader_str = 
    "out vec4 color;\n";

#endif // SHADER_STRINGS_H
"##
    );
}
