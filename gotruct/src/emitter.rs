//! @ai:module:intent Render converter groups as a Go source file and write it out once
//! @ai:module:layer infrastructure
//! @ai:module:public_api EmitOptions, render, write_output, STRUCT_SUFFIX
//! @ai:module:depends_on groups, config, error
//! @ai:module:stateless true

use crate::config::GeneratorConfig;
use crate::declaration::ConverterRecord;
use crate::error::{Error, Result};
use crate::groups::ConverterGroups;
use std::io::Write;
use std::path::Path;

/// Appended to the group key to name the generated struct.
pub const STRUCT_SUFFIX: &str = "Converter";

const GENERATED_HEADER: &str = "// Code generated by gotruct. DO NOT EDIT.";

/// @ai:intent Settings that shape the rendered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub package: String,
    pub struct_comment: String,
    pub header: bool,
}

impl EmitOptions {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            package: config.package.clone(),
            struct_comment: config.struct_comment(),
            header: config.header,
        }
    }
}

/// @ai:intent Struct name generated for a group key
/// @ai:example ("Widgets") -> "WidgetsConverter"
/// @ai:effects pure
pub fn struct_name(group_key: &str) -> String {
    format!("{group_key}{STRUCT_SUFFIX}")
}

/// @ai:intent Render the whole output file: package clause, then one commented struct per group
/// @ai:post one `type <Key>Converter struct` per group, in group iteration order
/// @ai:post fields appear in record order with name and type columns aligned
/// @ai:effects pure
pub fn render(groups: &ConverterGroups, options: &EmitOptions) -> String {
    let mut out = String::new();

    if options.header {
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
    }
    out.push_str(&format!("package {}\n", options.package));

    for (key, records) in groups.iter() {
        out.push('\n');
        render_comment(&mut out, &options.struct_comment);
        render_struct(&mut out, &struct_name(key), records);
    }

    out
}

fn render_comment(out: &mut String, comment: &str) {
    for line in comment.lines() {
        if line.starts_with("//") {
            out.push_str(&format!("{line}\n"));
        } else if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str(&format!("// {line}\n"));
        }
    }
}

fn render_struct(out: &mut String, name: &str, records: &[ConverterRecord]) {
    if records.is_empty() {
        out.push_str(&format!("type {name} struct{{}}\n"));
        return;
    }

    let width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("type {name} struct {{\n"));
    for record in records {
        out.push_str(&format!("\t{:<width$} {}\n", record.name, record.type_name));
    }
    out.push_str("}\n");
}

/// @ai:intent Write rendered output to the destination in a single write
/// @ai:pre rendered is the complete file content
/// @ai:post on Err(OutputCreate) nothing has been written
/// @ai:effects fs:write
pub fn write_output(rendered: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| Error::OutputCreate {
                path: path.to_path_buf(),
                source: e,
            })?;
            file.write_all(rendered.as_bytes())?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
