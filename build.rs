//! Build script to embed dictionary sources
//!
//! Scans `configs/*.txt` and generates a table of `(path, contents)` pairs so the
//! binary can run without a dictionary directory on disk.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    let mut paths: Vec<String> = fs::read_dir(Path::new(&manifest_dir).join("configs"))
        .unwrap_or_else(|e| panic!("Failed to read configs directory: {e}"))
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".txt"))
        .map(|name| format!("configs/{name}"))
        .collect();

    // Stable output regardless of directory iteration order
    paths.sort();

    generate_source_table(
        &manifest_dir,
        &paths,
        &Path::new(&out_dir).join("embedded_sources.rs"),
    );

    println!("cargo:rerun-if-changed=configs");
    for path in &paths {
        println!("cargo:rerun-if-changed={path}");
    }
}

fn generate_source_table(manifest_dir: &str, paths: &[String], output_path: &Path) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary source table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Dictionary sources compiled into the binary, keyed by path").unwrap();
    writeln!(output, "pub const EMBEDDED_SOURCES: &[(&str, &str)] = &[").unwrap();

    for path in paths {
        let absolute = Path::new(manifest_dir).join(path);
        writeln!(
            output,
            "    ({path:?}, include_str!({:?})),",
            absolute.display().to_string()
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of embedded sources").unwrap();
    writeln!(
        output,
        "pub const EMBEDDED_SOURCES_COUNT: usize = {};",
        paths.len()
    )
    .unwrap();
}
