use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("embedded_assets.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_dir = Path::new("assets");
    if !asset_dir.exists() {
        writeln!(f, "pub const EMBEDDED_ASSETS: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(asset_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    // Stable order so rebuilds produce identical output
    entries.sort();

    writeln!(f, "pub const EMBEDDED_ASSETS: &[(&str, &str)] = &[").unwrap();

    for path in entries {
        println!("cargo:rerun-if-changed={}", path.display());

        let name = path.file_stem().unwrap().to_string_lossy().to_string();
        let absolute = fs::canonicalize(&path).unwrap();

        // Debug formatting escapes quotes and backslashes in both strings
        writeln!(
            f,
            "    ({:?}, include_str!({:?})),",
            name,
            absolute.display().to_string()
        )
        .unwrap();
    }

    writeln!(f, "];").unwrap();
}
