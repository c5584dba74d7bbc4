use std::env;
use std::fs;
use std::io;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=ui/");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let minify = env::var("PROFILE").map(|p| p == "release").unwrap_or(false);

    if let Err(e) = copy_ui(Path::new("ui"), &Path::new(&out_dir).join("ui"), minify) {
        panic!("Failed to stage editor UI: {}", e);
    }
}

/// Copies the editor assets into OUT_DIR, minifying HTML for release builds.
fn copy_ui(src: &Path, dest: &Path, minify: bool) -> io::Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    if !src.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !path.is_file() {
            continue;
        }
        let target = dest.join(file_name);

        if minify && path.extension().is_some_and(|e| e == "html") {
            let mut cfg = minify_html::Cfg::new();
            cfg.minify_css = true;
            cfg.minify_js = true;
            cfg.keep_comments = false;
            fs::write(&target, minify_html::minify(&fs::read(&path)?, &cfg))?;
        } else {
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}
