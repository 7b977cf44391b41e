use std::env;
use std::path::{Path, PathBuf};

const VERSION_VAR: &str = "CONSOLE_ASSET_VERSION";

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    add_watch_path(&manifest_dir.join("assets"));

    // The packaged extension is versioned together with the console unless the
    // release pipeline pins it explicitly.
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");
    let version = env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap());

    println!("cargo:rustc-env={VERSION_VAR}={version}");
}
