//! Build script for code-underline-simulator.
//!
//! On Windows, links against a vendored SDL2 in `<repo>/vendor/sdl2` and
//! copies `SDL2.dll` next to the built binary. Other platforms use the
//! system SDL2 and need nothing here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(vendor_sdl2) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(|repo| repo.join("vendor").join("sdl2")))
    else {
        return;
    };
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Place SDL2.lib and SDL2.dll in vendor/sdl2/ at the repository root");
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    if let Some(profile_dir) = env::var_os("OUT_DIR").as_deref().and_then(|out| profile_dir(Path::new(out))) {
        copy_dll(&vendor_sdl2.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

/// `target/<profile>` from `target/<profile>/build/<crate>-<hash>/out`.
fn profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(src, dst) {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}
