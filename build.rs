//! Build script for TruthPulse
//!
//! When the `ui` feature is enabled the trunk output in `ui/dist/` is embedded
//! into the binary, so warn early if it has not been built yet.

fn main() {
    // Re-run this script if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "ui")]
    {
        println!("cargo:rerun-if-changed=ui/dist/");
        println!("cargo:rerun-if-changed=ui/src/");
        println!("cargo:rerun-if-changed=ui/index.html");
        println!("cargo:rerun-if-changed=ui/Cargo.toml");
        check_ui_dist();
    }
}

/// Warn when the embedded UI has not been built
#[cfg(feature = "ui")]
fn check_ui_dist() {
    let ui_dist = std::path::Path::new("ui/dist");
    if ui_dist.join("index.html").exists() {
        return;
    }

    println!("cargo:warning=");
    println!("cargo:warning=╔══════════════════════════════════════════════════════════════╗");
    println!("cargo:warning=║  WARNING: UI assets not found in ui/dist/                    ║");
    println!("cargo:warning=║                                                              ║");
    println!("cargo:warning=║  Build the front-end before compiling with --features ui:    ║");
    println!("cargo:warning=║    cd ui && trunk build --release                            ║");
    println!("cargo:warning=║                                                              ║");
    println!("cargo:warning=║  Until then every page request answers with a 500.           ║");
    println!("cargo:warning=╚══════════════════════════════════════════════════════════════╝");
    println!("cargo:warning=");
}
