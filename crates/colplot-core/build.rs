// File: crates/colplot-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU needs for the raster renderer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
