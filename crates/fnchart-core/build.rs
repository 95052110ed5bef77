// File: crates/fnchart-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia/ICU call RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
