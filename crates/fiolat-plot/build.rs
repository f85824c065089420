// File: crates/fiolat-plot/build.rs
// Summary: Links the Windows system libraries Skia needs when rendering PNGs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
