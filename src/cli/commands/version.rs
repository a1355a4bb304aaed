//! Version information display.

/// Print the crate name and version.
pub fn run() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
