// The desktop feature on Linux links against libxdo through dioxus;
// fail early with install instructions instead of a late linker error.

fn main() {
    let desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if desktop && linux && !libxdo_present() {
        eprintln!();
        eprintln!("  error: desktop build on Linux requires libxdo.");
        eprintln!();
        eprintln!("  Install the development package, then run again:");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!();
        std::process::exit(1);
    }
}

// libxdo may ship without a .pc file; fall back to scanning ldconfig.
fn libxdo_present() -> bool {
    std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success())
        .unwrap_or_else(|_| {
            std::process::Command::new("ldconfig")
                .arg("-p")
                .output()
                .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
                .unwrap_or(false)
        })
}
