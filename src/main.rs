//! Keep In Touch frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::prelude::*;
    use keepintouch_frontend::app::App;
    launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    // wasm-bindgen cannot yet handle the reference-types wasm feature
    // that newer Rust enables by default, so the wasm build needs it
    // switched off. Hand the flag to dx through its environment; the
    // cargo child dx spawns inherits it from there.
    let mut rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    if !rustflags.is_empty() {
        rustflags.push(' ');
    }
    rustflags.push_str("-C target-feature=-reference-types");

    let status = std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", &rustflags)
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("could not start 'dx serve': {}", e);
            eprintln!("install the Dioxus CLI first: cargo install dioxus-cli");
            eprintln!("or run it yourself: RUSTFLAGS='{}' dx serve", rustflags);
            std::process::exit(1);
        }
    }
}
