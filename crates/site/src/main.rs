#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

/// The desktop only runs inside a browser page.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "site_app renders the retro desktop in the browser; build it for wasm32 with the `csr` feature (e.g. `trunk serve` from crates/site)."
    );
}
