/// EmberOS kernel build script.
///
/// Applies the kernel linker script, which pins `.text.entry` to the
/// bootloader's load address, when building for the bare-metal target.
fn main() {
    // Skip when building for the host target (unit tests). The contract and
    // simulator tests run on the host and must not inherit the kernel's
    // image layout.
    let target = std::env::var("TARGET").unwrap_or_default();
    if !target.contains("emberos") {
        // Host target (e.g., x86_64-unknown-linux-gnu) — no linker script.
        return;
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    println!("cargo:rustc-link-arg-bins=-T{}/linker.ld", manifest_dir);
    println!("cargo:rerun-if-changed=linker.ld");
}
