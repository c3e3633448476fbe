use std::process::Command;

// Bakes the checked-out git tag into the binary so release builds report the
// tagged version instead of the crate version.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let output = match Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return,
    };

    if let Ok(tag) = String::from_utf8(output.stdout) {
        let tag = tag.trim();
        if !tag.is_empty() {
            println!("cargo:rustc-env=GIT_TAG={tag}");
        }
    }
}
