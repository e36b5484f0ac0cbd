use std::path::{Path, PathBuf};
use std::process::Command;

#[path = "src/git_head.rs"]
mod git_head;

fn short_sha(repo_root: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}

fn main() {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let repo_root = manifest_dir.join("..");

    let sha = short_sha(&repo_root).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SNOWPORT_BUILD_SHA={sha}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/git_head.rs");
    for path in git_head::watched_paths(&repo_root.join(".git")) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
