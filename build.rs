use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=PROFILE");

    println!(
        "cargo:rustc-env=KILLCHAIN_BUILD_TIMESTAMP={}",
        chrono::Utc::now().to_rfc3339()
    );

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=KILLCHAIN_BUILD_PROFILE={profile}");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty());
    if let Some(hash) = hash {
        println!("cargo:rustc-env=KILLCHAIN_GIT_HASH={hash}");
    }
}
