use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GIT_HASH");

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let build_time = chrono::Utc::now().to_rfc3339();
    fs::write(Path::new(&out_dir).join("build_time.txt"), &build_time)
        .expect("write build_time.txt");

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    let hash = env::var("GIT_HASH").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", hash);
}
