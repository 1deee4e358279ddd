fn main() {
    // Build timestamp, read by the footer for its copyright year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // embedded content is part of the release bundle
    println!("cargo:rerun-if-changed=content");
}
