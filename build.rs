use std::env;

const LIB_DIRS_VAR: &str = "IMAGE_MAGICK_LIB_DIRS";
const LIBS_VAR: &str = "IMAGE_MAGICK_LIBS";

fn main() {
    println!("cargo:rerun-if-env-changed={LIB_DIRS_VAR}");
    println!("cargo:rerun-if-env-changed={LIBS_VAR}");

    // The fallback build links nothing beyond the JNI glue.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    for dir in split_var(LIB_DIRS_VAR) {
        println!("cargo:rustc-link-search=native={dir}");
    }
    for lib in split_var(LIBS_VAR) {
        println!("cargo:rustc-link-lib={lib}");
    }
}

fn split_var(name: &str) -> Vec<String> {
    let separator = if cfg!(windows) { ';' } else { ':' };
    env::var(name)
        .map(|value| {
            value
                .split(separator)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
