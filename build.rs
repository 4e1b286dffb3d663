//! Build script - embeds the git commit hash in dev build versions
//!
//! Dev builds (no `release` feature) get `VERGEN_GIT_SHA`, which `cli::VERSION`
//! appends to the package version. Release builds get a clean version string.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        let emitted = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit());

        // Outside a git checkout the version still needs a SHA placeholder
        if let Err(e) = emitted {
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
