//! Reveal payload and the wrapper functions that consume it.

use std::path::Path;

pub const REVEAL_PREFIX: &str = "__ML_REVEAL__=";

/// Emit one machine-readable reveal request.
pub fn print_reveal(path: &Path) {
    println!("{}", reveal_line(path));
}

pub fn reveal_line(path: &Path) -> String {
    format!("{REVEAL_PREFIX}{}", path.display())
}

/// Returns the bash function that users should add to their `.bashrc`.
///
/// The function is `pkgl`; it invokes the binary by its package name (read
/// from `Cargo.toml` at compile time), `cd`s into the revealed package and
/// names the marker file that was revealed with it.
pub fn bash_function() -> String {
    wrapper_function("[ -d \"$line\" ]")
}

/// Returns the zsh function that users should add to their `.zshrc`.
pub fn zsh_function() -> String {
    wrapper_function("[[ -d \"$line\" ]]")
}

fn wrapper_function(is_dir_test: &str) -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        r#"
# ── {bin}: jump to a monorepo package ───────────────────────
# Pick a package from node_modules/<namespace>; the shell follows it to
# its real location.
pkgl() {{
    local output
    output="$(command {bin} "$@")"
    local exit_code=$?
    local dest=""
    local marker=""
    local line
    while IFS= read -r line; do
        case "$line" in
            {REVEAL_PREFIX}*)
                line="${{line#{REVEAL_PREFIX}}}"
                if {is_dir_test}; then dest="$line"; else marker="$line"; fi
                ;;
        esac
    done <<< "$output"
    if [ $exit_code -eq 0 ] && [ -n "$dest" ]; then
        cd "$dest" || return
        [ -n "$marker" ] && printf '%s\n' "$marker"
    fi
    return $exit_code
}}
"#
    )
}
