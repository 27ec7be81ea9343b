/// Help-token recognition for the entry stub.
///
/// Only the first process argument is ever inspected; anything after it is
/// ignored by the caller.

/// The tokens that request help, compared case-insensitively.
const HELP_TOKENS: [&str; 3] = ["help", "--help", "-h"];

/// Whether `arg` requests the program's help text.
///
/// Lowercases `arg` and compares it for equality against the exact tokens
/// `help`, `--help`, and `-h`. Whitespace is significant, so `"help "` does
/// not match.
#[must_use]
pub fn is_help_request(arg: &str) -> bool {
    let lowered = arg.to_lowercase();
    HELP_TOKENS.contains(&lowered.as_str())
}
