//! Keyboard shortcuts for the question inputs.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter without Shift sends; Shift+Enter keeps the newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
