//! Unit tests for [`gemini_client::mask_token`].
//!
//! API keys are masked for logging: first 7 chars + `***` + last 4 chars.
//! Keys of length ≤ 11 are fully masked as `***`.

use gemini_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("AIzaSy1234"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("AIzaSyAbcdefghijklmnop"), "AIzaSyA***mnop");
}

/// **Test: Non-ASCII keys are masked by character, not by byte.**
#[test]
fn mask_token_non_ascii_does_not_split_chars() {
    let masked = mask_token("ключ-ключ-ключ-ключ");
    assert_eq!(masked, "ключ-кл***ключ");
}
