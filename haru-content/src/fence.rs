//! Markdown code-fence stripping
//!
//! Models are asked for bare JSON but frequently wrap it in
//! ```` ```json ... ``` ```` anyway. Stripping removes every fence marker
//! (and trailing whitespace after it) and trims the result, so fenced and
//! bare output parse identically.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*|```\s*").expect("valid regex"));

/// Remove markdown code-fence markers from raw model output.
pub fn strip_code_fences(text: &str) -> String {
    FENCE.replace_all(text, "").trim().to_string()
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fence-wrapped JSON always parses to the same value as the bare
        /// document.
        #[test]
        fn prop_fenced_parses_identically(
            key in "[a-z]{1,10}",
            value in "[a-zA-Z0-9 ]{0,20}",
        ) {
            let bare = serde_json::json!({ key.clone(): value }).to_string();
            let fenced = format!("```json\n{}\n```", bare);

            let from_bare: serde_json::Value =
                serde_json::from_str(&strip_code_fences(&bare)).unwrap();
            let from_fenced: serde_json::Value =
                serde_json::from_str(&strip_code_fences(&fenced)).unwrap();
            prop_assert_eq!(from_bare, from_fenced);
        }
    }
}
