// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Platform token set and display labels.

/// Every known top-level platform token.
///
/// Tokens are single words with no internal hyphen; the legacy-string parser
/// splits on the first hyphen and relies on this (a registry build rejects
/// hyphenated type tokens, and a test pins the shipped set).
pub const PLATFORM_TOKENS: [&str; 5] = ["azure", "kubernetes", "kafka", "gcp", "generic"];

/// Returns `true` when `token` is a member of [`PLATFORM_TOKENS`].
pub fn is_platform_token(token: &str) -> bool {
    PLATFORM_TOKENS.contains(&token)
}

/// Human-readable label for a platform token.
///
/// Unknown tokens echo back verbatim so callers can render whatever a custom
/// definition declared without a lookup failure.
pub fn platform_label(token: &str) -> &str {
    match token {
        "azure" => "Azure",
        "kubernetes" => "Kubernetes",
        "kafka" => "Kafka",
        "gcp" => "Google Cloud Platform",
        "generic" => "Generic",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_single_words() {
        for token in PLATFORM_TOKENS {
            assert!(!token.contains('-'), "token {token} would break the legacy parser");
            assert!(!token.is_empty());
        }
    }

    #[test]
    fn labels_cover_known_tokens() {
        assert_eq!(platform_label("azure"), "Azure");
        assert_eq!(platform_label("gcp"), "Google Cloud Platform");
    }

    #[test]
    fn unknown_labels_echo_verbatim() {
        assert_eq!(platform_label("onprem"), "onprem");
    }
}
