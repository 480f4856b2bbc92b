//! Recovery-token discovery from password-reset redirect URLs.
//!
//! The hosted auth provider embeds a one-time recovery token in the redirect
//! URL, but where it lands varies by provider version and by email-client
//! link rewriting: the URL fragment, the query string, or a raw path
//! segment. Each placement gets its own strategy; strategies run in a fixed
//! order and the first hit wins.

use regex::Regex;
use tracing::debug;
use url::Url;

use super::token_preview;

/// Where in the URL a recovery token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `#access_token=...&type=recovery`
    Fragment,
    /// `?access_token=...` or `?token=...`
    Query,
    /// Key/value pair found by scanning the full URL
    Pattern,
    /// Opaque path segment
    Path,
}

/// A one-time password-reset credential pulled from the current URL.
///
/// Consumed exactly once on page load and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryToken {
    pub value: String,
    pub source: TokenSource,
}

/// Minimum length for a path segment to be treated as an embedded token.
const MIN_PATH_TOKEN_LEN: usize = 30;

/// `token=` or `access_token=` bounded by `?`, `&`, or `#`.
const TOKEN_PATTERN: &str = r"[?&#](?:access_)?token=([^&#?]+)";

/// Find a recovery token in `page_url`, trying each placement in order.
///
/// Absence is an expected outcome, not an error: it means the URL carries no
/// recoverable token and the caller decides what that implies.
pub fn locate_recovery_token(page_url: &Url) -> Option<RecoveryToken> {
    let strategies: [fn(&Url) -> Option<RecoveryToken>; 4] =
        [from_fragment, from_query, from_pattern, from_path];

    for strategy in strategies {
        if let Some(token) = strategy(page_url) {
            debug!(
                source = ?token.source,
                token = %token_preview(&token.value),
                "recovery token located"
            );
            return Some(token);
        }
    }

    debug!(url_path = page_url.path(), "no recovery token in URL");
    None
}

/// Strategy 1: fragment parsed as a query string.
///
/// Requires the co-located `type=recovery` marker so unrelated grants
/// (magic links, email confirmations) are not picked up.
fn from_fragment(page_url: &Url) -> Option<RecoveryToken> {
    let fragment = page_url.fragment()?;
    let mut access_token = None;
    let mut grant_type = None;

    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "type" => grant_type = Some(value.into_owned()),
            _ => {}
        }
    }

    match (access_token, grant_type.as_deref()) {
        (Some(value), Some("recovery")) => Some(RecoveryToken {
            value,
            source: TokenSource::Fragment,
        }),
        _ => None,
    }
}

/// Strategy 2: query-string parameters `access_token` or `token`.
///
/// Accepted when `type` is `recovery` or absent.
fn from_query(page_url: &Url) -> Option<RecoveryToken> {
    let mut token = None;
    let mut grant_type = None;

    for (key, value) in page_url.query_pairs() {
        match key.as_ref() {
            "access_token" | "token" if token.is_none() => token = Some(value.into_owned()),
            "type" => grant_type = Some(value.into_owned()),
            _ => {}
        }
    }

    match (token, grant_type.as_deref()) {
        (Some(value), Some("recovery") | None) => Some(RecoveryToken {
            value,
            source: TokenSource::Query,
        }),
        _ => None,
    }
}

/// Strategy 3: regex scan of the full URL.
///
/// Deliberately the most permissive fallback: no `type` guard, value is
/// percent-decoded and accepted as-is.
fn from_pattern(page_url: &Url) -> Option<RecoveryToken> {
    let pattern = Regex::new(TOKEN_PATTERN).expect("token pattern is valid");
    let captures = pattern.captures(page_url.as_str())?;
    let raw = captures.get(1)?.as_str();
    let value = urlencoding::decode(raw).ok()?.into_owned();

    Some(RecoveryToken {
        value,
        source: TokenSource::Pattern,
    })
}

/// Strategy 4: first path segment long enough to be an opaque token.
fn from_path(page_url: &Url) -> Option<RecoveryToken> {
    page_url
        .path_segments()?
        .find(|segment| segment.len() > MIN_PATH_TOKEN_LEN)
        .map(|segment| RecoveryToken {
            value: segment.to_string(),
            source: TokenSource::Path,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test URL parses")
    }

    #[test]
    fn fragment_with_recovery_type_wins() {
        let token = locate_recovery_token(&url(
            "https://app.example/reset#access_token=abc123&type=recovery",
        ))
        .expect("token");
        assert_eq!(token.value, "abc123");
        assert_eq!(token.source, TokenSource::Fragment);
    }

    #[test]
    fn fragment_takes_precedence_over_query_and_path() {
        let token = locate_recovery_token(&url(
            "https://app.example/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/reset?token=from-query#access_token=from-fragment&type=recovery",
        ))
        .expect("token");
        assert_eq!(token.value, "from-fragment");
        assert_eq!(token.source, TokenSource::Fragment);
    }

    #[test]
    fn fragment_without_recovery_type_is_not_trusted_by_first_strategy() {
        // type=magiclink fails the fragment guard, but the permissive scan
        // still picks the pair up further down the strategy list.
        let token = locate_recovery_token(&url(
            "https://app.example/reset#access_token=abc123&type=magiclink",
        ))
        .expect("token");
        assert_eq!(token.source, TokenSource::Pattern);
        assert_eq!(token.value, "abc123");
    }

    #[test]
    fn bare_query_token_without_type_is_accepted() {
        let token =
            locate_recovery_token(&url("https://app.example/reset?token=xyz789")).expect("token");
        assert_eq!(token.value, "xyz789");
        assert_eq!(token.source, TokenSource::Query);
    }

    #[test]
    fn query_access_token_with_recovery_type_is_accepted() {
        let token = locate_recovery_token(&url(
            "https://app.example/reset?access_token=xyz789&type=recovery",
        ))
        .expect("token");
        assert_eq!(token.value, "xyz789");
        assert_eq!(token.source, TokenSource::Query);
    }

    #[test]
    fn query_token_with_foreign_type_falls_through_to_pattern_scan() {
        let token = locate_recovery_token(&url(
            "https://app.example/reset?token=xyz789&type=invite",
        ))
        .expect("token");
        assert_eq!(token.source, TokenSource::Pattern);
    }

    #[test]
    fn pattern_scan_percent_decodes_the_value() {
        let token = locate_recovery_token(&url(
            "https://app.example/reset?type=invite&token=abc%2Bdef",
        ))
        .expect("token");
        assert_eq!(token.value, "abc+def");
        assert_eq!(token.source, TokenSource::Pattern);
    }

    #[test]
    fn long_path_segment_is_treated_as_a_token() {
        let token = locate_recovery_token(&url(
            "https://app.example/reset/abcdefghijklmnopqrstuvwxyz012345",
        ))
        .expect("token");
        assert_eq!(token.value, "abcdefghijklmnopqrstuvwxyz012345");
        assert_eq!(token.source, TokenSource::Path);
    }

    #[test]
    fn thirty_char_path_segment_is_too_short() {
        // Exactly 30 chars does not exceed the threshold.
        assert_eq!(
            locate_recovery_token(&url(
                "https://app.example/abcdefghijklmnopqrstuvwxyz0123"
            )),
            None
        );
    }

    #[test]
    fn plain_url_yields_absence() {
        assert_eq!(locate_recovery_token(&url("https://app.example/reset")), None);
        assert_eq!(
            locate_recovery_token(&url("https://app.example/reset?utm_source=mail")),
            None
        );
    }

    #[test]
    fn locator_is_a_pure_function_of_the_url() {
        let u = url("https://app.example/reset#access_token=abc123&type=recovery");
        assert_eq!(locate_recovery_token(&u), locate_recovery_token(&u));
    }
}
