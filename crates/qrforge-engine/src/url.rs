use regex::Regex;
use std::sync::LazyLock;

/// Schemes that are already complete and pass through untouched.
const KNOWN_PREFIXES: [&str; 11] = [
    "http://",
    "https://",
    "ftp://",
    "mailto:",
    "tel:",
    "geo:",
    "sms:",
    "smsto:",
    "vcard:",
    "vevent:",
    "whatsapp:",
];

/// `http:example.com` / `https:/example.com` (missing slashes after the colon)
static MISSING_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(https?):/?([^/].*)$").unwrap());

/// Any other `scheme://` form (rtsp://, spotify://, ...)
static GENERIC_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://").unwrap());

/// `localhost` or a dotted quad, optional port and path
static LOCAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:localhost|\d{1,3}(?:\.\d{1,3}){3})(?::\d{1,5})?(?:[/?#]\S*)?$").unwrap()
});

/// `label.label.tld`, optional port and path
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

/// Decide whether free-form text needs a scheme, and add it.
///
/// Rules, first match wins:
/// 1. blank → empty
/// 2. `http:`/`https:` without `//` → slashes inserted
/// 3. recognised scheme → unchanged
/// 4. localhost / IPv4 → `http://`
/// 5. domain-like, or dotted text without spaces not starting with `/` → `https://`
/// 6. anything else → trimmed text as-is
///
/// Idempotent: every rewrite produces a string that rule 3 accepts.
pub fn normalize_url(input: &str) -> String {
    let text = input.trim();
    if text.is_empty() {
        return String::new();
    }

    if let Some(caps) = MISSING_SLASHES.captures(text) {
        return format!("{}://{}", &caps[1], &caps[2]);
    }

    if has_known_scheme(text) {
        return text.to_string();
    }

    if LOCAL_HOST.is_match(text) {
        return format!("http://{}", text);
    }

    if DOMAIN.is_match(text) || looks_like_host(text) {
        return format!("https://{}", text);
    }

    text.to_string()
}

fn has_known_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    KNOWN_PREFIXES.iter().any(|p| lower.starts_with(p)) || GENERIC_SCHEME.is_match(text)
}

fn looks_like_host(text: &str) -> bool {
    text.contains('.') && !text.chars().any(char::is_whitespace) && !text.starts_with('/')
}
