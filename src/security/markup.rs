use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Strips disallowed markup from rendered output before it is returned or echoed.
pub trait MarkupSanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> String;
}

impl<F> MarkupSanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, input: &str) -> String {
        self(input)
    }
}

/// Tags kept by the default sanitizer
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "code", "del", "div", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "i", "img", "ins", "li", "ol", "p", "pre", "q", "s", "small", "span", "strong",
    "sub", "sup", "u", "ul",
];

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Allow-list sanitizer for post-style content.
///
/// `<script>` and `<style>` elements are removed with their content. Tags not
/// on the allow-list are dropped but their inner text survives. Kept tags lose
/// event-handler attributes and `href`/`src` values with an executable scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowListSanitizer;

struct Patterns {
    script: Regex,
    style: Regex,
    tag: Regex,
    attr: Regex,
    entity: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        script: Regex::new(r"(?is)<script\b[^>]*>.*?(</script\s*>|$)").expect("valid regex"),
        style: Regex::new(r"(?is)<style\b[^>]*>.*?(</style\s*>|$)").expect("valid regex"),
        tag: Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*?)(/?)>").expect("valid regex"),
        attr: Regex::new(
            r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s"'>]+))?"#,
        )
        .expect("valid regex"),
        entity: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z][a-zA-Z0-9]*);?")
            .expect("valid regex"),
    })
}

impl AllowListSanitizer {
    pub fn new() -> Self {
        Self
    }

    fn is_allowed(tag: &str) -> bool {
        ALLOWED_TAGS.contains(&tag)
    }

    /// Rebuild an attribute list keeping only safe attributes
    fn clean_attributes(raw: &str) -> String {
        let mut kept = String::new();

        for caps in patterns().attr.captures_iter(raw) {
            let name = caps[1].to_ascii_lowercase();
            if name.starts_with("on") {
                continue;
            }

            let value = caps.get(2).map(|m| m.as_str());
            if let Some(value) = value {
                if (name == "href" || name == "src") && Self::has_unsafe_scheme(value) {
                    continue;
                }
                kept.push_str(&format!(" {}={}", name, value));
            } else {
                kept.push_str(&format!(" {}", name));
            }
        }

        kept
    }

    /// Decode numeric and common named character references, the way a
    /// browser does before it interprets a URL
    fn decode_entities(value: &str) -> String {
        patterns()
            .entity
            .replace_all(value, |caps: &Captures| {
                let body = &caps[1];
                let decoded = if let Some(hex) = body
                    .strip_prefix("#x")
                    .or_else(|| body.strip_prefix("#X"))
                {
                    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                } else if let Some(dec) = body.strip_prefix('#') {
                    dec.parse::<u32>().ok().and_then(char::from_u32)
                } else {
                    match body.to_ascii_lowercase().as_str() {
                        "colon" => Some(':'),
                        "tab" => Some('\t'),
                        "newline" => Some('\n'),
                        "amp" => Some('&'),
                        "lt" => Some('<'),
                        "gt" => Some('>'),
                        "quot" => Some('"'),
                        "apos" => Some('\''),
                        "sol" => Some('/'),
                        "lpar" => Some('('),
                        "rpar" => Some(')'),
                        _ => None,
                    }
                };
                // Unknown or invalid references are left as written
                decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
            })
            .into_owned()
    }

    fn has_unsafe_scheme(value: &str) -> bool {
        let unquoted: String = Self::decode_entities(value.trim_matches(|c| c == '"' || c == '\''))
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();

        UNSAFE_SCHEMES
            .iter()
            .any(|scheme| unquoted.starts_with(scheme))
    }
}

impl MarkupSanitizer for AllowListSanitizer {
    fn sanitize(&self, input: &str) -> String {
        let p = patterns();
        let without_script = p.script.replace_all(input, "");
        let without_style = p.style.replace_all(&without_script, "");

        p.tag
            .replace_all(&without_style, |caps: &Captures| {
                let closing = &caps[1];
                let name = caps[2].to_ascii_lowercase();
                if !Self::is_allowed(&name) {
                    return String::new();
                }
                if !closing.is_empty() {
                    return format!("</{}>", name);
                }
                let attrs = Self::clean_attributes(&caps[3]);
                let self_closing = if caps[4].is_empty() { "" } else { " /" };
                format!("<{}{}{}>", name, attrs, self_closing)
            })
            .into_owned()
    }
}
