//! Pluggable cleaning of user-supplied text before it is stored.
//!
//! Player names end up in HTML pages and terminal output, so the default
//! [`HtmlSanitizer`] neutralises markup. Storage never depends on which
//! sanitizer is in use.

/// Text cleaning applied to player names before they are stored
pub trait NameSanitizer: Send + Sync {
    /// Return the cleaned form of `input`
    fn clean(&self, input: &str) -> String;
}

/// Tags left in place when they appear bare, with no attributes
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "acronym",
    "b",
    "blockquote",
    "code",
    "em",
    "i",
    "li",
    "ol",
    "strong",
    "ul",
];

/// Longest character reference body accepted between `&` and `;`
const MAX_REFERENCE_LEN: usize = 32;

/// Escapes disallowed markup and drops control characters
///
/// `<script>` becomes `&lt;script&gt;`, so stored names render as text. Bare
/// [`ALLOWED_TAGS`] such as `<b>` and `</b>` survive, as do existing character
/// references like `&amp;` or `&#233;`, which makes cleaning idempotent.
/// Surrounding whitespace is trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl NameSanitizer for HtmlSanitizer {
    fn clean(&self, input: &str) -> String {
        let mut cleaned = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(c) = rest.chars().next() {
            let kept = match c {
                '&' => reference_len(rest),
                '<' => allowed_tag_len(rest),
                _ => None,
            };
            if let Some(len) = kept {
                cleaned.push_str(&rest[..len]);
                rest = &rest[len..];
                continue;
            }

            match c {
                '&' => cleaned.push_str("&amp;"),
                '<' => cleaned.push_str("&lt;"),
                '>' => cleaned.push_str("&gt;"),
                c if c.is_control() => {}
                c => cleaned.push(c),
            }
            rest = &rest[c.len_utf8()..];
        }

        // Trim last: a dropped control character can expose whitespace.
        cleaned.trim().to_string()
    }
}

/// Length of a character reference (`&name;`, `&#NN;`, `&#xHH;`) at the start of `s`
fn reference_len(s: &str) -> Option<usize> {
    let end = s.find(';')?;
    let body = s.get(1..end)?;
    if body.len() > MAX_REFERENCE_LEN {
        return None;
    }

    let valid = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = body.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        body.starts_with(|c: char| c.is_ascii_alphabetic())
            && body.chars().all(|c| c.is_ascii_alphanumeric())
    };

    valid.then_some(end + 1)
}

/// Length of a bare allowed open or close tag at the start of `s`
fn allowed_tag_len(s: &str) -> Option<usize> {
    let end = s.find('>')?;
    let inner = s.get(1..end)?;
    let name = inner.strip_prefix('/').unwrap_or(inner);

    ALLOWED_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(name))
        .then_some(end + 1)
}

/// Stores names exactly as given
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl NameSanitizer for PassThrough {
    fn clean(&self, input: &str) -> String {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_unchanged() {
        assert_eq!(HtmlSanitizer.clean("Chandra Nalaar"), "Chandra Nalaar");
        assert_eq!(HtmlSanitizer.clean("Jöran Ångström"), "Jöran Ångström");
    }

    #[test]
    fn test_markup_is_escaped() {
        assert_eq!(
            HtmlSanitizer.clean("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(HtmlSanitizer.clean("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn test_allowed_tags_are_kept() {
        assert_eq!(HtmlSanitizer.clean("<b>Bold</b> Player"), "<b>Bold</b> Player");
        assert_eq!(HtmlSanitizer.clean("<EM>Loud</EM>"), "<EM>Loud</EM>");
        assert_eq!(
            HtmlSanitizer.clean("<b onclick=\"x()\">Bold</b>"),
            "&lt;b onclick=\"x()\"&gt;Bold</b>"
        );
        assert_eq!(HtmlSanitizer.clean("<bold>"), "&lt;bold&gt;");
    }

    #[test]
    fn test_character_references_are_kept() {
        assert_eq!(HtmlSanitizer.clean("Tom &amp; Jerry"), "Tom &amp; Jerry");
        assert_eq!(HtmlSanitizer.clean("Jos&#233; &#xE9;"), "Jos&#233; &#xE9;");
        assert_eq!(HtmlSanitizer.clean("AT&T"), "AT&amp;T");
        assert_eq!(HtmlSanitizer.clean("& ;"), "&amp; ;");
        assert_eq!(HtmlSanitizer.clean("&#x;"), "&amp;#x;");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let inputs = [
            "<script>alert('x')</script>",
            "Tom & Jerry",
            "Tom &amp; Jerry",
            "<i>Ada</i> <u>Lovelace</u>",
            "a <\u{7}",
            "\u{7} &lt;b&gt; \u{0}",
            "&<b>;",
        ];
        for input in inputs {
            let once = HtmlSanitizer.clean(input);
            assert_eq!(HtmlSanitizer.clean(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_quotes_are_kept() {
        assert_eq!(
            HtmlSanitizer.clean("Randy \"Macho Man\" O'Neil"),
            "Randy \"Macho Man\" O'Neil"
        );
    }

    #[test]
    fn test_control_characters_and_padding_are_removed() {
        assert_eq!(HtmlSanitizer.clean("  Bruno\u{0}\u{7} Walton\n"), "Bruno Walton");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(PassThrough.clean(" <b>bold</b> "), " <b>bold</b> ");
    }
}
