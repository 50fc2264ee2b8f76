//! Recipe HTML sanitizing
//!
//! The backend returns the recipe as an HTML fragment that the page injects
//! as markup. This module reduces that fragment to a known-safe subset
//! before injection: formatting tags a recipe plausibly uses are kept,
//! script-capable elements are removed with their content, and everything
//! else is stripped down to its text.
//!
//! The scanner works on the raw fragment without building a DOM. Text
//! content passes through untouched, so well-formed recipe markup built
//! from allowed tags survives byte-for-byte. Attribute values are decoded
//! before any check runs and re-escaped on emission; the URL checks see the
//! text a browser would.


/// Tags kept in the output, lowercase, in alphabetical order.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "i", "img", "li", "ol", "p", "pre", "span", "strong", "table", "tbody", "td", "th", "thead",
    "tr", "u", "ul",
];

/// Tags removed together with everything up to their closing tag.
const DROPPED_WITH_CONTENT: &[&str] = &["embed", "iframe", "object", "script", "style"];

/// Attributes kept on allowed tags. `href` and `src` are additionally
/// subject to the URL scheme check.
const KEPT_ATTRIBUTES: &[&str] = &["alt", "class", "href", "src", "title"];

/// A tag parsed out of the fragment.
struct ParsedTag {
    /// Tag name, lowercased
    name: String,
    /// Attribute name (lowercased) and decoded value pairs, in source order
    attrs: Vec<(String, Option<String>)>,
    /// `</...>` form
    closing: bool,
    /// `<.../>` form
    self_closing: bool,
    /// Index just past the terminating `>`
    end: usize,
}

/// Reduce a recipe HTML fragment to the allowed subset.
///
/// Plain text and markup built from allowed tags pass through unchanged;
/// unknown tags are dropped while their inner text is kept; script-capable
/// elements are dropped with their content. A `<` that does not open a tag
/// is emitted as `&lt;`.
pub fn sanitize_recipe_html(html: &str) -> String {
    let chars: Vec<char> = html.chars().collect();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '<' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        if starts_comment(&chars, i) {
            i = skip_comment(&chars, i);
            continue;
        }

        match parse_tag(&chars, i) {
            Some(tag) => {
                i = tag.end;
                if tag.closing {
                    if ALLOWED_TAGS.contains(&tag.name.as_str()) {
                        out.push_str("</");
                        out.push_str(&tag.name);
                        out.push('>');
                    }
                } else if DROPPED_WITH_CONTENT.contains(&tag.name.as_str()) {
                    i = skip_past_closing(&chars, i, &tag.name);
                } else if ALLOWED_TAGS.contains(&tag.name.as_str()) {
                    emit_tag(&mut out, &tag);
                }
                // Unknown tag: emit nothing, keep scanning its content
            }
            None => {
                // Not a tag at all; keep the character as text
                out.push_str("&lt;");
                i += 1;
            }
        }
    }

    out
}

/// Check whether `href`/`src` may be kept: http(s) or relative only.
fn is_safe_url(value: &str) -> bool {
    // Strip whitespace and control characters before inspecting the scheme
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if compact.starts_with("http://") || compact.starts_with("https://") {
        return true;
    }

    // A colon before the first path/query/fragment separator introduces a
    // scheme other than the two above
    match compact.find(':') {
        None => true,
        Some(colon) => {
            let stop = compact.find(['/', '?', '#']).unwrap_or(compact.len());
            colon > stop
        }
    }
}

fn starts_comment(chars: &[char], i: usize) -> bool {
    chars[i..].starts_with(&['<', '!', '-', '-'])
}

/// Skip an HTML comment, returning the index past `-->` (or the end of the
/// fragment for an unterminated comment).
fn skip_comment(chars: &[char], i: usize) -> usize {
    let mut j = i + 4;
    while j < chars.len() {
        if chars[j..].starts_with(&['-', '-', '>']) {
            return j + 3;
        }
        j += 1;
    }
    chars.len()
}

/// Parse the tag starting at `chars[i] == '<'`.
///
/// Returns `None` when the `<` does not open a tag (no name, or the tag is
/// unterminated); the caller then treats the character as text.
fn parse_tag(chars: &[char], i: usize) -> Option<ParsedTag> {
    let mut j = i + 1;

    let closing = matches!(chars.get(j), Some('/'));
    if closing {
        j += 1;
    }

    if !matches!(chars.get(j), Some(c) if c.is_ascii_alphabetic()) {
        return None;
    }

    let mut name = String::new();
    while let Some(&c) = chars.get(j) {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
            j += 1;
        } else {
            break;
        }
    }

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while matches!(chars.get(j), Some(c) if c.is_whitespace()) {
            j += 1;
        }

        match chars.get(j) {
            None => return None,
            Some('>') => {
                return Some(ParsedTag {
                    name,
                    attrs,
                    closing,
                    self_closing,
                    end: j + 1,
                });
            }
            Some('/') => {
                self_closing = true;
                j += 1;
            }
            Some(_) => {
                let (attr, next) = parse_attribute(chars, j)?;
                attrs.push(attr);
                j = next;
            }
        }
    }
}

/// Parse one attribute starting at a non-whitespace position inside a tag.
/// The value comes back with character references decoded.
fn parse_attribute(chars: &[char], i: usize) -> Option<((String, Option<String>), usize)> {
    let mut j = i;
    let mut name = String::new();

    while let Some(&c) = chars.get(j) {
        if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
            break;
        }
        name.push(c.to_ascii_lowercase());
        j += 1;
    }
    if name.is_empty() {
        // A stray character the attribute grammar cannot consume
        return None;
    }

    let mut k = j;
    while matches!(chars.get(k), Some(c) if c.is_whitespace()) {
        k += 1;
    }

    if !matches!(chars.get(k), Some('=')) {
        // Valueless attribute
        return Some(((name, None), j));
    }
    k += 1;
    while matches!(chars.get(k), Some(c) if c.is_whitespace()) {
        k += 1;
    }

    let mut value = String::new();
    match chars.get(k) {
        Some(&quote) if quote == '"' || quote == '\'' => {
            k += 1;
            loop {
                match chars.get(k) {
                    None => return None,
                    Some(&c) if c == quote => {
                        k += 1;
                        break;
                    }
                    Some(&c) => {
                        value.push(c);
                        k += 1;
                    }
                }
            }
        }
        _ => {
            while let Some(&c) = chars.get(k) {
                if c.is_whitespace() || c == '>' {
                    break;
                }
                value.push(c);
                k += 1;
            }
        }
    }

    Some(((name, Some(decode_character_references(&value))), k))
}

/// Decode HTML character references in an attribute value.
///
/// Mirrors how a browser tokenizer reads the value: numeric references
/// decode with or without the terminating semicolon, named references only
/// with it. An `&` that opens no recognized reference stays as written.
fn decode_character_references(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '&' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match parse_character_reference(&chars, i) {
            Some((decoded, next)) => {
                out.push(decoded);
                i = next;
            }
            None => {
                out.push('&');
                i += 1;
            }
        }
    }

    out
}

/// Parse one character reference starting at `chars[i] == '&'`, returning
/// the decoded character and the index just past the reference.
fn parse_character_reference(chars: &[char], i: usize) -> Option<(char, usize)> {
    if matches!(chars.get(i + 1), Some('#')) {
        let mut j = i + 2;
        let hex = matches!(chars.get(j), Some('x' | 'X'));
        if hex {
            j += 1;
        }
        let radix: u32 = if hex { 16 } else { 10 };

        let mut code: u32 = 0;
        let mut digits = 0;
        while let Some(digit) = chars.get(j).and_then(|c| c.to_digit(radix)) {
            code = code.saturating_mul(radix).saturating_add(digit);
            digits += 1;
            j += 1;
        }
        if digits == 0 {
            return None;
        }
        if matches!(chars.get(j), Some(';')) {
            j += 1;
        }

        let decoded = match code {
            0 => '\u{FFFD}',
            _ => char::from_u32(code).unwrap_or('\u{FFFD}'),
        };
        return Some((decoded, j));
    }

    let mut j = i + 1;
    let mut name = String::new();
    while matches!(chars.get(j), Some(c) if c.is_ascii_alphanumeric()) {
        name.push(chars[j]);
        j += 1;
    }
    if !matches!(chars.get(j), Some(';')) {
        return None;
    }
    named_reference(&name).map(|decoded| (decoded, j + 1))
}

/// Named references worth knowing about in a URL position: the ubiquitous
/// five plus the characters a scheme could be assembled from. Matching is
/// case-sensitive, as in HTML.
fn named_reference(name: &str) -> Option<char> {
    match name {
        "amp" | "AMP" => Some('&'),
        "lt" | "LT" => Some('<'),
        "gt" | "GT" => Some('>'),
        "quot" | "QUOT" => Some('"'),
        "apos" => Some('\''),
        "colon" => Some(':'),
        "sol" => Some('/'),
        "Tab" => Some('\t'),
        "NewLine" => Some('\n'),
        _ => None,
    }
}

/// Skip everything up to and including `</name>`, case-insensitively.
/// An unterminated element swallows the rest of the fragment.
fn skip_past_closing(chars: &[char], from: usize, name: &str) -> usize {
    let name_chars: Vec<char> = name.chars().collect();
    let mut i = from;

    while i < chars.len() {
        if chars[i] == '<' && matches!(chars.get(i + 1), Some('/')) {
            let mut j = i + 2;
            let mut matched = true;
            for &nc in &name_chars {
                match chars.get(j) {
                    Some(&c) if c.eq_ignore_ascii_case(&nc) => j += 1,
                    _ => {
                        matched = false;
                        break;
                    }
                }
            }
            if matched {
                while matches!(chars.get(j), Some(c) if c.is_whitespace()) {
                    j += 1;
                }
                if matches!(chars.get(j), Some('>')) {
                    return j + 1;
                }
            }
        }
        i += 1;
    }

    chars.len()
}

/// Re-emit an allowed tag with only the kept attributes.
fn emit_tag(out: &mut String, tag: &ParsedTag) {
    out.push('<');
    out.push_str(&tag.name);

    for (name, value) in &tag.attrs {
        if !KEPT_ATTRIBUTES.contains(&name.as_str()) {
            continue;
        }
        let url_attr = name == "href" || name == "src";
        match value {
            Some(value) => {
                if url_attr && !is_safe_url(value) {
                    continue;
                }
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr_value(value));
                out.push('"');
            }
            None => {
                // A URL attribute without a value points nowhere; drop it
                if url_attr {
                    continue;
                }
                out.push(' ');
                out.push_str(name);
            }
        }
    }

    if tag.self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

/// Escape a decoded attribute value for double-quoted re-emission. `&` is
/// escaped too, so nothing in the output reads as a character reference
/// a second time.
fn escape_attr_value(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
