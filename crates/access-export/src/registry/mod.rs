//! Lookup tables for the text driver's `schema.ini` vocabulary.
//!
//! Both lookups are total: unknown delimiters fall through to the generic
//! `Delimited(x)` template and unknown encodings resolve to UTF-8.
//!
//! [`text_encoding`] maps the same names onto `encoding_rs` codecs so text
//! files can be read and written in the code page the descriptor declares.

mod code_pages;

use code_pages::CODE_PAGES;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Code page used when an encoding name is not recognized.
pub const UTF8_CODE_PAGE: &str = "65001";

/// Format keyword for comma-separated files.
pub const CSV_DELIMITED: &str = "CSVDelimited";

/// Format keyword for tab-separated files.
pub const TAB_DELIMITED: &str = "TabDelimited";

/// Returns true for both a literal tab and the two-character `\t` escape.
pub fn is_tab(token: &str) -> bool {
    token == "\t" || token == "\\t"
}

/// Map a delimiter token to the `Format=` keyword understood by the text driver.
///
/// ```
/// use access_export::registry::text_format;
///
/// assert_eq!(text_format(","), "CSVDelimited");
/// assert_eq!(text_format("\t"), "TabDelimited");
/// assert_eq!(text_format(";"), "Delimited(;)");
/// ```
pub fn text_format(token: &str) -> String {
    if token == "," {
        CSV_DELIMITED.to_string()
    } else if is_tab(token) {
        TAB_DELIMITED.to_string()
    } else {
        format!("Delimited({})", token)
    }
}

/// Look up the numeric code page for an encoding name.
pub fn code_page(name: &str) -> &'static str {
    CODE_PAGES
        .iter()
        .find(|(encoding, _)| *encoding == name)
        .map(|(_, code)| *code)
        .unwrap_or(UTF8_CODE_PAGE)
}

/// Build the `CharacterSet=<code>` clause for an encoding name.
pub fn charset_clause(name: &str) -> String {
    format!("CharacterSet={}", code_page(name))
}

/// Every encoding name the registry recognizes.
pub fn encodings() -> impl Iterator<Item = &'static str> {
    CODE_PAGES.iter().map(|(name, _)| *name)
}

/// Codec for an encoding name.
///
/// Names the registry does not list resolve to UTF-8, matching
/// [`code_page`]. Listed names with no `encoding_rs` codec (the EBCDIC
/// pages, for instance) also resolve to UTF-8.
pub fn text_encoding(name: &str) -> &'static Encoding {
    if !encodings().any(|known| known == name) {
        return UTF_8;
    }
    Encoding::for_label(name.as_bytes()).unwrap_or(UTF_8)
}

/// Encode `text` for a file declared with `encoding`.
///
/// `encoding_rs` only decodes UTF-16, so both byte orders are encoded here.
/// Characters the target code page cannot represent become numeric
/// character references.
pub fn encode_text(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    if encoding == UTF_16LE {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    } else if encoding == UTF_16BE {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    } else {
        encoding.encode(text).0.into_owned()
    }
}
