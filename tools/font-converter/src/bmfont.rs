//! Parsing of AngelCode BMFont descriptors.
//!
//! Both the text (`char id=65 x=2 ...`) and the XML (`<char id="65" x="2" .../>`) variants are
//! accepted. Only the `page` and `char` tags are interpreted.

use core::{error, fmt};

/// A parsed BMFont descriptor.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct BmFont {
    /// The texture pages of the font.
    pub pages: Vec<BmPage>,
    /// The glyphs of the font, in descriptor order.
    pub chars: Vec<BmChar>,
}

/// A texture page referenced by a [`BmFont`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BmPage {
    /// The identifier of the page.
    pub id: u32,
    /// The file name of the page image, relative to the descriptor.
    pub file: String,
}

/// A single glyph of a [`BmFont`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct BmChar {
    /// The character code.
    pub id: u32,
    /// The left edge of the glyph on its page.
    pub x: u32,
    /// The top edge of the glyph on its page.
    pub y: u32,
    /// The width of the glyph image.
    pub width: u32,
    /// The height of the glyph image.
    pub height: u32,
    /// The horizontal offset of the glyph image inside of the cell.
    pub xoffset: i32,
    /// The vertical offset of the glyph image inside of the cell.
    pub yoffset: i32,
    /// The distance the cursor advances after the glyph.
    pub xadvance: i32,
}

impl BmFont {
    /// Parses a BMFont descriptor in either the text or the XML format.
    ///
    /// # Errors
    ///
    /// Returns [`BmFontError`] if a `page` or `char` tag is missing attributes or holds invalid
    /// values, or if the descriptor lacks pages or glyphs.
    pub fn parse(source: &str) -> Result<Self, BmFontError> {
        let mut font = Self::default();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;

            let tags: Vec<&str> = if line.contains('<') {
                line.split('<').collect()
            } else {
                vec![line]
            };

            for tag in tags {
                let tag = tag
                    .trim()
                    .trim_end_matches('>')
                    .trim_end_matches('/')
                    .trim_end();
                let (name, rest) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));
                let attributes = Attributes::parse(rest, line_number);

                match name {
                    "page" => font.pages.push(BmPage {
                        id: attributes.number("page", "id")?,
                        file: attributes.required("page", "file")?.to_owned(),
                    }),
                    "char" => font.chars.push(BmChar {
                        id: attributes.number("char", "id")?,
                        x: attributes.number("char", "x")?,
                        y: attributes.number("char", "y")?,
                        width: attributes.number("char", "width")?,
                        height: attributes.number("char", "height")?,
                        xoffset: attributes.number("char", "xoffset")?,
                        yoffset: attributes.number("char", "yoffset")?,
                        xadvance: attributes.number("char", "xadvance")?,
                    }),
                    _ => {}
                }
            }
        }

        if font.pages.is_empty() {
            return Err(BmFontError::MissingPage);
        }
        if font.chars.is_empty() {
            return Err(BmFontError::NoGlyphs);
        }

        Ok(font)
    }

    /// Returns the file name of the first texture page.
    pub fn first_page(&self) -> Option<&str> {
        self.pages
            .iter()
            .min_by_key(|page| page.id)
            .map(|page| page.file.as_str())
    }

    /// Returns the glyph for the character code `id`.
    pub fn glyph(&self, id: u32) -> Option<&BmChar> {
        self.chars.iter().find(|glyph| glyph.id == id)
    }
}

/// The `key=value` pairs of a single tag.
struct Attributes<'source> {
    /// The attributes in order of appearance.
    pairs: Vec<(&'source str, &'source str)>,
    /// The line of the tag, for error reporting.
    line: usize,
}

impl<'source> Attributes<'source> {
    /// Splits `source` into its attributes. Values may be single or double quoted.
    fn parse(source: &'source str, line: usize) -> Self {
        let mut pairs = Vec::new();
        let mut rest = source.trim_start();

        while let Some((key, after_key)) = rest.split_once('=') {
            // A bare word before the `=` belongs to the previous value or is a flag; skip it.
            let key = key.rsplit(char::is_whitespace).next().unwrap_or(key);

            let (value, after_value) = match after_key.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let quoted = &after_key[quote.len_utf8()..];
                    quoted.split_once(quote).unwrap_or((quoted, ""))
                }
                _ => after_key
                    .split_once(char::is_whitespace)
                    .unwrap_or((after_key, "")),
            };

            pairs.push((key, value));
            rest = after_value.trim_start();
        }

        Self { pairs, line }
    }

    /// Returns the value of `attribute`.
    fn required(
        &self,
        tag: &'static str,
        attribute: &'static str,
    ) -> Result<&'source str, BmFontError> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == attribute)
            .map(|(_, value)| *value)
            .ok_or(BmFontError::MissingAttribute {
                tag,
                attribute,
                line: self.line,
            })
    }

    /// Returns the value of `attribute`, parsed as a number.
    fn number<T: core::str::FromStr>(
        &self,
        tag: &'static str,
        attribute: &'static str,
    ) -> Result<T, BmFontError> {
        let value = self.required(tag, attribute)?;
        value.parse().map_err(|_| BmFontError::InvalidAttribute {
            attribute,
            value: value.to_owned(),
            line: self.line,
        })
    }
}

/// Various errors that can occur while parsing a BMFont descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BmFontError {
    /// A tag lacks a required attribute.
    MissingAttribute {
        /// The name of the tag.
        tag: &'static str,
        /// The name of the missing attribute.
        attribute: &'static str,
        /// The line of the tag.
        line: usize,
    },
    /// An attribute holds a value that is not a valid number.
    InvalidAttribute {
        /// The name of the attribute.
        attribute: &'static str,
        /// The offending value.
        value: String,
        /// The line of the tag.
        line: usize,
    },
    /// The descriptor does not reference a texture page.
    MissingPage,
    /// The descriptor does not contain any glyphs.
    NoGlyphs,
}

impl fmt::Display for BmFontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute {
                tag,
                attribute,
                line,
            } => write!(f, "line {line}: `{tag}` is missing the `{attribute}` attribute"),
            Self::InvalidAttribute {
                attribute,
                value,
                line,
            } => write!(f, "line {line}: invalid `{attribute}` value {value:?}"),
            Self::MissingPage => write!(f, "descriptor does not reference a page"),
            Self::NoGlyphs => write!(f, "descriptor does not contain any glyphs"),
        }
    }
}

impl error::Error for BmFontError {}

#[cfg(test)]
mod test {
    use super::{BmChar, BmFont, BmFontError};

    const TEXT_DESCRIPTOR: &str = "\
info face=\"Liberation Sans\" size=12 bold=0 italic=0 charset=\"\" unicode=0
common lineHeight=14 base=11 scaleW=256 scaleH=256 pages=1 packed=0
page id=0 file=\"liberation_0.png\"
chars count=2
char id=65   x=10    y=20    width=7     height=9     xoffset=0     yoffset=2     xadvance=8     page=0  chnl=15
char id=32   x=0     y=0     width=0     height=0     xoffset=0     yoffset=0     xadvance=3     page=0  chnl=15
";

    const XML_DESCRIPTOR: &str = r#"<?xml version="1.0"?>
<font>
  <info face="Liberation Sans" size="12" bold="0" italic="0"/>
  <common lineHeight="14" base="11" scaleW="256" scaleH="256" pages="1" packed="0"/>
  <pages>
    <page id="0" file="liberation_0.png" />
  </pages>
  <chars count="2">
    <char id="65" x="10" y="20" width="7" height="9" xoffset="0" yoffset="2" xadvance="8" page="0" chnl="15" />
    <char id="32" x="0" y="0" width="0" height="0" xoffset="0" yoffset="0" xadvance="3" page="0" chnl="15" />
  </chars>
</font>
"#;

    fn expected_a() -> BmChar {
        BmChar {
            id: 65,
            x: 10,
            y: 20,
            width: 7,
            height: 9,
            xoffset: 0,
            yoffset: 2,
            xadvance: 8,
        }
    }

    #[test]
    fn parse_text_descriptor() {
        let font = BmFont::parse(TEXT_DESCRIPTOR).unwrap();

        assert_eq!(font.first_page(), Some("liberation_0.png"));
        assert_eq!(font.chars.len(), 2);
        assert_eq!(font.glyph(65), Some(&expected_a()));
        assert_eq!(font.glyph(32).map(|glyph| glyph.xadvance), Some(3));
        assert_eq!(font.glyph(66), None);
    }

    #[test]
    fn parse_xml_descriptor() {
        assert_eq!(
            BmFont::parse(XML_DESCRIPTOR).unwrap(),
            BmFont::parse(TEXT_DESCRIPTOR).unwrap()
        );
    }

    #[test]
    fn single_quoted_values() {
        let font = BmFont::parse(
            "<page id='0' file='liberation_0.png'/>\n\
             <char id='65' x='10' y='20' width='7' height='9' xoffset='0' yoffset='2' xadvance='8'/>",
        )
        .unwrap();

        assert_eq!(font.first_page(), Some("liberation_0.png"));
        assert_eq!(font.glyph(65), Some(&expected_a()));
    }

    #[test]
    fn negative_offsets() {
        let font = BmFont::parse(
            "page id=0 file=p.png\nchar id=106 x=1 y=2 width=3 height=10 xoffset=-1 yoffset=3 xadvance=3",
        )
        .unwrap();

        assert_eq!(font.chars[0].xoffset, -1);
    }

    #[test]
    fn lowest_page_is_first() {
        let font = BmFont::parse(
            "page id=1 file=b.png\npage id=0 file=a.png\nchar id=65 x=0 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=1",
        )
        .unwrap();

        assert_eq!(font.first_page(), Some("a.png"));
    }

    #[test]
    fn missing_attribute() {
        let error = BmFont::parse("page id=0 file=a.png\nchar id=65 x=0 y=0 width=1 height=1")
            .unwrap_err();

        assert_eq!(
            error,
            BmFontError::MissingAttribute {
                tag: "char",
                attribute: "xoffset",
                line: 2
            }
        );
    }

    #[test]
    fn invalid_attribute() {
        let error = BmFont::parse("page id=zero file=a.png").unwrap_err();

        assert_eq!(
            error,
            BmFontError::InvalidAttribute {
                attribute: "id",
                value: "zero".to_owned(),
                line: 1
            }
        );
    }

    #[test]
    fn empty_descriptors() {
        assert_eq!(BmFont::parse("info size=12"), Err(BmFontError::MissingPage));
        assert_eq!(BmFont::parse("page id=0 file=a.png"), Err(BmFontError::NoGlyphs));
    }
}
