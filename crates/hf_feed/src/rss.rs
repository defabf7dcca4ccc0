//! RSS 2.0 output.

use std::borrow::Cow;
use std::fmt::Display;
use std::io::Cursor;

use hf_core::{Error, FeedDocument, FeedEntry, FeedSerializer, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const GENERATOR: &str = concat!("hnfeed ", env!("CARGO_PKG_VERSION"));

/// Drops characters XML 1.0 cannot represent, even escaped.
fn xml_text(text: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    }

    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| allowed(c)).collect())
    }
}

fn feed_error(e: impl Display) -> Error {
    Error::Feed(format!("XML write error: {}", e))
}

struct XmlOut {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlOut {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(feed_error)
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(start)).map_err(feed_error)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(feed_error)
    }

    fn element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attributes)?;
        self.writer
            .write_event(Event::Text(BytesText::new(&xml_text(text))))
            .map_err(feed_error)?;
        self.end(name)
    }

    fn finish(self) -> Vec<u8> {
        let mut bytes = self.writer.into_inner().into_inner();
        bytes.push(b'\n');
        bytes
    }
}

/// Serializes a [`FeedDocument`] as an RSS 2.0 channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RssSerializer;

impl RssSerializer {
    pub fn new() -> Self {
        Self
    }

    fn write_item(out: &mut XmlOut, entry: &FeedEntry) -> Result<()> {
        out.start("item", &[])?;
        out.element("title", &[], &entry.title)?;
        out.element("link", &[], &entry.link)?;
        out.element("guid", &[("isPermaLink", "false")], &entry.guid)?;
        out.element("comments", &[], &entry.comments)?;
        out.element("description", &[], &entry.description)?;
        out.element("pubDate", &[], &entry.published.to_rfc2822())?;
        out.end("item")
    }
}

impl FeedSerializer for RssSerializer {
    fn content_type(&self) -> &str {
        "application/rss+xml"
    }

    fn serialize(&self, document: &FeedDocument) -> Result<Vec<u8>> {
        let meta = &document.meta;
        let mut out = XmlOut::new();

        out.declaration()?;
        out.start("rss", &[("version", "2.0")])?;
        out.start("channel", &[])?;
        out.element("title", &[], &meta.title)?;
        out.element("link", &[], &meta.link)?;
        out.element("description", &[], &meta.description)?;
        out.element("language", &[], &meta.language)?;
        out.element("lastBuildDate", &[], &document.last_build.to_rfc2822())?;
        out.element("generator", &[], GENERATOR)?;

        for entry in &document.entries {
            Self::write_item(&mut out, entry)?;
        }

        out.end("channel")?;
        out.end("rss")?;
        Ok(out.finish())
    }
}

/// Parses `xml` strictly and returns the title of every `<item>`.
#[cfg(test)]
pub(crate) fn item_titles(xml: &str) -> Vec<String> {
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut titles = Vec::new();
    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                if path.last().map(String::as_str) == Some("item") {
                    titles.push(String::new());
                }
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Text(e) => {
                if path.ends_with(&["item".to_string(), "title".to_string()]) {
                    if let Some(title) = titles.last_mut() {
                        title.push_str(&e.unescape().expect("valid escapes"));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    assert!(path.is_empty(), "unclosed elements: {:?}", path);
    titles
}
