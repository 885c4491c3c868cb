use core::str;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::node::{Node, NodeMap};
use crate::parse::Parse;
use crate::xml::{names, Error, Options};

/// An element which has been opened but not yet closed.
struct Element {
    name: String,
    map: NodeMap,
    text: String,
}

/// XML parsing engine.
///
/// See the [module level documentation][crate::xml] for how documents are
/// mapped.
///
/// # Examples
///
/// ```
/// use metaview::{Node, Parse};
/// use metaview::xml::Parser;
///
/// let root = Parser::new().parse(r#"<Plane TheZ="0" DeltaT="0.25"/>"#)?;
///
/// assert_eq!(root.get("the_z"), Some(&Node::Integer(0)));
/// assert_eq!(root.get("delta_t"), Some(&Node::Float(0.25)));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    /// Construct a parser with the default [`Options`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a parser with the given [`Options`].
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Access the options of the parser.
    #[must_use]
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn key(&self, name: &str) -> String {
        names::key(self.options.key_style, name)
    }

    /// Open an element, reading its attributes.
    fn open(&self, start: &BytesStart<'_>) -> Result<Element, Error> {
        let name = str::from_utf8(start.local_name().as_ref())?.to_owned();
        let mut map = NodeMap::new();

        for attribute in start.attributes() {
            let attribute = attribute?;

            if attribute.key.as_namespace_binding().is_some() {
                continue;
            }

            let key = self.key(str::from_utf8(attribute.key.local_name().as_ref())?);
            let value = attribute.unescape_value()?;
            let value = self.scalar(&value);
            self.append(&mut map, key, value);
        }

        Ok(Element {
            name,
            map,
            text: String::new(),
        })
    }

    /// Close an element, attaching it to its parent or making it the root.
    fn close(&self, element: Element, stack: &mut [Element], root: &mut Option<(String, Node)>) {
        let Element {
            name,
            mut map,
            text,
        } = element;

        // Whitespace inside the text is kept, only the ends are trimmed.
        let text = text.trim();

        let node = if map.is_empty() && !text.is_empty() {
            self.scalar(text)
        } else {
            if !text.is_empty() {
                let text = self.scalar(text);
                self.append(&mut map, self.options.text_key.clone(), text);
            }

            Node::Mapping(map)
        };

        let key = self.key(&name);

        match stack.last_mut() {
            Some(parent) => self.append(&mut parent.map, key, node),
            None => *root = Some((key, node)),
        }
    }

    /// Add a value to a mapping, accumulating repeated keys into a sequence.
    fn append(&self, map: &mut NodeMap, key: String, node: Node) {
        if map.get(&key).is_none() && self.options.is_sequence(&key) {
            map.insert(key, Node::Sequence(vec![node]));
        } else {
            map.append(key, node);
        }
    }

    fn scalar(&self, text: &str) -> Node {
        if self.options.infer_scalars {
            if let Some(node) = infer(text) {
                return node;
            }
        }

        Node::String(text.to_owned())
    }
}

impl Parse for Parser {
    type Error = Error;

    fn parse(&self, text: &str) -> Result<NodeMap, Self::Error> {
        let mut reader = Reader::from_str(text);

        let mut stack = Vec::<Element>::new();
        let mut root = None::<(String, Node)>;
        let mut elements = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = self.open(&start)?;

                    if root.is_some() {
                        return Err(Error::MultipleRoots { name: element.name });
                    }

                    elements += 1;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = self.open(&start)?;

                    if root.is_some() {
                        return Err(Error::MultipleRoots { name: element.name });
                    }

                    elements += 1;
                    self.close(element, &mut stack, &mut root);
                }
                Event::End(..) => {
                    let Some(element) = stack.pop() else {
                        return Err(Error::UnexpectedEnd);
                    };

                    self.close(element, &mut stack, &mut root);
                }
                Event::Text(content) => {
                    let content = content.unescape()?;

                    match stack.last_mut() {
                        Some(element) => element.text.push_str(&content),
                        None => tracing::trace!(%content, "skipping text outside of the root element"),
                    }
                }
                Event::CData(data) => {
                    let data = data.into_inner();
                    let data = str::from_utf8(&data)?;

                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(data);
                    }
                }
                Event::Decl(..) => {}
                Event::Eof => break,
                event => {
                    tracing::trace!(?event, "skipping event");
                }
            }
        }

        if let Some(element) = stack.pop() {
            return Err(Error::Unclosed { name: element.name });
        }

        let Some((key, node)) = root else {
            return Err(Error::NoRoot);
        };

        tracing::debug!(elements, "parsed xml document");

        Ok(match node {
            Node::Mapping(map) if self.options.unwrap_root => map,
            node => {
                let mut map = NodeMap::new();
                map.insert(key, node);
                map
            }
        })
    }
}

/// Recognize integers and floating point numbers.
///
/// Text is only turned into a number if formatting the number again gives
/// back exactly the same text, so values such as `007`, `1e3` or integers
/// which overflow an `i64` stay strings.
fn infer(text: &str) -> Option<Node> {
    let bytes = text.as_bytes();

    if !bytes.iter().any(u8::is_ascii_digit)
        || !bytes
            .iter()
            .all(|&b| matches!(b, b'0'..=b'9' | b'-' | b'.' | b'e'))
    {
        return None;
    }

    if memchr::memchr2(b'.', b'e', bytes).is_none() {
        let value = lexical_core::parse::<i64>(bytes).ok()?;
        let mut buffer = itoa::Buffer::new();
        return (buffer.format(value) == text).then_some(Node::Integer(value));
    }

    let value = lexical_core::parse::<f64>(bytes).ok()?;
    let mut buffer = ryu::Buffer::new();
    (value.is_finite() && buffer.format_finite(value) == text).then_some(Node::Float(value))
}

#[cfg(test)]
mod tests {
    use super::infer;
    use crate::node::Node;

    #[test]
    fn infer_scalars() {
        assert_eq!(infer("42"), Some(Node::Integer(42)));
        assert_eq!(infer("-7"), Some(Node::Integer(-7)));
        assert_eq!(infer("0"), Some(Node::Integer(0)));
        assert_eq!(infer("0.25"), Some(Node::Float(0.25)));
        assert_eq!(infer("0.65"), Some(Node::Float(0.65)));
        assert_eq!(infer("1.0"), Some(Node::Float(1.0)));
        assert_eq!(infer("1.5e-7"), Some(Node::Float(1.5e-7)));
        assert_eq!(infer("2023-05-04"), None);
        assert_eq!(infer("Image:0"), None);
        assert_eq!(infer("NaN"), None);
        assert_eq!(infer(" 1"), None);
        assert_eq!(infer("-"), None);
        assert_eq!(infer(""), None);
    }

    #[test]
    fn infer_keeps_text_which_does_not_round_trip() {
        assert_eq!(infer("007"), None);
        assert_eq!(infer("+1"), None);
        assert_eq!(infer("-0"), None);
        assert_eq!(infer("1e3"), None);
        assert_eq!(infer("1E3"), None);
        assert_eq!(infer("2.50"), None);
        assert_eq!(infer(".5"), None);
        assert_eq!(infer("99999999999999999999"), None);
        assert_eq!(infer("12345678901234567890123"), None);
        assert_eq!(infer("0.1000000000000000000001"), None);
    }
}
