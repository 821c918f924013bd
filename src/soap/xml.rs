use std::str::FromStr;

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::soap::error::SoapError;

pub type XmlResult<T> = std::result::Result<T, quick_xml::Error>;

/// Thin wrapper over [quick_xml::Writer] for building envelopes element by element
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    pub fn declaration(&mut self) -> XmlResult<()> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    pub fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> XmlResult<()> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.inner.write_event(Event::Start(start))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> XmlResult<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn element(&mut self, name: &str, text: &str) -> XmlResult<()> {
        self.element_with(name, &[], text)
    }

    pub fn element_with(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> XmlResult<()> {
        self.start(name, attributes)?;
        self.inner.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    /// Skips the element entirely when the value is absent
    pub fn optional(&mut self, name: &str, text: Option<&str>) -> XmlResult<()> {
        match text {
            Some(text) => self.element(name, text),
            None => Ok(()),
        }
    }

    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.inner.into_inner()).into_owned()
    }
}

/// Namespace-agnostic element tree. Names are stored without their prefix.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    fn from_start(start: &BytesStart<'_>) -> XmlResult<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            attributes.push((key, attr.unescape_value()?.into_owned()));
        }
        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    pub fn parse(document: &str) -> std::result::Result<Self, SoapError> {
        let mut reader = Reader::from_str(document);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Event::Text(text) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::End(_) => {
                    let Some(node) = stack.pop() else {
                        return Err(SoapError::Malformed("unbalanced closing tag".into()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(SoapError::Malformed("document ended inside an element".into()));
        }
        root.ok_or_else(|| SoapError::Malformed("empty document".into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `xsi:nil="true"` marks an explicitly absent value
    pub fn is_nil(&self) -> bool {
        self.attribute("nil") == Some("true")
    }

    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| child.name == name && !child.is_nil())
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children
            .iter()
            .filter(move |child| child.name == name && !child.is_nil())
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.child(name).map(|child| child.text.clone())
    }

    pub fn parsed<T: FromStr>(&self, name: &str) -> std::result::Result<Option<T>, SoapError> {
        let Some(child) = self.child(name) else {
            return Ok(None);
        };
        child.text.parse().map(Some).map_err(|_| {
            SoapError::Malformed(format!("{name} has unexpected value {:?}", child.text))
        })
    }
}

/// Types decoded from an element of a SOAP response body
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> std::result::Result<Self, SoapError>;
}
