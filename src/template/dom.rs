//! Owned, editable SVG tree.
//!
//! Qualified names are kept verbatim (`inkscape:label`, `xlink:href`, ...) so a template saved
//! by a design tool survives a parse/serialize cycle with its editor metadata intact.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};

use crate::foundation::error::{DuelvizError, DuelvizResult};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Character data, unescaped.
    Text(String),
    /// `<![CDATA[...]]>` content (style sheets, scripts).
    CData(String),
    /// Comment body.
    Comment(String),
}

/// An XML element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Qualified tag name.
    pub name: String,
    attrs: Vec<(String, String)>,
    /// Children in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Empty element named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name without its namespace prefix (`svg:rect` → `rect`).
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Attribute value by qualified name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, keeping its position when it already exists.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_owned(), value)),
        }
    }

    /// Remove an attribute, returning its old value.
    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(idx).1)
    }

    /// Attributes in document order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Concatenated text of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Depth-first search (self included) for the element whose `id` is `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find(id))
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) => e.find_mut(id),
            _ => None,
        })
    }

    /// Every `id` in the subtree, document order.
    pub fn ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_ids(self, &mut out);
        out
    }

    /// Deep copy with every `id` in the subtree passed through `rename`.
    pub fn clone_renamed(&self, rename: &dyn Fn(&str) -> String) -> Element {
        let mut out = self.clone();
        rename_ids(&mut out, rename);
        out
    }

    /// Replace the descendant `id` with `with`, returning the removed element.
    fn splice(&mut self, id: &str, with: &mut Vec<Element>) -> Option<Element> {
        let pos = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(e) if e.id() == Some(id)));
        if let Some(pos) = pos {
            let replacement = with.drain(..).map(Node::Element);
            let removed: Vec<Node> = self.children.splice(pos..=pos, replacement).collect();
            return removed.into_iter().find_map(|n| match n {
                Node::Element(e) => Some(e),
                _ => None,
            });
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) => e.splice(id, with),
            _ => None,
        })
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) | Node::CData(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
            Node::Comment(_) => {}
        }
    }
}

fn collect_ids(el: &Element, out: &mut Vec<String>) {
    if let Some(id) = el.id() {
        out.push(id.to_owned());
    }
    for c in el.child_elements() {
        collect_ids(c, out);
    }
}

fn rename_ids(el: &mut Element, rename: &dyn Fn(&str) -> String) {
    if let Some(id) = el.id().map(rename) {
        el.set_attr("id", id);
    }
    for child in &mut el.children {
        if let Node::Element(e) = child {
            rename_ids(e, rename);
        }
    }
}

/// A parsed SVG document: prolog (declaration, doctype, leading comments) plus the root element.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    prolog: Vec<Event<'static>>,
    root: Element,
}

impl SvgDocument {
    /// Parse SVG source text.
    pub fn parse(src: &str) -> DuelvizResult<Self> {
        let mut reader = Reader::from_str(src);
        let mut prolog = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let pos = reader.buffer_position();
            let ev = reader
                .read_event()
                .map_err(|e| DuelvizError::template(format!("parse svg at byte {pos}: {e}")))?;
            match ev {
                Event::Start(e) => stack.push(element_from_start(&e)?),
                Event::Empty(e) => {
                    let el = element_from_start(&e)?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::End(_) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| DuelvizError::template("unbalanced closing tag"))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Event::Text(t) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| DuelvizError::template(format!("svg text: {e}")))?;
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
                Event::CData(c) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&c).into_owned();
                        parent.children.push(Node::CData(text));
                    }
                }
                Event::Comment(c) => match stack.last_mut() {
                    Some(parent) => {
                        let text = String::from_utf8_lossy(&c).into_owned();
                        parent.children.push(Node::Comment(text));
                    }
                    None if root.is_none() => prolog.push(Event::Comment(c.into_owned())),
                    None => {}
                },
                ev @ (Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {
                    if stack.is_empty() && root.is_none() {
                        prolog.push(ev.into_owned());
                    }
                }
                Event::Eof => break,
            }
        }

        if !stack.is_empty() {
            return Err(DuelvizError::template("unexpected end of svg: unclosed element"));
        }
        let root = root.ok_or_else(|| DuelvizError::template("svg has no root element"))?;
        if root.local_name() != "svg" {
            return Err(DuelvizError::template(format!(
                "root element must be <svg>, found <{}>",
                root.name
            )));
        }
        Ok(Self { prolog, root })
    }

    /// Serialize back to SVG text.
    pub fn to_svg_string(&self) -> DuelvizResult<String> {
        let mut writer = Writer::new(Vec::new());
        for ev in &self.prolog {
            writer.write_event(ev.clone()).map_err(write_err)?;
            writer.get_mut().push(b'\n');
        }
        write_element(&mut writer, &self.root)?;
        writer.get_mut().push(b'\n');
        String::from_utf8(writer.into_inner())
            .map_err(|e| DuelvizError::template(format!("serialized svg is not utf-8: {e}")))
    }

    /// The `<svg>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Element by `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    /// Mutable element by `id`.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }

    /// Mutable element by `id`, or a template error naming it.
    pub fn require_mut(&mut self, id: &str) -> DuelvizResult<&mut Element> {
        self.root
            .find_mut(id)
            .ok_or_else(|| DuelvizError::template(format!("no element with id '{id}'")))
    }

    /// Every `id` in document order.
    pub fn ids(&self) -> Vec<String> {
        self.root.ids()
    }

    /// Remove the element `id` (never the root), returning it.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.replace(id, Vec::new())
    }

    /// Replace the element `id` (never the root) with `with`, in place.
    pub fn replace(&mut self, id: &str, mut with: Vec<Element>) -> Option<Element> {
        self.root.splice(id, &mut with)
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> DuelvizResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(el));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(el);
            Ok(())
        }
        None => Err(DuelvizError::template("svg has more than one root element")),
    }
}

fn element_from_start(e: &BytesStart<'_>) -> DuelvizResult<Element> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| DuelvizError::template(format!("element name is not utf-8: {err}")))?
        .to_owned();
    let mut el = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            DuelvizError::template(format!("attribute of <{}>: {err}", el.name))
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| DuelvizError::template(format!("attribute name: {err}")))?
            .to_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| DuelvizError::template(format!("attribute '{key}': {err}")))?
            .into_owned();
        el.attrs.push((key, value));
    }
    Ok(el)
}

fn write_element(w: &mut Writer<Vec<u8>>, el: &Element) -> DuelvizResult<()> {
    let mut start = BytesStart::new(el.name.as_str());
    for (k, v) in &el.attrs {
        start.push_attribute((k.as_str(), v.as_str()));
    }
    if el.children.is_empty() {
        return w.write_event(Event::Empty(start)).map_err(write_err);
    }

    w.write_event(Event::Start(start)).map_err(write_err)?;
    for child in &el.children {
        match child {
            Node::Element(c) => write_element(w, c)?,
            Node::Text(t) => w
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(write_err)?,
            Node::CData(t) => w
                .write_event(Event::CData(BytesCData::new(t.as_str())))
                .map_err(write_err)?,
            Node::Comment(t) => w
                .write_event(Event::Comment(BytesText::from_escaped(t.as_str())))
                .map_err(write_err)?,
        }
    }
    w.write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(write_err)
}

fn write_err(e: impl std::fmt::Display) -> DuelvizError {
    DuelvizError::template(format!("write svg: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/template/dom.rs"]
mod tests;
