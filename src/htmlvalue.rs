use std::fmt::Debug;

/// The type of the HTML node.
///
/// Access it using [`Value::value_type`] or
/// [`Html::value_type`](crate::htmldata::Html::value_type).
///
/// The `ValueType` can be used if you are interested in
/// the type of the value without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document node that holds everything. Note that this not the same as
    /// the `html` element.
    Document,
    /// Document type declaration.
    Doctype,
    /// Element; it has a name and attributes.
    Element,
    /// Text.
    Text,
    /// Comment.
    Comment,
}

/// An HTML value.
///
/// Access it using [`Html::value`](crate::htmldata::Html::value) or
/// mutably using [`Html::value_mut`](crate::htmldata::Html::value_mut).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Document node that holds everything.
    Document,
    /// Document type declaration, like `<!DOCTYPE html>`.
    Doctype(Doctype),
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the HTML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::Doctype(_) => ValueType::Doctype,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
        }
    }
}

/// A single attribute of an element, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name. Foreign attributes keep their prefix, like `xlink:href`.
    pub name: String,
    /// Attribute value, unescaped. May be empty.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// HTML element value.
///
/// Example: `<p>` or `<img src="a.png">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Vec::new(),
        }
    }

    /// The tag name of the element.
    ///
    /// ```rust
    /// use h5pretty::Html;
    ///
    /// let mut html = Html::new();
    /// let p = html.new_element("p");
    /// assert_eq!(html.element(p).unwrap().name(), "p");
    /// ```
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element, in the order the parser gave them.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get an attribute value by name.
    ///
    /// ```rust
    /// use h5pretty::Html;
    ///
    /// let mut html = Html::new();
    /// let img = html.new_element("img");
    /// let element = html.element_mut(img).unwrap();
    /// element.set_attribute("src", "a.png");
    /// assert_eq!(element.get_attribute("src"), Some("a.png"));
    /// assert_eq!(element.get_attribute("alt"), None);
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Set an attribute value.
    ///
    /// Names are unique per element: an existing attribute keeps its
    /// position and gets the new value, a new one is added at the end.
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            existing.value = value;
        } else {
            self.attributes.push(Attribute { name, value });
        }
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|attribute| attribute.name != name);
    }
}

/// Document type declaration.
///
/// The parser keeps the name and the public and system identifiers; the
/// renderer only reproduces them on request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Doctype {
    pub(crate) name: String,
    pub(crate) public_id: String,
    pub(crate) system_id: String,
}

impl Doctype {
    pub(crate) fn new(name: String, public_id: String, system_id: String) -> Self {
        Doctype {
            name,
            public_id,
            system_id,
        }
    }

    /// The doctype name, usually `html`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The public identifier; empty if absent.
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// The system identifier; empty if absent.
    pub fn system_id(&self) -> &str {
        &self.system_id
    }
}

/// Text node value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// Comment node value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}
