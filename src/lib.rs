//! h5pretty pretty prints HTML.
//!
//! It parses HTML with [html5ever](https://docs.rs/html5ever) into an
//! [`Html`] tree, removes whitespace-only text outside preformatted
//! elements, and writes the tree back as indented HTML. Short leaves stay on
//! one line; everything else gets a line per child. Re-parsing the output
//! gives the same tree, and pretty printing it again gives the same output.
//!
//! ```rust
//! use h5pretty::{prettify_str, output::Parameters};
//!
//! let output = prettify_str("<ul><li>a</li><li>b</li></ul>", &Parameters::default()).unwrap();
//! assert_eq!(output, "<ul>\n    <li>a</li>\n    <li>b</li>\n</ul>\n");
//! ```
#![forbid(unsafe_code)]

mod access;
mod creation;
mod elements;
mod encoding;
mod entity;
mod error;
mod fragment;
mod htmldata;
mod htmlvalue;
mod manipulation;
pub mod output;
mod parse;
mod pipeline;
mod unpretty;
mod valueaccess;

pub use access::NodeEdge;
pub use elements::{Elements, HtmlNames};
pub use entity::escape;
pub use error::Error;
pub use fragment::has_explicit_scaffold;
pub use htmldata::{Html, Node};
pub use htmlvalue::{Attribute, Comment, Doctype, Element, Text, Value, ValueType};
pub use pipeline::{prettify, prettify_str};
