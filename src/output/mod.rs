//! Pretty printing of HTML trees.
//!
//! The main entry points are [`Html::serialize_pretty`](crate::Html::serialize_pretty)
//! and [`Html::to_pretty_string`](crate::Html::to_pretty_string), controlled by
//! [`Parameters`]. The renderer itself, [`Pretty`], works on any tree that
//! implements [`PrettyNode`].
mod adapter;
mod common;
mod pretty;

pub use adapter::{HtmlNode, PrettyNode};
pub use common::{Indentation, Parameters};
pub use pretty::Pretty;
