//! # Overview
//!
//! This crate provides an implementation of the [Zhang-Shasha algorithm][zhang-shasha] for the
//! _tree edit distance_ between two ordered labeled trees, that is the lowest total cost of a
//! sequence of node insertions, deletions and relabelings that transforms one tree into the other,
//! according to a user-defined [CostModel].
//!
//! Inserting a node makes it the parent of a consecutive sequence of its new siblings, while
//! deleting a node makes its children the children of its parent, in its place.
//!
//! [zhang-shasha]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use zhang_shasha::*;
//! use std::mem::{discriminant, Discriminant};
//! use std::iter::empty;
//!
//! enum Json {
//!     Null,
//!     Bool(bool),
//!     Number(f64),
//!     String(String),
//!     Array(Vec<Json>),
//!     Map(Vec<(String, Json)>),
//! }
//!
//! impl<'n> Node<'n> for Json {
//!     type Label = Discriminant<Json>;
//!     fn label(&'n self) -> Self::Label {
//!         discriminant(self)
//!     }
//! }
//!
//! impl<'t> Tree<'t> for Json {
//!     type Children = Box<dyn Iterator<Item = &'t Self> + 't>;
//!     fn children(&'t self) -> Self::Children {
//!         match self {
//!             Json::Array(a) => Box::new(a.iter()),
//!             Json::Map(m) => Box::new(m.iter().map(|(_, v)| v)),
//!             _ => Box::new(empty()),
//!         }
//!     }
//! }
//! #
//! # impl From<serde_json::Value> for Json {
//! #     fn from(obj: serde_json::Value) -> Self {
//! #         use serde_json::Value::*;
//! #         match obj {
//! #             Null => Json::Null,
//! #             Bool(b) => Json::Bool(b),
//! #             Number(n) => Json::Number(n.as_i64().unwrap() as f64),
//! #             String(s) => Json::String(s),
//! #             Array(a) => Json::Array(a.into_iter().map(Into::into).collect()),
//! #             Object(m) => Json::Map(
//! #                 m.into_iter()
//! #                     .map(|(k, v)| (k, v.into()))
//! #                     .collect(),
//! #             ),
//! #         }
//! #     }
//! # }
//!
//! macro_rules! json {
//!     ($( $tokens:tt )*) => {
//!         // ...
//! #         Json::from(::serde_json::json!({$($tokens)*}))
//!     };
//! }
//!
//! let john = json! {
//!     "name": "John Doe",
//!     "age": 43,
//!     "phones": [
//!         "+44 1234567",
//!         "+44 2345678"
//!     ]
//! };
//!
//! let jane = json! {
//!     "name": "Jane Doe",
//!     "maiden name": "Smith",
//!     "age": 40,
//!     "phones": [
//!         "+44 7654321",
//!     ]
//! };
//!
//! assert_eq!(distance(&john, &jane, &Unit), Ok(2));
//!
//! let (edits, cost) = diff(&john, &jane, &Unit)?;
//!
//! assert_eq!(cost, 2);
//!
//! // One phone number is deleted, the "maiden name" is inserted and every other value survives.
//! let deleted = edits.iter().filter(|e| matches!(e, Edit::Delete(_))).count();
//! let inserted = edits.iter().filter(|e| matches!(e, Edit::Insert(_))).count();
//! let relabeled = edits.iter().filter(|e| matches!(e, Edit::Relabel(..))).count();
//!
//! assert_eq!((deleted, inserted, relabeled), (1, 1, 5));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: logs the progress of each computation through [tracing](https://docs.rs/tracing).

mod tracing_macros;

pub(crate) use tracing_macros::{debug, trace};

mod cost;
mod diff;
mod edit;
mod error;
mod forest;
mod labeled;
mod postorder;
mod tree;

pub use cost::*;
pub use diff::*;
pub use edit::*;
pub use error::*;
pub use forest::*;
pub use labeled::*;
pub use postorder::*;
pub use tree::*;

mod keyroot;

pub(crate) use keyroot::*;
