//! Content conversion for pagekit pages
//!
//!     This crate converts page content between the three views the editor works with:
//!     HTML (what the author edits and the site renders), plain text (the text view and
//!     word counts) and JSON (the node forest, which is what gets stored).
//!
//!     This is a pure lib: it powers pagekit-cli but never prints, reads env vars or
//!     touches the filesystem.
//!
//! Architecture
//!
//!     Every conversion goes through a single structural representation, a forest of
//!     [`ContentNode`]s (./node.rs). Formats only differ in how they get into and out
//!     of that forest:
//!
//!     .
//!     ├── error.rs
//!     ├── node.rs                 # ContentNode, ContentData
//!     ├── format.rs               # ContentFormat (html / text / json)
//!     ├── parser
//!     │   ├── mod.rs              # HtmlParser trait, Environment
//!     │   ├── dom.rs              # html5ever-backed parser and text flattening
//!     │   └── tag_split.rs        # flat fallback parser
//!     ├── serializer.rs           # forest → HTML
//!     ├── text.rs                 # markup flattening, word counts
//!     ├── rehydrate.rs            # edited text → forest
//!     ├── convert.rs              # Converter, the format dispatcher
//!     ├── import.rs               # cleanup of fetched remote pages
//!     └── page.rs                 # stored records and derived views
//!
//! Core Algorithms
//!
//!     Parsing comes in two strategies behind [`parser::HtmlParser`], picked once per
//!     [`Converter`] from an [`Environment`]. The DOM strategy builds a real tree with
//!     html5ever; the tag-split strategy only cuts the string at tags and never nests.
//!
//!     The hard part is going from text back to structure (./rehydrate.rs). Edited words
//!     are poured positionally into the text leaves of the previous forest. This keeps
//!     the markup but is blind to what the words mean, so inserting one word shifts every
//!     later leaf. Whether to map words to leaves by content instead is an open product
//!     question.
//!
//! Failure Model
//!
//!     The editor calls into this crate on every keystroke, so the conversion entry
//!     points do not fail: bad JSON comes back unchanged, malformed tags stay text,
//!     misaligned word counts leave empty leaves. Strict variants returning
//!     [`ConvertError`] exist for callers that want to know.

pub mod convert;
pub mod error;
pub mod format;
pub mod import;
pub mod node;
pub mod page;
pub mod parser;
pub mod rehydrate;
pub mod serializer;
pub mod text;

pub use convert::{ConvertOptions, Converter};
pub use error::{ConvertError, ImportError, StoreError};
pub use format::ContentFormat;
pub use node::{ContentData, ContentNode};
pub use parser::{DomParser, Environment, HtmlParser, TagSplitParser};
pub use rehydrate::RehydrateOptions;
pub use serializer::serialize;
