//! Editable command line buffer.
//!
//! The command editor owns a plain data buffer (text, cursor, selection);
//! the host owns rendering and translates raw input into messages.
//!
//! - [`StringBuffer`]: character-offset addressed `String` storage
//! - [`Selection`]: anchor/head selection over character offsets
//! - [`EditBuffer`]: text plus cursor and selection, with the editing primitives
//!
//! # Example
//!
//! ```
//! use cmdedit::editable::EditBuffer;
//!
//! let mut state = EditBuffer::from_text("git st");
//! state.insert_at_cursor("atus", true);
//!
//! assert_eq!(state.text(), "git status");
//! assert_eq!(state.selection_range(), Some((6, 4)));
//! ```

mod buffer;
mod selection;
mod state;

pub use buffer::StringBuffer;
pub use selection::Selection;
pub use state::EditBuffer;
