//! Rendering module for converting documents to presentation output.
//!
//! The dispatch from block tag to rendering routine is total over the
//! closed tag set; unknown tags degrade to omission. Sub-renderers are
//! pure except for the documented block-local state in [`aspect`] and
//! [`state`].

pub mod aspect;
mod html;
mod options;
mod state;
mod text;

pub use aspect::ImageAspect;
pub use html::{copy_button_label, escape_html, to_html, HtmlRenderer};
pub use options::RenderOptions;
pub use state::{CopyFeedback, Disclosure, COPY_ACK};
pub use text::to_text;
