//! TUI widgets for Fireside

pub mod archive;
pub mod form;
pub mod status_bar;
pub mod story;

pub use archive::{ArchiveDetailWidget, ArchiveListWidget};
pub use form::FormWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
pub use story::StoryWidget;
