//! Client-side decision logic for the location editor, kept free of any
//! rendering or network concerns so the transition table stays unit-testable.

pub mod location_editor;
pub mod zone;

pub use location_editor::{Command, EditorEvent, LocationEditor};
pub use zone::{Notice, NoticeLevel, ZoneOutcome};
