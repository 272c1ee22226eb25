pub mod collapsible;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod types;

pub use collapsible::{
    CollapsibleError, Collapsibles, ACTIVE_CLASS, GLYPH_COLLAPSED, GLYPH_EXPANDED, ICON_CLASS,
    TRIGGER_CLASS,
};
pub use document::Document;
pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use types::Display;
