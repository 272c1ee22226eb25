//! The collapsible-panel widget: clicking a trigger element toggles the
//! visibility of the content panel that follows it and swaps the trigger's
//! icon glyph between "+" (collapsed) and "-" (expanded).
//!
//! The association between trigger and panel is structural: the panel is
//! the element immediately following the trigger among its parent's
//! children, and the icon is the first descendant of the trigger carrying
//! [`ICON_CLASS`]. The host document is expected to guarantee both.

use log::{debug, error};
use thiserror::Error;

use crate::document::Document;
use crate::event::{Event, MouseButton};
use crate::hit::hit_test;
use crate::layout::LayoutResult;
use crate::types::Display;

/// Marker class identifying a trigger element.
pub const TRIGGER_CLASS: &str = "collapsible";
/// Marker class identifying the glyph element inside a trigger.
pub const ICON_CLASS: &str = "toggle-icon";
/// Marker class toggled on the trigger as a stylesheet hook.
pub const ACTIVE_CLASS: &str = "active";
/// Icon glyph shown while the panel is hidden.
pub const GLYPH_COLLAPSED: char = '+';
/// Icon glyph shown while the panel is visible.
pub const GLYPH_EXPANDED: char = '-';

/// A trigger is missing one of the elements the document contract
/// promises. The click that hit it is aborted; other triggers are
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollapsibleError {
    #[error("trigger {trigger:?} has no following sibling to use as a content panel")]
    MissingPanel { trigger: String },
    #[error("trigger {trigger:?} has no descendant with class \"toggle-icon\"")]
    MissingIcon { trigger: String },
}

/// The set of registered collapsible triggers.
///
/// Produced once by [`Collapsibles::initialize`] after the document is
/// built; registrations persist for the life of the document.
#[derive(Debug, Clone, Default)]
pub struct Collapsibles {
    /// Registered trigger IDs, in document order.
    triggers: Vec<String>,
}

impl Collapsibles {
    /// Scan the document for every element carrying [`TRIGGER_CLASS`] and
    /// register a click handler for each, in document order. A document
    /// with no triggers registers nothing.
    pub fn initialize(document: &Document) -> Self {
        let triggers = document.elements_by_class(TRIGGER_CLASS);
        debug!("registered {} collapsible trigger(s)", triggers.len());
        Self { triggers }
    }

    /// Registered trigger IDs, in document order.
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.triggers.iter().any(|t| t == id)
    }

    /// Handle a click on a trigger.
    ///
    /// Toggles the trigger's [`ACTIVE_CLASS`], flips the following
    /// sibling's display, and swaps the icon glyph to match. The active
    /// toggle happens before the panel is resolved and the display write
    /// before the icon is resolved, so a malformed widget can be left
    /// partially toggled when this returns an error.
    pub fn on_trigger_click(
        &self,
        document: &mut Document,
        trigger: &str,
    ) -> Result<(), CollapsibleError> {
        // Styling hook only; no behavioral weight.
        document.toggle_class(trigger, ACTIVE_CLASS);

        let panel =
            document
                .next_sibling_of(trigger)
                .ok_or_else(|| CollapsibleError::MissingPanel {
                    trigger: trigger.to_string(),
                })?;

        let shown = document.display_of(&panel).is_some_and(|d| d.is_shown());
        let (display, glyph) = if shown {
            (Display::None, GLYPH_COLLAPSED)
        } else {
            (Display::Block, GLYPH_EXPANDED)
        };
        document.set_display(&panel, display);

        let icon = document
            .descendant_by_class(trigger, ICON_CLASS)
            .ok_or_else(|| CollapsibleError::MissingIcon {
                trigger: trigger.to_string(),
            })?;
        document.set_text(&icon, glyph);

        Ok(())
    }

    /// Route a click event to the registered trigger it targets.
    ///
    /// Returns Ok(true) when a registered trigger handled the click and
    /// Ok(false) when the event targets nothing registered. Errors from
    /// the trigger's handler are logged and passed through; they leave
    /// every other trigger's registration and state untouched.
    pub fn dispatch(
        &self,
        document: &mut Document,
        event: &Event,
    ) -> Result<bool, CollapsibleError> {
        let Event::Click {
            target: Some(target),
            ..
        } = event
        else {
            return Ok(false);
        };

        if !self.is_registered(target) {
            return Ok(false);
        }

        match self.on_trigger_click(document, target) {
            Ok(()) => Ok(true),
            Err(err) => {
                error!("collapsible {target}: {err}");
                Err(err)
            }
        }
    }

    /// Resolve a click at the given coordinates against the layout and
    /// dispatch it. Clicks that hit nothing clickable are Ok(false).
    pub fn click_at(
        &self,
        layout: &LayoutResult,
        document: &mut Document,
        x: u16,
        y: u16,
    ) -> Result<bool, CollapsibleError> {
        let Some(target) = hit_test(layout, document.root(), x, y) else {
            return Ok(false);
        };

        let event = Event::Click {
            target: Some(target),
            x,
            y,
            button: MouseButton::Left,
        };
        self.dispatch(document, &event)
    }
}
