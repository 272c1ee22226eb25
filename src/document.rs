use crate::element::{find_element, find_element_mut, Content, Element};
use crate::types::Display;

/// An in-memory document: a root element plus the structural queries the
/// widgets need. The document never creates or destroys elements on its
/// own; widgets only mutate state on elements the host built.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// IDs of every element carrying the given marker class, in document
    /// order (depth-first, children in order).
    pub fn elements_by_class(&self, class: &str) -> Vec<String> {
        let mut out = Vec::new();
        collect_by_class(&self.root, class, &mut out);
        out
    }

    /// ID of the element immediately following `id` among its parent's
    /// children. None for the root, a last child, or an unknown ID.
    pub fn next_sibling_of(&self, id: &str) -> Option<String> {
        next_sibling_in(&self.root, id)
    }

    /// ID of the first descendant of `id` (document order, excluding `id`
    /// itself) carrying the given marker class.
    pub fn descendant_by_class(&self, id: &str, class: &str) -> Option<String> {
        let element = self.get(id)?;
        let Content::Children(children) = &element.content else {
            return None;
        };
        children.iter().find_map(|child| {
            let mut out = Vec::new();
            collect_by_class(child, class, &mut out);
            out.into_iter().next()
        })
    }

    pub fn display_of(&self, id: &str) -> Option<Display> {
        self.get(id).map(|element| element.display)
    }

    /// Set an element's display value. Returns false for an unknown ID.
    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.display = display;
                true
            }
            None => false,
        }
    }

    /// Replace an element's content with text. Returns false for an
    /// unknown ID.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.set_text_content(text);
                true
            }
            None => false,
        }
    }

    /// Toggle a marker class on an element. Returns whether the class is
    /// present afterwards, or None for an unknown ID.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool> {
        self.get_mut(id).map(|element| element.toggle_class(class))
    }
}

fn collect_by_class(element: &Element, class: &str, out: &mut Vec<String>) {
    if element.has_class(class) {
        out.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_class(child, class, out);
        }
    }
}

fn next_sibling_in(element: &Element, id: &str) -> Option<String> {
    let Content::Children(children) = &element.content else {
        return None;
    };
    if let Some(pos) = children.iter().position(|child| child.id == id) {
        return children.get(pos + 1).map(|sibling| sibling.id.clone());
    }
    children
        .iter()
        .find_map(|child| next_sibling_in(child, id))
}
