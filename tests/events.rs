use foldout::{
    hit_test, hit_test_any, Collapsibles, Display, Document, Element, Event, LayoutResult,
    MouseButton, Rect, ICON_CLASS, TRIGGER_CLASS,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Click inside btn
    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));

    // Click inside root but outside btn
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));

    // Click outside everything
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)), // Overlaps with bottom
    ]);

    // Click in overlapping region - top should win
    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));

    // Click only in bottom (before overlap)
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    // Click on non-clickable element returns None
    assert_eq!(hit_test(&layout, &root, 15, 11), None);

    // hit_test_any returns it anyway
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_skips_hidden_subtree() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(
            Element::box_()
                .id("panel")
                .hidden()
                .child(Element::text("inside").id("inner").clickable(true)),
        );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("panel", Rect::new(10, 10, 30, 10)),
        ("inner", Rect::new(12, 12, 10, 2)),
    ]);

    // A hidden panel is transparent to hits; the click falls through to
    // the element behind it.
    assert_eq!(hit_test(&layout, &root, 13, 13), Some("root".to_string()));
    assert_eq!(
        hit_test_any(&layout, &root, 13, 13),
        Some("root".to_string())
    );

    // Hidden root hits nothing at all.
    let hidden_root = Element::box_().id("root").clickable(true).hidden();
    let layout = create_layout(&[("root", Rect::new(0, 0, 100, 50))]);
    assert_eq!(hit_test(&layout, &hidden_root, 5, 5), None);
}

#[test]
fn test_hit_test_missing_layout_entry() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("no rect").id("orphan").clickable(true));

    // Only the root was laid out.
    let layout = create_layout(&[("root", Rect::new(0, 0, 100, 50))]);

    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
}

// ============================================================================
// Event conversion
// ============================================================================

#[test]
fn test_event_from_mouse_press() {
    let mouse = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };

    assert_eq!(
        Event::from_mouse(&mouse),
        Some(Event::Click {
            target: None,
            x: 7,
            y: 3,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_event_from_mouse_ignores_non_press() {
    let mouse = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Moved,
        column: 7,
        row: 3,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };

    assert_eq!(Event::from_mouse(&mouse), None);
}

#[test]
fn test_event_with_target() {
    let event = Event::Click {
        target: None,
        x: 1,
        y: 2,
        button: MouseButton::Right,
    };

    assert_eq!(event.target(), None);

    let event = event.with_target("trigger");
    assert_eq!(event.target(), Some("trigger"));
}

// ============================================================================
// Coordinate dispatch
// ============================================================================

fn widget_document() -> Document {
    Document::new(
        Element::box_()
            .id("root")
            .child(
                Element::box_()
                    .id("trigger")
                    .class(TRIGGER_CLASS)
                    .clickable(true)
                    .child(Element::text("+").id("icon").class(ICON_CLASS)),
            )
            .child(Element::text("content").id("panel").hidden()),
    )
}

#[test]
fn test_click_at_toggles_hit_trigger() {
    let mut document = widget_document();
    let widgets = Collapsibles::initialize(&document);

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 80, 24)),
        ("trigger", Rect::new(0, 0, 80, 1)),
        ("icon", Rect::new(78, 0, 1, 1)),
        ("panel", Rect::new(0, 1, 80, 5)),
    ]);

    // Click on the trigger row
    assert_eq!(widgets.click_at(&layout, &mut document, 4, 0), Ok(true));
    assert_eq!(document.display_of("panel"), Some(Display::Block));
    assert_eq!(document.get("icon").unwrap().text_content(), Some("-"));

    // Click on the now-visible panel: hits nothing clickable
    assert_eq!(widgets.click_at(&layout, &mut document, 4, 2), Ok(false));
    assert_eq!(document.display_of("panel"), Some(Display::Block));
}

#[test]
fn test_click_at_outside_everything() {
    let mut document = widget_document();
    let widgets = Collapsibles::initialize(&document);

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 80, 24)),
        ("trigger", Rect::new(0, 0, 80, 1)),
    ]);

    assert_eq!(widgets.click_at(&layout, &mut document, 79, 23), Ok(false));
    assert_eq!(document.display_of("panel"), Some(Display::None));
}
