use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use foldout::{
    Collapsibles, Document, Element, Event, MouseButton, ICON_CLASS, TRIGGER_CLASS,
};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let mut document = Document::new(ui());
    let widgets = Collapsibles::initialize(&document);

    println!("initial state:");
    print_state(&document, &widgets);

    for target in ["faq-shipping", "faq-returns", "faq-shipping"] {
        let event = Event::Click {
            target: Some(target.to_string()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        };
        match widgets.dispatch(&mut document, &event) {
            Ok(handled) => println!("\nclick {target} (handled: {handled}):"),
            Err(err) => println!("\nclick {target} failed: {err}"),
        }
        print_state(&document, &widgets);
    }
}

fn ui() -> Element {
    Element::box_()
        .id("faq")
        .child(section("faq-shipping", "How long does shipping take?"))
        .child(answer("faq-shipping-answer", "Three to five business days."))
        .child(section("faq-returns", "Can I return an item?"))
        .child(answer("faq-returns-answer", "Within 30 days, yes."))
        .child(section("faq-contact", "How do I reach support?"))
        .child(answer("faq-contact-answer", "support@example.com"))
}

fn section(id: &str, question: &str) -> Element {
    Element::box_()
        .id(id)
        .class(TRIGGER_CLASS)
        .clickable(true)
        .child(Element::text(question).id(format!("{id}-question")))
        .child(Element::text("+").id(format!("{id}-icon")).class(ICON_CLASS))
}

fn answer(id: &str, text: &str) -> Element {
    Element::text(text).id(id).hidden()
}

fn print_state(document: &Document, widgets: &Collapsibles) {
    for trigger in widgets.triggers() {
        let icon = document
            .descendant_by_class(trigger, ICON_CLASS)
            .and_then(|id| document.get(&id))
            .and_then(|element| element.text_content())
            .unwrap_or("?");
        let panel = document
            .next_sibling_of(trigger)
            .and_then(|id| document.display_of(&id));
        println!("  [{icon}] {trigger}: panel {panel:?}");
    }
}
