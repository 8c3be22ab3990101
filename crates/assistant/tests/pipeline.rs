//! End-to-end pipeline behaviour through the public API only.

use std::sync::Arc;

use voicepick_assistant::{
    Intent, Interpreter, LineCapture, TracingSpeechSink, WriterSink, classify,
    listen_and_respond, respond,
};
use voicepick_core::RequestContext;
use voicepick_inventory::{InventoryTable, load_from_reader};

const WAREHOUSE: &str = "\
Product Name,Quantity,Shelf Location,Replenish Date
Bolt 5mm,120,A-12,2024-05-01
Widget A,7,B-03,2024-06-15
";

fn interpreter() -> Interpreter {
    let table = load_from_reader(WAREHOUSE.as_bytes()).expect("sample data loads");
    Interpreter::new(Arc::new(table))
}

fn logged_in() -> RequestContext {
    RequestContext::authenticated("picker")
}

#[test]
fn bolt_example_end_to_end() {
    let interp = interpreter();
    let ctx = logged_in();

    assert_eq!(interp.handle(&ctx, "Where is Bolt 5mm").text, "Bolt 5mm is stored at A-12.");
    assert_eq!(
        interp.handle(&ctx, "Tell me about bolt 5mm").text,
        "Product: Bolt 5mm.\nQuantity: 120.\nReplenish Date: 2024-05-01."
    );
}

#[test]
fn describe_in_any_case_with_padding() {
    let interp = interpreter();
    for utterance in [
        "tell me about widget a",
        "TELL ME ABOUT WIDGET A",
        "  tell me about    Widget A   ",
    ] {
        let intent = classify(utterance);
        assert_eq!(intent.subject().map(str::to_lowercase), Some("widget a".to_string()));
        assert_eq!(
            respond(&intent, interp.table()),
            "Product: Widget A.\nQuantity: 7.\nReplenish Date: 2024-06-15."
        );
    }
}

#[test]
fn unknown_location() {
    let reply = interpreter().handle(&logged_in(), "where is   Flux Capacitor ");
    assert_eq!(reply.text, "Location for Flux Capacitor not found.");
}

#[test]
fn unrecognized_command() {
    let reply = interpreter().handle(&logged_in(), "what time is it");
    assert_eq!(reply.intent, Some(Intent::Unrecognized));
    assert_eq!(reply.text, "Command not recognized.");
}

#[test]
fn empty_table_still_answers() {
    let interp = Interpreter::new(Arc::new(InventoryTable::empty()));
    let reply = interp.handle(&logged_in(), "tell me about Widget A");
    assert_eq!(
        reply.intent,
        Some(Intent::DescribeProduct { subject: "Widget A".into() })
    );
    assert_eq!(reply.text, "Product Widget A not found.");
}

#[test]
fn voice_round_delivers_prompt_and_answer() {
    let interp = interpreter();
    // One transcript, then the feed ends (service gone).
    let mut capture = LineCapture::new("where is widget a\n".as_bytes());
    let mut display = WriterSink::new(Vec::new());
    let mut speech = TracingSpeechSink::new();

    let first = listen_and_respond(&mut capture, &interp, &logged_in(), &mut [&mut display, &mut speech]);
    assert_eq!(first.text, "Widget A is stored at B-03.");

    let second = listen_and_respond(&mut capture, &interp, &logged_in(), &mut [&mut display, &mut speech]);
    assert_eq!(second.intent, Some(Intent::Unrecognized));
    assert_eq!(second.text, "Command not recognized.");

    assert_eq!(speech.spoken(), 4);
    let shown = String::from_utf8(display.into_inner()).unwrap();
    assert!(shown.contains("Listening... Speak now!"));
    assert!(shown.ends_with("Command not recognized.\n"));
}

#[test]
fn voice_round_requires_login() {
    let interp = interpreter();
    let mut capture = LineCapture::new("where is bolt 5mm\n".as_bytes());
    let mut display = WriterSink::new(Vec::new());

    let reply = listen_and_respond(
        &mut capture,
        &interp,
        &RequestContext::anonymous(),
        &mut [&mut display],
    );
    assert_eq!(reply.intent, None);
    assert_eq!(reply.text, "Please log in to access warehouse functions.");
}
