use std::path::PathBuf;

use super::*;

#[test]
fn test_system_message() {
    let msg = Message::system("You are a helpful assistant.");
    assert_eq!(msg.role, MessageRole::System);
    assert_eq!(msg.content.text(), "You are a helpful assistant.");
}

#[test]
fn test_user_message() {
    let msg = Message::user("Open the settings menu");
    assert_eq!(msg.role, MessageRole::User);
}

#[test]
fn test_assistant_message() {
    let msg = Message::assistant("CLICK [0.3, 0.4]");
    assert_eq!(msg.role, MessageRole::Assistant);
    assert_eq!(msg.content.text(), "CLICK [0.3, 0.4]");
}

#[test]
fn test_user_parts_message() {
    let msg = Message::user_parts(vec![
        ContentPart::text("Close the dialog"),
        ContentPart::image(PathBuf::from("screen.png")),
    ]);
    assert_eq!(msg.role, MessageRole::User);
    match msg.content {
        MessageContent::Parts(parts) => assert_eq!(parts.len(), 2),
        other => panic!("Expected multipart content, got {other:?}"),
    }
}
