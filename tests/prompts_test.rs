use chrono::{TimeZone, Utc};

use keepsake::application::ports::{ContentPart, MessageContent};
use keepsake::application::services::prompts::{
    build_biography_prompt, build_synthesis_prompt, build_transcription_prompt,
    SYNTHESIS_MAX_TOKENS, TRANSCRIPTION_MAX_TOKENS,
};
use keepsake::domain::{Attachments, Entry};

fn text_of(content: &MessageContent) -> &str {
    match content {
        MessageContent::Text(text) => text,
        MessageContent::Parts(_) => panic!("expected plain text content"),
    }
}

#[test]
fn given_prompt_when_building_synthesis_then_system_frames_biographer() {
    let prompt = build_synthesis_prompt("Tell my story");

    assert_eq!(prompt.max_tokens, SYNTHESIS_MAX_TOKENS);
    assert_eq!(prompt.messages.len(), 2);
    assert_eq!(prompt.messages[0].role, "system");
    assert!(text_of(&prompt.messages[0].content).contains("biographer"));
    assert_eq!(prompt.messages[1].role, "user");
    assert_eq!(text_of(&prompt.messages[1].content), "Tell my story");
}

#[test]
fn given_image_when_building_transcription_then_system_demands_text_only() {
    let prompt = build_transcription_prompt("aGVsbG8=");

    assert_eq!(prompt.max_tokens, TRANSCRIPTION_MAX_TOKENS);
    assert_eq!(prompt.messages[0].role, "system");

    let system = text_of(&prompt.messages[0].content);
    assert!(system.contains("Return ONLY the transcribed text"));
    assert!(system.contains("[illegible]"));
    assert!(system.contains("[unclear: best guess]"));
}

#[test]
fn given_image_when_building_transcription_then_image_travels_as_data_url() {
    let prompt = build_transcription_prompt("aGVsbG8=");

    let parts = match &prompt.messages[1].content {
        MessageContent::Parts(parts) => parts,
        MessageContent::Text(_) => panic!("expected typed content parts"),
    };

    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], ContentPart::Text { text } if text.contains("transcribe")));
    match &parts[1] {
        ContentPart::ImageUrl { image_url } => {
            assert_eq!(image_url.url, "data:image/jpeg;base64,aGVsbG8=");
        }
        other => panic!("expected image part, got {:?}", other),
    }
}

#[test]
fn given_prompt_when_serialized_then_matches_wire_schema() {
    let prompt = build_transcription_prompt("aGVsbG8=");
    let value = serde_json::to_value(&prompt).unwrap();

    assert!(value["messages"][0]["content"].is_string());
    assert!(value["messages"][1]["content"].is_array());
    assert_eq!(value["messages"][1]["content"][0]["type"], "text");
    assert_eq!(value["messages"][1]["content"][1]["type"], "image_url");
    assert_eq!(
        value["messages"][1]["content"][1]["image_url"]["url"],
        "data:image/jpeg;base64,aGVsbG8="
    );
    assert_eq!(value["max_tokens"], 4096);

    let synthesis = serde_json::to_value(build_synthesis_prompt("story")).unwrap();
    assert!(synthesis["messages"][1]["content"].is_string());
    assert_eq!(synthesis["max_tokens"], 8192);
}

fn entry(text: &str, folder: &str, location: &str) -> Entry {
    Entry::new(
        text.to_string(),
        folder.to_string(),
        location.to_string(),
        Some(Utc.with_ymd_and_hms(1987, 6, 21, 12, 0, 0).unwrap()),
        None,
        Attachments::default(),
    )
}

#[test]
fn given_entries_when_building_biography_prompt_then_records_are_inlined() {
    let entries = vec![
        entry("We sailed at dawn.", "Travel", "Lisbon"),
        entry("The jam was perfect.", "Childhood Memories", "Warsaw"),
    ];

    let prompt = build_biography_prompt(&entries, 750, None);

    assert!(prompt.contains("Synthesize a biography based on these personal records"));
    assert!(prompt.contains("@ Lisbon]: We sailed at dawn."));
    assert!(prompt.contains("@ Warsaw]: The jam was perfect."));
    assert!(prompt.contains("Approximately 750 words"));
    assert!(prompt.contains("Organize into chapters"));
    assert!(!prompt.contains("Focus specifically on"));
}

#[test]
fn given_focus_topic_when_building_biography_prompt_then_focus_line_present() {
    let entries = vec![entry("First day of school.", "Childhood Memories", "Warsaw")];

    let prompt = build_biography_prompt(&entries, 500, Some("family lessons"));

    assert!(prompt.contains("Focus specifically on: family lessons."));
}

#[test]
fn given_blank_focus_topic_when_building_biography_prompt_then_focus_line_absent() {
    let entries = vec![entry("First day of school.", "Childhood Memories", "Warsaw")];

    let prompt = build_biography_prompt(&entries, 500, Some("   "));

    assert!(!prompt.contains("Focus specifically on"));
}
