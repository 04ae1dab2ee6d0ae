use crate::application::ports::{ChatMessage, ChatPrompt, ContentPart, ImageUrl};
use crate::domain::Entry;

pub const TRANSCRIPTION_MAX_TOKENS: u32 = 4096;
pub const SYNTHESIS_MAX_TOKENS: u32 = 8192;

const TRANSCRIPTION_SYSTEM_PROMPT: &str = "\
You are an expert OCR and text transcription assistant specializing in historical documents, handwritten notes, and legacy documents. Your task is to:

1. Carefully analyze the provided image
2. Extract ALL text visible in the image with high accuracy
3. Preserve the original formatting, line breaks, and structure as much as possible
4. For handwritten text, do your best to interpret unclear characters
5. If any text is illegible, indicate it with [illegible] or [unclear: best guess]
6. Maintain paragraph breaks and indentation where visible
7. For tables or structured content, preserve the layout using spacing or markdown formatting

Return ONLY the transcribed text without any additional commentary or explanation.";

const TRANSCRIPTION_USER_PROMPT: &str = "Please transcribe all the text from this image accurately, preserving the original formatting and structure.";

const SYNTHESIS_SYSTEM_PROMPT: &str = "You are a skilled biographer and narrative writer. Create compelling, reflective stories from personal memories and journal entries.";

/// Transcription mode: the image travels inline as a base64 JPEG data URL
/// alongside a short instruction.
pub fn build_transcription_prompt(image_base64: &str) -> ChatPrompt {
    ChatPrompt {
        messages: vec![
            ChatMessage::system(TRANSCRIPTION_SYSTEM_PROMPT),
            ChatMessage::user_parts(vec![
                ContentPart::Text {
                    text: TRANSCRIPTION_USER_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{image_base64}"),
                    },
                },
            ]),
        ],
        max_tokens: TRANSCRIPTION_MAX_TOKENS,
    }
}

/// Synthesis mode: the caller's prompt is relayed under the biographer framing.
pub fn build_synthesis_prompt(prompt: &str) -> ChatPrompt {
    ChatPrompt {
        messages: vec![
            ChatMessage::system(SYNTHESIS_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ],
        max_tokens: SYNTHESIS_MAX_TOKENS,
    }
}

/// Assembles the synthesis prompt for a biography drawn from archived entries.
/// Each entry becomes one dated, located record line.
pub fn build_biography_prompt(entries: &[Entry], word_count: u32, focus_topic: Option<&str>) -> String {
    let context = entries
        .iter()
        .map(|e| format!("[{} @ {}]: {}", e.timestamp.to_rfc3339(), e.location, e.text))
        .collect::<Vec<_>>()
        .join("\n");

    let focus = focus_topic
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!("Focus specifically on: {t}. "))
        .unwrap_or_default();

    format!(
        "Synthesize a biography based on these personal records: \n{context}\n\nTarget Length: Approximately {word_count} words. {focus}Style: Legacy, narrative, and reflective. Organize into chapters or cohesive sections."
    )
}
