mod biography_service;
mod digitize_service;
pub mod prompts;

pub use biography_service::{BiographyError, BiographySelection, BiographyService};
pub use digitize_service::{
    DigitizeCommand, DigitizeService, MAX_IMAGE_CHARS, MAX_PROMPT_CHARS,
};
