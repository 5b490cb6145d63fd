//! Prompt rendering for chat and summarization.

use parley_types::chat::ChatTurn;

/// Trailing cue asking the model to speak as the bot.
pub const BOT_CUE: &str = "bot:";

/// First line of the summarization prompt.
pub const SUMMARY_PREAMBLE: &str = "Summarize the following:";

/// Whitespace for trimming user input and provider output.
///
/// Unicode `White_Space` plus the ASCII separators U+001C..U+001F, so a
/// separator-only message counts as blank.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing whitespace as defined by [`is_trimmable`].
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trimmable)
}

/// Render the full history as `"<speaker>: <text>"` lines followed by the
/// bot cue line.
///
/// `[user: hi]` renders as `"user: hi\nbot:"`. An empty history renders as
/// `"\nbot:"`, though the chat flow always appends a user turn first.
pub fn render_chat_prompt(turns: &[ChatTurn]) -> String {
    let dialogue = turns
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker, turn.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{dialogue}\n{BOT_CUE}")
}

/// Render the fixed summarization template around `text`.
pub fn render_summary_prompt(text: &str) -> String {
    format!("{SUMMARY_PREAMBLE}\n\n{text}")
}
