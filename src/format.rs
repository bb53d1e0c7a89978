use crate::agentmail::Message;

const BANNER_WIDTH: usize = 60;
const BODY_PREVIEW_CHARS: usize = 500;

pub fn format_message(message: &Message) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let to = if message.to.is_empty() {
        "N/A".to_string()
    } else {
        message.to.join(", ")
    };
    let read = if message.is_read { "Yes" } else { "No" };

    let mut block = format!(
        "{banner}\nID: {}\nFrom: {}\nTo: {to}\nSubject: {}\nDate: {}\nRead: {read}\n{banner}",
        message.message_id, message.from_address, message.subject, message.created_at,
    );
    if let Some(text) = message.text.as_deref().filter(|text| !text.is_empty()) {
        block.push('\n');
        block.push_str(&preview(text));
    }

    block
}

/// Renders a fetched page. The unread filter runs on the page as fetched,
/// after the server-side limit, so it can show fewer matches than the limit.
pub fn render_listing(messages: &[Message], unread_only: bool) -> String {
    if messages.is_empty() {
        return "📭 Inbox is empty".to_string();
    }

    let visible: Vec<&Message> = if unread_only {
        messages.iter().filter(|message| !message.is_read).collect()
    } else {
        messages.iter().collect()
    };
    if visible.is_empty() {
        return "✅ No unread messages".to_string();
    }

    let blocks: Vec<String> = visible
        .iter()
        .map(|message| format_message(message))
        .collect();

    format!(
        "📬 Found {} message(s):\n\n{}",
        visible.len(),
        blocks.join("\n\n")
    )
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        truncated + "..."
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use jiff::Timestamp;
    use rstest::*;

    use super::*;

    fn message(message_id: &str, is_read: bool, text: Option<&str>) -> Message {
        let created_at: Timestamp = assert_ok!("2026-08-06T12:00:00Z".parse());
        Message {
            message_id: message_id.to_string(),
            from_address: "sender@example.com".to_string(),
            to: vec!["agent@agentmail.to".to_string()],
            subject: "hello".to_string(),
            text: text.map(ToString::to_string),
            created_at,
            is_read,
        }
    }

    #[rstest]
    fn test_format_message_renders_header_lines() {
        let block = format_message(&message("msg-123", true, Some("body")));

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!("=".repeat(60), lines[0]);
        assert_eq!("ID: msg-123", lines[1]);
        assert_eq!("From: sender@example.com", lines[2]);
        assert_eq!("To: agent@agentmail.to", lines[3]);
        assert_eq!("Subject: hello", lines[4]);
        assert_eq!("Date: 2026-08-06T12:00:00Z", lines[5]);
        assert_eq!("Read: Yes", lines[6]);
        assert_eq!("=".repeat(60), lines[7]);
        assert_eq!("body", lines[8]);
    }

    #[rstest]
    fn test_format_message_renders_empty_recipients_as_na() {
        let mut unrouted = message("msg-123", false, None);
        unrouted.to.clear();

        let block = format_message(&unrouted);
        assert_contains!(block, "To: N/A");
        assert_contains!(block, "Read: No");
    }

    #[rstest]
    fn test_format_message_skips_body_block_when_text_is_absent() {
        let block = format_message(&message("msg-123", false, None));

        assert_ends_with!(block, "=".repeat(60).as_str());
    }

    #[rstest]
    fn test_format_message_keeps_body_of_exactly_500_chars() {
        let body = "x".repeat(500);
        let block = format_message(&message("msg-123", false, Some(&body)));

        assert_ends_with!(block, body.as_str());
        assert_not_ends_with!(block, "...");
    }

    #[rstest]
    fn test_format_message_truncates_body_longer_than_500_chars() {
        let body = "x".repeat(501);
        let block = format_message(&message("msg-123", false, Some(&body)));

        let expected = format!("{}...", "x".repeat(500));
        assert_ends_with!(block, expected.as_str());
    }

    #[rstest]
    fn test_format_message_truncates_by_characters_not_bytes() {
        let body = "ü".repeat(501);
        let block = format_message(&message("msg-123", false, Some(&body)));

        let expected = format!("{}...", "ü".repeat(500));
        assert_ends_with!(block, expected.as_str());
    }

    #[rstest]
    fn test_render_listing_reports_empty_inbox() {
        assert_eq!("📭 Inbox is empty", render_listing(&[], false));
        assert_eq!("📭 Inbox is empty", render_listing(&[], true));
    }

    #[rstest]
    fn test_render_listing_reports_no_unread_messages() {
        let page = vec![message("msg-1", true, None), message("msg-2", true, None)];

        assert_eq!("✅ No unread messages", render_listing(&page, true));
    }

    #[rstest]
    fn test_render_listing_filters_page_to_unread() {
        let page = vec![
            message("msg-1", true, None),
            message("msg-2", false, None),
            message("msg-3", true, None),
        ];

        let listing = render_listing(&page, true);
        assert_starts_with!(listing, "📬 Found 1 message(s):");
        assert_contains!(listing, "ID: msg-2");
        assert_not_contains!(listing, "ID: msg-1");
        assert_not_contains!(listing, "ID: msg-3");
    }

    #[rstest]
    fn test_render_listing_shows_whole_page_without_filter() {
        let page = vec![message("msg-1", true, None), message("msg-2", false, None)];

        let listing = render_listing(&page, false);
        assert_starts_with!(listing, "📬 Found 2 message(s):");
        assert_contains!(listing, "ID: msg-1");
        assert_contains!(listing, "ID: msg-2");
    }
}
