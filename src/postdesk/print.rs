use chrono::{DateTime, Utc};
use colored::Colorize;
use postdesk::api::{CmdMessage, MessageLevel};
use postdesk::model::{PersistedPost, PostType};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const IMAGE_MARKER: &str = "▣";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_posts(posts: &[PersistedPost]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for (i, post) in posts.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let kind = match post.record.post_type {
            PostType::Question => "Q ".cyan(),
            PostType::Article => "A ".magenta(),
        };
        let right_suffix = if post.record.image_payload.is_some() {
            format!("{} ", IMAGE_MARKER)
        } else {
            "  ".to_string()
        };

        let tags = if post.record.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", post.record.tags.join(", "))
        };
        let line = format!("{}{}", post.record.title, tags);

        let fixed_width = idx_str.width() + 2 + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "{}{}{}{}{}{}",
            idx_str.dimmed(),
            kind,
            display,
            " ".repeat(padding),
            right_suffix,
            format_time_ago(post.created_at).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
