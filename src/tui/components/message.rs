use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::conversation::{Message, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Borders (1 left + 1 right) plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;
/// A bubble never takes more than this share of the row.
const MAX_WIDTH_PERCENT: u16 = 80;
/// Room for the title ("💧 AquaMitra") on short replies.
const MIN_BUBBLE_WIDTH: u16 = 16;

/// A single chat turn drawn as a bubble.
///
/// User turns hug the right edge in blue; assistant turns hug the left edge in
/// the default foreground. Content is laid out line by line exactly as typed:
/// explicit newlines start new rows, leading and inner spaces stay, and only
/// lines longer than the bubble soft-wrap.
///
/// `MessageBubble` is created fresh each frame, holds no state, and renders into the
/// full row it is given, placing the bubble itself according to role.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    /// Outer width of the bubble inside a row of `row_width` columns.
    pub fn bubble_width(message: &Message, row_width: u16) -> u16 {
        let max_width = (row_width as u32 * MAX_WIDTH_PERCENT as u32 / 100) as u16;
        let widest = message
            .content()
            .split('\n')
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;

        widest
            .saturating_add(HORIZONTAL_OVERHEAD)
            .max(MIN_BUBBLE_WIDTH)
            .min(max_width)
            .min(row_width)
    }

    /// Rows needed to draw `message` in a row `row_width` columns wide.
    ///
    /// Uses the same line breaking as `render`, so the list can size its
    /// scroll canvas without drawing anything.
    pub fn calculate_height(message: &Message, row_width: u16) -> u16 {
        let text_width = Self::bubble_width(message, row_width).saturating_sub(HORIZONTAL_OVERHEAD);
        if text_width == 0 {
            // Too narrow for borders + padding; still occupy a row.
            return 1;
        }
        let lines = u16::try_from(layout_lines(message.content(), text_width)).unwrap_or(u16::MAX);
        lines.max(1).saturating_add(VERTICAL_OVERHEAD)
    }

    /// Where the bubble sits within its row.
    pub fn bubble_rect(message: &Message, row: Rect) -> Rect {
        let width = Self::bubble_width(message, row.width);
        let x = match message.role() {
            Role::User => row.x + row.width.saturating_sub(width),
            Role::Assistant => row.x,
        };
        Rect::new(x, row.y, width, row.height)
    }
}

/// Text style for the body of a bubble.
pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::LightBlue),
        Role::Assistant => Style::default().fg(Color::Reset),
    }
}

fn border_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Blue),
        Role::Assistant => Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
    }
}

/// Breaks `content` into display rows no wider than `width`, keeping
/// explicit newlines and whitespace.
pub fn wrap_content(content: &str, width: u16) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);

    content
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, &options)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

fn layout_lines(content: &str, width: u16) -> usize {
    wrap_content(content, width).len()
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let role = self.message.role();
        let rect = Self::bubble_rect(self.message, area);

        let title = match role {
            Role::User => Line::from(format!(" {} {} ", role.label(), role.avatar())).right_aligned(),
            Role::Assistant => Line::from(format!(" {} {} ", role.avatar(), role.label())),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style(role))
            .title(title)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines: Vec<Line> = wrap_content(self.message.content(), inner.width)
            .into_iter()
            .map(Line::from)
            .collect();

        Paragraph::new(lines)
            .style(role_style(role))
            .render(inner, buf);
    }
}
