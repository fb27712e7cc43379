use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::language::label_for;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, LanguageSelector, MessageList, TitleBar};
use crate::tui::{TuiState, View};

/// Example questions offered on an empty conversation.
pub const SUGGESTIONS: [&str; 4] = [
    "Groundwater extraction in Rajasthan 2023",
    "Recharge in Maharashtra 2022",
    "Status of groundwater in Punjab",
    "Top 5 overexploited districts",
];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    match tui.view {
        View::Landing => LandingPage::new().render(frame, main_area),
        View::Chat => draw_chat(frame, main_area, app, tui, spinner_frame),
    }

    TitleBar::new(
        label_for(&app.language).to_string(),
        app.status_message.clone(),
        tui.message_list.has_unseen_content,
    )
    .render(frame, title_area);

    if let Some(picker) = tui.language_picker.as_mut() {
        LanguageSelector::new(picker).render(frame, frame.area());
    }
}

fn draw_chat(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let input_height = tui.input_box.calculate_height(area.width);
    let [header_area, body_area, input_area] =
        Layout::vertical([Length(3), Min(0), Length(input_height)]).areas(area);

    draw_header(frame, header_area);

    if app.conversation.is_empty() && !app.pending {
        draw_suggestions(frame, body_area, tui.suggestion_index);
    } else {
        MessageList::new(
            &mut tui.message_list,
            app.conversation.messages(),
            app.pending,
            spinner_frame,
        )
        .render(frame, body_area);
    }

    tui.input_box.render(frame, input_area);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "How can I help today?",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Type a command or ask a question",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Suggested queries. `next` is the entry Tab will insert next.
fn draw_suggestions(frame: &mut Frame, area: Rect, next: usize) {
    let mut lines = vec![Line::default()];
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        let style = if i == next % SUGGESTIONS.len() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("  💡 {suggestion}"), style)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Tab: use a suggestion   Ctrl+L: language   Esc: back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Try asking ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
