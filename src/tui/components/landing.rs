//! # Landing Page Component
//!
//! Hero screen shown at startup and whenever the user backs out of the chat
//! with Esc. Enter (or simply starting to type) opens the chat.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

const TAGLINE: &str = "Groundwater insights made simple with AI";
const BLURB: &str = "Meet AquaMitra, your AI-powered groundwater chatbot, integrated with INGRES. \
                     Get instant access to research data, policy insights, and environmental analysis.";

pub const STATS: [(&str, &str); 4] = [
    ("500+", "Research Papers"),
    ("50+", "Datasets"),
    ("1000+", "Users"),
    ("24/7", "AI Support"),
];

pub const FEATURES: [(&str, &str); 3] = [
    ("AI-Powered Q&A", "Ask anything about groundwater data in plain English"),
    ("Data Visualization", "See the story your data tells"),
    ("Integrated Datasets", "One platform, all the data you need"),
];

pub struct LandingPage;

impl LandingPage {
    pub fn new() -> Self {
        Self
    }

    fn hero(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(
                "✨ AI-Powered Groundwater Research",
                Style::default().fg(Color::Cyan),
            )),
            Line::default(),
            Line::from(Span::styled(
                "💧 AquaMitra",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                TAGLINE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(BLURB, Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn card(title: &'static str, body: &'static str, title_style: Style) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(title, title_style)),
            Line::from(Span::styled(body, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hero_area, stats_area, features_area, prompt_area] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [hero_area] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(hero_area);
        frame.render_widget(self.hero(), hero_area);

        let stat_value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let stat_areas = Layout::horizontal([Constraint::Length(18); STATS.len()])
            .flex(Flex::Center)
            .split(stats_area);
        for ((value, label), rect) in STATS.iter().zip(stat_areas.iter()) {
            frame.render_widget(Self::card(value, label, stat_value), *rect);
        }

        let feature_title = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let feature_areas = Layout::horizontal([Constraint::Length(26); FEATURES.len()])
            .flex(Flex::Center)
            .split(features_area);
        for ((title, tagline), rect) in FEATURES.iter().zip(feature_areas.iter()) {
            frame.render_widget(Self::card(title, tagline, feature_title), *rect);
        }

        let prompt = Paragraph::new(vec![
            Line::default(),
            Line::from(vec![
                Span::styled(
                    " Ask AquaMitra → ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Enter to start", Style::default().fg(Color::DarkGray)),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(prompt, prompt_area);
    }
}
