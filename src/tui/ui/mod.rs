//! UI module: View components for the TUI.

pub mod chart;
pub mod form;
pub mod result;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::ClinicalTheme;

/// Page title shown above the form.
pub const PAGE_TITLE: &str = "Unplanned Reoperation Risk Prediction";

pub fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicalTheme::text()),
        Span::styled(PAGE_TITLE, ClinicalTheme::title()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// The "Predict" button with key hints.
pub fn render_controls(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled(" Predict ", ClinicalTheme::button()),
        Span::styled(" [Enter]  ", ClinicalTheme::key_hint()),
        Span::styled("[↑↓] ", ClinicalTheme::key_hint()),
        Span::styled("Field ", ClinicalTheme::key_desc()),
        Span::styled("[←→/-+] ", ClinicalTheme::key_hint()),
        Span::styled("Step ", ClinicalTheme::key_desc()),
        Span::styled("[0-9] ", ClinicalTheme::key_hint()),
        Span::styled("Set ", ClinicalTheme::key_desc()),
        Span::styled("[R] ", ClinicalTheme::key_hint()),
        Span::styled("Reset ", ClinicalTheme::key_desc()),
        Span::styled("[Q] ", ClinicalTheme::key_hint()),
        Span::styled("Quit", ClinicalTheme::key_desc()),
    ]);

    let controls = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(controls, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: This tool provides indicative estimates and does not replace clinical judgement.",
        ClinicalTheme::text_muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(ClinicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
