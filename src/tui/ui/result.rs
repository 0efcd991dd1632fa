//! Result panel: risk label, probability and attribution chart.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::PredictionOutcome;
use crate::tui::styles::ClinicalTheme;

use super::chart::render_attribution_chart;

/// The two states of the screen.
#[derive(Debug, Clone, Default)]
pub enum ScreenState {
    #[default]
    AwaitingSubmission,
    ShowingResult(PredictionOutcome),
}

/// Render the result panel
pub fn render_result_panel(f: &mut Frame, area: Rect, state: &ScreenState) {
    match state {
        ScreenState::AwaitingSubmission => render_idle(f, area),
        ScreenState::ShowingResult(PredictionOutcome::Failed { message }) => {
            render_error(f, area, message)
        }
        ScreenState::ShowingResult(PredictionOutcome::Predicted {
            prediction,
            explanation,
        }) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(0)])
                .split(area);

            let message = Paragraph::new(vec![
                Line::from(Span::styled(prediction.message(), ClinicalTheme::success())),
                Line::from(Span::styled(
                    format!("at {}", prediction.created_at.format("%H:%M:%S UTC")),
                    ClinicalTheme::text_muted(),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(ClinicalTheme::risk_label(prediction.label)),
            );
            f.render_widget(message, chunks[0]);

            match explanation {
                Ok(attribution) => render_attribution_chart(f, chunks[1], attribution),
                Err(message) => render_error(f, chunks[1], message),
            }
        }
    }
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Set the patient covariates",
            ClinicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", ClinicalTheme::text_muted()),
            Span::styled("[Enter]", ClinicalTheme::key_hint()),
            Span::styled(" to predict", ClinicalTheme::text_muted()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(Line::from(Span::styled(
        format!("Error: {message}"),
        ClinicalTheme::danger(),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::danger()),
    );

    f.render_widget(content, area);
}
