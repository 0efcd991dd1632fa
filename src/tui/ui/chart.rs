//! Attribution chart: a horizontal, diverging contribution plot.
//!
//! Each row shows a feature with its submitted value and a bar pushing the
//! model output away from the base value. Bars to the right raise the risk,
//! bars to the left lower it. Rows are ordered by magnitude.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Attribution;
use crate::tui::styles::ClinicalTheme;

const LABEL_WIDTH: usize = 28;
const VALUE_WIDTH: usize = 8;
const BAR_GLYPH: &str = "█";
const AXIS_GLYPH: &str = "│";

/// One laid-out chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// `"{name} = {value}"`
    pub label: String,
    pub contribution: f64,
    /// Bar cells left of the axis (negative contribution)
    pub left: usize,
    /// Bar cells right of the axis (positive contribution)
    pub right: usize,
}

/// Lay out rows with bars scaled so the largest magnitude fills
/// `half_width` cells. Non-zero contributions get at least one cell.
#[must_use]
pub fn chart_rows(attribution: &Attribution, half_width: usize) -> Vec<ChartRow> {
    let max = attribution.max_magnitude();

    attribution
        .ranked()
        .into_iter()
        .map(|c| {
            let cells = if max > 0.0 && c.contribution != 0.0 {
                ((c.contribution.abs() / max) * half_width as f64)
                    .round()
                    .max(1.0) as usize
            } else {
                0
            };
            let (left, right) = if c.contribution < 0.0 { (cells, 0) } else { (0, cells) };

            ChartRow {
                label: format!("{} = {}", c.spec().name, c.value),
                contribution: c.contribution,
                left,
                right,
            }
        })
        .collect()
}

/// Render the chart for a successful explanation
pub fn render_attribution_chart(f: &mut Frame, area: Rect, attribution: &Attribution) {
    let block = Block::default()
        .title(Span::styled(" Feature Attribution ", ClinicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fixed = LABEL_WIDTH + VALUE_WIDTH + 3;
    let half_width = (inner.width as usize).saturating_sub(fixed) / 2;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("base value ", ClinicalTheme::text_secondary()),
            Span::styled(format!("{:+.3}", attribution.base_value), ClinicalTheme::text()),
            Span::styled("  ->  f(x) ", ClinicalTheme::text_secondary()),
            Span::styled(
                format!("{:+.3}", attribution.output_value()),
                ClinicalTheme::title(),
            ),
            Span::styled("  (log-odds)", ClinicalTheme::text_muted()),
        ]),
        Line::from(vec![
            Span::styled(BAR_GLYPH, ClinicalTheme::danger()),
            Span::styled(" raises risk  ", ClinicalTheme::text_muted()),
            Span::styled(BAR_GLYPH, ClinicalTheme::info()),
            Span::styled(" lowers risk", ClinicalTheme::text_muted()),
        ]),
        Line::from(""),
    ];

    for row in chart_rows(attribution, half_width) {
        let style = ClinicalTheme::contribution(row.contribution);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$.width$}", row.label, width = LABEL_WIDTH),
                ClinicalTheme::text_secondary(),
            ),
            Span::raw(" ".repeat(half_width - row.left.min(half_width))),
            Span::styled(BAR_GLYPH.repeat(row.left), style),
            Span::styled(AXIS_GLYPH, ClinicalTheme::border()),
            Span::styled(BAR_GLYPH.repeat(row.right), style),
            Span::raw(" ".repeat(half_width - row.right.min(half_width))),
            Span::styled(
                format!(" {:>+width$.3}", row.contribution, width = VALUE_WIDTH - 1),
                style,
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeatureContribution;

    fn attribution(contributions: &[f64]) -> Attribution {
        Attribution {
            base_value: -2.0,
            contributions: contributions
                .iter()
                .enumerate()
                .map(|(index, &contribution)| FeatureContribution {
                    index,
                    value: 1,
                    contribution,
                })
                .collect(),
        }
    }

    #[test]
    fn test_largest_fills_half_width() {
        let rows = chart_rows(&attribution(&[0.5, -1.0, 0.25]), 20);

        assert_eq!(rows[0].label, "ASA scores = 1");
        assert_eq!((rows[0].left, rows[0].right), (20, 0));
        assert_eq!((rows[1].left, rows[1].right), (0, 10));
        assert_eq!((rows[2].left, rows[2].right), (0, 5));
    }

    #[test]
    fn test_tiny_contributions_stay_visible() {
        let rows = chart_rows(&attribution(&[1.0, 0.001]), 10);
        assert_eq!(rows[1].right, 1);
    }

    #[test]
    fn test_zero_contributions_have_no_bar() {
        let rows = chart_rows(&attribution(&[0.0, 0.0]), 10);
        assert!(rows.iter().all(|r| r.left == 0 && r.right == 0));
    }

    #[test]
    fn test_zero_width_is_safe() {
        let rows = chart_rows(&attribution(&[0.4, -0.2]), 0);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.left <= 1 && r.right <= 1));
    }
}
