//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen with:
//! - Eleven bounded integer steppers in two columns
//! - A predict action
//! - The risk label, probability and attribution chart of the last submission

mod app;
mod styles;
mod ui;

pub use app::{App, DEFAULT_MODEL_PATH, WINDOW_TITLE};
pub use styles::ClinicalTheme;
pub use ui::chart::{chart_rows, ChartRow};
pub use ui::form::{FeatureFormState, StepperField};
pub use ui::result::ScreenState;
pub use ui::PAGE_TITLE;
