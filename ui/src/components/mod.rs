//! Reusable UI components

pub mod alert_card;
pub mod line_chart_card;
pub mod navbar;
pub mod pie_chart_card;
pub mod score_gauge;

pub use alert_card::AlertCard;
pub use line_chart_card::LineChartCard;
pub use navbar::Navbar;
pub use pie_chart_card::PieChartCard;
pub use score_gauge::ScoreGauge;
