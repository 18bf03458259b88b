//! Pluggable rendering of the mood distribution.
//!
//! The seam is a strategy trait: callers compute the distribution once and
//! pick how it gets drawn. Terminal strategies only; anything fancier plugs
//! in behind the same trait.

use console::style;

use crate::Mood;

/// Widest bar a chart strategy will draw.
const MAX_BAR_WIDTH: usize = 32;

/// Renders a mood distribution into displayable text.
pub trait ChartStrategy {
    fn render(&self, data: &[(Mood, usize)]) -> String;
}

/// Horizontal unicode bars, one per mood with a non-zero count.
pub struct BarChart;

impl ChartStrategy for BarChart {
    fn render(&self, data: &[(Mood, usize)]) -> String {
        let max = data.iter().map(|(_, n)| *n).max().unwrap_or(0);
        if max == 0 {
            return "No ideas yet".to_string();
        }

        let mut out = String::new();
        for (mood, count) in data {
            if *count == 0 {
                continue;
            }
            let width = (count * MAX_BAR_WIDTH).div_ceil(max);
            out.push_str(&format!(
                "{} {:<8} {} {}\n",
                mood.emoji(),
                mood.as_str(),
                style("█".repeat(width)).cyan(),
                count
            ));
        }
        out.trim_end().to_string()
    }
}

/// Plain table with counts and percentages, zero rows included.
pub struct TableChart;

impl ChartStrategy for TableChart {
    fn render(&self, data: &[(Mood, usize)]) -> String {
        let total: usize = data.iter().map(|(_, n)| *n).sum();
        let mut out = String::new();
        for (mood, count) in data {
            let percent = if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64 * 100.0
            };
            out.push_str(&format!(
                "{} {:<8} {:>5}  {:>5.1}%\n",
                mood.emoji(),
                mood.as_str(),
                count,
                percent
            ));
        }
        out.trim_end().to_string()
    }
}

/// Chart styles selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    Bar,
    Table,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => f.write_str("bar"),
            ChartKind::Table => f.write_str("table"),
        }
    }
}

impl ChartKind {
    pub fn strategy(&self) -> Box<dyn ChartStrategy> {
        match self {
            ChartKind::Bar => Box::new(BarChart),
            ChartKind::Table => Box::new(TableChart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_skips_zero_moods() {
        let data = vec![
            (Mood::Inspired, 4),
            (Mood::Excited, 0),
            (Mood::Neutral, 2),
            (Mood::Tired, 0),
        ];
        let rendered = BarChart.render(&data);
        assert!(rendered.contains("inspired"));
        assert!(rendered.contains("neutral"));
        assert!(!rendered.contains("excited"));
        assert!(!rendered.contains("tired"));
    }

    #[test]
    fn bar_chart_on_empty_distribution() {
        let data: Vec<(Mood, usize)> = Mood::ALL.iter().map(|&m| (m, 0)).collect();
        assert_eq!(BarChart.render(&data), "No ideas yet");
    }

    #[test]
    fn table_chart_lists_every_mood() {
        let data = vec![
            (Mood::Inspired, 1),
            (Mood::Excited, 0),
            (Mood::Neutral, 3),
            (Mood::Tired, 0),
        ];
        let rendered = TableChart.render(&data);
        for mood in Mood::ALL {
            assert!(rendered.contains(mood.as_str()));
        }
        assert!(rendered.contains("75.0%"));
    }
}
