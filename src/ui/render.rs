//! Terminal renderer for the dashboard view.

use super::theme::{Palette, ThemeToken};
use super::view::{DashboardView, LinkTab, SummaryKind};
use crate::color::HexColor;
use crate::error::FailureKind;
use crossterm::style::Stylize;
use std::io::{self, Write};

const SCREEN_TITLE: &str = "Dashboard";

/// Writes a [`DashboardView`] as styled (or plain) text.
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    palette: Palette,
}

impl Renderer {
    pub fn new(color: bool, palette: Palette) -> Self {
        Self { color, palette }
    }

    fn paint(&self, text: &str, token: ThemeToken) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(self.palette.color(token).to_terminal()).to_string()
    }

    fn paint_bold(&self, text: &str, token: ThemeToken) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(self.palette.color(token).to_terminal())
            .bold()
            .to_string()
    }

    pub fn render_dashboard<W: Write>(&self, out: &mut W, view: &DashboardView) -> io::Result<()> {
        writeln!(out, "{}", self.paint_bold(SCREEN_TITLE, ThemeToken::Header))?;
        writeln!(out)?;

        writeln!(out, "{}", self.paint_bold("Overview", ThemeToken::Accent))?;
        if view.chart.is_empty() {
            writeln!(out, "  {}", self.paint("no chart data", ThemeToken::Muted))?;
        }
        let label_width = view.chart.iter().map(|bar| bar.label.len()).max().unwrap_or(0);
        for bar in &view.chart {
            writeln!(
                out,
                "  {:<label_width$}  {} {}",
                bar.label,
                self.paint(&"█".repeat(bar.width), ThemeToken::Chart),
                bar.value
            )?;
        }
        writeln!(out)?;

        for item in &view.summary {
            let token = match item.kind {
                SummaryKind::TodayClicks => ThemeToken::TodayClicks,
                SummaryKind::TopLocation => ThemeToken::Location,
                SummaryKind::TopSource => ThemeToken::Source,
            };
            writeln!(
                out,
                "  {} {:<16} {}",
                self.paint("●", token),
                self.paint(item.subtitle, ThemeToken::Muted),
                item.title
            )?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.tab_bar(view.tab))?;
        if view.links.is_empty() {
            writeln!(out, "  {}", self.paint("no links", ThemeToken::Muted))?;
        }
        for link in &view.links {
            writeln!(
                out,
                "  {}  {}  {}",
                self.paint_bold(&link.title, ThemeToken::Accent),
                self.paint(&link.age, ThemeToken::Muted),
                link.clicks
            )?;
            writeln!(out, "    {}", self.paint(&link.web_link, ThemeToken::Link))?;
        }
        Ok(())
    }

    fn tab_bar(&self, selected: LinkTab) -> String {
        LinkTab::all()
            .iter()
            .map(|tab| {
                if *tab == selected {
                    self.paint_bold(&format!("[{}]", tab.label()), ThemeToken::Accent)
                } else {
                    self.paint(&format!(" {} ", tab.label()), ThemeToken::Muted)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One-line failure notice. Details stay in the log.
    pub fn render_failure<W: Write>(&self, out: &mut W, kind: FailureKind) -> io::Result<()> {
        let message = match kind {
            FailureKind::Network => "could not reach the dashboard service",
            FailureKind::Decode => "the dashboard service returned unexpected data",
        };
        writeln!(out, "{} {message}", self.paint_bold("warning:", ThemeToken::Warning))
    }

    /// Channel breakdown for `linkboard color`.
    pub fn render_color<W: Write>(&self, out: &mut W, input: &str, color: HexColor) -> io::Result<()> {
        let swatch = if self.color {
            "   ".on(color.to_terminal()).to_string()
        } else {
            String::new()
        };
        writeln!(
            out,
            "{input:<12} a={:<3} r={:<3} g={:<3} b={:<3} {color} {swatch}",
            color.a, color.r, color.g, color.b
        )
    }
}
