use crate::aggregation::AggregatedLine;
use crate::config::RenderConfig;

/// Fixed x offset of content lines, in points.
pub(crate) const CONTENT_X: f64 = 40.0;

/// Font size shared by the header and content lines, in points.
pub(crate) const FONT_SIZE: f64 = 15.0;

/// One positioned content line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Sequential number across the whole document, starting at 1. Never
    /// resets at a page break.
    pub number: usize,
    pub text: String,
    /// Baseline y in PDF coordinates (origin bottom-left), points.
    pub y: f64,
}

/// One page of the document: a centered header plus its content lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub header_x: f64,
    pub header_y: f64,
    pub lines: Vec<PlacedLine>,
}

/// Paginate aggregated lines onto fixed-size pages.
///
/// `header_width` is the rendered width of the configured header text at
/// [`FONT_SIZE`], used to center it. Every page repeats the header and
/// content starts two line heights below it. A line whose baseline would
/// land at or below the bottom margin moves to a fresh page. An empty input
/// still produces one header-only page.
pub fn paginate(lines: &[AggregatedLine], config: &RenderConfig, header_width: f64) -> Vec<Page> {
    let header_x = (config.page_width - header_width) / 2.0;
    let header_y = config.page_height - config.margin_top;
    let content_top = header_y - config.line_height * 2.0;

    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut y = content_top;

    for (index, line) in lines.iter().enumerate() {
        if y <= config.margin_bottom {
            pages.push(Page {
                header_x,
                header_y,
                lines: std::mem::take(&mut current),
            });
            y = content_top;
        }

        let number = index + 1;
        current.push(PlacedLine {
            number,
            text: display_line(number, line),
            y,
        });
        y -= config.line_height;
    }

    pages.push(Page {
        header_x,
        header_y,
        lines: current,
    });

    pages
}

/// Format one content line: `"{n}. {Name} - {amount} {unit}"`.
fn display_line(number: usize, line: &AggregatedLine) -> String {
    format!(
        "{}. {} - {} {}",
        number,
        capitalize_first(&line.name),
        line.total_amount,
        line.measurement_unit
    )
}

/// Uppercase the first character for display, leaving the rest untouched.
///
/// Display-only: aggregation keys are never modified, so "sugar" and
/// "Sugar" stay distinct upstream while both display as "Sugar".
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
