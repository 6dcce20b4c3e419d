use crate::chart::{BarView, FillClass, Layout};
use colored::{Color, Colorize};

const FILLED: char = '█';
const EMPTY: char = '░';

const fn fill_color(fill: FillClass) -> Color {
    match fill {
        FillClass::Default => Color::Blue,
        FillClass::Success => Color::Green,
        FillClass::Warning => Color::Yellow,
        FillClass::Danger => Color::Red,
    }
}

/// Number of filled cells for a bar of `width` cells at `bar_width` percent.
pub fn filled_cells(bar_width: u32, width: usize) -> usize {
    let ratio = f64::from(bar_width.min(100)) / 100.0;
    ((width as f64 * ratio).round() as usize).min(width)
}

/// Draw the gauge part of a bar.
///
/// While the view is still animating in, the gauge is drawn empty so the
/// settled frame shows the fill growing into place.
pub fn render_gauge(view: &BarView, width: usize, color: bool) -> String {
    let filled = if view.animate { 0 } else { filled_cells(view.bar_width, width) };

    let used = FILLED.to_string().repeat(filled);
    let free = EMPTY.to_string().repeat(width - filled);

    if color {
        format!("{}{}", used.color(fill_color(view.fill)), free.dimmed())
    } else {
        format!("{used}{free}")
    }
}

/// Render a bar as terminal lines according to its layout.
pub fn render_bar(view: &BarView, width: usize, color: bool) -> Vec<String> {
    let gauge = render_gauge(view, width, color);
    let description =
        if color { view.description.bold().to_string() } else { view.description.clone() };

    match view.layout {
        Layout::Regular => vec![description, format!("{gauge} {}", view.label)],
        Layout::Inline => {
            if view.description.is_empty() {
                vec![format!("{gauge} {}", view.label)]
            } else {
                vec![format!("{description} {gauge} {}", view.label)]
            }
        }
    }
}
