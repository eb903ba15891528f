//! Horizontal track shared by the slider components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const EMPTY: char = '─';
const FILLED: char = '━';
const TICK: char = '┼';
const THUMB: char = '●';

/// Where a track was last drawn, used to map mouse columns back to percentages
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Track {
    area: Rect,
}

impl Track {
    pub(crate) fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Whether a cell lies on the track
    pub(crate) fn contains(&self, column: u16, row: u16) -> bool {
        self.area.width > 0
            && row >= self.area.y
            && row < self.area.bottom()
            && column >= self.area.x
            && column < self.area.right()
    }

    /// Percentage under a column, clamped to the track
    pub(crate) fn percentage_at(&self, column: u16) -> f64 {
        if self.area.width <= 1 {
            return 0.0;
        }
        let offset = column.clamp(self.area.x, self.area.right() - 1) - self.area.x;
        f64::from(offset) * 100.0 / f64::from(self.area.width - 1)
    }

    /// Cell offset of a percentage along the track
    pub(crate) fn offset_of(&self, percentage: f64) -> u16 {
        let last = self.area.width.saturating_sub(1);
        if !percentage.is_finite() || last == 0 {
            return 0;
        }
        let cell = (percentage.clamp(0.0, 100.0) / 100.0 * f64::from(last)).round();
        (cell as u16).min(last)
    }
}

/// A thumb to draw at a cell offset
pub(crate) struct Thumb {
    pub offset: u16,
    pub active: bool,
}

/// Build the track line: filled between `fill`, ticks at percentages, thumbs on top
pub(crate) fn track_line(
    track: &Track,
    fill: (u16, u16),
    ticks: &[f64],
    thumbs: &[Thumb],
    is_focused: bool,
) -> Line<'static> {
    let width = track.area.width;
    let accent = if is_focused { Color::Cyan } else { Color::Gray };
    let tick_cells: Vec<u16> = ticks.iter().map(|&t| track.offset_of(t)).collect();

    let spans: Vec<Span<'static>> = (0..width)
        .map(|cell| {
            if let Some(thumb) = thumbs.iter().find(|t| t.offset == cell) {
                let style = if thumb.active && is_focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                return Span::styled(THUMB.to_string(), style);
            }
            let filled = cell >= fill.0 && cell <= fill.1;
            let symbol = if tick_cells.contains(&cell) {
                TICK
            } else if filled {
                FILLED
            } else {
                EMPTY
            };
            let style = if filled {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(symbol.to_string(), style)
        })
        .collect();

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(width: u16) -> Track {
        Track::new(Rect::new(2, 1, width, 1))
    }

    #[test]
    fn test_percentage_at() {
        let t = track(11);
        assert_eq!(t.percentage_at(2), 0.0);
        assert_eq!(t.percentage_at(7), 50.0);
        assert_eq!(t.percentage_at(12), 100.0);
        // Clamped outside the track
        assert_eq!(t.percentage_at(0), 0.0);
        assert_eq!(t.percentage_at(40), 100.0);
    }

    #[test]
    fn test_offset_of() {
        let t = track(11);
        assert_eq!(t.offset_of(0.0), 0);
        assert_eq!(t.offset_of(50.0), 5);
        assert_eq!(t.offset_of(100.0), 10);
        assert_eq!(t.offset_of(f64::NAN), 0);
        assert_eq!(track(0).offset_of(50.0), 0);
    }

    #[test]
    fn test_contains() {
        let t = track(5);
        assert!(t.contains(2, 1));
        assert!(t.contains(6, 1));
        assert!(!t.contains(7, 1));
        assert!(!t.contains(3, 0));
        assert!(!Track::default().contains(0, 0));
    }

    #[test]
    fn test_track_line() {
        let t = track(5);
        let line = track_line(
            &t,
            (0, 2),
            &[],
            &[Thumb {
                offset: 2,
                active: true,
            }],
            true,
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "━━●──");
    }
}
