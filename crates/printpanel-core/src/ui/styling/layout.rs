//! Padding and rectangle arithmetic for page layouts
//!
//! Pages are laid out by carving the display rectangle: a header strip off
//! the top, a footer strip off the bottom and a button grid in between.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Padding around an element (top, right, bottom, left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// left + right
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Shrink `rect` by `padding`, saturating at zero size.
pub fn inset(rect: Rectangle, padding: Padding) -> Rectangle {
    Rectangle::new(
        rect.top_left + Point::new(padding.left as i32, padding.top as i32),
        Size::new(
            rect.size.width.saturating_sub(padding.horizontal()),
            rect.size.height.saturating_sub(padding.vertical()),
        ),
    )
}

/// Cut a strip of `height` off the top. Returns `(strip, rest)`; `gap`
/// pixels between them belong to neither.
pub fn split_top(rect: Rectangle, height: u32, gap: u32) -> (Rectangle, Rectangle) {
    let height = height.min(rect.size.height);
    let strip = Rectangle::new(rect.top_left, Size::new(rect.size.width, height));
    let taken = (height + gap).min(rect.size.height);
    let rest = Rectangle::new(
        rect.top_left + Point::new(0, taken as i32),
        Size::new(rect.size.width, rect.size.height - taken),
    );
    (strip, rest)
}

/// Cut a strip of `height` off the bottom. Returns `(rest, strip)`.
pub fn split_bottom(rect: Rectangle, height: u32, gap: u32) -> (Rectangle, Rectangle) {
    let height = height.min(rect.size.height);
    let strip = Rectangle::new(
        rect.top_left + Point::new(0, (rect.size.height - height) as i32),
        Size::new(rect.size.width, height),
    );
    let rest = Rectangle::new(
        rect.top_left,
        Size::new(
            rect.size.width,
            rect.size.height.saturating_sub(height + gap),
        ),
    );
    (rest, strip)
}

/// Bounds of cell `index` in a `columns` x `rows` grid filling `area`,
/// row-major, with `gap` pixels between cells.
pub fn grid_cell(area: Rectangle, columns: u32, rows: u32, index: usize, gap: u32) -> Rectangle {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let width = area.size.width.saturating_sub(gap * (columns - 1)) / columns;
    let height = area.size.height.saturating_sub(gap * (rows - 1)) / rows;

    let column = index as u32 % columns;
    let row = index as u32 / columns;

    Rectangle::new(
        area.top_left
            + Point::new(
                (column * (width + gap)) as i32,
                (row * (height + gap)) as i32,
            ),
        Size::new(width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(480, 320))
    }

    #[test]
    fn test_inset() {
        let inner = inset(screen(), Padding::symmetric(10, 20));
        assert_eq!(inner.top_left, Point::new(20, 10));
        assert_eq!(inner.size, Size::new(440, 300));
    }

    #[test]
    fn test_inset_saturates() {
        let tiny = Rectangle::new(Point::zero(), Size::new(4, 4));
        assert_eq!(inset(tiny, Padding::all(8)).size, Size::zero());
    }

    #[test]
    fn test_split_top_and_bottom() {
        let (header, rest) = split_top(screen(), 40, 8);
        assert_eq!(header.size, Size::new(480, 40));
        assert_eq!(rest.top_left, Point::new(0, 48));
        assert_eq!(rest.size.height, 272);

        let (body, footer) = split_bottom(rest, 44, 8);
        assert_eq!(footer.top_left, Point::new(0, 276));
        assert_eq!(footer.size.height, 44);
        assert_eq!(body.size.height, 220);
    }

    #[test]
    fn test_grid_cells_do_not_overlap() {
        let area = Rectangle::new(Point::new(8, 48), Size::new(464, 220));
        let first = grid_cell(area, 3, 4, 0, 8);
        let second = grid_cell(area, 3, 4, 1, 8);
        let below = grid_cell(area, 3, 4, 3, 8);

        assert_eq!(first.top_left, area.top_left);
        assert_eq!(first.size, Size::new(149, 49));
        assert_eq!(second.top_left.x, first.top_left.x + 149 + 8);
        assert_eq!(below.top_left, Point::new(8, 48 + 49 + 8));
        assert_eq!(first.intersection(&second).size, Size::zero());
    }
}
