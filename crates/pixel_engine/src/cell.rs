use crate::Color;

/// One square unit of the editable grid.
///
/// `pos_x`/`pos_y` are the top-left corner in surface coordinates; the
/// side length is `width` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub width: f32,
    pub pos_x: f32,
    pub pos_y: f32,
    pub fill_color: Color,
}

impl Cell {
    pub fn new(width: f32, pos_x: f32, pos_y: f32) -> Self {
        Self {
            width,
            pos_x,
            pos_y,
            fill_color: Color::WHITE,
        }
    }

    /// Hit box with a one unit bias on the lower bounds, so a click
    /// exactly on a border line still lands in a cell. `right` and `bottom`
    /// are exclusive; the grid passes the next cell's origin so that
    /// neighbouring boxes meet without overlapping.
    pub fn contains(&self, x: f32, y: f32, right: f32, bottom: f32) -> bool {
        self.pos_x - 1.0 <= x && x < right && self.pos_y - 1.0 <= y && y < bottom
    }
}
