//! Integer-only Bresenham line rasterization.
//!
//! Enumerates the grid cells a straight line passes through, with no gaps:
//! consecutive points never differ by more than 1 on either axis. Used by
//! the painter to bridge pointer samples that land several cells apart.
//! Performs no bounds checking and no mutation; callers decide what to do
//! with coordinates that fall outside the grid.

/// Cells touched by the line from (x0, y0) to (x1, y1), in walk order.
///
/// The walk is normalized so the major axis always advances in the positive
/// direction, so the returned sequence may run from end to start. A
/// zero-length line yields exactly its single point.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    // Slope magnitude <= 1 walks x (the 45° case dx == dy included);
    // anything steeper walks y with the roles mirrored.
    if dy <= dx {
        if x0 <= x1 {
            line_shallow(x0, y0, x1, y1, dx, dy)
        } else {
            line_shallow(x1, y1, x0, y0, dx, dy)
        }
    } else if y0 <= y1 {
        line_steep(x0, y0, x1, y1, dx, dy)
    } else {
        line_steep(x1, y1, x0, y0, dx, dy)
    }
}

/// Walk x from x0 to x1, nudging y whenever the error term goes positive.
/// Assumes x0 <= x1, dx = |x1 - x0|, dy = |y1 - y0|, dy <= dx.
fn line_shallow(x0: i32, y0: i32, x1: i32, y1: i32, dx: i32, dy: i32) -> Vec<(i32, i32)> {
    let step = if y1 < y0 { -1 } else { 1 };
    let mut error = 2 * dy - dx;
    let mut y = y0;
    let mut points = Vec::with_capacity((dx + 1) as usize);

    for x in x0..=x1 {
        points.push((x, y));
        if error > 0 {
            y += step;
            error -= 2 * dx;
        }
        error += 2 * dy;
    }
    points
}

/// Walk y from y0 to y1, nudging x whenever the error term goes positive.
/// Assumes y0 <= y1, dx = |x1 - x0|, dy = |y1 - y0|, dy > dx.
fn line_steep(x0: i32, y0: i32, x1: i32, y1: i32, dx: i32, dy: i32) -> Vec<(i32, i32)> {
    let step = if x1 < x0 { -1 } else { 1 };
    let mut error = 2 * dx - dy;
    let mut x = x0;
    let mut points = Vec::with_capacity((dy + 1) as usize);

    for y in y0..=y1 {
        points.push((x, y));
        if error > 0 {
            x += step;
            error -= 2 * dy;
        }
        error += 2 * dx;
    }
    points
}
