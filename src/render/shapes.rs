//! Stateless shape rasterizer.
//!
//! Every routine takes a centre, a current radius, a color, and a thickness.
//! Thickness is emulated by repainting the outline at slightly decreasing
//! radius, producing a banded ring rather than a true stroke; drawing stops
//! early once the radius goes negative.

use crate::effect::config::ShapeKind;
use crate::foundation::core::{Point, Rgba8};
use crate::render::target::RenderTarget;

/// Rasterize `kind` at `centre` with the current radius.
pub fn draw_shape<T: RenderTarget + ?Sized>(
    target: &mut T,
    kind: ShapeKind,
    centre: Point,
    radius: f64,
    points: u32,
    color: Rgba8,
    thickness: u32,
) {
    let xc = centre.x.round() as i64;
    let yc = centre.y.round() as i64;
    match kind {
        ShapeKind::Circle => draw_circle(target, xc, yc, radius, color, thickness),
        ShapeKind::Square => draw_polygon(target, xc, yc, radius, 4, color, thickness, 45.0),
        ShapeKind::Triangle => draw_polygon(target, xc, yc, radius, 3, color, thickness, 90.0),
        ShapeKind::Star => draw_star(target, xc, yc, radius, points, color, thickness),
        ShapeKind::Pentagon => draw_polygon(target, xc, yc, radius, 5, color, thickness, 90.0),
        ShapeKind::Hexagon => draw_polygon(target, xc, yc, radius, 6, color, thickness, 0.0),
        ShapeKind::Octagon => draw_polygon(target, xc, yc, radius, 8, color, thickness, 22.5),
        ShapeKind::Heart => draw_heart(target, xc, yc, radius, color, thickness),
        ShapeKind::Tree => draw_tree(target, xc, yc, radius, color, thickness),
        ShapeKind::CandyCane => draw_candy_cane(target, xc, yc, radius, color, thickness),
        ShapeKind::Snowflake => draw_snowflake(target, xc, yc, radius, 3, color, 30.0),
    }
}

/// Circle outline from points at 1-degree increments.
pub fn draw_circle<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    mut radius: f64,
    color: Rgba8,
    thickness: u32,
) {
    let step = 0.75;
    let total = f64::from(thickness) - 1.0 + step;

    let mut i = 0.0;
    while i < total {
        if radius < 0.0 {
            break;
        }
        let mut degrees: f64 = 0.0;
        while degrees < 360.0 {
            let radian = degrees.to_radians();
            let x = (radius * radian.cos()).round() as i64 + xc;
            let y = (radius * radian.sin()).round() as i64 + yc;
            target.set_pixel(x, y, color);
            degrees += 1.0;
        }
        radius -= step;
        i += step;
    }
}

/// Regular polygon outline with `sides` vertices, rotated by `rotation`
/// degrees.
#[allow(clippy::too_many_arguments)]
pub fn draw_polygon<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    mut radius: f64,
    sides: u32,
    color: Rgba8,
    thickness: u32,
    rotation: f64,
) {
    let step = 0.05;
    let total = f64::from(thickness) - 1.0 + step;
    let increment = 360.0 / f64::from(sides);

    let mut i = 0.0;
    while i < total {
        if radius < 0.0 {
            break;
        }
        // Sweep to 361 degrees so float accumulation cannot leave a gap at
        // the seam; the final value clamps to 360.
        let mut degrees: f64 = 0.0;
        while degrees < 361.0 {
            let capped = degrees.min(360.0);

            let radian = (rotation + capped).to_radians();
            let x1 = (radius * radian.cos()).round() as i64 + xc;
            let y1 = (radius * radian.sin()).round() as i64 + yc;

            let radian = (rotation + capped + increment).to_radians();
            let x2 = (radius * radian.cos()).round() as i64 + xc;
            let y2 = (radius * radian.sin()).round() as i64 + yc;

            target.draw_line(x1, y1, x2, y2, color);

            if capped >= 360.0 {
                break;
            }
            degrees += increment;
        }
        radius -= step;
        i += step;
    }
}

/// Pointed star. Each point is two segments from an outer vertex to the two
/// adjacent inner vertices; the inner radius divides the outer by the square
/// of the golden ratio.
pub fn draw_star<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    mut radius: f64,
    points: u32,
    color: Rgba8,
    thickness: u32,
) {
    let step = 0.75;
    let total = f64::from(thickness) - 1.0 + step;

    let offset_angle = match points {
        5 => 90.0 - 360.0 / 5.0,
        6 => 30.0,
        7 => 90.0 - 360.0 / 7.0,
        _ => 0.0,
    };

    let mut i = 0.0;
    while i < total {
        if radius < 0.0 {
            break;
        }
        let inner_radius = radius / 2.618034;
        let increment = 360.0 / f64::from(points);

        let mut degrees: f64 = 0.0;
        while degrees < 361.0 {
            let capped = degrees.min(360.0);

            let radian = (offset_angle + capped).to_radians();
            let xouter = (radius * radian.cos()).round() as i64 + xc;
            let youter = (radius * radian.sin()).round() as i64 + yc;

            let radian = (offset_angle + capped + increment / 2.0).to_radians();
            let xinner = (inner_radius * radian.cos()).round() as i64 + xc;
            let yinner = (inner_radius * radian.sin()).round() as i64 + yc;
            target.draw_line(xinner, yinner, xouter, youter, color);

            let radian = (offset_angle + capped - increment / 2.0).to_radians();
            let xinner = (inner_radius * radian.cos()).round() as i64 + xc;
            let yinner = (inner_radius * radian.sin()).round() as i64 + yc;
            target.draw_line(xinner, yinner, xouter, youter, color);

            if capped >= 360.0 {
                break;
            }
            degrees += increment;
        }
        radius -= step;
        i += step;
    }
}

/// Snowflake of `sides * 2` radial spokes, each drawn as one full line
/// through the centre. Single pass; thickness does not apply.
pub fn draw_snowflake<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    radius: f64,
    sides: u32,
    color: Rgba8,
    rotation: f64,
) {
    if radius < 0.0 {
        return;
    }
    let increment = 360.0 / f64::from(sides * 2);
    let mut angle = rotation;

    for _ in 0..sides * 2 {
        let radian = angle.to_radians();
        let x1 = (radius * radian.cos()).round() as i64 + xc;
        let y1 = (radius * radian.sin()).round() as i64 + yc;

        let radian = (180.0 + angle).to_radians();
        let x2 = (radius * radian.cos()).round() as i64 + xc;
        let y2 = (radius * radian.sin()).round() as i64 + yc;

        target.draw_line(x1, y1, x2, y2, color);

        angle += increment;
    }
}

/// Classic implicit heart outline, plotted as individual points over two
/// symmetric branches: `y1 = sqrt(1 - (|x| - 1)^2)` and
/// `y2 = acos(1 - |x|) - pi` for x in [-2, 2].
pub fn draw_heart<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    radius: f64,
    color: Rgba8,
    thickness: u32,
) {
    let step = 0.75;
    let total = f64::from(thickness) - 1.0 + step;

    let mut x: f64 = -2.0;
    while x <= 2.0 {
        let y1 = (1.0 - (x.abs() - 1.0) * (x.abs() - 1.0)).sqrt();
        let y2 = (1.0 - x.abs()).acos() - std::f64::consts::PI;

        let mut r = radius;
        let mut i = 0.0;
        while i < total {
            if r < 0.0 {
                break;
            }
            let px = (x * r / 2.0).round() as i64 + xc;
            target.set_pixel(px, (y1 * r / 2.0).round() as i64 + yc, color);
            target.set_pixel(px, (y2 * r / 2.0).round() as i64 + yc, color);
            r -= step;
            i += step;
        }
        x += 0.01;
    }
}

// Fir tree segments on a 0..=11 unit grid, centred at (4, 4) when scaled.
const TREE_SEGMENTS: [((i64, i64), (i64, i64)); 14] = [
    ((3, 0), (5, 0)),
    ((5, 0), (5, 3)),
    ((3, 0), (3, 3)),
    ((0, 3), (8, 3)),
    ((0, 3), (2, 6)),
    ((8, 3), (6, 6)),
    ((1, 6), (2, 6)),
    ((6, 6), (7, 6)),
    ((1, 6), (3, 9)),
    ((7, 6), (5, 9)),
    ((2, 9), (3, 9)),
    ((5, 9), (6, 9)),
    ((6, 9), (4, 11)),
    ((2, 9), (4, 11)),
];

/// Fixed-topology fir tree, scaled uniformly to the current radius.
pub fn draw_tree<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    mut radius: f64,
    color: Rgba8,
    thickness: u32,
) {
    let step = 0.75;
    let total = f64::from(thickness) - 1.0 + step;

    let mut i = 0.0;
    while i < total {
        if radius < 0.0 {
            break;
        }
        for ((sx, sy), (ex, ey)) in TREE_SEGMENTS {
            let x1 = ((sx as f64 - 4.0) / 11.0 * radius).round() as i64;
            let y1 = ((sy as f64 - 4.0) / 11.0 * radius).round() as i64;
            let x2 = ((ex as f64 - 4.0) / 11.0 * radius).round() as i64;
            let y2 = ((ey as f64 - 4.0) / 11.0 * radius).round() as i64;
            target.draw_line(xc + x1, yc + y1, xc + x2, yc + y2, color);
        }
        radius -= step;
        i += step;
    }
}

/// Candy cane: a vertical stick plus a half-circle hook of radius/3 plotted
/// as points. The stick length derives from the un-shrunk original radius so
/// repaint passes thicken it without shortening it.
pub fn draw_candy_cane<T: RenderTarget + ?Sized>(
    target: &mut T,
    xc: i64,
    yc: i64,
    mut radius: f64,
    color: Rgba8,
    thickness: u32,
) {
    let original_radius = radius;
    let step = 0.75;
    let total = f64::from(thickness) - 1.0 + step;

    let mut i = 0.0;
    while i < total {
        if radius < 0.0 {
            break;
        }
        // stick
        let y1 = (yc as f64 + original_radius / 6.0).round() as i64;
        let y2 = (yc as f64 - original_radius / 2.0).round() as i64;
        let x = (xc as f64 + radius / 2.0).round() as i64;
        target.draw_line(x, y1, x, y2, color);

        // hook
        let r = radius / 3.0;
        let mut degrees: f64 = 0.0;
        while degrees < 180.0 {
            let radian = degrees.to_radians();
            let hx = ((r - step) * radian.cos() + xc as f64 + original_radius / 6.0).round() as i64;
            let hy = ((r - step) * radian.sin() + y1 as f64).round() as i64;
            target.set_pixel(hx, hy, color);
            degrees += 1.0;
        }
        radius -= step;
        i += step;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
