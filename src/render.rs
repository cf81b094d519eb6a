use crate::color::{Rgb, BLACK};
use crate::image::GridStore;
use crate::surface::Surface;

pub const GRID_LINE_COLOR: Rgb = BLACK;
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Pixel size of a surface that shows the whole grid including the closing
/// gridlines on the right and bottom edges. `None` if it does not fit a frame
/// buffer.
pub fn surface_size(grid_width: usize, grid_height: usize, cell_size: u32) -> Option<(u32, u32)> {
    let extent = |cells: usize| {
        u32::try_from(cells)
            .ok()?
            .checked_mul(cell_size)?
            .checked_add(1)
    };
    let (width, height) = (extent(grid_width)?, extent(grid_height)?);
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
        .map(|_| (width, height))
}

/// Repaints the whole surface from `image`: one fill per cell, then the
/// gridlines on every column and row boundary.
pub fn render<G, S>(image: &G, surface: &mut S, cell_size: u32)
where
    G: GridStore + ?Sized,
    S: Surface + ?Sized,
{
    let width = image.width();
    let height = image.height();
    let size = cell_size as f64;
    let cells = image.cells();

    for y in 0..height {
        for x in 0..width {
            let offset = (y * width + x) * 3;
            let color = Rgb::new(cells[offset], cells[offset + 1], cells[offset + 2]);
            surface.fill_rect(x as f64 * size, y as f64 * size, size, size, color);
        }
    }

    // Half-pixel offset puts 1px lines on a single raster column/row.
    let extent_x = width as f64 * size + 1.0;
    let extent_y = height as f64 * size + 1.0;
    surface.set_stroke(GRID_LINE_COLOR, GRID_LINE_WIDTH);

    for x in 0..=width {
        let px = x as f64 * size + 0.5;
        surface.line((px, 0.0), (px, extent_y));
    }
    for y in 0..=height {
        let py = y as f64 * size + 0.5;
        surface.line((0.0, py), (extent_x, py));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DEFAULT_FILL, PINK};
    use crate::image::GridImage;
    use crate::raster::FrameBuffer;
    use crate::surface::{DrawCommand, DrawLog, Rect};

    fn log_for(width: usize, height: usize, cell_size: u32) -> DrawLog {
        let (w, h) = surface_size(width, height, cell_size).unwrap();
        DrawLog::new(Rect {
            x: 0.0,
            y: 0.0,
            width: w as f64,
            height: h as f64,
        })
    }

    #[test]
    fn ten_by_ten_grid_issues_100_fills_and_22_lines() {
        let image = GridImage::new(10, 10).unwrap();
        let mut log = log_for(10, 10, 50);
        render(&image, &mut log, 50);
        assert_eq!(log.fill_count(), 100);
        assert_eq!(log.line_count(), 22);
    }

    #[test]
    fn surface_size_adds_closing_gridline() {
        assert_eq!(surface_size(10, 10, 50), Some((501, 501)));
        assert_eq!(surface_size(3, 1, 7), Some((22, 8)));
    }

    #[test]
    fn surface_size_rejects_extents_that_overflow() {
        assert_eq!(surface_size(50_000, 10, 100_000), None);
        assert_eq!(surface_size(1, 1, u32::MAX), None);
        assert_eq!(surface_size(usize::MAX, 1, 1), None);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut image = GridImage::new(3, 2).unwrap();
        image.brush(1, 1, PINK);
        let mut log = log_for(3, 2, 8);
        render(&image, &mut log, 8);
        let first = log.take_commands();
        render(&image, &mut log, 8);
        assert_eq!(first, log.take_commands());
    }

    #[test]
    fn cells_are_filled_at_scaled_positions() {
        let mut image = GridImage::new(2, 2).unwrap();
        image.brush(1, 0, PINK);
        let mut log = log_for(2, 2, 10);
        render(&image, &mut log, 10);
        assert!(log.commands().contains(&DrawCommand::FillRect {
            x: 10.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color: PINK,
        }));
        assert!(log.commands().contains(&DrawCommand::FillRect {
            x: 0.0,
            y: 10.0,
            width: 10.0,
            height: 10.0,
            color: DEFAULT_FILL,
        }));
    }

    #[test]
    fn gridlines_follow_fills_with_half_pixel_offset() {
        let image = GridImage::new(2, 1).unwrap();
        let mut log = log_for(2, 1, 10);
        render(&image, &mut log, 10);
        let commands = log.commands();
        assert_eq!(
            commands[2],
            DrawCommand::SetStroke {
                color: BLACK,
                width: 1.0
            }
        );
        let lines: Vec<_> = commands[3..]
            .iter()
            .map(|c| match c {
                DrawCommand::Line { from, to } => (*from, *to),
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                ((0.5, 0.0), (0.5, 11.0)),
                ((10.5, 0.0), (10.5, 11.0)),
                ((20.5, 0.0), (20.5, 11.0)),
                ((0.0, 0.5), (21.0, 0.5)),
                ((0.0, 10.5), (21.0, 10.5)),
            ]
        );
    }

    #[test]
    fn rasterized_grid_shows_cells_and_lines() {
        let mut image = GridImage::new(2, 2).unwrap();
        image.brush(0, 1, PINK);
        let (w, h) = surface_size(2, 2, 4).unwrap();
        let mut frame = FrameBuffer::new(w, h).unwrap();
        render(&image, &mut frame, 4);

        assert_eq!(frame.pixel(2, 6), Some(PINK));
        assert_eq!(frame.pixel(6, 2), Some(DEFAULT_FILL));
        for i in 0..w {
            assert_eq!(frame.pixel(i, 0), Some(BLACK));
            assert_eq!(frame.pixel(i, 4), Some(BLACK));
            assert_eq!(frame.pixel(i, 8), Some(BLACK));
        }
        assert_eq!(frame.pixel(8, 3), Some(BLACK));
    }
}
