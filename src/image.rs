use thiserror::Error;

use crate::color::{Rgb, DEFAULT_FILL};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("Grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
}

/// Read access to a grid of RGB cells plus the single mutating brush write.
pub trait GridStore {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Flat channel buffer, three bytes per cell, row-major. Callers treat it
    /// as read-only.
    fn cells(&self) -> &[u8];

    /// Sets cell `(x, y)` to `color`. Coordinates outside the grid are ignored.
    fn brush(&mut self, x: i64, y: i64, color: Rgb);

    fn cell(&self, x: i64, y: i64) -> Option<Rgb> {
        let offset = cell_offset(self.width(), self.height(), x, y)?;
        let c = &self.cells()[offset..offset + 3];
        Some(Rgb::new(c[0], c[1], c[2]))
    }
}

/// Produces the store a session paints into. Startup fails if this does.
pub trait StoreFactory {
    type Store: GridStore;

    fn create(&self, width: usize, height: usize) -> Result<Self::Store, StoreError>;
}

/// Byte offset of the red channel of `(x, y)`, or `None` outside the grid.
fn cell_offset(width: usize, height: usize, x: i64, y: i64) -> Option<usize> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    if x >= width || y >= height {
        return None;
    }
    Some((y * width + x) * 3)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridImage {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl GridImage {
    pub fn new(width: usize, height: usize) -> Result<Self, StoreError> {
        Self::filled(width, height, DEFAULT_FILL)
    }

    pub fn filled(width: usize, height: usize, fill: Rgb) -> Result<Self, StoreError> {
        if width == 0 || height == 0 {
            return Err(StoreError::EmptyGrid { width, height });
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(StoreError::TooLarge { width, height })?;

        let mut cells = Vec::with_capacity(len);
        for _ in 0..width * height {
            cells.extend_from_slice(&fill.channels());
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl GridStore for GridImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn brush(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(offset) = cell_offset(self.width, self.height, x, y) {
            self.cells[offset..offset + 3].copy_from_slice(&color.channels());
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GridImageFactory;

impl StoreFactory for GridImageFactory {
    type Store = GridImage;

    fn create(&self, width: usize, height: usize) -> Result<GridImage, StoreError> {
        GridImage::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, PINK};

    #[test]
    fn new_image_is_uniformly_filled() {
        let image = GridImage::new(10, 10).unwrap();
        assert_eq!(image.cells().len(), 10 * 10 * 3);
        assert!(image.cells().chunks(3).all(|c| c == DEFAULT_FILL.channels()));
    }

    #[test]
    fn rejects_empty_and_oversized_grids() {
        assert_eq!(
            GridImage::new(0, 4),
            Err(StoreError::EmptyGrid { width: 0, height: 4 })
        );
        assert_eq!(
            GridImageFactory.create(usize::MAX, 2),
            Err(StoreError::TooLarge { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn brush_touches_only_the_target_cell() {
        let mut image = GridImage::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let before = image.clone();
                let color = Rgb::new(x as u8 * 60, y as u8 * 100, 7);
                image.brush(x, y, color);
                assert_eq!(image.cell(x, y), Some(color));

                for (i, (a, b)) in before.cells().chunks(3).zip(image.cells().chunks(3)).enumerate() {
                    if i != (y * 4 + x) as usize {
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn cells_use_row_major_layout() {
        let mut image = GridImage::new(5, 2).unwrap();
        image.brush(3, 1, PINK);
        let offset = (1 * 5 + 3) * 3;
        assert_eq!(&image.cells()[offset..offset + 3], &[255u8, 200, 200]);
    }

    #[test]
    fn out_of_range_brush_is_ignored() {
        let mut image = GridImage::new(3, 3).unwrap();
        let before = image.clone();
        for (x, y) in [
            (-1, 0),
            (0, -1),
            (3, 0),
            (0, 3),
            (3, 3),
            (i64::MIN, i64::MAX),
            (1 << 32, 0),
            (0, (1 << 32) + 1),
        ] {
            image.brush(x, y, BLACK);
            assert_eq!(image.cell(x, y), None);
        }
        assert_eq!(image, before);
    }

    #[test]
    fn repeated_brush_is_idempotent() {
        let mut image = GridImage::new(2, 2).unwrap();
        image.brush(1, 1, PINK);
        let once = image.clone();
        image.brush(1, 1, PINK);
        assert_eq!(image, once);
    }
}
