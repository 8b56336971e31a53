//! Progressive coarse-to-fine refinement.
//!
//! The canvas is padded to a power-of-two square and walked as a quad-tree.
//! At each level the canvas is split into blocks of `tile_size` pixels; a
//! step samples the block's bottom-left corner and paints the block's other
//! three quadrants with that one color. The remaining quadrant already holds
//! the color of an earlier, coarser sample and is refined at the next level.
//!
//! Every bit of progress lives in [`RefineState`], so the refiner can be
//! stepped one block at a time or in batches with identical output.

/// A rectangular region of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// X coordinate of the rect's left edge
    pub x: u32,
    /// Y coordinate of the rect's bottom edge
    pub y: u32,
    /// Width of the rect in pixels
    pub width: u32,
    /// Height of the rect in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this rect.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive top edge.
    pub fn top(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Intersect with a `width` x `height` canvas; `None` if nothing is left.
    pub fn clipped(&self, width: u32, height: u32) -> Option<Rect> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let w = self.right().min(width) - self.x;
        let h = self.top().min(height) - self.y;
        (w > 0 && h > 0).then(|| Rect::new(self.x, self.y, w, h))
    }

    /// Iterate the pixel coordinates covered by this rect, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let (x0, x1) = (self.x, self.right());
        (self.y..self.top()).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

/// Where refinement stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineState {
    /// Walking blocks of `tile_size` pixels; `cursor` is the next block's
    /// bottom-left corner.
    Sizing { tile_size: u32, cursor: (u32, u32) },
    /// Every pixel has been painted from its finest sample.
    Done,
}

/// One unit of work: sample at `sample`, paint `rects` with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineStep {
    /// Pixel to cast the ray through
    pub sample: (u32, u32),
    /// Edge of the block this step belongs to
    pub tile_size: u32,
    /// Quadrants to paint, already clipped to the canvas
    pub rects: Vec<Rect>,
}

/// Steppable coarse-to-fine scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refiner {
    width: u32,
    height: u32,
    state: RefineState,
}

impl Refiner {
    /// Create a refiner for a `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: Self::initial_state(width, height),
        }
    }

    /// Restart from the coarsest level, possibly for a new canvas size.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state = Self::initial_state(width, height);
    }

    /// The state a fresh refiner starts in.
    ///
    /// The first tile is the smallest power of two covering the canvas. An
    /// empty canvas has nothing to refine.
    pub fn initial_state(width: u32, height: u32) -> RefineState {
        if width == 0 || height == 0 {
            return RefineState::Done;
        }
        RefineState::Sizing {
            tile_size: width.max(height).next_power_of_two(),
            cursor: (0, 0),
        }
    }

    pub fn state(&self) -> RefineState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == RefineState::Done
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Plan the next step and advance past it, or `None` once done.
    ///
    /// Blocks whose painted quadrants fall entirely outside the canvas are
    /// skipped without sampling.
    pub fn next_step(&mut self) -> Option<RefineStep> {
        loop {
            let RefineState::Sizing { tile_size, cursor } = self.state else {
                return None;
            };

            if tile_size <= 1 {
                // The bottom-left pixel is never a painted quadrant at any
                // level, so it gets its own sample last.
                self.state = RefineState::Done;
                return Some(RefineStep {
                    sample: (0, 0),
                    tile_size: 1,
                    rects: vec![Rect::new(0, 0, 1, 1)],
                });
            }

            self.advance(tile_size, cursor);

            let (x, y) = cursor;
            let half = tile_size / 2;
            let rects: Vec<Rect> = [
                (x.saturating_add(half), y),
                (x, y.saturating_add(half)),
                (x.saturating_add(half), y.saturating_add(half)),
            ]
            .into_iter()
            .filter_map(|(qx, qy)| Rect::new(qx, qy, half, half).clipped(self.width, self.height))
            .collect();

            if !rects.is_empty() {
                return Some(RefineStep {
                    sample: cursor,
                    tile_size,
                    rects,
                });
            }
        }
    }

    /// Move the cursor one block along in raster order, halving the tile
    /// size once the whole canvas has been walked.
    fn advance(&mut self, tile_size: u32, (x, y): (u32, u32)) {
        let mut next = (x.saturating_add(tile_size), y);
        if next.0 >= self.width {
            next = (0, y.saturating_add(tile_size));
        }

        self.state = if next.1 >= self.height {
            log::debug!("Refinement pass at tile size {} complete", tile_size);
            RefineState::Sizing {
                tile_size: tile_size / 2,
                cursor: (0, 0),
            }
        } else {
            RefineState::Sizing {
                tile_size,
                cursor: next,
            }
        };
    }
}
