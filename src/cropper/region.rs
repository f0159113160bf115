//! Region structure for pixel rectangles
//!
//! A Region is the bounding box produced by the border cropper. Coordinates
//! are in pixels with (0,0) at the top-left corner of the image.

/// Rectangular pixel area defined by its top-left corner and dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Region covering a whole image of the given size
    pub fn full(width: u32, height: u32) -> Self {
        Region::new(0, 0, width, height)
    }

    /// Build the smallest region containing two inclusive corner pixels
    pub fn from_corners(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Region::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether a pixel lies inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Check whether the region lies inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.end_x() <= width && self.end_y() <= height
    }

    /// Format as "x,y widthxheight" for logs and reports
    pub fn describe(&self) -> String {
        format!("{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}
