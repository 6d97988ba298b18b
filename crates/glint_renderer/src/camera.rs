//! Pinhole camera for ray generation.

use glint_math::{Point3, Ray, Vector3};

/// Camera looking down -Z from the origin through a flat viewport.
///
/// The derived viewport geometry is recomputed by every builder method, so a
/// `Camera` is always ready to generate rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    // Lens settings
    aspect_ratio: f64,
    viewport_height: f64,
    focal_length: f64,

    // Derived viewport geometry
    origin: Point3,
    viewport_x: Vector3,
    viewport_y: Vector3,
    bottom_left_corner: Point3,
}

impl Camera {
    pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 2.0;
    pub const DEFAULT_FOCAL_LENGTH: f64 = 1.0;

    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            aspect_ratio: Self::DEFAULT_ASPECT_RATIO,
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            focal_length: Self::DEFAULT_FOCAL_LENGTH,
            origin: Point3::ZERO,
            viewport_x: Vector3::ZERO,
            viewport_y: Vector3::ZERO,
            bottom_left_corner: Point3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.initialize();
        self
    }

    /// Set the viewport height in scene units.
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self.initialize();
        self
    }

    /// Set the distance from the eye to the viewport plane.
    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self.initialize();
        self
    }

    fn initialize(&mut self) {
        let viewport_width = self.viewport_height * self.aspect_ratio;

        self.origin = Point3::ZERO;
        self.viewport_x = Vector3::new(viewport_width, 0.0, 0.0);
        self.viewport_y = Vector3::new(0.0, self.viewport_height, 0.0);
        self.bottom_left_corner = self.origin
            - self.viewport_x / 2.0
            - self.viewport_y / 2.0
            - Vector3::new(0.0, 0.0, self.focal_length);
    }

    /// Ray from the eye through a point on the viewport.
    ///
    /// `(0, 0)` is the bottom-left corner of the viewport, `(1, 1)` the
    /// top-right. Values outside that range are not clamped.
    pub fn get_ray(&self, x_proportion: f64, y_proportion: f64) -> Ray {
        let viewport_point = self.bottom_left_corner
            + x_proportion * self.viewport_x
            + y_proportion * self.viewport_y;

        Ray::new(self.origin, viewport_point - self.origin)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn viewport_x(&self) -> Vector3 {
        self.viewport_x
    }

    pub fn viewport_y(&self) -> Vector3 {
        self.viewport_y
    }

    pub fn bottom_left_corner(&self) -> Point3 {
        self.bottom_left_corner
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
