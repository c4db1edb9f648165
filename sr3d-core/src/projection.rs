//! Camera configuration and projection utilities

use log::debug;

use crate::matrix::Matrix4x4;
use crate::vector::Vector3;

/// Camera configuration for 3D rendering
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Full vertical field of view in radians
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vector3::new(0.0, 0.0, 5.0),
            target: Vector3::zero(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4x4 {
        Matrix4x4::look_at(self.eye, self.target, self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4x4 {
        Matrix4x4::perspective(self.fovy, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Matrix4x4 {
        debug!(
            "building view-projection: eye={} target={} fovy={} aspect={} near={} far={}",
            self.eye, self.target, self.fovy, self.aspect, self.near, self.far
        );
        self.build_view_projection()
    }

    fn build_view_projection(&self) -> Matrix4x4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Transform a model-space point to normalized device coordinates.
    ///
    /// Rebuilds the matrices on every call without logging; hoist
    /// [`view_projection`](Self::view_projection) out of per-vertex loops.
    /// No clipping happens; points behind the camera come back mirrored.
    pub fn project(&self, point: Vector3, model: &Matrix4x4) -> Vector3 {
        let mvp = &self.build_view_projection() * model;
        mvp * point
    }

    /// Map NDC x/y from `[-1, 1]` to pixel coordinates with y pointing down.
    /// Depth passes through unchanged.
    pub fn to_screen(ndc: Vector3, width: u32, height: u32) -> Vector3 {
        Vector3::new(
            (ndc.x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc.y) * 0.5 * height as f32,
            ndc.z,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts debug records announcing a view-projection build from `eye`
    struct BuildCounter {
        builds: AtomicUsize,
    }

    impl Log for BuildCounter {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Trace
        }

        fn log(&self, record: &Record) {
            if record.level() == Level::Debug
                && record
                    .args()
                    .to_string()
                    .starts_with("building view-projection: eye=(7, 7, 7)")
            {
                self.builds.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    static COUNTER: BuildCounter = BuildCounter {
        builds: AtomicUsize::new(0),
    };

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.eye, Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(Camera::default(), camera);
    }

    #[test]
    fn test_view_matrix() {
        let camera = Camera::default();
        let p = camera.view_matrix() * Vector3::zero();
        assert_abs_diff_eq!(p, Vector3::new(0.0, 0.0, -5.0), epsilon = 1e-6);
    }

    #[test]
    fn test_project_target_lands_at_center() {
        let camera = Camera::new(640, 480);
        let ndc = camera.project(Vector3::zero(), &Matrix4x4::identity());
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);

        let screen = Camera::to_screen(ndc, 640, 480);
        assert_abs_diff_eq!(screen.x, 320.0, epsilon = 1e-3);
        assert_abs_diff_eq!(screen.y, 240.0, epsilon = 1e-3);
    }

    #[test]
    fn test_project_applies_model() {
        let camera = Camera::new(100, 100);
        let model = Matrix4x4::translation(0.0, 1.0, 0.0);
        let ndc = camera.project(Vector3::zero(), &model);
        // above the view axis projects into the upper half
        assert!(ndc.y > 0.0);
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_project_does_not_log_per_point() {
        let _ = log::set_logger(&COUNTER);
        log::set_max_level(LevelFilter::Trace);

        // distinct eye so records from other tests are not counted
        let mut camera = Camera::new(320, 200);
        camera.eye = Vector3::new(7.0, 7.0, 7.0);
        let model = Matrix4x4::identity();

        let before = COUNTER.builds.load(Ordering::SeqCst);
        for i in 0..100 {
            camera.project(Vector3::new(i as f32 * 0.01, 0.0, 0.0), &model);
        }
        let vp = camera.view_projection();
        let after = COUNTER.builds.load(Ordering::SeqCst);
        assert_eq!(after - before, 1);

        let p = Vector3::new(0.5, -0.25, 1.0);
        assert_eq!(camera.project(p, &model), (vp * model) * p);
    }

    #[test]
    fn test_to_screen_corners() {
        let top_left = Camera::to_screen(Vector3::new(-1.0, 1.0, 0.5), 200, 100);
        assert_eq!(top_left, Vector3::new(0.0, 0.0, 0.5));
        let bottom_right = Camera::to_screen(Vector3::new(1.0, -1.0, 0.0), 200, 100);
        assert_eq!(bottom_right, Vector3::new(200.0, 100.0, 0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_camera_round_trips_through_json() {
        let camera = Camera::new(1920, 1080);
        let json = serde_json::to_string(&camera).unwrap();
        let restored: Camera = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, camera);
    }
}
