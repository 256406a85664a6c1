use nalgebra::{Matrix4, Perspective3, Point3, Rotation3, Vector3};

// Perched above and slightly right of the player, looking down the track.
const FOLLOW_OFFSET: (f32, f32, f32) = (1.0, 10.0, 2.0);
const PITCH_DEG: f32 = -60.0;
const YAW_DEG: f32 = 20.0;
const FOV_Y: f32 = 0.8;
const ASPECT: f32 = 0.75;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Follow camera with a fixed tilt. Only used to answer "is this still on
/// screen" for lane eviction; it never draws anything.
pub struct Camera {
    eye: Point3<f32>,
    forward: Vector3<f32>,
    projection: Perspective3<f32>,
}

impl Camera {
    pub fn new() -> Self {
        let tilt = Rotation3::from_axis_angle(&Vector3::y_axis(), YAW_DEG.to_radians())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), PITCH_DEG.to_radians());
        Camera {
            eye: Point3::new(FOLLOW_OFFSET.0, FOLLOW_OFFSET.1, FOLLOW_OFFSET.2),
            forward: tilt * -Vector3::z(),
            projection: Perspective3::new(ASPECT, FOV_Y, NEAR, FAR),
        }
    }

    /// Keep the fixed offset from the player as it hops around.
    pub fn follow(&mut self, focus_x: f32, focus_z: f32) {
        self.eye = Point3::new(
            focus_x + FOLLOW_OFFSET.0,
            FOLLOW_OFFSET.1,
            focus_z + FOLLOW_OFFSET.2,
        );
    }

    /// True when any part of the span `x - half_width ..= x + half_width`
    /// at depth `z` lands inside the view frustum.
    pub fn sees_span(&self, x: f32, z: f32, half_width: f32) -> bool {
        let samples = [x - half_width, x, x + half_width];
        samples
            .into_iter()
            .any(|sx| self.sees_point(Point3::new(sx, 0.0, z)))
    }

    fn sees_point(&self, point: Point3<f32>) -> bool {
        let view = Matrix4::look_at_rh(&self.eye, &(self.eye + self.forward), &Vector3::y());
        let in_view = view.transform_point(&point);
        // Behind the camera plane; projecting it would flip the sign.
        if in_view.z >= -NEAR {
            return false;
        }
        let ndc = self.projection.project_point(&in_view);
        ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z.abs() <= 1.0
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
