use crate::constants::{INITIAL_ZOOM_FACTOR, ZOOM_STEP_DIVISOR};
use crate::{vec3, Mat4, Num, OrbitalElements};

/// Discrete input the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Pointer moved by `(dx, dy)`; only rotates while the drag button is held
    Drag { dx: Num, dy: Num, held: bool },
    ZoomIn,
    ZoomOut,
    Quit,
}

/// Camera distance and rotation driven by pointer drags and zoom keys.
///
/// The camera sits on -Z at `zoom_distance` (a negative number). Pitch and
/// yaw are degrees and accumulate without bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    zoom_distance: Num,
    pitch: Num,
    yaw: Num,
}

/// Camera distance that fits the whole orbit with some margin.
pub fn initial_zoom(a: Num, e: Num) -> Num {
    let apoapsis = a * (1.0 + e);

    -apoapsis * INITIAL_ZOOM_FACTOR
}

impl CameraRig {
    pub fn new(elements: &OrbitalElements) -> Self {
        Self::with_zoom(initial_zoom(
            elements.semi_major_axis(),
            elements.eccentricity(),
        ))
    }

    pub fn with_zoom(zoom_distance: Num) -> Self {
        Self {
            zoom_distance,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn zoom_distance(&self) -> Num {
        self.zoom_distance
    }

    pub fn pitch(&self) -> Num {
        self.pitch
    }

    pub fn yaw(&self) -> Num {
        self.yaw
    }

    pub fn drag(&mut self, dx: Num, dy: Num, held: bool) {
        if !held {
            return;
        }

        self.pitch += dy;
        self.yaw += dx;
    }

    /// Moves the camera a tenth of the way towards the origin.
    pub fn zoom_in(&mut self) {
        self.zoom_distance -= self.zoom_distance / ZOOM_STEP_DIVISOR;
    }

    /// Moves the camera a tenth of its distance away from the origin.
    pub fn zoom_out(&mut self) {
        self.zoom_distance += self.zoom_distance / ZOOM_STEP_DIVISOR;
    }

    /// Applies `command` and returns whether the viewer should keep running.
    pub fn apply(&mut self, command: InputCommand) -> bool {
        match command {
            InputCommand::Drag { dx, dy, held } => self.drag(dx, dy, held),
            InputCommand::ZoomIn => self.zoom_in(),
            InputCommand::ZoomOut => self.zoom_out(),
            InputCommand::Quit => return false,
        }

        true
    }

    /// World to view transform.
    ///
    /// Translates first and rotates after, so the scene spins around the
    /// world origin rather than around the camera.
    pub fn view_matrix(&self) -> Mat4 {
        let mut m = Mat4::IDENTITY;

        m *= Mat4::from_translation(vec3(0.0, 0.0, self.zoom_distance));
        m *= Mat4::from_rotation_x(self.pitch.to_radians());
        m *= Mat4::from_rotation_y(self.yaw.to_radians());

        m
    }
}
