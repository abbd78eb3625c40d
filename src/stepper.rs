use crate::constants::ANOMALY_RATE;
use crate::geometry::OrbitFrame;
use crate::{Num, OrbitalElements, Vec3, TWO_PI};

/// Advances the true anomaly of the orbiting body once per frame.
///
/// The step is not derived from the orbital angular velocity. It scales with
/// `(a / r)^2`, so the body sweeps faster near periapsis and slower near
/// apoapsis, which is enough to read Kepler's second law off the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyStepper {
    true_anomaly: Num,
    rate: Num,
}

impl Default for AnomalyStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyStepper {
    pub fn new() -> Self {
        Self::with_rate(ANOMALY_RATE)
    }

    pub fn with_rate(rate: Num) -> Self {
        Self {
            true_anomaly: 0.0,
            rate,
        }
    }

    pub fn true_anomaly(&self) -> Num {
        self.true_anomaly
    }

    /// Moves the body one frame along the orbit.
    ///
    /// Returns the radius at the true anomaly the step started from.
    pub fn step(&mut self, elements: &OrbitalElements) -> Num {
        let a = elements.semi_major_axis();
        let r = elements.radius_at(self.true_anomaly);

        self.true_anomaly += self.rate * (a / r).powi(2);

        if self.true_anomaly >= TWO_PI {
            log::debug!("Orbit completed, resetting true anomaly");
            self.true_anomaly = 0.0;
        }

        r
    }

    pub fn position(
        &self,
        elements: &OrbitalElements,
        frame: OrbitFrame,
    ) -> Vec3 {
        elements.position_at(self.true_anomaly, frame)
    }
}
