use std::fmt;

use crate::error::ElementsError;
use crate::geometry::{self, OrbitFrame, OrbitPath};
use crate::{Mat3, Num, Vec3};

/// The orbital elements one of the fields of an element set refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Eccentricity,
    SemiMajorAxis,
    Inclination,
    AscendingNode,
    ArgumentOfPeriapsis,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Eccentricity,
        Field::SemiMajorAxis,
        Field::Inclination,
        Field::AscendingNode,
        Field::ArgumentOfPeriapsis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Eccentricity => "eccentricity",
            Field::SemiMajorAxis => "semi-major axis",
            Field::Inclination => "inclination",
            Field::AscendingNode => "longitude of the ascending node",
            Field::ArgumentOfPeriapsis => "argument of periapsis",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An element set as handed over by an acquisition source, before validation.
///
/// Angles are in radians, the semi-major axis in km.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawElements {
    pub eccentricity: Num,
    pub semi_major_axis: Num,
    pub inclination: Num,
    pub ascending_node: Num,
    pub argument_of_periapsis: Num,
}

impl RawElements {
    pub fn get(&self, field: Field) -> Num {
        match field {
            Field::Eccentricity => self.eccentricity,
            Field::SemiMajorAxis => self.semi_major_axis,
            Field::Inclination => self.inclination,
            Field::AscendingNode => self.ascending_node,
            Field::ArgumentOfPeriapsis => self.argument_of_periapsis,
        }
    }
}

/// A validated, closed (elliptic) orbit.
///
/// Can only be built through [`OrbitalElements::new`], so `0 <= e < 1` and `a > 0`
/// always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawElements", into = "RawElements"))]
pub struct OrbitalElements {
    eccentricity: Num,
    semi_major_axis: Num,
    inclination: Num,
    ascending_node: Num,
    argument_of_periapsis: Num,
}

impl OrbitalElements {
    pub fn new(raw: RawElements) -> Result<Self, ElementsError> {
        let non_finite = Field::ALL.into_iter().find(|f| !raw.get(*f).is_finite());
        if let Some(field) = non_finite {
            return Err(ElementsError::NonFinite(field));
        }

        let e = raw.eccentricity;
        if !(0.0..1.0).contains(&e) {
            return Err(ElementsError::Eccentricity(e));
        }

        let a = raw.semi_major_axis;
        if a <= 0.0 {
            return Err(ElementsError::SemiMajorAxis(a));
        }

        log::info!("Accepted orbit with e = {e}, a = {a} km");

        Ok(Self {
            eccentricity: e,
            semi_major_axis: a,
            inclination: raw.inclination,
            ascending_node: raw.ascending_node,
            argument_of_periapsis: raw.argument_of_periapsis,
        })
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    pub fn semi_major_axis(&self) -> Num {
        self.semi_major_axis
    }

    pub fn inclination(&self) -> Num {
        self.inclination
    }

    pub fn ascending_node(&self) -> Num {
        self.ascending_node
    }

    pub fn argument_of_periapsis(&self) -> Num {
        self.argument_of_periapsis
    }

    /// Distance of the closest point from the focus
    pub fn periapsis(&self) -> Num {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Distance of the farthest point from the focus
    pub fn apoapsis(&self) -> Num {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    #[inline]
    pub fn radius_at(&self, v: Num) -> Num {
        geometry::radius(self.semi_major_axis, self.eccentricity, v)
    }

    #[inline]
    pub fn position_at(&self, v: Num, frame: OrbitFrame) -> Vec3 {
        let position =
            geometry::position(self.semi_major_axis, self.eccentricity, v);

        self.rotation(frame) * position
    }

    /// The orbit trace sampled at `samples` evenly spaced true anomalies.
    pub fn path(&self, samples: usize, frame: OrbitFrame) -> OrbitPath {
        geometry::orbit_path(self.semi_major_axis, self.eccentricity, samples)
            .with_rotation(self.rotation(frame))
    }

    /// Rotation taking perifocal coordinates into `frame`.
    pub fn rotation(&self, frame: OrbitFrame) -> Mat3 {
        match frame {
            OrbitFrame::Perifocal => Mat3::IDENTITY,
            OrbitFrame::Equatorial => self.perifocal_to_equatorial(),
        }
    }

    #[inline(always)]
    fn perifocal_to_equatorial(&self) -> Mat3 {
        let mut m = Mat3::IDENTITY;

        let Ω = self.ascending_node;
        let i = self.inclination;
        let ω = self.argument_of_periapsis;

        m *= Mat3::from_rotation_z(Ω);
        m *= Mat3::from_rotation_x(i);
        m *= Mat3::from_rotation_z(ω);

        m
    }
}

impl TryFrom<RawElements> for OrbitalElements {
    type Error = ElementsError;

    fn try_from(raw: RawElements) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<OrbitalElements> for RawElements {
    fn from(elements: OrbitalElements) -> Self {
        RawElements {
            eccentricity: elements.eccentricity,
            semi_major_axis: elements.semi_major_axis,
            inclination: elements.inclination,
            ascending_node: elements.ascending_node,
            argument_of_periapsis: elements.argument_of_periapsis,
        }
    }
}
