//! Pin traffic lights, miss sides, and aim points.
//!
//! Only hazards close to the green influence the reading: ten yards for the
//! pin light and twenty for miss-side scoring. Death hazards anywhere on the
//! hole still keep the pin out of the green tier.

use caddie_core::{
    AimPoint, Hazard, HazardKind, HazardSide, HoleContext, MissDirection, MissPreference,
    MissSide, PinLight, Severity,
};

/// Hazards within this many yards of the green can tuck a pin.
const PIN_RADIUS_YARDS: f64 = 10.0;
/// Hazards within this many yards of the green shape the miss side.
const MISS_RADIUS_YARDS: f64 = 20.0;

/// Classify how safe it is to aim at the flag.
///
/// Two or more severe hazards within ten yards make a red pin; exactly one
/// makes it yellow. Otherwise a death hazard anywhere keeps it yellow.
///
/// # Examples
/// ```
/// use caddie_advisor::classify_pin;
/// use caddie_core::{Hazard, HazardKind, HazardSide, HoleContext, PinLight, Severity};
///
/// let hole = HoleContext::new(5, 4, 385).with_hazard(Hazard::new(
///     HazardKind::Water,
///     HazardSide::Right,
///     5.0,
///     Severity::Death,
/// ));
/// assert_eq!(classify_pin(&hole), PinLight::Yellow);
/// ```
#[must_use]
pub fn classify_pin(hole: &HoleContext) -> PinLight {
    let severe_close = hole
        .hazards
        .iter()
        .filter(|hazard| hazard.severity().is_severe_or_worse() && hazard.within(PIN_RADIUS_YARDS))
        .count();
    match severe_close {
        0 if hole.death_hazard_count() > 0 => PinLight::Yellow,
        0 => PinLight::Green,
        1 => PinLight::Yellow,
        _ => PinLight::Red,
    }
}

/// Worst danger score of the hazards near the green on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideDanger {
    /// Left of the green.
    pub left: u8,
    /// Right of the green.
    pub right: u8,
    /// Short of the green.
    pub front: u8,
    /// Past the green.
    pub back: u8,
}

impl SideDanger {
    /// Score every side of `hole`. Centre hazards score nowhere.
    #[must_use]
    pub fn of(hole: &HoleContext) -> Self {
        let mut danger = Self::default();
        for hazard in hole.hazards.iter().filter(|hazard| hazard.within(MISS_RADIUS_YARDS)) {
            let score = hazard.severity().danger_score();
            let slot = match hazard.side() {
                HazardSide::Left => &mut danger.left,
                HazardSide::Right => &mut danger.right,
                HazardSide::Front => &mut danger.front,
                HazardSide::Back => &mut danger.back,
                HazardSide::Center => continue,
            };
            *slot = (*slot).max(score);
        }
        danger
    }

    /// Danger score for the side a miss would finish on.
    #[must_use]
    pub const fn toward(&self, side: MissPreference) -> u8 {
        match side {
            MissPreference::Left => self.left,
            MissPreference::Right => self.right,
            MissPreference::Short => self.front,
            MissPreference::Long => self.back,
        }
    }
}

/// Recommend which side to miss on.
///
/// The safer side is picked on each axis independently, ties favouring left
/// and short. The lateral pick wins only when the lateral side it rejects is
/// strictly more dangerous than the rejected short/long side.
#[must_use]
pub fn miss_side(hole: &HoleContext) -> MissSide {
    if hole.hazards.is_empty() {
        return MissSide {
            preferred: MissPreference::Short,
            description: "No major trouble: miss short for an easy chip".to_owned(),
            avoid_side: MissPreference::Long,
            avoid: "Avoid going long: harder to get up and down".to_owned(),
        };
    }

    let danger = SideDanger::of(hole);
    let lateral = if danger.left <= danger.right {
        MissPreference::Left
    } else {
        MissPreference::Right
    };
    let depth = if danger.front <= danger.back {
        MissPreference::Short
    } else {
        MissPreference::Long
    };
    let preferred = if danger.toward(lateral.opposite()) > danger.toward(depth.opposite()) {
        lateral
    } else {
        depth
    };
    let avoid_side = preferred.opposite();

    let description = hazards_toward(hole, preferred).map_or_else(
        || format!("Miss {preferred}: safe side, easy recovery"),
        |names| format!("Miss {preferred}: {names} but manageable"),
    );
    let avoid_names = hazards_toward(hole, avoid_side).unwrap_or_else(|| "open".to_owned());
    MissSide {
        preferred,
        description,
        avoid_side,
        avoid: format!("Don't miss {avoid_side}: {avoid_names}"),
    }
}

const fn green_side(miss: MissPreference) -> HazardSide {
    match miss {
        MissPreference::Left => HazardSide::Left,
        MissPreference::Right => HazardSide::Right,
        MissPreference::Short => HazardSide::Front,
        MissPreference::Long => HazardSide::Back,
    }
}

/// Names of the hazard kinds near the green on `miss`'s side, or `None` when
/// that side is open.
fn hazards_toward(hole: &HoleContext, miss: MissPreference) -> Option<String> {
    let side = green_side(miss);
    let nearby: Vec<&Hazard> = hole
        .hazards
        .iter()
        .filter(|hazard| hazard.side() == side && hazard.within(MISS_RADIUS_YARDS))
        .collect();
    let names: Vec<&str> = [
        HazardKind::Water,
        HazardKind::Bunker,
        HazardKind::OutOfBounds,
        HazardKind::Trees,
    ]
    .into_iter()
    .filter(|kind| nearby.iter().any(|hazard| hazard.kind() == *kind))
    .map(|kind| kind.label())
    .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

/// Describe where to aim given the pin light and the player's miss.
///
/// A death hazard on the side the player misses toward adds a "favour the
/// other side" note. Balanced players get the note for either side, right
/// checked first.
#[must_use]
pub fn aim_point(hole: &HoleContext, pin: PinLight, miss: MissDirection) -> AimPoint {
    let mut description = match pin {
        PinLight::Green => "Aim at the flag: green light, no trouble",
        PinLight::Yellow => "Aim between the pin and center of green",
        PinLight::Red => "Aim center of green: sucker pin, don't chase it",
    }
    .to_owned();

    let death_on = |side: HazardSide| {
        hole.hazards
            .iter()
            .any(|hazard| hazard.severity() == Severity::Death && hazard.side() == side)
    };
    let misses_right = matches!(miss, MissDirection::Right | MissDirection::Balanced);
    let misses_left = matches!(miss, MissDirection::Left | MissDirection::Balanced);
    if death_on(HazardSide::Right) && misses_right {
        description.push_str(". Favor the left side: penalty right");
    } else if death_on(HazardSide::Left) && misses_left {
        description.push_str(". Favor the right side: penalty left");
    }
    AimPoint { description }
}
