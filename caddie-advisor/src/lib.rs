//! Shot recommendations for the caddie engine.
//!
//! This crate provides [`CaddieAdvisor`], the default implementation of the
//! [`Advisor`](caddie_core::Advisor) trait, together with the building blocks
//! it composes:
//!
//! - [`adjust_distance`] turns a measured distance into the distance the shot
//!   plays, one [`ShotAdjustment`](caddie_core::ShotAdjustment) per factor;
//! - [`select_club`] picks the longest club that fits the played distance;
//! - [`classify_pin`], [`miss_side`], and [`aim_point`] read the hole's
//!   hazards.
//!
//! Each piece is usable on its own.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjust;
mod advisor;
mod club_select;
mod danger;
mod reasoning;

pub use adjust::{
    AdjustedDistance, Factor, ShotConditions, WindEffect, adjust_distance, adjust_distance_with,
    altitude_adjustment, elevation_adjustment, temperature_adjustment, turf_adjustment,
    wind_adjustment, wind_effect,
};
pub use advisor::{AdvisorConfig, CaddieAdvisor, aggressiveness};
pub use club_select::{Bias, ClubChoice, select_club};
pub use danger::{SideDanger, aim_point, classify_pin, miss_side};
pub use reasoning::{ReasoningInputs, reasoning};
