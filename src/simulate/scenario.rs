use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::{
    allocate::AllocatorOptions,
    demographics::{Cell, PerCell},
    party::{PartyProfile, Swing, default_profile},
};

/// Every user-controlled input of a simulation run.
///
/// A scenario is immutable input: each run takes one by reference and the
/// engine never reads parameters from anywhere else. All fields are optional
/// in the JSON form and fall back to [`Scenario::default`], down to the
/// individual cells of `meters`, `swings` and `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Share of each cell's national turnout cap to release, in [0, 1].
    #[serde(deserialize_with = "meters_or_default")]
    pub meters: PerCell<f64>,
    /// Maximum extra turnout per region, as a fraction of the cell's baseline, in (0, 1].
    pub cap_factor: f64,
    /// Republican and Third swings per cell, in percentage points.
    #[serde(deserialize_with = "swings_or_default")]
    pub swings: PerCell<Swing>,
    /// Baseline party preference per cell. A cell given here replaces its whole triple.
    #[serde(deserialize_with = "profile_or_default")]
    pub profile: PartyProfile,
    pub allocator: AllocatorOptions,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            meters: PerCell::splat(0.0),
            cap_factor: Self::DEFAULT_CAP_FACTOR,
            swings: PerCell::splat(Swing::default()),
            profile: default_profile(),
            allocator: AllocatorOptions::default(),
        }
    }
}

impl Scenario {
    pub const DEFAULT_CAP_FACTOR: f64 = 0.20;

    /// Parse a scenario from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("[Scenario::from_json_str] invalid scenario JSON")
    }

    /// Read a scenario from a JSON file.
    pub fn read_json(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("[Scenario::read_json] Failed to read scenario file: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("[Scenario::read_json] Failed to parse {}", path.display()))
    }

    pub fn with_meter(mut self, cell: Cell, meter: f64) -> Self {
        self.meters[cell] = meter;
        self
    }

    pub fn with_swing(mut self, cell: Cell, swing: Swing) -> Self {
        self.swings[cell] = swing;
        self
    }

    pub fn with_cap_factor(mut self, cap_factor: f64) -> Self {
        self.cap_factor = cap_factor;
        self
    }

    /// A copy with every control clamped to its valid domain.
    ///
    /// Meters and the cap-factor are clamped to [0, 1] (non-finite values go to
    /// 0); non-finite swings become 0; invalid allocator settings revert to
    /// their defaults. Each adjustment is logged.
    pub fn sanitized(&self) -> Scenario {
        let mut scenario = self.clone();

        for cell in Cell::order() {
            let meter = self.meters[cell];
            let clamped = clamp_unit(meter);
            if clamped != meter {
                warn!(cell = cell.to_str(), meter, clamped, "turnout meter out of range; clamped");
            }
            scenario.meters[cell] = clamped;

            let swing = self.swings[cell];
            let finite = Swing::new(finite_or_zero(swing.republican), finite_or_zero(swing.third));
            if finite != swing {
                warn!(cell = cell.to_str(), ?swing, "non-finite swing replaced with 0");
            }
            scenario.swings[cell] = finite;
        }

        let cap_factor = clamp_unit(self.cap_factor);
        if cap_factor != self.cap_factor {
            warn!(cap_factor = self.cap_factor, clamped = cap_factor, "cap factor out of range; clamped");
        }
        scenario.cap_factor = cap_factor;

        let defaults = AllocatorOptions::default();
        if self.allocator.max_iterations == 0 {
            warn!("allocator max_iterations must be positive; using {}", defaults.max_iterations);
            scenario.allocator.max_iterations = defaults.max_iterations;
        }
        if !(self.allocator.tolerance.is_finite() && self.allocator.tolerance >= 0.0) {
            warn!(tolerance = self.allocator.tolerance, "invalid allocator tolerance; using {}", defaults.tolerance);
            scenario.allocator.tolerance = defaults.tolerance;
        }

        scenario
    }
}

/// Per-cell values where any cell may be left out of the JSON.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialCells<T> {
    wc: Option<T>,
    wnc: Option<T>,
    nwc: Option<T>,
    nwnc: Option<T>,
}

impl<T> PartialCells<T> {
    fn or(self, defaults: PerCell<T>) -> PerCell<T> {
        PerCell {
            wc: self.wc.unwrap_or(defaults.wc),
            wnc: self.wnc.unwrap_or(defaults.wnc),
            nwc: self.nwc.unwrap_or(defaults.nwc),
            nwnc: self.nwnc.unwrap_or(defaults.nwnc),
        }
    }
}

fn meters_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PerCell<f64>, D::Error> {
    Ok(PartialCells::deserialize(deserializer)?.or(PerCell::splat(0.0)))
}

fn swings_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PerCell<Swing>, D::Error> {
    Ok(PartialCells::deserialize(deserializer)?.or(PerCell::splat(Swing::default())))
}

fn profile_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PartyProfile, D::Error> {
    Ok(PartialCells::deserialize(deserializer)?.or(default_profile()))
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
