//! Fixed-column CRYST1 record extraction.
//!
//! The only piece of structure-file parsing this crate does itself: the
//! legacy PDB `CRYST1` record carrying the six unit-cell lattice parameters.
//! Everything else in the file is opaque and passed through to the rendering
//! backend's own loader.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Fixed column ranges of the CRYST1 record (0-indexed, end-exclusive).
// These are the externally standardized byte offsets of the format; keep
// them literal rather than derived.
const COL_A: (usize, usize) = (6, 15);
const COL_B: (usize, usize) = (15, 24);
const COL_C: (usize, usize) = (24, 33);
const COL_ALPHA: (usize, usize) = (33, 40);
const COL_BETA: (usize, usize) = (40, 47);
const COL_GAMMA: (usize, usize) = (47, 54);

/// The six scalars defining a crystallographic unit cell's shape.
///
/// Lengths are in Angstroms, angles in degrees. A value of this type always
/// holds six finite numbers — [`parse_cryst1`] refuses to construct it
/// otherwise — but no range validation is applied: geometrically impossible
/// angles pass through and surface as degenerate geometry at draw time.
///
/// Serializes to the `crystalData` wire shape used by the `toggleUnitCell`
/// command.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(deny_unknown_fields)]
pub struct LatticeParameters {
    /// Cell edge length a.
    pub a: f64,
    /// Cell edge length b.
    pub b: f64,
    /// Cell edge length c.
    pub c: f64,
    /// Angle between b and c, degrees.
    pub alpha: f64,
    /// Angle between a and c, degrees.
    pub beta: f64,
    /// Angle between a and b, degrees.
    pub gamma: f64,
}

impl LatticeParameters {
    /// Whether all six values are finite.
    ///
    /// Parsed values always are; deserialized command payloads may not be.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Parse one fixed-column field out of a CRYST1 line.
///
/// `None` for short lines, non-numeric text, or non-finite values.
fn field(line: &str, range: (usize, usize)) -> Option<f64> {
    let value: f64 = line.get(range.0..range.1)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Extract lattice parameters from the first `CRYST1` record in a
/// structure-file text blob.
///
/// Returns `None` when no line starts with `CRYST1` (a normal case — many
/// structures carry no crystallographic data, so nothing is logged) or when
/// the record is present but any of its six fields is missing, unparsable,
/// or non-finite (logged as a warning; the unit-cell feature simply stays
/// unavailable).
#[must_use]
pub fn parse_cryst1(text: &str) -> Option<LatticeParameters> {
    let line = text.lines().find(|l| l.starts_with("CRYST1"))?;

    let parsed = field(line, COL_A).and_then(|a| {
        Some(LatticeParameters {
            a,
            b: field(line, COL_B)?,
            c: field(line, COL_C)?,
            alpha: field(line, COL_ALPHA)?,
            beta: field(line, COL_BETA)?,
            gamma: field(line, COL_GAMMA)?,
        })
    });

    if parsed.is_none() {
        log::warn!("malformed CRYST1 record: {line:?}");
    }
    parsed
}
