//! Path simplification algorithms and their registry
//!
//! Both algorithms share one capability, [`Simplifier`], and are selected through
//! the closed tag set [`SimplifierKind`]. Timing, validation and logging live in
//! [`simplify_with_report`] so they apply uniformly to every variant.

mod douglas_peucker;
mod greedy;
mod report;

pub use douglas_peucker::DouglasPeucker;
pub use greedy::Greedy;
pub use report::{SimplificationReport, simplify_all, simplify_with_report};

use crate::{Path, Result, SimplifyError};
use std::fmt;
use std::str::FromStr;

/// Reduces a path to fewer points while bounding the deviation of dropped points
///
/// Implementations must preserve the first and last coordinate, keep the input
/// radius and return inputs with two or fewer points unchanged. They assume the
/// tolerance has already been validated (see [`simplify_with_report`]).
pub trait Simplifier: Send + Sync {
    /// The registry tag of this algorithm
    fn kind(&self) -> SimplifierKind;

    /// Simplify `path` so no dropped point deviates more than `tolerance_km`
    fn simplify(&self, path: &Path, tolerance_km: f64) -> Path;
}

/// Closed set of available simplification algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimplifierKind {
    /// Recursive divide-and-conquer
    DouglasPeucker,
    /// Single forward pass growing a window until a point deviates
    Greedy,
}

impl SimplifierKind {
    /// Every registered algorithm, in a stable order
    pub const ALL: [SimplifierKind; 2] = [SimplifierKind::DouglasPeucker, SimplifierKind::Greedy];

    /// Canonical name, also used in output file names
    pub fn name(&self) -> &'static str {
        match self {
            SimplifierKind::DouglasPeucker => "douglas-peucker",
            SimplifierKind::Greedy => "greedy",
        }
    }
}

impl fmt::Display for SimplifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimplifierKind {
    type Err = SimplifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "douglas-peucker" | "douglas_peucker" | "dp" | "divide-and-conquer" => {
                Ok(SimplifierKind::DouglasPeucker)
            }
            "greedy" | "greedy-window" => Ok(SimplifierKind::Greedy),
            _ => Err(SimplifyError::UnknownVariant(s.to_string())),
        }
    }
}

static DOUGLAS_PEUCKER: DouglasPeucker = DouglasPeucker;
static GREEDY: Greedy = Greedy;

/// Get the algorithm instance registered for `kind`
pub fn get_simplifier(kind: SimplifierKind) -> &'static dyn Simplifier {
    match kind {
        SimplifierKind::DouglasPeucker => &DOUGLAS_PEUCKER,
        SimplifierKind::Greedy => &GREEDY,
    }
}

/// Look up an algorithm by name, failing with `UnknownVariant` for unregistered names
pub fn get_simplifier_by_name(name: &str) -> Result<&'static dyn Simplifier> {
    name.parse().map(get_simplifier)
}
