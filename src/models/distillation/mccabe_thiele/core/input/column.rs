use crate::models::distillation::mccabe_thiele::core::{
    Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures,
};

/// Complete definition of a binary distillation design problem.
///
/// Every field is a validated input type, so a `Column` that exists is a
/// well-posed problem: the construction needs no further input checks.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Pure-component vapor pressures of the binary pair.
    pub vapor_pressures: VaporPressures,

    /// Distillate, bottoms, and feed compositions.
    pub compositions: Compositions,

    /// Thermal condition of the feed stream.
    pub feed_quality: FeedQuality,

    /// Multiplier on the minimum reflux ratio.
    pub reflux_factor: RefluxFactor,

    /// Murphree vapor-phase stage efficiency.
    pub efficiency: MurphreeEfficiency,
}
