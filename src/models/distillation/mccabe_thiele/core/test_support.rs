use uom::si::{f64::Pressure, pressure::kilopascal};

use super::{
    Column, Compositions, FeedQuality, MurphreeEfficiency, RefluxFactor, VaporPressures,
};

/// Builds a column from raw scalars, panicking on invalid values.
pub(super) fn column(
    light_vapor_pressure: f64,
    heavy_vapor_pressure: f64,
    distillate: f64,
    bottoms: f64,
    feed: f64,
    feed_quality: f64,
    reflux_factor: f64,
    efficiency: f64,
) -> Column {
    Column {
        vapor_pressures: VaporPressures::new(
            Pressure::new::<kilopascal>(light_vapor_pressure),
            Pressure::new::<kilopascal>(heavy_vapor_pressure),
        )
        .unwrap(),
        compositions: Compositions::new(distillate, bottoms, feed).unwrap(),
        feed_quality: FeedQuality::new(feed_quality).unwrap(),
        reflux_factor: RefluxFactor::new(reflux_factor).unwrap(),
        efficiency: MurphreeEfficiency::new(efficiency).unwrap(),
    }
}

/// The methanol-water-like reference column used across the test suite.
pub(super) fn reference_column() -> Column {
    column(300.0, 74.3, 0.913, 0.087, 0.5, 0.5, 1.8, 0.75)
}
