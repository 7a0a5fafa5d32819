mod column;
mod compositions;
mod efficiency;
mod feed_quality;
mod reflux_factor;
mod vapor_pressures;

pub use column::Column;
pub use compositions::Compositions;
pub use efficiency::MurphreeEfficiency;
pub use feed_quality::FeedQuality;
pub use reflux_factor::RefluxFactor;
pub use vapor_pressures::VaporPressures;
