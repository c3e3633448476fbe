pub mod icon;
pub mod metric_card;
pub mod sdg_section;
pub mod toast;

pub use icon::Icon;
pub use metric_card::MetricCard;
pub use sdg_section::SdgSection;
