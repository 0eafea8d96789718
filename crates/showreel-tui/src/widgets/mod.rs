mod banner;
mod carousel;
mod footer;
mod stats;
mod status_bar;

pub use banner::BannerWidget;
pub use carousel::CarouselWidget;
pub use footer::FooterWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;
