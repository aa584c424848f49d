pub mod bottom_nav;
pub mod category_progress;
pub mod chart;
pub mod contributor_row;
pub mod kpi_card;
