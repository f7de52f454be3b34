pub mod charts;
pub mod stat_card;
