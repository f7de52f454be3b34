pub mod chart;
pub mod enriched;
pub mod totals;

pub use chart::{stock_series, to_chart_series, ChartSeries};
pub use enriched::{filter_by_query, join_sales, to_table_rows, EnrichedSale, FilterMode, SaleRow};
pub use totals::{compute_totals, Totals};
