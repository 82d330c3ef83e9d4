/// Number of calendar months covered by the overview trend series
pub const TREND_MONTHS: usize = 12;

/// Number of trailing months used for the KPI sparkline
pub const SPARKLINE_MONTHS: usize = 6;

/// Maximum rendered length of an investment name in chart series
pub const SERIES_NAME_MAX_LEN: usize = 14;

/// Cycle of line colors assigned to per-investment daily series
pub const SERIES_COLORS: [&str; 6] = [
    "#38bdf8", "#34d399", "#a78bfa", "#fbbf24", "#f472b6", "#2dd4bf",
];
