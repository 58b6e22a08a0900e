pub mod aggregator;

pub use aggregator::{
    chart_y_range, mean_temperature, rolling_average, temperature_extent, MeanTemperature,
    RollingPoint,
};
