pub mod axes;
pub mod bar;
pub mod line;
pub mod model;
pub mod pie;

pub use bar::BarChart;
pub use line::LineChart;
pub use model::{ChartConfig, Orientation, PieSlice, Series};
pub use pie::PieChart;
