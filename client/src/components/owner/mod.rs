//! Owner dashboard tabs that carry their own remote traffic.

pub mod promotion_tab;
pub mod statistics_tab;
