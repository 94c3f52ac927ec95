//! Risk mapping from indicator color to pH estimate and infection level

pub mod level;
pub mod mapper;

pub use level::{InfectionLevel, PhEstimate};
pub use mapper::{
    color_name_to_ph, color_to_ph, ph_band, ph_to_color, ph_to_level, Classification,
};
