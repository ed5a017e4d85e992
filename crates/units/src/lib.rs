pub mod length;
pub mod mass;


pub use length::{EARTH_RADIUS_KM, KM_PER_LIGHT_YEAR, Length, SOLAR_RADIUS_KM};
pub use mass::{JUPITER_TO_EARTH_MASSES, Mass};
