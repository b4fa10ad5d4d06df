pub mod city;
pub mod duration;
pub mod filter;
pub mod trip;

pub use city::*;
pub use duration::*;
pub use filter::*;
pub use trip::*;
