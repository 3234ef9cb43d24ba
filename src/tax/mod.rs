//! Tax calculations for Indian GST and TDS compliance

pub mod gst;
pub mod rounding;
pub mod tds;

pub use gst::*;
pub use rounding::*;
pub use tds::*;
