//! Sea and tunnel crossings between the UK/Ireland and mainland Europe.
//!
//! Crossings are a fixed reference table bundled with the crate. This
//! module decides whether a trip needs one and ranks the candidates by
//! estimated door-to-door time.

mod error;
mod insert;
mod rank;
mod region;
mod table;

pub use error::CrossingError;
pub use insert::{SeaLegAware, disembark_stop_id, embark_stop_id, insert_crossing};
pub use rank::{
    CrossingPreference, ROAD_SPEED_KMH, RankedCrossing, apply_preference, rank,
};
pub use region::{Region, classify, needs_crossing};
pub use table::{
    ChannelCrossing, CostEstimate, CrossingMode, CrossingRegion, CrossingTable, Terminal,
};
