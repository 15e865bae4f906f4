//! Merging a chosen crossing into a stop sequence.
//!
//! The crossing's two terminals become ordinary intermediate stops. The
//! sea leg between them is reported as zero driving distance by
//! [`SeaLegAware`], so the segmenter does not count it against a day's
//! driving limit.

use crate::domain::{Stop, StopRole};
use crate::geo::DistanceProvider;

use super::region::classify;
use super::table::{ChannelCrossing, CrossingMode};

const ID_PREFIX: &str = "crossing:";
const EMBARK_SUFFIX: &str = ":embark";
const DISEMBARK_SUFFIX: &str = ":disembark";

/// Stop id used for the terminal where the vehicle boards.
pub fn embark_stop_id(crossing_id: &str) -> String {
    format!("{ID_PREFIX}{crossing_id}{EMBARK_SUFFIX}")
}

/// Stop id used for the terminal where the vehicle leaves.
pub fn disembark_stop_id(crossing_id: &str) -> String {
    format!("{ID_PREFIX}{crossing_id}{DISEMBARK_SUFFIX}")
}

/// Insert a crossing's terminals at the first leg that crosses the sea.
///
/// Returns a new sequence; `stops` is left untouched. If no leg crosses
/// between the UK/Ireland and the mainland the sequence is returned
/// unchanged.
pub fn insert_crossing(stops: &[Stop], crossing: &ChannelCrossing) -> Vec<Stop> {
    let Some(i) = stops
        .windows(2)
        .position(|pair| super::needs_crossing(pair[0].coordinate, pair[1].coordinate))
    else {
        return stops.to_vec();
    };

    let here = classify(stops[i].coordinate);
    let (embark, disembark) = if crossing.departure.side() == here {
        (&crossing.departure, &crossing.arrival)
    } else {
        (&crossing.arrival, &crossing.departure)
    };

    let verb = match crossing.mode {
        CrossingMode::Ferry => "Sail",
        CrossingMode::Tunnel => "Shuttle",
    };
    let notes = format!(
        "{verb} {} ({} min, {})",
        crossing.name,
        crossing.duration_mins,
        crossing.operators.join(", ")
    );

    let embark_stop = Stop::new(
        embark_stop_id(&crossing.id),
        embark.name.clone(),
        embark.coordinate,
        StopRole::Intermediate,
    )
    .with_notes(notes.clone());
    let disembark_stop = Stop::new(
        disembark_stop_id(&crossing.id),
        disembark.name.clone(),
        disembark.coordinate,
        StopRole::Intermediate,
    )
    .with_notes(notes);

    let mut merged = Vec::with_capacity(stops.len() + 2);
    merged.extend_from_slice(&stops[..=i]);
    merged.push(embark_stop);
    merged.push(disembark_stop);
    merged.extend_from_slice(&stops[i + 1..]);
    merged
}

/// Distance provider that treats inserted sea legs as zero driving.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeaLegAware<D> {
    inner: D,
}

impl<D> SeaLegAware<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DistanceProvider> DistanceProvider for SeaLegAware<D> {
    fn leg_km(&self, from: &Stop, to: &Stop) -> f64 {
        let sea_leg = from
            .id
            .strip_prefix(ID_PREFIX)
            .and_then(|rest| rest.strip_suffix(EMBARK_SUFFIX))
            .is_some_and(|crossing_id| to.id == disembark_stop_id(crossing_id));

        if sea_leg {
            0.0
        } else {
            self.inner.leg_km(from, to)
        }
    }
}
