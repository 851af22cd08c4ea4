//! Place-name table backing the default distance estimator.

use super::{DistanceEstimator, MAX_TRIP_KM, MIN_TRIP_KM};

/// Reference distance used for hospitals and medical centres not in the table.
const HOSPITAL_KM: u32 = 5;
/// Reference distance used for stations not in the table.
const STATION_KM: u32 = 3;
/// Reference distance used for municipal offices not in the table.
const MUNICIPAL_OFFICE_KM: u32 = 4;
/// Reference distance used when nothing matches.
const FALLBACK_KM: u32 = 5;

const HOSPITAL_KEYWORDS: &[&str] = &["病院", "医療", "hospital", "medical"];
const STATION_KEYWORDS: &[&str] = &["駅", "station"];
const MUNICIPAL_OFFICE_KEYWORDS: &[&str] = &["市役所", "役場", "city hall", "ward office"];

const WAKAYAMA: &[(&str, u32)] = &[
    ("和歌山駅", 0),
    ("和歌山市駅", 2),
    ("和歌山城", 1),
    ("和歌山県立医科大学附属病院", 3),
    ("日本赤十字社和歌山医療センター", 5),
    ("和歌山労災病院", 8),
    ("和歌山市民病院", 4),
    ("紀の川市", 15),
    ("岩出市", 12),
    ("海南市", 10),
    ("橋本市", 25),
    ("有田市", 20),
];

/// Fixed lookup table from place-name fragments to a reference distance from
/// the city centre, in kilometres.
///
/// Lookups are case-insensitive substring matches tried in declaration
/// order; the first matching entry wins. Text matching no entry falls back
/// to category keywords (hospital, station, municipal office) and finally to
/// a default of 5 km.
///
/// # Examples
/// ```
/// use carefare_core::{DistanceEstimator, Gazetteer};
///
/// let gazetteer = Gazetteer::default();
/// assert_eq!(gazetteer.reference_km("JR和歌山駅 東口"), 0);
/// assert_eq!(gazetteer.estimate_km("和歌山駅", "橋本市役所"), 27);
/// assert_eq!(gazetteer.estimate_km("", ""), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gazetteer {
    entries: Vec<(String, u32)>,
}

impl Gazetteer {
    /// Build a gazetteer from `(place, reference_km)` pairs.
    ///
    /// Entry order is preserved and decides which entry wins when several
    /// match the same text.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(place, km)| (place.as_ref().to_lowercase(), km))
                .collect(),
        }
    }

    /// Return the reference distance for a free-text location.
    #[must_use]
    pub fn reference_km(&self, location: &str) -> u32 {
        let needle = location.to_lowercase();
        self.entries
            .iter()
            .find(|(place, _)| needle.contains(place.as_str()))
            .map_or_else(|| category_km(&needle), |&(_, km)| km)
    }

    /// Return the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new(WAKAYAMA.iter().copied())
    }
}

impl DistanceEstimator for Gazetteer {
    fn estimate_km(&self, pickup: &str, destination: &str) -> u32 {
        let from = self.reference_km(pickup);
        let to = self.reference_km(destination);
        from.abs_diff(to)
            .saturating_add(MIN_TRIP_KM)
            .clamp(MIN_TRIP_KM, MAX_TRIP_KM)
    }
}

fn category_km(needle: &str) -> u32 {
    let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| needle.contains(keyword));
    if mentions(HOSPITAL_KEYWORDS) {
        HOSPITAL_KM
    } else if mentions(STATION_KEYWORDS) {
        STATION_KM
    } else if mentions(MUNICIPAL_OFFICE_KEYWORDS) {
        MUNICIPAL_OFFICE_KM
    } else {
        FALLBACK_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn gazetteer() -> Gazetteer {
        Gazetteer::default()
    }

    #[rstest]
    #[case("和歌山駅", 0)]
    #[case("和歌山市駅", 2)]
    #[case("和歌山県立医科大学附属病院", 3)]
    #[case("橋本市の自宅", 25)]
    #[case("近所のクリニック病院", HOSPITAL_KM)]
    #[case("Kainan General Hospital", HOSPITAL_KM)]
    #[case("紀三井寺駅", STATION_KM)]
    #[case("Nishi STATION", STATION_KM)]
    #[case("和歌山市役所", MUNICIPAL_OFFICE_KM)]
    #[case("Ward Office", MUNICIPAL_OFFICE_KM)]
    #[case("自宅", FALLBACK_KM)]
    #[case("", FALLBACK_KM)]
    fn resolves_reference_distance(
        gazetteer: Gazetteer,
        #[case] location: &str,
        #[case] expected: u32,
    ) {
        assert_eq!(gazetteer.reference_km(location), expected);
    }

    #[rstest]
    fn hospital_keyword_wins_over_station(gazetteer: Gazetteer) {
        assert_eq!(gazetteer.reference_km("駅前病院"), HOSPITAL_KM);
    }

    #[rstest]
    fn first_declared_entry_wins() {
        let gazetteer = Gazetteer::new([("North", 7), ("North Gate", 30)]);
        assert_eq!(gazetteer.reference_km("north gate"), 7);
    }

    #[rstest]
    #[case("和歌山駅", "和歌山県立医科大学附属病院", 5)]
    #[case("和歌山駅", "和歌山駅", 2)]
    #[case("", "", 2)]
    #[case("橋本市", "和歌山駅", 27)]
    fn estimates_trip_distance(
        gazetteer: Gazetteer,
        #[case] pickup: &str,
        #[case] destination: &str,
        #[case] expected: u32,
    ) {
        assert_eq!(gazetteer.estimate_km(pickup, destination), expected);
    }

    #[rstest]
    fn clamps_to_upper_bound() {
        let gazetteer = Gazetteer::new([("far", 200), ("near", 0)]);
        assert_eq!(gazetteer.estimate_km("far", "near"), MAX_TRIP_KM);
    }

    #[rstest]
    fn estimate_is_symmetric(gazetteer: Gazetteer) {
        assert_eq!(
            gazetteer.estimate_km("海南市", "岩出市"),
            gazetteer.estimate_km("岩出市", "海南市")
        );
    }
}
