//! Rank of the selected state within a year.

use rate_map_dashboard_models::RankLine;
use rate_map_dataset::DatasetStore;

/// Ranks `selected` among every state with a record in `year`.
///
/// Rank is `1 + count(states with a strictly higher rate)`, so ties share
/// the better rank. `None` when nothing is selected or the state has no
/// record that year.
#[must_use]
pub fn derive_rank(store: &DatasetStore, year: u16, selected: Option<&str>) -> Option<RankLine> {
    let record = store.record(selected?, year)?;

    let (higher, total) = store
        .year_records(year)
        .fold((0u32, 0u32), |(higher, total), other| {
            (higher + u32::from(other.rate > record.rate), total + 1)
        });
    let rank = higher + 1;

    Some(RankLine {
        year,
        rank,
        total,
        text: format!("Rank in {year}: #{rank} of {total}"),
    })
}

#[cfg(test)]
mod tests {
    use rate_map_rates_models::Region;

    use super::*;
    use crate::fixtures;

    #[test]
    fn ranks_by_strictly_greater_count() {
        let store = fixtures::store();
        let rank = derive_rank(&store, 2023, Some("Wyoming")).unwrap();
        assert_eq!((rank.rank, rank.total), (1, 7));

        let rank = derive_rank(&store, 2023, Some("Rhode Island")).unwrap();
        assert_eq!(rank.rank, 7);
        assert_eq!(rank.text, "Rank in 2023: #7 of 7");
    }

    #[test]
    fn ties_share_the_better_rank() {
        let store = fixtures::custom_store(
            2000,
            &[
                ("Idaho", "ID", Region::Mountain, &[20.0]),
                ("Montana", "MT", Region::Mountain, &[20.0]),
                ("Utah", "UT", Region::Mountain, &[10.0]),
            ],
        );
        assert_eq!(derive_rank(&store, 2000, Some("Idaho")).unwrap().rank, 1);
        assert_eq!(derive_rank(&store, 2000, Some("Montana")).unwrap().rank, 1);
        assert_eq!(derive_rank(&store, 2000, Some("Utah")).unwrap().rank, 3);
    }

    #[test]
    fn nothing_selected_has_no_rank() {
        let store = fixtures::store();
        assert_eq!(derive_rank(&store, 2023, None), None);
        assert_eq!(derive_rank(&store, 1999, Some("Texas")), None);
    }
}
