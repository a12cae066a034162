//! Partition headers
//!
//! After ranking, section markers are spliced into the order:
//!
//! - `Closed` at the first closed item (searched from the first non-favorite
//!   when the favorites partition is on, since favorites form one run),
//! - `Open` at the first non-favorite when both partitions are on and that
//!   item is not already the closed boundary, or `Other` there when only the
//!   favorites partition is on,
//! - `Favorite` at the top when favorites lead the list, otherwise `Open` at
//!   the top when only the open/closed partition is on and the list does not
//!   start closed.
//!
//! Positions are computed against the unpartitioned order and applied back to
//! front so earlier positions stay valid.

use crate::repository::ItemRepository;
use crate::sorting::DisplayFlags;
use dinerank_model::{Entry, MarkerKind};

/// Marker splice points, ordered from the rear of the list to the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartitionPlan {
    pub non_favorite: Option<usize>,
    pub closed: Option<usize>,
    pub markers: Vec<(usize, MarkerKind)>,
}

impl PartitionPlan {
    /// Work out where headers go for an order whose per-position favorite and
    /// open flags are given. An empty order still gets its leading header.
    pub fn compute(favorite: &[bool], open: &[bool], flags: DisplayFlags) -> Self {
        debug_assert_eq!(favorite.len(), open.len());
        let by_favorites = flags.show_favorite_partition;
        let by_open = flags.show_open_partition;

        let non_favorite = if by_favorites {
            favorite.iter().position(|is_favorite| !is_favorite)
        } else {
            None
        };
        let closed = match (by_open, by_favorites) {
            (false, _) => None,
            (true, true) => non_favorite.and_then(|start| {
                open[start..]
                    .iter()
                    .position(|is_open| !is_open)
                    .map(|offset| start + offset)
            }),
            (true, false) => open.iter().position(|is_open| !is_open),
        };

        let mut markers = Vec::with_capacity(3);
        if let Some(closed) = closed {
            markers.push((closed, MarkerKind::Closed));
        }
        if by_favorites {
            if let Some(non_favorite) = non_favorite {
                if !by_open {
                    markers.push((non_favorite, MarkerKind::Other));
                } else if closed != Some(non_favorite) {
                    markers.push((non_favorite, MarkerKind::Open));
                }
            }
            if non_favorite != Some(0) {
                markers.push((0, MarkerKind::Favorite));
            }
        } else if by_open && closed != Some(0) {
            markers.push((0, MarkerKind::Open));
        }

        PartitionPlan {
            non_favorite,
            closed,
            markers,
        }
    }

    /// Splice the planned markers into `items`.
    pub fn apply<I>(&self, items: I) -> Vec<Entry>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let mut entries: Vec<Entry> = items.into_iter().map(Into::into).collect();
        entries.reserve(self.markers.len());
        for &(position, kind) in &self.markers {
            entries.insert(position, Entry::Marker(kind));
        }
        entries
    }
}

/// Turn ranked ordinals into the final entry sequence, headers included.
pub fn insert_partitions<R>(repo: &R, ranked: &[usize], flags: DisplayFlags) -> Vec<Entry>
where
    R: ItemRepository + ?Sized,
{
    let favorite: Vec<bool> = ranked
        .iter()
        .map(|&ordinal| repo.attributes_at(ordinal).favorite)
        .collect();
    let open: Vec<bool> = ranked
        .iter()
        .map(|&ordinal| repo.attributes_at(ordinal).is_open())
        .collect();
    let plan = PartitionPlan::compute(&favorite, &open, flags);
    plan.apply(ranked.iter().map(|&ordinal| repo.id_at(ordinal)))
}
