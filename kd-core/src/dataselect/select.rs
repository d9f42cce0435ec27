use std::cmp::Ordering;

use tracing::*;

use super::*;

/// Run the filter -> sort -> paginate pipeline over a collection of cells.  Returns the page and
/// the number of items that made it through the filter, which is what clients need to render
/// page controls.  Never fails; a page outside the valid range is just empty.
///
/// A cell that doesn't expose a filtered property is rejected by the filter; a cell that doesn't
/// expose a sorted property sorts before everything that does.
pub fn select<C: DataCell>(cells: Vec<C>, query: &DataSelectQuery) -> (Vec<C>, usize) {
    let mut matched: Vec<C> = cells.into_iter().filter(|c| matches_filter(c, &query.filter)).collect();
    let total = matched.len();

    // sort_by is stable, so an empty sort (or all-equal keys) keeps input order
    if !query.sort.keys.is_empty() {
        matched.sort_by(|a, b| compare_cells(a, b, &query.sort));
    }

    let page = paginate(matched, &query.pagination);
    debug!("selected {} of {total} matching items", page.len());
    (page, total)
}

fn matches_filter<C: DataCell>(cell: &C, filter: &FilterQuery) -> bool {
    filter.terms.iter().all(|(prop, want)| match cell.property(prop) {
        Some(have) => have.contains(want),
        None => false,
    })
}

fn compare_cells<C: DataCell>(a: &C, b: &C, sort: &SortQuery) -> Ordering {
    for (prop, ascending) in &sort.keys {
        // None < Some(_), which is exactly the "missing sorts as minimal" rule
        let ord = match (a.property(prop), b.property(prop)) {
            (Some(x), Some(y)) => x.compare(&y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        };

        let ord = if *ascending { ord } else { ord.reverse() };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn paginate<C>(items: Vec<C>, pagination: &PaginationQuery) -> Vec<C> {
    if pagination.is_unlimited() {
        return items;
    }
    if pagination.page < 1 {
        return vec![];
    }

    let ipp = pagination.items_per_page as usize;
    let start = (pagination.page as usize - 1).saturating_mul(ipp);
    if start >= items.len() {
        return vec![];
    }

    let end = start.saturating_add(ipp).min(items.len());
    items.into_iter().skip(start).take(end - start).collect()
}
