use indexmap::IndexMap;
use log::{debug, info};
use parser::ast::{Filter, FilterKey};

/// Position of an element in document order
pub type ElementId = usize;

/// Something a query can be matched against.
///
/// Attributes are compared as they are stored: filter values are lowercased
/// by the parser, so producers are expected to store lowercased text.
pub trait Candidate {
    fn title(&self) -> &str;
    fn categories(&self) -> &str;

    fn attribute(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Title => self.title(),
            FilterKey::Category => self.categories(),
        }
    }
}

/// A candidate whose visibility can be switched.
pub trait Toggle: Candidate {
    fn set_visible(&mut self, visible: bool);
}

/// The outcome of a single filter: a match shows the element unless the
/// filter is an exclusion, a miss hides it unless it is one.
pub fn filter_outcome<C: Candidate + ?Sized>(filter: &Filter, elem: &C) -> bool {
    let found = elem.attribute(filter.key).contains(filter.value.as_str());
    found != filter.exclude
}

/// Filters are evaluated in order and evaluation stops at the first one that
/// hides the element; later filters are never consulted.
pub fn is_visible<C: Candidate + ?Sized>(filters: &[Filter], elem: &C) -> bool {
    filters.iter().all(|filter| filter_outcome(filter, elem))
}

pub fn compute_visibility<C: Candidate>(
    filters: &[Filter],
    elems: &[C],
) -> IndexMap<ElementId, bool> {
    elems
        .iter()
        .enumerate()
        .map(|(id, elem)| (id, is_visible(filters, elem)))
        .collect()
}

pub fn apply_visibility<T: Toggle>(visibility: &IndexMap<ElementId, bool>, elems: &mut [T]) {
    for (id, elem) in elems.iter_mut().enumerate() {
        match visibility.get(&id) {
            Some(visible) => elem.set_visible(*visible),
            None => debug!("No visibility computed for element {}, leaving it as is", id),
        }
    }
}

pub fn apply_filters<T: Toggle>(filters: &[Filter], elems: &mut [T]) {
    let visibility = compute_visibility(filters, elems);
    apply_visibility(&visibility, elems);

    let shown = visibility.values().filter(|v| **v).count();
    info!(
        "Applied {} filter(s): {} of {} element(s) shown",
        filters.len(),
        shown,
        visibility.len()
    );
}
