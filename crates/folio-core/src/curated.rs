//! Hand-authored datasets for the cinema and polaroid sections.
//!
//! Section items are joined to entries by their `data-curated-id`
//! attribute. Items without one fall back to their position in the section.

use folio_types::{Availability, Section};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuratedEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub technique: &'static str,
    pub subtitle: Option<&'static str>,
    pub size: &'static str,
    pub price_eur: u32,
    pub status: Availability,
    pub img: &'static str,
}

const GLASS: &str = "Acrylic and Spray Can on Glass";
const POLAROID_TECHNIQUE: &str = "Acrilyc on Canvas and Photographic Print on Board";

const fn cinema(
    id: &'static str,
    title: &'static str,
    size: &'static str,
    price_eur: u32,
    status: Availability,
    img: &'static str,
) -> CuratedEntry {
    CuratedEntry {
        id,
        title,
        technique: GLASS,
        subtitle: None,
        size,
        price_eur,
        status,
        img,
    }
}

const fn polaroid(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    img: &'static str,
) -> CuratedEntry {
    CuratedEntry {
        id,
        title,
        technique: POLAROID_TECHNIQUE,
        subtitle: Some(subtitle),
        size: "50 x 70 cm",
        price_eur: 700,
        status: Availability::Sold,
        img,
    }
}

pub static CINEMA: [CuratedEntry; 6] = [
    cinema("persona", "PERSONA", "60 x 70 cm", 600, Availability::Sold, "assets/img/20211222_144641-2.jpg"),
    cinema("vertigo", "VERTIGO", "85 x 85 cm", 700, Availability::Available, "assets/img/20220114_110409.jpg"),
    cinema(
        "hiroshima-mon-amour",
        "HIROSHIMA MON AMOUR",
        "53 x 63 cm",
        550,
        Availability::Sold,
        "assets/img/20220206_165159-1.jpg",
    ),
    cinema("la-dolce-vita", "LA DOLCE VITA", "84 x 74 cm", 700, Availability::Sold, "assets/img/20220228_170756.jpg"),
    cinema("jules-et-jim", "JULES ET JIM", "58 x 68 cm", 600, Availability::Sold, "assets/img/donnauomo.jpg"),
    cinema(
        "a-bout-de-souffle",
        "A BOUT DE SOUFFLE",
        "73 x 63 cm",
        600,
        Availability::Sold,
        "assets/img/donnauomo2.jpg",
    ),
];

pub static POLAROID: [CuratedEntry; 8] = [
    polaroid("cutrone", "CUTRONE", "Cats Regning", "assets/img/IMG_2104-scaled.jpeg"),
    polaroid("basquiat", "BASQUIAT", "Birds on Money", "assets/img/IMG_2105-1364x2048.jpeg"),
    polaroid(
        "hockney",
        "HOCKNEY",
        "Peter getting out of Nick’s Pool",
        "assets/img/IMG_2108-1299x2048.jpeg",
    ),
    polaroid("haring", "HARING", "Safe Sex", "assets/img/IMG_2109-scaled.jpeg"),
    polaroid("warhol", "WARHOL", "Shot Marilyns", "assets/img/andy.jpeg"),
    polaroid(
        "dali",
        "DALÌ",
        "The Disintegration of the Persistence of Memory",
        "assets/img/dali.jpeg",
    ),
    polaroid("bacon", "BACON", "Self Portrait 1971", "assets/img/bacon.jpeg"),
    polaroid("lichtenstein", "LICHTENSTEIN", "M-Maybe 1965", "assets/img/linch.jpeg"),
];

pub fn dataset(section: Section) -> &'static [CuratedEntry] {
    match section {
        Section::Cinema => &CINEMA,
        Section::Polaroid => &POLAROID,
    }
}

/// CSS selector of the items in a section.
pub fn item_selector(section: Section) -> &'static str {
    match section {
        Section::Cinema => "#cinema .cinema-item",
        Section::Polaroid => "#polaroid .polaroid-item",
    }
}

/// Match each section item (by its optional `data-curated-id`) to an entry.
///
/// Items carrying an id are looked up by id only; an unknown id stays
/// unmatched. Items without one take the entry at their position. Extra
/// items beyond the dataset stay unmatched.
pub fn join_curated<'a, S: AsRef<str>>(
    entries: &'a [CuratedEntry],
    item_ids: &[Option<S>],
) -> Vec<Option<&'a CuratedEntry>> {
    let mut positional = 0usize;
    let joined: Vec<_> = item_ids
        .iter()
        .enumerate()
        .map(|(index, id)| match id {
            Some(id) => {
                let id: &str = id.as_ref();
                let found = entries.iter().find(|e| e.id == id);
                if found.is_none() {
                    warn!(id, "section item references an unknown curated entry");
                }
                found
            }
            None => {
                positional += 1;
                entries.get(index)
            }
        })
        .collect();
    if positional > 0 {
        warn!(items = positional, "section items joined by position; add data-curated-id");
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_ids_are_unique() {
        for section in Section::ALL {
            let ids: HashSet<_> = dataset(section).iter().map(|e| e.id).collect();
            assert_eq!(ids.len(), dataset(section).len());
        }
    }

    #[test]
    fn joins_by_id_regardless_of_order() {
        let joined = join_curated(&CINEMA, &[Some("vertigo"), Some("persona")]);
        assert_eq!(joined[0].map(|e| e.title), Some("VERTIGO"));
        assert_eq!(joined[1].map(|e| e.title), Some("PERSONA"));
    }

    #[test]
    fn falls_back_to_position_and_leaves_extras_unmatched() {
        let ids: Vec<Option<&str>> = vec![None; 7];
        let joined = join_curated(&CINEMA, &ids);
        assert_eq!(joined[0].map(|e| e.id), Some("persona"));
        assert_eq!(joined[5].map(|e| e.id), Some("a-bout-de-souffle"));
        assert!(joined[6].is_none());
    }

    #[test]
    fn unknown_id_is_not_matched() {
        let joined = join_curated(&POLAROID, &[Some("rothko".to_owned())]);
        assert!(joined[0].is_none());
    }
}
