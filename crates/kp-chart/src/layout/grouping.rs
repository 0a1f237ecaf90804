//! Buckets the planet list by house or by sign.

use crate::chart::PlanetPlacement;
use crate::layout::types::IndexKind;
use crate::zodiac;

/// Planets grouped under the twelve indices of one kind. Every index 1-12 is
/// present, possibly empty; encounter order is preserved within a bucket.
#[derive(Debug, Clone)]
pub struct PlanetBuckets<'a> {
    kind: IndexKind,
    planets: &'a [PlanetPlacement],
    buckets: [Vec<usize>; 12],
}

impl<'a> PlanetBuckets<'a> {
    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    /// Positions in the source planet list that fall under `index`.
    pub fn indices(&self, index: u8) -> &[usize] {
        if !zodiac::is_valid_index(index) {
            return &[];
        }
        &self.buckets[usize::from(index) - 1]
    }

    pub fn planets(&self, index: u8) -> Vec<&'a PlanetPlacement> {
        let planets = self.planets;
        self.indices(index).iter().map(|&i| &planets[i]).collect()
    }

    pub fn count(&self, index: u8) -> usize {
        self.indices(index).len()
    }

    /// `(index, planets)` for indices 1 through 12.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Vec<&'a PlanetPlacement>)> + '_ {
        (1..=zodiac::SIGN_COUNT).map(move |index| (index, self.planets(index)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Group by the `house` field (North layout) or the `sign` field (South
/// layout). Planets whose index lies outside 1-12 are left out.
pub fn group_planets(planets: &[PlanetPlacement], kind: IndexKind) -> PlanetBuckets<'_> {
    let mut buckets: [Vec<usize>; 12] = Default::default();
    for (i, planet) in planets.iter().enumerate() {
        let index = match kind {
            IndexKind::House => planet.house,
            IndexKind::Sign => planet.sign,
        };
        if zodiac::is_valid_index(index) {
            buckets[usize::from(index) - 1].push(i);
        } else {
            log::debug!(
                "Skipping {} with out-of-range {:?} index {}",
                planet.planet,
                kind,
                index
            );
        }
    }
    PlanetBuckets {
        kind,
        planets,
        buckets,
    }
}
