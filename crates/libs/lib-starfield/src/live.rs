//! Ordered collection of shooting stars that have not yet expired.

use crate::shooting_star::{ShootingStar, ShootingStarId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveCollection {
    stars: Vec<ShootingStar>,
}

impl LiveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append in creation order.
    pub fn insert(&mut self, star: ShootingStar) {
        self.stars.push(star);
    }

    /// Remove the star with `id`. Stars expire out of insertion order, so
    /// this filters by id. Returns `false` when the id was already gone.
    pub fn remove(&mut self, id: ShootingStarId) -> bool {
        let before = self.stars.len();
        self.stars.retain(|star| star.id != id);
        self.stars.len() != before
    }

    pub fn contains(&self, id: ShootingStarId) -> bool {
        self.stars.iter().any(|star| star.id == id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShootingStar> {
        self.stars.iter()
    }

    pub fn as_slice(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn to_vec(&self) -> Vec<ShootingStar> {
        self.stars.clone()
    }
}

impl<'a> IntoIterator for &'a LiveCollection {
    type Item = &'a ShootingStar;
    type IntoIter = std::slice::Iter<'a, ShootingStar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
