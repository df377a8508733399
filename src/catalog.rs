use crate::errors::{CatalogError, CatalogResult};
use schema::{ItemDefinition, ItemId, Species, SpeciesDefinition};
use strum::EnumCount;

/// Embedded catalog fixtures, in the same RON format the loader accepts.
const SPECIES_DATA: &str = include_str!("../data/species.ron");
const ITEMS_DATA: &str = include_str!("../data/items.ron");

/// Immutable reference data for the whole game: species move sets and shop
/// item definitions, indexed by [`Species`] / [`ItemId`].
///
/// A catalog is built once and passed by shared reference wherever lookups
/// are needed; nothing in the game mutates it. Tests substitute their own
/// fixtures through [`Catalog::from_ron`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    species: Vec<SpeciesDefinition>,
    items: Vec<ItemDefinition>,
}

impl Catalog {
    /// Parse a catalog from RON documents and validate that the tables line
    /// up with the `Species` and `ItemId` enums.
    pub fn from_ron(species_ron: &str, items_ron: &str) -> CatalogResult<Catalog> {
        let species: Vec<SpeciesDefinition> =
            ron::from_str(species_ron).map_err(|e| CatalogError::MalformedData(e.to_string()))?;
        let items: Vec<ItemDefinition> =
            ron::from_str(items_ron).map_err(|e| CatalogError::MalformedData(e.to_string()))?;

        if species.len() != Species::COUNT {
            return Err(CatalogError::SpeciesCountMismatch {
                expected: Species::COUNT,
                found: species.len(),
            });
        }
        if items.len() != ItemId::COUNT {
            return Err(CatalogError::ItemCountMismatch {
                expected: ItemId::COUNT,
                found: items.len(),
            });
        }

        Ok(Catalog { species, items })
    }

    /// The standard game catalog, parsed from the embedded data files.
    pub fn standard() -> Catalog {
        Catalog::from_ron(SPECIES_DATA, ITEMS_DATA)
            .expect("embedded catalog data must parse and match the schema enums")
    }

    pub fn species_def(&self, species: Species) -> &SpeciesDefinition {
        &self.species[species.index()]
    }

    pub fn item_def(&self, item: ItemId) -> &ItemDefinition {
        &self.items[item.index()]
    }

    /// Number of species entries; the opponent generator rolls over this.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }
}
