//! Building catalogue: identifiers, roles, era availability, and the base
//! mandate templates each era's five-year plan starts from.
//!
//! - [`CATALOG`] lists every building the planner can name
//! - [`available_in_era`] returns the identifiers constructible in an era
//!   (availability is cumulative: nothing is withdrawn in later eras)
//! - [`base_mandates`] returns the quota templates for an era before
//!   difficulty scaling

use kolkhoz_types::{BuildingDefId, Era};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// First of the two base worker-housing buildings.
pub const WORKERS_HOUSE_A: &str = "workers-house-a";
/// Second of the two base worker-housing buildings.
pub const WORKERS_HOUSE_B: &str = "workers-house-b";
/// Primary food-production building.
pub const COLLECTIVE_FARM: &str = "collective-farm";
/// Power-generation building.
pub const POWER_STATION: &str = "power-station";
/// Vodka-production building.
pub const VODKA_DISTILLERY: &str = "vodka-distillery";
/// Administrative seat of the collective.
pub const KOLKHOZ_HQ: &str = "kolkhoz-hq";
/// Machine and tractor station.
pub const TRACTOR_STATION: &str = "tractor-station";
/// Grain storage.
pub const GRAIN_SILO: &str = "grain-silo";
/// Industrial bakery.
pub const BREAD_FACTORY: &str = "bread-factory";
/// Steel mill.
pub const STEEL_MILL: &str = "steel-mill";
/// Munitions factory.
pub const MUNITIONS_FACTORY: &str = "munitions-factory";
/// Concrete plant.
pub const CONCRETE_PLANT: &str = "concrete-plant";
/// Prefabricated panel apartments.
pub const PREFAB_APARTMENTS: &str = "prefab-apartments";
/// High-rise apartment tower.
pub const APARTMENT_TOWER: &str = "apartment-tower";
/// Polyclinic.
pub const POLYCLINIC: &str = "polyclinic";
/// House of culture.
pub const HOUSE_OF_CULTURE: &str = "house-of-culture";
/// Ministry office block.
pub const MINISTRY_OFFICE: &str = "ministry-office";

// ---------------------------------------------------------------------------
// Catalogue table
// ---------------------------------------------------------------------------

/// What a building is for. Used to validate era content structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildingRole {
    /// Houses residents.
    Housing,
    /// Grows or stores food.
    Agriculture,
    /// Generates electricity.
    Power,
    /// Produces vodka.
    Distillery,
    /// Heavy or light industry.
    Industry,
    /// Administration, health, culture.
    Civic,
}

impl BuildingRole {
    /// True for roles that belong to the industrial economy.
    pub const fn is_industrial(self) -> bool {
        match self {
            Self::Power | Self::Distillery | Self::Industry => true,
            Self::Housing | Self::Agriculture | Self::Civic => false,
        }
    }
}

/// Static description of one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingDef {
    /// Catalogue identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Functional role.
    pub role: BuildingRole,
    /// First era in which the building can be constructed.
    pub introduced: Era,
}

const fn def(id: &'static str, name: &'static str, role: BuildingRole, introduced: Era) -> BuildingDef {
    BuildingDef {
        id,
        name,
        role,
        introduced,
    }
}

/// Every building the planner knows about.
pub const CATALOG: [BuildingDef; 17] = [
    // ---- Revolution ----
    def(WORKERS_HOUSE_A, "Workers' barracks", BuildingRole::Housing, Era::Revolution),
    def(WORKERS_HOUSE_B, "Workers' cottage", BuildingRole::Housing, Era::Revolution),
    def(COLLECTIVE_FARM, "Collective farm", BuildingRole::Agriculture, Era::Revolution),
    def(KOLKHOZ_HQ, "Kolkhoz headquarters", BuildingRole::Civic, Era::Revolution),
    def(VODKA_DISTILLERY, "Vodka distillery", BuildingRole::Distillery, Era::Revolution),
    // ---- Collectivization ----
    def(TRACTOR_STATION, "Machine-tractor station", BuildingRole::Agriculture, Era::Collectivization),
    def(GRAIN_SILO, "Grain silo", BuildingRole::Agriculture, Era::Collectivization),
    def(POWER_STATION, "Power station", BuildingRole::Power, Era::Collectivization),
    // ---- Industrialization ----
    def(BREAD_FACTORY, "Bread factory", BuildingRole::Industry, Era::Industrialization),
    def(STEEL_MILL, "Steel mill", BuildingRole::Industry, Era::Industrialization),
    // ---- Wartime mobilization ----
    def(MUNITIONS_FACTORY, "Munitions factory", BuildingRole::Industry, Era::WartimeMobilization),
    // ---- Reconstruction ----
    def(CONCRETE_PLANT, "Concrete plant", BuildingRole::Industry, Era::Reconstruction),
    def(POLYCLINIC, "Polyclinic", BuildingRole::Civic, Era::Reconstruction),
    // ---- Thaw ----
    def(PREFAB_APARTMENTS, "Prefab apartments", BuildingRole::Housing, Era::Thaw),
    def(HOUSE_OF_CULTURE, "House of culture", BuildingRole::Civic, Era::Thaw),
    // ---- Stagnation ----
    def(APARTMENT_TOWER, "Apartment tower", BuildingRole::Housing, Era::Stagnation),
    def(MINISTRY_OFFICE, "Ministry office", BuildingRole::Civic, Era::Stagnation),
];

/// Look up a catalogue entry by identifier.
pub fn lookup(id: &str) -> Option<&'static BuildingDef> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// Display name for an identifier, if it is in the catalogue.
pub fn display_name(id: &str) -> Option<&'static str> {
    lookup(id).map(|entry| entry.name)
}

/// Role of an identifier, if it is in the catalogue.
pub fn role(id: &str) -> Option<BuildingRole> {
    lookup(id).map(|entry| entry.role)
}

/// Identifiers constructible in `era`, in catalogue order.
pub fn available_in_era(era: Era) -> Vec<BuildingDefId> {
    CATALOG
        .iter()
        .filter(|entry| entry.introduced <= era)
        .map(|entry| BuildingDefId::from(entry.id))
        .collect()
}

// ---------------------------------------------------------------------------
// Mandate templates
// ---------------------------------------------------------------------------

/// Unscaled quota for one building in an era's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandateTemplate {
    /// Building the quota applies to.
    pub def_id: &'static str,
    /// Count at the easiest difficulty. Always positive.
    pub base_required: u32,
}

const fn quota(def_id: &'static str, base_required: u32) -> MandateTemplate {
    MandateTemplate {
        def_id,
        base_required,
    }
}

const REVOLUTION_PLAN: [MandateTemplate; 2] =
    [quota(WORKERS_HOUSE_A, 2), quota(COLLECTIVE_FARM, 1)];

const COLLECTIVIZATION_PLAN: [MandateTemplate; 3] = [
    quota(COLLECTIVE_FARM, 2),
    quota(TRACTOR_STATION, 1),
    quota(WORKERS_HOUSE_B, 2),
];

const INDUSTRIALIZATION_PLAN: [MandateTemplate; 3] = [
    quota(POWER_STATION, 1),
    quota(STEEL_MILL, 1),
    quota(BREAD_FACTORY, 1),
];

const WARTIME_PLAN: [MandateTemplate; 2] = [quota(MUNITIONS_FACTORY, 2), quota(STEEL_MILL, 1)];

const RECONSTRUCTION_PLAN: [MandateTemplate; 3] = [
    quota(CONCRETE_PLANT, 1),
    quota(WORKERS_HOUSE_B, 3),
    quota(POWER_STATION, 1),
];

const THAW_PLAN: [MandateTemplate; 3] = [
    quota(PREFAB_APARTMENTS, 2),
    quota(CONCRETE_PLANT, 1),
    quota(VODKA_DISTILLERY, 1),
];

const STAGNATION_PLAN: [MandateTemplate; 3] = [
    quota(APARTMENT_TOWER, 2),
    quota(POWER_STATION, 1),
    quota(MINISTRY_OFFICE, 1),
];

/// Base mandate templates for an era's five-year plan.
pub const fn base_mandates(era: Era) -> &'static [MandateTemplate] {
    match era {
        Era::Revolution => &REVOLUTION_PLAN,
        Era::Collectivization => &COLLECTIVIZATION_PLAN,
        Era::Industrialization => &INDUSTRIALIZATION_PLAN,
        Era::WartimeMobilization => &WARTIME_PLAN,
        Era::Reconstruction => &RECONSTRUCTION_PLAN,
        Era::Thaw => &THAW_PLAN,
        Era::Stagnation => &STAGNATION_PLAN,
    }
}
