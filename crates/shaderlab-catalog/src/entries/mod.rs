//! Built-in gallery content.

mod advanced;
mod basic;
mod flat;
mod intermediate;
mod tutorial;

use crate::CatalogEntry;

/// Every built-in entry in gallery order.
pub(crate) fn builtin() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::Basic(basic::SOLID_COLOR),
        CatalogEntry::Basic(basic::LINEAR_GRADIENT),
        CatalogEntry::Intermediate(intermediate::ANIMATED_WAVE),
        CatalogEntry::Advanced(advanced::CUBE_3D),
        CatalogEntry::Advanced(advanced::SPHERE_DEFORM),
        CatalogEntry::Advanced(advanced::PARTICLES_3D),
        CatalogEntry::Tutorial(tutorial::COORDINATE_SPACES),
    ]
}
