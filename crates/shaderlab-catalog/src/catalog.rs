use crate::{ShaderExample, ShaderLevel, entries};

/// Gallery section an entry is listed under.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Collection {
    Basic,
    Intermediate,
    Advanced,
    Tutorial,
}

/// A catalog entry tagged with its section.
///
/// The section is independent of difficulty: tutorials carry their own
/// `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry {
    Basic(ShaderExample),
    Intermediate(ShaderExample),
    Advanced(ShaderExample),
    Tutorial(ShaderExample),
}

impl CatalogEntry {
    pub fn example(&self) -> &ShaderExample {
        match self {
            CatalogEntry::Basic(e)
            | CatalogEntry::Intermediate(e)
            | CatalogEntry::Advanced(e)
            | CatalogEntry::Tutorial(e) => e,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            CatalogEntry::Basic(_) => Collection::Basic,
            CatalogEntry::Intermediate(_) => Collection::Intermediate,
            CatalogEntry::Advanced(_) => Collection::Advanced,
            CatalogEntry::Tutorial(_) => Collection::Tutorial,
        }
    }

    #[inline]
    pub fn id(&self) -> &'static str {
        self.example().id
    }
}

/// Ordered set of gallery entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Catalog over caller-supplied entries, kept in the given order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in gallery.
    pub fn builtin() -> Self {
        Self::new(entries::builtin())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Entries listed under `collection`, in catalog order.
    pub fn collection(&self, collection: Collection) -> impl Iterator<Item = &ShaderExample> {
        self.entries
            .iter()
            .filter(move |e| e.collection() == collection)
            .map(CatalogEntry::example)
    }

    /// Examples of difficulty `level` across every collection.
    pub fn at_level(&self, level: ShaderLevel) -> impl Iterator<Item = &ShaderExample> {
        self.entries
            .iter()
            .map(CatalogEntry::example)
            .filter(move |e| e.level == level)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use shaderlab_engine::coords::{DisplayMetrics, Pointer};
    use shaderlab_engine::flat::FlatContext;
    use shaderlab_engine::mock::MockCanvas;
    use shaderlab_engine::scene::{GeometryKind, RenderContext};

    use super::*;
    use crate::SceneSetup;

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.entries().iter().map(CatalogEntry::id).collect();
        assert_eq!(ids.len(), catalog.entries().len());
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::builtin();
        let entry = catalog.find("particles-3d").unwrap();
        assert_eq!(entry.collection(), Collection::Advanced);
        assert!(catalog.find("does-not-exist").is_none());
    }

    #[test]
    fn tutorial_keeps_its_own_level() {
        let catalog = Catalog::builtin();
        let tutorials: Vec<_> = catalog.collection(Collection::Tutorial).collect();
        assert_eq!(tutorials.len(), 1);
        assert_eq!(tutorials[0].level, ShaderLevel::Intermediate);

        let intermediate: Vec<_> =
            catalog.at_level(ShaderLevel::Intermediate).map(|e| e.id).collect();
        assert_eq!(intermediate, vec!["animated-wave", "coordinate-spaces"]);
    }

    #[test]
    fn collections_partition_catalog() {
        let catalog = Catalog::builtin();
        let total: usize = [
            Collection::Basic,
            Collection::Intermediate,
            Collection::Advanced,
            Collection::Tutorial,
        ]
        .into_iter()
        .map(|c| catalog.collection(c).count())
        .sum();
        assert_eq!(total, catalog.entries().len());
    }

    #[test]
    fn spatial_entries_cover_every_geometry() {
        let kinds: HashSet<_> = Catalog::builtin()
            .entries()
            .iter()
            .filter_map(|e| match e.example().setup {
                SceneSetup::Spatial { geometry, .. } => Some(geometry),
                SceneSetup::Flat { .. } => None,
            })
            .collect();
        assert_eq!(
            kinds,
            HashSet::from([GeometryKind::Cube, GeometryKind::Sphere, GeometryKind::Particles])
        );
    }

    #[test]
    fn every_entry_initializes_and_renders() {
        let metrics = DisplayMetrics::new(320.0, 200.0, 1.0);
        for entry in Catalog::builtin().entries() {
            let example = entry.example();
            let mut canvas = MockCanvas::new(300, 150);
            let recorder = canvas.recorder();

            match example.setup {
                SceneSetup::Flat { uniforms } => {
                    let mut ctx = FlatContext::init(
                        &canvas,
                        example.vertex_shader,
                        example.fragment_shader,
                        uniforms,
                    )
                    .unwrap_or_else(|e| panic!("{}: {e}", example.id));
                    for name in uniforms {
                        assert!(ctx.uniform(name).is_some(), "{}: {name} unresolved", example.id);
                    }
                    ctx.render(&mut canvas, metrics, 1.0, Pointer::new(0.5, 0.5));
                }
                SceneSetup::Spatial {
                    geometry,
                    particle_count,
                } => {
                    let mut ctx = RenderContext::init(
                        &canvas,
                        example.vertex_shader,
                        example.fragment_shader,
                        geometry,
                        particle_count,
                    )
                    .unwrap_or_else(|e| panic!("{}: {e}", example.id));
                    assert_eq!(ctx.is_particle_system(), geometry == GeometryKind::Particles);
                    ctx.render(&mut canvas, metrics, 1.0, Pointer::new(0.5, 0.5));
                }
            }

            assert_eq!(recorder.draw_calls().len(), 1, "{}", example.id);
        }
    }
}
