//! Core relation store: indices, mutation and lookup.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::entity::{Entity, Pair};
use crate::eq_set::EqSet;
use crate::vocabulary::predicates::{ENTITY_NAME, MEMBER_OF_KIND, RDF_TYPE};

static NO_OBJECTS: EqSet<Entity> = EqSet::new();
static NO_PAIRS: EqSet<Pair<Entity, Entity>> = EqSet::new();

/// In-memory triple store indexed by subject and by predicate.
///
/// The store is open-world: entities never need to be created before they
/// are related, and relating never checks that either side exists. Missing
/// data is reported as an empty set or `None`, never as an error.
///
/// # Examples
///
/// ```
/// use hqdm_store::{Entity, RelationStore};
/// use hqdm_store::vocabulary::{kinds, predicates};
///
/// let mut store = RelationStore::new();
/// let alice = store.create_entity(&Entity::new(kinds::PERSON), "test:alice");
/// let name = Entity::new("Alice");
///
/// store.relate(predicates::ENTITY_NAME, &alice, &name);
/// assert!(store.related(predicates::ENTITY_NAME, &alice, &name));
/// assert!(store.get_related(&alice, predicates::ENTITY_NAME).has(&name));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    by_subject: BTreeMap<String, BTreeMap<String, EqSet<Entity>>>,
    by_predicate: BTreeMap<String, EqSet<Pair<Entity, Entity>>>,
}

impl RelationStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` has been used as a subject.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.by_subject.contains_key(id)
    }

    /// Registers an entity of `kind` under `id`.
    ///
    /// Records both the `rdf:type` assertion and kind membership. Reusing an id
    /// is allowed: the type and kind triples are idempotent and any other
    /// relations already held by the id are kept.
    pub fn create_entity(&mut self, kind: &Entity, id: impl Into<String>) -> Entity {
        let entity = Entity::new(id);
        self.by_subject.entry(entity.id().to_string()).or_default();
        self.relate(RDF_TYPE, &entity, kind);
        self.relate(MEMBER_OF_KIND, &entity, kind);
        entity
    }

    /// Inserts the triple `(predicate, subject, object)`.
    ///
    /// Re-adding an existing triple is a no-op. Returns true if the store changed.
    pub fn relate(&mut self, predicate: &str, subject: &Entity, object: &Entity) -> bool {
        let objects = self
            .by_subject
            .entry(subject.id().to_string())
            .or_default()
            .entry(predicate.to_string())
            .or_default();
        if !objects.add(object.clone()) {
            return false;
        }

        // Absent from the subject view means absent from the predicate view.
        self.by_predicate
            .entry(predicate.to_string())
            .or_default()
            .push_distinct(Pair::new(subject.clone(), object.clone()));
        true
    }

    /// Removes the triple `(predicate, subject, object)` from both views.
    ///
    /// Returns true if the triple was present. The subject stays known to
    /// [`exists`](Self::exists) even when its last relation is removed.
    pub fn unrelate(&mut self, predicate: &str, subject: &Entity, object: &Entity) -> bool {
        let Some(predicates) = self.by_subject.get_mut(subject.id()) else {
            return false;
        };
        let Some(objects) = predicates.get_mut(predicate) else {
            return false;
        };
        if objects.remove(object) == 0 {
            return false;
        }
        if objects.is_empty() {
            predicates.remove(predicate);
        }

        if let Some(pairs) = self.by_predicate.get_mut(predicate) {
            pairs.remove(&Pair::new(subject.clone(), object.clone()));
            if pairs.is_empty() {
                self.by_predicate.remove(predicate);
            }
        }
        true
    }

    /// Returns true if the triple `(predicate, subject, object)` is present.
    #[must_use]
    pub fn related(&self, predicate: &str, subject: &Entity, object: &Entity) -> bool {
        self.pairs(predicate)
            .first(|p| p.left == *subject && p.right == *object)
            .is_some()
    }

    /// Returns a copy of the objects related to `entity` by `predicate`.
    ///
    /// The result is independent of the store: mutating it never changes the
    /// index, and later mutations of the store never change it.
    #[must_use]
    pub fn get_related(&self, entity: &Entity, predicate: &str) -> EqSet<Entity> {
        self.objects(entity, predicate).clone()
    }

    /// Live view of the objects of `(entity, predicate)`, for internal lookups.
    pub(crate) fn objects(&self, entity: &Entity, predicate: &str) -> &EqSet<Entity> {
        self.by_subject
            .get(entity.id())
            .and_then(|predicates| predicates.get(predicate))
            .unwrap_or(&NO_OBJECTS)
    }

    /// Live view of the subject/object pairs of `predicate`.
    pub(crate) fn pairs(&self, predicate: &str) -> &EqSet<Pair<Entity, Entity>> {
        self.by_predicate.get(predicate).unwrap_or(&NO_PAIRS)
    }

    /// Finds every entity with an `rdf:type` of `kind`.
    #[must_use]
    pub fn find_by_type(&self, kind: &Entity) -> EqSet<Entity> {
        self.pairs(RDF_TYPE)
            .iter()
            .filter(|p| p.right == *kind)
            .map(|p| p.left.clone())
            .collect()
    }

    /// Finds the first entity of `kind` whose entity name is `name`.
    #[must_use]
    pub fn find_by_entity_name(&self, name: &str, kind: &Entity) -> Option<Entity> {
        self.pairs(ENTITY_NAME)
            .first(|p| p.right.id() == name && self.is_kind_of(&p.left, kind))
            .map(|p| p.left.clone())
    }

    /// Returns the first entity name recorded for `entity`.
    #[must_use]
    pub fn entity_name(&self, entity: &Entity) -> Option<&str> {
        self.objects(entity, ENTITY_NAME).iter().next().map(Entity::id)
    }

    /// Adds every triple of `other` to this store.
    pub fn merge(&mut self, other: &RelationStore) {
        for (predicate, subject, object) in other.triples() {
            self.relate(predicate, subject, object);
        }
    }

    /// Builds a new store holding the union of the triples of `models`.
    ///
    /// Inputs are left untouched; triples present in several inputs appear once.
    pub fn add_models<'a>(models: impl IntoIterator<Item = &'a RelationStore>) -> RelationStore {
        let mut result = RelationStore::new();
        let mut inputs = 0usize;
        for model in models {
            result.merge(model);
            inputs += 1;
        }
        tracing::debug!(inputs, triples = result.len(), "combined stores");
        result
    }

    /// Iterates every triple as `(predicate, subject, object)`.
    ///
    /// Predicates are visited in lexical order, pairs in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &Entity, &Entity)> + '_ {
        self.by_predicate.iter().flat_map(|(predicate, pairs)| {
            pairs
                .iter()
                .map(move |p| (predicate.as_str(), &p.left, &p.right))
        })
    }

    /// Iterates the predicates in use.
    pub fn predicates(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_predicate.keys().map(String::as_str)
    }

    /// Number of triples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_predicate.values().map(EqSet::len).sum()
    }

    /// Returns true if the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_predicate.is_empty()
    }

    /// Content digest of the triple set.
    ///
    /// Independent of insertion order: stores holding the same triples have
    /// the same fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut lines: Vec<String> = self
            .triples()
            .map(|(p, s, o)| format!("{}\u{1f}{p}\u{1f}{}", s.id(), o.id()))
            .collect();
        lines.sort_unstable();

        let mut hasher = blake3::Hasher::new();
        for line in &lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Human-readable listing of both index views.
    #[must_use]
    pub fn dump(&self) -> String {
        let rule = "-".repeat(69);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Things:");
        for (subject, predicates) in &self.by_subject {
            let _ = writeln!(out, "  {subject}:");
            for (predicate, objects) in predicates {
                let _ = writeln!(out, "    {predicate}");
                for object in objects {
                    let _ = writeln!(out, "      {object}");
                }
            }
        }
        let _ = writeln!(out, "Relations:");
        for (predicate, pairs) in &self.by_predicate {
            let _ = writeln!(out, "  {predicate}");
            for pair in pairs {
                let _ = writeln!(out, "    {} {}", pair.left, pair.right);
            }
        }
        let _ = write!(out, "{rule}");
        out
    }
}
