//! Classification, participation and temporal helpers.
//!
//! Kind membership (`member_of_kind`) and class membership (`member_of`) are
//! separate relations: an entity that is a member of a class is not thereby
//! an instance of it as a kind, and the other way round.

use crate::entity::Entity;
use crate::eq_set::EqSet;
use crate::store::RelationStore;
use crate::vocabulary::kinds::ROLE;
use crate::vocabulary::predicates::{
    BEGINNING, ENDING, MEMBER_OF, MEMBER_OF_KIND, PARTICIPANT_IN, PART_OF_POSSIBLE_WORLD,
    TEMPORAL_PART_OF,
};

impl RelationStore {
    /// Returns true if `entity` is a direct instance of `kind`.
    #[must_use]
    pub fn is_kind_of(&self, entity: &Entity, kind: &Entity) -> bool {
        self.objects(entity, MEMBER_OF_KIND).has(kind)
    }

    /// Returns true if `entity` is a member of `class`.
    #[must_use]
    pub fn is_member_of(&self, entity: &Entity, class: &Entity) -> bool {
        self.objects(entity, MEMBER_OF).has(class)
    }

    /// The classes `entity` is a member of.
    #[must_use]
    pub fn member_of(&self, entity: &Entity) -> EqSet<Entity> {
        self.get_related(entity, MEMBER_OF)
    }

    /// The kinds `entity` is an instance of.
    #[must_use]
    pub fn member_of_kind(&self, entity: &Entity) -> EqSet<Entity> {
        self.get_related(entity, MEMBER_OF_KIND)
    }

    /// Adds `entity` to `class`.
    pub fn add_member_of(&mut self, entity: &Entity, class: &Entity) {
        self.relate(MEMBER_OF, entity, class);
    }

    /// Makes `entity` an instance of `kind`.
    pub fn add_member_of_kind(&mut self, entity: &Entity, kind: &Entity) {
        self.relate(MEMBER_OF_KIND, entity, kind);
    }

    /// Kinds of `entity` that are themselves roles.
    #[must_use]
    pub fn roles(&self, entity: &Entity) -> EqSet<Entity> {
        let role = Entity::new(ROLE);
        self.objects(entity, MEMBER_OF_KIND)
            .filter(|kind| self.is_kind_of(kind, &role))
    }

    /// Declares `entity` part of the possible world `world`.
    pub fn add_to_possible_world(&mut self, entity: &Entity, world: &Entity) {
        self.relate(PART_OF_POSSIBLE_WORLD, entity, world);
    }

    /// Records `part` as a temporal part of `whole`.
    pub fn add_as_temporal_part_of(&mut self, part: &Entity, whole: &Entity) {
        self.relate(TEMPORAL_PART_OF, part, whole);
    }

    /// The whole `entity` is a temporal part of, if any.
    #[must_use]
    pub fn temporal_whole(&self, entity: &Entity) -> Option<Entity> {
        self.objects(entity, TEMPORAL_PART_OF).iter().next().cloned()
    }

    /// Records `participant` as taking part in `activity`.
    pub fn add_participant(&mut self, participant: &Entity, activity: &Entity) {
        self.relate(PARTICIPANT_IN, participant, activity);
    }

    /// Everything recorded as taking part in `activity`.
    #[must_use]
    pub fn participants(&self, activity: &Entity) -> EqSet<Entity> {
        self.pairs(PARTICIPANT_IN)
            .iter()
            .filter(|p| p.right == *activity)
            .map(|p| p.left.clone())
            .collect()
    }

    /// Relates `entity` to the point in time it begins at.
    ///
    /// No ordering check is made against any ending.
    pub fn set_beginning(&mut self, entity: &Entity, at: &Entity) {
        self.relate(BEGINNING, entity, at);
    }

    /// Relates `entity` to the point in time it ends at.
    pub fn set_ending(&mut self, entity: &Entity, at: &Entity) {
        self.relate(ENDING, entity, at);
    }

    /// The first recorded beginning of `entity`; `None` means unbounded.
    #[must_use]
    pub fn beginning(&self, entity: &Entity) -> Option<Entity> {
        self.objects(entity, BEGINNING).iter().next().cloned()
    }

    /// The first recorded ending of `entity`; `None` means unbounded.
    #[must_use]
    pub fn ending(&self, entity: &Entity) -> Option<Entity> {
        self.objects(entity, ENDING).iter().next().cloned()
    }
}
