//! Sign construction and resolution.
//!
//! A name or description is not a direct predicate on the entity it names.
//! It is a small sub-graph:
//!
//! ```text
//! pattern ──entity name──▶ "Alice Smith"
//!    ▲ member_of_
//! sign ◀──consists_of── representation by sign ──represents──▶ target
//!                          │ consists_of_ ──▶ recognizing language community
//!                          │ member_of_   ──▶ representation by pattern (identification | description)
//!                          │ beginning / ending ──▶ points in time
//! ```
//!
//! [`RelationStore::add_sign`] builds this shape and
//! [`RelationStore::signs_of_kind`] walks it back: target → representation by
//! sign → community check → sign → pattern → literal.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::eq_set::EqSet;
use crate::store::RelationStore;
use crate::vocabulary::kinds::{
    DESCRIPTION, IDENTIFICATION, PATTERN, RECOGNIZING_LANGUAGE_COMMUNITY, REPRESENTATION_BY_SIGN,
    SIGN,
};
use crate::vocabulary::predicates::{
    BEGINNING, CONSISTS_OF, CONSISTS_OF_, CONSISTS_OF_BY_CLASS, CONSISTS_OF_IN_MEMBERS, ENDING,
    ENTITY_NAME, MEMBER_OF_, PARTICIPANT_IN, REPRESENTED, REPRESENTS,
};

/// A resolved sign value and the window it is recognized over.
///
/// `None` bounds are unbounded. Two values are equal when their text is
/// equal, whatever their windows, so a resolved set holds one record per
/// literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignValue {
    /// The literal text of the sign.
    pub value: String,
    /// Point in time the recognition begins.
    pub beginning: Option<Entity>,
    /// Point in time the recognition ends.
    pub ending: Option<Entity>,
}

impl PartialEq for SignValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SignValue {}

impl Hash for SignValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl RelationStore {
    /// Records `value` as a name of `target` recognized by `community_name`.
    ///
    /// See [`add_sign`](Self::add_sign).
    #[allow(clippy::too_many_arguments)]
    pub fn add_identification(
        &mut self,
        namespace: &str,
        possible_world: &Entity,
        target: &Entity,
        value: &str,
        community_name: &str,
        from: &Entity,
        to: &Entity,
    ) -> Entity {
        self.add_sign(
            namespace,
            possible_world,
            target,
            value,
            community_name,
            &Entity::new(IDENTIFICATION),
            from,
            to,
        )
    }

    /// Records `value` as a description of `target` recognized by `community_name`.
    ///
    /// See [`add_sign`](Self::add_sign).
    #[allow(clippy::too_many_arguments)]
    pub fn add_description(
        &mut self,
        namespace: &str,
        possible_world: &Entity,
        target: &Entity,
        value: &str,
        community_name: &str,
        from: &Entity,
        to: &Entity,
    ) -> Entity {
        self.add_sign(
            namespace,
            possible_world,
            target,
            value,
            community_name,
            &Entity::new(DESCRIPTION),
            from,
            to,
        )
    }

    /// Builds the sign sub-graph giving `target` the value `value`.
    ///
    /// The pattern for `value` and the community named `community_name` are
    /// looked up by entity name and reused when present; otherwise they are
    /// created with ids under `namespace`. A new community joins
    /// `possible_world`. Every call creates a fresh sign, representation by
    /// pattern (of kind `sign_kind`) and representation by sign, so repeated
    /// calls are additive.
    ///
    /// Returns the representation by sign.
    #[allow(clippy::too_many_arguments)]
    pub fn add_sign(
        &mut self,
        namespace: &str,
        possible_world: &Entity,
        target: &Entity,
        value: &str,
        community_name: &str,
        sign_kind: &Entity,
        from: &Entity,
        to: &Entity,
    ) -> Entity {
        let pattern_kind = Entity::new(PATTERN);
        let community_kind = Entity::new(RECOGNIZING_LANGUAGE_COMMUNITY);

        let pattern = if let Some(existing) = self.find_by_entity_name(value, &pattern_kind) {
            existing
        } else {
            let created = self.create_entity(&pattern_kind, Entity::generate(namespace).into_id());
            self.relate(ENTITY_NAME, &created, &Entity::new(value));
            created
        };

        let community = if let Some(existing) = self.find_by_entity_name(community_name, &community_kind) {
            existing
        } else {
            let created = self.create_entity(&community_kind, Entity::generate(namespace).into_id());
            self.relate(ENTITY_NAME, &created, &Entity::new(community_name));
            self.add_to_possible_world(&created, possible_world);
            created
        };

        let sign = self.create_entity(&Entity::new(SIGN), Entity::generate(namespace).into_id());
        self.add_to_possible_world(&sign, possible_world);
        self.relate(MEMBER_OF_, &sign, &pattern);

        let by_pattern = self.create_entity(sign_kind, Entity::generate(namespace).into_id());
        self.relate(CONSISTS_OF_BY_CLASS, &by_pattern, &pattern);
        self.relate(CONSISTS_OF_IN_MEMBERS, &by_pattern, &community);
        self.relate(REPRESENTED, &by_pattern, target);

        let by_sign = self.create_entity(
            &Entity::new(REPRESENTATION_BY_SIGN),
            Entity::generate(namespace).into_id(),
        );
        self.add_to_possible_world(&by_sign, possible_world);
        self.relate(PARTICIPANT_IN, &sign, &by_sign);
        self.relate(PARTICIPANT_IN, &community, &by_sign);
        self.relate(CONSISTS_OF, &by_sign, &sign);
        self.relate(CONSISTS_OF_, &by_sign, &community);
        self.relate(MEMBER_OF_, &by_sign, &by_pattern);
        self.relate(REPRESENTS, &by_sign, target);
        self.set_beginning(&by_sign, from);
        self.set_ending(&by_sign, to);

        tracing::debug!(
            target_entity = %target,
            community = community_name,
            kind = %sign_kind,
            representation = %by_sign,
            "added sign"
        );
        by_sign
    }

    /// Names of `target` recognized by the community named `community_name`.
    #[must_use]
    pub fn identifications(&self, target: &Entity, community_name: &str) -> EqSet<SignValue> {
        self.signs_of_kind(target, community_name, &Entity::new(IDENTIFICATION))
    }

    /// Descriptions of `target` recognized by the community named `community_name`.
    #[must_use]
    pub fn descriptions(&self, target: &Entity, community_name: &str) -> EqSet<SignValue> {
        self.signs_of_kind(target, community_name, &Entity::new(DESCRIPTION))
    }

    /// Resolves the sign values of kind `sign_kind` for `target`.
    ///
    /// Only representations whose community is the very entity found by
    /// `community_name` count; a different community carrying the same name
    /// does not. When a representation has several beginnings or endings the
    /// first recorded one is reported, with no ordering between them. A
    /// literal reached through several representations is reported once,
    /// with the window of the first representation recorded.
    #[must_use]
    pub fn signs_of_kind(
        &self,
        target: &Entity,
        community_name: &str,
        sign_kind: &Entity,
    ) -> EqSet<SignValue> {
        let community_kind = Entity::new(RECOGNIZING_LANGUAGE_COMMUNITY);
        let Some(community) = self.find_by_entity_name(community_name, &community_kind) else {
            tracing::trace!(community = community_name, "no recognizing community with that name");
            return EqSet::new();
        };
        let sign_entity_kind = Entity::new(SIGN);

        let mut result = EqSet::new();
        let representations = self
            .pairs(REPRESENTS)
            .iter()
            .filter(|p| p.right == *target)
            .map(|p| &p.left)
            .filter(|by_sign| {
                self.objects(by_sign, MEMBER_OF_)
                    .first(|by_pattern| self.is_kind_of(by_pattern, sign_kind))
                    .is_some()
            });

        for by_sign in representations {
            let recognized_by = self
                .objects(by_sign, CONSISTS_OF_)
                .first(|c| self.is_kind_of(c, &community_kind));
            if recognized_by != Some(&community) {
                continue;
            }

            let beginning = self.objects(by_sign, BEGINNING).iter().next();
            let ending = self.objects(by_sign, ENDING).iter().next();
            let Some(sign) = self
                .objects(by_sign, CONSISTS_OF)
                .first(|s| self.is_kind_of(s, &sign_entity_kind))
            else {
                continue;
            };

            for pattern in self.objects(sign, MEMBER_OF_) {
                for literal in self.objects(pattern, ENTITY_NAME) {
                    result.add(SignValue {
                        value: literal.id().to_string(),
                        beginning: beginning.cloned(),
                        ending: ending.cloned(),
                    });
                }
            }
        }
        result
    }
}
