//! Well-known HQDM identifiers.
//!
//! Predicate and kind IRIs used by the store, plus the immutable catalog of
//! HQDM kinds. The catalog is built once on first use and is read-only
//! afterwards; copy it into a working store with
//! [`RelationStore::add_models`](crate::RelationStore::add_models).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::config::{ModelConfig, HQDM_NS};
use crate::entity::Entity;
use crate::store::RelationStore;

/// Predicate IRIs.
pub mod predicates {
    /// Type assertion recorded by `create_entity`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// Literal name of an entity. Exported as a literal, never as a reference.
    pub const ENTITY_NAME: &str = "https://hqdmtop.github.io/hqdm#data_EntityName";
    /// Links a representation by sign to its sign.
    pub const CONSISTS_OF: &str = "https://hqdmtop.github.io/hqdm#consists_of";
    /// Links a representation by sign to its recognizing community.
    pub const CONSISTS_OF_: &str = "https://hqdmtop.github.io/hqdm#consists_of_";
    /// Class-level part-of relation.
    pub const PART_OF_BY_CLASS: &str = "https://hqdmtop.github.io/hqdm#part_of_by_class";
    /// Links a representation by sign to the entity it names or describes.
    pub const REPRESENTS: &str = "https://hqdmtop.github.io/hqdm#represents";
    /// Links a representation by pattern to its pattern.
    pub const CONSISTS_OF_BY_CLASS: &str = "https://hqdmtop.github.io/hqdm#consists_of_by_class";
    /// Links a representation by pattern to its community.
    pub const CONSISTS_OF_IN_MEMBERS: &str = "https://hqdmtop.github.io/hqdm#consists_of_in_members";
    /// Links a representation by pattern to the represented entity.
    pub const REPRESENTED: &str = "https://hqdmtop.github.io/hqdm#represented";
    /// Class membership. Orthogonal to [`MEMBER_OF_KIND`].
    pub const MEMBER_OF: &str = "https://hqdmtop.github.io/hqdm#member_of";
    /// Membership of a sign in a pattern, or of a representation in a representation by pattern.
    pub const MEMBER_OF_: &str = "https://hqdmtop.github.io/hqdm#member_of_";
    /// Direct instantiation of a kind.
    pub const MEMBER_OF_KIND: &str = "https://hqdmtop.github.io/hqdm#member_of_kind";
    /// Membership of a possible world.
    pub const PART_OF_POSSIBLE_WORLD: &str = "https://hqdmtop.github.io/hqdm#part_of_possible_world";
    /// Temporal part to whole.
    pub const TEMPORAL_PART_OF: &str = "https://hqdmtop.github.io/hqdm#temporal_part_of";
    /// Participant to activity.
    pub const PARTICIPANT_IN: &str = "https://hqdmtop.github.io/hqdm#participant_in";
    /// Point in time an extent begins at.
    pub const BEGINNING: &str = "https://hqdmtop.github.io/hqdm#beginning";
    /// Point in time an extent ends at.
    pub const ENDING: &str = "https://hqdmtop.github.io/hqdm#ending";
}

/// Kind IRIs referenced directly by code and tests.
///
/// The full catalog is available through [`vocabulary`].
pub mod kinds {
    /// Root kind; every catalog kind is an instance of it.
    pub const THING: &str = "https://hqdmtop.github.io/hqdm#thing";
    /// Class.
    pub const CLASS: &str = "https://hqdmtop.github.io/hqdm#class";
    /// Activity.
    pub const ACTIVITY: &str = "https://hqdmtop.github.io/hqdm#activity";
    /// Kind of activity.
    pub const KIND_OF_ACTIVITY: &str = "https://hqdmtop.github.io/hqdm#kind_of_activity";
    /// Participant.
    pub const PARTICIPANT: &str = "https://hqdmtop.github.io/hqdm#participant";
    /// Person.
    pub const PERSON: &str = "https://hqdmtop.github.io/hqdm#person";
    /// State of person.
    pub const STATE_OF_PERSON: &str = "https://hqdmtop.github.io/hqdm#state_of_person";
    /// Individual.
    pub const INDIVIDUAL: &str = "https://hqdmtop.github.io/hqdm#individual";
    /// Role; kinds that are roles are reported by `roles`.
    pub const ROLE: &str = "https://hqdmtop.github.io/hqdm#role";
    /// Classification.
    pub const CLASSIFICATION: &str = "https://hqdmtop.github.io/hqdm#classification";
    /// Defined relationship.
    pub const DEFINED_RELATIONSHIP: &str = "https://hqdmtop.github.io/hqdm#defined_relationship";
    /// Kind of relationship with signature.
    pub const KIND_OF_RELATIONSHIP_WITH_SIGNATURE: &str =
        "https://hqdmtop.github.io/hqdm#kind_of_relationship_with_signature";
    /// Point in time.
    pub const POINT_IN_TIME: &str = "https://hqdmtop.github.io/hqdm#point_in_time";
    /// Class of point in time.
    pub const CLASS_OF_POINT_IN_TIME: &str = "https://hqdmtop.github.io/hqdm#class_of_point_in_time";
    /// Possible world.
    pub const POSSIBLE_WORLD: &str = "https://hqdmtop.github.io/hqdm#possible_world";
    /// Spatio-temporal extent.
    pub const SPATIO_TEMPORAL_EXTENT: &str = "https://hqdmtop.github.io/hqdm#spatio_temporal_extent";
    /// Pattern: the literal of a sign viewed as a class.
    pub const PATTERN: &str = "https://hqdmtop.github.io/hqdm#pattern";
    /// Sign.
    pub const SIGN: &str = "https://hqdmtop.github.io/hqdm#sign";
    /// Community whose recognition scopes sign values.
    pub const RECOGNIZING_LANGUAGE_COMMUNITY: &str =
        "https://hqdmtop.github.io/hqdm#recognizing_language_community";
    /// Representation by sign.
    pub const REPRESENTATION_BY_SIGN: &str = "https://hqdmtop.github.io/hqdm#representation_by_sign";
    /// Representation by pattern that names.
    pub const IDENTIFICATION: &str = "https://hqdmtop.github.io/hqdm#identification";
    /// Representation by pattern that describes.
    pub const DESCRIPTION: &str = "https://hqdmtop.github.io/hqdm#description";
}

/// Local names of the HQDM kinds in the catalog. Each becomes `HQDM_NS + name`.
const KIND_NAMES: &[&str] = &[
    "abstract_object", "acceptance_of_offer", "acceptance_of_offer_for_goods", "activity",
    "aggregation", "agree_contract", "agreement_execution", "agreement_process", "amount_of_money",
    "asset", "association", "beginning_of_ownership", "biological_object", "biological_system",
    "biological_system_component", "class", "class_of_abstract_object", "class_of_activity",
    "class_of_agree_contract", "class_of_agreement_execution", "class_of_agreement_process",
    "class_of_amount_of_money", "class_of_association", "class_of_biological_object",
    "class_of_biological_system", "class_of_biological_system_component", "class_of_class",
    "class_of_class_of_spatio_temporal_extent", "class_of_contract_execution",
    "class_of_contract_process", "class_of_event", "class_of_functional_object",
    "class_of_functional_system", "class_of_functional_system_component",
    "class_of_in_place_biological_component", "class_of_individual",
    "class_of_installed_functional_system_component", "class_of_installed_object",
    "class_of_intentionally_constructed_object", "class_of_offer",
    "class_of_ordinary_biological_object", "class_of_ordinary_functional_object",
    "class_of_ordinary_physical_object", "class_of_organization",
    "class_of_organization_component", "class_of_participant", "class_of_party",
    "class_of_period_of_time", "class_of_person", "class_of_person_in_position",
    "class_of_physical_object", "class_of_physical_property", "class_of_physical_quantity",
    "class_of_point_in_time", "class_of_position", "class_of_possible_world",
    "class_of_reaching_agreement", "class_of_relationship", "class_of_representation",
    "class_of_sales_product_instance", "class_of_sign", "class_of_socially_contructed_activity",
    "class_of_socially_contructed_object", "class_of_spatio_temporal_extent", "class_of_state",
    "class_of_state_of_activity", "class_of_state_of_amount_of_money",
    "class_of_state_of_association", "class_of_state_of_biological_object",
    "class_of_state_of_biological_system", "class_of_state_of_biological_system_component",
    "class_of_state_of_functional_object", "class_of_state_of_functional_system",
    "class_of_state_of_functional_system_component",
    "class_of_state_of_intentionally_constructed_object",
    "class_of_state_of_ordinary_biological_object", "class_of_state_of_ordinary_functional_object",
    "class_of_state_of_ordinary_physical_object", "class_of_state_of_organization",
    "class_of_state_of_organization_component", "class_of_state_of_party",
    "class_of_state_of_person", "class_of_state_of_physical_object", "class_of_state_of_position",
    "class_of_state_of_sales_product_instance", "class_of_state_of_sign",
    "class_of_state_of_socially_constructed_activity",
    "class_of_state_of_socially_constructed_object", "class_of_state_of_system",
    "class_of_state_of_system_component", "class_of_system", "class_of_system_component",
    "classification", "composition", "contract_execution", "contract_process", "currency",
    "defined_relationship", "definition", "description", "employee", "employer", "employment",
    "ending_of_ownership", "enumerated_class", "event", "exchange_of_goods_and_money", "function_",
    "functional_object", "functional_system", "functional_system_component", "identification",
    "identification_of_physical_quantity", "in_place_biological_component", "individual",
    "installed_functional_system_component", "installed_object",
    "intentionally_constructed_object", "kind_of_activity", "kind_of_association",
    "kind_of_biological_object", "kind_of_biological_system",
    "kind_of_biological_system_component", "kind_of_functional_object",
    "kind_of_functional_system", "kind_of_functional_system_component", "kind_of_individual",
    "kind_of_intentionally_constructed_object", "kind_of_ordinary_biological_object",
    "kind_of_ordinary_functional_object", "kind_of_ordinary_physical_object",
    "kind_of_organization", "kind_of_organization_component", "kind_of_party", "kind_of_person",
    "kind_of_physical_object", "kind_of_physical_property", "kind_of_physical_quantity",
    "kind_of_position", "kind_of_relationship_with_restriction",
    "kind_of_relationship_with_signature", "kind_of_socially_constructed_object", "kind_of_system",
    "kind_of_system_component", "language_community", "money_asset", "offer",
    "offer_and_acceptance_for_goods", "offer_for_goods", "offering", "ordinary_biological_object",
    "ordinary_functional_object", "ordinary_physical_object", "organization",
    "organization_component", "owner", "ownership", "participant", "party", "pattern",
    "period_of_time", "person", "person_in_position", "physical_object", "physical_property",
    "physical_property_range", "physical_quantity", "physical_quantity_range", "plan",
    "point_in_time", "position", "possible_world", "price", "product_brand", "product_offering",
    "reaching_agreement", "recognizing_language_community", "relationship",
    "representation_by_sign", "representation_by_pattern", "requirement",
    "requirement_specification", "role", "sale_of_goods", "sales_product",
    "sales_product_instance", "sales_product_version", "scale", "sign",
    "socially_constructed_activity", "socially_constructed_object", "spatio_temporal_extent",
    "specialization", "state", "state_of_activity", "state_of_amount_of_money",
    "state_of_association", "state_of_biological_object", "state_of_biological_system",
    "state_of_biological_system_component", "state_of_functional_object",
    "state_of_functional_system", "state_of_functional_system_component",
    "state_of_intentionally_constructed_object", "state_of_language_community",
    "state_of_ordinary_biological_object", "state_of_ordinary_functional_object",
    "state_of_ordinary_physical_object", "state_of_organization",
    "state_of_organization_component", "state_of_party", "state_of_person",
    "state_of_physical_object", "state_of_position", "state_of_sales_product_instance",
    "state_of_sign", "state_of_socially_constructed_activity",
    "state_of_socially_constructed_object", "state_of_system", "state_of_system_component",
    "system", "system_component", "temporal_composition", "transfer_of_ownership",
    "transfer_of_ownership_of_money", "transferee", "transferor", "unit_of_measure",
];

/// The read-only HQDM catalog.
#[derive(Debug)]
pub struct Vocabulary {
    model: RelationStore,
    kinds: BTreeMap<&'static str, Entity>,
    utc_milliseconds_class: Entity,
}

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

/// Returns the process-wide catalog, building it on first use.
///
/// # Examples
///
/// ```
/// use hqdm_store::{vocabulary, Entity};
/// use hqdm_store::vocabulary::kinds;
///
/// let person = vocabulary().kind("person").unwrap();
/// assert_eq!(person, &Entity::new(kinds::PERSON));
/// assert!(vocabulary().model().is_kind_of(person, &Entity::new(kinds::THING)));
/// ```
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(Vocabulary::build)
}

impl Vocabulary {
    fn build() -> Self {
        let config = ModelConfig::default();
        let thing = Entity::new(kinds::THING);
        let mut model = RelationStore::new();

        let catalog = KIND_NAMES
            .iter()
            .map(|name| (*name, model.create_entity(&thing, format!("{HQDM_NS}{name}"))))
            .collect();

        // Not part of HQDM: the class of point in time whose members are UTC milliseconds.
        let utc_milliseconds_class = model.create_entity(
            &Entity::new(kinds::CLASS_OF_POINT_IN_TIME),
            format!("{HQDM_NS}{}", config.point_in_time_namespace()),
        );
        model.relate(
            predicates::ENTITY_NAME,
            &utc_milliseconds_class,
            &Entity::new(format!("{HQDM_NS}{}", config.point_in_time_class)),
        );

        tracing::debug!(kinds = KIND_NAMES.len(), triples = model.len(), "built HQDM vocabulary");

        Self {
            model,
            kinds: catalog,
            utc_milliseconds_class,
        }
    }

    /// The catalog as a store of type and kind assertions.
    #[must_use]
    pub fn model(&self) -> &RelationStore {
        &self.model
    }

    /// Looks up a kind by its local name, e.g. `"person"`.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<&Entity> {
        self.kinds.get(name)
    }

    /// Iterates the catalog kinds ordered by local name.
    pub fn kinds(&self) -> impl Iterator<Item = &Entity> {
        self.kinds.values()
    }

    /// Number of kinds in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if the catalog holds no kinds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The class whose members are points in time measured in UTC milliseconds.
    #[must_use]
    pub fn utc_milliseconds_class(&self) -> &Entity {
        &self.utc_milliseconds_class
    }
}
