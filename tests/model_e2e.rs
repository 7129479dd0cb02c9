use chrono::{TimeZone, Utc};
use hqdm_store::vocabulary::{kinds, predicates};
use hqdm_store::{
    interchange, point_in_time_iri, utc_point_in_time_iri, vocabulary, Entity, ImportError,
    RelationStore, HQDM_NS,
};
use uuid::Uuid;

const BASE: &str = "test:";
const TEST_UUID_NS: Uuid = Uuid::from_u128(0x6586_6c43_03f7_4397_9649_7ac2_ab13_2df4);

fn test_id(name: &str) -> String {
    format!("{BASE}{}", Uuid::new_v5(&TEST_UUID_NS, name.as_bytes()))
}

fn kind(iri: &str) -> Entity {
    Entity::new(iri)
}

/// Every triple visible through one view must be visible through the other.
fn assert_views_agree(store: &RelationStore) {
    for (predicate, subject, object) in store.triples() {
        assert!(store.related(predicate, subject, object));
        assert!(
            store.get_related(subject, predicate).has(object),
            "{subject} {predicate} {object} missing from subject view"
        );
    }
}

#[test]
fn simple_model_distinguishes_class_from_kind() {
    let mut model = RelationStore::new();
    let person = kind(kinds::PERSON);
    let some_people = model.create_entity(&kind(kinds::CLASS), test_id("SomePeople"));
    let person1 = model.create_entity(&person, test_id("Person1"));
    let person2 = model.create_entity(&person, test_id("Person2"));
    for p in [&person1, &person2] {
        model.add_member_of(p, &some_people);
    }

    assert!(model.is_kind_of(&person1, &person));
    assert!(model.is_member_of(&person1, &some_people));
    assert!(model.is_member_of(&person2, &some_people));
    assert!(!model.is_kind_of(&person1, &some_people));
    assert!(!model.is_kind_of(&person2, &some_people));
    assert_views_agree(&model);
}

#[test]
fn activity_with_participants_and_roles() {
    let mut model = RelationStore::new();
    let at = |y, mo, d, h, mi| {
        point_in_time_iri(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    };
    let point = kind(kinds::POINT_IN_TIME);
    let activity_from = model.create_entity(&point, at(2023, 3, 1, 12, 0));
    let activity_to = model.create_entity(&point, at(2023, 3, 1, 13, 0));
    let teacher_from = model.create_entity(&point, at(1995, 12, 17, 3, 24));
    let open_end = model.create_entity(&point, at(9999, 12, 31, 0, 0));
    let student_from = model.create_entity(&point, at(2005, 5, 4, 12, 20));
    for p in [&activity_from, &activity_to, &teacher_from, &open_end, &student_from] {
        model.add_member_of(p, vocabulary().utc_milliseconds_class());
    }

    let teaching = model.create_entity(&kind(kinds::KIND_OF_ACTIVITY), test_id("Teaching"));
    let teacher_role = model.create_entity(&kind(kinds::ROLE), test_id("Teacher"));
    let student_role = model.create_entity(&kind(kinds::ROLE), test_id("Student"));
    let teacher = model.create_entity(&kind(kinds::PERSON), Entity::generate(BASE).into_id());
    let student = model.create_entity(&kind(kinds::PERSON), Entity::generate(BASE).into_id());
    let state_of_teacher =
        model.create_entity(&kind(kinds::STATE_OF_PERSON), Entity::generate(BASE).into_id());
    let state_of_student =
        model.create_entity(&kind(kinds::STATE_OF_PERSON), Entity::generate(BASE).into_id());
    for r in [kind(kinds::PARTICIPANT), teacher_role.clone()] {
        model.add_member_of_kind(&state_of_teacher, &r);
    }
    for r in [kind(kinds::PARTICIPANT), student_role.clone()] {
        model.add_member_of_kind(&state_of_student, &r);
    }
    model.add_as_temporal_part_of(&state_of_teacher, &teacher);
    model.add_as_temporal_part_of(&state_of_student, &student);

    let lesson = model.create_entity(&kind(kinds::ACTIVITY), Entity::generate(BASE).into_id());
    model.add_member_of_kind(&lesson, &teaching);
    for s in [&state_of_student, &state_of_teacher] {
        model.add_participant(s, &lesson);
    }
    model.set_beginning(&teacher, &teacher_from);
    model.set_ending(&teacher, &open_end);
    model.set_beginning(&student, &student_from);
    model.set_ending(&student, &open_end);
    for s in [&state_of_teacher, &state_of_student, &lesson] {
        model.set_beginning(s, &activity_from);
        model.set_ending(s, &activity_to);
    }

    assert_eq!(model.member_of_kind(&state_of_teacher).len(), 3);
    assert_eq!(model.member_of_kind(&state_of_student).len(), 3);
    assert!(model.roles(&state_of_teacher).has(&teacher_role));
    assert_eq!(model.participants(&lesson).len(), 2);
    assert_eq!(model.temporal_whole(&state_of_student), Some(student.clone()));
    assert_eq!(model.beginning(&lesson), Some(activity_from));
    assert_eq!(model.ending(&student), Some(open_end));
    assert!(model.is_member_of(&teacher_from, vocabulary().utc_milliseconds_class()));

    assert!(!model.save().is_empty());
    assert_views_agree(&model);
    assert!(!model.dump().is_empty());
}

#[test]
fn two_models_combine_into_a_third() {
    let mut m1 = RelationStore::new();
    let mut m2 = RelationStore::new();
    let ste = kind(kinds::SPATIO_TEMPORAL_EXTENT);
    let class = kind(kinds::CLASS);

    let t1 = m1.create_entity(&ste, test_id("STE1"));
    let t2 = m2.create_entity(&ste, test_id("STE2"));
    let t3 = m1.create_entity(&class, test_id("CLASS1"));
    let t4 = m2.create_entity(&class, test_id("CLASS2"));
    m1.add_member_of(&t1, &t3);
    m1.add_member_of(&t2, &t4);

    let m3 = RelationStore::add_models([&m1, &m2]);

    assert!(m1.is_kind_of(&t1, &ste));
    assert!(!m1.is_kind_of(&t2, &ste));
    assert!(m1.is_kind_of(&t3, &class));
    assert!(!m1.is_kind_of(&t4, &class));

    assert!(!m2.is_kind_of(&t1, &ste));
    assert!(m2.is_kind_of(&t2, &ste));
    assert!(!m2.is_kind_of(&t3, &class));
    assert!(m2.is_kind_of(&t4, &class));

    assert!(m3.is_kind_of(&t1, &ste));
    assert!(m3.is_kind_of(&t2, &ste));
    assert!(m3.is_kind_of(&t3, &class));
    assert!(m3.is_kind_of(&t4, &class));
    assert!(m3.is_member_of(&t1, &t3));
    assert!(m3.is_member_of(&t2, &t4));
    assert_views_agree(&m3);

    let m4 = RelationStore::add_models([&m2, &m1]);
    assert_eq!(m3.fingerprint(), m4.fingerprint());
    assert_eq!(m3.len(), m4.len());
}

#[test]
fn entity_names_on_a_copy_of_the_vocabulary() {
    let mut model = RelationStore::add_models([vocabulary().model()]);
    let person = kind(kinds::PERSON);
    let person1 = model.create_entity(&person, test_id("Person1"));
    let person2 = model.create_entity(&person, test_id("Person2"));
    let p1_name = Entity::new("Person One");
    let p2_name = Entity::new("Person Two");

    model.relate(predicates::ENTITY_NAME, &person1, &p1_name);
    model.relate(predicates::ENTITY_NAME, &person2, &p2_name);

    assert!(model.related(predicates::ENTITY_NAME, &person1, &p1_name));
    assert!(model.related(predicates::ENTITY_NAME, &person2, &p2_name));
    assert!(!model.related(predicates::ENTITY_NAME, &person1, &p2_name));
    assert!(!model.related(predicates::ENTITY_NAME, &person2, &p1_name));
    assert_eq!(model.find_by_entity_name("Person Two", &person), Some(person2));
    assert!(model.find_by_type(&person).has(&person1));
}

#[test]
fn export_then_import_preserves_triples() {
    let mut model = RelationStore::new();
    let person = kind(kinds::PERSON);
    let alice = model.create_entity(&person, test_id("Alice"));
    let team = model.create_entity(&kind(kinds::CLASS), test_id("Team"));
    model.add_member_of(&alice, &team);
    model.relate(predicates::ENTITY_NAME, &alice, &Entity::new("Alice"));

    let reloaded = RelationStore::load(model.save()).unwrap();
    assert_eq!(reloaded.fingerprint(), model.fingerprint());

    let via_json = interchange::from_json(&interchange::to_json_pretty(&model).unwrap()).unwrap();
    assert_eq!(via_json.fingerprint(), model.fingerprint());
    assert_eq!(via_json.entity_name(&alice), Some("Alice"));
}

#[test]
fn malformed_source_is_returned_not_raised() {
    let result = interchange::from_json("prefix hqdm: <http://hqdm.com/hqdm#>\ntest:thing a hqdm:Thing .");
    assert!(matches!(result, Err(ImportError::Decode { .. })));
}

#[test]
fn timestamp_ids_are_repeatable() {
    for n in [-100, -1, 0, 1, 100] {
        let t1 = utc_point_in_time_iri(n);
        let t2 = utc_point_in_time_iri(n);
        assert_eq!(t1, t2);
        assert_eq!(t1.len(), HQDM_NS.len() + 36);
    }
    assert_ne!(utc_point_in_time_iri(0), utc_point_in_time_iri(1));
}
