use super::*;
use std::collections::HashSet;

#[test]
fn test_random_ids_are_unique() {
    let ids: HashSet<ShortcutId> = (0..1000).map(|_| ShortcutId::new_random()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_random_generator_yields_v4_uuids() {
    let id = RandomIdGenerator.next_id();
    assert_eq!(id.as_uuid().get_version_num(), 4);
}

#[test]
fn test_display_and_parse_roundtrip() {
    let id = ShortcutId::new_random();
    let rendered = id.to_string();
    assert_eq!(rendered.len(), 36);

    let parsed: ShortcutId = rendered.parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("not-a-uuid".parse::<ShortcutId>().is_err());
    assert!("".parse::<ShortcutId>().is_err());
}

#[test]
fn test_sequential_generator_counts_up() {
    let generator = SequentialIdGenerator::new();

    assert_eq!(generator.next_id(), ShortcutId::from_uuid(Uuid::from_u128(1)));
    assert_eq!(generator.next_id(), ShortcutId::from_uuid(Uuid::from_u128(2)));
    assert_eq!(generator.next_id(), ShortcutId::from_uuid(Uuid::from_u128(3)));
}

#[test]
fn test_sequential_generator_custom_start() {
    let generator = SequentialIdGenerator::starting_at(42);
    assert_eq!(
        generator.next_id().to_string(),
        "00000000-0000-0000-0000-00000000002a"
    );
}

#[test]
fn test_id_serializes_as_plain_string() {
    let id = ShortcutId::from_uuid(Uuid::from_u128(7));
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""00000000-0000-0000-0000-000000000007""#);

    let back: ShortcutId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_generators_usable_as_trait_objects() {
    let generators: Vec<Box<dyn IdGenerator>> = vec![
        Box::new(RandomIdGenerator),
        Box::new(SequentialIdGenerator::default()),
    ];

    let ids: HashSet<ShortcutId> = generators.iter().map(|g| g.next_id()).collect();
    assert_eq!(ids.len(), 2);
}
