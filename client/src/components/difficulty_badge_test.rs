use super::*;

#[test]
fn difficulty_class_carries_key() {
    assert_eq!(difficulty_class(Difficulty::Easy), "badge badge--easy");
    assert_eq!(difficulty_class(Difficulty::Medium), "badge badge--medium");
    assert_eq!(difficulty_class(Difficulty::Hard), "badge badge--hard");
}
