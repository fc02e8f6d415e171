use super::*;

// =============================================================
// Sample directory
// =============================================================

#[test]
fn sample_has_one_user_per_role() {
    let directory = UserDirectory::sample();
    assert_eq!(directory.users.len(), 3);
    for role in Role::ALL {
        assert_eq!(directory.users.iter().filter(|u| u.role == role).count(), 1, "role {role:?}");
    }
}

#[test]
fn sample_student_is_alex() {
    let directory = UserDirectory::sample();
    let student = directory.find_by_role(Role::Student).unwrap();
    assert_eq!(student.name, "Alex Chen");
    assert_eq!(student.points, Some(2450));
    assert_eq!(student.level, Some(8));
    assert_eq!(student.badges.len(), 3);
}

#[test]
fn sample_teacher_has_no_progress() {
    let directory = UserDirectory::sample();
    let teacher = directory.find_by_role(Role::Teacher).unwrap();
    assert_eq!(teacher.name, "Ms. Rodriguez");
    assert!(teacher.points.is_none());
    assert!(teacher.level.is_none());
}

#[test]
fn sample_parent_links_alex_without_badges() {
    let directory = UserDirectory::sample();
    let parent = directory.find_by_role(Role::Parent).unwrap();
    assert_eq!(parent.name, "John Smith");
    assert_eq!(parent.children.len(), 1);
    let child = &parent.children[0];
    assert_eq!(child.name, "Alex Chen");
    assert_eq!(child.points, Some(2450));
    assert!(child.badges.is_empty());
}

#[test]
fn sample_ids_are_unique() {
    let directory = UserDirectory::sample();
    let mut ids: Vec<_> = directory.users.iter().map(|u| u.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), directory.users.len());
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_by_role_returns_first_declared_match() {
    let directory = UserDirectory::new(vec![
        User::new("10", "First Teacher", Role::Teacher, "a@example.com"),
        User::new("11", "Second Teacher", Role::Teacher, "b@example.com"),
    ]);
    assert_eq!(directory.find_by_role(Role::Teacher).unwrap().id, "10");
}

#[test]
fn find_by_role_missing_returns_none() {
    let directory = UserDirectory::new(vec![User::new("1", "Only Student", Role::Student, "s@example.com")]);
    assert!(directory.find_by_role(Role::Parent).is_none());
}

#[test]
fn empty_directory_finds_nothing() {
    let directory = UserDirectory::default();
    assert!(directory.users.is_empty());
    for role in Role::ALL {
        assert!(directory.find_by_role(role).is_none());
    }
}
