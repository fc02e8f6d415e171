use super::*;

#[test]
fn icon_class_without_tone() {
    assert_eq!(icon_class(IconSize::Medium, None), "icon icon--md");
}

#[test]
fn icon_class_with_tone() {
    assert_eq!(icon_class(IconSize::Hero, Some(Tone::Emerald)), "icon icon--xl tone--emerald");
}

#[test]
fn every_icon_has_a_glyph() {
    let icons = [
        Icon::Leaf,
        Icon::User,
        Icon::Users,
        Icon::GraduationCap,
        Icon::Award,
        Icon::BarChart,
        Icon::Target,
        Icon::Gamepad,
        Icon::ArrowRight,
        Icon::Star,
        Icon::Trophy,
        Icon::Zap,
        Icon::TreePine,
        Icon::Recycle,
        Icon::Droplets,
    ];
    for icon in icons {
        assert!(!glyph(icon).is_empty(), "{icon:?}");
    }
}
