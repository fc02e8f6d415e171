use super::*;

#[test]
fn status_dot_distinguishes_activity() {
    assert_eq!(status_dot_class(ActivityStatus::Active), "dot dot--active");
    assert_eq!(status_dot_class(ActivityStatus::Inactive), "dot dot--idle");
}

#[test]
fn sample_modules_have_stable_performance_figures() {
    let catalog = Catalog::sample();
    let first: Vec<ModuleStats> = catalog.modules.iter().map(|m| ModuleStats::for_module(&m.id)).collect();
    let second: Vec<ModuleStats> = catalog.modules.iter().map(|m| ModuleStats::for_module(&m.id)).collect();
    assert_eq!(first, second);
}
