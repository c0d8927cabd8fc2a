use super::*;

#[test]
fn shell_defaults_to_editor() {
    let shell = ShellState::default();
    assert_eq!(shell.active_view, ActiveView::Editor);
    assert!(shell.is_active(ActiveView::Editor));
    assert!(!shell.is_active(ActiveView::Generator));
}

#[test]
fn select_view_switches_active_view() {
    let mut shell = ShellState::default();
    assert!(shell.select_view(ActiveView::Generator));
    assert_eq!(shell.active_view, ActiveView::Generator);
    assert!(shell.select_view(ActiveView::Editor));
    assert_eq!(shell.active_view, ActiveView::Editor);
}

#[test]
fn reselecting_active_view_is_noop() {
    let mut shell = ShellState::new(ActiveView::Generator);
    assert!(!shell.select_view(ActiveView::Generator));
    assert_eq!(shell, ShellState::new(ActiveView::Generator));
}

#[test]
fn view_labels_are_distinct() {
    assert_ne!(ActiveView::Editor.label(), ActiveView::Generator.label());
}

#[test]
fn navigation_order_starts_with_editor() {
    assert_eq!(ActiveView::ALL, [ActiveView::Editor, ActiveView::Generator]);
}
