use super::*;

#[test]
fn inactive_buttons_share_base_class() {
    assert_eq!(nav_button_class(ActiveView::Editor, false), "nav-bar__button");
    assert_eq!(nav_button_class(ActiveView::Generator, false), "nav-bar__button");
}

#[test]
fn active_button_carries_view_accent() {
    assert!(nav_button_class(ActiveView::Editor, true).contains("nav-bar__button--editor"));
    assert!(nav_button_class(ActiveView::Generator, true).contains("nav-bar__button--generator"));
}
