use super::*;

// =============================================================
// MemoryPage
// =============================================================

#[test]
fn memory_page_without_control_finds_nothing() {
    let page = MemoryPage::new();
    assert!(page.control("themeToggle").is_none());
}

#[test]
fn memory_page_finds_control_by_id() {
    let page = MemoryPage::with_control("themeToggle", "🌙");
    assert!(page.control("other").is_none());
    let control = page.control("themeToggle").expect("control");
    assert_eq!(control.label(), "🌙");
}

#[test]
fn set_flag_adds_and_removes() {
    let page = MemoryPage::new();
    page.set_flag("light-theme", true);
    assert!(page.has_flag("light-theme"));
    page.set_flag("light-theme", false);
    assert!(!page.has_flag("light-theme"));
}

#[test]
fn toggle_flag_reports_new_state() {
    let page = MemoryPage::new();
    assert!(page.toggle_flag("light-theme"));
    assert!(!page.toggle_flag("light-theme"));
    assert!(!page.has_flag("light-theme"));
}

// =============================================================
// MemoryControl
// =============================================================

#[test]
fn control_clones_share_label() {
    let control = MemoryControl::new("🌙");
    let clone = control.clone();
    clone.set_label("☀️");
    assert_eq!(control.label(), "☀️");
}

#[test]
fn click_runs_every_handler() {
    let control = MemoryControl::new("");
    let hits = Rc::new(RefCell::new(0));
    for _ in 0..2 {
        let hits = Rc::clone(&hits);
        control.on_activate(Box::new(move || *hits.borrow_mut() += 1));
    }
    control.click();
    assert_eq!(control.handler_count(), 2);
    assert_eq!(*hits.borrow(), 2);
}

#[test]
fn click_without_handlers_is_noop() {
    let control = MemoryControl::new("🌙");
    control.click();
    assert_eq!(control.label(), "🌙");
}

#[test]
fn handler_can_use_its_own_control() {
    let control = MemoryControl::new("");
    let inner = control.clone();
    control.on_activate(Box::new(move || {
        inner.set_label("clicked");
        inner.on_activate(Box::new(|| {}));
    }));

    control.click();
    assert_eq!(control.handler_count(), 2);

    control.click();
    assert_eq!(control.handler_count(), 3);
    assert_eq!(control.label(), "clicked");
}
