use super::*;

#[test]
fn default_config_uses_page_contract_names() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.control_id, "themeToggle");
    assert_eq!(config.light_class, "light-theme");
}
