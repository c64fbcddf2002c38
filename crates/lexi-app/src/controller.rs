use lexi_config::Config;
use lexi_core::menu::MenuProjection;
use lexi_core::navigator::Navigator;
use lexi_menu::RofiPresenter;
use lexi_oxford::OxfordProvider;

pub type AppNavigator = Navigator<OxfordProvider, RofiPresenter>;

/// Wires the Oxford client and the picker into a navigator
pub fn build_navigator(config: &Config, words: Vec<String>) -> anyhow::Result<AppNavigator> {
    if !config.provider.has_credentials() {
        tracing::warn!("No Oxford credentials configured, set OXFORD_APP_ID and OXFORD_APP_KEY");
    }

    let provider = OxfordProvider::from_config(&config.provider)?;
    let presenter = RofiPresenter::from_config(&config.menu);
    tracing::debug!("Using menu program {}", config.menu.command);

    let navigator = Navigator::new(
        provider,
        MenuProjection::new(presenter, config.menu.back_label.clone()),
        words,
        config.navigation.clone(),
    )
    .with_define_prompt(config.menu.define_prompt.clone());

    Ok(navigator)
}
