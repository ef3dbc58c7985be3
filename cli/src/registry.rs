use granska_core::PluginRegistry;

#[cfg(feature = "pip")]
use granska_plugin_pip::PipPlugin;

pub fn build() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    #[cfg(feature = "pip")]
    PipPlugin::register(&mut registry);

    registry
}
