use anyhow::Result;
use gantry_host::config::HostConfig;
use gantry_host::logging::{LoggingConfig, init_logging};
use gantry_host::shell::Shell;
use gantry_launcher::{LaunchSpec, Launcher, global_registry};

mod game;
mod module;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Module registration happens up front, before any lifecycle callback.
    let registry = global_registry();
    module::register(registry)?;

    let mut shell = Shell::new(
        HostConfig::default()
            .with_title("Gantry Sandbox")
            .with_size(960.0, 600.0),
    );

    let mut launcher = Launcher::new(LaunchSpec::new(module::MODULE, module::GAME_BINDING));
    launcher.on_start(&mut shell, registry, None);

    shell.run()
}
