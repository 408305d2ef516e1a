//! The sandbox game module.
//!
//! Registered under a symbolic name and loaded on demand by the launcher;
//! the loader exports the game factory under [`GAME_BINDING`].

use gantry_host::core::{Game, GameFactory};
use gantry_registry::{LoadResult, ModuleContext, ModuleDef, ModuleError, Registry};

use crate::game::SandboxGame;

/// Symbolic module name the launcher asks for.
pub const MODULE: &str = "gantry.sandbox";

/// Binding under which the module exports its game factory.
pub const GAME_BINDING: &str = "game";

/// Registers the sandbox module. Call once at process initialization.
pub fn register(registry: &Registry) -> Result<(), ModuleError> {
    registry.register(ModuleDef::new(MODULE, load))
}

fn load(ctx: &mut ModuleContext) -> LoadResult {
    log::debug!("loading module '{}'", ctx.module());
    ctx.export(GAME_BINDING, build_game as GameFactory);
    Ok(())
}

fn build_game() -> anyhow::Result<Box<dyn Game>> {
    Ok(Box::new(SandboxGame::new()))
}
