//! Named-module registry for late-bound game modules.
//!
//! A module is registered up front as a symbolic name plus a loader
//! function; nothing runs until someone asks for it with
//! [`Registry::ensure_loaded`]. A successful load runs the loader exactly
//! once for the lifetime of the registry. While it runs, the loader exports
//! named global bindings, which callers later look up with
//! [`Registry::resolve`] and downcast to the concrete type they expect.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`binding`] | [`Binding`], a type-erased exported value |
//! | [`error`] | [`ModuleError`] |
//! | [`registry`] | [`Registry`], [`ModuleDef`], [`ModuleContext`] |
//!
//! # Quick start
//!
//! ```
//! use gantry_registry::{LoadResult, ModuleContext, ModuleDef, Registry};
//!
//! fn load(ctx: &mut ModuleContext) -> LoadResult {
//!     ctx.export("answer", 42u32);
//!     Ok(())
//! }
//!
//! let registry = Registry::new();
//! registry.register(ModuleDef::new("demo.core", load)).unwrap();
//! registry.ensure_loaded("demo.core").unwrap();
//!
//! let binding = registry.resolve("demo.core", "answer").unwrap();
//! assert_eq!(binding.downcast_ref::<u32>(), Some(&42));
//! ```

pub mod binding;
pub mod error;
pub mod registry;

pub use binding::Binding;
pub use error::ModuleError;
pub use registry::{LoadResult, ModuleContext, ModuleDef, ModuleLoader, Registry};
