use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A named global value exported by a loaded module.
///
/// The value is type-erased; callers downcast to the concrete type they
/// expect. Clones share the value behind an `Arc` and stay valid even if the
/// module's exports are later replaced by a reload.
#[derive(Clone)]
pub struct Binding {
    module: String,
    name: String,
    value: Arc<dyn Any + Send + Sync>,
}

impl Binding {
    pub(crate) fn new(
        module: impl Into<String>,
        name: impl Into<String>,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            value,
        }
    }

    /// Name of the module that exported this binding.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The binding's exported name within its module.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the exported value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the exported value as a `T`, or `None` on type mismatch.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("module", &self.module)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding_of<T: Any + Send + Sync>(value: T) -> Binding {
        Binding::new("m", "b", Arc::new(value))
    }

    #[test]
    fn downcast_to_the_exported_type() {
        let binding = binding_of(7u32);
        assert!(binding.is::<u32>());
        assert_eq!(binding.downcast_ref::<u32>(), Some(&7));
    }

    #[test]
    fn downcast_to_a_different_type_fails() {
        let binding = binding_of(7u32);
        assert!(!binding.is::<String>());
        assert_eq!(binding.downcast_ref::<i64>(), None);
    }

    #[test]
    fn clones_share_the_value() {
        let binding = binding_of("hello".to_string());
        let copy = binding.clone();
        let a = binding.downcast_ref::<String>().map(|s| s as *const String);
        let b = copy.downcast_ref::<String>().map(|s| s as *const String);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_omits_the_value() {
        let text = format!("{:?}", binding_of(1u8));
        assert!(text.contains("module"));
        assert!(!text.contains("value"));
    }
}
