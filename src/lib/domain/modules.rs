//! User-scoped plugin module registration
//!
//! Satisfies the host module system's registration contract; nothing here is
//! more than delegation.

/// Infrastructure handles the host framework passes to descriptor factories
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostComponents {
    /// Key of the plugin the generated descriptors belong to
    pub plugin_key: String,
}

/// A registered plugin module, addressed by its complete key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// `<plugin key>:<module key>`
    pub complete_key: String,

    /// Resource location of the module inside the plugin bundle
    pub location: String,
}

/// The callback contract the host module system registers against
pub trait DescriptorGenerator {
    /// Supplemental descriptors to expose for the given users at the given
    /// registration state
    fn descriptors_to_expose_for_users(
        &self,
        users: &[String],
        state: u64,
    ) -> Vec<ModuleDescriptor>;

    /// Build the single per-request descriptor instance
    fn create_individual_descriptor(&self) -> ModuleDescriptor;
}

/// Registers per-user CommonJS module exposure
///
/// No supplemental per-user descriptors are generated; every request is served
/// by one web-resource descriptor wired against the host components.
#[derive(Clone, Debug)]
pub struct UserScopedModulesDescriptor {
    host: HostComponents,
    module_key: String,
}

impl UserScopedModulesDescriptor {
    /// Create a descriptor registration for the given module key
    pub fn new(host: HostComponents, module_key: impl Into<String>) -> Self {
        Self {
            host,
            module_key: module_key.into(),
        }
    }
}

impl DescriptorGenerator for UserScopedModulesDescriptor {
    fn descriptors_to_expose_for_users(
        &self,
        _users: &[String],
        _state: u64,
    ) -> Vec<ModuleDescriptor> {
        Vec::new()
    }

    fn create_individual_descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            complete_key: format!("{}:{}", self.host.plugin_key, self.module_key),
            location: format!("modules/{}", self.module_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> UserScopedModulesDescriptor {
        UserScopedModulesDescriptor::new(
            HostComponents {
                plugin_key: "com.example.speakeasy".to_string(),
            },
            "commonjs-modules",
        )
    }

    #[test]
    fn test_no_supplemental_descriptors_for_any_users() {
        let users = vec!["alice".to_string(), "bob".to_string()];

        assert!(descriptor()
            .descriptors_to_expose_for_users(&users, 7)
            .is_empty());
        assert!(descriptor().descriptors_to_expose_for_users(&[], 0).is_empty());
    }

    #[test]
    fn test_individual_descriptor_is_keyed_by_plugin_and_module() {
        let individual = descriptor().create_individual_descriptor();

        assert_eq!(
            individual.complete_key,
            "com.example.speakeasy:commonjs-modules"
        );
        assert_eq!(individual.location, "modules/commonjs-modules");
    }
}
