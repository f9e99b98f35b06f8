//! The closed set of artifact kinds packsmith can generate.
//! A kind selects both the stub asset and the destination sub-path.

use std::fmt;

/// Enumerated tag for every generatable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Controller,
    Resource,
    Provider,
    ModuleProvider,
    AdminController,
    AdminRoute,
    Model,
    ModelProxy,
    Migration,
    Seeder,
    Middleware,
    Request,
    Event,
    Listener,
    Mail,
    Command,
    Repository,
    Contract,
    Notification,
}

/// Every kind, in the order the make-commands are registered.
pub const ALL_KINDS: [ArtifactKind; 19] = [
    ArtifactKind::Controller,
    ArtifactKind::Resource,
    ArtifactKind::Provider,
    ArtifactKind::ModuleProvider,
    ArtifactKind::AdminController,
    ArtifactKind::AdminRoute,
    ArtifactKind::Model,
    ArtifactKind::ModelProxy,
    ArtifactKind::Migration,
    ArtifactKind::Seeder,
    ArtifactKind::Middleware,
    ArtifactKind::Request,
    ArtifactKind::Event,
    ArtifactKind::Listener,
    ArtifactKind::Mail,
    ArtifactKind::Command,
    ArtifactKind::Repository,
    ArtifactKind::Contract,
    ArtifactKind::Notification,
];

impl ArtifactKind {
    /// Stable string key, used both as the stub asset name (`<key>.stub`)
    /// and as the lookup key into the layout's artifact table.
    pub fn key(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Resource => "resource",
            ArtifactKind::Provider => "provider",
            ArtifactKind::ModuleProvider => "module-provider",
            ArtifactKind::AdminController => "admin-controller",
            ArtifactKind::AdminRoute => "admin-route",
            ArtifactKind::Model => "model",
            ArtifactKind::ModelProxy => "model-proxy",
            ArtifactKind::Migration => "migration",
            ArtifactKind::Seeder => "seeder",
            ArtifactKind::Middleware => "middleware",
            ArtifactKind::Request => "request",
            ArtifactKind::Event => "event",
            ArtifactKind::Listener => "listener",
            ArtifactKind::Mail => "mail",
            ArtifactKind::Command => "command",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Contract => "contract",
            ArtifactKind::Notification => "notification",
        }
    }

    /// File stem of the generated source file.
    ///
    /// Route files are not classes and keep a fixed name; every other kind
    /// is named after the derived class.
    pub fn file_stem(&self, class_name: &str) -> String {
        match self {
            ArtifactKind::AdminRoute => "admin-routes".to_string(),
            _ => class_name.to_string(),
        }
    }

    /// Whether this kind's stub references the package's `$LOWER_NAME$`
    /// (view/lang namespaces, table names, route prefixes).
    pub fn wants_lower_name(&self) -> bool {
        matches!(
            self,
            ArtifactKind::Provider
                | ArtifactKind::ModuleProvider
                | ArtifactKind::Migration
                | ArtifactKind::AdminRoute
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = ALL_KINDS.iter().map(|k| k.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ALL_KINDS.len());
    }

    #[test]
    fn test_admin_route_has_fixed_stem() {
        assert_eq!(ArtifactKind::AdminRoute.file_stem("BlogController"), "admin-routes");
        assert_eq!(ArtifactKind::Controller.file_stem("BlogController"), "BlogController");
    }
}
