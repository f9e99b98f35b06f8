use packsmith::config::Config;
use packsmith::error::{Error, Result};
use packsmith::package::PackageGenerator;
use packsmith::registry::{DirectoryRegistry, PackageRegistry};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn test_config(packages_root: &Path) -> Config {
    Config {
        packages_root: packages_root.to_path_buf(),
        stubs_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("stubs"),
        ..Config::default()
    }
}

/// Registry double that records the calls made against it.
struct FakeRegistry {
    present: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeRegistry {
    fn new(present: bool) -> Self {
        Self { present, calls: RefCell::new(Vec::new()) }
    }
}

impl PackageRegistry for FakeRegistry {
    fn exists(&self, name: &str) -> Result<bool> {
        self.calls.borrow_mut().push(format!("exists:{name}"));
        Ok(self.present)
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("delete:{name}"));
        Ok(())
    }
}

const SCAFFOLD_FOLDERS: [&str; 18] = [
    "Config",
    "Console/Commands",
    "Database/Migrations",
    "Database/Seeders",
    "Contracts",
    "Models",
    "Http",
    "Http/Controllers",
    "Http/Middleware",
    "Http/Requests",
    "Providers",
    "Repositories",
    "Events",
    "Listeners",
    "Mail",
    "Resources/assets",
    "Resources/lang",
    "Resources/views",
];

#[test]
fn test_full_package_generation() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(false);

    PackageGenerator::new(&config, &registry, "blog").generate().unwrap();

    assert_eq!(registry.calls.borrow().as_slice(), ["exists:blog"]);

    let src = temp_dir.path().join("blog/src");
    for folder in SCAFFOLD_FOLDERS {
        assert!(src.join(folder).is_dir(), "missing folder {folder}");
    }

    // Package-level files, rendered with the package substitution map.
    let menu = fs::read_to_string(src.join("Config/admin-menu.php")).unwrap();
    assert!(menu.contains("'blog'"));
    assert!(menu.contains("'Blog'"));
    assert!(temp_dir.path().join("blog/package.json").exists());
    assert!(temp_dir.path().join("blog/publishable/assets/css/admin.css").exists());

    let manifest = fs::read_to_string(temp_dir.path().join("blog/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"blog\""));

    // The four structural classes.
    let provider = fs::read_to_string(src.join("Providers/blogServiceProvider.php")).unwrap();
    assert!(provider.contains("class blogServiceProvider"));
    assert!(provider.contains("namespace blog\\Providers;"));
    assert!(src.join("Providers/ModuleServiceProvider.php").exists());
    assert!(src.join("Http/Controllers/Admin/blogController.php").exists());
    let routes = fs::read_to_string(src.join("Http/admin-routes.php")).unwrap();
    assert!(routes.contains("blogController"));
}

#[test]
fn test_existing_package_aborts_with_zero_writes() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(true);

    let result = PackageGenerator::new(&config, &registry, "blog").generate();

    match result {
        Err(Error::PackageExists { name }) => assert_eq!(name, "blog"),
        other => panic!("expected PackageExists, got {other:?}"),
    }
    assert_eq!(registry.calls.borrow().as_slice(), ["exists:blog"]);
    // Nothing may have been written.
    let entries: Vec<_> = WalkDir::new(temp_dir.path())
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .collect();
    assert!(entries.is_empty(), "unexpected writes: {entries:?}");
}

#[test]
fn test_force_deletes_and_regenerates() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(true);

    PackageGenerator::new(&config, &registry, "blog").force(true).generate().unwrap();

    assert_eq!(registry.calls.borrow().as_slice(), ["exists:blog", "delete:blog"]);
    assert!(temp_dir.path().join("blog/src/Providers/blogServiceProvider.php").exists());
}

#[test]
fn test_plain_mode_creates_folders_only() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(false);

    PackageGenerator::new(&config, &registry, "blog").plain(true).generate().unwrap();

    let src = temp_dir.path().join("blog/src");
    for folder in SCAFFOLD_FOLDERS {
        assert!(src.join(folder).is_dir(), "missing folder {folder}");
    }
    // No files anywhere in the tree.
    let files: Vec<_> = WalkDir::new(temp_dir.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();
    assert!(files.is_empty(), "plain run wrote files: {files:?}");
}

#[test]
fn test_folder_creation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(false);

    PackageGenerator::new(&config, &registry, "blog").plain(true).generate().unwrap();
    PackageGenerator::new(&config, &registry, "blog").plain(true).generate().unwrap();

    assert!(temp_dir.path().join("blog/src/Config").is_dir());
}

#[test]
fn test_unknown_type_fails_before_touching_disk() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = FakeRegistry::new(false);

    let result = PackageGenerator::new(&config, &registry, "blog")
        .package_type("payment")
        .generate();

    assert!(matches!(result, Err(Error::Config(_))));
    assert!(!temp_dir.path().join("blog").exists());
}

#[test]
fn test_restricted_type_skips_classes() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(temp_dir.path());
    // A sub-type with a single folder and no files.
    let layout_yaml = r#"
layout:
  artifacts:
    controller: Http/Controllers
  types:
    slim:
      folders:
        config: Config
"#;
    config.layout = packsmith::config::parse_config(layout_yaml).unwrap().layout;
    let registry = FakeRegistry::new(false);

    PackageGenerator::new(&config, &registry, "blog")
        .package_type("slim")
        .generate()
        .unwrap();

    assert!(temp_dir.path().join("blog/src/Config").is_dir());
    // No structural classes for a restricted sub-type.
    assert!(!temp_dir.path().join("blog/src/Providers").exists());
}

#[test]
fn test_files_respect_force_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(temp_dir.path());
    config.files_respect_force = true;
    let registry = FakeRegistry::new(false);

    let dest = temp_dir.path().join("blog/src/Config/admin-menu.php");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    fs::write(&dest, "keep me").unwrap();

    let result = PackageGenerator::new(&config, &registry, "blog").generate();

    assert!(matches!(result, Err(Error::ArtifactExists { .. })));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "keep me");
}

#[test]
fn test_directory_registry_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let registry = DirectoryRegistry::new(temp_dir.path());

    assert!(!registry.exists("blog").unwrap());
    PackageGenerator::new(&config, &registry, "blog").generate().unwrap();
    assert!(registry.exists("blog").unwrap());

    // A second run without force aborts against the directory registry.
    let result = PackageGenerator::new(&config, &registry, "blog").generate();
    assert!(matches!(result, Err(Error::PackageExists { .. })));

    // And with force the package is rebuilt from scratch.
    let marker = temp_dir.path().join("blog/src/leftover.txt");
    fs::write(&marker, "stale").unwrap();
    PackageGenerator::new(&config, &registry, "blog").force(true).generate().unwrap();
    assert!(!marker.exists());
    assert!(temp_dir.path().join("blog/src/Providers/blogServiceProvider.php").exists());
}
