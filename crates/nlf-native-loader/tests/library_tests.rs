//! Loading the built `f1` plugin library from disk.
//!
//! Cargo builds the `cdylib` of a dev-dependency next to the test binary, in
//! the same `deps` directory.

use std::env::consts::{DLL_EXTENSION, DLL_PREFIX, DLL_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};

use nlf_abi::{Arity, CurveFunction};
use nlf_native_loader::prelude::*;
use nlf_test_helpers::prelude::*;
use tempfile::TempDir;
use tracing_test::traced_test;

fn gaussian_cdf_library() -> PathBuf {
    let exe = must(std::env::current_exe());
    let deps = must_some(exe.parent(), "test binary directory");
    let stem = format!("{DLL_PREFIX}nlf_gaussian_cdf");

    let mut candidates: Vec<PathBuf> = [deps, deps.parent().unwrap_or(deps)]
        .iter()
        .filter_map(|dir| fs::read_dir(dir).ok())
        .flatten()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&stem) && name.ends_with(DLL_SUFFIX))
        })
        .collect();
    candidates.sort();
    must_some(candidates.into_iter().next(), "built nlf_gaussian_cdf library")
}

fn load_with(config: LoaderConfig, path: &Path) -> NlfResult<NativeFunction> {
    NativeFunctionLoader::new(config)?.load(path)
}

fn check_scenarios(function: &NativeFunction) -> TestResult {
    assert_approx_eq!(function.evaluate(&[0.0], &[2.0, 0.0, 1.0, 1.0])?, 2.0, 1e-12);
    assert_approx_eq!(
        function.evaluate(&[1.0], &[2.0, 0.0, 1.0, 0.0])?,
        1.682_689,
        1e-6
    );

    // sigma == 0 is a hard step with NaN at mu
    assert_approx_eq!(function.evaluate(&[1.0], &[2.0, 0.0, 0.0, 1.0])?, 3.0, 1e-12);
    assert_approx_eq!(function.evaluate(&[-1.0], &[2.0, 0.0, 0.0, 1.0])?, 1.0, 1e-12);
    assert!(function.evaluate(&[0.0], &[2.0, 0.0, 0.0, 1.0])?.is_nan());
    Ok(())
}

#[traced_test]
#[test]
fn test_load_built_library_default() -> TestResult {
    let path = gaussian_cdf_library();
    let function = load_with(LoaderConfig::default(), &path)?;

    assert_eq!(function.id().get(), 1);
    assert_eq!(function.arity(), Arity::new(1, 4));
    assert!(function.has_checked_entry_points());
    assert_eq!(function.name().as_str(), nlf_gaussian_cdf::GaussianCdf::NAME);
    check_scenarios(&function)?;
    assert!(logs_contain("Curve function loaded"));
    Ok(())
}

#[test]
fn test_load_built_library_legacy() -> TestResult {
    let function = load_with(LoaderConfig::legacy(), &gaussian_cdf_library())?;

    assert!(!function.has_checked_entry_points());
    assert_eq!(function.arity(), Arity::new(1, 4));
    check_scenarios(&function)?;
    assert!(function.evaluate(&[0.0], &[2.0, 0.0, 1.0]).is_err());
    Ok(())
}

#[test]
fn test_load_built_library_strict() -> TestResult {
    let function = load_with(LoaderConfig::strict(), &gaussian_cdf_library())?;

    assert!(function.has_checked_entry_points());
    check_scenarios(&function)?;
    Ok(())
}

#[test]
fn test_built_library_matches_linked_exports() -> TestResult {
    let loaded = load_with(LoaderConfig::default(), &gaussian_cdf_library())?;
    let a = [1.5, -0.25, 0.75, 0.5];
    for x in linspace(-3.0, 3.0, 25) {
        let direct = nlf_gaussian_cdf::gaussian_cdf(x, 1.5, -0.25, 0.75, 0.5);
        assert_eq!(loaded.evaluate(&[x], &a)?.to_bits(), direct.to_bits());
    }
    Ok(())
}

#[traced_test]
#[test]
fn test_registry_load_dir_with_built_library() -> TestResult {
    let dir = TempDir::new()?;
    let plugin = dir.path().join(format!("{DLL_PREFIX}f1_gaussian_cdf.{DLL_EXTENSION}"));
    fs::copy(gaussian_cdf_library(), &plugin)?;
    fs::write(
        dir.path().join(format!("{DLL_PREFIX}broken.{DLL_EXTENSION}")),
        b"not a library",
    )?;

    let registry = FunctionRegistry::default();
    let loaded = registry.load_dir(dir.path())?;

    assert_eq!(loaded.len(), 1);
    let id = must_some(loaded.first().copied(), "id from load_dir");
    assert_eq!(id.get(), 1);
    assert!(logs_contain("Skipping curve function library"));

    let function = must_some(registry.get(id), "f1 after load_dir");
    check_scenarios(&function)?;

    let again = registry.load(&plugin);
    assert!(matches!(again, Err(NlfError::DuplicateFunctionId { .. })));
    assert_eq!(registry.len(), 1);
    Ok(())
}
