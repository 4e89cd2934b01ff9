//! Well-known context keys.

/// Model card or README text.
pub const README: &str = "hf_readme";

/// License identifier declared by the hosting platform.
pub const LICENSE: &str = "license";

/// Number of distinct contributors to the backing repository.
pub const GIT_CONTRIBUTORS: &str = "git_contributors";

/// Total size in bytes of all weight files.
pub const WEIGHTS_TOTAL_BYTES: &str = "weights_total_bytes";

/// URL of the dataset associated with the model.
pub const DATASET_LINK: &str = "dataset_link";

/// URL of the code repository associated with the model.
pub const CODE_LINK: &str = "code_link";

/// Whether example code accompanies the model.
pub const EXAMPLE_CODE_PRESENT: &str = "example_code_present";

/// Download count of the associated dataset.
pub const DATASET_DOWNLOADS: &str = "dataset_downloads";

/// Whether the code repository contains tests.
pub const HAS_TESTS: &str = "has_tests";

/// Whether the code repository has continuous integration configured.
pub const HAS_CI: &str = "has_ci";

/// Whether linting passes cleanly.
pub const LINT_OK: &str = "lint_ok";

/// Whether linting passes with warnings.
pub const LINT_WARN: &str = "lint_warn";
