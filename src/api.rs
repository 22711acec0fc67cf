use crate::{
    blueprint,
    errors::{IoError, ManifestError},
    scaffold,
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),
}

/// Lines printed once every file has been written.
pub const NEXT_STEPS: [&str; 4] = [
    "Project files created successfully!",
    "Run the following commands to start:",
    "npm install",
    "npm run dev",
];

/// Scaffolds the project into the current working directory, then prints the next steps.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - A directory cannot be created.
/// - A file cannot be created or written to.
///
/// Files written before the failure are left in place and the next steps are not printed.
pub fn run() -> Result<(), ScaffoldError> {
    run_in(Path::new("."))?;

    for line in NEXT_STEPS {
        println!("{}", line);
    }

    Ok(())
}

/// Scaffolds the project under `root` without printing anything to stdout.
///
/// # Errors
///
/// See [`run`].
pub fn run_in(root: &Path) -> Result<(), ScaffoldError> {
    let vfs = blueprint::project_files()?;

    log::debug!(
        "Scaffolding {} directories and {} files into: {}",
        vfs.directories.len(),
        vfs.files.len(),
        root.display()
    );

    scaffold::apply_vfs(&vfs, root)?;

    Ok(())
}
