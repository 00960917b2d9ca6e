//! Literal text substitutions on existing app files.
//!
//! Patches are plain find/replace operations, never regex. Re-running a
//! patch over an already-patched tree finds zero occurrences and changes
//! nothing.

use std::fs;
use std::path::{Path, PathBuf};

/// One literal edit operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    /// Replace every occurrence of `find` with `replace`.
    Replace { find: String, replace: String },

    /// Remove every whole line containing `containing`.
    StripLines { containing: String },
}

/// A named set of edits to one file.
#[derive(Debug, Clone)]
pub struct Patch {
    /// Short name used in logs
    pub name: String,

    /// Target file, relative to the project root
    pub file: PathBuf,

    pub ops: Vec<PatchOp>,
}

/// Result of applying one patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    pub file: PathBuf,

    /// Total occurrences replaced or lines removed
    pub replacements: usize,
}

/// Errors that can occur while patching.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Patch target not found: {0}")]
    TargetNotFound(String),

    #[error("Failed to read patch target: {0}")]
    ReadError(String),

    #[error("Failed to write patch target: {0}")]
    WriteError(String),
}

/// Apply a patch to a file under `root`.
///
/// The file is rewritten only when at least one occurrence matched.
pub fn apply(root: &Path, patch: &Patch) -> Result<PatchOutcome, PatchError> {
    let path = root.join(&patch.file);

    if !path.exists() {
        return Err(PatchError::TargetNotFound(path.display().to_string()));
    }

    let original = fs::read_to_string(&path)
        .map_err(|e| PatchError::ReadError(format!("{}: {}", path.display(), e)))?;

    let mut content = original.clone();
    let mut replacements = 0;

    for op in &patch.ops {
        match op {
            PatchOp::Replace { find, replace } => {
                let count = content.matches(find.as_str()).count();
                if count > 0 {
                    content = content.replace(find.as_str(), replace);
                    replacements += count;
                }
            }
            PatchOp::StripLines { containing } => {
                let had_trailing_newline = content.ends_with('\n');
                let kept: Vec<&str> = content
                    .lines()
                    .filter(|line| {
                        let hit = line.contains(containing.as_str());
                        if hit {
                            replacements += 1;
                        }
                        !hit
                    })
                    .collect();

                content = kept.join("\n");
                if had_trailing_newline && !content.is_empty() {
                    content.push('\n');
                }
            }
        }
    }

    if replacements == 0 {
        tracing::debug!("Patch '{}' already applied to {}", patch.name, path.display());
    } else {
        fs::write(&path, &content)
            .map_err(|e| PatchError::WriteError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(
            "Patched {} ({} replacement{})",
            path.display(),
            replacements,
            if replacements == 1 { "" } else { "s" }
        );
    }

    Ok(PatchOutcome {
        file: patch.file.clone(),
        replacements,
    })
}

/// The built-in patch set for the host app.
pub fn builtin_patches(components_dir: &Path, app_dir: &Path) -> Vec<Patch> {
    vec![
        Patch {
            name: "navbar-product-link".to_string(),
            file: components_dir.join("Navbar.tsx"),
            ops: vec![PatchOp::Replace {
                find: "href=\"/calculators\"".to_string(),
                replace: "href=\"/product\"".to_string(),
            }],
        },
        Patch {
            name: "pricing-internal-bullets".to_string(),
            file: app_dir.join("pricing").join("page.tsx"),
            ops: vec![
                PatchOp::StripLines {
                    containing: "\"SGF financing CTA\",".to_string(),
                },
                PatchOp::StripLines {
                    containing: "\"PDF export with SGF branding\",".to_string(),
                },
                PatchOp::StripLines {
                    containing: "\"SGF referral dashboard\",".to_string(),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn replaces_every_occurrence() {
        let temp = tempdir().unwrap();
        let path = write(
            temp.path(),
            "components/Navbar.tsx",
            "<Link href=\"/calculators\">Product</Link>\n<Link href=\"/calculators\">Tools</Link>\n",
        );

        let patches = builtin_patches(Path::new("components"), Path::new("app"));
        let outcome = apply(temp.path(), &patches[0]).unwrap();

        assert_eq!(outcome.replacements, 2);
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("href=\"/product\""));
        assert!(!content.contains("href=\"/calculators\""));
    }

    #[test]
    fn strips_lines_regardless_of_indentation() {
        let temp = tempdir().unwrap();
        let path = write(
            temp.path(),
            "app/pricing/page.tsx",
            concat!(
                "const features = [\n",
                "  \"Deal workspaces\",\n",
                "\"SGF financing CTA\",\n",
                "      \"SGF financing CTA\",\n",
                "      \"PDF export with SGF branding\",\n",
                "  \"Priority support\",\n",
                "];\n",
            ),
        );

        let patches = builtin_patches(Path::new("components"), Path::new("app"));
        let outcome = apply(temp.path(), &patches[1]).unwrap();

        assert_eq!(outcome.replacements, 3);
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("SGF financing CTA"));
        assert!(!content.contains("PDF export with SGF branding"));
        assert!(content.contains("\"Deal workspaces\","));
        assert!(content.contains("\"Priority support\","));
        assert!(content.ends_with("];\n"));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "components/Navbar.tsx",
            "<Link href=\"/calculators\">Product</Link>\n",
        );

        let patches = builtin_patches(Path::new("components"), Path::new("app"));
        let first = apply(temp.path(), &patches[0]).unwrap();
        let second = apply(temp.path(), &patches[0]).unwrap();

        assert_eq!(first.replacements, 1);
        assert_eq!(second.replacements, 0);
    }

    #[test]
    fn errors_on_missing_target() {
        let temp = tempdir().unwrap();

        let patches = builtin_patches(Path::new("components"), Path::new("app"));
        let result = apply(temp.path(), &patches[0]);

        assert!(matches!(result, Err(PatchError::TargetNotFound(_))));
    }

    #[test]
    fn unmatched_file_is_not_rewritten() {
        let temp = tempdir().unwrap();
        let path = write(temp.path(), "app/pricing/page.tsx", "const features = [];\n");
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let patches = builtin_patches(Path::new("components"), Path::new("app"));
        let outcome = apply(temp.path(), &patches[1]).unwrap();

        assert_eq!(outcome.replacements, 0);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
        assert_eq!(fs::read_to_string(&path).unwrap(), "const features = [];\n");
    }
}
