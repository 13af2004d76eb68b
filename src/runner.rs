use anyhow::{Result, anyhow, bail};
use camino::Utf8PathBuf;

use crate::cli::Cli;
use crate::concat::{self, ConcatOptions};

pub fn run(cli: Cli) -> Result<()> {
    let root = Utf8PathBuf::from_path_buf(cli.root)
        .map_err(|path| anyhow!("input directory {} is not valid UTF-8", path.display()))?;
    let output = Utf8PathBuf::from_path_buf(cli.output)
        .map_err(|path| anyhow!("output path {} is not valid UTF-8", path.display()))?;

    // Validated before the output file is created, so a bad invocation leaves
    // nothing behind.
    if !root.is_dir() {
        bail!("{} is not a valid directory", root);
    }

    let opts = ConcatOptions { suffix: cli.suffix };
    let summary = concat::concatenate(root.as_std_path(), output.as_std_path(), &opts)?;

    println!(
        "Processing complete. Output saved to {} ({} files bundled, {} unreadable).",
        output, summary.files, summary.unreadable
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("srcpack-runner-{label}-{ts}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn rejects_missing_root_without_creating_output() {
        let base = unique_temp_dir("missing-root");
        let output = base.join("out.txt");

        let cli = Cli {
            root: base.join("does-not-exist"),
            output: output.clone(),
            suffix: ".js".to_owned(),
        };
        assert!(run(cli).is_err());
        assert!(!output.exists());

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn rejects_root_that_is_a_file() {
        let base = unique_temp_dir("root-is-file");
        let root = base.join("plain.txt");
        fs::write(&root, "not a directory").unwrap();
        let output = base.join("out.txt");

        let cli = Cli {
            root,
            output: output.clone(),
            suffix: ".js".to_owned(),
        };
        assert!(run(cli).is_err());
        assert!(!output.exists());

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn bundles_a_tree_end_to_end() {
        let base = unique_temp_dir("end-to-end");
        let tree = base.join("proj");
        fs::create_dir_all(tree.join("sub")).unwrap();
        fs::write(tree.join("a.js"), "let x=1;").unwrap();
        fs::write(tree.join("sub").join("b.js"), "let y=2;").unwrap();
        fs::write(tree.join("c.txt"), "skipped").unwrap();
        let output = base.join("out.txt");

        let cli = Cli {
            root: tree,
            output: output.clone(),
            suffix: ".js".to_owned(),
        };
        run(cli).unwrap();

        let bundle = fs::read_to_string(&output).unwrap();
        assert_eq!(bundle, "//a.js\nlet x=1;\n//b.js\nlet y=2;\n");

        let _ = fs::remove_dir_all(&base);
    }
}
