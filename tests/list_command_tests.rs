use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::fixtures::*;

#[cfg(test)]
mod list_command_tests {
    use super::*;

    #[test]
    fn test_list_shows_scripts_and_commands() -> anyhow::Result<()> {
        let dir = scripts_dir_with(&["a.sh", "b.py", "c.ps1", "d.txt"])?;

        dir.command()?
            .args(["--base-url", "https://tools.test/", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Column 1"))
            .stdout(predicate::str::contains("Column 3"))
            .stdout(predicate::str::contains("curl -sSL 'https://tools.test/a.sh' | bash"))
            .stdout(predicate::str::contains("d.txt").not());

        assert!(!dir.index_path().exists());
        Ok(())
    }

    #[test]
    fn test_list_json() -> anyhow::Result<()> {
        let dir = scripts_dir_with(&["a.sh", "b.py"])?;

        let output = dir.command()?.args(["list", "--json"]).output()?;
        assert!(output.status.success());

        let listed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        let listed = listed.as_array().expect("json array");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["name"], "a.sh");
        assert_eq!(listed[0]["kind"], "Shell");
        assert_eq!(listed[1]["column"], 2);
        Ok(())
    }

    #[test]
    fn test_list_empty_directory() -> anyhow::Result<()> {
        let dir = empty_scripts_dir()?;

        dir.command()?
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No scripts found"));

        Ok(())
    }

    #[test]
    fn test_list_missing_directory_fails() -> anyhow::Result<()> {
        let dir = empty_scripts_dir()?;

        dir.bare_command()?
            .arg("--dir")
            .arg(dir.path().join("gone"))
            .arg("list")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Error:"));

        Ok(())
    }
}
