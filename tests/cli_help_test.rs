#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("agcli").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Commands:"));

        // Verify that every command group is present
        assert!(help_output.contains("config"));
        assert!(help_output.contains("fields"));
        assert!(help_output.contains("farms"));
        assert!(help_output.contains("boundaries"));
        assert!(help_output.contains("harvest"));
        assert!(help_output.contains("planting"));

        // Verify that help flags are present
        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));

        assert!(help_output.contains("agcli"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        let subcommands = vec!["fields", "farms", "boundaries", "harvest", "planting"];

        for subcommand in subcommands {
            let mut cmd = Command::cargo_bin("agcli").unwrap();
            let assert_result = cmd.arg(subcommand).arg("--help").assert().success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            assert!(help_output.contains("Usage:"));
            assert!(help_output.contains(subcommand));

            assert!(help_output.contains("list"));
            assert!(help_output.contains("get"));
            if subcommand == "fields" {
                assert!(help_output.contains("create"));
            }
        }
    }

    #[test]
    fn test_config_subcommand_help_output() {
        let mut cmd = Command::cargo_bin("agcli").unwrap();
        let assert_result = cmd.arg("config").arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("set"));
        assert!(help_output.contains("show"));
        assert!(help_output.contains("clear"));
        assert!(help_output.contains("path"));
    }

    #[test]
    fn test_list_commands_advertise_limit_and_json() {
        let mut cmd = Command::cargo_bin("agcli").unwrap();
        let assert_result = cmd
            .arg("fields")
            .arg("list")
            .arg("--help")
            .assert()
            .success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("--limit"));
        assert!(help_output.contains("--json"));
    }
}
