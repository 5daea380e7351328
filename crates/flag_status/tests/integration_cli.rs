// crates/flag_status/tests/integration_cli.rs

mod integration_cli {
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use predicates::prelude::*;
    use std::net::TcpListener;
    use std::path::PathBuf;

    const HALF_MAST_PAGE: &str = "<ul>\r\n<!-- <li class=\"icon-flag full\"> -->\r\n<li class=\"icon-flag\">Half staff</li>\r\n</ul>";
    const FULL_MAST_PAGE: &str = "<ul>\r\n<li class=\"icon-flag full\">Full staff</li>\r\n</ul>";

    /// The images shipped with the repository.
    fn shipped_resources() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../resources/images")
    }

    fn flag_status() -> Command {
        let mut cmd = Command::cargo_bin("flag_status").unwrap();
        cmd.env("DISABLE_VIEWER", "1")
            .env_remove("GET_PAGE_FILE")
            .env_remove("FLAG_STATUS_URL")
            .env_remove("FLAG_STATUS_RESOURCES")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_half_mast_from_page_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let page = temp.child("index.htm");
        page.write_str(HALF_MAST_PAGE).unwrap();

        flag_status()
            .arg("--page-file")
            .arg(page.path())
            .arg("--resources")
            .arg(shipped_resources())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Flag Status ")
                    .and(predicate::str::contains(" - Half Mast"))
                    .and(predicate::str::contains("flag_half.png")),
            );

        temp.close().unwrap();
    }

    #[test]
    fn test_full_mast_from_env_page_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let page = temp.child("index.htm");
        page.write_str(FULL_MAST_PAGE).unwrap();

        flag_status()
            .env("GET_PAGE_FILE", page.path())
            .env("FLAG_STATUS_RESOURCES", shipped_resources())
            .assert()
            .success()
            .stdout(
                predicate::str::contains(" - Full Mast").and(predicate::str::contains("flag_full.png")),
            );

        temp.close().unwrap();
    }

    #[test]
    fn test_page_without_marker_is_undetermined() {
        let temp = assert_fs::TempDir::new().unwrap();
        let page = temp.child("index.htm");
        page.write_str("<html>\r\n<!-- icon-flag full -->\r\n</html>").unwrap();

        flag_status()
            .arg("--page-file")
            .arg(page.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Unable to determine status.")
                    .and(predicate::str::contains("Mast").not()),
            );

        temp.close().unwrap();
    }

    #[test]
    fn test_unreachable_site_is_undetermined() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/index.htm", listener.local_addr().unwrap());
        drop(listener);

        flag_status()
            .env("NO_PROXY", "127.0.0.1")
            .env("no_proxy", "127.0.0.1")
            .arg("--url")
            .arg(url)
            .assert()
            .success()
            .stdout(predicate::str::contains("Unable to determine status."));
    }

    #[test]
    fn test_missing_page_file_fails() {
        let temp = assert_fs::TempDir::new().unwrap();

        flag_status()
            .arg("--page-file")
            .arg(temp.path().join("missing.htm"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to read page file"));
    }

    #[test]
    fn test_missing_image_fails() {
        let temp = assert_fs::TempDir::new().unwrap();
        let page = temp.child("index.htm");
        page.write_str(HALF_MAST_PAGE).unwrap();

        flag_status()
            .arg("--page-file")
            .arg(page.path())
            .arg("--resources")
            .arg(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("flag_half.png"));
    }

    #[test]
    fn test_empty_marker_fails() {
        flag_status()
            .args(["--marker", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--marker must not be empty"));
    }

    #[cfg(unix)]
    #[test]
    fn test_viewer_is_run_when_enabled() {
        let temp = assert_fs::TempDir::new().unwrap();
        let page = temp.child("index.htm");
        page.write_str(FULL_MAST_PAGE).unwrap();

        flag_status()
            .env_remove("DISABLE_VIEWER")
            .arg("--page-file")
            .arg(page.path())
            .arg("--resources")
            .arg(shipped_resources())
            .args(["--viewer", "false"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Image viewer 'false' exited"));
    }
}
