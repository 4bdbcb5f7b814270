use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn jekyll_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jekyll-helper").unwrap();
    cmd.env_remove("JEKYLL_HELPER_ROOT");
    cmd.env_remove("JEKYLL_HELPER_TEMPLATE_PATH");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Lay out a minimal Jekyll site with `_posts` and `_drafts`
#[allow(dead_code)]
pub fn init_site(root: &Path) {
    fs::write(root.join("_config.yml"), "title: Test Site\n").unwrap();
    fs::create_dir_all(root.join("_posts")).unwrap();
    fs::create_dir_all(root.join("_drafts")).unwrap();
}

/// Today's filename prefix as used for new posts
#[allow(dead_code)]
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
