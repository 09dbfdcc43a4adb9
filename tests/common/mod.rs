// Shared fixtures for integration tests
#![allow(dead_code)]

use git2::Repository;
use std::fs;
use std::path::Path;

/// Initialise a repository at `dir` with one commit, tagged with every name in `tags`
pub fn setup_repo(dir: &Path, tags: &[&str]) -> Repository {
    fs::create_dir_all(dir).expect("Could not create repo dir");
    let repo = Repository::init(dir).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    fs::write(dir.join("README.md"), "Hello world").expect("Could not write README");

    let commit_id = {
        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");
        let sig = repo.signature().expect("Could not get sig");

        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .expect("Could not create commit")
    };

    {
        let object = repo.find_object(commit_id, None).unwrap();
        for tag in tags {
            repo.tag_lightweight(tag, &object, false)
                .expect("Could not create tag");
        }
    }

    repo
}

/// Write a go.mod declaring `module` into `dir`
pub fn write_module(dir: &Path, module: &str) {
    fs::write(
        dir.join("go.mod"),
        format!("module {}\n\ngo 1.19\n", module),
    )
    .expect("Could not write go.mod");
}

/// Whether `repo` has a tag named `name`
pub fn has_tag(repo: &Repository, name: &str) -> bool {
    repo.find_reference(&format!("refs/tags/{}", name)).is_ok()
}
