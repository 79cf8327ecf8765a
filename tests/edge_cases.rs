//! Edge case tests for repotree


use harness::sample_repo;
use repotree::{
    chunk_tree, compute_stats, filter_tree, serialize, ExportFormat, NodeMatch, StatsSummary,
    TreeError, TreeNode, NO_EXTENSION_KEY,
};

#[test]
fn test_absent_root_everywhere() {
    assert_eq!(compute_stats(None), StatsSummary::default());
    assert_eq!(filter_tree(None, &NodeMatch::name("x")), None);
    let view = chunk_tree(None, 8).unwrap();
    assert_eq!(view.root_tree, None);
    assert!(view.chunks.is_empty());
    for format in [
        ExportFormat::Text,
        ExportFormat::Json { indent: 0 },
        ExportFormat::Markdown,
    ] {
        assert_eq!(serialize(None, format).unwrap(), "");
    }
}

#[test]
fn test_zero_chunk_size_rejected_even_for_absent_root() {
    assert!(matches!(
        chunk_tree(None, 0),
        Err(TreeError::InvalidArgument(_))
    ));
    assert!(matches!(
        chunk_tree(Some(&sample_repo()), 0),
        Err(TreeError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_folder_survives_identity_filter() {
    // The short-circuit must protect folders the recursive path would drop.
    let tree = TreeNode::folder(
        "repo",
        "repo",
        vec![TreeNode::folder("empty", "repo/empty", Vec::new())],
    );
    let filtered = filter_tree(Some(&tree), &NodeMatch::default()).unwrap();
    assert_eq!(filtered, tree);
}

#[test]
fn test_folder_only_tree() {
    let tree = TreeNode::folder(
        "repo",
        "repo",
        vec![TreeNode::folder(
            "a",
            "repo/a",
            vec![TreeNode::folder("b", "repo/a/b", Vec::new())],
        )],
    );
    let stats = compute_stats(Some(&tree));
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_folders, 3);
    assert_eq!(stats.total_size, 0);
    assert_eq!(stats.max_depth, 2);
    assert!(stats.file_types.is_empty());

    // Folders match by name even with no files at all
    let filtered = filter_tree(Some(&tree), &NodeMatch::name("b")).unwrap();
    assert_eq!(filtered.children()[0].children()[0].name(), "b");
}

#[test]
fn test_deep_chain() {
    let mut node = TreeNode::file("leaf.txt", "repo/d0/d1/d2/d3/leaf.txt", Some(1));
    for depth in (0..4).rev() {
        let path: String = (0..=depth).map(|i| format!("/d{i}")).collect();
        node = TreeNode::folder(format!("d{depth}"), format!("repo{path}"), vec![node]);
    }
    let tree = TreeNode::folder("repo", "repo", vec![node]);
    assert!(tree.validate().is_ok());

    let stats = compute_stats(Some(&tree));
    assert_eq!(stats.max_depth, 5);
    assert_eq!(stats.total_folders, 5);

    let text = serialize(Some(&tree), ExportFormat::Text).unwrap();
    assert_eq!(text.lines().count(), tree.node_count());
    assert!(text.contains("                └── leaf.txt"));
}

#[test]
fn test_extensionless_and_dotfile_names() {
    let tree = TreeNode::folder(
        "repo",
        "repo",
        vec![
            TreeNode::file("Makefile", "repo/Makefile", Some(1)),
            TreeNode::file("LICENSE", "repo/LICENSE", Some(1)),
            TreeNode::file(".gitignore", "repo/.gitignore", Some(1)),
        ],
    );
    let stats = compute_stats(Some(&tree));
    assert_eq!(stats.file_types.get(NO_EXTENSION_KEY), Some(&2));
    assert_eq!(stats.file_types.get("gitignore"), Some(&1));

    // the sentinel key can be used in the allow-set to find extensionless files
    let pred = NodeMatch::new("", [NO_EXTENSION_KEY]);
    let filtered = filter_tree(Some(&tree), &pred).unwrap();
    assert_eq!(filtered.children().len(), 2);
}

#[test]
fn test_unicode_names() {
    let tree = TreeNode::folder(
        "repo",
        "repo",
        vec![
            TreeNode::folder(
                "docs",
                "repo/docs",
                vec![TreeNode::file("Übersicht.md", "repo/docs/Übersicht.md", Some(9))],
            ),
            TreeNode::file("réadme.txt", "repo/réadme.txt", None),
        ],
    );
    assert!(tree.validate().is_ok());

    let filtered = filter_tree(Some(&tree), &NodeMatch::name("übersicht")).unwrap();
    assert_eq!(filtered.children()[0].children()[0].name(), "Übersicht.md");

    let text = serialize(Some(&tree), ExportFormat::Text).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_filter_result_is_revalidatable() {
    // Filtering preserves path identity, so results still validate.
    let filtered = filter_tree(Some(&sample_repo()), &NodeMatch::name("a")).unwrap();
    assert!(filtered.validate().is_ok());
}

#[test]
fn test_chunk_size_one_on_nested_tree() {
    let view = chunk_tree(Some(&sample_repo()), 1).unwrap();
    // src (2 descendants) overflows into single-item buffers
    assert_eq!(view.chunk("repo/src_0").unwrap().len(), 1);
    assert_eq!(view.chunk("repo/src_1").unwrap().len(), 1);
    assert!(view.chunks.values().all(|c| c.len() <= 1));
}

#[test]
fn test_stats_ignores_chunker_flags() {
    // Stats over a chunked root view only see what is materialized.
    let view = chunk_tree(Some(&sample_repo()), 10).unwrap();
    let stats = compute_stats(view.root_tree.as_ref());
    assert_eq!(stats.total_files, 1); // README.md only
    assert_eq!(stats.total_folders, 2); // root and the emptied src
}
