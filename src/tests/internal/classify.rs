//! 分类测试：三个桶恰好划分输入、stat 失败进 unknowns、各桶独立排序、结果可重复。

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::listing::{MAX_CONCURRENT_STATS, classify_entries};
use crate::tests::Fixture;

fn names_of(entries: &[crate::listing::Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn empty_input_gives_empty_buckets() {
    let fx = Fixture::new();
    let buckets = classify_entries(fx.path(), Vec::new()).await;
    assert!(buckets.is_empty());
    assert!(buckets.dirs.is_empty() && buckets.files.is_empty() && buckets.unknowns.is_empty());
}

#[tokio::test]
async fn splits_dirs_files_and_unknowns() {
    let fx = Fixture::new();
    fx.dir("src").dir("Docs").file("b.txt", "b").file("A.md", "a");

    let input = owned(&["b.txt", "src", "ghost", "A.md", "Docs"]);
    let buckets = classify_entries(fx.path(), input.clone()).await;

    assert_eq!(names_of(&buckets.dirs), ["Docs", "src"]);
    assert_eq!(names_of(&buckets.files), ["A.md", "b.txt"]);
    assert_eq!(names_of(&buckets.unknowns), ["ghost"]);

    // 每一项恰好出现在一个桶里
    let mut all: Vec<&str> = buckets.iter().map(|e| e.name.as_str()).collect();
    all.sort();
    let mut expected: Vec<&str> = input.iter().map(String::as_str).collect();
    expected.sort();
    assert_eq!(all, expected);
    assert_eq!(buckets.len(), input.len());
}

#[tokio::test]
async fn unknown_entries_keep_the_error() {
    let fx = Fixture::new();
    let buckets = classify_entries(fx.path(), owned(&["ghost"])).await;

    let ghost = &buckets.unknowns[0];
    assert!(ghost.is_unknown());
    assert!(ghost.meta.is_none());
    let err = ghost.stat_error.as_ref().expect("应保留 stat 错误");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[cfg(unix)]
#[tokio::test]
async fn broken_symlink_is_unknown_and_good_symlink_follows_target() {
    let fx = Fixture::new();
    fx.dir("real_dir").file("real.txt", "x");
    fx.symlink("missing", "dangling").symlink("real_dir", "dir_link").symlink("real.txt", "file_link");

    let input = owned(&["dangling", "dir_link", "file_link"]);
    let buckets = classify_entries(fx.path(), input).await;

    assert_eq!(names_of(&buckets.unknowns), ["dangling"]);
    assert_eq!(names_of(&buckets.dirs), ["dir_link"]);
    assert_eq!(names_of(&buckets.files), ["file_link"]);
}

#[tokio::test]
async fn metadata_is_filled_for_files() {
    let fx = Fixture::new();
    fx.file("five.bin", "12345");

    let buckets = classify_entries(fx.path(), owned(&["five.bin"])).await;
    let meta = buckets.files[0].meta.as_ref().unwrap();
    assert!(!meta.is_dir);
    assert_eq!(meta.size, Some(5));
    assert!(meta.modified.is_some());
    #[cfg(unix)]
    assert!(meta.mode.is_some() && meta.inode.is_some());
}

#[tokio::test]
async fn repeated_and_shuffled_runs_are_identical() {
    let fx = Fixture::new();
    let mut input = Vec::new();
    for i in 0..20 {
        fx.file(&format!("file-{i}.txt"), "x");
        fx.dir(&format!("Dir-{i}"));
        input.push(format!("file-{i}.txt"));
        input.push(format!("Dir-{i}"));
        input.push(format!("missing-{i}"));
    }

    let baseline = classify_entries(fx.path(), input.clone()).await;
    let baseline: Vec<String> = baseline.iter().map(|e| e.name.clone()).collect();

    let mut rng = thread_rng();
    for _ in 0..5 {
        input.shuffle(&mut rng);
        let again = classify_entries(fx.path(), input.clone()).await;
        let again: Vec<String> = again.iter().map(|e| e.name.clone()).collect();
        assert_eq!(again, baseline);
    }
}

#[tokio::test]
async fn insert_dir_sorted_follows_comparator() {
    let fx = Fixture::new();
    fx.dir("alpha").dir("beta");

    let mut buckets = classify_entries(fx.path(), owned(&["beta", "alpha"])).await;
    let parent = buckets.dirs[0].clone();
    buckets.insert_dir_sorted(crate::listing::Entry { name: "..".to_string(), ..parent });

    assert_eq!(names_of(&buckets.dirs), ["..", "alpha", "beta"]);
}

#[tokio::test]
async fn more_entries_than_concurrency_limit() {
    let fx = Fixture::new();
    let count = MAX_CONCURRENT_STATS * 4 + 3;
    let mut input = Vec::new();
    for i in 0..count {
        let name = format!("f{i:04}");
        if i % 3 == 0 {
            fx.dir(&name);
        } else if i % 3 == 1 {
            fx.file(&name, "x");
        }
        input.push(name);
    }

    let buckets = classify_entries(fx.path(), input.clone()).await;
    assert_eq!(buckets.len(), count);
    assert_eq!(buckets.dirs.len(), count.div_ceil(3));
    assert_eq!(buckets.files.len(), (count + 1) / 3);
    assert_eq!(buckets.unknowns.len(), count / 3);

    // 名字补零后排序结果与字典序一致
    let mut dirs_expected: Vec<&str> =
        input.iter().step_by(3).map(String::as_str).collect();
    dirs_expected.sort();
    assert_eq!(names_of(&buckets.dirs), dirs_expected);
}
