use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use wordscout::{
    find_common_words, find_common_words_in, find_unique_words, find_unique_words_in,
    find_word_longer_than, find_word_longer_than_in, SearchConfig,
};

// Helper function to create test files
fn create_test_files(dir: impl AsRef<Path>, files: &[(&str, &str)]) -> Result<()> {
    for (name, content) in files {
        let path = dir.as_ref().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}

fn unique_pairs(root: &Path) -> Result<HashSet<(String, PathBuf)>> {
    Ok(find_unique_words_in(root)?
        .into_iter()
        .map(|l| (l.word().as_str().to_string(), l.filepath().to_path_buf()))
        .collect())
}

fn common_set(root: &Path) -> Result<HashSet<String>> {
    Ok(find_common_words_in(root)?
        .into_iter()
        .map(|w| w.as_str().to_string())
        .collect())
}

#[test]
fn test_two_files_scenario() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("X.txt", "cat dog"), ("Y.txt", "dog bird")])?;
    let x = dir.path().join("X.txt");
    let y = dir.path().join("Y.txt");

    let expected: HashSet<_> = [("cat".to_string(), x), ("bird".to_string(), y)]
        .into_iter()
        .collect();
    assert_eq!(unique_pairs(dir.path())?, expected);
    assert_eq!(common_set(dir.path())?, ["dog".to_string()].into_iter().collect());
    Ok(())
}

#[test]
fn test_single_file_scenario() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("X.txt", "one two three")])?;
    let x = dir.path().join("X.txt");

    let unique = unique_pairs(dir.path())?;
    assert_eq!(unique.len(), 3);
    for word in ["one", "two", "three"] {
        assert!(unique.contains(&(word.to_string(), x.clone())));
    }

    let expected: HashSet<_> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
    assert_eq!(common_set(dir.path())?, expected);
    Ok(())
}

#[test]
fn test_empty_directory_scenario() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("notes.md", "ignored words here")])?;

    assert!(find_unique_words_in(dir.path())?.is_empty());
    assert!(find_common_words_in(dir.path())?.is_empty());
    for length in [0, 1, 5, 100] {
        assert!(find_word_longer_than_in(dir.path(), length)?.is_none());
    }
    Ok(())
}

#[test]
fn test_long_word_scenario() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("X.txt", "cat dog"), ("Y.txt", "dog bird")])?;

    let found = find_word_longer_than_in(dir.path(), 3)?.expect("bird qualifies");
    assert_eq!(found.word().as_str(), "bird");
    assert_eq!(found.filepath(), dir.path().join("Y.txt").as_path());
    Ok(())
}

#[test]
fn test_case_insensitivity() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(
        &dir,
        &[("a.txt", "Hello World"), ("b.txt", "hEllo there"), ("c.txt", "HELLo again")],
    )?;

    let unique = unique_pairs(dir.path())?;
    assert!(unique.iter().all(|(w, _)| w != "hello"));
    assert_eq!(unique.len(), 3);
    assert_eq!(common_set(dir.path())?, ["hello".to_string()].into_iter().collect());
    Ok(())
}

#[test]
fn test_repeated_words_within_file_count_once() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(
        &dir,
        &[("a.txt", "echo echo echo\necho echo"), ("b.txt", "other")],
    )?;

    let unique = find_unique_words_in(dir.path())?;
    let echoes = unique.iter().filter(|l| l.word().as_str() == "echo").count();
    assert_eq!(echoes, 1);
    Ok(())
}

#[test]
fn test_recursive_discovery() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(
        &dir,
        &[
            ("top.txt", "alpha shared"),
            ("nested/mid.txt", "beta shared"),
            ("nested/deeper/low.txt", "gamma shared"),
            ("nested/deeper/LOUD.TXT", "epsilon"),
            ("nested/skip.csv", "delta"),
        ],
    )?;

    let unique: HashSet<_> = unique_pairs(dir.path())?.into_iter().map(|(w, _)| w).collect();
    let expected: HashSet<_> = ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect();
    assert_eq!(unique, expected);
    assert_eq!(common_set(dir.path())?, ["shared".to_string()].into_iter().collect());
    Ok(())
}

#[test]
fn test_unreadable_file_contributes_nothing() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(&dir, &[("a.txt", "cat dog"), ("b.txt", "dog bird")])?;
    let mut bad = File::create(dir.path().join("c.txt"))?;
    bad.write_all(&[0xc3, 0x28, 0xff])?;

    let unique: HashSet<_> = unique_pairs(dir.path())?.into_iter().map(|(w, _)| w).collect();
    let expected: HashSet<_> = ["cat", "bird"].iter().map(|s| s.to_string()).collect();
    assert_eq!(unique, expected);

    // The unreadable file counts as a file with no words
    assert!(common_set(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = find_common_words_in(&missing).unwrap_err();
    assert!(err.is_traversal());
}

#[test]
fn test_properties_on_generated_corpus() -> Result<()> {
    let dir = tempdir()?;
    let mut contents: HashMap<PathBuf, HashSet<String>> = HashMap::new();
    for i in 0..40 {
        let path = dir.path().join(format!("doc_{}.txt", i));
        let mut file = File::create(&path)?;
        let mut words = HashSet::new();
        for j in 0..30 {
            let word = format!("w{}", (i * 7 + j * 13) % 97);
            writeln!(file, "common {} {}", word, if j % 2 == 0 { "Every" } else { "every" })?;
            words.insert(word);
        }
        words.insert("common".to_string());
        words.insert("every".to_string());
        contents.insert(path, words);
    }

    let config = SearchConfig::new(dir.path()).with_threads(NonZeroUsize::new(4).unwrap());

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for words in contents.values() {
        for word in words {
            *occurrences.entry(word.as_str()).or_default() += 1;
        }
    }

    let unique = find_unique_words(&config)?;
    for located in &unique {
        assert_eq!(occurrences[located.word().as_str()], 1);
        assert!(contents[located.filepath()].contains(located.word().as_str()));
    }
    let expected_unique = occurrences.values().filter(|&&n| n == 1).count();
    assert_eq!(unique.len(), expected_unique);

    let common: HashSet<_> = find_common_words(&config)?
        .into_iter()
        .map(|w| w.as_str().to_string())
        .collect();
    let expected_common: HashSet<_> = occurrences
        .iter()
        .filter(|&(_, &n)| n == contents.len())
        .map(|(w, _)| w.to_string())
        .collect();
    assert_eq!(common, expected_common);

    let found = find_word_longer_than(&config, 5)?.expect("no word is that short");
    assert!(found.word().as_str().chars().count() > 5);
    assert!(contents[found.filepath()].contains(found.word().as_str()));
    Ok(())
}

#[test]
fn test_queries_are_idempotent() -> Result<()> {
    let dir = tempdir()?;
    create_test_files(
        &dir,
        &[("a.txt", "red green blue"), ("b.txt", "green yellow"), ("c/d.txt", "green red")],
    )?;

    assert_eq!(unique_pairs(dir.path())?, unique_pairs(dir.path())?);
    assert_eq!(common_set(dir.path())?, common_set(dir.path())?);
    Ok(())
}
