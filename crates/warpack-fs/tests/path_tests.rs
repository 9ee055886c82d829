use proptest::prelude::*;
use tempfile::TempDir;
use warpack_fs::NormalizedPath;

#[test]
fn canonical_key_matches_for_equivalent_spellings() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("nested");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("essentials.yml"), "packaging: {}\n").unwrap();

    let direct = NormalizedPath::new(nested.join("essentials.yml"));
    let dotted = NormalizedPath::new(temp.path()).join("nested/../nested/essentials.yml");

    assert_eq!(direct.canonical_key(), dotted.canonical_key());
}

#[test]
fn extension_ignores_dotfiles() {
    assert_eq!(NormalizedPath::new("/work/.packager").extension(), None);
    assert_eq!(NormalizedPath::new("/work/custom-war-1.0.bom.yml").extension(), Some("yml"));
}

proptest! {
    #[test]
    fn join_never_produces_double_slashes(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}/?",
        segment in "/?[a-z]{1,8}(/[a-z]{1,8}){0,2}",
    ) {
        let joined = NormalizedPath::new(&base).join(&segment);
        prop_assert!(!joined.as_str().contains("//"));
    }
}
