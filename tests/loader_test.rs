#[cfg(test)]
mod tests {
    use ped_builder::error::PedigreeError;
    use ped_builder::loader::{family_files, load_family_dir, load_family_file};
    use ped_builder::models::types::{Disease, Sex};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "Relation\tSex\tLiving\tDisease\tAge of Onset\tAge of Death";

    /// Write a family file with the standard header into `dir`
    fn write_family_file(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_family_file() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(
            &dir,
            "F1.txt",
            &[
                "self\tM\tY\t\t\t",
                "father\tM\tN\tHeart Attack\t50\t65",
                "mother\tF\t\t\t\t",
            ],
        );

        let registry = load_family_file(&path).unwrap();
        assert_eq!(registry.group(), "F1");
        assert_eq!(registry.len(), 3);

        let root = registry.get(registry.roots()[0]);
        assert!(root.is_root);
        assert_eq!(root.sex, Sex::Male);
        assert!(root.is_living);
        assert!(root.disease.is_none());

        let father = registry
            .persons()
            .find(|person| person.relationship_to_root == "father")
            .unwrap();
        assert!(!father.is_living);
        assert_eq!(father.disease, Some(Disease::HeartAttack));
        assert_eq!(father.age_onset, Some(50));
        assert_eq!(father.age_death, Some(65));
        assert_eq!(father.generation, 1);

        // A missing living flag means the person is alive
        let mother = registry
            .persons()
            .find(|person| person.relationship_to_root == "mother")
            .unwrap();
        assert!(mother.is_living);
        assert!(mother.age_onset.is_none());
    }

    #[test]
    fn test_load_assigns_distinct_uuids() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(&dir, "F1.txt", &["self\tF\tY\t\t\t", "mate\tM\tY\t\t\t"]);
        let registry = load_family_file(&path).unwrap();
        let ids: Vec<_> = registry.persons().map(|person| person.uuid).collect();
        assert_ne!(ids[0], ids[1]);
        assert!(registry.lookup(&ids[1]).is_some());
    }

    #[test]
    fn test_load_records_twin_marker() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(
            &dir,
            "F1.txt",
            &["self\tM\tY\t\t\t", "sibling 1 identical twin\tM\tY\t\t\t"],
        );
        let registry = load_family_file(&path).unwrap();
        let twin = registry
            .persons()
            .find(|person| person.is_twin)
            .expect("twin marker survives loading");
        assert_eq!(twin.relationship_to_root, "sibling 1 identical twin");
    }

    #[test]
    fn test_load_rejects_bad_sex_code() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(&dir, "F1.txt", &["self\tQ\tY\t\t\t"]);
        let err = load_family_file(&path).unwrap_err();
        assert!(matches!(
            err,
            PedigreeError::InvalidField { field: "sex", ref value } if value == "Q"
        ));
    }

    #[test]
    fn test_load_rejects_unknown_disease() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(&dir, "F1.txt", &["self\tM\tY\tRabies\t\t"]);
        let err = load_family_file(&path).unwrap_err();
        assert!(matches!(
            err,
            PedigreeError::InvalidField { field: "disease", .. }
        ));
    }

    #[test]
    fn test_load_rejects_non_numeric_age() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(&dir, "F1.txt", &["self\tM\tY\t\tforty\t"]);
        let err = load_family_file(&path).unwrap_err();
        assert!(matches!(
            err,
            PedigreeError::InvalidField { field: "age of onset", .. }
        ));
    }

    #[test]
    fn test_parse_failure_aborts_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write_family_file(
            &dir,
            "F1.txt",
            &["self\tM\tY\t\t\t", "paternal uncle\tM\tY\t\t\t"],
        );
        let err = load_family_file(&path).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_family_files_lists_txt_in_order() {
        let dir = TempDir::new().unwrap();
        write_family_file(&dir, "F2.txt", &["self\tM\tY\t\t\t"]);
        write_family_file(&dir, "F1.txt", &["self\tF\tY\t\t\t"]);
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let files = family_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["F1.txt", "F2.txt"]);
    }

    #[test]
    fn test_load_family_dir() {
        let dir = TempDir::new().unwrap();
        write_family_file(&dir, "F1.txt", &["self\tM\tY\t\t\t"]);
        write_family_file(
            &dir,
            "F2.txt",
            &["self\tF\tY\t\t\t", "father\tM\tY\t\t\t"],
        );

        let registries = load_family_dir(dir.path()).unwrap();
        assert_eq!(registries.len(), 2);
        assert_eq!(registries[0].group(), "F1");
        assert_eq!(registries[1].group(), "F2");
        assert_eq!(registries[1].len(), 2);
    }
}
