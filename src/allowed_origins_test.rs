use super::*;

fn config(
    frontend: Option<&str>,
    admin: Option<&str>,
    cors_origins: Option<&str>,
) -> OriginConfig {
    OriginConfig {
        frontend_url: frontend.map(str::to_string),
        admin_url: admin.map(str::to_string),
        cors_origins: cors_origins.map(str::to_string),
    }
}

fn entries(set: &AllowedOriginSet) -> Vec<&str> {
    set.iter().collect()
}

mod from_config {
    use super::*;

    #[test]
    fn should_contain_only_defaults_when_unconfigured() {
        // Arrange & Act
        let set = AllowedOriginSet::from_config(&OriginConfig::default());

        // Assert
        assert_eq!(
            entries(&set),
            vec![
                "https://foodie-frenzy-frontend-eone.onrender.com",
                "https://foodie-frenzy-admin.onrender.com",
                "http://localhost:5173",
                "http://127.0.0.1:5173",
                "http://localhost:4173",
            ]
        );
    }

    #[test]
    fn should_order_frontend_admin_list_then_defaults() {
        // Arrange
        let config = config(
            Some("https://shop.example"),
            Some("https://admin.example"),
            Some("https://a.com, https://b.com"),
        );

        // Act
        let set = AllowedOriginSet::from_config(&config);

        // Assert
        let all = entries(&set);
        assert_eq!(
            &all[..4],
            &[
                "https://shop.example",
                "https://admin.example",
                "https://a.com",
                "https://b.com",
            ]
        );
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn should_keep_duplicates_and_malformed_entries() {
        // Arrange
        let config = config(
            Some("http://localhost:5173"),
            None,
            Some("not a url,http://localhost:5173"),
        );

        // Act
        let set = AllowedOriginSet::from_config(&config);

        // Assert
        let all = entries(&set);
        assert_eq!(&all[..3], &["http://localhost:5173", "not a url", "http://localhost:5173"]);
        assert_eq!(
            all.iter()
                .filter(|entry| **entry == "http://localhost:5173")
                .count(),
            3
        );
    }
}

mod assemble {
    use super::*;

    #[test]
    fn should_be_empty_when_inputs_and_defaults_empty() {
        // Arrange
        let config = config(Some(""), None, Some(""));

        // Act
        let set = AllowedOriginSet::assemble(&config, Vec::<String>::new(), Vec::<String>::new());

        // Assert
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn should_trim_and_drop_blank_list_entries() {
        // Arrange
        let config = config(None, None, Some(" https://a.com ,, ,https://b.com"));

        // Act
        let set = AllowedOriginSet::assemble(&config, Vec::<String>::new(), Vec::<String>::new());

        // Assert
        assert_eq!(entries(&set), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn should_not_trim_single_origin_values() {
        // Arrange
        let config = config(Some(" https://shop.example"), None, None);

        // Act
        let set = AllowedOriginSet::assemble(&config, Vec::<String>::new(), Vec::<String>::new());

        // Assert
        assert!(set.contains(" https://shop.example"));
        assert!(!set.contains("https://shop.example"));
    }
}

mod contains {
    use super::*;

    #[test]
    fn should_match_exact_strings_only() {
        // Arrange
        let set: AllowedOriginSet = ["https://a.com"].into_iter().collect();

        // Act & Assert
        assert!(set.contains("https://a.com"));
        assert!(!set.contains("https://a.com/"));
        assert!(!set.contains("https://A.com"));
        assert!(!set.contains("http://a.com"));
        assert!(!set.contains("https://a.com:443"));
    }
}

mod split_origin_list {
    use super::*;

    #[test]
    fn should_trim_each_entry() {
        // Arrange & Act
        let entries = split_origin_list("https://a.com, https://b.com");

        // Assert
        assert_eq!(entries, vec!["https://a.com", "https://b.com"]);
    }
}
