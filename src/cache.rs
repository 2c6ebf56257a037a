use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry {
    pub member: String,
    pub names: Vec<String>,
}

pub type Cache = HashMap<String, CacheEntry>;

pub fn load_cache(cache_path: &Path) -> Cache {
    if cache_path.exists() {
        let content = fs::read_to_string(cache_path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        HashMap::new()
    }
}

pub fn save_cache(cache_path: &Path, cache: &Cache) {
    let json = serde_json::to_string_pretty(cache).unwrap();
    fs::write(cache_path, json).unwrap_or_else(|e| {
        use colored::*;
        eprintln!("{} Failed to save cache: {}", "⚠️".yellow(), e);
    });
}

/// Cache key for one member under one root. Roots can be long URLs or
/// absolute paths, so the key is a digest rather than the raw pair.
pub fn cache_key(root: &str, member: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(root.as_bytes());
    hasher.update([0u8]);
    hasher.update(member.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jpn-cache.json");

        let mut cache = Cache::new();
        cache.insert(
            cache_key("/docs/api", "com.example.Foo#run(int)"),
            CacheEntry {
                member: "com.example.Foo#run(int)".to_string(),
                names: vec!["count".to_string()],
            },
        );
        save_cache(&path, &cache);

        let loaded = load_cache(&path);
        let entry = loaded
            .get(&cache_key("/docs/api", "com.example.Foo#run(int)"))
            .unwrap();
        assert_eq!(entry.names, vec!["count"]);
    }

    #[test]
    fn test_key_distinguishes_roots() {
        let member = "com.example.Foo#run(int)";
        assert_ne!(cache_key("/a", member), cache_key("/b", member));
    }

    #[test]
    fn test_missing_cache_file_is_empty() {
        let cache = load_cache(Path::new("/no/such/jpn-cache.json"));
        assert!(cache.is_empty());
    }
}
