//! Candidate URL generation
//!
//! Pure expansion of the configured URL template over the bounded index
//! space; no side effects and no failure modes.

use crate::models::Candidate;

/// Expand the URL template for one source and index
pub fn expand_template(template: &str, source: &str, index: u32) -> String {
    template
        .replace("{source}", source)
        .replace("{index}", &index.to_string())
}

/// Lazy sequence of candidates for one source, index running 1..=max_index
pub fn for_source<'a>(
    template: &'a str,
    source: &'a str,
    max_index: u32,
) -> impl Iterator<Item = Candidate> + 'a {
    (1..=max_index).map(move |index| Candidate {
        source: source.to_string(),
        index,
        url: expand_template(template, source, index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "https://{source}/nfs/premium{index}/mono.m3u8";

    #[test]
    fn test_template_expansion() {
        assert_eq!(
            expand_template(TEMPLATE, "example.test", 7),
            "https://example.test/nfs/premium7/mono.m3u8"
        );
    }

    #[test]
    fn test_for_source_bounds() {
        let candidates: Vec<Candidate> = for_source(TEMPLATE, "example.test", 3).collect();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].index, 1);
        assert_eq!(candidates[2].index, 3);
        assert_eq!(
            candidates[2].url,
            "https://example.test/nfs/premium3/mono.m3u8"
        );
        assert!(candidates.iter().all(|c| c.source == "example.test"));
    }
}
