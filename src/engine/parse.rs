pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_segments() {
        assert_eq!(
            parse_ingredients("  Limonene , ,Water,,  "),
            vec!["Limonene", "Water"]
        );
    }

    #[test]
    fn parse_keeps_duplicates_in_input_order() {
        assert_eq!(
            parse_ingredients("limonene, Water, Limonene"),
            vec!["limonene", "Water", "Limonene"]
        );
    }

    #[test]
    fn parse_of_blank_input_is_empty() {
        assert!(parse_ingredients("").is_empty());
        assert!(parse_ingredients(" ,  , ").is_empty());
    }
}
