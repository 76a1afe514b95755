//! Endpoint definitions for the Chemical Identifier Resolver service.
//!
//! CIR exposes one GET route per structure representation; the chemical name
//! is a percent-encoded path segment, never a query parameter.

use url::Url;

/// Base URL of the public CIR instance operated by NCI/CADD.
pub const DEFAULT_ENDPOINT: &str = "https://cactus.nci.nih.gov";

/// Identifier value standing in for "the service did not resolve this name".
pub const NOT_FOUND_SENTINEL: &str = "0";

/// Synonym text shown when the lookup failed outright.
pub const NO_NAMES_MESSAGE: &str = "No other names found";

/// Separator used when flattening a synonym list for display.
pub const SYNONYM_SEPARATOR: &str = " -> ";

/// The URL serving the canonical SMILES for `name`.
pub fn smiles_url(endpoint: &Url, name: &str) -> Url {
    representation_url(endpoint, name, "smiles")
}

/// The URL serving the newline-separated synonym list for `name`.
pub fn names_url(endpoint: &Url, name: &str) -> Url {
    representation_url(endpoint, name, "names")
}

fn representation_url(endpoint: &Url, name: &str, representation: &str) -> Url {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .expect("endpoint validated as a base URL at resolver construction")
        .pop_if_empty()
        .extend(["chemical", "structure", name, representation]);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse(DEFAULT_ENDPOINT).unwrap()
    }

    #[test]
    fn test_plain_name_path() {
        let url = smiles_url(&endpoint(), "water");
        assert_eq!(url.path(), "/chemical/structure/water/smiles");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = names_url(&endpoint(), "acetic acid");
        assert_eq!(url.path(), "/chemical/structure/acetic%20acid/names");

        let url = smiles_url(&endpoint(), "n/a");
        assert_eq!(url.path(), "/chemical/structure/n%2Fa/smiles");
    }

    #[test]
    fn test_encoded_segment_round_trips() {
        let name = "2-(4-isobutylphenyl)/propanoic acid";
        let url = smiles_url(&endpoint(), name);
        let segment = url.path_segments().unwrap().nth(2).unwrap().to_string();
        let decoded = percent_encoding::percent_decode_str(&segment)
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, name);
    }

    #[test]
    fn test_empty_name_still_forms_a_url() {
        let url = smiles_url(&endpoint(), "");
        assert_eq!(url.path(), "/chemical/structure//smiles");
    }
}
