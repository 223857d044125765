use super::Map;

/// Display names for one product code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductName {
    /// Full descriptive name
    pub long: String,
    /// Abbreviated name for tight layouts
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub short: Option<String>,
}

impl ProductName {
    /// A name with both variants
    pub fn new(long: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: Some(short.into()),
        }
    }
}

/// The single product-code lookup table shared by every report.
///
/// Unknown codes are not an error: they display as the code itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProductCatalog(Map<String, ProductName>);

const STANDARD: &[(&str, &str, &str)] = &[
    ("A", "91 OCTANE w/o 10% ETH", "91 OCT w/o ETH"),
    ("A78", "91 OCT w/o 10% ETH low RVP", "91 OCT low RVP"),
    ("AR", "PREM RBOB 93 OCT w/ 10% ETH", "PREM RBOB 93 OCT"),
    ("A5", "88.5 OCT w/o 10% ETH", "88.5 OCT w/o ETH"),
    ("AMS", "88.5 OCT w/o 10% ETH low RVP", "88.5 OCT low RVP"),
    ("V", "87 OCTANE w/ 10% ETH", "87 OCT w/ ETH"),
    ("V78", "87 OCT w/ 10% ETH low RVP", "87 OCT low RVP"),
    ("V2", "87 OCTANE w/ 10% ETH", "87 OCT w/ ETH v2"),
    ("V3", "86 OCTANE w/ 10% ETH", "86 OCT w/ ETH"),
    ("V3S", "86 OCT w/ 10% ETH low RVP", "86 OCT low RVP"),
    ("NEP", "87 OCT w/o ETH export only", "87 OCT export only"),
    ("NR", "RBOB 87 OCT w/ 10% ETH", "RBOB 87 OCT"),
    ("E", "ETHANOL", "ETHANOL"),
    ("L", "PROPANE", "PROPANE"),
    ("T", "TRANSMIX", "TRANSMIX"),
    ("Q", "COMMERCIAL JET FUEL", "COMMERCIAL JET"),
    ("QSF", "JET A w/ SYNTH HYDROCARBONS", "JET A SYNTH"),
    ("X", "#2 ULSD 15PPM MAX SULFUR", "#2 ULSD 15PPM"),
    ("XHO", "#2 ULSD 15PPM NTDF", "#2 ULSD NTDF"),
    ("Y", "#1 ULSD 15PPM MAX SULFUR", "#1 ULSD 15PPM"),
    ("YM", "#1 ULSD ROCKY MTN", "#1 ULSD ROCKY MTN"),
    ("D", "#2 ULSD PREMIUM DIESEL", "#2 ULSD PREMIUM"),
    ("ZB", "99%/100% METHYL ESTER (BIO)", "99% METHYL ESTER"),
    ("B99", "99% METHYL ESTER (BIO)", "99% BIO"),
    ("JP5", "MILITARY JET FUEL", "MILITARY JET"),
];

impl ProductCatalog {
    /// The built-in fuel product table
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .map(|(code, long, short)| ((*code).to_owned(), ProductName::new(*long, *short)))
            .collect()
    }

    /// Adds or replaces the names for `code`
    pub fn insert(&mut self, code: impl Into<String>, name: ProductName) {
        self.0.insert(code.into(), name);
    }

    /// The full name, falling back to the code itself
    pub fn long_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.0.get(code).map_or(code, |name| name.long.as_str())
    }

    /// The abbreviated name, falling back to the full name and then to the code
    pub fn short_name<'a>(&'a self, code: &'a str) -> &'a str {
        match self.0.get(code) {
            Some(ProductName {
                short: Some(short), ..
            }) => short.as_str(),
            Some(ProductName { long, .. }) => long.as_str(),
            None => code,
        }
    }

    /// Number of known codes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no codes are known
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<(String, ProductName)> for ProductCatalog {
    fn extend<I: IntoIterator<Item = (String, ProductName)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<(String, ProductName)> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = (String, ProductName)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
